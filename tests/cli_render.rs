mod common;

use common::TestEnv;

#[test]
fn render_converts_ansi_to_spans() {
    let env = TestEnv::new();
    env.write_log("run.txt", "\u{1b}[1;31mERROR\u{1b}[0m done");

    let result = env.run(&["render", "logs/run.txt"]);
    assert!(result.success, "stderr:\n{}", result.stderr);
    assert_eq!(
        result.stdout,
        "<span style=\"font-weight: bold; color: red;\">ERROR</span> done"
    );
}

#[test]
fn render_passes_html_through_by_default() {
    let env = TestEnv::new();
    env.write_log("run.txt", "<b>bold</b>");

    let result = env.run(&["render", "logs/run.txt"]);
    assert_eq!(result.stdout, "<b>bold</b>");
}

#[test]
fn render_escape_flag_escapes_html() {
    let env = TestEnv::new();
    env.write_log("run.txt", "a < b & c");

    let result = env.run(&["render", "logs/run.txt", "--escape-html"]);
    assert_eq!(result.stdout, "a &lt; b &amp; c");
}

#[test]
fn render_escape_from_config() {
    let env = TestEnv::new();
    env.write_config("[render]\nescape_html = true\n");
    env.write_log("run.txt", "<i>");

    let result = env.run(&["render", "logs/run.txt"]);
    assert_eq!(result.stdout, "&lt;i&gt;");
}

#[test]
fn render_missing_file_fails() {
    let env = TestEnv::new();
    let result = env.run(&["render", "logs/nope.txt"]);
    assert!(!result.success);
    assert!(result.stderr.contains("failed to read"), "stderr:\n{}", result.stderr);
}
