use anyhow::Result;
use logview::presentation::create_log_browser;
use logview::Config;

use crate::ui::terminal::detect_capabilities;
use crate::ui::views::tree::render_tree;

pub fn cmd_tree(config: &Config, json: bool) -> Result<()> {
    let browser = create_log_browser(config)?;
    super::ensure_log_root(browser.root())?;

    let tree = browser.tree();
    if json {
        println!("{}", serde_json::to_string_pretty(&tree)?);
    } else {
        let caps = detect_capabilities();
        print!(
            "{}",
            render_tree(&tree, caps.supports_color, caps.supports_unicode)
        );
    }
    Ok(())
}
