//! Desktop browser launcher

use std::io;
use std::process::{Command, Stdio};

/// URL a local browser should use to reach a server bound to `bind:port`.
///
/// Wildcard binds are not routable, so they map to `localhost`.
pub fn browse_url(bind: &str, port: u16) -> String {
    let host = match bind {
        "0.0.0.0" | "::" | "[::]" | "" => "localhost",
        other => other,
    };
    format!("http://{host}:{port}/")
}

/// Open `url` in the platform's default browser without waiting for it.
pub fn open_in_browser(url: &str) -> io::Result<()> {
    opener_command(url)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
}

fn opener_command(url: &str) -> Command {
    if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(url);
        cmd
    } else if cfg!(windows) {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", "", url]);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_bind_maps_to_localhost() {
        assert_eq!(browse_url("0.0.0.0", 8000), "http://localhost:8000/");
        assert_eq!(browse_url("::", 9000), "http://localhost:9000/");
    }

    #[test]
    fn explicit_bind_is_kept() {
        assert_eq!(browse_url("127.0.0.1", 8080), "http://127.0.0.1:8080/");
    }

    #[test]
    fn opener_passes_url_last() {
        let cmd = opener_command("http://localhost:8000/");
        let last = cmd.get_args().last().map(|a| a.to_string_lossy().to_string());
        assert_eq!(last.as_deref(), Some("http://localhost:8000/"));
    }
}
