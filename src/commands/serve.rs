use std::sync::Arc;

use anyhow::{Context, Result};
use logview::infrastructure::{browse_url, open_in_browser};
use logview::presentation::http::bind;
use logview::presentation::{create_log_browser, LogServer, SidebarRenderer};
use logview::Config;

pub fn cmd_serve(config: &Config) -> Result<()> {
    let browser = create_log_browser(config)?;
    super::ensure_log_root(browser.root())?;

    let server = Arc::new(bind(&config.server.address())?);
    let port = server
        .server_addr()
        .to_ip()
        .map(|addr| addr.port())
        .unwrap_or(config.server.port);

    let stopper = Arc::clone(&server);
    ctrlc::set_handler(move || stopper.unblock()).context("failed to set Ctrl+C handler")?;

    let url = browse_url(&config.server.bind, port);
    println!("Serving {} at {}", browser.root().display(), url);
    println!("Press Ctrl+C to stop.");

    if config.server.open_browser {
        if let Err(err) = open_in_browser(&url) {
            log::warn!("could not open browser: {err}");
        }
    }

    let sidebar = SidebarRenderer::new(config.logs.title.clone(), SidebarRenderer::session_now());
    LogServer::new(browser, sidebar).serve(&server);
    Ok(())
}
