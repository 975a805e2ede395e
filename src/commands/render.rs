use std::path::Path;

use anyhow::{Context, Result};
use logview::{AnsiConverter, Config};

pub fn cmd_render(config: &Config, file: &Path, escape_html: bool) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let converter =
        AnsiConverter::new().with_html_escaping(escape_html || config.render.escape_html);
    print!("{}", converter.convert(&text));
    Ok(())
}
