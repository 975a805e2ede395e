//! ANSI to HTML Domain Service
//!
//! Turns SGR color/style escape sequences in log text into `<span>` markup
//! for display inside a `<pre>` block.
//!
//! Two introducers are recognised: the ESC control character and the
//! literal six-character text `\u001b`, which is what logs contain when
//! terminal output was captured through a JSON encoder.
//!
//! Spans are not balanced or validated. A reset closes whatever is open;
//! malformed input produces malformed markup, never an error.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Style-opening sequence. The first parameter must not start with `0`,
/// so a reset is never mistaken for an opening tag.
static SGR_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\x1b|\\u001b)\[([1-9][0-9]*(?:;[0-9]+)*)m").expect("valid regex")
});

/// Reset sequence.
static SGR_RESET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\x1b|\\u001b)\[0m").expect("valid regex"));

/// CSS declaration for one SGR parameter, if supported.
pub fn css_for_code(code: &str) -> Option<&'static str> {
    let css = match code {
        "30" => "color: black;",
        "31" => "color: red;",
        "32" => "color: green;",
        "33" => "color: yellow;",
        "34" => "color: blue;",
        "35" => "color: magenta;",
        "36" => "color: cyan;",
        "37" => "color: white;",
        "90" => "color: gray;",
        "91" => "color: lightcoral;",
        "92" => "color: lightgreen;",
        "93" => "color: lightyellow;",
        "94" => "color: lightblue;",
        "95" => "color: lightpink;",
        "96" => "color: lightcyan;",
        "97" => "color: white;",
        "1" => "font-weight: bold;",
        "4" => "text-decoration: underline;",
        _ => return None,
    };
    Some(css)
}

/// Escape the characters HTML treats specially.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Converts ANSI-styled text to HTML.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiConverter {
    escape_html: bool,
}

impl AnsiConverter {
    /// Converter that passes log text through verbatim.
    pub fn new() -> Self {
        Self::default()
    }

    /// Escape `& < > " '` in the log text before inserting markup.
    pub fn with_html_escaping(mut self, escape: bool) -> Self {
        self.escape_html = escape;
        self
    }

    pub fn escapes_html(&self) -> bool {
        self.escape_html
    }

    /// Replace opening sequences with `<span style="…">` and resets with `</span>`.
    pub fn convert(&self, text: &str) -> String {
        let escaped;
        let source = if self.escape_html {
            escaped = escape_html(text);
            escaped.as_str()
        } else {
            text
        };

        let opened = SGR_OPEN.replace_all(source, |caps: &Captures| {
            let styles: Vec<&str> = caps[1].split(';').filter_map(css_for_code).collect();
            format!("<span style=\"{}\">", styles.join(" "))
        });

        SGR_RESET.replace_all(&opened, "</span>").into_owned()
    }
}

/// Convert with default settings (no HTML escaping).
pub fn ansi_to_html(text: &str) -> String {
    AnsiConverter::new().convert(text)
}
