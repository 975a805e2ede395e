//! HTML rendering for the browser view
//!
//! The sidebar is a nested `<ul>` mirroring the log tree. Files get a
//! colored dot, folders a colored collapse triangle; the bundled script
//! wires up toggling, search and content loading.

use crate::domain::entities::{DirectoryNode, FileNode, TreeNode};
use crate::domain::services::escape_html;

const CIRCLE: &str = "&#11044;";
const TRIANGLE_RIGHT: &str = "&#9654;";

/// Script URL, versioned so browsers drop stale copies after upgrades.
pub fn script_url() -> String {
    format!("/static/script.js?v={}", env!("CARGO_PKG_VERSION"))
}

/// Renders the sidebar fragment served at `/get_sidebar`.
#[derive(Debug, Clone)]
pub struct SidebarRenderer {
    title: String,
    session: String,
}

impl SidebarRenderer {
    /// `session` prefixes folder ids; keep it fixed for the life of the
    /// server so the browser's saved folder state keeps matching.
    pub fn new(title: impl Into<String>, session: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            session: session.into(),
        }
    }

    /// Session token derived from the current local time.
    pub fn session_now() -> String {
        chrono::Local::now().format("%Y%m%dT%H%M%S%.6f").to_string()
    }

    pub fn render(&self, tree: &DirectoryNode) -> String {
        let mut out = String::new();
        out.push_str(&format!("<h2>{}</h2>\n", escape_html(&self.title)));
        out.push_str("<input type=\"text\" id=\"search\" placeholder=\"Search files...\">\n");
        self.render_list(&tree.children, &mut out);
        out
    }

    fn render_list(&self, children: &[TreeNode], out: &mut String) {
        out.push_str("<ul>");
        for child in children {
            match child {
                TreeNode::File(file) => self.render_file(file, out),
                TreeNode::Directory(dir) => self.render_dir(dir, out),
            }
        }
        out.push_str("</ul>");
    }

    fn render_file(&self, file: &FileNode, out: &mut String) {
        out.push_str(&format!(
            "<li><a href=\"#\" class=\"file-link\" data-path=\"{}\"><span style=\"color:{};\">{}</span> {}</a></li>",
            escape_html(&file.relative_path),
            file.status.color(),
            CIRCLE,
            escape_html(&file.name),
        ));
    }

    fn render_dir(&self, dir: &DirectoryNode, out: &mut String) {
        let id = format!("{}:{}", self.session, dir.relative_path);
        out.push_str(&format!(
            "<li class=\"folder\" data-path=\"{}\"><span class=\"toggle\"><span id=\"triangle\" style=\"color:{};\">{}</span><span> {}</span></span>",
            escape_html(&id),
            dir.status.color(),
            TRIANGLE_RIGHT,
            escape_html(&dir.name),
        ));
        self.render_list(&dir.children, out);
        out.push_str("</li>");
    }
}

/// Full page: sidebar plus an empty content pane the script fills in.
pub fn render_page(sidebar_html: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>File Viewer</title>
    <link rel="stylesheet" type="text/css" href="/static/style.css">
    <script src="{script}" defer></script>
</head>
<body>
    <div class="sidebar">
{sidebar}
    </div>
    <div class="content">
        <h2 id="file-title">Select a file</h2>
        <pre id="file-content">Click on a file to view its content.</pre>
    </div>
</body>
</html>
"#,
        script = script_url(),
        sidebar = sidebar_html,
    )
}
