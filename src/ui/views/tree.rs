use crossterm::style::Stylize;
use logview::{DirectoryNode, TreeNode};

use crate::ui::theme::{icons, icons_ascii, status_color};

struct Glyphs {
    file: &'static str,
    folder: &'static str,
    branch: &'static str,
    last_branch: &'static str,
    pipe: &'static str,
    space: &'static str,
}

const UNICODE: Glyphs = Glyphs {
    file: icons::FILE,
    folder: icons::FOLDER,
    branch: icons::BRANCH,
    last_branch: icons::LAST_BRANCH,
    pipe: icons::PIPE,
    space: icons::SPACE,
};

const ASCII: Glyphs = Glyphs {
    file: icons_ascii::FILE,
    folder: icons_ascii::FOLDER,
    branch: icons_ascii::BRANCH,
    last_branch: icons_ascii::LAST_BRANCH,
    pipe: icons_ascii::PIPE,
    space: icons_ascii::SPACE,
};

/// Render the status tree as indented text, one node per line.
///
/// Without color the status name follows each entry so nothing is lost.
pub fn render_tree(tree: &DirectoryNode, supports_color: bool, supports_unicode: bool) -> String {
    let glyphs = if supports_unicode { &UNICODE } else { &ASCII };
    let mut out = String::new();
    out.push_str(&label(
        glyphs.folder,
        &tree.name,
        tree.status,
        supports_color,
    ));
    out.push('\n');
    render_children(&tree.children, "", glyphs, supports_color, &mut out);
    out
}

fn render_children(
    children: &[TreeNode],
    prefix: &str,
    glyphs: &Glyphs,
    supports_color: bool,
    out: &mut String,
) {
    for (i, child) in children.iter().enumerate() {
        let last = i + 1 == children.len();
        out.push_str(prefix);
        out.push_str(if last { glyphs.last_branch } else { glyphs.branch });

        let marker = if child.is_dir() { glyphs.folder } else { glyphs.file };
        out.push_str(&label(marker, child.name(), child.status(), supports_color));
        out.push('\n');

        if let TreeNode::Directory(dir) = child {
            let nested = format!("{prefix}{}", if last { glyphs.space } else { glyphs.pipe });
            render_children(&dir.children, &nested, glyphs, supports_color, out);
        }
    }
}

fn label(marker: &str, name: &str, status: logview::Status, supports_color: bool) -> String {
    if supports_color {
        format!("{} {}", marker.with(status_color(status)), name)
    } else {
        format!("{marker} {name} [{status}]")
    }
}
