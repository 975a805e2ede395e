//! TreeNode entity - one file or directory of the log tree
//!
//! Nodes are rebuilt from the filesystem on every request; a directory's
//! status is always derived from its children, never assigned.

use serde::Serialize;

use crate::domain::value_objects::Status;

/// A classified log file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileNode {
    pub name: String,
    /// Path relative to the log root, `/`-separated
    pub relative_path: String,
    pub status: Status,
}

/// A directory with its aggregated status
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryNode {
    pub name: String,
    /// Path relative to the log root, `/`-separated; empty for the root
    pub relative_path: String,
    pub status: Status,
    /// Sorted by name, files and directories interleaved
    pub children: Vec<TreeNode>,
}

/// Either kind of node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TreeNode {
    File(FileNode),
    Directory(DirectoryNode),
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            TreeNode::File(f) => &f.name,
            TreeNode::Directory(d) => &d.name,
        }
    }

    pub fn relative_path(&self) -> &str {
        match self {
            TreeNode::File(f) => &f.relative_path,
            TreeNode::Directory(d) => &d.relative_path,
        }
    }

    pub fn status(&self) -> Status {
        match self {
            TreeNode::File(f) => f.status,
            TreeNode::Directory(d) => d.status,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Directory(_))
    }
}

impl DirectoryNode {
    /// Number of files in this subtree
    pub fn file_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| match child {
                TreeNode::File(_) => 1,
                TreeNode::Directory(d) => d.file_count(),
            })
            .sum()
    }

    /// Find a node by its relative path.
    pub fn find(&self, relative_path: &str) -> Option<&TreeNode> {
        for child in &self.children {
            if child.relative_path() == relative_path {
                return Some(child);
            }
            if let TreeNode::Directory(d) = child {
                let prefix = format!("{}/", d.relative_path);
                if relative_path.starts_with(&prefix) {
                    return d.find(relative_path);
                }
            }
        }
        None
    }
}
