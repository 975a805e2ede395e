//! Tree Aggregator Domain Service
//!
//! Walks the log directory depth-first, classifies every file, and rolls
//! the statuses up so each directory carries the most dominant status
//! found beneath it.
//!
//! The walk never fails: unreadable files classify as `Unknown`,
//! unreadable directories come back empty, and symlinks or special files
//! are skipped.

use std::path::Path;

use crate::domain::entities::{DirectoryNode, FileNode, TreeNode};
use crate::domain::ports::{EntryKind, FileSystem};
use crate::domain::value_objects::{ExcludePatterns, SeverityOrder};

use super::StatusClassifier;

/// Builds a status-annotated tree of a log directory.
pub struct TreeAggregator<FS>
where
    FS: FileSystem,
{
    file_system: FS,
    classifier: StatusClassifier,
    order: SeverityOrder,
    excludes: ExcludePatterns,
}

impl<FS> TreeAggregator<FS>
where
    FS: FileSystem,
{
    pub fn new(file_system: FS, classifier: StatusClassifier, order: SeverityOrder) -> Self {
        Self {
            file_system,
            classifier,
            order,
            excludes: ExcludePatterns::empty(),
        }
    }

    /// Skip entries matching `excludes` (relative to the walked root).
    pub fn with_excludes(mut self, excludes: ExcludePatterns) -> Self {
        self.excludes = excludes;
        self
    }

    /// Walk `root` and return its aggregated tree.
    pub fn build_tree(&self, root: &Path) -> DirectoryNode {
        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| root.display().to_string());
        self.build_dir(root, name, String::new())
    }

    pub fn file_system(&self) -> &FS {
        &self.file_system
    }

    pub fn order(&self) -> &SeverityOrder {
        &self.order
    }

    fn build_dir(&self, path: &Path, name: String, relative_path: String) -> DirectoryNode {
        let mut entries = match self.file_system.list_entries(path) {
            Ok(entries) => entries,
            Err(e) => {
                log::debug!("treating {} as empty: {}", path.display(), e);
                Vec::new()
            }
        };
        entries.sort();

        let mut children = Vec::with_capacity(entries.len());
        for entry in entries {
            let full_path = path.join(&entry);
            let child_relative = if relative_path.is_empty() {
                entry.clone()
            } else {
                format!("{}/{}", relative_path, entry)
            };

            let kind = self.file_system.entry_kind(&full_path);
            if self
                .excludes
                .is_excluded(Path::new(&child_relative), kind == EntryKind::Directory)
            {
                log::trace!("excluded {}", child_relative);
                continue;
            }

            match kind {
                EntryKind::File => {
                    let status = self.classifier.classify_path(&self.file_system, &full_path);
                    children.push(TreeNode::File(FileNode {
                        name: entry,
                        relative_path: child_relative,
                        status,
                    }));
                }
                EntryKind::Directory => {
                    let subtree = self.build_dir(&full_path, entry, child_relative);
                    children.push(TreeNode::Directory(subtree));
                }
                EntryKind::Symlink | EntryKind::Other => {
                    log::debug!("skipping {}: not a regular file or directory", full_path.display());
                }
            }
        }

        let status = self.order.most_dominant(children.iter().map(TreeNode::status));

        DirectoryNode {
            name,
            relative_path,
            status,
            children,
        }
    }
}
