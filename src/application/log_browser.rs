//! Log Browser Use Case
//!
//! What the serving layer and the CLI ask of the core:
//! 1. The aggregated tree of the log root (one full walk per call)
//! 2. One file's content, converted to HTML
//!
//! Every call goes back to the filesystem; nothing is cached.

use std::path::{Component, Path, PathBuf};

use crate::domain::entities::DirectoryNode;
use crate::domain::ports::{EntryKind, FileSystem};
use crate::domain::services::{AnsiConverter, TreeAggregator};
use crate::error::{LogviewError, LogviewResult};

/// Log browser use case, parameterized by its file system port.
pub struct LogBrowser<FS>
where
    FS: FileSystem,
{
    root: PathBuf,
    aggregator: TreeAggregator<FS>,
    converter: AnsiConverter,
}

impl<FS> LogBrowser<FS>
where
    FS: FileSystem,
{
    pub fn new(root: PathBuf, aggregator: TreeAggregator<FS>, converter: AnsiConverter) -> Self {
        Self {
            root,
            aggregator,
            converter,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the log root and aggregate statuses.
    pub fn tree(&self) -> DirectoryNode {
        self.aggregator.build_tree(&self.root)
    }

    /// Map a `/`-separated path relative to the root onto the disk.
    ///
    /// Rejects absolute paths, any `..` component, and any symlink between
    /// the root and the target.
    pub fn resolve(&self, relative: &str) -> LogviewResult<PathBuf> {
        let rel = Path::new(relative);
        let escape = || LogviewError::PathEscape {
            path: rel.to_path_buf(),
            root: self.root.clone(),
        };

        let fs = self.aggregator.file_system();
        let mut path = self.root.clone();
        let mut on_disk = true;
        for component in rel.components() {
            match component {
                Component::Normal(name) => path.push(name),
                Component::CurDir => continue,
                _ => return Err(escape()),
            }
            // Nothing below a file or a missing entry can be a link.
            if on_disk {
                match fs.entry_kind(&path) {
                    EntryKind::Symlink => return Err(escape()),
                    EntryKind::Directory => {}
                    EntryKind::File | EntryKind::Other => on_disk = false,
                }
            }
        }

        Ok(path)
    }

    /// Whether `relative` names a directory under the root.
    pub fn is_directory(&self, relative: &str) -> bool {
        self.resolve(relative)
            .map(|path| self.aggregator.file_system().is_dir(&path))
            .unwrap_or(false)
    }

    /// Read one file and convert its ANSI styling to HTML.
    pub fn file_content(&self, relative: &str) -> LogviewResult<String> {
        let path = self.resolve(relative)?;
        let fs = self.aggregator.file_system();
        if !fs.is_file(&path) {
            return Err(LogviewError::NotAFile { path });
        }

        let raw = fs.read_text(&path)?;
        Ok(self.converter.convert(&raw))
    }
}
