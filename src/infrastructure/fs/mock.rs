//! In-memory FileSystem for tests.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::ports::file_system::{EntryKind, FileSystem, FsError, FsResult};

#[derive(Debug, Clone)]
enum MockEntry {
    File(String),
    UnreadableFile,
    Dir,
    UnreadableDir,
    Symlink,
}

/// Mock file system built from absolute paths.
///
/// Adding an entry creates its parent directories.
#[derive(Debug, Clone, Default)]
pub struct MockFs {
    entries: BTreeMap<PathBuf, MockEntry>,
}

impl MockFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl AsRef<Path>, content: &str) -> Self {
        self.with_entry(path.as_ref(), MockEntry::File(content.to_string()))
    }

    pub fn with_unreadable_file(self, path: impl AsRef<Path>) -> Self {
        self.with_entry(path.as_ref(), MockEntry::UnreadableFile)
    }

    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        self.with_entry(path.as_ref(), MockEntry::Dir)
    }

    pub fn with_unreadable_dir(self, path: impl AsRef<Path>) -> Self {
        self.with_entry(path.as_ref(), MockEntry::UnreadableDir)
    }

    pub fn with_symlink(self, path: impl AsRef<Path>) -> Self {
        self.with_entry(path.as_ref(), MockEntry::Symlink)
    }

    fn with_entry(mut self, path: &Path, entry: MockEntry) -> Self {
        for ancestor in path.ancestors().skip(1) {
            if ancestor.parent().is_none() {
                break;
            }
            self.entries
                .entry(ancestor.to_path_buf())
                .or_insert(MockEntry::Dir);
        }
        self.entries.insert(path.to_path_buf(), entry);
        self
    }
}

impl FileSystem for MockFs {
    fn list_entries(&self, path: &Path) -> FsResult<Vec<String>> {
        match self.entries.get(path) {
            Some(MockEntry::Dir) => Ok(self
                .entries
                .keys()
                .filter(|p| p.parent() == Some(path))
                .filter_map(|p| p.file_name())
                .map(|n| n.to_string_lossy().to_string())
                .collect()),
            Some(MockEntry::UnreadableDir) => Err(FsError::PermissionDenied(path.to_path_buf())),
            _ => Err(FsError::NotFound(path.to_path_buf())),
        }
    }

    fn entry_kind(&self, path: &Path) -> EntryKind {
        match self.entries.get(path) {
            Some(MockEntry::File(_)) | Some(MockEntry::UnreadableFile) => EntryKind::File,
            Some(MockEntry::Dir) | Some(MockEntry::UnreadableDir) => EntryKind::Directory,
            Some(MockEntry::Symlink) => EntryKind::Symlink,
            None => EntryKind::Other,
        }
    }

    fn read_text(&self, path: &Path) -> FsResult<String> {
        match self.entries.get(path) {
            Some(MockEntry::File(content)) => Ok(content.clone()),
            Some(MockEntry::UnreadableFile) => Err(FsError::PermissionDenied(path.to_path_buf())),
            _ => Err(FsError::NotFound(path.to_path_buf())),
        }
    }
}
