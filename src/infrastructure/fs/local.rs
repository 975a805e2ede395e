//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk reads.

use crate::domain::ports::file_system::{EntryKind, FileSystem, FsError, FsResult};
use std::path::{Path, PathBuf};

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn list_entries(&self, path: &Path) -> FsResult<Vec<String>> {
        let read_dir = std::fs::read_dir(path).map_err(|e| FsError::from_io(e, path))?;

        let mut names = Vec::new();
        for entry in read_dir {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::debug!("skipping unreadable entry in {}: {}", path.display(), e);
                    continue;
                }
            };
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => {
                    log::debug!("skipping non UTF-8 name {:?} in {}", raw, path.display());
                }
            }
        }
        Ok(names)
    }

    fn entry_kind(&self, path: &Path) -> EntryKind {
        match std::fs::symlink_metadata(path) {
            Ok(meta) if meta.file_type().is_file() => EntryKind::File,
            Ok(meta) if meta.file_type().is_dir() => EntryKind::Directory,
            Ok(meta) if meta.file_type().is_symlink() => EntryKind::Symlink,
            _ => EntryKind::Other,
        }
    }

    fn read_text(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| FsError::from_io(e, path))
    }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_home(path: &Path) -> PathBuf {
    let Some(home) = dirs::home_dir() else {
        return path.to_path_buf();
    };

    match path.strip_prefix("~") {
        Ok(rest) => home.join(rest),
        Err(_) => path.to_path_buf(),
    }
}
