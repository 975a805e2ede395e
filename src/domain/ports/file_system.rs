//! FileSystem port - read-only abstraction over the log tree
//!
//! The aggregator and content service only ever list, inspect and read.
//! Implementations: `LocalFs` for disk, an in-memory mock in tests.

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// Content is not valid UTF-8
    InvalidUtf8(PathBuf),
    /// I/O error
    Io(std::io::Error),
}

impl FsError {
    /// Wrap an `io::Error`, keeping the offending path where it matters.
    pub fn from_io(err: std::io::Error, path: &Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            std::io::ErrorKind::InvalidData => FsError::InvalidUtf8(path.to_path_buf()),
            _ => FsError::Io(err),
        }
    }
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        FsError::from_io(err, Path::new(""))
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::InvalidUtf8(path) => write!(f, "Not valid UTF-8: {}", path.display()),
            FsError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for FsError {}

/// What a directory entry is, without following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Symlink,
    /// Sockets, devices, or entries that vanished
    Other,
}

/// Read-only file system interface
pub trait FileSystem {
    /// Names of the immediate children of `path`, in no particular order.
    fn list_entries(&self, path: &Path) -> FsResult<Vec<String>>;

    /// Kind of the entry at `path`.
    fn entry_kind(&self, path: &Path) -> EntryKind;

    /// Read file content as UTF-8 text.
    fn read_text(&self, path: &Path) -> FsResult<String>;

    /// Check if `path` is a directory.
    fn is_dir(&self, path: &Path) -> bool {
        self.entry_kind(path) == EntryKind::Directory
    }

    /// Check if `path` is a regular file.
    fn is_file(&self, path: &Path) -> bool {
        self.entry_kind(path) == EntryKind::File
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fs_error_display() {
        let err = FsError::NotFound(PathBuf::from("run.txt"));
        assert!(err.to_string().contains("run.txt"));
    }

    #[test]
    fn fs_error_from_io_keeps_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let fs_err = FsError::from_io(io_err, Path::new("locked.txt"));
        assert!(matches!(fs_err, FsError::PermissionDenied(p) if p == Path::new("locked.txt")));
    }

    #[test]
    fn invalid_data_maps_to_invalid_utf8() {
        let io_err = std::io::Error::new(std::io::ErrorKind::InvalidData, "stream did not contain valid UTF-8");
        let fs_err: FsError = io_err.into();
        assert!(matches!(fs_err, FsError::InvalidUtf8(_)));
    }
}
