//! Error types for logview
//!
//! Uses `thiserror` for library errors. The core walk and converter never
//! return these; they recover locally. Errors surface only from
//! configuration, path resolution and the serving layer.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for logview operations
pub type LogviewResult<T> = Result<T, LogviewError>;

/// Main error type for logview operations
#[derive(Error, Debug)]
pub enum LogviewError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Read through the FileSystem port failed
    #[error(transparent)]
    Fs(#[from] crate::domain::ports::FsError),

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// Severity order is not a permutation of all statuses
    #[error("invalid severity order: {reason}")]
    InvalidSeverityOrder { reason: String },

    /// Exclude pattern rejected by the gitignore parser
    #[error("invalid exclude pattern '{pattern}': {message}")]
    InvalidExcludePattern { pattern: String, message: String },

    /// Log root does not exist or is not a directory
    #[error("log directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Requested path resolves outside the log root
    #[error("path '{path}' escapes log root '{root}'")]
    PathEscape { path: PathBuf, root: PathBuf },

    /// Requested path is not a regular file
    #[error("not a file: {path}")]
    NotAFile { path: PathBuf },

    /// HTTP server could not start
    #[error("server error: {message}")]
    Server { message: String },
}
