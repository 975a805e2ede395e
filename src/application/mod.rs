//! Application Layer
//!
//! Use cases that orchestrate domain services for the CLI and HTTP server.

pub mod log_browser;

pub use log_browser::LogBrowser;
