//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, plus a test mock)
//! - `browser` - Launching the desktop web browser

pub mod browser;
pub mod fs;

// Re-export for convenience
pub use browser::{browse_url, open_in_browser};
pub use fs::LocalFs;
