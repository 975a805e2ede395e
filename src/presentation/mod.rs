//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - HTML rendering of the sidebar and page shell
//! - The HTTP surface the browser polls
//!
//! ## Usage
//!
//! ```ignore
//! use logview::presentation::factory;
//!
//! let browser = factory::create_log_browser(&config)?;
//! let tree = browser.tree();
//! ```

pub mod cli;
pub mod factory;
pub mod html;
pub mod http;

pub use factory::create_log_browser;
pub use html::{render_page, SidebarRenderer};
pub use http::LogServer;
