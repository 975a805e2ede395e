//! HTTP serving
//!
//! `router` decides what a URL means, `server` turns that into responses
//! over `tiny_http`, `assets` holds the embedded script and stylesheet.

mod assets;
pub mod router;
mod server;

pub use router::{route, Route, StaticAsset};
pub use server::{bind, HttpResponse, LogServer};
