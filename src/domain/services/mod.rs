//! Domain Services
//!
//! Pure business logic. The aggregator reaches the disk only through the
//! `FileSystem` port.

mod aggregator;
mod ansi;
mod classifier;

pub use aggregator::TreeAggregator;
pub use ansi::{ansi_to_html, css_for_code, escape_html, AnsiConverter};
pub use classifier::StatusClassifier;
