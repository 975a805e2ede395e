//! Terminal output for the `tree` and `render` commands

pub mod terminal;
pub mod theme;
pub mod views;
