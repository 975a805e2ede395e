//! Domain Layer
//!
//! The core of logview: status classification, tree aggregation and ANSI
//! conversion.
//!
//! ## Structure
//!
//! - `entities/` - The log tree (`TreeNode`, `DirectoryNode`, `FileNode`)
//! - `value_objects/` - `Status`, `SeverityOrder`, `RuleSet`, `ExcludePatterns`
//! - `services/` - `StatusClassifier`, `TreeAggregator`, `AnsiConverter`
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No direct I/O** - Disk access goes through the `FileSystem` port
//! 2. **Local recovery** - Nothing here aborts a render because of one bad file
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
