//! Domain Entities
//!
//! - `TreeNode` - a classified file or an aggregated directory

mod tree_node;

pub use tree_node::{DirectoryNode, FileNode, TreeNode};
