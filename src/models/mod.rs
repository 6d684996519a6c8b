//! Data models.

pub mod hierarchy_tree;

pub use hierarchy_tree::{HierarchySnapshot, HierarchyTree, NodeId, TreeError};
