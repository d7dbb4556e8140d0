//! Data models.

pub mod file_tree;
pub mod seed;

pub use file_tree::{
    derive_id, validate_name, FileTree, FileTreeError, FileTreeRow, Node, NodeId, NodeKind,
    NodeRef, ID_SEPARATOR, ROOT_ID,
};
pub use seed::{seed_snapshot, seed_tree, try_seed_tree};
