//! treeshell - headless core of a three-pane code editor shell.
//!
//! Modules:
//! - models: file tree data model (FileTree, Node, seed workspace)
//! - kernel: session store, actions/effects, status bar, settings

pub mod kernel;
pub mod models;
