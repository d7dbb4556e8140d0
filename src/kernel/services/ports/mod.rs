//! Service ports: data contracts shared across the kernel.

pub mod settings;

pub use settings::{ExplorerSettings, Settings};
