//! Service adapters: OS specific implementations.

pub mod dirs;
pub mod settings;

pub use dirs::{ensure_log_dir, get_log_dir};
pub use settings::{
    ensure_settings_file, ensure_settings_file_at, get_settings_path, load_settings,
    load_settings_from,
};
