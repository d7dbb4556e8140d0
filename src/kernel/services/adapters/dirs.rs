//! Per-platform application directories.
//!
//! - macOS: ~/Library/Application Support/treeshell
//! - Linux: $XDG_DATA_HOME/treeshell or ~/.local/share/treeshell
//! - Windows: %APPDATA%\treeshell

use std::path::PathBuf;

pub(crate) const APP_NAME: &str = "treeshell";
const LOG_DIR: &str = "logs";

#[derive(Debug, Clone, Copy)]
enum BaseDir {
    Data,
    Cache,
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var_os(key)
        .map(PathBuf::from)
        .filter(|path| path.is_absolute())
}

/// Platform base directory, without the application name.
fn base_dir(kind: BaseDir) -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        let sub = match kind {
            BaseDir::Data => "Library/Application Support",
            BaseDir::Cache => "Library/Caches",
        };
        return env_path("HOME").map(|home| home.join(sub));
    }

    #[cfg(target_os = "linux")]
    {
        let (xdg, fallback) = match kind {
            BaseDir::Data => ("XDG_DATA_HOME", ".local/share"),
            BaseDir::Cache => ("XDG_CACHE_HOME", ".cache"),
        };
        return env_path(xdg).or_else(|| env_path("HOME").map(|home| home.join(fallback)));
    }

    #[cfg(target_os = "windows")]
    {
        return match kind {
            BaseDir::Data => env_path("APPDATA"),
            BaseDir::Cache => env_path("LOCALAPPDATA").or_else(|| env_path("APPDATA")),
        };
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        let _ = (kind, env_path);
        None
    }
}

fn get_app_data_dir() -> Option<PathBuf> {
    base_dir(BaseDir::Data).map(|dir| dir.join(APP_NAME))
}

pub(crate) fn get_cache_dir() -> Option<PathBuf> {
    base_dir(BaseDir::Cache)
}

pub fn get_log_dir() -> Option<PathBuf> {
    get_app_data_dir().map(|p| p.join(LOG_DIR))
}

pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    let dir = get_log_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine log directory",
        )
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}
