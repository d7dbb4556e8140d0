//! Tracing setup for the shell.
//!
//! Every event that passes `RUST_LOG` (default `treeshell=info`) is appended to
//! a daily file under the log directory. Warnings and errors are also echoed
//! to stderr so they show up next to the command output.

use std::io;
use std::path::{Path, PathBuf};

use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const LOG_FILE: &str = "treeshell.log";
const DEFAULT_FILTER: &str = "treeshell=info";

pub struct LoggingGuard {
    _guard: WorkerGuard,
    log_dir: PathBuf,
}

impl LoggingGuard {
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn resolve_log_dir() -> io::Result<PathBuf> {
    treeshell::kernel::services::adapters::ensure_log_dir().or_else(|_| {
        let dir = std::env::temp_dir().join("treeshell").join("logs");
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    })
}

/// Full records go to `file`; `console` only receives warnings and errors.
fn build_subscriber<F, C>(filter: EnvFilter, file: F, console: C) -> impl Subscriber + Send + Sync
where
    F: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    C: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    let console_layer = fmt::layer()
        .with_writer(console)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .compact()
        .with_filter(LevelFilter::WARN);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
}

pub fn init() -> Option<LoggingGuard> {
    let log_dir = resolve_log_dir().ok()?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    if build_subscriber(env_filter(), non_blocking, io::stderr)
        .try_init()
        .is_err()
    {
        return None;
    }

    std::panic::set_hook(Box::new(|panic_info| {
        tracing::error!(panic = %panic_info, "panic");
    }));

    tracing::info!(log_dir = %log_dir.display(), "tracing initialized");

    Some(LoggingGuard {
        _guard: guard,
        log_dir,
    })
}
