use std::io::{self, BufRead, Write};

use treeshell::kernel::services::adapters::{ensure_settings_file, load_settings};
use treeshell::kernel::{AppState, Store};
use treeshell::models::seed_tree;

mod logging;
mod shell;

use shell::{parse_command, render_effect, render_status, render_tree, ShellCommand, USAGE};

fn main() -> io::Result<()> {
    let logging = logging::init();

    if let Err(err) = ensure_settings_file() {
        tracing::warn!(error = %err, "settings file unavailable, using defaults");
    }
    let settings = load_settings().unwrap_or_default();
    let mut store = Store::new(AppState::new(seed_tree(), settings));

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    write!(out, "{}", render_tree(store.state()))?;
    writeln!(out, "{}", render_status(store.state()))?;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let Some(command) = parse_command(&line) else {
            writeln!(out, "{USAGE}")?;
            continue;
        };

        match command {
            ShellCommand::Quit => break,
            ShellCommand::Tree => write!(out, "{}", render_tree(store.state()))?,
            ShellCommand::Status => writeln!(out, "{}", render_status(store.state()))?,
            ShellCommand::Json => {
                let snapshot = store.state().explorer.snapshot();
                let json = serde_json::to_string_pretty(&snapshot)
                    .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
                writeln!(out, "{json}")?;
            }
            ShellCommand::Logs => match logging.as_ref() {
                Some(guard) => writeln!(out, "{}", guard.log_dir().display())?,
                None => writeln!(out, "logging is disabled")?,
            },
            ShellCommand::Dispatch(actions) => {
                let mut state_changed = false;
                for action in actions {
                    let result = store.dispatch(action);
                    state_changed |= result.state_changed;
                    for effect in &result.effects {
                        writeln!(out, "{}", render_effect(store.state(), effect))?;
                    }
                }
                if state_changed {
                    write!(out, "{}", render_tree(store.state()))?;
                    writeln!(out, "{}", render_status(store.state()))?;
                }
            }
        }
        out.flush()?;
    }

    Ok(())
}
