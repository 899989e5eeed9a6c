//! Tracing setup for the `exo` binary.
//!
//! Logs go to stderr for the print-style subcommands. The TUI owns the
//! terminal, so it logs to a file or nowhere.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt};

use crate::error::AppError;

/// Where formatted log lines are written.
#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
    Discard,
}

/// Directive string used when `RUST_LOG` is not set.
pub fn filter_directives(level: &str) -> String {
    format!("exo_atlas={level},reqwest=warn")
}

/// Install the global subscriber. A second call is a no-op.
pub fn init_tracing(level: &str, target: LogTarget<'_>) -> Result<(), AppError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_directives(level)));

    let builder = fmt().with_env_filter(env_filter).with_target(false);

    // try_init only fails when a subscriber is already installed.
    let _ = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).compact().try_init(),
        LogTarget::Discard => builder.with_writer(std::io::sink).try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    AppError::usage(format!("Failed to open log file '{}': {e}", path.display()))
                })?;
            builder.with_writer(Mutex::new(file)).with_ansi(false).try_init()
        }
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_scope_level_to_this_crate() {
        assert_eq!(filter_directives("debug"), "exo_atlas=debug,reqwest=warn");
    }

    #[test]
    fn unwritable_log_file_is_a_usage_error() {
        let path = std::env::temp_dir()
            .join("exo_atlas_missing_dir_for_logs")
            .join("nested")
            .join("exo.log");
        let err = init_tracing("info", LogTarget::File(&path)).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_USAGE);
    }
}
