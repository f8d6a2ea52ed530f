//! Logging and tracing configuration
//!
//! CLI output goes to stdout; suite runs additionally append to a
//! daily-rolling log file under a per-suite directory so every run leaves a
//! human-readable trail.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use super::paths;

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dyntest=info,warn"))
}

/// Initialize tracing for the CLI (stdout only)
///
/// Logs are controlled by the `RUST_LOG` environment variable.
/// Default level is INFO for this crate, WARN for dependencies.
pub fn init_cli() {
    tracing_subscriber::registry()
        .with(default_filter())
        .with(
            fmt::layer()
                .with_target(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// Initialize tracing for a suite run (stdout + per-suite log file)
///
/// Appends to a daily-rolling `test.log` under `<log dir>/<suite>/`, the
/// directory given by the config override or the platform data dir. Returns
/// the worker guard (must be held for the lifetime of the run) and the log
/// directory. Falls back to stdout-only logging when the directory cannot
/// be created.
pub fn init_run_log(suite: &str, log_dir_override: Option<&Path>) -> Option<(WorkerGuard, PathBuf)> {
    let dir = log_dir_override
        .map(|d| d.join(suite))
        .or_else(|| paths::suite_log_dir(suite));

    if let Some(dir) = dir {
        if paths::ensure_dir(&dir).is_ok() {
            let appender = tracing_appender::rolling::daily(&dir, "test.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);

            // Per-case console output comes from the ConsoleListener, so the
            // subscriber only writes to the file here.
            let file_layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .compact();

            tracing_subscriber::registry()
                .with(default_filter())
                .with(file_layer)
                .init();

            return Some((guard, dir));
        }
        eprintln!("Warning: could not create log directory '{}'", dir.display());
    }

    init_cli();
    None
}
