//! Tracing setup for the `bookshelf` binary.
//!
//! Human-readable logs go to stderr so that `query`/`mutate` output on
//! stdout stays pure JSON. `--log-file` adds a daily-rotated JSON log.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILE_NAME: &str = "bookshelf.log";

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over `verbose`.
pub fn init(verbose: bool, log_file: Option<PathBuf>) {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let file_layer = log_file.map(|path| {
        fmt::layer()
            .with_writer(file_appender(&path))
            .with_ansi(false)
            .json()
    });

    // Option<Layer> is itself a layer, a missing file is a no-op
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(stderr_layer)
        .with(file_layer)
        .init();
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

/// Filter used when `RUST_LOG` is not set.
pub fn default_directives(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("bookshelf={level},tower_http={level}")
}

/// Daily-rolling appender writing `<file name>.<date>` next to `log_path`.
pub fn file_appender(log_path: &Path) -> RollingFileAppender {
    let directory = log_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let _ = std::fs::create_dir_all(directory);

    let file_name = log_path
        .file_name()
        .unwrap_or_else(|| OsStr::new(DEFAULT_LOG_FILE_NAME));

    tracing_appender::rolling::daily(directory, file_name)
}
