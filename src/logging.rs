//! Tracing subscriber setup for the binary

use std::path::Path;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Filter used when RUST_LOG is not set
pub const DEFAULT_FILTER: &str = "warn";

/// Output settings for the subscriber
#[derive(Debug, Clone, Default)]
pub struct LogOptions<'a> {
    /// Append logs to this file instead of stderr
    pub file: Option<&'a Path>,
    /// Emit one JSON object per event
    pub json: bool,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber.
///
/// The returned guard flushes the file writer on drop and must be held
/// until the program exits.
pub fn init(options: &LogOptions<'_>) -> anyhow::Result<WorkerGuard> {
    let (writer, guard) = match options.file {
        Some(path) => {
            let directory = path
                .parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let file_name = path
                .file_name()
                .with_context(|| format!("log file path has no file name: {}", path.display()))?;
            std::fs::create_dir_all(directory)
                .with_context(|| format!("failed to create log directory {}", directory.display()))?;
            let appender = tracing_appender::rolling::never(directory, file_name);
            tracing_appender::non_blocking(appender)
        }
        None => tracing_appender::non_blocking(std::io::stderr()),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(options.file.is_none());

    let installed = if options.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {}", e))?;

    Ok(guard)
}
