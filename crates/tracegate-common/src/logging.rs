//! ---
//! tg_section: "01-core-functionality"
//! tg_subsection: "module"
//! tg_type: "source"
//! tg_scope: "code"
//! tg_description: "Shared primitives and utilities for the access runtime."
//! tg_version: "v0.0.0-prealpha"
//! tg_owner: "tbd"
//! ---
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::daily;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LoggingConfig;

pub const LOG_ENV: &str = "TRACEGATE_LOG";

/// Console rendering for access events.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LogFormat {
    #[default]
    StructuredJson,
    Pretty,
}

/// Keeps the non-blocking writers alive. Dropping it flushes buffered events,
/// so binaries hold it until `main` returns.
#[must_use = "dropping the guard stops log delivery"]
#[derive(Debug)]
pub struct TracingGuard {
    log_file: PathBuf,
    _file: WorkerGuard,
    _console: WorkerGuard,
}

impl TracingGuard {
    /// Base path of the rolling log file; the appender adds a date suffix.
    pub fn log_file(&self) -> &PathBuf {
        &self.log_file
    }
}

/// Pick the filter directive: `TRACEGATE_LOG`, then `RUST_LOG`, then the configured level.
fn resolve_filter(config: &LoggingConfig) -> EnvFilter {
    if let Ok(directive) = std::env::var(LOG_ENV) {
        match EnvFilter::try_new(&directive) {
            Ok(filter) => return filter,
            Err(err) => eprintln!(
                "invalid {LOG_ENV} directive ({err}); using configured level {}",
                config.level
            ),
        }
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Install the process-wide subscriber for a TraceGate binary.
///
/// Console output goes to stderr so command output on stdout stays machine
/// readable. Every event is also appended as JSON to a daily file under
/// [`LoggingConfig::directory`]. A second call leaves the first subscriber in
/// place but still returns a working guard for its own writers.
pub fn init_tracing(service_name: &str, config: &LoggingConfig) -> Result<TracingGuard> {
    std::fs::create_dir_all(&config.directory).with_context(|| {
        format!("unable to create log directory {}", config.directory.display())
    })?;
    let file_name = format!(
        "{}.log",
        config.file_prefix.as_deref().unwrap_or(service_name)
    );
    let log_file = config.directory.join(&file_name);

    let (file_writer, file_guard) =
        tracing_appender::non_blocking(daily(&config.directory, &file_name));
    let (console_writer, console_guard) = tracing_appender::non_blocking(std::io::stderr());

    let console_layer = match config.format {
        LogFormat::StructuredJson => fmt::layer()
            .json()
            .with_current_span(false)
            .with_writer(console_writer)
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .compact()
            .with_ansi(false)
            .with_writer(console_writer)
            .boxed(),
    };
    let file_layer = fmt::layer()
        .json()
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_writer(file_writer)
        .boxed();

    let installed = tracing_subscriber::registry()
        .with(resolve_filter(config))
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .is_ok();

    if installed {
        info!(
            service = %service_name,
            log_file = %log_file.display(),
            format = ?config.format,
            "tracing initialised"
        );
    }
    Ok(TracingGuard {
        log_file,
        _file: file_guard,
        _console: console_guard,
    })
}
