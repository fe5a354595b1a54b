use std::{
    fs,
    path::{Path, PathBuf},
    time::{Duration, SystemTime},
};

use anyhow::{Context, Result, anyhow};
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{self, RollingFileAppender},
};
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    EnvFilter, Layer, filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};
use uuid::Uuid;

use crate::config::{LoggingConfig, LoggingRotation};

const LOG_FILE_PREFIX: &str = "clarion.log";

/// Keeps the background log writer alive. Dropping it flushes pending
/// records.
pub struct LoggingGuard {
    _worker_guard: WorkerGuard,
    run_id: String,
    log_dir: PathBuf,
}

impl LoggingGuard {
    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }
}

/// Installs the global subscriber: JSON records to a rolling file, plus
/// warnings on stderr when enabled.
pub fn init_tracing(logging_config: &LoggingConfig) -> Result<LoggingGuard> {
    if logging_config.filter.trim().is_empty() {
        return Err(anyhow!("logging.filter cannot be empty"));
    }
    if logging_config.retention_days == 0 {
        return Err(anyhow!("logging.retention_days must be at least 1"));
    }

    let log_dir = absolute_log_dir(&logging_config.dir)?;
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create logging directory {}", log_dir.display()))?;

    let purge_warnings = purge_expired_logs(
        &log_dir,
        LOG_FILE_PREFIX,
        retention_cutoff(SystemTime::now(), logging_config.retention_days),
    );
    let (writer, worker_guard) =
        tracing_appender::non_blocking(rolling_appender(&log_dir, logging_config.rotation));
    let env_filter = build_env_filter(&logging_config.filter)?;

    let file_layer = fmt::layer()
        .json()
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_target(true)
        .with_current_span(true)
        .with_span_list(true)
        .with_ansi(false)
        .with_writer(writer)
        .with_filter(env_filter);

    let stderr_layer = logging_config.stderr_warn_enabled.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_filter(LevelFilter::WARN)
    });

    tracing_subscriber::registry()
        .with(ErrorLayer::default())
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .context("failed to initialize tracing subscriber")?;

    let run_id = Uuid::now_v7().to_string();
    tracing::info!(
        target: "logging",
        run_id = %run_id,
        dir = %log_dir.display(),
        filter = %logging_config.filter,
        rotation = ?logging_config.rotation,
        retention_days = logging_config.retention_days,
        "logging_initialized"
    );
    for warning in purge_warnings {
        tracing::warn!(target: "logging", warning = %warning, "log_purge_failed");
    }

    Ok(LoggingGuard {
        _worker_guard: worker_guard,
        run_id,
        log_dir,
    })
}

fn build_env_filter(filter: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(filter).with_context(|| format!("failed to parse logging.filter '{filter}'"))
}

fn rolling_appender(log_dir: &Path, rotation: LoggingRotation) -> RollingFileAppender {
    match rotation {
        LoggingRotation::Daily => rolling::daily(log_dir, LOG_FILE_PREFIX),
        LoggingRotation::Hourly => rolling::hourly(log_dir, LOG_FILE_PREFIX),
    }
}

fn absolute_log_dir(dir: &Path) -> Result<PathBuf> {
    if dir.as_os_str().is_empty() {
        return Err(anyhow!("logging.dir cannot be empty"));
    }
    if dir.is_absolute() {
        return Ok(dir.to_path_buf());
    }
    Ok(std::env::current_dir()
        .context("failed to read current working directory for logging.dir")?
        .join(dir))
}

fn retention_cutoff(now: SystemTime, retention_days: usize) -> SystemTime {
    let retention = Duration::from_secs((retention_days as u64).saturating_mul(24 * 60 * 60));
    now.checked_sub(retention)
        .unwrap_or(SystemTime::UNIX_EPOCH)
        .max(SystemTime::UNIX_EPOCH)
}

/// Removes prefixed log files last modified at or before `cutoff`.
/// Failures are collected rather than raised.
fn purge_expired_logs(log_dir: &Path, prefix: &str, cutoff: SystemTime) -> Vec<String> {
    let entries = match fs::read_dir(log_dir) {
        Ok(entries) => entries,
        Err(err) => return vec![format!("failed to scan {}: {err}", log_dir.display())],
    };

    let mut warnings = Vec::new();
    for entry in entries {
        let outcome = entry
            .map_err(|err| format!("failed to read directory entry: {err}"))
            .and_then(|entry| purge_if_expired(&entry, prefix, cutoff));
        if let Err(warning) = outcome {
            warnings.push(warning);
        }
    }
    warnings
}

fn purge_if_expired(entry: &fs::DirEntry, prefix: &str, cutoff: SystemTime) -> Result<(), String> {
    if !entry.file_name().to_string_lossy().starts_with(prefix) {
        return Ok(());
    }

    let path = entry.path();
    let metadata = entry
        .metadata()
        .map_err(|err| format!("failed to stat {}: {err}", path.display()))?;
    if !metadata.is_file() {
        return Ok(());
    }

    let modified = metadata
        .modified()
        .map_err(|err| format!("failed to read mtime for {}: {err}", path.display()))?;
    if modified <= cutoff {
        fs::remove_file(&path)
            .map_err(|err| format!("failed to remove expired {}: {err}", path.display()))?;
    }
    Ok(())
}
