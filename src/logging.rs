//! Logging
//!
//! The TUI owns the terminal, so logs only ever go to files. Without
//! `--debug` no subscriber is installed and tracing macros are no-ops.

use crate::error::{MoltbotError, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

const LOG_FILE_PREFIX: &str = "moltbot";
const LOG_FILE_SUFFIX: &str = "log";
const SECS_PER_DAY: u64 = 24 * 60 * 60;

/// Overrides the log directory for writing, status and cleanup alike
pub const LOG_DIR_ENV: &str = "DEBUG_LOGS_LOCATION";

/// Logging setup, built from CLI flags and the config file
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub debug_mode: bool,
    pub log_dir: PathBuf,
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl LogConfig {
    pub fn new() -> Self {
        Self {
            debug_mode: false,
            log_dir: default_log_dir(),
            level: "debug".to_string(),
        }
    }

    pub fn with_debug_mode(mut self, debug: bool) -> Self {
        self.debug_mode = debug;
        self
    }

    pub fn with_log_dir(mut self, dir: PathBuf) -> Self {
        self.log_dir = dir;
        self
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Filter directive: `RUST_LOG` wins, otherwise our crate at `level`
    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("warn,moltbot={}", self.level)))
    }
}

/// `$DEBUG_LOGS_LOCATION` if set, otherwise `./.moltbot/logs`
pub fn default_log_dir() -> PathBuf {
    resolve_log_dir(std::env::var_os(LOG_DIR_ENV))
}

fn resolve_log_dir(env_override: Option<OsString>) -> PathBuf {
    match env_override {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(".moltbot")
            .join("logs"),
    }
}

/// Install the global subscriber. The returned guard must be kept alive
/// for the life of the process so buffered lines get flushed.
pub fn init_logging(config: LogConfig) -> Result<Option<WorkerGuard>> {
    if !config.debug_mode {
        return Ok(None);
    }

    std::fs::create_dir_all(&config.log_dir).map_err(|source| MoltbotError::LogDir {
        path: config.log_dir.clone(),
        source,
    })?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix(LOG_FILE_SUFFIX)
        .build(&config.log_dir)
        .map_err(|e| MoltbotError::Logging(e.to_string()))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(config.filter())
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| MoltbotError::Logging(e.to_string()))?;

    tracing::info!("Logging to {}", config.log_dir.display());
    Ok(Some(guard))
}

fn log_files(dir: &Path) -> Result<Vec<(PathBuf, SystemTime)>> {
    let mut files = Vec::new();
    if !dir.exists() {
        return Ok(files);
    }
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().is_some_and(|e| e == LOG_FILE_SUFFIX) {
            let modified = entry.metadata()?.modified()?;
            files.push((path, modified));
        }
    }
    Ok(files)
}

/// Most recently written log file in `dir`
pub fn newest_log_in(dir: &Path) -> Option<PathBuf> {
    log_files(dir)
        .ok()?
        .into_iter()
        .max_by_key(|(_, modified)| *modified)
        .map(|(path, _)| path)
}

/// Remove log files older than `max_age_days` from the default log directory
pub fn cleanup_old_logs(max_age_days: u64) -> Result<usize> {
    cleanup_old_logs_in(&default_log_dir(), max_age_days)
}

pub fn cleanup_old_logs_in(dir: &Path, max_age_days: u64) -> Result<usize> {
    let max_age = Duration::from_secs(max_age_days.saturating_mul(SECS_PER_DAY));
    let now = SystemTime::now();
    let mut removed = 0;

    for (path, modified) in log_files(dir)? {
        let age = now.duration_since(modified).unwrap_or_default();
        if age > max_age {
            std::fs::remove_file(&path)?;
            tracing::debug!("Removed old log file: {}", path.display());
            removed += 1;
        }
    }

    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_log_config_builder() {
        let config = LogConfig::new()
            .with_debug_mode(true)
            .with_log_dir(PathBuf::from("/tmp/moltbot-logs"))
            .with_level("trace");
        assert!(config.debug_mode);
        assert_eq!(config.log_dir, PathBuf::from("/tmp/moltbot-logs"));
        assert_eq!(config.level, "trace");
    }

    #[test]
    fn test_init_without_debug_installs_nothing() {
        let dir = TempDir::new().unwrap();
        let log_dir = dir.path().join("logs");
        let guard = init_logging(LogConfig::new().with_log_dir(log_dir.clone())).unwrap();
        assert!(guard.is_none());
        assert!(!log_dir.exists());
    }

    #[test]
    fn test_cleanup_keeps_recent_logs() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("moltbot.2026-01-01.log"), "line").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "keep").unwrap();

        assert_eq!(cleanup_old_logs_in(dir.path(), 7).unwrap(), 0);
        assert!(dir.path().join("moltbot.2026-01-01.log").exists());
    }

    #[test]
    fn test_cleanup_zero_days_removes_only_logs() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("moltbot.2026-01-01.log"), "line").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "keep").unwrap();
        std::thread::sleep(Duration::from_millis(20));

        assert_eq!(cleanup_old_logs_in(dir.path(), 0).unwrap(), 1);
        assert!(dir.path().join("notes.txt").exists());
    }

    #[test]
    fn test_cleanup_huge_age_keeps_everything() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("moltbot.2026-01-01.log"), "line").unwrap();
        std::thread::sleep(Duration::from_millis(20));

        assert_eq!(cleanup_old_logs_in(dir.path(), u64::MAX).unwrap(), 0);
        assert_eq!(cleanup_old_logs_in(dir.path(), 999_999_999_999_999).unwrap(), 0);
        assert!(dir.path().join("moltbot.2026-01-01.log").exists());
    }

    #[test]
    fn test_log_dir_env_override() {
        assert_eq!(
            resolve_log_dir(Some(OsString::from("/var/tmp/moltbot"))),
            PathBuf::from("/var/tmp/moltbot")
        );
        let fallback = resolve_log_dir(None);
        assert!(fallback.ends_with(".moltbot/logs"));
        assert_eq!(resolve_log_dir(Some(OsString::new())), fallback);
    }

    #[test]
    fn test_log_config_uses_resolved_dir() {
        assert_eq!(LogConfig::new().log_dir, default_log_dir());
    }

    #[test]
    fn test_missing_dir_is_empty() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent");
        assert_eq!(cleanup_old_logs_in(&missing, 7).unwrap(), 0);
        assert!(newest_log_in(&missing).is_none());
    }

    #[test]
    fn test_newest_log() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("moltbot.2026-01-01.log"), "a").unwrap();
        assert_eq!(
            newest_log_in(dir.path()),
            Some(dir.path().join("moltbot.2026-01-01.log"))
        );
    }
}
