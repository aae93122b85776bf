//! Registry configuration

use super::error::{LoggerError, Result};
use super::line_format::DEFAULT_FORMAT;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Directory name used under the working directory when none is set.
pub const DEFAULT_LOG_DIRECTORY: &str = "Logs";

/// File rewritten on every start.
pub const DEFAULT_LATEST_FILE: &str = "latest.log";

/// chrono strftime pattern naming the per-start file (`<pattern>.log`).
pub const DEFAULT_TIMESTAMP_PATTERN: &str = "%d-%m-%Y %H-%M";

/// Settings the registry uses to build its default sinks.
///
/// # Example
///
/// ```
/// use named_logger::RegistryConfig;
///
/// let config = RegistryConfig::default()
///     .with_log_directory("/tmp/app-logs")
///     .with_colors(false);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub log_directory: PathBuf,
    pub format: String,
    /// Include standard output among the default sinks
    pub console: bool,
    /// Colorize console output by severity
    pub colors: bool,
    pub latest_file_name: String,
    pub timestamp_pattern: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        let log_directory = std::env::current_dir()
            .map(|cwd| cwd.join(DEFAULT_LOG_DIRECTORY))
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOG_DIRECTORY));

        Self {
            log_directory,
            format: DEFAULT_FORMAT.to_string(),
            console: true,
            colors: true,
            latest_file_name: DEFAULT_LATEST_FILE.to_string(),
            timestamp_pattern: DEFAULT_TIMESTAMP_PATTERN.to_string(),
        }
    }
}

impl RegistryConfig {
    #[must_use]
    pub fn with_log_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_directory = dir.into();
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    #[must_use]
    pub fn with_console(mut self, console: bool) -> Self {
        self.console = console;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    #[must_use]
    pub fn with_latest_file_name(mut self, name: impl Into<String>) -> Self {
        self.latest_file_name = name.into();
        self
    }

    #[must_use]
    pub fn with_timestamp_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.timestamp_pattern = pattern.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.format.is_empty() {
            return Err(LoggerError::config("RegistryConfig", "format must not be empty"));
        }
        if self.latest_file_name.trim().is_empty() {
            return Err(LoggerError::config(
                "RegistryConfig",
                "latest_file_name must not be empty",
            ));
        }
        if self.timestamp_pattern.trim().is_empty() {
            return Err(LoggerError::config(
                "RegistryConfig",
                "timestamp_pattern must not be empty",
            ));
        }
        if StrftimeItems::new(&self.timestamp_pattern).any(|item| matches!(item, Item::Error)) {
            return Err(LoggerError::config(
                "RegistryConfig",
                format!("timestamp_pattern '{}' is not a valid strftime pattern", self.timestamp_pattern),
            ));
        }
        Ok(())
    }

    pub fn latest_path(&self) -> PathBuf {
        self.log_directory.join(&self.latest_file_name)
    }

    /// Path of the per-start file for a process started at `started`.
    pub fn timestamped_path(&self, started: &DateTime<Local>) -> Result<PathBuf> {
        let mut stem = String::new();
        write!(stem, "{}", started.format(&self.timestamp_pattern)).map_err(|_| {
            LoggerError::config(
                "RegistryConfig",
                format!("timestamp_pattern '{}' cannot be rendered", self.timestamp_pattern),
            )
        })?;
        Ok(self.log_directory.join(format!("{}.log", stem)))
    }

    /// `latest.log` and the per-start file, in that order.
    ///
    /// Fails when both resolve to the same file, which would otherwise be
    /// opened once truncating and once appending.
    pub fn file_paths(&self, started: &DateTime<Local>) -> Result<(PathBuf, PathBuf)> {
        let latest = self.latest_path();
        let stamped = self.timestamped_path(started)?;
        if latest == stamped {
            return Err(LoggerError::config(
                "RegistryConfig",
                format!(
                    "latest_file_name and timestamp_pattern both name '{}'",
                    latest.display()
                ),
            ));
        }
        Ok((latest, stamped))
    }

    pub fn log_directory(&self) -> &Path {
        &self.log_directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_defaults() {
        let config = RegistryConfig::default();
        assert!(config.log_directory.ends_with(DEFAULT_LOG_DIRECTORY));
        assert_eq!(config.format, DEFAULT_FORMAT);
        assert!(config.console);
        assert!(config.colors);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_paths() {
        let config = RegistryConfig::default().with_log_directory("/srv/logs");
        assert_eq!(config.latest_path(), PathBuf::from("/srv/logs/latest.log"));

        let started = Local.with_ymd_and_hms(2024, 3, 7, 9, 5, 0).unwrap();
        assert_eq!(
            config.timestamped_path(&started).unwrap(),
            PathBuf::from("/srv/logs/07-03-2024 09-05.log")
        );
    }

    #[test]
    fn test_validate_rejects_empty_values() {
        let err = RegistryConfig::default().with_format("").validate().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = RegistryConfig::default()
            .with_latest_file_name("  ")
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("latest_file_name"));
    }

    #[test]
    fn test_validate_rejects_unknown_specifier() {
        let config = RegistryConfig::default().with_timestamp_pattern("%Q run");
        let err = config.validate().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
        assert!(err.to_string().contains("%Q run"));

        let started = Local.with_ymd_and_hms(2024, 3, 7, 9, 5, 0).unwrap();
        assert!(matches!(
            config.timestamped_path(&started),
            Err(LoggerError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_file_paths_reject_same_file() {
        let started = Local.with_ymd_and_hms(2024, 3, 7, 9, 5, 0).unwrap();

        let config = RegistryConfig::default()
            .with_log_directory("/srv/logs")
            .with_latest_file_name("run.log")
            .with_timestamp_pattern("run");
        assert!(config.validate().is_ok());
        let err = config.file_paths(&started).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
        assert!(err.to_string().contains("run.log"));

        let (latest, stamped) = RegistryConfig::default()
            .with_log_directory("/srv/logs")
            .file_paths(&started)
            .unwrap();
        assert_eq!(latest, PathBuf::from("/srv/logs/latest.log"));
        assert_eq!(stamped, PathBuf::from("/srv/logs/07-03-2024 09-05.log"));
    }
}
