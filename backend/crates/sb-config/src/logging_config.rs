use crate::{ConfigError, ConfigErrorResult, DEFAULT_LOG_DIRECTORY, DEFAULT_LOG_LEVEL, LogLevel};

use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Directory for the log file, relative to the config dir
    pub dir: String,
    /// Log file name. None logs to stdout.
    pub file: Option<String>,
    /// Colour stdout output (ignored for file output)
    pub colored: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(DEFAULT_LOG_LEVEL),
            dir: String::from(DEFAULT_LOG_DIRECTORY),
            file: None,
            colored: true,
        }
    }
}

impl LoggingConfig {
    /// Where file logging should write, creating the log directory on the way.
    /// `None` when logging to stdout.
    pub fn file_path(&self, config_dir: &Path) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(filename) = self.file.as_deref().filter(|f| !f.trim().is_empty()) else {
            return Ok(None);
        };

        let log_dir = config_dir.join(&self.dir);
        std::fs::create_dir_all(&log_dir).map_err(|e| ConfigError::Io {
            path: log_dir.clone(),
            source: e,
        })?;

        Ok(Some(log_dir.join(filename)))
    }
}
