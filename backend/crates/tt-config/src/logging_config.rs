use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_LOG_COLORED, DEFAULT_LOG_DIRECTORY, DEFAULT_LOG_LEVEL,
    LogLevel,
};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Directory for `file`, relative to the config directory
    pub dir: String,
    /// Log file name inside `dir`. `None` logs to stderr.
    pub file: Option<String>,
    pub colored: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(DEFAULT_LOG_LEVEL),
            dir: String::from(DEFAULT_LOG_DIRECTORY),
            file: None,
            colored: DEFAULT_LOG_COLORED,
        }
    }
}

impl LoggingConfig {
    /// `dir` and `file` both stay inside the config directory.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.dir.trim().is_empty() || escapes(&self.dir) {
            return Err(ConfigError::logging(
                "logging.dir must be a non-empty relative path without '..'",
            ));
        }

        if let Some(ref file) = self.file
            && (file.trim().is_empty() || escapes(file))
        {
            return Err(ConfigError::logging(
                "logging.file must be a non-empty relative file name without '..'",
            ));
        }

        Ok(())
    }
}

fn escapes(path: &str) -> bool {
    Path::new(path).is_absolute() || path.contains("..")
}
