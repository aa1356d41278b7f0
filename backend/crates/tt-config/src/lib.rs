mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod storage_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;

/// Environment variable holding the API base URL.
pub const API_URL_ENV: &str = "TT_API_URL";
/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "TT_CONFIG_DIR";

const DEFAULT_CONFIG_DIRECTORY: &str = ".taxtrack";
const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_STORAGE_FILENAME: &str = "session.json";
const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
const MAX_TIMEOUT_SECS: u64 = 300;
