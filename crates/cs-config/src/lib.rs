mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod webhook_config;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use webhook_config::WebhookConfig;

#[cfg(test)]
mod tests;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8700;
const MIN_PORT: u16 = 1024;
const DEFAULT_DATABASE_FILENAME: &str = "clerk-sync.db";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_TOLERANCE_SECS: u64 = 300;
const MAX_TOLERANCE_SECS: u64 = 3600;
