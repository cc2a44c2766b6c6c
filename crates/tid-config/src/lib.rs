mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod resolver_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use resolver_config::ResolverConfig;

const DEFAULT_DATABASE_FILENAME: &str = "data.db";
const DEFAULT_ADMIN_HOST_PREFIX: &str = "admin";
const DEFAULT_SETTLE_DELAY_MS: u64 = 500;
const DEFAULT_WRITE_SESSION_MARKER: bool = true;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

#[cfg(test)]
mod tests;
