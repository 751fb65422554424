mod auth_config;
mod callback_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod platform_config;
mod server_config;
mod twin_lookup_config;

pub use auth_config::AuthConfig;
pub use callback_config::CallbackConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use platform_config::PlatformConfig;
pub use server_config::ServerConfig;
pub use twin_lookup_config::TwinLookupConfig;

#[cfg(test)]
mod tests;

const CONFIG_DIR_ENV: &str = "RB_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".rb";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const MIN_PORT: u16 = 1024;
const DEFAULT_SHUTDOWN_GRACE_SECS: u64 = 10;
const MAX_SHUTDOWN_GRACE_SECS: u64 = 300;

const DEFAULT_API_URL: &str = "https://api.monday.com/v2";
const DEFAULT_API_VERSION: &str = "2024-10";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;
const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
