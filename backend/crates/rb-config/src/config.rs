use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, CallbackConfig, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, LoggingConfig, PlatformConfig, ServerConfig, TwinLookupConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

/// Platform-conventional variable names, honored when the `RB_` form is unset
const LEGACY_SIGNING_SECRET_ENV: &str = "MONDAY_SIGNING_SECRET";
const LEGACY_ACCOUNT_SUBDOMAIN_ENV: &str = "MONDAY_ACCOUNT_SUBDOMAIN";

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub platform: PlatformConfig,
    pub twin_lookup: TwinLookupConfig,
    pub callback: CallbackConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for RB_CONFIG_DIR env var, else use ./.rb/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply MONDAY_SIGNING_SECRET / MONDAY_ACCOUNT_SUBDOMAIN
    /// 5. Apply RB_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_legacy_env();
        config.apply_env_overrides();

        Ok(config)
    }

    /// Parse a TOML document without touching the environment.
    pub fn from_toml_str(contents: &str) -> ConfigErrorResult<Self> {
        toml::from_str(contents).map_err(|e| ConfigError::Toml {
            path: PathBuf::from("<inline>"),
            source: e,
        })
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: RB_CONFIG_DIR env var > ./.rb/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.auth.validate()?;
        self.platform.validate()?;
        self.twin_lookup.validate()?;
        self.callback.validate()?;

        if let Some(ref file) = self.logging.file
            && (Path::new(file).is_absolute() || file.contains(".."))
        {
            return Err(ConfigError::config(
                "logging.file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Absolute path of the log file, when file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => {
                let log_dir = Self::config_dir()?.join(&self.logging.dir);
                Ok(Some(log_dir.join(filename)))
            }
            None => Ok(None),
        }
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (shutdown grace {}s)",
            self.server.host, self.server.port, self.server.shutdown_grace_secs
        );
        info!(
            "  auth: signing secret {}",
            if self.auth.signing_secret.is_some() {
                "configured"
            } else {
                "MISSING"
            }
        );
        info!(
            "  platform: {} (version: {}, account: {}, timeout={}s)",
            self.platform.api_url,
            self.platform.api_version().unwrap_or("default"),
            self.platform.account_subdomain,
            self.platform.request_timeout_secs
        );

        let max_attempts = match self.twin_lookup.max_attempts() {
            Some(attempts) => attempts.to_string(),
            None => "unbounded".to_string(),
        };
        let timeout = match self.twin_lookup.timeout_secs {
            0 => "none".to_string(),
            secs => format!("{}s", secs),
        };
        info!(
            "  twin_lookup: interval={}ms, backoff={}x, max_interval={}s, attempts={}, timeout={}, jitter={}",
            self.twin_lookup.interval_ms,
            self.twin_lookup.backoff_multiplier,
            self.twin_lookup.max_interval_secs,
            max_attempts,
            timeout,
            self.twin_lookup.jitter
        );

        info!(
            "  callback: delay={}ms, timeout={}s",
            self.callback.delay_ms, self.callback.timeout_secs
        );

        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_legacy_env(&mut self) {
        Self::apply_env_option_string(LEGACY_SIGNING_SECRET_ENV, &mut self.auth.signing_secret);
        Self::apply_env_string(
            LEGACY_ACCOUNT_SUBDOMAIN_ENV,
            &mut self.platform.account_subdomain,
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("RB_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("RB_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse(
            "RB_SERVER_SHUTDOWN_GRACE_SECS",
            &mut self.server.shutdown_grace_secs,
        );

        // Auth
        Self::apply_env_option_string("RB_AUTH_SIGNING_SECRET", &mut self.auth.signing_secret);

        // Platform
        Self::apply_env_string("RB_PLATFORM_API_URL", &mut self.platform.api_url);
        Self::apply_env_string("RB_PLATFORM_API_VERSION", &mut self.platform.api_version);
        Self::apply_env_string(
            "RB_PLATFORM_ACCOUNT_SUBDOMAIN",
            &mut self.platform.account_subdomain,
        );
        Self::apply_env_parse(
            "RB_PLATFORM_REQUEST_TIMEOUT_SECS",
            &mut self.platform.request_timeout_secs,
        );

        // Twin lookup
        Self::apply_env_parse("RB_TWIN_INTERVAL_MS", &mut self.twin_lookup.interval_ms);
        Self::apply_env_parse(
            "RB_TWIN_BACKOFF_MULTIPLIER",
            &mut self.twin_lookup.backoff_multiplier,
        );
        Self::apply_env_parse(
            "RB_TWIN_MAX_INTERVAL_SECS",
            &mut self.twin_lookup.max_interval_secs,
        );
        Self::apply_env_parse("RB_TWIN_MAX_ATTEMPTS", &mut self.twin_lookup.max_attempts);
        Self::apply_env_parse("RB_TWIN_TIMEOUT_SECS", &mut self.twin_lookup.timeout_secs);
        Self::apply_env_bool("RB_TWIN_JITTER", &mut self.twin_lookup.jitter);

        // Callback
        Self::apply_env_parse("RB_CALLBACK_DELAY_MS", &mut self.callback.delay_ms);
        Self::apply_env_parse("RB_CALLBACK_TIMEOUT_SECS", &mut self.callback.timeout_secs);

        // Logging
        Self::apply_env_parse("RB_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("RB_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("RB_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
