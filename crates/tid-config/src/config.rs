use crate::{
    AuthConfig, ConfigError, ConfigErrorResult, DatabaseConfig, LoggingConfig, ResolverConfig,
};

use std::path::PathBuf;

use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub auth: AuthConfig,
    pub database: DatabaseConfig,
    pub resolver: ResolverConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for TID_CONFIG_DIR env var, else use ./.tid/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply TID_* environment variable overrides
    /// 5. Check for legacy ~/.tid/config.toml and warn
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        if let Some(home) = dirs::home_dir() {
            let legacy = home.join(".tid").join("config.toml");
            if legacy != config_path && legacy.exists() {
                warn!(
                    "Ignoring legacy config at {}; set TID_CONFIG_DIR to use it",
                    legacy.display()
                );
            }
        }

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: TID_CONFIG_DIR env var > ./.tid/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("TID_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".tid"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.auth.validate()?;
        self.resolver.validate()?;

        // Validate database file name doesn't escape config dir
        let db_file = std::path::Path::new(&self.database.filename);
        if db_file.is_absolute() || self.database.filename.contains("..") {
            return Err(ConfigError::database(
                "database.filename must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.filename))
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  database: {}", self.database.filename);

        info!(
            "  auth: {} ({} admin hosts, prefix '{}')",
            if self.auth.jwt_secret.is_some() {
                "HS256"
            } else {
                "none"
            },
            self.auth.admin_hosts.len(),
            self.auth.admin_host_prefix
        );

        info!(
            "  resolver: settle_delay={}ms, session_marker={}",
            self.resolver.settle_delay_ms, self.resolver.write_session_marker
        );

        info!("  logging: {}", *self.logging.level);
    }

    fn apply_env_overrides(&mut self) {
        // Database
        Self::apply_env_string("TID_DATABASE_FILENAME", &mut self.database.filename);

        // Auth
        Self::apply_env_option_string("TID_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_string(
            "TID_AUTH_ADMIN_HOST_PREFIX",
            &mut self.auth.admin_host_prefix,
        );
        if let Ok(val) = std::env::var("TID_AUTH_ADMIN_HOSTS") {
            self.auth.admin_hosts = val
                .split(',')
                .map(str::trim)
                .filter(|h| !h.is_empty())
                .map(String::from)
                .collect();
        }

        // Resolver
        Self::apply_env_parse(
            "TID_RESOLVER_SETTLE_DELAY_MS",
            &mut self.resolver.settle_delay_ms,
        );
        Self::apply_env_bool(
            "TID_RESOLVER_WRITE_SESSION_MARKER",
            &mut self.resolver.write_session_marker,
        );

        // Logging
        Self::apply_env_parse("TID_LOG_LEVEL", &mut self.logging.level);
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
