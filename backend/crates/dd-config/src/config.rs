use crate::{
    CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR_NAME,
    DatabaseConfig, LoggingConfig, MetricsConfig, ServerConfig, SessionConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub session: SessionConfig,
    pub metrics: MetricsConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for DD_CONFIG_DIR env var, else use ./.diet/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply DD_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Filesystem {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Filesystem {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: DD_CONFIG_DIR env var > ./.diet/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir().map_err(|source| ConfigError::WorkingDir { source })?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.session.validate()?;

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Get absolute path to the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(file) = &self.logging.file else {
            return Ok(None);
        };
        let config_dir = Self::config_dir()?;
        Ok(Some(config_dir.join(&self.logging.dir).join(file)))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (timeout {}s)",
            self.server.host, self.server.port, self.server.request_timeout_secs
        );
        info!(
            "  database: {} (max {} connections, busy timeout {}s)",
            self.database.path, self.database.max_connections, self.database.busy_timeout_secs
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  session: cookie={}, max_age={}d, secure={}",
            self.session.cookie_name, self.session.max_age_days, self.session.secure
        );
        info!("  metrics: streak_order={}", self.metrics.streak_order);
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("DD_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("DD_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse(
            "DD_SERVER_REQUEST_TIMEOUT_SECS",
            &mut self.server.request_timeout_secs,
        );

        // Database
        Self::apply_env_string("DD_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "DD_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );
        Self::apply_env_parse(
            "DD_DATABASE_BUSY_TIMEOUT_SECS",
            &mut self.database.busy_timeout_secs,
        );

        // Logging
        Self::apply_env_parse("DD_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("DD_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("DD_LOG_FILE", &mut self.logging.file);

        // Session
        Self::apply_env_string("DD_SESSION_COOKIE_NAME", &mut self.session.cookie_name);
        Self::apply_env_parse("DD_SESSION_MAX_AGE_DAYS", &mut self.session.max_age_days);
        Self::apply_env_bool("DD_SESSION_SECURE", &mut self.session.secure);

        // Metrics
        Self::apply_env_parse("DD_METRICS_STREAK_ORDER", &mut self.metrics.streak_order);
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

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
