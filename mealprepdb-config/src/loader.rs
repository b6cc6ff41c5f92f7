//! Configuration loading and environment variable handling

use crate::domains::MealprepConfig;
use crate::error::{ConfigError, ConfigResult};
use std::path::Path;
use std::str::FromStr;

/// Configuration loader with environment variable support
pub struct ConfigLoader {
    /// Environment variable prefix
    prefix: String,
}

impl ConfigLoader {
    /// Create a new config loader with default prefix
    pub fn new() -> Self {
        Self {
            prefix: "MEALPREPDB".to_string(),
        }
    }

    /// Create a new config loader with custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Load configuration from a YAML file with environment overrides
    pub fn from_file(&self, path: impl AsRef<Path>) -> ConfigResult<MealprepConfig> {
        let content = std::fs::read_to_string(path)?;
        let mut config: MealprepConfig = serde_yaml::from_str(&content)?;

        self.apply_env_overrides(&mut config)?;
        config.validate_all()?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env(&self) -> ConfigResult<MealprepConfig> {
        let mut config = MealprepConfig::default();
        self.apply_env_overrides(&mut config)?;
        config.validate_all()?;
        Ok(config)
    }

    /// Load configuration with fallback chain
    pub fn load(&self, config_path: Option<impl AsRef<Path>>) -> ConfigResult<MealprepConfig> {
        match config_path {
            Some(path) => self.from_file(path),
            None => self.from_env(),
        }
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides(&self, config: &mut MealprepConfig) -> ConfigResult<()> {
        self.apply_database_overrides(&mut config.database)?;
        self.apply_server_overrides(&mut config.server)?;
        self.apply_logging_overrides(&mut config.logging)?;
        Ok(())
    }

    /// Apply database config overrides
    fn apply_database_overrides(
        &self,
        config: &mut crate::domains::database::DatabaseConfig,
    ) -> ConfigResult<()> {
        if let Ok(url) = self.get_env_var("DATABASE_URL") {
            config.url = url;
        }

        if let Ok(max_connections) = self.get_env_var("DATABASE_MAX_CONNECTIONS") {
            config.max_connections = max_connections.parse().map_err(|e| {
                ConfigError::EnvError(format!("Invalid DATABASE_MAX_CONNECTIONS: {}", e))
            })?;
        }

        if let Ok(min_connections) = self.get_env_var("DATABASE_MIN_CONNECTIONS") {
            config.min_connections = min_connections.parse().map_err(|e| {
                ConfigError::EnvError(format!("Invalid DATABASE_MIN_CONNECTIONS: {}", e))
            })?;
        }

        if let Ok(auto_migrate) = self.get_env_var("DATABASE_AUTO_MIGRATE") {
            config.auto_migrate = auto_migrate.parse().map_err(|e| {
                ConfigError::EnvError(format!("Invalid DATABASE_AUTO_MIGRATE: {}", e))
            })?;
        }

        Ok(())
    }

    /// Apply server config overrides
    fn apply_server_overrides(
        &self,
        config: &mut crate::domains::server::ServerConfig,
    ) -> ConfigResult<()> {
        if let Ok(bind) = self.get_env_var("SERVER_BIND_ADDRESS") {
            config.bind_address = bind;
        }

        if let Ok(port) = self.get_env_var("SERVER_PORT") {
            config.port = port
                .parse()
                .map_err(|e| ConfigError::EnvError(format!("Invalid SERVER_PORT: {}", e)))?;
        }

        if let Ok(prefix) = self.get_env_var("SERVER_API_PREFIX") {
            config.api_prefix = prefix;
        }

        if let Ok(origins) = self.get_env_var("SERVER_ALLOWED_ORIGINS") {
            config.allowed_origins = origins.split(',').map(|s| s.trim().to_string()).collect();
        }

        Ok(())
    }

    /// Apply logging config overrides
    fn apply_logging_overrides(
        &self,
        config: &mut crate::domains::logging::LoggingConfig,
    ) -> ConfigResult<()> {
        if let Ok(log_level) = self.get_env_var("LOG_LEVEL") {
            config.level = crate::domains::logging::LogLevel::from_str(&log_level)
                .map_err(|_| ConfigError::EnvError(format!("Invalid LOG_LEVEL: {}", log_level)))?;
        }

        if let Ok(format) = self.get_env_var("LOG_FORMAT") {
            config.format = crate::domains::logging::LogFormat::from_str(&format)
                .map_err(|_| ConfigError::EnvError(format!("Invalid LOG_FORMAT: {}", format)))?;
        }

        Ok(())
    }

    /// Get environment variable with prefix
    fn get_env_var(&self, name: &str) -> Result<String, std::env::VarError> {
        std::env::var(format!("{}_{}", self.prefix, name))
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
