//! HTTP server configuration

use crate::error::ConfigResult;
use crate::validation::{validate_required_string, Validatable};
use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path prefix under which all API routes are mounted
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,

    /// Allowed CORS origins (use ["*"] only in development)
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
            api_prefix: default_api_prefix(),
            allowed_origins: default_allowed_origins(),
        }
    }
}

impl ServerConfig {
    /// Socket address string for the listener.
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

impl Validatable for ServerConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_required_string(&self.bind_address, "bind_address", self.domain_name())?;

        if !self.api_prefix.starts_with('/') {
            return Err(self.validation_error(format!(
                "api_prefix must start with '/', got '{}'",
                self.api_prefix
            )));
        }
        if self.api_prefix.ends_with('/') {
            return Err(self.validation_error("api_prefix must not end with '/'"));
        }

        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "server"
    }
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_api_prefix() -> String {
    "/v1".to_string()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost".to_string(), "https://localhost".to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.listen_address(), "127.0.0.1:3000");
    }

    #[test]
    fn test_rejects_bad_prefix() {
        let config = ServerConfig {
            api_prefix: "v1".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ServerConfig {
            api_prefix: "/v1/".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
