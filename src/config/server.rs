//! Server configuration

use super::error::ValidationError;
use serde::Deserialize;
use std::net::SocketAddr;

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Default for Environment {
    fn default() -> Self {
        Self::Development
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Deployment environment
    #[serde(default)]
    pub environment: Environment,

    /// Log level filter directives
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Allowed CORS origins, comma-separated. `*` allows any origin.
    #[serde(default = "default_cors_origins")]
    pub cors_origins: String,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Idle flow expiry in seconds. Flows untouched for longer than this
    /// are removed by the periodic sweep. `0` disables expiry.
    #[serde(default = "default_flow_idle_ttl")]
    pub flow_idle_ttl_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info,program_pathfinder=debug,tower_http=debug".to_string()
}

fn default_cors_origins() -> String {
    "*".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_flow_idle_ttl() -> u64 {
    // One hour of inactivity before an abandoned flow is dropped.
    3600
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: Environment::default(),
            log_level: default_log_level(),
            cors_origins: default_cors_origins(),
            request_timeout_secs: default_request_timeout(),
            flow_idle_ttl_secs: default_flow_idle_ttl(),
        }
    }
}

impl ServerConfig {
    /// Socket address to bind the listener to
    ///
    /// # Panics
    ///
    /// Panics if host/port do not form a valid socket address. `validate()`
    /// rejects such configurations before this is called.
    pub fn socket_addr(&self) -> SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("validated host and port should form a socket address")
    }

    /// Parsed list of allowed CORS origins
    pub fn cors_origins_list(&self) -> Vec<String> {
        self.cors_origins
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Whether any origin is allowed
    pub fn cors_allow_any(&self) -> bool {
        self.cors_origins.trim() == "*"
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Validate server configuration
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the port is zero, the host/port pair is
    /// not a valid socket address, or the request timeout is out of range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort(self.port));
        }

        if format!("{}:{}", self.host, self.port)
            .parse::<SocketAddr>()
            .is_err()
        {
            return Err(ValidationError::MissingRequired(format!(
                "server.host ({}) is not a valid bind address",
                self.host
            )));
        }

        if self.request_timeout_secs == 0 || self.request_timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout {
                field: "server.request_timeout_secs".to_string(),
                value: self.request_timeout_secs,
                max: 300,
            });
        }

        Ok(())
    }
}
