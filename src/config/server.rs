//! Server configuration

use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

use super::error::ValidationError;

/// HTTP server settings.
///
/// `request_timeout_secs` and `cors_origins` feed the tower-http layers the
/// binary installs; everything here is honored at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Environment name
    #[serde(default)]
    pub environment: Environment,

    /// Rust log filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Per-request timeout, in seconds, applied by the HTTP stack
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Comma-separated allowed CORS origins; unset means permissive
    /// (development)
    pub cors_origins: Option<String>,
}

/// Application environment
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl ServerConfig {
    /// Get the socket address to bind to.
    ///
    /// `validate()` runs at startup before this, so the address is known to
    /// parse.
    pub fn socket_addr(&self) -> SocketAddr {
        self.addr_string()
            .parse()
            .expect("validated socket address")
    }

    /// The request timeout as a [`Duration`], ready for the timeout layer.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Get CORS origins as a vector
    pub fn cors_origins_list(&self) -> Vec<String> {
        self.cors_origins
            .as_ref()
            .map(|raw| raw.split(',').map(|origin| origin.trim().to_string()).collect())
            .unwrap_or_default()
    }

    /// Validate server configuration.
    ///
    /// Catches a malformed host here so a bad `STUDIO__SERVER__HOST`
    /// surfaces as a configuration error at startup instead of a panic at
    /// bind time.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if self.request_timeout_secs == 0 || self.request_timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.addr_string().parse::<SocketAddr>().is_err() {
            return Err(ValidationError::InvalidHost);
        }
        Ok(())
    }

    fn addr_string(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: Environment::default(),
            log_level: default_log_level(),
            request_timeout_secs: default_request_timeout(),
            cors_origins: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info,studio_scheduler=debug".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(host: &str, port: u16) -> ServerConfig {
        ServerConfig {
            host: host.to_string(),
            port,
            ..Default::default()
        }
    }

    #[test]
    fn defaults_bind_all_interfaces_on_8080() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.environment, Environment::Development);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn socket_addr_combines_host_and_port() {
        let config = config_with("127.0.0.1", 3000);
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn request_timeout_converts_to_duration() {
        let config = ServerConfig {
            request_timeout_secs: 45,
            ..Default::default()
        };
        assert_eq!(config.request_timeout(), Duration::from_secs(45));
    }

    #[test]
    fn production_environment_is_detected() {
        let mut config = ServerConfig::default();
        assert!(!config.is_production());

        config.environment = Environment::Production;
        assert!(config.is_production());
    }

    #[test]
    fn cors_origins_split_on_commas_and_trim() {
        let config = ServerConfig {
            cors_origins: Some("http://localhost:5173, https://studio.example.com".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.cors_origins_list(),
            vec![
                "http://localhost:5173".to_string(),
                "https://studio.example.com".to_string(),
            ]
        );
    }

    #[test]
    fn unset_cors_origins_yield_an_empty_list() {
        assert!(ServerConfig::default().cors_origins_list().is_empty());
    }

    #[test]
    fn zero_port_fails_validation() {
        let config = config_with("0.0.0.0", 0);
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidPort)
        ));
    }

    #[test]
    fn out_of_bounds_timeouts_fail_validation() {
        for secs in [0, 301] {
            let config = ServerConfig {
                request_timeout_secs: secs,
                ..Default::default()
            };
            assert!(
                matches!(config.validate(), Err(ValidationError::InvalidTimeout)),
                "timeout {secs}"
            );
        }
    }

    #[test]
    fn unparseable_host_fails_validation_instead_of_panicking_later() {
        let config = config_with("not a host", 8080);
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidHost)
        ));
    }

    #[test]
    fn hostname_style_hosts_fail_validation_until_resolved() {
        // SocketAddr parsing takes IPs only; DNS names need resolving first,
        // so they are rejected up front rather than panicking at bind.
        let config = config_with("localhost", 8080);
        assert!(config.validate().is_err());
    }
}
