// Configuration module entry point
// Manages application configuration and shared request state

mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::upstream::UpstreamClient;

// Re-export public types
pub use types::{Config, HttpConfig, LoggingConfig, ServerConfig, UpstreamConfig};

impl Config {
    /// Load configuration from specified file path (without extension)
    /// Default config file is "config.toml" when no path specified
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("TOOLHUB").separator("__"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8095)?
            .set_default("upstream.base_url", "http://localhost:8090")?
            .set_default("upstream.admin_identity", "admin@example.com")?
            .set_default("upstream.admin_secret", "admin123")?
            .set_default("upstream.collection", "ai_tools")?
            .set_default("logging.access_log", true)?
            .set_default("http.server_name", "Toolhub/0.1")?
            .set_default("http.enable_cors", true)?
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from the default "config.toml"
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

/// Shared application state
///
/// Captured once at startup and passed by reference into the router. The
/// upstream client's bearer token is written during bootstrap, before the
/// listener starts, so no locking is needed afterwards.
pub struct AppState {
    pub config: Config,
    pub upstream: Arc<UpstreamClient>,
}

impl AppState {
    pub fn new(config: Config, upstream: Arc<UpstreamClient>) -> Self {
        Self { config, upstream }
    }
}
