//! Application configuration management

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default KKM service URL
    pub server_url: String,
    /// HTTP request timeout in seconds
    pub request_timeout_secs: u64,
    /// Default log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:8080".to_string(),
            request_timeout_secs: 30,
            log_level: "info".to_string(),
        }
    }
}
