use reqwest::blocking::{Client, ClientBuilder};
use std::time::Duration;

/// Default base URL of the Pinboard v1 API
pub const API_ENDPOINT: &str = "https://api.pinboard.in/v1/";

/// Create the HTTP client for API requests with bounded timeouts
/// and connection pooling
pub fn create_http_client(config: &Config) -> Client {
    ClientBuilder::new()
        .pool_max_idle_per_host(10)
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .build()
        .expect("Failed to create HTTP client")
}

/// Configuration for the Pinboard client
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the API
    pub endpoint: String,
    /// Overall per-request timeout
    pub timeout: Duration,
    /// Connection timeout
    pub connect_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            endpoint: API_ENDPOINT.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl Config {
    /// Create a new configuration for the given API endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        Config {
            endpoint: endpoint.into(),
            ..Config::default()
        }
    }

    /// Set the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the connection timeout
    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }

    /// The endpoint with a guaranteed trailing slash, ready for
    /// joining a method path
    pub(crate) fn endpoint_base(&self) -> String {
        if self.endpoint.ends_with('/') {
            self.endpoint.clone()
        } else {
            format!("{}/", self.endpoint)
        }
    }
}
