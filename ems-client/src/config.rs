//! Client configuration

use std::path::PathBuf;

/// Client configuration for connecting to the EMS backend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL including the `/api` prefix
    /// (e.g. "http://localhost:8080/api").
    pub base_url: String,

    /// Request timeout in seconds.
    pub timeout: u64,

    /// Directory for durable client state (the persisted session).
    pub data_dir: PathBuf,
}

impl ClientConfig {
    /// Create a new configuration for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
            data_dir: PathBuf::from("./data"),
        }
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the durable state directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080/api")
    }
}
