//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Settings for the HTTP server and the commerce backend it fronts.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Base URL of the commerce backend, e.g. `https://backend.example.com`.
    pub backend_url: String,
    /// Timeout applied to every outbound backend call.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Maximum concurrent product lookups when hydrating id lists.
    #[serde(default = "default_detail_concurrency")]
    pub detail_concurrency: usize,
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_detail_concurrency() -> usize {
    4
}
