// 3rd party crates
use reqwest::Client;
use serde::Deserialize;

// Current module imports
use super::constants::{
    default_endpoints, default_max_tries, default_min_quorum, default_timeout_secs,
};

#[derive(Debug, Clone, Deserialize)]
pub struct ResolverConfig {
    /// Endpoints queried for the public IP, one concurrent fetch each
    #[serde(default = "default_endpoints")]
    pub endpoints: Vec<String>,
    /// Minimum number of successful responses that must agree on the IP
    #[serde(default = "default_min_quorum")]
    pub min_quorum: usize,
    /// Global timeout for the whole resolution attempt (in seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Maximum GET attempts per endpoint before it counts as unreachable
    #[serde(default = "default_max_tries")]
    pub max_tries: u32,
}

pub struct Resolver {
    pub config: ResolverConfig,
    pub client: Client,
}
