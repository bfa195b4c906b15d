// 3rd party crates
use reqwest::Client;

/// Queries a single endpoint for the public IP address
pub struct Fetcher {
    pub client: Client,
    pub max_tries: u32,
}

/// Exponential backoff state, local to one fetch invocation
pub struct Backoff {
    pub attempt: u32,
}
