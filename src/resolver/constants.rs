// Project imports
use crate::fetcher::constants::MAX_TRIES;

/// Plain-text public IP services queried by default
pub const DEFAULT_ENDPOINTS: [&str; 7] = [
    "https://api.ipify.org",
    "https://icanhazip.com",
    "https://checkip.amazonaws.com",
    "https://ident.me",
    "https://ipecho.net/plain",
    "https://ipinfo.io/ip",
    "https://wtfismyip.com/text",
];

/// Default settings
pub const DEFAULT_MIN_QUORUM: usize = 3;
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

pub fn default_endpoints() -> Vec<String> {
    DEFAULT_ENDPOINTS.iter().map(|url| url.to_string()).collect()
}

pub fn default_min_quorum() -> usize {
    DEFAULT_MIN_QUORUM
}

pub fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

pub fn default_max_tries() -> u32 {
    MAX_TRIES
}
