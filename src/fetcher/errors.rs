// 3rd party crates
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{url} returned status {status}, body: {body}")]
    UnexpectedStatus {
        url: String,
        status: StatusCode,
        body: String,
    },

    #[error("invalid IP address from {url}: {body}")]
    InvalidAddress { url: String, body: String },

    #[error("failed to read response body from {url}: {source}")]
    BodyRead { url: String, source: reqwest::Error },

    #[error("failed to reach {url} after {tries} attempts")]
    Unreachable { url: String, tries: u32 },
}
