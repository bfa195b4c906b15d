// Standard library
use std::net::IpAddr;

// 3rd party crates
use thiserror::Error;

// Project imports
use crate::fetcher::errors::FetchError;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(
        "not enough responses: got {received} of {total} endpoints, need {required}{}",
        render_failures(.failures)
    )]
    QuorumNotReached {
        received: usize,
        required: usize,
        total: usize,
        failures: Vec<FetchError>,
    },

    #[error("endpoints disagree on the address: {}", render_addresses(.addresses))]
    Disagreement { addresses: Vec<IpAddr> },
}

fn render_failures(failures: &[FetchError]) -> String {
    failures.iter().map(|e| format!("\n{e}")).collect()
}

fn render_addresses(addresses: &[IpAddr]) -> String {
    let rendered: Vec<String> = addresses.iter().map(|ip| ip.to_string()).collect();
    rendered.join(", ")
}
