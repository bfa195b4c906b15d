// Standard library
use std::net::IpAddr;
use std::time::Duration;

// 3rd party crates
use reqwest::Client;
use tokio::sync::mpsc;
use tokio::time::sleep;
use tracing::{debug, error, warn};

// Project imports
use crate::fetcher::errors::FetchError;
use crate::fetcher::types::Fetcher;

// Current module imports
use super::constants::{
    default_endpoints, default_max_tries, default_min_quorum, default_timeout_secs,
};
use super::errors::ResolveError;
use super::types::{Resolver, ResolverConfig};

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            endpoints: default_endpoints(),
            min_quorum: default_min_quorum(),
            timeout_secs: default_timeout_secs(),
            max_tries: default_max_tries(),
        }
    }
}

impl Resolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Resolves the public IP address with quorum validation.
    ///
    /// Every configured endpoint is queried concurrently. Outcomes are
    /// collected as they arrive until the global timeout elapses, or
    /// earlier if every endpoint has reported. The collected successes
    /// must reach the configured quorum and agree unanimously on a
    /// single address.
    pub async fn resolve(&self) -> Result<IpAddr, ResolveError> {
        let (tx, mut rx) = mpsc::channel(self.config.endpoints.len().max(1));

        for url in &self.config.endpoints {
            let fetcher = Fetcher::new(self.client.clone(), self.config.max_tries);
            let url = url.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                // Once the resolver has decided, the receiver is gone and
                // the send fails, discarding this late result.
                let _ = tx.send(fetcher.fetch(&url).await).await;
            });
        }
        drop(tx);

        let mut addresses: Vec<IpAddr> = Vec::new();
        let mut failures: Vec<FetchError> = Vec::new();

        let deadline = sleep(Duration::from_secs(self.config.timeout_secs));
        tokio::pin!(deadline);

        loop {
            tokio::select! {
                outcome = rx.recv() => match outcome {
                    Some(Ok(ip)) => {
                        debug!("Endpoint reported {}", ip);
                        addresses.push(ip);
                    }
                    Some(Err(e)) => {
                        error!("Failed to query IP endpoint: {}", e);
                        failures.push(e);
                    }
                    // Every endpoint has reported, no need to wait out
                    // the deadline.
                    None => break,
                },
                _ = &mut deadline => {
                    debug!(
                        "Collection deadline reached with {} of {} responses",
                        addresses.len(),
                        self.config.endpoints.len()
                    );
                    break;
                }
            }
        }

        self.validate(addresses, failures)
    }

    /// Requires a quorum of successes that unanimously agree on one address.
    fn validate(
        &self,
        addresses: Vec<IpAddr>,
        failures: Vec<FetchError>,
    ) -> Result<IpAddr, ResolveError> {
        // An empty success set can never agree on an address, even when
        // the configured quorum is zero.
        if addresses.is_empty() || addresses.len() < self.config.min_quorum {
            warn!(
                "Insufficient consensus: got {} responses, need {}",
                addresses.len(),
                self.config.min_quorum
            );
            return Err(ResolveError::QuorumNotReached {
                received: addresses.len(),
                required: self.config.min_quorum,
                total: self.config.endpoints.len(),
                failures,
            });
        }

        let first = addresses[0];
        if addresses.iter().any(|ip| *ip != first) {
            let mut distinct: Vec<IpAddr> = Vec::new();
            for ip in addresses {
                if !distinct.contains(&ip) {
                    distinct.push(ip);
                }
            }
            warn!("Endpoints disagree on the address: {:?}", distinct);
            return Err(ResolveError::Disagreement { addresses: distinct });
        }

        Ok(first)
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(ResolverConfig::default())
    }
}
