// Standard library
use std::net::IpAddr;
use std::time::Duration;

// 3rd party crates
use reqwest::{Client, StatusCode};
use tokio::time::sleep;
use tracing::debug;

// Current module imports
use super::constants::{BACKOFF_FACTOR, BACKOFF_MAX_MS, BACKOFF_MIN_MS};
use super::errors::FetchError;
use super::types::{Backoff, Fetcher};

impl Backoff {
    pub fn new() -> Self {
        Self { attempt: 0 }
    }

    /// Next delay: exponential in the attempt number, capped at the
    /// maximum, then jittered uniformly into [min, capped] so that
    /// concurrent fetchers do not retry in lockstep.
    pub fn next_delay(&mut self) -> Duration {
        let min = BACKOFF_MIN_MS as f64;
        let capped = (min * BACKOFF_FACTOR.powi(self.attempt as i32)).min(BACKOFF_MAX_MS as f64);
        self.attempt += 1;

        let jittered = min + fastrand::f64() * (capped - min);
        Duration::from_millis(jittered as u64)
    }
}

impl Default for Backoff {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher {
    pub fn new(client: Client, max_tries: u32) -> Self {
        Self { client, max_tries }
    }

    /// Fetches the public IP address reported by one endpoint.
    ///
    /// Only transport-level failures are retried. A response that arrived
    /// is definitive: a non-200 status or an unparseable body fails
    /// immediately without consuming further attempts.
    pub async fn fetch(&self, url: &str) -> Result<IpAddr, FetchError> {
        let mut backoff = Backoff::new();

        for attempt in 1..=self.max_tries {
            let response = match self.client.get(url).send().await {
                Ok(response) => response,
                Err(e) => {
                    let delay = backoff.next_delay();
                    debug!(
                        "Attempt {}/{} for {} failed: {}, retrying in {:?}",
                        attempt, self.max_tries, url, e, delay
                    );
                    sleep(delay).await;
                    continue;
                }
            };

            let status = response.status();
            let body = response.text().await.map_err(|source| FetchError::BodyRead {
                url: url.to_string(),
                source,
            })?;

            if status != StatusCode::OK {
                return Err(FetchError::UnexpectedStatus {
                    url: url.to_string(),
                    status,
                    body,
                });
            }

            let trimmed = body.trim();
            return trimmed
                .parse::<IpAddr>()
                .map_err(|_| FetchError::InvalidAddress {
                    url: url.to_string(),
                    body: trimmed.to_string(),
                });
        }

        Err(FetchError::Unreachable {
            url: url.to_string(),
            tries: self.max_tries,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use httpmock::prelude::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::super::constants::MAX_TRIES;
    use super::*;

    fn fetcher() -> Fetcher {
        Fetcher::new(Client::new(), MAX_TRIES)
    }

    #[tokio::test]
    async fn parses_and_canonicalizes_the_body() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(200)
                .body("  2001:0db8:0000:0000:0000:0000:0000:0001\n");
        });

        let ip = fetcher()
            .fetch(&server.url("/"))
            .await
            .expect("fetch failed");

        mock.assert();
        assert_eq!(ip.to_string(), "2001:db8::1");
    }

    #[tokio::test]
    async fn non_200_fails_without_retry() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(500).body("busted");
        });

        let err = fetcher().fetch(&server.url("/")).await.unwrap_err();

        mock.assert();
        match err {
            FetchError::UnexpectedStatus { status, body, .. } => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(body, "busted");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn invalid_literal_fails_without_retry() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(200).body("300.1.1.1");
        });

        let err = fetcher().fetch(&server.url("/")).await.unwrap_err();

        mock.assert();
        match err {
            FetchError::InvalidAddress { body, .. } => assert_eq!(body, "300.1.1.1"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn leading_zero_octets_are_rejected() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(200).body("192.168.001.1");
        });

        let err = fetcher().fetch(&server.url("/")).await.unwrap_err();

        assert!(matches!(err, FetchError::InvalidAddress { .. }));
    }

    #[tokio::test]
    async fn unreachable_after_all_attempts() {
        // Bind then drop to get a local port nothing listens on.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/", listener.local_addr().unwrap());
        drop(listener);

        let fetcher = Fetcher::new(Client::new(), 2);
        let start = Instant::now();
        let err = fetcher.fetch(&url).await.unwrap_err();

        match err {
            FetchError::Unreachable { tries, .. } => assert_eq!(tries, 2),
            other => panic!("unexpected error: {other}"),
        }
        // Two backoff sleeps of at least the minimum delay each.
        assert!(start.elapsed() >= Duration::from_millis(200));
    }

    #[tokio::test]
    async fn recovers_after_transport_failures() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/", listener.local_addr().unwrap());

        tokio::spawn(async move {
            // Drop the first two connections without answering, then
            // serve a valid response on the third attempt.
            for _ in 0..2 {
                let (stream, _) = listener.accept().await.unwrap();
                drop(stream);
            }
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf).await;
            stream
                .write_all(
                    b"HTTP/1.1 200 OK\r\ncontent-length: 7\r\nconnection: close\r\n\r\n9.9.9.9",
                )
                .await
                .unwrap();
        });

        let ip = fetcher().fetch(&url).await.expect("fetch failed");
        assert_eq!(ip.to_string(), "9.9.9.9");
    }

    #[test]
    fn backoff_delays_grow_and_stay_bounded() {
        let mut backoff = Backoff::new();
        let mut previous_cap = 0u64;

        for attempt in 0..8 {
            let delay = backoff.next_delay().as_millis() as u64;
            let cap = (super::BACKOFF_MIN_MS as f64
                * super::BACKOFF_FACTOR.powi(attempt))
            .min(super::BACKOFF_MAX_MS as f64) as u64;

            assert!(delay >= super::BACKOFF_MIN_MS);
            assert!(delay <= super::BACKOFF_MAX_MS);
            assert!(delay <= cap);
            assert!(cap >= previous_cap);
            previous_cap = cap;
        }
    }
}
