//! Public IP discovery with quorum validation.
//!
//! Queries multiple independent "what is my IP" services concurrently,
//! retries transient transport failures with jittered exponential
//! backoff, and accepts an address only when a quorum of services agree
//! on it.
//!
//! # Example
//!
//! ```rust
//! use pubip::Resolver;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = Resolver::default();
//! let ip = resolver.resolve().await?;
//! println!("Public IP: {}", ip);
//! # Ok(())
//! # }
//! ```

// Project modules
pub mod fetcher;
pub mod resolver;

// Public API
pub use fetcher::errors::FetchError;
pub use fetcher::types::Fetcher;
pub use resolver::errors::ResolveError;
pub use resolver::types::{Resolver, ResolverConfig};
