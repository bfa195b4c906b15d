//! Quorum IP Resolution
//!
//! This module determines the host's public IP address by querying
//! multiple independent endpoints concurrently and accepting the result
//! only when enough of them agree.
//!
//! # Features
//!
//! - One concurrent fetch task per configured endpoint
//! - Quorum-based agreement validation
//! - Global timeout bounding the whole resolution attempt
//! - Aggregated errors carrying every individual endpoint failure
//!
//! # Architecture
//!
//! Fetch tasks deliver their outcome over an mpsc channel sized to the
//! endpoint count, so a slow or failed endpoint never blocks the others.
//! The resolver is the single consumer: it collects successes and
//! failures as they arrive until the deadline elapses or every endpoint
//! has reported, then validates the successes for quorum and unanimity.
//!
//! # Example
//!
//! ```rust
//! use pubip::{Resolver, ResolverConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = Resolver::new(ResolverConfig::default());
//! let ip = resolver.resolve().await?;
//! println!("Public IP: {}", ip);
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Resolution fails with a single combined error: either not enough
//! endpoints responded before the deadline (the error lists every
//! individual failure observed), or the responders disagreed on the
//! address (the error lists the distinct conflicting values).

pub mod constants;
pub mod errors;
pub mod impls;
pub mod types;
