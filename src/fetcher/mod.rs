//! Single-endpoint IP Fetching
//!
//! This module queries one external "what is my IP" service over plain
//! HTTP GET. Transport-level failures are retried with jittered
//! exponential backoff up to a fixed attempt cap; any received response
//! is definitive and is never retried.
//!
//! A response is accepted only when it carries status 200 and its
//! whitespace-trimmed body parses as an IPv4 or IPv6 literal. The parsed
//! [`std::net::IpAddr`] is the canonical form used for agreement checks
//! by the resolver.

pub mod constants;
pub mod errors;
pub mod impls;
pub mod types;
