/// Retry settings
pub const MAX_TRIES: u32 = 3;

/// Backoff settings
pub const BACKOFF_MIN_MS: u64 = 100;
pub const BACKOFF_MAX_MS: u64 = 10_000;
pub const BACKOFF_FACTOR: f64 = 2.0;
