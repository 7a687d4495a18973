//! Shared constants for the relief API.
//!
//! Centralizes magic numbers that would otherwise be duplicated across crates.

/// Default shelter search radius in kilometers when the caller omits it.
pub const DEFAULT_RADIUS_KM: f64 = 50.0;

/// Maximum number of shelter records exposed by the debug endpoint.
pub const DEBUG_SAMPLE_LIMIT: usize = 10;

/// Per-request timeout for every upstream HTTP call, in seconds.
///
/// Bounds worst-case latency; a timeout surfaces as the unavailable
/// failure kind, never as a hung request.
pub const UPSTREAM_TIMEOUT_SECS: u64 = 10;

/// Upper bound on records fetched from the shelter store in one query.
pub const STORE_FETCH_LIMIT: usize = 1000;
