//! Limit/offset defaults for list endpoints.

/// Page size used when the caller does not supply `limit`.
pub const DEFAULT_LIMIT: i64 = 100;

/// Resolve a user-provided limit.
///
/// `None` and negative values fall back to `default`. Zero is passed through
/// and yields an empty page.
pub fn clamp_limit(limit: Option<i64>, default: i64) -> i64 {
    match limit {
        Some(l) if l >= 0 => l,
        _ => default,
    }
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

/// Read a raw query value as an integer.
///
/// Empty and non-integer values count as not supplied, so the defaults
/// apply instead of the request failing.
pub fn parse_param(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|value| value.parse().ok())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
