//! Shared query parameter types for API handlers.

use prodbench_core::pagination::{clamp_limit, clamp_offset, parse_param, DEFAULT_LIMIT};
use serde::Deserialize;

/// Generic pagination parameters (`?limit=&offset=`).
///
/// Values are kept as raw strings: `?limit=` or `?limit=abc` must fall back
/// to the defaults rather than reject the request. Resolve them with
/// [`PaginationParams::limit`] and [`PaginationParams::offset`].
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl PaginationParams {
    /// Page size, defaulting to `prodbench_core::pagination::DEFAULT_LIMIT`.
    pub fn limit(&self) -> i64 {
        clamp_limit(parse_param(self.limit.as_deref()), DEFAULT_LIMIT)
    }

    /// Row offset, never negative.
    pub fn offset(&self) -> i64 {
        clamp_offset(parse_param(self.offset.as_deref()))
    }
}
