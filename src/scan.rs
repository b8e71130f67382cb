//! Request-boundary helpers.
//!
//! The request-handling wrapper itself lives in the host runtime; this
//! module provides the framework-neutral piece it needs: classify every
//! header value of an inbound request and decide whether to
//! short-circuit it.

use crate::looks_like_jndi_injection;

/// Status code reported when no override is configured.
///
/// Deliberately innocuous so vulnerability scanners probing with
/// payloads are not tipped off that anything was detected.
pub const DEFAULT_BLOCK_STATUS: u16 = 200;

/// Boundary configuration. The blocking status code is the only option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// HTTP status code to answer with when a header value matches.
    pub block_status: u16,
}

impl ScanConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            block_status: DEFAULT_BLOCK_STATUS,
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify a sequence of header values.
///
/// Returns `Some(status)` with the configured blocking status as soon
/// as any value looks like a jndi injection, `None` when the request
/// can be forwarded unchanged.
pub fn scan_header_values<'a, I>(config: &ScanConfig, values: I) -> Option<u16>
where
    I: IntoIterator<Item = &'a str>,
{
    values
        .into_iter()
        .any(looks_like_jndi_injection)
        .then_some(config.block_status)
}
