//! Error types for the entropy pipeline and report I/O.

use thiserror::Error;

/// Errors surfaced by the statistical core.
#[derive(Debug, Error, PartialEq)]
pub enum EntropyError {
    /// A non-empty count vector summed to zero, so no probability
    /// distribution can be derived from it.
    #[error("degenerate distribution: all {len} counts are zero")]
    DegenerateDistribution {
        /// Length of the offending count vector
        len: usize,
    },
}

/// Errors surfaced when writing or reading entropy reports.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The report file could not be created, opened, or written.
    #[error("could not access report file: {0}")]
    Io(#[from] std::io::Error),
    /// The report contents could not be encoded or decoded as JSON.
    #[error("could not encode or decode report JSON: {0}")]
    Json(#[from] serde_json::Error),
}
