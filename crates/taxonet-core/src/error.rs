//! Error types for network extraction

use thiserror::Error;

/// The single semantic failure of an extraction run.
///
/// Every other irregularity in the source data (malformed lines, missing
/// tags, dangling child references, duplicate codes) is absorbed by the
/// permissive parsing fallbacks and never surfaces as an error.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// The configured root has no record in the notation index.
    #[error("root notation not found in textbase: {0}")]
    RootNotFound(String),
}
