//! Error taxonomy for the encoder and dispatcher.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HashError>;

/// Everything that can go wrong between a value and its digest.
///
/// There is no "unknown type" digest: an input outside the closed scalar
/// set is an error, never a number a sketch could mistake for a legitimate
/// coordinate.
#[derive(Debug, Error)]
pub enum HashError {
    /// A dynamic input lies outside the closed scalar set. The payload
    /// names the rejected kind.
    #[error("unsupported value type: {0}")]
    UnsupportedType(&'static str),
    /// Forwarded verbatim from an injected hash backend. The built-in
    /// backends never produce this.
    #[error("hash backend failure: {0}")]
    Backend(String),
}
