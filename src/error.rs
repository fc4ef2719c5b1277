//! Error types for stream construction.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StreamError {
    /// A stream definition violates one of the construction rules.
    #[error("Invalid stream specification: {0}")]
    InvalidSpecification(String),

    #[error("Invalid version-pattern '{pattern}': {source}")]
    InvalidVersionPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl StreamError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidSpecification(msg.into())
    }
}

pub type StreamResult<T> = std::result::Result<T, StreamError>;
