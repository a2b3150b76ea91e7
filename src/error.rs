use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T, E = CyberFlakeError> = std::result::Result<T, E>;

/// Represents errors that can occur while generating or decoding CyberFlakes
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CyberFlakeError {
    /// The supplied instant is not a usable date/time or millisecond count
    #[error("Invalid timestamp {input:?}: {reason}")]
    InvalidTimestamp { input: String, reason: &'static str },
    /// The supplied string is not a non-negative integer that fits in 64 bits
    #[error("Invalid identifier {input:?}: expected a non-negative 64-bit decimal integer")]
    InvalidIdentifier { input: String },
}

impl CyberFlakeError {
    pub(crate) fn invalid_timestamp(input: impl ToString, reason: &'static str) -> Self {
        let input = input.to_string();
        tracing::debug!(%input, reason, "rejected timestamp");
        Self::InvalidTimestamp { input, reason }
    }

    pub(crate) fn invalid_identifier(input: &str) -> Self {
        tracing::debug!(input, "rejected identifier");
        Self::InvalidIdentifier {
            input: input.to_owned(),
        }
    }
}
