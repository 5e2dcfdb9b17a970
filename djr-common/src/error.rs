//! Common error types for DJR

use thiserror::Error;

/// Common result type for DJR operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error taxonomy for the request relay pipeline.
///
/// Every variant carries a human-readable message that is safe to surface
/// verbatim to the end user. The variant itself is the machine-checkable
/// part: the HTTP boundary maps variants to status codes without inspecting
/// message text.
#[derive(Error, Debug)]
pub enum Error {
    /// Deployment misconfiguration (missing or unparseable destination URL).
    /// Distinct from per-request conditions; maps to 500 at the boundary.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid caller input; no network attempt was made.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Network failure reaching an upstream (DNS, connection, timeout).
    #[error("Transport error: {0}")]
    Transport(String),

    /// Upstream was reachable but returned a failure status.
    #[error("Upstream error ({status}): {message}")]
    Upstream { status: u16, message: String },

    /// Upstream rate limit hit. Kept separate from `Upstream` because the
    /// boundary maps it to a different status class (503, not 502): the
    /// caller did nothing wrong and should back off and retry.
    #[error("Rate limited: {0}")]
    RateLimited(String),
}

impl Error {
    /// The user-facing message carried by this error.
    pub fn message(self) -> String {
        match self {
            Error::Upstream { message, .. } => message,
            Error::Config(message)
            | Error::InvalidInput(message)
            | Error::Transport(message)
            | Error::RateLimited(message) => message,
        }
    }
}
