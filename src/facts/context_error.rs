use core::time::Duration;

/// Why a [`Context`](super::Context) could not be built for an identifier.
#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    /// The identifier could not be parsed into something the builder understands.
    #[error("malformed identifier: {0}")]
    MalformedInput(String),

    /// The remote source could not be reached or refused the request.
    #[error("retrieval failed: {0}")]
    Retrieval(ohno::AppError),

    /// The builder did not finish within the allotted time.
    #[error("timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),
}

impl ContextError {
    /// Stable, machine-readable name of the failure kind
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::MalformedInput(_) => "malformed_input",
            Self::Retrieval(_) => "retrieval",
            Self::Timeout(_) => "timeout",
        }
    }
}
