use thiserror::Error;

/// Failures of a single clipboard copy path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// The platform offers no clipboard API (e.g. insecure context)
    #[error("clipboard API unavailable")]
    Unavailable,

    /// The platform rejected the write
    #[error("clipboard write rejected: {0}")]
    Rejected(String),

    /// The legacy copy command reported that nothing was copied
    #[error("copy command refused")]
    CommandRefused,

    /// Creating or preparing the scratch element failed
    #[error("scratch element error: {0}")]
    Scratch(String),
}

pub type Result<T> = std::result::Result<T, ClipboardError>;
