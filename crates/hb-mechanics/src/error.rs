//! Error types for the mechanics engine.

/// Errors that can occur during dice or leveling operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MechError {
    /// A value was outside the range the operation accepts.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A dice notation string could not be parsed.
    #[error("invalid dice notation: \"{0}\"")]
    InvalidNotation(String),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
