//! Error types for character sheets.

use hb_mechanics::MechError;
use thiserror::Error;

/// Result type for character sheet operations.
pub type SheetResult<T> = Result<T, SheetError>;

/// Errors that can occur while building or changing a character.
#[derive(Debug, Error)]
pub enum SheetError {
    /// A value was malformed or outside the allowed range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The inventory does not have enough free slots.
    #[error("not enough space to add {requested} '{item}': {available} slot(s) free")]
    CapacityExceeded {
        /// The item being added.
        item: String,
        /// How many were requested.
        requested: u32,
        /// Free slots at the time of the request.
        available: usize,
    },

    /// The inventory holds fewer of an item than requested.
    #[error("cannot remove {requested} '{item}': {present} in inventory")]
    NotFound {
        /// The item being removed.
        item: String,
        /// How many were requested.
        requested: u32,
        /// How many are present.
        present: usize,
    },

    /// Dice or leveling error.
    #[error(transparent)]
    Mechanics(#[from] MechError),

    /// A record could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
