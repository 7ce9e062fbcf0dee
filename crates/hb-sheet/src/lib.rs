//! Character sheets for Heldenbuch.
//!
//! A [`Character`] bundles ability scores, alignment, resources, an
//! [`Inventory`], and a level/experience pair kept consistent by the
//! leveling engine from `hb-mechanics`. Characters are configured with a
//! [`CharacterBuilder`] and persisted as a [`CharacterRecord`].

/// The six ability scores and how unset ones are rolled.
pub mod abilities;
/// The nine two-letter alignments.
pub mod alignment;
/// The character entity, its builder, and its record.
pub mod character;
/// Error types used throughout the crate.
pub mod error;
/// Slot-bounded item inventory.
pub mod inventory;

/// Re-export ability types.
pub use abilities::{Ability, AbilityScores};
/// Re-export the alignment type.
pub use alignment::Alignment;
/// Re-export character types.
pub use character::{Character, CharacterBuilder, CharacterId, CharacterRecord};
/// Re-export error types.
pub use error::{SheetError, SheetResult};
/// Re-export the inventory type.
pub use inventory::Inventory;
