//! Dice rolling and experience/leveling arithmetic for Heldenbuch.
//!
//! Provides a validated [`DiceSpec`] with drop-lowest support rolled from a
//! cryptographically strong [`DiceSource`], and a [`LevelingEngine`] that
//! keeps a character's level in step with its experience.

pub mod dice;
pub mod error;
pub mod leveling;

pub use dice::{DiceSource, DiceSpec, RollResult, roll, roll_detailed, roll_total};
pub use error::{MechError, MechResult};
pub use leveling::{LevelChange, LevelCurve, LevelingEngine, Progress, threshold};
