//! The level and experience pair a character carries.

use serde::Serialize;

/// A character's level and accumulated experience.
///
/// Readable by anyone; only the [`LevelingEngine`](super::LevelingEngine)
/// writes to it, so the level always matches the experience band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Progress {
    pub(crate) level: u32,
    pub(crate) experience: u64,
}

impl Progress {
    /// Level 1 with no experience.
    pub fn new() -> Self {
        Self {
            level: 1,
            experience: 0,
        }
    }

    /// Current level, always at least 1.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Accumulated experience.
    pub fn experience(&self) -> u64 {
        self.experience
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "level {} ({} xp)", self.level, self.experience)
    }
}
