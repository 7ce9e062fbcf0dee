//! The six ability scores and how unset scores are rolled.
//!
//! An unset score is rolled as 4d6, dropping the lowest die, which puts
//! every rolled score in `3..=18`.

use std::str::FromStr;

use hb_mechanics::{DiceSource, DiceSpec, MechError, MechResult, roll_total};
use serde::{Deserialize, Serialize};

use crate::error::SheetError;

/// One of the six abilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ability {
    /// Physical power.
    Strength,
    /// Agility and reflexes.
    Dexterity,
    /// Health and stamina.
    Constitution,
    /// Perception and insight.
    Wisdom,
    /// Reasoning and memory.
    Intelligence,
    /// Force of personality.
    Charisma,
}

impl Ability {
    /// All six abilities in sheet order.
    pub const ALL: [Self; 6] = [
        Self::Strength,
        Self::Dexterity,
        Self::Constitution,
        Self::Wisdom,
        Self::Intelligence,
        Self::Charisma,
    ];

    /// Full lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Dexterity => "dexterity",
            Self::Constitution => "constitution",
            Self::Wisdom => "wisdom",
            Self::Intelligence => "intelligence",
            Self::Charisma => "charisma",
        }
    }

    /// Three-letter abbreviation.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Strength => "str",
            Self::Dexterity => "dex",
            Self::Constitution => "con",
            Self::Wisdom => "wis",
            Self::Intelligence => "int",
            Self::Charisma => "cha",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for Ability {
    type Err = SheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|a| a.name() == lower || a.abbreviation() == lower)
            .ok_or_else(|| SheetError::InvalidArgument(format!("unknown ability: \"{}\"", s.trim())))
    }
}

impl std::fmt::Display for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A character's six ability scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScores {
    /// Physical power.
    pub strength: u32,
    /// Agility and reflexes.
    pub dexterity: u32,
    /// Health and stamina.
    pub constitution: u32,
    /// Perception and insight.
    pub wisdom: u32,
    /// Reasoning and memory.
    pub intelligence: u32,
    /// Force of personality.
    pub charisma: u32,
}

impl AbilityScores {
    /// Roll all six scores with the thread-local generator.
    pub fn roll() -> MechResult<Self> {
        Self::resolve([None; 6], roll_score)
    }

    /// Roll all six scores drawing from `source`.
    pub fn roll_with<S: DiceSource + ?Sized>(source: &mut S) -> MechResult<Self> {
        Self::resolve([None; 6], || roll_score_with(&mut *source))
    }

    /// Fill in scores, calling `roll` for each one left as `None`.
    pub(crate) fn resolve(
        given: [Option<u32>; 6],
        mut roll: impl FnMut() -> MechResult<u32>,
    ) -> MechResult<Self> {
        let mut scores = Self::default();
        for ability in Ability::ALL {
            let score = match given[ability.index()] {
                Some(score) => score,
                None => roll()?,
            };
            scores.set(ability, score);
        }
        Ok(scores)
    }

    /// The score for `ability`.
    pub fn get(&self, ability: Ability) -> u32 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Wisdom => self.wisdom,
            Ability::Intelligence => self.intelligence,
            Ability::Charisma => self.charisma,
        }
    }

    /// Replace the score for `ability`.
    pub fn set(&mut self, ability: Ability, score: u32) {
        let slot = match ability {
            Ability::Strength => &mut self.strength,
            Ability::Dexterity => &mut self.dexterity,
            Ability::Constitution => &mut self.constitution,
            Ability::Wisdom => &mut self.wisdom,
            Ability::Intelligence => &mut self.intelligence,
            Ability::Charisma => &mut self.charisma,
        };
        *slot = score;
    }

    /// The modifier for `ability`: `floor((score - 10) / 2)`.
    pub fn modifier(&self, ability: Ability) -> i64 {
        modifier(self.get(ability))
    }
}

/// The modifier a score grants: `floor((score - 10) / 2)`.
pub fn modifier(score: u32) -> i64 {
    (i64::from(score) - 10).div_euclid(2)
}

/// The dice an unset score is rolled with.
fn ability_dice() -> MechResult<DiceSpec> {
    DiceSpec::new(4, 6, 0, 1)
}

/// Roll one score with the thread-local generator.
pub fn roll_score() -> MechResult<u32> {
    score_from_total(roll_total(4, 6, 0, 1)?)
}

/// Roll one score drawing from `source`.
pub fn roll_score_with<S: DiceSource + ?Sized>(source: &mut S) -> MechResult<u32> {
    score_from_total(ability_dice()?.roll_with(source).total())
}

fn score_from_total(total: i64) -> MechResult<u32> {
    u32::try_from(total)
        .map_err(|_| MechError::InvalidArgument(format!("{total} is not a valid ability score")))
}
