//! Configuration for a new character.

use hb_mechanics::{DiceSource, LevelCurve, LevelingEngine, MechResult};
use tracing::debug;

use super::{Character, CharacterId, check_hp};
use crate::abilities::{Ability, AbilityScores, roll_score, roll_score_with};
use crate::alignment::Alignment;
use crate::error::SheetResult;
use crate::inventory::{DEFAULT_INVENTORY_SIZE, Inventory};

/// Settings for a character about to be built.
///
/// Ability scores left unset are rolled when the character is built.
#[derive(Debug, Clone)]
pub struct CharacterBuilder {
    level: u32,
    alignment: Option<Alignment>,
    abilities: [Option<u32>; 6],
    wealth: u64,
    hp: u32,
    mp: u32,
    inventory_size: usize,
    curve: LevelCurve,
}

impl Default for CharacterBuilder {
    fn default() -> Self {
        Self {
            level: 1,
            alignment: None,
            abilities: [None; 6],
            wealth: 0,
            hp: 1,
            mp: 0,
            inventory_size: DEFAULT_INVENTORY_SIZE,
            curve: LevelCurve::default(),
        }
    }
}

impl CharacterBuilder {
    /// Start at `level`, with exactly the experience that level needs.
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    /// Set the alignment.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Fix an ability score instead of rolling it.
    pub fn with_ability(mut self, ability: Ability, score: u32) -> Self {
        self.abilities[ability.index()] = Some(score);
        self
    }

    /// Fix the strength score.
    pub fn with_strength(self, score: u32) -> Self {
        self.with_ability(Ability::Strength, score)
    }

    /// Fix the dexterity score.
    pub fn with_dexterity(self, score: u32) -> Self {
        self.with_ability(Ability::Dexterity, score)
    }

    /// Fix the constitution score.
    pub fn with_constitution(self, score: u32) -> Self {
        self.with_ability(Ability::Constitution, score)
    }

    /// Fix the wisdom score.
    pub fn with_wisdom(self, score: u32) -> Self {
        self.with_ability(Ability::Wisdom, score)
    }

    /// Fix the intelligence score.
    pub fn with_intelligence(self, score: u32) -> Self {
        self.with_ability(Ability::Intelligence, score)
    }

    /// Fix the charisma score.
    pub fn with_charisma(self, score: u32) -> Self {
        self.with_ability(Ability::Charisma, score)
    }

    /// Set the starting wealth.
    pub fn with_wealth(mut self, wealth: u64) -> Self {
        self.wealth = wealth;
        self
    }

    /// Set the starting hit points (must be at least 1).
    pub fn with_hp(mut self, hp: u32) -> Self {
        self.hp = hp;
        self
    }

    /// Set the starting magic points.
    pub fn with_mp(mut self, mp: u32) -> Self {
        self.mp = mp;
        self
    }

    /// Set the number of inventory slots.
    pub fn with_inventory_size(mut self, size: usize) -> Self {
        self.inventory_size = size;
        self
    }

    /// Use a different experience curve.
    pub fn with_curve(mut self, curve: LevelCurve) -> Self {
        self.curve = curve;
        self
    }

    /// Build the character, rolling unset abilities with the thread-local generator.
    pub fn build(self) -> SheetResult<Character> {
        self.assemble(roll_score)
    }

    /// Build the character, rolling unset abilities from `source`.
    pub fn build_with<S: DiceSource + ?Sized>(self, source: &mut S) -> SheetResult<Character> {
        self.assemble(|| roll_score_with(&mut *source))
    }

    fn assemble(self, roll: impl FnMut() -> MechResult<u32>) -> SheetResult<Character> {
        let hp = check_hp(self.hp)?;
        let mut leveling = LevelingEngine::new(self.curve);
        let progress = leveling.start_at(self.level)?;
        let abilities = AbilityScores::resolve(self.abilities, roll)?;

        let character = Character {
            id: CharacterId::new(),
            alignment: self.alignment,
            abilities,
            wealth: self.wealth,
            hp,
            mp: self.mp,
            skill_points: 0,
            feat_points: 0,
            progress,
            leveling,
            inventory: Inventory::new(self.inventory_size),
        };
        debug!(id = %character.id, level = character.level(), "built character");
        Ok(character)
    }
}
