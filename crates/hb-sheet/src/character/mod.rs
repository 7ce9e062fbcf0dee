//! The character entity.
//!
//! A [`Character`] owns its [`Progress`] and the [`LevelingEngine`] that
//! maintains it side by side. Level and experience are read-only from the
//! outside; every change goes through the engine.

pub mod builder;
pub mod record;

pub use builder::CharacterBuilder;
pub use record::CharacterRecord;

use std::fmt;

use hb_mechanics::{LevelChange, LevelingEngine, Progress};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::abilities::{Ability, AbilityScores};
use crate::alignment::Alignment;
use crate::error::{SheetError, SheetResult};
use crate::inventory::Inventory;

/// Unique identifier for a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterId(pub Uuid);

impl CharacterId {
    /// Generate a new random character ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CharacterId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// A player character: abilities, resources, inventory, and progression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    id: CharacterId,
    alignment: Option<Alignment>,
    abilities: AbilityScores,
    wealth: u64,
    hp: u32,
    mp: u32,
    skill_points: u32,
    feat_points: u32,
    progress: Progress,
    leveling: LevelingEngine,
    inventory: Inventory,
}

impl Character {
    /// Start configuring a new character.
    pub fn builder() -> CharacterBuilder {
        CharacterBuilder::default()
    }

    /// This character's identifier.
    pub fn id(&self) -> CharacterId {
        self.id
    }

    /// The character's alignment, if one was chosen.
    pub fn alignment(&self) -> Option<Alignment> {
        self.alignment
    }

    /// Change or clear the alignment.
    pub fn set_alignment(&mut self, alignment: Option<Alignment>) {
        self.alignment = alignment;
    }

    /// All six ability scores.
    pub fn abilities(&self) -> &AbilityScores {
        &self.abilities
    }

    /// A single ability score.
    pub fn ability(&self, ability: Ability) -> u32 {
        self.abilities.get(ability)
    }

    /// Replace a single ability score.
    pub fn set_ability(&mut self, ability: Ability, score: u32) {
        self.abilities.set(ability, score);
    }

    /// Money on hand.
    pub fn wealth(&self) -> u64 {
        self.wealth
    }

    /// Replace the money on hand.
    pub fn set_wealth(&mut self, wealth: u64) {
        self.wealth = wealth;
    }

    /// Hit points, always at least 1.
    pub fn hp(&self) -> u32 {
        self.hp
    }

    /// Replace the hit points. Zero is rejected.
    pub fn set_hp(&mut self, hp: u32) -> SheetResult<()> {
        self.hp = check_hp(hp)?;
        Ok(())
    }

    /// Magic points.
    pub fn mp(&self) -> u32 {
        self.mp
    }

    /// Replace the magic points.
    pub fn set_mp(&mut self, mp: u32) {
        self.mp = mp;
    }

    /// Unspent skill points.
    pub fn skill_points(&self) -> u32 {
        self.skill_points
    }

    /// Replace the unspent skill points.
    pub fn set_skill_points(&mut self, points: u32) {
        self.skill_points = points;
    }

    /// Unspent feat points.
    pub fn feat_points(&self) -> u32 {
        self.feat_points
    }

    /// Replace the unspent feat points.
    pub fn set_feat_points(&mut self, points: u32) {
        self.feat_points = points;
    }

    /// Current level.
    pub fn level(&self) -> u32 {
        self.progress.level()
    }

    /// Accumulated experience.
    pub fn experience(&self) -> u64 {
        self.progress.experience()
    }

    /// Level and experience together.
    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    /// The engine that maintains this character's progress.
    pub fn leveling(&self) -> &LevelingEngine {
        &self.leveling
    }

    /// Experience still missing before the next level.
    pub fn experience_to_next_level(&self) -> i64 {
        self.leveling.experience_to_next_level()
    }

    /// Forwards to [`LevelingEngine::grant_experience`] on this character's progress.
    pub fn grant_experience(&mut self, amount: u64) -> LevelChange {
        self.leveling.grant_experience(&mut self.progress, amount)
    }

    /// Forwards to [`LevelingEngine::revoke_experience`] on this character's progress.
    pub fn revoke_experience(&mut self, amount: u64) -> LevelChange {
        self.leveling.revoke_experience(&mut self.progress, amount)
    }

    /// Forwards to [`LevelingEngine::set_experience`] on this character's progress.
    pub fn set_experience(&mut self, experience: u64) -> LevelChange {
        self.leveling.set_experience(&mut self.progress, experience)
    }

    /// Forwards to [`LevelingEngine::grant_experience_observed`].
    pub fn grant_experience_observed(
        &mut self,
        amount: u64,
        on_level: impl FnMut(&Progress),
    ) -> LevelChange {
        self.leveling
            .grant_experience_observed(&mut self.progress, amount, on_level)
    }

    /// Forwards to [`LevelingEngine::revoke_experience_observed`].
    pub fn revoke_experience_observed(
        &mut self,
        amount: u64,
        on_level: impl FnMut(&Progress),
    ) -> LevelChange {
        self.leveling
            .revoke_experience_observed(&mut self.progress, amount, on_level)
    }

    /// Forwards to [`LevelingEngine::set_experience_observed`].
    pub fn set_experience_observed(
        &mut self,
        experience: u64,
        on_level: impl FnMut(&Progress),
    ) -> LevelChange {
        self.leveling
            .set_experience_observed(&mut self.progress, experience, on_level)
    }

    /// Items carried.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Items carried, for direct changes.
    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    /// Add items to the inventory.
    pub fn add_item(&mut self, item: impl Into<String>, quantity: u32) -> SheetResult<()> {
        self.inventory.add_item(item, quantity)
    }

    /// Remove items from the inventory.
    pub fn remove_item(&mut self, item: &str, quantity: u32) -> SheetResult<()> {
        self.inventory.remove_item(item, quantity)
    }
}

fn check_hp(hp: u32) -> SheetResult<u32> {
    if hp == 0 {
        return Err(SheetError::InvalidArgument(
            "hp must be at least 1".to_string(),
        ));
    }
    Ok(hp)
}
