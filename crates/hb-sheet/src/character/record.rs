//! Flat, serializable snapshot of a character.
//!
//! A record stores level and experience verbatim, but loading one never
//! trusts the stored level: the experience is replayed through the
//! leveling engine so a hand-edited pair is brought back in line.

use hb_mechanics::{LevelCurve, LevelingEngine};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Character, CharacterId, check_hp};
use crate::abilities::AbilityScores;
use crate::alignment::Alignment;
use crate::error::SheetResult;
use crate::inventory::Inventory;

/// Everything needed to rebuild a [`Character`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    /// Character identifier.
    pub id: CharacterId,
    /// Alignment, if chosen.
    pub alignment: Option<Alignment>,
    /// Stored level; corrected against `experience` on load.
    pub level: u32,
    /// Accumulated experience.
    pub experience: u64,
    /// Experience curve, stored as its base.
    #[serde(default)]
    pub curve: LevelCurve,
    /// Ability scores.
    pub abilities: AbilityScores,
    /// Money on hand.
    pub wealth: u64,
    /// Hit points.
    pub hp: u32,
    /// Magic points.
    pub mp: u32,
    /// Unspent skill points.
    #[serde(default)]
    pub skill_points: u32,
    /// Unspent feat points.
    #[serde(default)]
    pub feat_points: u32,
    /// Number of inventory slots.
    pub inventory_size: usize,
    /// Held items, one entry per unit.
    #[serde(default)]
    pub items: Vec<String>,
}

impl CharacterRecord {
    /// Encode as pretty-printed JSON.
    pub fn to_json(&self) -> SheetResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode from JSON.
    pub fn from_json(json: &str) -> SheetResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Character {
    /// Snapshot this character.
    pub fn to_record(&self) -> CharacterRecord {
        CharacterRecord {
            id: self.id,
            alignment: self.alignment,
            level: self.progress.level(),
            experience: self.progress.experience(),
            curve: *self.leveling.curve(),
            abilities: self.abilities,
            wealth: self.wealth,
            hp: self.hp,
            mp: self.mp,
            skill_points: self.skill_points,
            feat_points: self.feat_points,
            inventory_size: self.inventory.max_size(),
            items: self.inventory.items().to_vec(),
        }
    }

    /// Rebuild a character from a record, validating every field.
    pub fn from_record(record: CharacterRecord) -> SheetResult<Self> {
        let hp = check_hp(record.hp)?;

        let mut leveling = LevelingEngine::new(record.curve);
        let progress = leveling.restore(record.level, record.experience)?;

        let mut inventory = Inventory::new(record.inventory_size);
        for item in record.items {
            inventory.add_item(item, 1)?;
        }

        debug!(id = %record.id, level = progress.level(), "restored character");
        Ok(Self {
            id: record.id,
            alignment: record.alignment,
            abilities: record.abilities,
            wealth: record.wealth,
            hp,
            mp: record.mp,
            skill_points: record.skill_points,
            feat_points: record.feat_points,
            progress,
            leveling,
            inventory,
        })
    }
}
