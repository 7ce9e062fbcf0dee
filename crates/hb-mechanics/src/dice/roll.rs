//! Rolling a [`DiceSpec`] and the results it produces.

use serde::Serialize;
use tracing::trace;

use super::DiceSpec;
use super::source::DiceSource;

/// The outcome of rolling a [`DiceSpec`] once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RollResult {
    total: i64,
    individual_rolls: Vec<u32>,
    #[serde(skip)]
    kept: usize,
}

impl RollResult {
    /// Sum of the kept dice plus the modifier.
    pub fn total(&self) -> i64 {
        self.total
    }

    /// Every die rolled, highest first.
    pub fn individual_rolls(&self) -> &[u32] {
        &self.individual_rolls
    }

    /// The dice that counted toward the total.
    pub fn kept(&self) -> &[u32] {
        let (kept, _) = self.individual_rolls.split_at(self.kept);
        kept
    }

    /// The dice discarded by drop-lowest, highest first.
    pub fn dropped(&self) -> &[u32] {
        let (_, dropped) = self.individual_rolls.split_at(self.kept);
        dropped
    }

    /// Consume the result, returning the total and the individual rolls.
    pub fn into_parts(self) -> (i64, Vec<u32>) {
        (self.total, self.individual_rolls)
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self
            .individual_rolls
            .iter()
            .map(|v| v.to_string())
            .collect();
        write!(f, "[{}] = {}", values.join(", "), self.total)
    }
}

/// Draw every die in `spec`, sort descending, and total the kept dice.
pub(crate) fn roll_spec<S: DiceSource + ?Sized>(spec: &DiceSpec, source: &mut S) -> RollResult {
    let mut rolls: Vec<u32> = (0..spec.count())
        .map(|_| source.draw(spec.sides()))
        .collect();
    rolls.sort_unstable_by(|a, b| b.cmp(a));

    let kept = spec.kept() as usize;
    let total = rolls.iter().take(kept).map(|&v| i64::from(v)).sum::<i64>() + spec.modifier();
    trace!(spec = %spec, total, "rolled dice");

    RollResult {
        total,
        individual_rolls: rolls,
        kept,
    }
}
