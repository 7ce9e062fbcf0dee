//! Experience thresholds and level transitions.
//!
//! The [`LevelingEngine`] keeps a [`Progress`] consistent: the level is
//! always the one whose experience band contains the current experience.
//! The engine holds only the [`LevelCurve`] and a cached distance to the
//! next level; the progress it works on is passed to every call.
//!
//! Transitions always walk one level at a time, so a large grant visits
//! every intermediate level. The `_observed` variants report each step to a
//! callback for per-level side effects.

pub mod curve;
pub mod progress;

pub use curve::{LevelCurve, binomial, threshold};
pub use progress::Progress;

use serde::Serialize;
use tracing::debug;

use crate::error::{MechError, MechResult};

/// The level before and after an experience change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelChange {
    /// Level before the change.
    pub from: u32,
    /// Level after the change.
    pub to: u32,
}

impl LevelChange {
    /// Signed number of levels gained (negative when levels were lost).
    pub fn levels(&self) -> i64 {
        i64::from(self.to) - i64::from(self.from)
    }

    /// Returns true if the level moved.
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// Maps experience to levels and performs level transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelingEngine {
    curve: LevelCurve,
    next_level_experience: i64,
}

impl Default for LevelingEngine {
    fn default() -> Self {
        Self::new(LevelCurve::default())
    }
}

impl LevelingEngine {
    /// An engine on `curve`, primed for a fresh level 1 progress.
    pub fn new(curve: LevelCurve) -> Self {
        Self::with_curve(curve, &Progress::new())
    }

    /// Bind an engine on the standard curve to an existing progress.
    pub fn attach(progress: &Progress) -> Self {
        Self::with_curve(LevelCurve::default(), progress)
    }

    /// Bind an engine on `curve` to an existing progress.
    pub fn with_curve(curve: LevelCurve, progress: &Progress) -> Self {
        let mut engine = Self {
            curve,
            next_level_experience: 0,
        };
        engine.refresh(progress);
        engine
    }

    /// The curve this engine uses.
    pub fn curve(&self) -> &LevelCurve {
        &self.curve
    }

    /// A fresh progress at `level`, holding exactly the experience that level needs.
    pub fn start_at(&mut self, level: u32) -> MechResult<Progress> {
        check_level(level)?;
        if level > self.curve.max_level() {
            return Err(MechError::InvalidArgument(format!(
                "level {level} is above the curve's highest level {}",
                self.curve.max_level()
            )));
        }
        let progress = Progress {
            level,
            experience: self.curve.threshold(level),
        };
        self.refresh(&progress);
        Ok(progress)
    }

    /// Rebuild a progress from persisted values.
    ///
    /// The stored level is not trusted: the walk starts from the lower of
    /// the stored level and the level the experience belongs to, and the
    /// experience is then applied as an absolute set. A stored level that
    /// does not match is corrected without walking down from it.
    pub fn restore(&mut self, level: u32, experience: u64) -> MechResult<Progress> {
        check_level(level)?;
        let start = level.min(self.curve.level_for(experience));
        let mut progress = Progress {
            level: start,
            experience,
        };
        self.set_experience(&mut progress, experience);
        if progress.level != level {
            debug!(
                stored = level,
                corrected = progress.level,
                experience,
                "stored level did not match experience"
            );
        }
        Ok(progress)
    }

    /// Cumulative experience needed for the current level.
    pub fn threshold_for_current_level(&self, progress: &Progress) -> u64 {
        self.curve.threshold(progress.level)
    }

    /// Cumulative experience needed for the next level.
    pub fn threshold_for_next_level(&self, progress: &Progress) -> u64 {
        self.curve.threshold(progress.level.saturating_add(1))
    }

    /// Experience still missing before the next level, as of the last call.
    pub fn experience_to_next_level(&self) -> i64 {
        self.next_level_experience
    }

    /// Returns true if the experience reaches the next level's threshold.
    ///
    /// Always false at the curve's highest level.
    pub fn is_leveled_up(&self, progress: &Progress) -> bool {
        progress.level < self.curve.max_level()
            && progress.experience >= self.threshold_for_next_level(progress)
    }

    /// Returns true if the experience is below the current level's threshold.
    pub fn is_leveled_down(&self, progress: &Progress) -> bool {
        progress.experience < self.threshold_for_current_level(progress)
    }

    /// Add experience, then level up once per threshold crossed.
    pub fn grant_experience(&mut self, progress: &mut Progress, amount: u64) -> LevelChange {
        self.grant_experience_observed(progress, amount, |_| {})
    }

    /// Like [`grant_experience`](Self::grant_experience), calling `on_level`
    /// after every single-level step.
    pub fn grant_experience_observed(
        &mut self,
        progress: &mut Progress,
        amount: u64,
        mut on_level: impl FnMut(&Progress),
    ) -> LevelChange {
        let from = progress.level;
        progress.experience = progress.experience.saturating_add(amount);
        self.climb(progress, &mut on_level);
        self.refresh(progress);
        LevelChange {
            from,
            to: progress.level,
        }
    }

    /// Remove experience, then level down once per threshold lost.
    ///
    /// Experience never drops below zero and the level never below 1.
    pub fn revoke_experience(&mut self, progress: &mut Progress, amount: u64) -> LevelChange {
        self.revoke_experience_observed(progress, amount, |_| {})
    }

    /// Like [`revoke_experience`](Self::revoke_experience), calling
    /// `on_level` after every single-level step.
    pub fn revoke_experience_observed(
        &mut self,
        progress: &mut Progress,
        amount: u64,
        mut on_level: impl FnMut(&Progress),
    ) -> LevelChange {
        let from = progress.level;
        progress.experience = progress.experience.saturating_sub(amount);
        self.descend(progress, &mut on_level);
        self.refresh(progress);
        LevelChange {
            from,
            to: progress.level,
        }
    }

    /// Replace the experience outright, moving the level in either direction.
    pub fn set_experience(&mut self, progress: &mut Progress, value: u64) -> LevelChange {
        self.set_experience_observed(progress, value, |_| {})
    }

    /// Like [`set_experience`](Self::set_experience), calling `on_level`
    /// after every single-level step.
    pub fn set_experience_observed(
        &mut self,
        progress: &mut Progress,
        value: u64,
        mut on_level: impl FnMut(&Progress),
    ) -> LevelChange {
        let from = progress.level;
        progress.experience = value;
        self.climb(progress, &mut on_level);
        self.descend(progress, &mut on_level);
        self.refresh(progress);
        LevelChange {
            from,
            to: progress.level,
        }
    }

    /// Raise the level by exactly one without checking thresholds,
    /// stopping at the curve's highest level.
    pub fn level_up(&mut self, progress: &mut Progress) {
        if progress.level < self.curve.max_level() {
            progress.level += 1;
            debug!(
                level = progress.level,
                experience = progress.experience,
                "level up"
            );
        }
        self.refresh(progress);
    }

    /// Lower the level by exactly one, stopping at level 1.
    pub fn level_down(&mut self, progress: &mut Progress) {
        if progress.level > 1 {
            progress.level -= 1;
            debug!(
                level = progress.level,
                experience = progress.experience,
                "level down"
            );
        }
        self.refresh(progress);
    }

    fn climb(&mut self, progress: &mut Progress, on_level: &mut impl FnMut(&Progress)) {
        while self.is_leveled_up(progress) {
            self.level_up(progress);
            on_level(progress);
        }
    }

    fn descend(&mut self, progress: &mut Progress, on_level: &mut impl FnMut(&Progress)) {
        while progress.level > 1 && self.is_leveled_down(progress) {
            self.level_down(progress);
            on_level(progress);
        }
    }

    fn refresh(&mut self, progress: &Progress) {
        let gap = i128::from(self.threshold_for_next_level(progress))
            - i128::from(progress.experience);
        self.next_level_experience =
            i64::try_from(gap).unwrap_or(if gap < 0 { i64::MIN } else { i64::MAX });
    }
}

fn check_level(level: u32) -> MechResult<()> {
    if level < 1 {
        return Err(MechError::InvalidArgument(
            "level must be at least 1".to_string(),
        ));
    }
    Ok(())
}
