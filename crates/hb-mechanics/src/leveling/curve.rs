//! The experience curve: how much cumulative experience each level needs.

use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};

/// Experience base of the standard curve.
pub const DEFAULT_BASE: u64 = 1000;

/// Binomial coefficient "n choose r" as a real number.
///
/// Multiplies over the smaller of `r` and `n - r`. Returns 0 when `r > n`.
pub fn binomial(n: u64, r: u64) -> f64 {
    if r > n {
        return 0.0;
    }
    let r = r.min(n - r);
    let numer: f64 = (0..r).map(|i| (n - i) as f64).product();
    let denom: f64 = (1..=r).map(|i| i as f64).product();
    numer / denom
}

/// Cumulative experience needed to reach `level` on the standard curve.
pub fn threshold(level: u32) -> u64 {
    LevelCurve::default().threshold(level)
}

/// A level curve of the form `floor(base * (L + C(L, 2))) - base * L`.
///
/// Thresholds are exact integers. A curve has a highest level whose
/// threshold still fits in a `u64`; the leveling engine never climbs past
/// it, so thresholds are strictly increasing over every reachable level.
///
/// Serialized as its base alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct LevelCurve {
    base: u64,
    max_level: u32,
}

impl Default for LevelCurve {
    fn default() -> Self {
        Self::scaled(DEFAULT_BASE)
    }
}

impl LevelCurve {
    /// A curve scaled by `base`. Zero is rejected since every level would be free.
    pub fn with_base(base: u64) -> MechResult<Self> {
        if base == 0 {
            return Err(MechError::InvalidArgument(
                "experience base must be positive".to_string(),
            ));
        }
        Ok(Self::scaled(base))
    }

    fn scaled(base: u64) -> Self {
        let mut curve = Self { base, max_level: 1 };
        curve.max_level = curve.highest_level();
        curve
    }

    /// Experience needed for level 2.
    pub fn base(&self) -> u64 {
        self.base
    }

    /// The highest level whose threshold fits in a `u64`.
    pub fn max_level(&self) -> u32 {
        self.max_level
    }

    /// Cumulative experience needed to reach `level`.
    ///
    /// Levels above [`max_level`](Self::max_level) report `u64::MAX`.
    pub fn threshold(&self, level: u32) -> u64 {
        u64::try_from(self.exact_threshold(level)).unwrap_or(u64::MAX)
    }

    /// The level whose experience band contains `experience`.
    pub fn level_for(&self, experience: u64) -> u32 {
        let estimate = (1.0 + (1.0 + 8.0 * experience as f64 / self.base as f64).sqrt()) / 2.0;
        let mut level = (estimate as u64).clamp(1, u64::from(self.max_level)) as u32;
        while level < self.max_level && self.threshold(level + 1) <= experience {
            level += 1;
        }
        while level > 1 && self.threshold(level) > experience {
            level -= 1;
        }
        level
    }

    /// `base * (L + C(L, 2)) - base * L` without rounding or overflow.
    fn exact_threshold(&self, level: u32) -> u128 {
        let level = u128::from(level);
        let pairs = level * level.saturating_sub(1) / 2;
        u128::from(self.base) * (level + pairs) - u128::from(self.base) * level
    }

    fn highest_level(&self) -> u32 {
        let limit = u128::from(u64::MAX);
        let estimate = (2.0 * u64::MAX as f64 / self.base as f64).sqrt() as u64;
        let mut level = estimate.clamp(1, u64::from(u32::MAX)) as u32;
        while level < u32::MAX && self.exact_threshold(level + 1) <= limit {
            level += 1;
        }
        while level > 1 && self.exact_threshold(level) > limit {
            level -= 1;
        }
        level
    }
}

impl TryFrom<u64> for LevelCurve {
    type Error = MechError;

    fn try_from(base: u64) -> MechResult<Self> {
        Self::with_base(base)
    }
}

impl From<LevelCurve> for u64 {
    fn from(curve: LevelCurve) -> Self {
        curve.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn binomial_values() {
        assert_eq!(binomial(5, 0), 1.0);
        assert_eq!(binomial(5, 5), 1.0);
        assert_eq!(binomial(5, 3), 10.0);
        assert_eq!(binomial(10, 2), 45.0);
        assert_eq!(binomial(1, 2), 0.0);
    }

    #[test]
    fn known_thresholds() {
        assert_eq!(threshold(1), 0);
        assert_eq!(threshold(2), 1000);
        assert_eq!(threshold(3), 3000);
        assert_eq!(threshold(4), 6000);
        assert_eq!(threshold(20), 190_000);
    }

    #[test]
    fn scaled_curve() {
        let curve = LevelCurve::with_base(300).unwrap();
        assert_eq!(curve.base(), 300);
        assert_eq!(curve.threshold(1), 0);
        assert_eq!(curve.threshold(2), 300);
        assert_eq!(curve.threshold(3), 900);
    }

    #[test]
    fn zero_base_rejected() {
        assert!(matches!(
            LevelCurve::with_base(0),
            Err(MechError::InvalidArgument(_))
        ));
        assert!(LevelCurve::try_from(0).is_err());
        assert_eq!(u64::from(LevelCurve::try_from(250).unwrap()), 250);
    }

    #[test]
    fn matches_real_valued_formula() {
        for level in 1u32..=5_000 {
            let l = f64::from(level);
            let expected = (1000.0 * (l + binomial(u64::from(level), 2))).floor() - 1000.0 * l;
            assert_eq!(threshold(level), expected as u64);
        }
    }

    #[test]
    fn max_level_is_the_last_that_fits() {
        let curve = LevelCurve::default();
        let max = curve.max_level();
        assert_eq!(max, 192_076_777);
        assert!(curve.exact_threshold(max) <= u128::from(u64::MAX));
        assert!(curve.exact_threshold(max + 1) > u128::from(u64::MAX));
        assert!(curve.threshold(max) > curve.threshold(max - 1));
        assert_eq!(curve.threshold(max + 1), u64::MAX);

        let unit = LevelCurve::with_base(1).unwrap();
        assert_eq!(unit.max_level(), u32::MAX);
        let huge = LevelCurve::with_base(u64::MAX).unwrap();
        assert_eq!(huge.max_level(), 2);
    }

    #[test]
    fn increasing_up_to_max_level() {
        let curve = LevelCurve::default();
        let max = curve.max_level();
        for level in max - 1_000..max {
            assert!(curve.threshold(level + 1) > curve.threshold(level));
        }
    }

    #[test]
    fn level_for_bands() {
        let curve = LevelCurve::default();
        assert_eq!(curve.level_for(0), 1);
        assert_eq!(curve.level_for(999), 1);
        assert_eq!(curve.level_for(1000), 2);
        assert_eq!(curve.level_for(2999), 2);
        assert_eq!(curve.level_for(3000), 3);
        assert_eq!(curve.level_for(u64::MAX), curve.max_level());
    }

    #[test]
    fn deserialized_curve_knows_its_max_level() {
        let curve: LevelCurve = serde_json::from_str("1000").unwrap();
        assert_eq!(curve, LevelCurve::default());
    }

    proptest! {
        #[test]
        fn level_for_inverts_threshold(xp in any::<u64>()) {
            let curve = LevelCurve::default();
            let level = curve.level_for(xp);
            prop_assert!(curve.threshold(level) <= xp);
            if level < curve.max_level() {
                prop_assert!(curve.threshold(level + 1) > xp);
            }
        }

        #[test]
        fn strictly_increasing(level in 1u32..100_000) {
            prop_assert!(threshold(level + 1) > threshold(level));
        }

        #[test]
        fn matches_closed_form(level in 1u32..100_000) {
            let l = u64::from(level);
            prop_assert_eq!(threshold(level), 1000 * l * (l - 1) / 2);
        }
    }
}
