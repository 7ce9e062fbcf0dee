//! Dice specifications, rolling, and notation.
//!
//! A [`DiceSpec`] describes `count` dice of `sides` faces, an additive
//! modifier, and how many of the lowest dice to discard. Rolling draws
//! from a [`DiceSource`], sorts the faces highest first, sums the kept
//! dice, and adds the modifier once.

pub mod roll;
pub mod source;

pub use roll::RollResult;
pub use source::DiceSource;

use std::str::FromStr;

use crate::error::{MechError, MechResult};

/// A validated request to roll `count` dice of `sides` faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiceSpec {
    count: u32,
    sides: u32,
    modifier: i64,
    drop_lowest: u32,
}

impl DiceSpec {
    /// Build a spec, rejecting zero dice, zero sides, dropping every die,
    /// or totals that would not fit in an `i64`.
    pub fn new(count: u32, sides: u32, modifier: i64, drop_lowest: u32) -> MechResult<Self> {
        if count < 1 {
            return Err(MechError::InvalidArgument(
                "number of dice must be at least 1".to_string(),
            ));
        }
        if sides < 1 {
            return Err(MechError::InvalidArgument(
                "number of sides must be at least 1".to_string(),
            ));
        }
        if drop_lowest >= count {
            return Err(MechError::InvalidArgument(format!(
                "cannot drop {drop_lowest} of {count} dice"
            )));
        }
        let kept = i128::from(count - drop_lowest);
        let highest_sum = kept * i128::from(sides);
        let in_range = |v: i128| i64::try_from(v).is_ok();
        if !in_range(highest_sum)
            || !in_range(kept + i128::from(modifier))
            || !in_range(highest_sum + i128::from(modifier))
        {
            return Err(MechError::InvalidArgument(format!(
                "{count}d{sides} with modifier {modifier} can exceed the range of a total"
            )));
        }
        Ok(Self {
            count,
            sides,
            modifier,
            drop_lowest,
        })
    }

    /// `count` dice of `sides` faces with no modifier and nothing dropped.
    pub fn simple(count: u32, sides: u32) -> MechResult<Self> {
        Self::new(count, sides, 0, 0)
    }

    /// Number of dice rolled.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Faces per die.
    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// Added to the total once, after dropping.
    pub fn modifier(&self) -> i64 {
        self.modifier
    }

    /// How many of the lowest dice are discarded.
    pub fn drop_lowest(&self) -> u32 {
        self.drop_lowest
    }

    /// How many dice count toward the total.
    pub fn kept(&self) -> u32 {
        self.count - self.drop_lowest
    }

    /// Smallest total this spec can produce.
    pub fn min_total(&self) -> i64 {
        i64::from(self.kept()) + self.modifier
    }

    /// Largest total this spec can produce.
    pub fn max_total(&self) -> i64 {
        i64::from(self.kept()) * i64::from(self.sides) + self.modifier
    }

    /// Roll once using the thread-local cryptographic generator.
    pub fn roll(&self) -> RollResult {
        self.roll_with(&mut rand::rng())
    }

    /// Roll once drawing from `source`.
    pub fn roll_with<S: DiceSource + ?Sized>(&self, source: &mut S) -> RollResult {
        roll::roll_spec(self, source)
    }
}

impl std::fmt::Display for DiceSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)?;
        if self.drop_lowest > 0 {
            write!(f, "dl{}", self.drop_lowest)?;
        }
        match self.modifier {
            0 => Ok(()),
            m if m > 0 => write!(f, "+{m}"),
            m => write!(f, "{m}"),
        }
    }
}

impl FromStr for DiceSpec {
    type Err = MechError;

    /// Parse `[N]dS[dlK][+M|-M]`, e.g. `d20`, `4d6dl1`, `2d8+3`.
    fn from_str(s: &str) -> MechResult<Self> {
        let raw = s.trim().to_lowercase();
        let invalid = || MechError::InvalidNotation(s.trim().to_string());

        let (count, rest) = raw.split_once('d').ok_or_else(invalid)?;
        let count = if count.is_empty() {
            1
        } else {
            number(count).ok_or_else(invalid)?
        };

        let (sides, rest) = split_digits(rest);
        let sides = number(sides).ok_or_else(invalid)?;

        let (drop_lowest, rest) = match rest.strip_prefix("dl") {
            Some(after) => {
                let (k, rest) = split_digits(after);
                (number(k).ok_or_else(invalid)?, rest)
            }
            None => (0, rest),
        };

        let modifier = match rest.chars().next() {
            None => 0,
            Some(sign @ ('+' | '-')) => {
                let magnitude: i64 = number(&rest[1..]).ok_or_else(invalid)?;
                if sign == '+' { magnitude } else { -magnitude }
            }
            Some(_) => return Err(invalid()),
        };

        Self::new(count, sides, modifier, drop_lowest)
    }
}

/// Split a string at the first non-digit character.
fn split_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

/// Parse a non-empty run of ASCII digits.
fn number<T: FromStr>(digits: &str) -> Option<T> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Roll a spec once using the thread-local cryptographic generator.
pub fn roll(spec: &DiceSpec) -> RollResult {
    spec.roll()
}

/// Roll `count`d`sides` and return only the total.
///
/// Validation happens before any die is drawn.
pub fn roll_total(count: u32, sides: u32, modifier: i64, drop_lowest: u32) -> MechResult<i64> {
    Ok(DiceSpec::new(count, sides, modifier, drop_lowest)?
        .roll()
        .total())
}

/// Roll `count`d`sides` and return the total with every die, highest first.
pub fn roll_detailed(
    count: u32,
    sides: u32,
    modifier: i64,
    drop_lowest: u32,
) -> MechResult<(i64, Vec<u32>)> {
    Ok(DiceSpec::new(count, sides, modifier, drop_lowest)?
        .roll()
        .into_parts())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rejects_zero_dice() {
        assert!(matches!(
            DiceSpec::new(0, 6, 0, 0),
            Err(MechError::InvalidArgument(_))
        ));
    }

    #[test]
    fn rejects_zero_sides() {
        assert!(matches!(
            DiceSpec::new(1, 0, 0, 0),
            Err(MechError::InvalidArgument(_))
        ));
    }

    #[test]
    fn rejects_dropping_all_dice() {
        assert!(matches!(
            DiceSpec::new(2, 6, 0, 3),
            Err(MechError::InvalidArgument(_))
        ));
        assert!(DiceSpec::new(2, 6, 0, 2).is_err());
        assert!(DiceSpec::new(2, 6, 0, 1).is_ok());
    }

    #[test]
    fn invalid_one_shot_fails_before_rolling() {
        assert!(matches!(
            roll_total(2, 6, 0, 3),
            Err(MechError::InvalidArgument(_))
        ));
        assert!(roll_detailed(0, 6, 0, 0).is_err());
        assert!(roll_total(1, 0, 0, 0).is_err());
    }

    #[test]
    fn rejects_totals_outside_i64() {
        for (count, sides, modifier) in [
            (1, 6, i64::MAX),
            (2, u32::MAX, i64::MAX - i64::from(u32::MAX)),
            (u32::MAX, u32::MAX, 0),
            (u32::MAX, u32::MAX, i64::MIN),
        ] {
            assert!(
                matches!(
                    DiceSpec::new(count, sides, modifier, 0),
                    Err(MechError::InvalidArgument(_))
                ),
                "{count}d{sides}{modifier:+} should be rejected"
            );
        }
    }

    #[test]
    fn extreme_modifiers_roll_within_bounds() {
        let high = DiceSpec::new(1, 6, i64::MAX - 6, 0).unwrap();
        assert_eq!(high.max_total(), i64::MAX);
        let total = high.roll().total();
        assert!((high.min_total()..=high.max_total()).contains(&total));

        let low = DiceSpec::new(1, 6, i64::MIN + 1, 0).unwrap();
        assert_eq!(low.min_total(), i64::MIN + 2);
        assert!(low.roll().total() <= low.max_total());

        let wide = DiceSpec::new(3, u32::MAX, i64::MIN + 3, 0).unwrap();
        assert_eq!(wide.min_total(), i64::MIN + 6);
        assert!(wide.roll().total() >= wide.min_total());
    }

    #[test]
    fn bounds() {
        let spec = DiceSpec::new(4, 6, 2, 1).unwrap();
        assert_eq!(spec.kept(), 3);
        assert_eq!(spec.min_total(), 5);
        assert_eq!(spec.max_total(), 20);
    }

    #[test]
    fn single_die() {
        let total = roll_total(1, 6, 0, 0).unwrap();
        assert!((1..=6).contains(&total));
    }

    #[test]
    fn negative_modifier_range() {
        for _ in 0..200 {
            let total = roll_total(2, 6, -2, 0).unwrap();
            assert!((0..=10).contains(&total));
        }
    }

    #[test]
    fn detailed_total_matches_rolls() {
        let (total, rolls) = roll_detailed(5, 6, 0, 0).unwrap();
        assert_eq!(rolls.len(), 5);
        assert!(rolls.iter().all(|r| (1..=6).contains(r)));
        assert_eq!(total, rolls.iter().map(|&r| i64::from(r)).sum::<i64>());
    }

    #[test]
    fn four_d6_drop_lowest_stays_in_range() {
        let spec = DiceSpec::new(4, 6, 0, 1).unwrap();
        for _ in 0..10_000 {
            let total = roll(&spec).total();
            assert!((3..=18).contains(&total), "4d6dl1 produced {total}");
        }
    }

    #[test]
    fn parse_notation() {
        let spec: DiceSpec = "4d6dl1".parse().unwrap();
        assert_eq!(
            (spec.count(), spec.sides(), spec.modifier(), spec.drop_lowest()),
            (4, 6, 0, 1)
        );

        let spec: DiceSpec = "d20".parse().unwrap();
        assert_eq!((spec.count(), spec.sides()), (1, 20));

        let spec: DiceSpec = " 2D8+3 ".parse().unwrap();
        assert_eq!((spec.count(), spec.sides(), spec.modifier()), (2, 8, 3));

        let spec: DiceSpec = "1d4-1".parse().unwrap();
        assert_eq!(spec.modifier(), -1);

        let spec: DiceSpec = "5d10dl2+4".parse().unwrap();
        assert_eq!((spec.drop_lowest(), spec.modifier()), (2, 4));
    }

    #[test]
    fn parse_rejects_garbage() {
        for bad in [
            "", "6", "d", "xd6", "2d", "2d6+", "2d6*3", "2d6dl", "+2d6", "2d6+-1", "2d6é",
        ] {
            assert!(
                matches!(bad.parse::<DiceSpec>(), Err(MechError::InvalidNotation(_))),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn parse_validates_values() {
        assert!(matches!(
            "2d6dl2".parse::<DiceSpec>(),
            Err(MechError::InvalidArgument(_))
        ));
        assert!(matches!(
            "0d6".parse::<DiceSpec>(),
            Err(MechError::InvalidArgument(_))
        ));
    }

    #[test]
    fn display() {
        insta::assert_snapshot!(DiceSpec::new(2, 8, 3, 0).unwrap().to_string(), @"2d8+3");
        insta::assert_snapshot!(DiceSpec::new(4, 6, 0, 1).unwrap().to_string(), @"4d6dl1");
        insta::assert_snapshot!(DiceSpec::new(1, 4, -1, 0).unwrap().to_string(), @"1d4-1");
        insta::assert_snapshot!(DiceSpec::simple(3, 6).unwrap().to_string(), @"3d6");
    }

    fn valid_spec() -> impl Strategy<Value = DiceSpec> {
        (1u32..=12, 1u32..=100, -20i64..=20)
            .prop_flat_map(|(count, sides, modifier)| {
                (Just(count), Just(sides), Just(modifier), 0..count)
            })
            .prop_map(|(count, sides, modifier, drop)| {
                DiceSpec::new(count, sides, modifier, drop).unwrap()
            })
    }

    proptest! {
        #[test]
        fn total_within_kept_bounds(spec in valid_spec()) {
            let result = spec.roll();
            prop_assert!(result.total() >= spec.min_total());
            prop_assert!(result.total() <= spec.max_total());
        }

        #[test]
        fn rolls_sorted_and_on_the_die(spec in valid_spec()) {
            let result = spec.roll();
            let rolls = result.individual_rolls();
            prop_assert_eq!(rolls.len(), spec.count() as usize);
            prop_assert!(rolls.iter().all(|r| (1..=spec.sides()).contains(r)));
            prop_assert!(rolls.windows(2).all(|w| w[0] >= w[1]));
            prop_assert_eq!(result.kept().len(), spec.kept() as usize);
        }

        #[test]
        fn display_parses_back(spec in valid_spec()) {
            let parsed: DiceSpec = spec.to_string().parse().unwrap();
            prop_assert_eq!(parsed, spec);
        }
    }
}
