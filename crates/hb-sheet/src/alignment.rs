//! The nine two-letter alignments.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SheetError;

/// A character's moral and ethical outlook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alignment {
    /// Lawful Good.
    #[serde(rename = "LG")]
    LawfulGood,
    /// Neutral Good.
    #[serde(rename = "NG")]
    NeutralGood,
    /// Chaotic Good.
    #[serde(rename = "CG")]
    ChaoticGood,
    /// Lawful Neutral.
    #[serde(rename = "LN")]
    LawfulNeutral,
    /// True Neutral.
    #[serde(rename = "TN")]
    TrueNeutral,
    /// Chaotic Neutral.
    #[serde(rename = "CN")]
    ChaoticNeutral,
    /// Lawful Evil.
    #[serde(rename = "LE")]
    LawfulEvil,
    /// Neutral Evil.
    #[serde(rename = "NE")]
    NeutralEvil,
    /// Chaotic Evil.
    #[serde(rename = "CE")]
    ChaoticEvil,
}

impl Alignment {
    /// All alignments, good to evil, lawful to chaotic.
    pub const ALL: [Self; 9] = [
        Self::LawfulGood,
        Self::NeutralGood,
        Self::ChaoticGood,
        Self::LawfulNeutral,
        Self::TrueNeutral,
        Self::ChaoticNeutral,
        Self::LawfulEvil,
        Self::NeutralEvil,
        Self::ChaoticEvil,
    ];

    /// The two-letter code, e.g. `"NG"`.
    pub fn code(self) -> &'static str {
        match self {
            Self::LawfulGood => "LG",
            Self::NeutralGood => "NG",
            Self::ChaoticGood => "CG",
            Self::LawfulNeutral => "LN",
            Self::TrueNeutral => "TN",
            Self::ChaoticNeutral => "CN",
            Self::LawfulEvil => "LE",
            Self::NeutralEvil => "NE",
            Self::ChaoticEvil => "CE",
        }
    }

    /// The long form, e.g. `"Neutral Good"`.
    pub fn description(self) -> &'static str {
        match self {
            Self::LawfulGood => "Lawful Good",
            Self::NeutralGood => "Neutral Good",
            Self::ChaoticGood => "Chaotic Good",
            Self::LawfulNeutral => "Lawful Neutral",
            Self::TrueNeutral => "Neutral (True Neutral)",
            Self::ChaoticNeutral => "Chaotic Neutral",
            Self::LawfulEvil => "Lawful Evil",
            Self::NeutralEvil => "Neutral Evil",
            Self::ChaoticEvil => "Chaotic Evil",
        }
    }
}

impl FromStr for Alignment {
    type Err = SheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|a| a.code() == code)
            .ok_or_else(|| {
                SheetError::InvalidArgument(format!(
                    "alignment must be a two-letter code such as LE, NG or CG, got \"{}\"",
                    s.trim()
                ))
            })
    }
}

impl std::fmt::Display for Alignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
