//! Type-safe enumerations for bait trial observations.
//!
//! Observation files record these concepts as free text; the enums give the
//! aggregation code a closed vocabulary to match on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two bait formulations under trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaitType {
    /// Cereal-based bait ("20R"), bait type A.
    Cereal,
    /// Ready-made meat-based sausage ("RMS"), bait type B.
    Meat,
}

impl BaitType {
    /// Both bait types in report order (A before B).
    pub const ALL: [BaitType; 2] = [BaitType::Cereal, BaitType::Meat];

    /// Short code used in field names and report headings.
    pub const fn code(&self) -> &'static str {
        match self {
            BaitType::Cereal => "20R",
            BaitType::Meat => "RMS",
        }
    }

    /// Human-readable description of the formulation.
    pub const fn description(&self) -> &'static str {
        match self {
            BaitType::Cereal => "Cereal bait",
            BaitType::Meat => "Ready-made meat-based sausage",
        }
    }

    /// Proportion-table columns, in display order.
    ///
    /// The meat bait has no consumption category.
    pub const fn canonical_categories(&self) -> &'static [InteractionType] {
        match self {
            BaitType::Cereal => &[
                InteractionType::Encounter,
                InteractionType::Look,
                InteractionType::Touch,
                InteractionType::Bite,
                InteractionType::Consumption,
            ],
            BaitType::Meat => &[
                InteractionType::Encounter,
                InteractionType::Look,
                InteractionType::Touch,
                InteractionType::Bite,
            ],
        }
    }

    /// Returns true if `interaction` may be recorded for this bait.
    pub fn allows(&self, interaction: InteractionType) -> bool {
        interaction.is_noise() || self.canonical_categories().contains(&interaction)
    }
}

impl fmt::Display for BaitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Outcome of a subject's encounter with a bait station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum InteractionType {
    Encounter,
    Look,
    Touch,
    /// Contact not attributable to deliberate interaction.
    #[serde(rename = "Touch accidental")]
    TouchAccidental,
    Bite,
    Consumption,
}

impl InteractionType {
    pub const ALL: [InteractionType; 6] = [
        InteractionType::Encounter,
        InteractionType::Look,
        InteractionType::Touch,
        InteractionType::TouchAccidental,
        InteractionType::Bite,
        InteractionType::Consumption,
    ];

    /// Returns the label as it appears in observation files.
    pub const fn as_str(&self) -> &'static str {
        match self {
            InteractionType::Encounter => "Encounter",
            InteractionType::Look => "Look",
            InteractionType::Touch => "Touch",
            InteractionType::TouchAccidental => "Touch accidental",
            InteractionType::Bite => "Bite",
            InteractionType::Consumption => "Consumption",
        }
    }

    /// Noise categories are excluded from proportional analysis.
    pub const fn is_noise(&self) -> bool {
        matches!(self, InteractionType::TouchAccidental)
    }
}

impl fmt::Display for InteractionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InteractionType {
    type Err = String;

    /// Parse an interaction label (case-insensitive, whitespace collapsed).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.split_whitespace().collect::<Vec<_>>().join(" ");
        InteractionType::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| format!("unknown interaction type: {s}"))
    }
}

/// Experimental placement of a bait station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StationGroup {
    Close,
    Away,
}

impl StationGroup {
    pub const ALL: [StationGroup; 2] = [StationGroup::Close, StationGroup::Away];

    /// Substring marker identifying the group inside a station path.
    pub const fn marker(&self) -> &'static str {
        match self {
            StationGroup::Close => "CBS",
            StationGroup::Away => "ABS",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            StationGroup::Close => "Close",
            StationGroup::Away => "Away",
        }
    }

    /// Case-sensitive substring match against a station path.
    pub fn contains(&self, station_path: &str) -> bool {
        station_path.contains(self.marker())
    }
}

impl fmt::Display for StationGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
