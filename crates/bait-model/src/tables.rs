//! Derived tables handed to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::enums::{BaitType, InteractionType, StationGroup};

/// Interaction counts for one bait type, split by station group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub bait: BaitType,
    pub close: usize,
    pub away: usize,
    /// Every non-null interaction of this bait, whatever the station group.
    pub total: usize,
}

impl SummaryRow {
    pub fn group_count(&self, group: StationGroup) -> usize {
        match group {
            StationGroup::Close => self.close,
            StationGroup::Away => self.away,
        }
    }

    /// True when the group columns do not add up to the total, which happens
    /// for stations carrying neither (or both) group markers.
    pub fn has_unassigned(&self) -> bool {
        self.close + self.away != self.total
    }
}

/// Summary count table: one row per bait type, cereal first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryTable {
    pub rows: Vec<SummaryRow>,
}

impl SummaryTable {
    pub fn row(&self, bait: BaitType) -> Option<&SummaryRow> {
        self.rows.iter().find(|row| row.bait == bait)
    }
}

/// One subject's share of interactions per category, in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProportionRow {
    pub subject_id: String,
    /// Aligned with [`ProportionTable::columns`].
    pub values: Vec<f64>,
}

impl ProportionRow {
    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }
}

/// Per-subject interaction proportions for a single bait type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProportionTable {
    pub bait: BaitType,
    pub columns: Vec<InteractionType>,
    pub rows: Vec<ProportionRow>,
    /// Subjects left out because none of their interactions qualified.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub omitted_subjects: Vec<String>,
}

impl ProportionTable {
    pub fn new(bait: BaitType) -> Self {
        Self {
            bait,
            columns: bait.canonical_categories().to_vec(),
            rows: Vec::new(),
            omitted_subjects: Vec::new(),
        }
    }

    pub fn row(&self, subject_id: &str) -> Option<&ProportionRow> {
        self.rows.iter().find(|row| row.subject_id == subject_id)
    }

    /// Returns the percentage for `subject_id` in `category`, if both exist.
    pub fn value(&self, subject_id: &str, category: InteractionType) -> Option<f64> {
        let idx = self.columns.iter().position(|c| *c == category)?;
        self.row(subject_id)
            .and_then(|row| row.values.get(idx).copied())
    }

    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|row| row.subject_id.as_str())
    }
}

/// Interaction coverage of one bait type across valid records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaitCoverage {
    pub bait: BaitType,
    pub with_interaction: usize,
    pub without_interaction: usize,
}

/// Headline figures for the trial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialOverview {
    pub records: usize,
    /// Individual animals in the trial.
    pub subjects: usize,
    /// Distinct bait stations in the trial.
    pub stations: usize,
    pub coverage: Vec<BaitCoverage>,
}

impl TrialOverview {
    pub fn coverage(&self, bait: BaitType) -> Option<&BaitCoverage> {
        self.coverage.iter().find(|c| c.bait == bait)
    }
}

/// Everything the report renders, derived from one run over the inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialReport {
    pub overview: TrialOverview,
    pub summary: SummaryTable,
    pub cereal_proportions: ProportionTable,
    pub meat_proportions: ProportionTable,
}

impl TrialReport {
    pub fn proportions(&self, bait: BaitType) -> &ProportionTable {
        match bait {
            BaitType::Cereal => &self.cereal_proportions,
            BaitType::Meat => &self.meat_proportions,
        }
    }
}
