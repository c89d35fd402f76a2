use serde::{Deserialize, Serialize};

use crate::enums::{BaitType, InteractionType};

/// One recorded interaction event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationRecord {
    /// Identifier of the observed animal. `None` when the animal could not be identified.
    pub subject_id: Option<String>,
    /// Path of the bait station; carries the station-group marker.
    pub station_path: Option<String>,
    /// Outcome recorded for the cereal bait.
    pub cereal: Option<InteractionType>,
    /// Outcome recorded for the meat bait.
    pub meat: Option<InteractionType>,
}

impl ObservationRecord {
    pub fn new(subject_id: Option<&str>, station_path: Option<&str>) -> Self {
        Self {
            subject_id: subject_id.map(str::to_string),
            station_path: station_path.map(str::to_string),
            cereal: None,
            meat: None,
        }
    }

    #[must_use]
    pub fn with_interaction(
        mut self,
        bait: BaitType,
        interaction: Option<InteractionType>,
    ) -> Self {
        match bait {
            BaitType::Cereal => self.cereal = interaction,
            BaitType::Meat => self.meat = interaction,
        }
        self
    }

    /// Returns the outcome recorded for `bait`.
    pub fn interaction(&self, bait: BaitType) -> Option<InteractionType> {
        match bait {
            BaitType::Cereal => self.cereal,
            BaitType::Meat => self.meat,
        }
    }

    pub fn station(&self) -> &str {
        self.station_path.as_deref().unwrap_or("")
    }

    pub fn has_subject(&self) -> bool {
        self.subject_id.is_some()
    }
}

/// An ordered collection of observation records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordSet {
    records: Vec<ObservationRecord>,
}

impl RecordSet {
    pub fn new(records: Vec<ObservationRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ObservationRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[ObservationRecord] {
        &self.records
    }

    /// Appends every record of `other`, keeping its order.
    pub fn extend(&mut self, other: RecordSet) {
        self.records.extend(other.records);
    }
}

impl FromIterator<ObservationRecord> for RecordSet {
    fn from_iter<I: IntoIterator<Item = ObservationRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for RecordSet {
    type Item = ObservationRecord;
    type IntoIter = std::vec::IntoIter<ObservationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a ObservationRecord;
    type IntoIter = std::slice::Iter<'a, ObservationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
