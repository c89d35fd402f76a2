//! Data model for the bait-preference trial report.

pub mod enums;
pub mod record;
pub mod tables;

pub use enums::{BaitType, InteractionType, StationGroup};
pub use record::{ObservationRecord, RecordSet};
pub use tables::{
    BaitCoverage, ProportionRow, ProportionTable, SummaryRow, SummaryTable, TrialOverview,
    TrialReport,
};
