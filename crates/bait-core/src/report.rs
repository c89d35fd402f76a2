use tracing::info_span;

use bait_model::{BaitType, RecordSet, TrialReport};

use crate::error::Result;
use crate::filter::filter_valid;
use crate::proportions::{EmptyRowPolicy, interaction_proportions_with_policy};
use crate::summary::{count_summary, trial_overview};

/// Derives every report table from the merged raw records.
pub fn build_report(records: &RecordSet, policy: EmptyRowPolicy) -> Result<TrialReport> {
    let span = info_span!("aggregate", records = records.len());
    let _guard = span.enter();

    let valid = filter_valid(records);
    let report = TrialReport {
        overview: trial_overview(&valid),
        summary: count_summary(&valid),
        cereal_proportions: interaction_proportions_with_policy(&valid, BaitType::Cereal, policy)?,
        meat_proportions: interaction_proportions_with_policy(&valid, BaitType::Meat, policy)?,
    };

    tracing::info!(
        subjects = report.overview.subjects,
        stations = report.overview.stations,
        "Built trial report"
    );
    Ok(report)
}
