//! Interaction counts and headline trial figures.

use std::collections::BTreeSet;

use bait_model::{
    BaitCoverage, BaitType, RecordSet, StationGroup, SummaryRow, SummaryTable, TrialOverview,
};

use crate::filter::valid;

/// Counts non-null interactions per bait type, split by station group.
///
/// Group membership is a case-sensitive substring test on the station path.
/// `total` counts every interaction of the bait, so a station carrying
/// neither marker adds to `total` only and `close + away` can differ from it.
pub fn count_summary(records: &RecordSet) -> SummaryTable {
    let rows = BaitType::ALL
        .into_iter()
        .map(|bait| {
            let mut row = SummaryRow {
                bait,
                close: 0,
                away: 0,
                total: 0,
            };
            for record in valid(records).filter(|r| r.interaction(bait).is_some()) {
                row.total += 1;
                if StationGroup::Close.contains(record.station()) {
                    row.close += 1;
                }
                if StationGroup::Away.contains(record.station()) {
                    row.away += 1;
                }
            }
            if row.has_unassigned() {
                tracing::debug!(
                    bait = %bait,
                    close = row.close,
                    away = row.away,
                    total = row.total,
                    "Group counts do not add up to total"
                );
            }
            row
        })
        .collect();
    SummaryTable { rows }
}

/// Number of subjects, stations and interaction coverage per bait.
pub fn trial_overview(records: &RecordSet) -> TrialOverview {
    let mut subjects = BTreeSet::new();
    let mut stations = BTreeSet::new();
    let mut count = 0usize;
    for record in valid(records) {
        count += 1;
        if let Some(subject) = record.subject_id.as_deref() {
            subjects.insert(subject);
        }
        if let Some(station) = record.station_path.as_deref() {
            stations.insert(station);
        }
    }
    let coverage = BaitType::ALL
        .into_iter()
        .map(|bait| {
            let with_interaction = valid(records)
                .filter(|r| r.interaction(bait).is_some())
                .count();
            BaitCoverage {
                bait,
                with_interaction,
                without_interaction: count - with_interaction,
            }
        })
        .collect();
    TrialOverview {
        records: count,
        subjects: subjects.len(),
        stations: stations.len(),
        coverage,
    }
}
