//! Per-subject interaction proportions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use bait_model::{BaitType, InteractionType, ProportionRow, ProportionTable, RecordSet};

use crate::error::{AggregateError, Result};
use crate::filter::valid;

/// What to do with a subject whose interactions were all noise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyRowPolicy {
    /// Fail with [`AggregateError::EmptyRow`].
    Fail,
    /// Leave the subject out and list it in `omitted_subjects`.
    #[default]
    Omit,
    /// Emit an all-zero row for the subject.
    ZeroFill,
}

/// Subject x interaction counts for one bait type.
///
/// Subjects without any value for the bait do not appear.
pub type Crosstab = BTreeMap<String, BTreeMap<InteractionType, usize>>;

/// Cross-tabulates subjects against the bait's recorded interactions.
pub fn crosstab(records: &RecordSet, bait: BaitType) -> Crosstab {
    let mut table = Crosstab::new();
    for record in valid(records) {
        let (Some(subject), Some(kind)) = (record.subject_id.as_ref(), record.interaction(bait))
        else {
            continue;
        };
        *table
            .entry(subject.clone())
            .or_default()
            .entry(kind)
            .or_insert(0) += 1;
    }
    table
}

/// Percentage of each subject's qualifying interactions per category.
///
/// Noise categories are removed before normalizing. Fails on the first
/// subject left with nothing to normalize.
pub fn interaction_proportions(records: &RecordSet, bait: BaitType) -> Result<ProportionTable> {
    interaction_proportions_with_policy(records, bait, EmptyRowPolicy::Fail)
}

/// [`interaction_proportions`] with an explicit policy for empty rows.
pub fn interaction_proportions_with_policy(
    records: &RecordSet,
    bait: BaitType,
    policy: EmptyRowPolicy,
) -> Result<ProportionTable> {
    let mut table = ProportionTable::new(bait);
    for (subject, counts) in crosstab(records, bait) {
        let qualifying: BTreeMap<InteractionType, usize> = counts
            .into_iter()
            .filter(|(kind, _)| !kind.is_noise())
            .collect();
        let row_sum: usize = qualifying.values().sum();

        if row_sum == 0 {
            match policy {
                EmptyRowPolicy::Fail => {
                    return Err(AggregateError::EmptyRow { subject, bait });
                }
                EmptyRowPolicy::Omit => {
                    warn!(
                        subject = %subject,
                        bait = %bait,
                        "Omitting subject with only noise interactions"
                    );
                    table.omitted_subjects.push(subject);
                }
                EmptyRowPolicy::ZeroFill => {
                    table.rows.push(ProportionRow {
                        subject_id: subject,
                        values: vec![0.0; table.columns.len()],
                    });
                }
            }
            continue;
        }

        let values = table
            .columns
            .iter()
            .map(|kind| {
                let count = qualifying.get(kind).copied().unwrap_or(0);
                count as f64 * 100.0 / row_sum as f64
            })
            .collect();
        table.rows.push(ProportionRow {
            subject_id: subject,
            values,
        });
    }
    tracing::debug!(
        bait = %bait,
        subjects = table.rows.len(),
        omitted = table.omitted_subjects.len(),
        "Computed interaction proportions"
    );
    Ok(table)
}
