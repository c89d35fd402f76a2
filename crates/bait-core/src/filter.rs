use bait_model::{ObservationRecord, RecordSet};

/// Drops every record without a subject identifier.
///
/// Order is preserved; applying it twice changes nothing.
pub fn filter_valid(records: &RecordSet) -> RecordSet {
    let filtered: RecordSet = records.iter().filter(|r| r.has_subject()).cloned().collect();
    tracing::debug!(
        input = records.len(),
        kept = filtered.len(),
        dropped = records.len() - filtered.len(),
        "Filtered records without subject"
    );
    filtered
}

/// Records that take part in aggregation.
pub(crate) fn valid(records: &RecordSet) -> impl Iterator<Item = &ObservationRecord> {
    records.iter().filter(|r| r.has_subject())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_only_missing_subjects() {
        let records: RecordSet = vec![
            ObservationRecord::new(Some("A"), Some("CBS-1")),
            ObservationRecord::new(None, Some("CBS-1")),
            ObservationRecord::new(Some("B"), None),
        ]
        .into_iter()
        .collect();

        let filtered = filter_valid(&records);
        let ids: Vec<_> = filtered
            .iter()
            .map(|r| r.subject_id.as_deref().unwrap_or_default())
            .collect();
        assert_eq!(ids, vec!["A", "B"]);
    }

    #[test]
    fn empty_input_stays_empty() {
        assert!(filter_valid(&RecordSet::default()).is_empty());
    }
}
