//! Integration tests for the aggregation pipeline.

use bait_core::{
    AggregateError, EmptyRowPolicy, build_report, count_summary, filter_valid,
    interaction_proportions, interaction_proportions_with_policy,
};
use bait_model::{BaitType, InteractionType, ObservationRecord, RecordSet};
use proptest::prelude::*;

fn record(
    subject: Option<&str>,
    station: &str,
    cereal: Option<InteractionType>,
    meat: Option<InteractionType>,
) -> ObservationRecord {
    ObservationRecord::new(subject, Some(station))
        .with_interaction(BaitType::Cereal, cereal)
        .with_interaction(BaitType::Meat, meat)
}

fn scenario() -> RecordSet {
    vec![
        record(Some("A"), "CBS-1", Some(InteractionType::Bite), None),
        record(Some("A"), "CBS-1", Some(InteractionType::Look), None),
        record(Some("B"), "ABS-2", None, Some(InteractionType::Touch)),
    ]
    .into_iter()
    .collect()
}

#[test]
fn scenario_summary_counts() {
    let summary = count_summary(&filter_valid(&scenario()));

    let cereal = summary.row(BaitType::Cereal).expect("cereal row");
    assert_eq!((cereal.close, cereal.away, cereal.total), (2, 0, 2));
    let meat = summary.row(BaitType::Meat).expect("meat row");
    assert_eq!((meat.close, meat.away, meat.total), (0, 1, 1));
    assert_eq!(summary.rows.len(), 2);
    assert_eq!(summary.rows[0].bait, BaitType::Cereal);
}

#[test]
fn scenario_cereal_proportions() {
    let table = interaction_proportions(&filter_valid(&scenario()), BaitType::Cereal)
        .expect("proportions");

    assert_eq!(
        table.columns,
        vec![
            InteractionType::Encounter,
            InteractionType::Look,
            InteractionType::Touch,
            InteractionType::Bite,
            InteractionType::Consumption,
        ]
    );
    assert_eq!(table.subjects().collect::<Vec<_>>(), vec!["A"]);
    let row = table.row("A").expect("row A");
    assert_eq!(row.values, vec![0.0, 50.0, 0.0, 50.0, 0.0]);
}

#[test]
fn scenario_meat_proportions_have_no_consumption() {
    let table =
        interaction_proportions(&filter_valid(&scenario()), BaitType::Meat).expect("proportions");
    assert_eq!(table.columns.len(), 4);
    assert!(!table.columns.contains(&InteractionType::Consumption));
    assert_eq!(table.value("B", InteractionType::Touch), Some(100.0));
}

#[test]
fn build_report_honours_fail_policy() {
    let mut records = scenario();
    records.extend(
        vec![record(
            Some("C"),
            "ABS-2",
            None,
            Some(InteractionType::TouchAccidental),
        )]
        .into_iter()
        .collect(),
    );

    let err = build_report(&records, EmptyRowPolicy::Fail).unwrap_err();
    assert_eq!(
        err,
        AggregateError::EmptyRow {
            subject: "C".to_string(),
            bait: BaitType::Meat,
        }
    );

    let report = build_report(&records, EmptyRowPolicy::Omit).expect("report");
    assert_eq!(report.meat_proportions.omitted_subjects, vec!["C".to_string()]);
    assert_eq!(report.overview.subjects, 3);
}

#[test]
fn build_report_skips_unidentified_records() {
    let mut records = scenario();
    records.extend(
        vec![record(None, "CBS-1", Some(InteractionType::Bite), None)]
            .into_iter()
            .collect(),
    );

    let report = build_report(&records, EmptyRowPolicy::Fail).expect("report");
    assert_eq!(report.overview.records, 3);
    assert_eq!(report.summary.row(BaitType::Cereal).unwrap().total, 2);
}

fn interaction_for(bait: BaitType) -> impl Strategy<Value = Option<InteractionType>> {
    let allowed: Vec<InteractionType> = InteractionType::ALL
        .into_iter()
        .filter(|kind| bait.allows(*kind))
        .collect();
    proptest::option::of(proptest::sample::select(allowed))
}

fn arb_record() -> impl Strategy<Value = ObservationRecord> {
    (
        proptest::option::of(proptest::sample::select(vec!["A", "B", "C", "D"])),
        proptest::sample::select(vec!["WH/CBS-1", "WH/ABS-2", "WH/hut", "CBS/ABS"]),
        interaction_for(BaitType::Cereal),
        interaction_for(BaitType::Meat),
    )
        .prop_map(|(subject, station, cereal, meat)| record(subject, station, cereal, meat))
}

fn arb_records() -> impl Strategy<Value = RecordSet> {
    proptest::collection::vec(arb_record(), 0..60).prop_map(RecordSet::new)
}

proptest! {
    #[test]
    fn rows_sum_to_one_hundred(records in arb_records()) {
        let valid = filter_valid(&records);
        for bait in BaitType::ALL {
            let table = interaction_proportions_with_policy(&valid, bait, EmptyRowPolicy::Omit)
                .expect("omit policy never fails");
            for row in &table.rows {
                prop_assert!(
                    (row.sum() - 100.0).abs() < 1e-6,
                    "row {} sums to {}",
                    row.subject_id,
                    row.sum()
                );
            }
        }
    }

    #[test]
    fn filtering_is_idempotent(records in arb_records()) {
        let once = filter_valid(&records);
        let twice = filter_valid(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn accidental_touch_never_a_column(records in arb_records()) {
        for bait in BaitType::ALL {
            let table =
                interaction_proportions_with_policy(&records, bait, EmptyRowPolicy::ZeroFill)
                    .expect("zero fill never fails");
            prop_assert!(!table.columns.contains(&InteractionType::TouchAccidental));
            prop_assert_eq!(table.columns.as_slice(), bait.canonical_categories());
        }
    }

    #[test]
    fn total_counts_all_interactions(records in arb_records()) {
        let valid = filter_valid(&records);
        let summary = count_summary(&valid);
        for bait in BaitType::ALL {
            let expected = valid.iter().filter(|r| r.interaction(bait).is_some()).count();
            prop_assert_eq!(summary.row(bait).map(|r| r.total), Some(expected));
        }
    }
}
