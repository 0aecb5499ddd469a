//! Property tests for the merge invariants
//!
//! Inputs are random per-stream gap sequences (in milliseconds, so some gaps
//! fall inside the tolerance and exercise duplicate suppression).

mod common;

use common::*;
use proptest::prelude::*;
use underway_core::{
    constants::TOLERANCE_YEARS, cursor::Cursor, stream::MemoryStream, Measurement, StreamKind,
};

/// Offsets built from gaps between 0 and 1.5 s
fn offsets(max_len: usize) -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(0u64..1500, 0..max_len).prop_map(|gaps| {
        gaps.iter()
            .scan(0u64, |at, gap| {
                *at += gap;
                Some(*at)
            })
            .collect()
    })
}

/// How many records survive duplicate suppression
fn distinct(records: &[Measurement]) -> usize {
    let mut previous = None;
    let mut kept = 0;
    for record in records {
        let time = record.time();
        match previous {
            Some(prev) if time.is_indistinct_from(prev, TOLERANCE_YEARS) => {}
            _ => {
                kept += 1;
                previous = Some(time);
            }
        }
    }
    kept
}

fn streams(offsets: [Vec<u64>; 4]) -> Vec<(StreamKind, Vec<Measurement>)> {
    StreamKind::ALL
        .into_iter()
        .zip(offsets)
        .filter(|(_, offsets)| !offsets.is_empty())
        .map(|(kind, offsets)| (kind, records(kind, &offsets)))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn every_distinct_record_lands_in_exactly_one_row(
        nav in offsets(30), depth in offsets(10), mag in offsets(40), grav in offsets(20),
    ) {
        let inputs = streams([nav, depth, mag, grav]);
        prop_assume!(!inputs.is_empty());
        let slices: Vec<(StreamKind, &[Measurement])> =
            inputs.iter().map(|(kind, records)| (*kind, records.as_slice())).collect();

        let rows = merge(&slices);

        for (kind, records) in &inputs {
            let merged = rows.iter().filter(|row| row.sources().contains(*kind)).count();
            prop_assert_eq!(merged, distinct(records), "{} records", kind);
        }
        prop_assert!(rows.iter().all(|row| !row.sources().is_empty()));
    }

    #[test]
    fn reference_instant_is_non_decreasing(
        nav in offsets(30), depth in offsets(10), mag in offsets(40), grav in offsets(20),
    ) {
        let inputs = streams([nav, depth, mag, grav]);
        prop_assume!(!inputs.is_empty());
        let slices: Vec<(StreamKind, &[Measurement])> =
            inputs.iter().map(|(kind, records)| (*kind, records.as_slice())).collect();

        let references: Vec<f64> = merge(&slices)
            .iter()
            .filter_map(|row| row.reference())
            .map(|reference| reference.value())
            .collect();

        prop_assert!(references.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn kept_records_are_more_than_a_tolerance_apart(nav in offsets(60)) {
        let records = records(StreamKind::Navigation, &nav);
        let mut cursor = Cursor::open(StreamKind::Navigation, MemoryStream::new(&records), TOLERANCE_YEARS).unwrap();

        let mut kept = Vec::new();
        while let Some(record) = cursor.consume().copied() {
            kept.push(record.time());
            cursor.refill(TOLERANCE_YEARS).unwrap();
        }

        prop_assert!(kept.windows(2).all(|pair| pair[1].since(pair[0]) >= TOLERANCE_YEARS));
    }

    #[test]
    fn merging_is_deterministic(nav in offsets(20), mag in offsets(20)) {
        let inputs = streams([nav, Vec::new(), mag, Vec::new()]);
        prop_assume!(!inputs.is_empty());
        let slices: Vec<(StreamKind, &[Measurement])> =
            inputs.iter().map(|(kind, records)| (*kind, records.as_slice())).collect();

        prop_assert_eq!(merge_to_text(&slices), merge_to_text(&slices));
    }
}
