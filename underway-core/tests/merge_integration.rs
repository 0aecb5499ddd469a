//! End-to-end merge behaviour over in-memory and file-backed streams

mod common;

use common::*;
use underway_core::{
    format::{OutputFormat, RecordWriter},
    stream::RecordReader,
    MergeError, Merger, StreamKind, ValidationLimits,
};

#[test]
fn coincident_samples_share_one_row() {
    let nav = records(StreamKind::Navigation, &[0]);
    let depth = records(StreamKind::Depth, &[30]);

    let rows = merge(&[(StreamKind::Navigation, &nav[..]), (StreamKind::Depth, &depth[..])]);

    assert_eq!(rows.len(), 1);
    assert_eq!(sources(&rows[0]), vec![StreamKind::Navigation, StreamKind::Depth]);
    assert_eq!(rows[0].row().depth, 5790.45);
    assert_eq!(rows[0].row().latitude, -7.03, "depth position overrides navigation");
}

#[test]
fn samples_a_tenth_of_a_second_apart_get_separate_rows() {
    let nav = records(StreamKind::Navigation, &[0]);
    let depth = records(StreamKind::Depth, &[100]);

    let rows = merge(&[(StreamKind::Navigation, &nav[..]), (StreamKind::Depth, &depth[..])]);

    assert_eq!(rows.len(), 2);
    assert_eq!(sources(&rows[0]), vec![StreamKind::Navigation]);
    assert!(rows[0].row().depth.is_nan());
    assert_eq!(sources(&rows[1]), vec![StreamKind::Depth]);
    assert!(rows[1].row().observed_gravity.is_nan());
}

#[test]
fn out_of_range_depth_is_missing_but_in_range_passes() {
    let depth = vec![
        parse(StreamKind::Depth, &depth_line(0, 150000.0)),
        parse(StreamKind::Depth, &depth_line(1000, 500.0)),
    ];

    let rows = merge(&[(StreamKind::Depth, &depth[..])]);

    assert_eq!(rows.len(), 2);
    assert!(rows[0].row().depth.is_nan());
    assert_eq!(rows[0].row().latitude, -7.03, "the sounding still places the row");
    assert_eq!(rows[1].row().depth, 500.0);
}

#[test]
fn low_total_field_invalidates_the_whole_magnetics_group() {
    let mag = vec![parse(StreamKind::Magnetics, &mag_line(0, 5000.0, 169.9, 2.76, 10.0))];

    let rows = merge(&[(StreamKind::Magnetics, &mag[..])]);
    let row = rows[0].row();

    assert!(row.total_field_1.is_nan());
    assert!(row.anomaly.is_nan());
    assert!(row.diurnal.is_nan());
    assert!(row.sensor_depth.is_nan());
    assert_eq!(row.longitude, -175.94);
}

#[test]
fn exhausted_stream_drops_out_without_stalling_the_rest() {
    let nav = records(StreamKind::Navigation, &[0, 1000, 2000, 3000, 4000]);
    let depth = records(StreamKind::Depth, &[10, 1010, 2010, 3010, 4010]);
    let grav = records(StreamKind::Gravity, &[20]);

    let rows = merge(&[
        (StreamKind::Navigation, &nav[..]),
        (StreamKind::Depth, &depth[..]),
        (StreamKind::Gravity, &grav[..]),
    ]);

    assert_eq!(rows.len(), 5);
    assert_eq!(
        sources(&rows[0]),
        vec![StreamKind::Navigation, StreamKind::Depth, StreamKind::Gravity]
    );
    for row in &rows[1..] {
        assert_eq!(sources(row), vec![StreamKind::Navigation, StreamKind::Depth]);
    }
}

#[test]
fn single_stream_gives_one_row_per_distinct_record() {
    let nav = records(StreamKind::Navigation, &[0, 20, 500, 1000, 1040, 1500]);

    let rows = merge(&[(StreamKind::Navigation, &nav[..])]);

    assert_eq!(rows.len(), 4);
    for row in &rows {
        assert_eq!(sources(row), vec![StreamKind::Navigation]);
        assert!(row.row().depth.is_nan());
        assert!(row.row().total_field_1.is_nan());
        assert!(row.row().observed_gravity.is_nan());
    }
}

#[test]
fn all_four_streams_at_different_rates() {
    // nav 2 Hz, depth 0.5 Hz, mag 4 Hz, grav 1 Hz over ten seconds
    let nav_ms: Vec<u64> = (0..20).map(|i| i * 500).collect();
    let depth_ms: Vec<u64> = (0..5).map(|i| i * 2000 + 10).collect();
    let mag_ms: Vec<u64> = (0..40).map(|i| i * 250 + 5).collect();
    let grav_ms: Vec<u64> = (0..10).map(|i| i * 1000 + 40).collect();

    let nav = records(StreamKind::Navigation, &nav_ms);
    let depth = records(StreamKind::Depth, &depth_ms);
    let mag = records(StreamKind::Magnetics, &mag_ms);
    let grav = records(StreamKind::Gravity, &grav_ms);

    let rows = merge(&[
        (StreamKind::Gravity, &grav[..]),
        (StreamKind::Magnetics, &mag[..]),
        (StreamKind::Depth, &depth[..]),
        (StreamKind::Navigation, &nav[..]),
    ]);

    // Every magnetics sample gets a row; the others ride along
    assert_eq!(rows.len(), 40);
    let total: usize = rows.iter().map(|row| row.sources().len()).sum();
    assert_eq!(total, 20 + 5 + 40 + 10);
    assert_eq!(
        sources(&rows[0]),
        vec![StreamKind::Navigation, StreamKind::Depth, StreamKind::Magnetics, StreamKind::Gravity]
    );
    assert_eq!(sources(&rows[1]), vec![StreamKind::Magnetics]);
}

#[test]
fn reference_instants_never_go_backwards() {
    let nav = records(StreamKind::Navigation, &[0, 700, 1400, 2100]);
    let grav = records(StreamKind::Gravity, &[350, 1000, 1030, 2000]);

    let rows = merge(&[(StreamKind::Navigation, &nav[..]), (StreamKind::Gravity, &grav[..])]);
    let references: Vec<f64> = rows.iter().map(|row| row.reference().unwrap().value()).collect();

    assert!(references.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn merging_twice_is_byte_identical() {
    let nav = records(StreamKind::Navigation, &[0, 500, 1000, 1500]);
    let mag = records(StreamKind::Magnetics, &[25, 260, 510, 760, 1010]);
    let inputs = [(StreamKind::Navigation, nav.as_slice()), (StreamKind::Magnetics, mag.as_slice())];

    assert_eq!(merge_to_text(&inputs), merge_to_text(&inputs));
}

#[test]
fn text_output_for_a_navigation_and_depth_pair() {
    let nav = vec![parse(StreamKind::Navigation, &nav_line(0, -7.032306, -175.930304))];
    let depth = records(StreamKind::Depth, &[30]);

    let text = merge_to_text(&[(StreamKind::Navigation, &nav[..]), (StreamKind::Depth, &depth[..])]);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("#rec\tTZ\tyear"));
    assert_eq!(
        lines[1],
        "5\t0\t2016\t12\t7\t0\t0.000500\t-7.030000000\t-175.930000000\t9\tnan\t5790.450000\t99\t9\t\
         nan\tnan\tnan\t9\tnan\tnan\tnan\tnan\tnan\t9\tKM1609\t99999\t999999"
    );
}

#[test]
fn file_backed_merge_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let nav = write_log(
        dir.path(),
        "nav.txt",
        &[
            "# POS-MV export".to_string(),
            nav_line(0, -7.0, -175.0),
            nav_line(0, -7.0, -175.0),
            String::new(),
            nav_line(1000, -7.001, -175.001),
        ],
    );
    let grav = write_log(dir.path(), "grav.txt", &[grav_line(1010, 978000.0, 1.5, -2.5)]);

    let limits = ValidationLimits::default();
    let mut merger = Merger::builder(CRUISE)
        .stream(StreamKind::Navigation, RecordReader::open(StreamKind::Navigation, &nav, limits).unwrap())
        .stream(StreamKind::Gravity, RecordReader::open(StreamKind::Gravity, &grav, limits).unwrap())
        .build()
        .unwrap();

    let mut writer = RecordWriter::new(Vec::new(), OutputFormat::JsonLines);
    let stats = merger.run(|row| Ok(writer.write_record(row)?)).unwrap();
    let output = String::from_utf8(writer.into_inner()).unwrap();

    assert_eq!(stats.rounds, 2);
    assert_eq!(stats.records_merged, 3);
    assert_eq!(output.lines().count(), 2);

    let nav_cursor = merger.cursor(StreamKind::Navigation).unwrap();
    assert_eq!(nav_cursor.stats().duplicates_suppressed, 1);
    assert_eq!(nav_cursor.source().stats().lines_read, 5);
    assert_eq!(nav_cursor.source().stats().records_parsed, 3);

    let last: serde_json::Value = serde_json::from_str(output.lines().last().unwrap()).unwrap();
    assert_eq!(last["sources"], serde_json::json!(["navigation", "gravity"]));
    assert_eq!(last["observed_gravity"], 978000.0);
    assert!(last["depth"].is_null());
}

#[test]
fn malformed_line_stops_the_merge_with_its_location() {
    let dir = tempfile::tempdir().unwrap();
    let depth = write_log(
        dir.path(),
        "depth.txt",
        &[depth_line(0, 100.0), depth_line(1000, 200.0), "2016 342 00 00 02 000 -7.0".to_string()],
    );

    let mut merger = Merger::builder(CRUISE)
        .stream(
            StreamKind::Depth,
            RecordReader::open(StreamKind::Depth, &depth, ValidationLimits::default()).unwrap(),
        )
        .build()
        .unwrap();

    let mut rows = 0;
    let result = merger.run(|_| {
        rows += 1;
        Ok(())
    });

    // Both good rows are emitted before the bad line is read
    assert_eq!(rows, 2);
    match result {
        Err(MergeError::Malformed { kind, line, .. }) => {
            assert_eq!(kind, StreamKind::Depth);
            assert_eq!(line, 3);
        }
        other => panic!("expected a malformed-line error, got {other:?}"),
    }
}

#[test]
fn empty_file_contributes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let empty = write_log(dir.path(), "mag.txt", &[]);
    let nav = write_log(dir.path(), "nav.txt", &[nav_line(0, -7.0, -175.0)]);

    let limits = ValidationLimits::default();
    let mut merger = Merger::builder(CRUISE)
        .stream(StreamKind::Magnetics, RecordReader::open(StreamKind::Magnetics, &empty, limits).unwrap())
        .stream(StreamKind::Navigation, RecordReader::open(StreamKind::Navigation, &nav, limits).unwrap())
        .build()
        .unwrap();

    let stats = merger.run(|row| {
        assert!(!row.sources().contains(StreamKind::Magnetics));
        Ok(())
    })
    .unwrap();
    assert_eq!(stats.rounds, 1);
}
