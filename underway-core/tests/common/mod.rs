//! Shared fixtures for the integration tests
//!
//! Builds log lines in each stream kind's layout from a millisecond offset
//! into 2016 day 342 (7 December), so tests can talk about relative timing
//! instead of hand-writing timestamps.

#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};

use underway_core::{
    format::{OutputFormat, RecordWriter},
    stream::MemoryStream,
    CompositeRecord, Measurement, Merger, StreamKind, ValidationLimits,
};

pub const CRUISE: &str = "KM1609";

/// `year day hour minute seconds milliseconds` for an offset into the survey day
pub fn stamp(offset_ms: u64) -> String {
    let millis = offset_ms % 1000;
    let total_seconds = offset_ms / 1000;
    let seconds = total_seconds % 60;
    let minutes = (total_seconds / 60) % 60;
    let hours = total_seconds / 3600;
    format!("2016 342 {hours:02} {minutes:02} {seconds:02} {millis:03}")
}

pub fn nav_line(offset_ms: u64, latitude: f64, longitude: f64) -> String {
    format!("{} *gpo {latitude} {longitude} 0.80 11.80 291.50", stamp(offset_ms))
}

pub fn depth_line(offset_ms: u64, depth: f64) -> String {
    format!("{} -7.03 -175.93 {depth}", stamp(offset_ms))
}

pub fn mag_line(offset_ms: u64, total_field: f64, anomaly: f64, diurnal: f64, sensor_depth: f64) -> String {
    format!("{} -7.04 -175.94 {total_field} {anomaly} {diurnal} {sensor_depth}", stamp(offset_ms))
}

pub fn grav_line(offset_ms: u64, observed: f64, eotvos: f64, free_air: f64) -> String {
    format!("{} -7.05 -175.95 {observed} {eotvos} {free_air}", stamp(offset_ms))
}

/// A plausible line of the given kind at the given offset
pub fn line(kind: StreamKind, offset_ms: u64) -> String {
    match kind {
        StreamKind::Navigation => nav_line(offset_ms, -7.032306, -175.930304),
        StreamKind::Depth => depth_line(offset_ms, 5790.45),
        StreamKind::Magnetics => mag_line(offset_ms, 35925.875, 169.9, 2.76, 10.0),
        StreamKind::Gravity => grav_line(offset_ms, 978123.4, 12.3, -4.5),
    }
}

pub fn parse(kind: StreamKind, line: &str) -> Measurement {
    kind.parse_line(line, &ValidationLimits::default()).unwrap().0
}

/// Records of one kind at the given offsets
pub fn records(kind: StreamKind, offsets_ms: &[u64]) -> Vec<Measurement> {
    offsets_ms.iter().map(|&ms| parse(kind, &line(kind, ms))).collect()
}

/// Merge in-memory inputs and collect every row
pub fn merge(inputs: &[(StreamKind, &[Measurement])]) -> Vec<CompositeRecord> {
    let mut builder = Merger::builder(CRUISE);
    for &(kind, records) in inputs {
        builder = builder.stream(kind, MemoryStream::new(records));
    }
    let mut merger = builder.build().unwrap();

    let mut rows = Vec::new();
    merger
        .run(|record| {
            rows.push(record.clone());
            Ok(())
        })
        .unwrap();
    rows
}

/// Merge in-memory inputs straight to text output
pub fn merge_to_text(inputs: &[(StreamKind, &[Measurement])]) -> String {
    let mut writer = RecordWriter::new(Vec::new(), OutputFormat::Text);
    writer.write_header().unwrap();
    for row in merge(inputs) {
        writer.write_record(&row).unwrap();
    }
    String::from_utf8(writer.into_inner()).unwrap()
}

/// Write lines to a file in `dir`
pub fn write_log(dir: &Path, name: &str, lines: &[String]) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    path
}

/// Kinds that contributed to a row
pub fn sources(row: &CompositeRecord) -> Vec<StreamKind> {
    row.sources().iter().collect()
}
