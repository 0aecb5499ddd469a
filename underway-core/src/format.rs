//! Output rendering of merged rows
//!
//! Two formats:
//!
//! - **Text**: the tab-separated MGD77-style exchange row, preceded by a
//!   single header line. Missing numbers print as `nan`, missing codes as
//!   their `9` sentinels.
//! - **JSON Lines**: one object per row with named fields; missing numbers
//!   are `null`.

use core::fmt;
use std::io::{self, Write};

use serde::Serialize;

use crate::{
    composite::CompositeRecord,
    constants::mgd77::{RECORD_TYPE, TEXT_HEADER, TIME_ZONE},
    records::StreamKind,
};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Tab-separated exchange rows
    #[default]
    Text,
    /// One JSON object per line
    JsonLines,
}

/// Fixed-precision float that prints missing values as `nan`
struct Fixed(f64, usize);

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            v if v.is_nan() => f.write_str("nan"),
            v if v.is_infinite() && v > 0.0 => f.write_str("inf"),
            v if v.is_infinite() => f.write_str("-inf"),
            v => write!(f, "{:.*}", self.1, v),
        }
    }
}

fn six(value: f64) -> Fixed {
    Fixed(value, 6)
}

/// Render one record as a text row, without the line terminator
pub fn text_row(record: &CompositeRecord) -> String {
    let row = record.row();
    let ids = record.identifiers();
    let epoch = row.epoch;
    let (month, day) = epoch.month_and_day();

    format!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
        RECORD_TYPE,
        TIME_ZONE,
        epoch.year,
        month,
        day,
        epoch.hour,
        six(epoch.decimal_minutes()),
        Fixed(row.latitude, 9),
        Fixed(row.longitude, 9),
        row.position_type,
        six(row.travel_time),
        six(row.depth),
        row.bathy_correction,
        row.bathy_type,
        six(row.total_field_1),
        six(row.total_field_2),
        six(f64::from(row.anomaly)),
        row.mag_sensor,
        six(row.diurnal),
        six(f64::from(row.sensor_depth)),
        Fixed(row.observed_gravity, 2),
        six(row.eotvos),
        six(row.free_air),
        row.nav_quality,
        ids.cruise,
        ids.survey_line,
        ids.station,
    )
}

fn present(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Named-field view of one row for JSON output
#[derive(Debug, Serialize)]
pub struct JsonRow<'a> {
    round: u64,
    sources: Vec<StreamKind>,
    time: Option<f64>,
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: Option<f64>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    travel_time: Option<f64>,
    depth: Option<f64>,
    total_field_1: Option<f64>,
    total_field_2: Option<f64>,
    anomaly: Option<f64>,
    diurnal: Option<f64>,
    sensor_depth: Option<f64>,
    observed_gravity: Option<f64>,
    eotvos: Option<f64>,
    free_air: Option<f64>,
    cruise: &'a str,
    survey_line: &'a str,
    station: &'a str,
}

impl<'a> From<&'a CompositeRecord> for JsonRow<'a> {
    fn from(record: &'a CompositeRecord) -> Self {
        let row = record.row();
        let ids = record.identifiers();
        let (month, day) = row.epoch.month_and_day();

        Self {
            round: record.round(),
            sources: record.sources().iter().collect(),
            time: row.time.map(|t| t.value()),
            year: row.epoch.year,
            month,
            day,
            hour: row.epoch.hour,
            minute: row.epoch.minute,
            second: present(row.epoch.second),
            latitude: present(row.latitude),
            longitude: present(row.longitude),
            travel_time: present(row.travel_time),
            depth: present(row.depth),
            total_field_1: present(row.total_field_1),
            total_field_2: present(row.total_field_2),
            anomaly: present(f64::from(row.anomaly)),
            diurnal: present(row.diurnal),
            sensor_depth: present(f64::from(row.sensor_depth)),
            observed_gravity: present(row.observed_gravity),
            eotvos: present(row.eotvos),
            free_air: present(row.free_air),
            cruise: ids.cruise.as_str(),
            survey_line: ids.survey_line.as_str(),
            station: ids.station.as_str(),
        }
    }
}

/// Writes merged rows in one output format
pub struct RecordWriter<W: Write> {
    out: W,
    format: OutputFormat,
    rows_written: u64,
}

impl<W: Write> RecordWriter<W> {
    /// Wrap an output sink
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format, rows_written: 0 }
    }

    /// Write the column header (text format only)
    pub fn write_header(&mut self) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{}", TEXT_HEADER),
            OutputFormat::JsonLines => Ok(()),
        }
    }

    /// Write one merged row
    pub fn write_record(&mut self, record: &CompositeRecord) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{}", text_row(record))?,
            OutputFormat::JsonLines => {
                serde_json::to_writer(&mut self.out, &JsonRow::from(record))?;
                self.out.write_all(b"\n")?;
            }
        }
        self.rows_written += 1;
        Ok(())
    }

    /// Rows written so far
    pub fn rows_written(&self) -> u64 {
        self.rows_written
    }

    /// Flush the underlying sink
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// Recover the sink
    pub fn into_inner(self) -> W {
        self.out
    }
}
