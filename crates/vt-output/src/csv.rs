//! CSV trace backend.
//!
//! Creates two files in the output directory:
//! - `snapshots.csv`
//! - `summary.csv`

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;

use crate::writer::TraceWriter;
use crate::{OutputResult, SnapshotRow, SummaryRow};

pub const SNAPSHOT_HEADER: [&str; 12] = [
    "seq",
    "kind",
    "lat",
    "lon",
    "bearing_deg",
    "speed_kmh",
    "speed_multiplier",
    "recorded_speed_kmh",
    "cumulative_distance_km",
    "segment_index",
    "elapsed_secs",
    "recorded_at",
];

pub const SUMMARY_HEADER: [&str; 3] = ["distance_km", "duration_secs", "duration"];

/// Writes a run trace to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summary:   Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open both files, and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;

        let mut snapshots = Writer::from_path(dir.join("snapshots.csv"))?;
        snapshots.write_record(SNAPSHOT_HEADER)?;

        let mut summary = Writer::from_path(dir.join("summary.csv"))?;
        summary.write_record(SUMMARY_HEADER)?;

        Ok(Self { snapshots, summary, finished: false })
    }
}

impl TraceWriter for CsvWriter {
    fn write_snapshot(&mut self, row: &SnapshotRow) -> OutputResult<()> {
        self.finished = false;
        self.snapshots.write_record(&[
            row.seq.to_string(),
            row.kind.to_string(),
            format!("{:.6}", row.lat),
            format!("{:.6}", row.lon),
            format!("{:.1}", row.bearing_deg),
            format!("{:.1}", row.speed_kmh),
            row.speed_multiplier.to_string(),
            row.recorded_speed_kmh.map(|v| format!("{v:.1}")).unwrap_or_default(),
            format!("{:.3}", row.cumulative_distance_km),
            row.segment_index.to_string(),
            format!("{:.3}", row.elapsed_secs),
            row.recorded_at.map(|t| t.to_rfc3339()).unwrap_or_default(),
        ])?;
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        self.finished = false;
        self.summary.write_record(&[
            format!("{:.3}", row.distance_km),
            format!("{:.3}", row.duration_secs),
            row.duration_label.clone(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
