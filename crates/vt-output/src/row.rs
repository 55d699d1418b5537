//! Plain data row types written by trace writers.

use chrono::{DateTime, Utc};

use vt_sim::{CompletionSummary, StateSnapshot, UpdateKind};

/// One published snapshot, flattened for tabular output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapshotRow {
    /// Position of this snapshot in the run, starting at 0.
    pub seq:                    u64,
    pub kind:                   UpdateKind,
    pub lat:                    f64,
    pub lon:                    f64,
    pub bearing_deg:            f64,
    pub speed_kmh:              f64,
    pub speed_multiplier:       f64,
    /// Empty in the output when the segment has no timestamps.
    pub recorded_speed_kmh:     Option<f64>,
    pub cumulative_distance_km: f64,
    pub segment_index:          usize,
    pub elapsed_secs:           f64,
    pub recorded_at:            Option<DateTime<Utc>>,
}

impl SnapshotRow {
    pub fn from_snapshot(seq: u64, snap: &StateSnapshot) -> Self {
        Self {
            seq,
            kind:                   snap.kind,
            lat:                    snap.position.lat,
            lon:                    snap.position.lon,
            bearing_deg:            snap.bearing_deg,
            speed_kmh:              snap.speed_kmh,
            speed_multiplier:       snap.speed_multiplier,
            recorded_speed_kmh:     snap.recorded_speed_kmh,
            cumulative_distance_km: snap.cumulative_distance_km,
            segment_index:          snap.segment_index,
            elapsed_secs:           snap.elapsed_secs,
            recorded_at:            snap.recorded_at,
        }
    }
}

/// The end-of-route summary, written once per finish.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub distance_km:    f64,
    pub duration_secs:  f64,
    /// `M:SS`.
    pub duration_label: String,
}

impl From<CompletionSummary> for SummaryRow {
    fn from(summary: CompletionSummary) -> Self {
        Self {
            distance_km:    summary.distance_km,
            duration_secs:  summary.duration_secs,
            duration_label: summary.duration_label(),
        }
    }
}
