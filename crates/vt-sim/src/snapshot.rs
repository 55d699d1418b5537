//! Immutable state snapshots published to subscribers.

use std::fmt;

use chrono::{DateTime, Utc};

use vt_core::GeoPoint;

/// Why a snapshot was published.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UpdateKind {
    /// A tick moved (or tried to move) the cursor.
    Advanced,
    /// The tick that reached the last waypoint.
    Finished,
    Started,
    Paused,
    /// Cursor returned to the first waypoint.
    Reset,
    SpeedChanged,
}

impl fmt::Display for UpdateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UpdateKind::Advanced     => "advanced",
            UpdateKind::Finished     => "finished",
            UpdateKind::Started      => "started",
            UpdateKind::Paused       => "paused",
            UpdateKind::Reset        => "reset",
            UpdateKind::SpeedChanged => "speed_changed",
        };
        f.write_str(s)
    }
}

/// A read-only view of the engine, built fresh for every publish.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StateSnapshot {
    pub kind: UpdateKind,

    pub position: GeoPoint,

    /// Heading in degrees, `[0, 360)`.
    pub bearing_deg: f64,

    /// Instantaneous simulated speed; `0.0` unless running.
    pub speed_kmh: f64,

    pub speed_multiplier: f64,

    /// Speed recorded for the current segment from waypoint timestamps, if
    /// both ends carry one.
    pub recorded_speed_kmh: Option<f64>,

    /// Recorded timestamp of the waypoint that starts the current segment.
    pub recorded_at: Option<DateTime<Utc>>,

    pub cumulative_distance_km: f64,

    pub segment_index: usize,

    pub running: bool,

    pub finished: bool,

    pub elapsed_secs: f64,
}
