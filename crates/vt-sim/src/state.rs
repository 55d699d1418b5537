//! The engine's mutable traversal record.

use vt_core::GeoPoint;
use vt_route::Route;

/// Where the vehicle is and how it is moving.
///
/// Written only by [`TraversalEngine`][crate::TraversalEngine].  While not
/// finished, `segment_index <= route.segment_count() - 1` and
/// `distance_into_segment_m` is below that segment's length (except at the
/// start of a zero-length first segment, where both are `0.0`).
#[derive(Debug, Clone, PartialEq)]
pub struct TraversalState {
    /// Segment the cursor is on (joins waypoints `i` and `i + 1`).
    pub segment_index: usize,

    /// Metres travelled along the current segment.
    pub distance_into_segment_m: f64,

    /// Metres travelled since the last reset.  Non-decreasing while running
    /// and never above the route's total length.
    pub cumulative_distance_m: f64,

    /// Scales the engine's base speed.  Always finite and `>= 0`.
    pub speed_multiplier: f64,

    /// `true` only while ticks move the cursor.
    pub running: bool,

    /// `true` once the last waypoint has been reached.  Cleared by reset.
    pub finished: bool,

    /// Running time accumulated since the last reset, in seconds.
    pub elapsed_secs: f64,

    /// Interpolated position.
    pub position: GeoPoint,

    /// Heading in degrees, `[0, 360)`.
    pub bearing_deg: f64,
}

impl TraversalState {
    /// Paused at the first waypoint, facing along the first segment.
    ///
    /// A zero-length first segment gives a bearing of `0.0` (see
    /// [`GeoPoint::bearing_deg`]).
    pub fn at_start(route: &Route, speed_multiplier: f64) -> Self {
        let start = route.start();
        let bearing_deg = route
            .point(1)
            .map(|next| start.bearing_deg(next))
            .unwrap_or(0.0);

        Self {
            segment_index:           0,
            distance_into_segment_m: 0.0,
            cumulative_distance_m:   0.0,
            speed_multiplier,
            running:                 false,
            finished:                false,
            elapsed_secs:            0.0,
            position:                start,
            bearing_deg,
        }
    }
}
