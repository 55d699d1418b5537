//! The `Route` type: an ordered, immutable list of waypoints.
//!
//! Segment lengths and cumulative offsets are computed once at construction
//! so the traversal engine never re-runs the haversine for a segment it has
//! already measured.

use chrono::{DateTime, Utc};

use vt_core::{GeoPoint, speed_kmh};

use crate::{RouteError, RouteResult};

// ── Waypoint ──────────────────────────────────────────────────────────────────

/// One route vertex, optionally stamped with the time it was recorded.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Waypoint {
    pub point:     GeoPoint,
    pub timestamp: Option<DateTime<Utc>>,
}

impl Waypoint {
    #[inline]
    pub fn new(point: GeoPoint) -> Self {
        Self { point, timestamp: None }
    }

    #[inline]
    pub fn timed(point: GeoPoint, timestamp: DateTime<Utc>) -> Self {
        Self { point, timestamp: Some(timestamp) }
    }
}

impl From<GeoPoint> for Waypoint {
    fn from(point: GeoPoint) -> Self {
        Waypoint::new(point)
    }
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// An ordered sequence of at least two waypoints.
///
/// Segment `i` runs from waypoint `i` to waypoint `i + 1`; there are
/// `len() - 1` segments.  Consecutive duplicate waypoints are allowed and
/// produce zero-length segments.
#[derive(Clone, Debug)]
pub struct Route {
    waypoints:       Vec<Waypoint>,
    /// Haversine length of each segment in metres.  Length = `len() - 1`.
    segment_lengths: Vec<f64>,
    /// Distance from the start to each waypoint in metres.  Length = `len()`.
    offsets:         Vec<f64>,
}

impl Route {
    /// Build a route, measuring every segment.
    ///
    /// # Errors
    ///
    /// [`RouteError::InvalidRoute`] if fewer than two waypoints are supplied.
    pub fn new(waypoints: Vec<Waypoint>) -> RouteResult<Self> {
        Self::validate(&waypoints)?;
        Ok(Self::measure(waypoints))
    }

    /// Measure already-validated waypoints.
    pub(crate) fn measure(waypoints: Vec<Waypoint>) -> Self {
        debug_assert!(waypoints.len() >= 2);

        let segment_lengths: Vec<f64> = waypoints
            .windows(2)
            .map(|w| w[0].point.distance_m(w[1].point))
            .collect();

        let mut offsets = Vec::with_capacity(waypoints.len());
        let mut acc = 0.0;
        offsets.push(acc);
        for len in &segment_lengths {
            acc += len;
            offsets.push(acc);
        }

        Self { waypoints, segment_lengths, offsets }
    }

    /// Build an untimed route from bare coordinates.
    pub fn from_points<I>(points: I) -> RouteResult<Self>
    where
        I: IntoIterator<Item = GeoPoint>,
    {
        Self::new(points.into_iter().map(Waypoint::new).collect())
    }

    /// Check that `waypoints` can form a route.
    pub fn validate(waypoints: &[Waypoint]) -> RouteResult<()> {
        if waypoints.len() < 2 {
            return Err(RouteError::InvalidRoute { got: waypoints.len() });
        }
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Always `false`: a constructed route has at least two waypoints.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    #[inline]
    pub fn segment_count(&self) -> usize {
        self.segment_lengths.len()
    }

    #[inline]
    pub fn point(&self, index: usize) -> Option<GeoPoint> {
        self.waypoints.get(index).map(|w| w.point)
    }

    #[inline]
    pub fn waypoint(&self, index: usize) -> Option<&Waypoint> {
        self.waypoints.get(index)
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Iterator over the coordinates in route order.
    pub fn points(&self) -> impl ExactSizeIterator<Item = GeoPoint> + '_ {
        self.waypoints.iter().map(|w| w.point)
    }

    #[inline]
    pub fn start(&self) -> GeoPoint {
        self.waypoints[0].point
    }

    #[inline]
    pub fn end(&self) -> GeoPoint {
        self.waypoints[self.waypoints.len() - 1].point
    }

    /// Endpoints of segment `index`.
    #[inline]
    pub fn segment(&self, index: usize) -> Option<(GeoPoint, GeoPoint)> {
        Some((self.point(index)?, self.point(index + 1)?))
    }

    // ── Distances ─────────────────────────────────────────────────────────

    /// Length of segment `index` in metres; `0.0` past the last segment.
    #[inline]
    pub fn segment_length_m(&self, index: usize) -> f64 {
        self.segment_lengths.get(index).copied().unwrap_or(0.0)
    }

    /// Distance along the route from the start to waypoint `index`.
    #[inline]
    pub fn offset_m(&self, index: usize) -> f64 {
        self.offsets[index.min(self.offsets.len() - 1)]
    }

    /// Sum of all segment lengths in metres.
    #[inline]
    pub fn total_length_m(&self) -> f64 {
        self.offsets[self.offsets.len() - 1]
    }

    /// Speed the vehicle was recorded at over segment `index`, in km/h.
    ///
    /// `None` unless both endpoints carry timestamps and the later one is
    /// strictly after the earlier one.
    pub fn recorded_speed_kmh(&self, index: usize) -> Option<f64> {
        let from = self.waypoints.get(index)?.timestamp?;
        let to   = self.waypoints.get(index + 1)?.timestamp?;
        let secs = (to - from).num_milliseconds() as f64 / 1_000.0;
        if secs <= 0.0 {
            return None;
        }
        Some(speed_kmh(self.segment_length_m(index), secs))
    }
}
