//! Geographic coordinate type and great-circle math.
//!
//! `GeoPoint` uses `f64` latitude/longitude.  Routes in this workspace are
//! street-scale (consecutive waypoints a few metres apart), where `f32`
//! rounding would swamp the segment lengths themselves.
//!
//! No range validation is performed.  Out-of-range coordinates flow through
//! the trigonometry unchanged and produce well-defined but geographically
//! meaningless results.

use std::fmt;

/// Mean Earth radius in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS-84 geographic coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in metres.
    ///
    /// Symmetric, and exactly `0.0` when `self == other`.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }

    /// Initial compass bearing from `self` towards `other`, in `[0, 360)`.
    ///
    /// When the two points coincide the bearing is undefined; the underlying
    /// `atan2(0, 0)` yields `0.0` (due north) and that value is returned as is.
    pub fn bearing_deg(self, other: GeoPoint) -> f64 {
        let lat1  = self.lat.to_radians();
        let lat2  = other.lat.to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let x = d_lon.sin() * lat2.cos();
        let y = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

        (x.atan2(y).to_degrees() + 360.0) % 360.0
    }

    /// Linear interpolation in degree space: `t = 0` is `self`, `t = 1` is
    /// `other`.
    ///
    /// Adequate at street scale, where the great-circle arc between two
    /// waypoints is indistinguishable from the chord.
    #[inline]
    pub fn lerp(self, other: GeoPoint, t: f64) -> GeoPoint {
        GeoPoint {
            lat: self.lat + (other.lat - self.lat) * t,
            lon: self.lon + (other.lon - self.lon) * t,
        }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
