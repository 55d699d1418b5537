//! Planar coordinate spaces used for closest-point search.

use vt_core::{EARTH_RADIUS_M, GeoPoint};
use vt_route::Route;

/// Maps geographic coordinates onto a plane for squared-distance comparison.
///
/// Implementations must be affine in `(lat, lon)`: a fraction `t` along a
/// planar segment then names the same point as `t` along the segment in
/// degree space, which is how projected feet are mapped back to `GeoPoint`s.
pub trait CoordinateSpace {
    /// Plane coordinates `[x, y]` of `p`.
    fn to_plane(&self, p: GeoPoint) -> [f64; 2];
}

/// Equirectangular plane in metres around a fixed reference latitude.
///
/// Longitude is scaled by `cos(reference_lat)`, so distances are close to
/// ground metres for any route that spans a city.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LocalMetric {
    lon_scale: f64,
}

impl LocalMetric {
    pub fn new(reference_lat_deg: f64) -> Self {
        Self { lon_scale: reference_lat_deg.to_radians().cos() }
    }

    /// Reference the route's mean latitude.
    pub fn for_route(route: &Route) -> Self {
        let mean_lat = route.points().map(|p| p.lat).sum::<f64>() / route.len() as f64;
        Self::new(mean_lat)
    }
}

impl CoordinateSpace for LocalMetric {
    #[inline]
    fn to_plane(&self, p: GeoPoint) -> [f64; 2] {
        [
            p.lon.to_radians() * EARTH_RADIUS_M * self.lon_scale,
            p.lat.to_radians() * EARTH_RADIUS_M,
        ]
    }
}

/// Raw `[lon, lat]` degrees, unscaled.
///
/// Matches what a map layer sees before any screen transform.  East-west
/// distances are overstated away from the equator.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Degrees;

impl CoordinateSpace for Degrees {
    #[inline]
    fn to_plane(&self, p: GeoPoint) -> [f64; 2] {
        [p.lon, p.lat]
    }
}
