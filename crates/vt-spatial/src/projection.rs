//! Closest point on a route and the path remaining beyond it.

use vt_core::GeoPoint;
use vt_route::Route;

use crate::{CoordinateSpace, LocalMetric};

/// Where a query position lands on a route.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Projection {
    /// Segment holding the closest point (segment `i` joins waypoints `i`
    /// and `i + 1`).
    pub segment_index: usize,
    /// Position of the closest point along that segment, in `[0, 1]`.
    pub fraction: f64,
    /// The closest point itself.
    pub closest_point: GeoPoint,
    /// Squared planar distance from the query to `closest_point`, in the
    /// projector's coordinate space.
    pub distance_sq: f64,
}

/// Closest-point search over one route in one coordinate space.
pub struct Projector<'r, S: CoordinateSpace> {
    route: &'r Route,
    space: S,
}

impl<'r, S: CoordinateSpace> Projector<'r, S> {
    pub fn new(route: &'r Route, space: S) -> Self {
        Self { route, space }
    }

    pub fn route(&self) -> &'r Route {
        self.route
    }

    /// Find the point on any segment closest to `point`.
    ///
    /// Each segment contributes its clamped perpendicular foot.  On equal
    /// squared distance the earlier segment wins, so a route that doubles
    /// back over itself resolves to the first pass.
    pub fn project(&self, point: GeoPoint) -> Projection {
        let [px, py] = self.space.to_plane(point);

        let mut best = Projection {
            segment_index: 0,
            fraction:      0.0,
            closest_point: self.route.start(),
            distance_sq:   f64::INFINITY,
        };

        let mut a_geo   = self.route.start();
        let mut a_plane = self.space.to_plane(a_geo);

        for (i, b_geo) in self.route.points().enumerate().skip(1) {
            let b_plane = self.space.to_plane(b_geo);

            let dx = b_plane[0] - a_plane[0];
            let dy = b_plane[1] - a_plane[1];
            let len_sq = dx * dx + dy * dy;

            // Zero-length segment: the foot is the shared endpoint.
            let t = if len_sq > 0.0 {
                (((px - a_plane[0]) * dx + (py - a_plane[1]) * dy) / len_sq).clamp(0.0, 1.0)
            } else {
                0.0
            };

            let fx = a_plane[0] + t * dx - px;
            let fy = a_plane[1] + t * dy - py;
            let d_sq = fx * fx + fy * fy;

            if d_sq < best.distance_sq {
                best = Projection {
                    segment_index: i - 1,
                    fraction:      t,
                    closest_point: a_geo.lerp(b_geo, t),
                    distance_sq:   d_sq,
                };
            }

            a_geo   = b_geo;
            a_plane = b_plane;
        }

        best
    }

    /// The closest point to `point` followed by every waypoint after its
    /// segment.
    ///
    /// Returns `None` when fewer than two points would remain, which tells
    /// the caller to hide the trail instead of drawing a one-point line.
    pub fn remaining_path(&self, point: GeoPoint) -> Option<Vec<GeoPoint>> {
        let proj = self.project(point);
        let tail = self.route.points().skip(proj.segment_index + 1);

        let mut path = Vec::with_capacity(tail.len() + 1);
        path.push(proj.closest_point);
        path.extend(tail);

        (path.len() >= 2).then_some(path)
    }
}

/// [`Projector::project`] in the route's [`LocalMetric`] space.
pub fn project(route: &Route, point: GeoPoint) -> Projection {
    Projector::new(route, LocalMetric::for_route(route)).project(point)
}

/// [`Projector::remaining_path`] in the route's [`LocalMetric`] space.
pub fn remaining_path(route: &Route, point: GeoPoint) -> Option<Vec<GeoPoint>> {
    Projector::new(route, LocalMetric::for_route(route)).remaining_path(point)
}
