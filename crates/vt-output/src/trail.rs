//! Keeps the not-yet-travelled part of the route in step with the vehicle.

use std::sync::Arc;

use vt_core::GeoPoint;
use vt_route::Route;
use vt_sim::{Observer, StateSnapshot};
use vt_spatial::{CoordinateSpace, LocalMetric, Projector};

/// What a renderer should show for the remaining route.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Trail {
    /// Draw a line through these points, starting at the vehicle.
    Visible(Vec<GeoPoint>),
    /// Remove the line; there is nothing left worth drawing.
    #[default]
    Hidden,
}

impl Trail {
    pub fn points(&self) -> &[GeoPoint] {
        match self {
            Trail::Visible(points) => points.as_slice(),
            Trail::Hidden => &[],
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, Trail::Visible(_))
    }
}

/// Recomputes the remaining path from each published position.
///
/// The position is projected onto the route independently of the engine's
/// own segment index, so a tracker fed positions from another pipeline
/// stays correct.  As an observer it hides the trail once a snapshot reports
/// the route finished.
pub struct TrailTracker<S = LocalMetric> {
    route: Arc<Route>,
    space: S,
    trail: Trail,
}

impl TrailTracker<LocalMetric> {
    /// Track `route` in a metric plane around its mean latitude.  The whole
    /// route is visible until the first update.
    pub fn new(route: Arc<Route>) -> Self {
        let space = LocalMetric::for_route(&route);
        Self::with_space(route, space)
    }
}

impl<S: CoordinateSpace + Copy> TrailTracker<S> {
    pub fn with_space(route: Arc<Route>, space: S) -> Self {
        let trail = Trail::Visible(route.points().collect());
        Self { route, space, trail }
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Recompute the trail for a vehicle at `position`.
    pub fn update(&mut self, position: GeoPoint) -> &Trail {
        self.trail = match Projector::new(&self.route, self.space).remaining_path(position) {
            Some(points) => Trail::Visible(points),
            None => Trail::Hidden,
        };
        &self.trail
    }
}

impl<S: CoordinateSpace + Copy> Observer<StateSnapshot> for TrailTracker<S> {
    fn notify(&mut self, snap: &StateSnapshot) {
        if snap.finished {
            self.trail = Trail::Hidden;
        } else {
            self.update(snap.position);
        }
    }
}
