//! The traversal engine: single source of truth for where the vehicle is.

use std::sync::Arc;

use tracing::{debug, info, warn};

use vt_core::{MPS_TO_KMH, SimConfig, format_duration};
use vt_route::Route;

use crate::{Notifier, SimError, SimResult, StateSnapshot, SubscriptionHandle, TraversalState, UpdateKind};

// ── CompletionSummary ─────────────────────────────────────────────────────────

/// Distance and running time of a finished traversal.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CompletionSummary {
    pub distance_km:   f64,
    pub duration_secs: f64,
}

impl CompletionSummary {
    /// Duration as `M:SS`, rounded to the nearest second.
    pub fn duration_label(&self) -> String {
        format_duration(self.duration_secs.max(0.0).round() as u64)
    }
}

// ── TraversalEngine ───────────────────────────────────────────────────────────

/// Moves a cursor along a [`Route`] by elapsed time and publishes a
/// [`StateSnapshot`] after every change.
///
/// # States
///
/// ```text
///            start()                 last waypoint reached
///   Paused ───────────► Running ─────────────────────────► Finished
///     ▲    ◄───────────    │                                   │
///     │       pause()      │ reset()                           │ reset()
///     └────────────────────┴───────────────────────────────────┘
/// ```
///
/// `Finished` is a paused state that `start()` will not leave; only
/// [`reset`][Self::reset] makes the engine runnable again.
///
/// Each engine owns its own state and notifier; several engines may share
/// one `Arc<Route>` without interfering.
pub struct TraversalEngine {
    route:          Arc<Route>,
    base_speed_mps: f64,
    state:          TraversalState,
    notifier:       Notifier<StateSnapshot>,
}

impl TraversalEngine {
    /// Create a paused engine at the route's first waypoint.
    ///
    /// # Errors
    ///
    /// [`SimError::Config`] if `config` fails [`SimConfig::validate`].
    pub fn new(route: Arc<Route>, config: &SimConfig) -> SimResult<Self> {
        config.validate()?;
        let state = TraversalState::at_start(&route, config.speed_multiplier);
        Ok(Self {
            route,
            base_speed_mps: config.base_speed_mps,
            state,
            notifier: Notifier::new(),
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn route(&self) -> &Arc<Route> {
        &self.route
    }

    pub fn state(&self) -> &TraversalState {
        &self.state
    }

    pub fn base_speed_mps(&self) -> f64 {
        self.base_speed_mps
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state.running
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.state.finished
    }

    // ── Subscriptions ─────────────────────────────────────────────────────

    pub fn notifier(&self) -> &Notifier<StateSnapshot> {
        &self.notifier
    }

    /// Shorthand for `self.notifier().subscribe(handler)`.
    pub fn subscribe<F>(&self, handler: F) -> SubscriptionHandle<StateSnapshot>
    where
        F: FnMut(&StateSnapshot) + 'static,
    {
        self.notifier.subscribe(handler)
    }

    pub fn unsubscribe(&self, handle: &SubscriptionHandle<StateSnapshot>) -> bool {
        self.notifier.unsubscribe(handle)
    }

    // ── Controls ──────────────────────────────────────────────────────────

    /// Begin moving.  Returns `false` (and does nothing) if already running
    /// or finished.
    pub fn start(&mut self) -> bool {
        if self.state.running || self.state.finished {
            return false;
        }
        self.state.running = true;
        info!(segment = self.state.segment_index, "traversal started");
        self.publish(UpdateKind::Started);
        true
    }

    /// Stop moving.  Idempotent: only a running engine publishes.
    ///
    /// Takes effect before returning; the next `advance` is a no-op.
    pub fn pause(&mut self) {
        if !self.state.running {
            return;
        }
        self.state.running = false;
        info!(
            cumulative_m = self.state.cumulative_distance_m,
            "traversal paused"
        );
        self.publish(UpdateKind::Paused);
    }

    /// Pause if running, otherwise start.
    pub fn toggle(&mut self) {
        if self.state.running {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Pause and return to the first waypoint.
    ///
    /// Always publishes, even when nothing moved, so observers re-sync.
    /// The speed multiplier survives the reset.
    pub fn reset(&mut self) {
        self.state = TraversalState::at_start(&self.route, self.state.speed_multiplier);
        info!("traversal reset");
        self.publish(UpdateKind::Reset);
    }

    /// Set the speed multiplier used from the next tick on.
    ///
    /// # Errors
    ///
    /// [`SimError::InvalidSpeed`] for negative or non-finite values; the
    /// previous multiplier is kept.
    pub fn set_speed_multiplier(&mut self, multiplier: f64) -> SimResult<()> {
        if !(multiplier.is_finite() && multiplier >= 0.0) {
            return Err(SimError::InvalidSpeed(multiplier));
        }
        self.state.speed_multiplier = multiplier;
        debug!(multiplier, "speed multiplier changed");
        self.publish(UpdateKind::SpeedChanged);
        Ok(())
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Move the cursor by `speed_multiplier × base_speed × delta_secs` metres.
    ///
    /// No-op while paused or finished.  Zero-length segments are crossed
    /// without consuming distance.  Reaching the last waypoint snaps the
    /// position onto it, stops the engine, and publishes
    /// [`UpdateKind::Finished`]; any other tick publishes
    /// [`UpdateKind::Advanced`].
    ///
    /// Negative or non-finite deltas are logged and ignored.
    pub fn advance(&mut self, delta_secs: f64) {
        if !self.state.running || self.state.finished {
            return;
        }
        if !(delta_secs.is_finite() && delta_secs >= 0.0) {
            warn!(delta_secs, "ignoring invalid tick delta");
            return;
        }

        let route = &*self.route;
        let state = &mut self.state;

        let speed_mps = state.speed_multiplier * self.base_speed_mps;
        let step_m    = speed_mps * delta_secs;
        let total_m   = route.total_length_m();
        let last_seg  = route.segment_count() - 1;

        let prior_m       = state.cumulative_distance_m;
        let prior_elapsed = state.elapsed_secs;
        state.elapsed_secs            += delta_secs;
        state.distance_into_segment_m += step_m;
        state.cumulative_distance_m    = (prior_m + step_m).min(total_m);

        loop {
            let seg_len = route.segment_length_m(state.segment_index);
            if state.distance_into_segment_m < seg_len {
                break;
            }

            if state.segment_index >= last_seg {
                // Count only the time needed to cover what was left.
                if speed_mps > 0.0 {
                    let remaining_m = (total_m - prior_m).max(0.0);
                    state.elapsed_secs = prior_elapsed + (remaining_m / speed_mps).min(delta_secs);
                }
                // Face along the last segment that has a direction.
                if let Some((a, b)) = (0..=last_seg)
                    .rev()
                    .find(|&i| route.segment_length_m(i) > 0.0)
                    .and_then(|i| route.segment(i))
                {
                    state.bearing_deg = a.bearing_deg(b);
                }
                state.segment_index           = last_seg;
                state.distance_into_segment_m = 0.0;
                state.cumulative_distance_m   = total_m;
                state.position                = route.end();
                state.running                 = false;
                state.finished                = true;

                info!(
                    distance_m   = total_m,
                    elapsed_secs = state.elapsed_secs,
                    "traversal finished"
                );
                self.publish(UpdateKind::Finished);
                return;
            }

            state.distance_into_segment_m -= seg_len;
            state.segment_index += 1;
            debug!(segment = state.segment_index, "entered segment");
        }

        if let Some((a, b)) = route.segment(state.segment_index) {
            let seg_len  = route.segment_length_m(state.segment_index);
            let fraction = if seg_len > 0.0 {
                state.distance_into_segment_m / seg_len
            } else {
                1.0
            };
            state.position    = a.lerp(b, fraction);
            state.bearing_deg = a.bearing_deg(b);
        }

        self.publish(UpdateKind::Advanced);
    }

    // ── Snapshots ─────────────────────────────────────────────────────────

    /// Build a snapshot of the current state without publishing it.
    pub fn snapshot(&self, kind: UpdateKind) -> StateSnapshot {
        let s = &self.state;
        let speed_kmh = if s.running {
            s.speed_multiplier * self.base_speed_mps * MPS_TO_KMH
        } else {
            0.0
        };

        StateSnapshot {
            kind,
            position:               s.position,
            bearing_deg:            s.bearing_deg,
            speed_kmh,
            speed_multiplier:       s.speed_multiplier,
            recorded_speed_kmh:     self.route.recorded_speed_kmh(s.segment_index),
            recorded_at:            self.route.waypoint(s.segment_index).and_then(|w| w.timestamp),
            cumulative_distance_km: s.cumulative_distance_m / 1_000.0,
            segment_index:          s.segment_index,
            running:                s.running,
            finished:               s.finished,
            elapsed_secs:           s.elapsed_secs,
        }
    }

    /// Distance and running time, once the last waypoint has been reached.
    pub fn completion(&self) -> Option<CompletionSummary> {
        self.state.finished.then(|| CompletionSummary {
            distance_km:   self.state.cumulative_distance_m / 1_000.0,
            duration_secs: self.state.elapsed_secs,
        })
    }

    fn publish(&self, kind: UpdateKind) {
        let snapshot = self.snapshot(kind);
        self.notifier.publish(&snapshot);
    }
}
