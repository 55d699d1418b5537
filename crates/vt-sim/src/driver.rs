//! Tick drivers: the glue between a host's clock and
//! [`TraversalEngine::advance`].
//!
//! Both drivers are self-chaining: the next tick is requested only after the
//! previous `advance` has returned, so ticks never overlap.

use tracing::debug;

use vt_core::SimConfig;

use crate::TraversalEngine;

// ── FrameDriver ───────────────────────────────────────────────────────────────

/// What the host should do after [`FrameDriver::on_frame`] returns.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NextFrame {
    /// Schedule another frame callback.
    Request,
    /// The engine is paused or finished; schedule nothing.
    Stop,
}

/// Adapts display-refresh callbacks (millisecond timestamps, as handed to an
/// animation-frame callback) into tick deltas.
///
/// The first frame after a start only records its timestamp and advances by
/// zero, so time spent paused is never replayed.
#[derive(Debug, Default)]
pub struct FrameDriver {
    last_frame_ms: Option<f64>,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle one frame callback at `timestamp_ms`.
    pub fn on_frame(&mut self, engine: &mut TraversalEngine, timestamp_ms: f64) -> NextFrame {
        if !engine.is_running() {
            self.last_frame_ms = None;
            return NextFrame::Stop;
        }

        let delta_secs = match self.last_frame_ms {
            Some(prev) => ((timestamp_ms - prev) / 1_000.0).max(0.0),
            None => 0.0,
        };
        self.last_frame_ms = Some(timestamp_ms);

        engine.advance(delta_secs);

        if engine.is_running() {
            NextFrame::Request
        } else {
            self.last_frame_ms = None;
            NextFrame::Stop
        }
    }
}

// ── FixedStepDriver ───────────────────────────────────────────────────────────

/// Outcome of a [`FixedStepDriver::run`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DriveReport {
    pub ticks:    u64,
    pub finished: bool,
}

/// Runs the engine at a fixed cadence until it stops or `max_ticks` is hit.
///
/// For headless replay and tests; interactive hosts use [`FrameDriver`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FixedStepDriver {
    pub step_secs: f64,
    pub max_ticks: u64,
}

impl FixedStepDriver {
    pub fn new(step_secs: f64, max_ticks: u64) -> Self {
        Self { step_secs, max_ticks }
    }

    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.step_secs, config.max_ticks)
    }

    /// Start the engine (if it can start) and tick until it pauses, finishes,
    /// or the tick budget runs out.
    pub fn run(&self, engine: &mut TraversalEngine) -> DriveReport {
        engine.start();

        let mut ticks = 0;
        while engine.is_running() && ticks < self.max_ticks {
            engine.advance(self.step_secs);
            ticks += 1;
        }

        debug!(ticks, finished = engine.is_finished(), "fixed-step run ended");
        DriveReport { ticks, finished: engine.is_finished() }
    }
}
