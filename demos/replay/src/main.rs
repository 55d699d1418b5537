//! replay: drives a vehicle along a recorded route, headless.
//!
//! ```text
//! replay [ROUTE.json|ROUTE.csv] [CONFIG.json]
//! ```
//!
//! Without arguments the bundled `data/route.json` is used; a JSON route that
//! cannot be read is replaced by the built-in demo route, with a warning.
//! Every published snapshot is traced to `output/replay/snapshots.csv` and
//! the end-of-route summary to `output/replay/summary.csv`.
//!
//! Logging follows `RUST_LOG` (default `info` for the workspace crates).

mod config;

use std::cell::RefCell;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vt_output::{CsvRecorder, CsvWriter, TrailTracker};
use vt_route::{Route, load_route_csv, load_route_or_fallback};
use vt_sim::{FixedStepDriver, TraversalEngine, UpdateKind};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_ROUTE: &str = "demos/replay/data/route.json";
const OUTPUT_DIR:    &str = "output/replay";

/// Print a progress line every this many snapshots.
const PROGRESS_EVERY: u64 = 600;

// ── Route loading ─────────────────────────────────────────────────────────────

fn load_route(path: &Path) -> Result<Route> {
    let is_csv = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if is_csv {
        let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        return load_route_csv(file).with_context(|| format!("loading {}", path.display()));
    }

    let (route, fallback) = load_route_or_fallback(path);
    if fallback {
        println!("!! {} unusable, replaying the built-in demo route", path.display());
    }
    Ok(route)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "replay=info,vt_sim=info,vt_route=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args_os().skip(1);
    let route_path  = args.next().map_or_else(|| PathBuf::from(DEFAULT_ROUTE), PathBuf::from);
    let config_path = args.next().map(PathBuf::from);

    println!("=== replay: vehicle route traversal ===");

    // 1. Route.
    let route = Arc::new(load_route(&route_path)?);
    println!(
        "Route: {} waypoints, {} segments, {:.1} m",
        route.len(),
        route.segment_count(),
        route.total_length_m()
    );

    // 2. Config.
    let config = config::load(config_path.as_deref())?;
    println!(
        "Speed: {:.1} m/s × {}  |  step {:.4} s  |  max {} ticks",
        config.base_speed_mps, config.speed_multiplier, config.step_secs, config.max_ticks
    );

    // 3. Engine and subscribers.
    let mut engine = TraversalEngine::new(Arc::clone(&route), &config)?;

    let recorder = Rc::new(RefCell::new(CsvRecorder::new(CsvWriter::new(Path::new(OUTPUT_DIR))?)));
    engine.notifier().subscribe_observer(Rc::clone(&recorder));

    let trail = Rc::new(RefCell::new(TrailTracker::new(Arc::clone(&route))));
    engine.notifier().subscribe_observer(Rc::clone(&trail));

    let mut seen = 0u64;
    engine.subscribe(move |snap| {
        seen += 1;
        if snap.kind == UpdateKind::Advanced && seen % PROGRESS_EVERY == 0 {
            println!(
                "  {:>8.3} km  {:>6.1} km/h  heading {:>5.1}°  segment {}",
                snap.cumulative_distance_km, snap.speed_kmh, snap.bearing_deg, snap.segment_index
            );
        }
    });

    // 4. Run.
    let t0 = Instant::now();
    let report = FixedStepDriver::from_config(&config).run(&mut engine);
    let wall = t0.elapsed();

    recorder.borrow_mut().finish();
    if let Some(e) = recorder.borrow_mut().take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    println!();
    println!("Replay ended after {} ticks in {:.3} s wall time", report.ticks, wall.as_secs_f64());
    match engine.completion() {
        Some(summary) => println!(
            "Journey complete: {:.3} km in {}",
            summary.distance_km,
            summary.duration_label()
        ),
        None => println!(
            "Stopped early at {:.3} km (tick budget reached)",
            engine.state().cumulative_distance_m / 1_000.0
        ),
    }
    println!(
        "  snapshots.csv : {} rows  |  trail: {}",
        recorder.borrow().recorded(),
        if trail.borrow().trail().is_visible() { "visible" } else { "hidden" }
    );

    Ok(())
}
