//! Route record loading.
//!
//! # JSON format
//!
//! An array of records, one per waypoint, in travel order:
//!
//! ```json
//! [
//!   { "latitude": 17.385044, "longitude": 78.486671, "timestamp": "2024-07-20T10:00:00Z" },
//!   { "latitude": 17.385045, "longitude": 78.486672 }
//! ]
//! ```
//!
//! # CSV format
//!
//! ```csv
//! latitude,longitude,timestamp
//! 17.385044,78.486671,2024-07-20T10:00:00Z
//! 17.385045,78.486672,
//! ```
//!
//! `timestamp` is optional in both formats and must be RFC 3339 when present.
//! Only latitude and longitude drive the traversal; timestamps feed
//! [`Route::recorded_speed_kmh`].

use std::io::Read;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{debug, warn};

use vt_core::GeoPoint;

use crate::{Route, RouteError, RouteResult, Waypoint};

// ── Record ────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RouteRecord {
    latitude:  f64,
    longitude: f64,
    #[serde(default)]
    timestamp: Option<String>,
}

fn into_waypoints(records: Vec<RouteRecord>) -> RouteResult<Vec<Waypoint>> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, r)| {
            let timestamp = match r.timestamp.as_deref().map(str::trim) {
                None | Some("") => None,
                Some(s) => Some(
                    DateTime::parse_from_rfc3339(s)
                        .map_err(|source| RouteError::Timestamp { index, source })?
                        .with_timezone(&Utc),
                ),
            };
            Ok(Waypoint {
                point: GeoPoint::new(r.latitude, r.longitude),
                timestamp,
            })
        })
        .collect()
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Parse a JSON array of route records.
pub fn parse_route_json(text: &str) -> RouteResult<Route> {
    let records: Vec<RouteRecord> = serde_json::from_str(text)?;
    debug!(records = records.len(), "parsed route JSON");
    Route::new(into_waypoints(records)?)
}

/// Load a JSON route from `path`.
pub fn load_route_json(path: &Path) -> RouteResult<Route> {
    let text = std::fs::read_to_string(path)?;
    parse_route_json(&text)
}

/// Load a CSV route from any `Read` source.
pub fn load_route_csv<R: Read>(reader: R) -> RouteResult<Route> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let records = csv_reader
        .deserialize::<RouteRecord>()
        .collect::<Result<Vec<_>, _>>()?;
    debug!(records = records.len(), "parsed route CSV");
    Route::new(into_waypoints(records)?)
}

/// The five-waypoint demo route used when no usable route data is available.
///
/// Waypoints are one to a few metres apart in central Hyderabad, stamped
/// five seconds apart starting 2024-07-20T10:00:00Z.
pub fn fallback_route() -> Route {
    const START_UNIX_SECS: i64 = 1_721_469_600;
    const COORDS: [(f64, f64); 5] = [
        (17.385044, 78.486671),
        (17.385045, 78.486672),
        (17.385050, 78.486680),
        (17.385060, 78.486690),
        (17.385070, 78.486700),
    ];

    let waypoints = COORDS
        .iter()
        .zip(0i64..)
        .map(|(&(lat, lon), i)| Waypoint {
            point:     GeoPoint::new(lat, lon),
            timestamp: DateTime::from_timestamp(START_UNIX_SECS + 5 * i, 0),
        })
        .collect();
    Route::measure(waypoints)
}

/// Load the JSON route at `path`, substituting [`fallback_route`] on failure.
///
/// The substitution is logged at `warn` and reported through the returned
/// flag (`true` = fallback in use) so the UI layer can surface it.
pub fn load_route_or_fallback(path: &Path) -> (Route, bool) {
    match load_route_json(path) {
        Ok(route) => (route, false),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "route unavailable, using fallback route");
            (fallback_route(), true)
        }
    }
}
