//! `vt-route`: the route a vehicle traverses.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                      |
//! |------------|---------------------------------------------------------------|
//! | [`route`]  | `Waypoint`, `Route` (validated, immutable, cached lengths)    |
//! | [`loader`] | JSON / CSV route records, explicit `fallback_route` policy    |
//! | [`error`]  | `RouteError`, `RouteResult<T>`                                |
//!
//! A [`Route`] always holds at least two waypoints.  Shorter inputs are
//! rejected with [`RouteError::InvalidRoute`]; substituting placeholder
//! geography is the caller's decision (see [`loader::load_route_or_fallback`]).

pub mod error;
pub mod loader;
pub mod route;


pub use error::{RouteError, RouteResult};
pub use loader::{fallback_route, load_route_csv, load_route_json, load_route_or_fallback, parse_route_json};
pub use route::{Route, Waypoint};
