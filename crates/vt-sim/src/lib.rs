//! `vt-sim`: advancing a vehicle along a route by elapsed time.
//!
//! # Tick model
//!
//! ```text
//! host frame / timer ──► driver ──► TraversalEngine::advance(delta_secs)
//!                                        │  move cursor by speed × delta
//!                                        │  skip zero-length segments
//!                                        │  snap + stop at the last waypoint
//!                                        ▼
//!                              Notifier::publish(&StateSnapshot)
//!                                        │
//!                          subscribers (trail, CSV trace, panels)
//! ```
//!
//! The engine owns no timer.  A driver (or the embedding application) calls
//! `advance` once per tick and schedules the next tick only after the call
//! returns, so at most one `advance` is ever in flight.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`state`]    | `TraversalState`, the engine's single mutable record      |
//! | [`snapshot`] | `StateSnapshot`, `UpdateKind`                             |
//! | [`notify`]   | `Notifier<T>`, `SubscriptionHandle<T>`, `Observer<T>`     |
//! | [`engine`]   | `TraversalEngine`, `CompletionSummary`                    |
//! | [`driver`]   | `FrameDriver`, `FixedStepDriver`                          |
//! | [`error`]    | `SimError`, `SimResult<T>`                                |

pub mod driver;
pub mod engine;
pub mod error;
pub mod notify;
pub mod snapshot;
pub mod state;


pub use driver::{DriveReport, FixedStepDriver, FrameDriver, NextFrame};
pub use engine::{CompletionSummary, TraversalEngine};
pub use error::{SimError, SimResult};
pub use notify::{Notifier, Observer, SubscriptionHandle};
pub use snapshot::{StateSnapshot, UpdateKind};
pub use state::TraversalState;
