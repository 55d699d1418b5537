//! `vt-spatial`: projecting arbitrary positions onto a route.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`space`]      | `CoordinateSpace` trait, `LocalMetric`, `Degrees`         |
//! | [`projection`] | `Projector`, `Projection`, `remaining_path`               |
//!
//! # Single coordinate space
//!
//! Every distance comparison made for one query goes through the one
//! [`CoordinateSpace`] a [`Projector`] was built with.  There is no API that
//! measures one segment in one space and the next in another.

pub mod projection;
pub mod space;


pub use projection::{Projection, Projector, project, remaining_path};
pub use space::{CoordinateSpace, Degrees, LocalMetric};
