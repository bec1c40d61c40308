//! Loop building on the fundamental polygon.
//!
//! Purpose
//! - Accumulate user-supplied surface positions into segments, following
//!   the gluing whenever the path reaches an identified side, and close the
//!   result into a committed `Loop`.
//!
//! States
//! - `Empty → Building → {Closed, Abandoned}`; see `BuilderState`.
//! - Rejected steps (`LoopError`) never change the state.
//!
//! Code cross-refs: `polygon::FundamentalPolygon::paired_position`,
//! `position::ManifoldPosition` (equality through the canonical form),
//! `session::DrawingSession` (drives a builder from classified clicks).

mod builder;
mod types;

pub use builder::{BuilderState, LoopBuilder};
pub use types::{Crossing, Loop, LoopSegment};
