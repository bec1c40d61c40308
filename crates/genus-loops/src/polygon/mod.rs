//! Fundamental polygon of a genus-g surface.
//!
//! Purpose
//! - Build the `4g` physical sides, their grouping into `2g` logical edges,
//!   and the side-pairing table ("matcher") gluing the sides together.
//! - Place the polygon exactly in Q² so that positions can be classified
//!   and turned back into points without rounding.
//!
//! Model
//! - Side `k` belongs to logical edge `k / 2`. Sides `2i` and `2i+1` are
//!   glued to each other, point for point at the same parameter.
//! - Side `2i` runs from vertex `2i` to vertex `2i+1`; side `2i+1` runs from
//!   vertex `2i+2` back to vertex `2i+1`. Both sides of an edge end at the
//!   vertex they share.
//!
//! Code cross-refs: `position::{SidePosition, ManifoldPosition}`,
//! `loops::LoopBuilder` (consumes `paired_position`).

mod fundamental;
mod layout;
mod types;

pub use fundamental::FundamentalPolygon;
pub use layout::circle_vertices;
pub use types::{EdgeId, PolygonSide, SideId};
