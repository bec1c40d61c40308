//! Exact affine geometry in Q².
//!
//! Purpose
//! - Points, vectors and oriented segments over `Rational` coordinates.
//! - Every predicate (colinearity, containment) is decided exactly; there is
//!   no tolerance anywhere in this module.
//!
//! Code cross-refs: `projective` lifts `Segment` into lines for intersection,
//! `polygon` builds its sides from `Segment`s.

mod segment;
mod types;

pub use segment::Segment;
pub use types::{Point, Vector};

#[cfg(test)]
mod tests;
