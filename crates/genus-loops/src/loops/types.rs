//! Committed loop data.

use std::fmt;

use crate::polygon::{EdgeId, SideId};
use crate::position::ManifoldPosition;

/// One step of a traced loop.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LoopSegment {
    pub from: ManifoldPosition,
    pub to: ManifoldPosition,
}

impl LoopSegment {
    #[inline]
    pub fn new(from: ManifoldPosition, to: ManifoldPosition) -> Self {
        Self { from, to }
    }
}

/// Passage of a loop through a glued side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Crossing {
    pub edge: EdgeId,
    /// Side the path reached; it continues from the partner side.
    pub side: SideId,
}

impl Crossing {
    #[inline]
    pub fn is_inverse(&self) -> bool {
        self.side.is_inverse()
    }
}

impl fmt::Display for Crossing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_inverse() {
            write!(f, "{}^-1", self.edge)
        } else {
            write!(f, "{}", self.edge)
        }
    }
}

/// A closed loop: a non-empty, immutable sequence of segments.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Loop {
    segments: Vec<LoopSegment>,
}

impl Loop {
    /// `None` for an empty segment list.
    pub(crate) fn from_segments(segments: Vec<LoopSegment>) -> Option<Self> {
        if segments.is_empty() {
            None
        } else {
            Some(Self { segments })
        }
    }

    #[inline]
    pub fn segments(&self) -> &[LoopSegment] {
        &self.segments
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }
    /// False for every committed loop.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, LoopSegment> {
        self.segments.iter()
    }
    /// Start (and end) point of the loop.
    #[inline]
    pub fn start(&self) -> &ManifoldPosition {
        &self.segments[0].from
    }

    /// Sides crossed, in order.
    pub fn crossings(&self) -> Vec<Crossing> {
        self.segments
            .iter()
            .filter_map(|s| match &s.to {
                ManifoldPosition::OnEdge(sp) => Some(Crossing {
                    edge: sp.edge(),
                    side: sp.side,
                }),
                ManifoldPosition::Interior(_) => None,
            })
            .collect()
    }

    /// Crossing word such as `x0 x1^-1`; empty for a loop that never
    /// reaches the boundary.
    pub fn word(&self) -> String {
        self.crossings()
            .iter()
            .map(Crossing::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<'a> IntoIterator for &'a Loop {
    type Item = &'a LoopSegment;
    type IntoIter = std::slice::Iter<'a, LoopSegment>;
    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
