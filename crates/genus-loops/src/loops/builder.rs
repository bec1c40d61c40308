//! The loop-building state machine.

use std::sync::Arc;

use super::types::{Loop, LoopSegment};
use crate::error::LoopError;
use crate::polygon::FundamentalPolygon;
use crate::position::ManifoldPosition;

/// Observable builder state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuilderState {
    Empty,
    Building,
    Closed,
    Abandoned,
}

/// Positions and segments of a loop under construction.
#[derive(Clone, Debug)]
struct Trace {
    start: ManifoldPosition,
    /// Where the path continues from: the last accepted interior point, or
    /// the partner-side image of the last accepted edge point.
    current: ManifoldPosition,
    segments: Vec<LoopSegment>,
}

#[derive(Clone, Debug)]
enum Phase {
    Empty,
    Building(Trace),
    Closed,
    Abandoned,
}

/// Accumulates positions into a closed loop on a fundamental polygon.
///
/// A builder is owned by a single caller for its whole `Building` lifetime
/// (all mutation goes through `&mut self`); the polygon is shared read-only.
#[derive(Clone, Debug)]
pub struct LoopBuilder {
    polygon: Arc<FundamentalPolygon>,
    phase: Phase,
}

impl LoopBuilder {
    pub fn new(polygon: Arc<FundamentalPolygon>) -> Self {
        Self {
            polygon,
            phase: Phase::Empty,
        }
    }

    /// `new` followed by `start`.
    pub fn starting_at(
        polygon: Arc<FundamentalPolygon>,
        p: ManifoldPosition,
    ) -> Result<Self, LoopError> {
        let mut builder = Self::new(polygon);
        builder.start(p)?;
        Ok(builder)
    }

    pub fn state(&self) -> BuilderState {
        match self.phase {
            Phase::Empty => BuilderState::Empty,
            Phase::Building(_) => BuilderState::Building,
            Phase::Closed => BuilderState::Closed,
            Phase::Abandoned => BuilderState::Abandoned,
        }
    }

    #[inline]
    pub fn polygon(&self) -> &Arc<FundamentalPolygon> {
        &self.polygon
    }

    pub fn start_position(&self) -> Option<&ManifoldPosition> {
        self.trace().map(|t| &t.start)
    }

    pub fn current_position(&self) -> Option<&ManifoldPosition> {
        self.trace().map(|t| &t.current)
    }

    /// Segments accumulated so far (empty unless `Building`).
    pub fn segments(&self) -> &[LoopSegment] {
        match self.trace() {
            Some(t) => &t.segments,
            None => &[],
        }
    }

    #[inline]
    pub fn segment_count(&self) -> usize {
        self.segments().len()
    }

    fn trace(&self) -> Option<&Trace> {
        match &self.phase {
            Phase::Building(t) => Some(t),
            _ => None,
        }
    }

    /// Begin a loop. The start must be an interior position.
    ///
    /// Only an `Empty` builder can start; closed and abandoned builders are
    /// spent.
    pub fn start(&mut self, p: ManifoldPosition) -> Result<(), LoopError> {
        match self.phase {
            Phase::Empty => {}
            Phase::Building(_) => return Err(LoopError::AlreadyStarted),
            Phase::Closed | Phase::Abandoned => return Err(LoopError::NotBuilding),
        }
        if !p.is_interior() {
            return Err(LoopError::InvalidStart);
        }
        tracing::debug!(start = %p, "loop started");
        self.phase = Phase::Building(Trace {
            start: p.clone(),
            current: p,
            segments: Vec::new(),
        });
        Ok(())
    }

    /// Append the segment from the current position to `p`.
    ///
    /// The duplicate check compares `p` with the loop start, not with the
    /// last accepted point, so re-adding the last point is accepted.
    pub fn add_point(&mut self, p: ManifoldPosition) -> Result<(), LoopError> {
        let polygon = &self.polygon;
        let Phase::Building(trace) = &mut self.phase else {
            return Err(LoopError::NotBuilding);
        };
        if p == trace.start {
            return Err(LoopError::DuplicateStart);
        }
        if let (Some(edge), Some(last)) = (p.edge(), trace.current.edge()) {
            if edge == last {
                return Err(LoopError::ConsecutiveSameEdge(edge));
            }
        }
        let next = match &p {
            ManifoldPosition::OnEdge(sp) => ManifoldPosition::OnEdge(polygon.paired_position(sp)),
            ManifoldPosition::Interior(_) => p.clone(),
        };
        let from = std::mem::replace(&mut trace.current, next);
        trace.segments.push(LoopSegment::new(from, p));
        tracing::debug!(segments = trace.segments.len(), "point added");
        Ok(())
    }

    /// Close the loop if it has enough segments.
    ///
    /// - Current position equal to the start: at least 2 segments, returned
    ///   as they are.
    /// - Otherwise: at least 1 segment, plus a closing segment back to the
    ///   start.
    ///
    /// On `None` the builder keeps building.
    pub fn close(&mut self) -> Option<Loop> {
        let Phase::Building(trace) = &self.phase else {
            return None;
        };
        let returned = trace.current == trace.start;
        let needed = if returned { 2 } else { 1 };
        if trace.segments.len() < needed {
            tracing::debug!(segments = trace.segments.len(), needed, "loop too short to close");
            return None;
        }
        let Phase::Building(trace) = std::mem::replace(&mut self.phase, Phase::Closed) else {
            return None;
        };
        let Trace {
            start,
            current,
            mut segments,
        } = trace;
        if !returned {
            segments.push(LoopSegment::new(current, start));
        }
        tracing::debug!(segments = segments.len(), "loop closed");
        Loop::from_segments(segments)
    }

    /// Drop the loop in progress, whatever the state.
    pub fn abandon(&mut self) {
        if let Phase::Building(t) = &self.phase {
            tracing::debug!(segments = t.segments.len(), "loop abandoned");
        }
        self.phase = Phase::Abandoned;
    }
}
