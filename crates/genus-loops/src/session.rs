//! Drawing session: classified clicks in, committed loops out.
//!
//! The session is what a presentation layer talks to. It owns the polygon
//! for the current genus, at most one builder, and the loops committed so
//! far. A click on the loop start closes the loop; every other click extends
//! it. Rejections are logged as warnings and returned, never fatal.

use std::sync::Arc;

use crate::affine::Point;
use crate::error::{LoopError, PolygonError};
use crate::loops::{Loop, LoopBuilder};
use crate::polygon::FundamentalPolygon;
use crate::position::CanvasPosition;

/// Recoverable problems reported back to the user.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionWarning {
    #[error("you are currently out of the polygon, click a point inside it")]
    Outside,
    #[error(transparent)]
    Rejected(#[from] LoopError),
    #[error("the loop is too short to be closed here")]
    CannotClose,
}

/// What a click did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    Started,
    Extended { segments: usize },
    /// Index of the new loop in [`DrawingSession::loops`].
    Committed { index: usize },
    Warned(SessionWarning),
}

#[derive(Debug)]
pub struct DrawingSession {
    polygon: Arc<FundamentalPolygon>,
    current: Option<LoopBuilder>,
    loops: Vec<Loop>,
}

impl DrawingSession {
    pub fn new(genus: usize) -> Result<Self, PolygonError> {
        Ok(Self {
            polygon: Arc::new(FundamentalPolygon::new(genus)?),
            current: None,
            loops: Vec::new(),
        })
    }

    #[inline]
    pub fn polygon(&self) -> &Arc<FundamentalPolygon> {
        &self.polygon
    }
    #[inline]
    pub fn loops(&self) -> &[Loop] {
        &self.loops
    }
    #[inline]
    pub fn current(&self) -> Option<&LoopBuilder> {
        self.current.as_ref()
    }

    /// Rebuild the polygon. The loop in progress and the committed loops refer
    /// to the old side table and are dropped.
    pub fn set_genus(&mut self, genus: usize) -> Result<(), PolygonError> {
        let polygon = FundamentalPolygon::new(genus)?;
        tracing::info!(genus, dropped = self.loops.len(), "genus changed");
        self.polygon = Arc::new(polygon);
        self.current = None;
        self.loops.clear();
        Ok(())
    }

    /// Classify a point of Q² and handle it as a click.
    pub fn click(&mut self, p: &Point) -> SessionEvent {
        let pos = self.polygon.classify(p);
        self.release(pos)
    }

    /// Handle an already classified click.
    pub fn release(&mut self, pos: CanvasPosition) -> SessionEvent {
        let Some(pos) = pos.into_manifold() else {
            return warn(SessionWarning::Outside);
        };
        match self.current.as_mut() {
            None => match LoopBuilder::starting_at(Arc::clone(&self.polygon), pos) {
                Ok(builder) => {
                    self.current = Some(builder);
                    SessionEvent::Started
                }
                Err(e) => warn(e.into()),
            },
            Some(builder) if builder.start_position() == Some(&pos) => match builder.close() {
                Some(l) => {
                    self.current = None;
                    self.loops.push(l);
                    let index = self.loops.len() - 1;
                    tracing::info!(index, segments = self.loops[index].len(), "loop committed");
                    SessionEvent::Committed { index }
                }
                None => warn(SessionWarning::CannotClose),
            },
            Some(builder) => match builder.add_point(pos) {
                Ok(()) => SessionEvent::Extended {
                    segments: builder.segment_count(),
                },
                Err(e) => warn(e.into()),
            },
        }
    }

    /// Drop the loop in progress, keep committed loops.
    pub fn abandon(&mut self) {
        if let Some(mut builder) = self.current.take() {
            builder.abandon();
        }
    }

    /// Drop everything drawn so far.
    pub fn clear(&mut self) {
        self.current = None;
        self.loops.clear();
    }

    /// Hand the committed loops over to the caller.
    pub fn take_loops(&mut self) -> Vec<Loop> {
        std::mem::take(&mut self.loops)
    }
}

fn warn(w: SessionWarning) -> SessionEvent {
    tracing::warn!(warning = %w, "click rejected");
    SessionEvent::Warned(w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::SideId;
    use crate::position::{EdgeParam, SidePosition};
    use crate::rational::rat;

    fn pt(x: i64, y: i64) -> Point {
        Point::new(rat(x, 10), rat(y, 10))
    }

    #[test]
    fn clicking_the_start_commits_the_loop() {
        let mut s = DrawingSession::new(1).unwrap();
        assert_eq!(s.click(&pt(0, 0)), SessionEvent::Started);
        // Too short: no segment yet.
        assert_eq!(
            s.click(&pt(0, 0)),
            SessionEvent::Warned(SessionWarning::CannotClose)
        );
        let side0 = s.polygon().point_at(&SidePosition::new(
            SideId(0),
            EdgeParam::new(rat(1, 2)).unwrap(),
        ));
        assert_eq!(s.click(&side0), SessionEvent::Extended { segments: 1 });
        assert_eq!(s.click(&pt(1, 1)), SessionEvent::Extended { segments: 2 });
        assert_eq!(s.click(&pt(0, 0)), SessionEvent::Committed { index: 0 });
        assert!(s.current().is_none());
        assert_eq!(s.loops().len(), 1);
        assert_eq!(s.loops()[0].len(), 3);
        assert_eq!(s.loops()[0].word(), "x0");
    }

    #[test]
    fn outside_and_edge_starts_are_warnings() {
        let mut s = DrawingSession::new(1).unwrap();
        assert_eq!(
            s.click(&Point::from_ints(3, 3)),
            SessionEvent::Warned(SessionWarning::Outside)
        );
        let on_edge = s.polygon().point_at(&SidePosition::new(
            SideId(2),
            EdgeParam::new(rat(1, 3)).unwrap(),
        ));
        assert_eq!(
            s.click(&on_edge),
            SessionEvent::Warned(SessionWarning::Rejected(LoopError::InvalidStart))
        );
        assert!(s.current().is_none());
    }

    #[test]
    fn abandon_clear_and_genus_change() {
        let mut s = DrawingSession::new(2).unwrap();
        s.click(&pt(0, 0));
        s.click(&pt(1, 0));
        s.click(&pt(0, 0));
        assert_eq!(s.loops().len(), 1);

        s.click(&pt(1, 1));
        assert!(s.current().is_some());
        s.abandon();
        assert!(s.current().is_none());
        assert_eq!(s.loops().len(), 1);

        s.click(&pt(1, 1));
        s.set_genus(3).unwrap();
        assert_eq!(s.polygon().genus(), 3);
        assert!(s.current().is_none());
        assert!(s.loops().is_empty());
        assert_eq!(s.set_genus(0), Err(PolygonError::InvalidGenus(0)));
        let too_big = crate::cfg::MAX_GENUS + 1;
        assert_eq!(s.set_genus(too_big), Err(PolygonError::InvalidGenus(too_big)));
        assert_eq!(s.polygon().genus(), 3);

        s.click(&pt(0, 0));
        s.click(&pt(1, 0));
        s.click(&pt(0, 0));
        assert_eq!(s.take_loops().len(), 1);
        assert!(s.loops().is_empty());
        s.click(&pt(0, 0));
        s.clear();
        assert!(s.current().is_none());
    }
}
