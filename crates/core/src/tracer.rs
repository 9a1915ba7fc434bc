//! Path tracing.
//!
//! A traversal starts at the top of a lane and descends until it meets a rung
//! touching its lane, crosses it, and keeps descending on the other side.
//! Segments are produced one at a time so a renderer can animate each before
//! the next one is computed.

use ghostleg_protocol::Point;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::model::{Ladder, Lane, PathSegment, SegmentKind};

/// Tolerance for matching a rung row against the last-row cutoff.
const ROW_EPSILON: f64 = 1e-9;

#[derive(Debug, Error, PartialEq)]
pub enum TraceError {
    #[error("lane {index} does not belong to this ladder")]
    ForeignLane { index: usize },
}

/// A completed traversal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub start: usize,
    pub terminal: usize,
    pub segments: Vec<PathSegment>,
}

impl Trace {
    /// Number of rungs crossed.
    pub fn hops(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| s.kind() == SegmentKind::Horizontal)
            .count()
    }
}

/// What the walker draws next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Move {
    /// Descend to the next rung touching the lane, or to the bottom.
    Descend,
    /// Cross the rung at this index into `rungs`.
    Cross(usize),
    /// Drop straight to the bottom of the current lane.
    Bottom,
    Done,
}

/// Incremental traversal of a ladder from one starting lane.
///
/// Yields vertical and horizontal [`PathSegment`]s in path order, computing
/// each only when asked for it, and stops after the final descent to the
/// bottom of the terminal lane. [`PathTracer::current_lane`] always names the
/// lane the last yielded segment ends on.
#[derive(Debug)]
pub struct PathTracer<'a> {
    ladder: &'a Ladder,
    start: usize,
    lane: usize,
    x: f64,
    y: f64,
    /// Rungs before this index are above the walker.
    cursor: usize,
    next_move: Move,
}

impl<'a> PathTracer<'a> {
    /// Fails fast when `start` was not produced by `ladder`.
    pub fn new(ladder: &'a Ladder, start: &Lane) -> Result<Self, TraceError> {
        if !ladder.contains(start) {
            return Err(TraceError::ForeignLane { index: start.index });
        }
        Ok(Self {
            ladder,
            start: start.index,
            lane: start.index,
            x: start.x,
            y: start.y_top,
            cursor: 0,
            next_move: Move::Descend,
        })
    }

    pub fn start_lane(&self) -> usize {
        self.start
    }

    /// The lane the walker is on. Once the tracer is exhausted this is the
    /// terminal lane.
    pub fn current_lane(&self) -> usize {
        self.lane
    }

    pub fn is_finished(&self) -> bool {
        self.next_move == Move::Done
    }

    fn vertical_to(&mut self, y: f64) -> PathSegment {
        let segment = PathSegment::new(Point::new(self.x, self.y), Point::new(self.x, y));
        self.y = y;
        segment
    }

    fn drop_to_bottom(&mut self) -> Option<PathSegment> {
        let y_bottom = self.ladder.lane(self.lane)?.y_bottom;
        self.next_move = Move::Done;
        Some(self.vertical_to(y_bottom))
    }

    fn descend(&mut self) -> Option<PathSegment> {
        let hit = self.ladder.rungs()[self.cursor..]
            .iter()
            .position(|r| r.y > self.y && r.touches(self.lane));
        let Some(offset) = hit else {
            return self.drop_to_bottom();
        };
        let index = self.cursor + offset;
        self.cursor = index + 1;
        self.next_move = Move::Cross(index);
        let rung_y = self.ladder.rungs()[index].y;
        Some(self.vertical_to(rung_y))
    }

    fn cross(&mut self, index: usize) -> Option<PathSegment> {
        let ladder = self.ladder;
        let rung = ladder.rungs().get(index)?;
        let next = ladder.lane(rung.opposite(self.lane)?)?;

        let segment = PathSegment::new(Point::new(self.x, rung.y), Point::new(next.x, rung.y));
        self.lane = next.index;
        self.x = next.x;

        // A rung one lane-spacing above the bottom counts as the last row.
        let cutoff = next.y_bottom - ladder.lane_spacing();
        self.next_move = if (self.y - cutoff).abs() < ROW_EPSILON {
            Move::Bottom
        } else {
            Move::Descend
        };
        Some(segment)
    }
}

impl Iterator for PathTracer<'_> {
    type Item = PathSegment;

    fn next(&mut self) -> Option<PathSegment> {
        let segment = match self.next_move {
            Move::Descend => self.descend(),
            Move::Cross(index) => self.cross(index),
            Move::Bottom => self.drop_to_bottom(),
            Move::Done => None,
        };
        if segment.is_none() {
            self.next_move = Move::Done;
        }
        segment
    }
}

/// Trace the full path from `start` in one go.
pub fn trace(ladder: &Ladder, start: &Lane) -> Result<Trace, TraceError> {
    let mut tracer = PathTracer::new(ladder, start)?;
    let segments: Vec<PathSegment> = tracer.by_ref().collect();
    let trace = Trace {
        start: tracer.start_lane(),
        terminal: tracer.current_lane(),
        segments,
    };
    debug!(
        start = trace.start,
        terminal = trace.terminal,
        segments = trace.segments.len(),
        "traced path"
    );
    Ok(trace)
}
