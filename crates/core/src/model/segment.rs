use ghostleg_protocol::{Point, ThemeToken};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentKind {
    /// Descent along a lane.
    Vertical,
    /// Jump along a rung.
    Horizontal,
}

/// One drawn unit of a traversal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSegment {
    pub from: Point,
    pub to: Point,
    pub color: ThemeToken,
}

impl PathSegment {
    pub fn new(from: Point, to: Point) -> Self {
        Self {
            from,
            to,
            color: ThemeToken::PathTrace,
        }
    }

    pub fn kind(&self) -> SegmentKind {
        if self.from.x == self.to.x {
            SegmentKind::Vertical
        } else {
            SegmentKind::Horizontal
        }
    }
}
