use ghostleg_protocol::{Point, SharedStr};
use serde::{Deserialize, Serialize};

/// A vertical line: one participant or outcome slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lane {
    /// 0-based position among the active lanes.
    pub index: usize,
    pub x: f64,
    pub y_top: f64,
    pub y_bottom: f64,
    pub label: SharedStr,
}

impl Lane {
    pub fn top(&self) -> Point {
        Point::new(self.x, self.y_top)
    }

    pub fn bottom(&self) -> Point {
        Point::new(self.x, self.y_bottom)
    }
}
