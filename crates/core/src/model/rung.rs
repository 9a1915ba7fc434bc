use serde::{Deserialize, Serialize};

/// A horizontal connector between lanes `left_lane` and `left_lane + 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rung {
    pub y: f64,
    pub x_left: f64,
    pub x_right: f64,
    pub left_lane: usize,
}

impl Rung {
    pub fn right_lane(&self) -> usize {
        self.left_lane + 1
    }

    /// Whether either endpoint sits on `lane`.
    pub fn touches(&self, lane: usize) -> bool {
        lane == self.left_lane || lane == self.right_lane()
    }

    /// The lane reached by crossing this rung from `lane`, if it touches it.
    pub fn opposite(&self, lane: usize) -> Option<usize> {
        if lane == self.left_lane {
            Some(self.right_lane())
        } else if lane == self.right_lane() {
            Some(self.left_lane)
        } else {
            None
        }
    }

    pub fn width(&self) -> f64 {
        self.x_right - self.x_left
    }
}
