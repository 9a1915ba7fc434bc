use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Lane, Rung};

#[derive(Debug, Error, PartialEq)]
pub enum LadderError {
    #[error("lane at position {position} has index {index}")]
    LaneIndexMismatch { position: usize, index: usize },
    #[error("rung at y={y} connects lane {left_lane} to a lane that does not exist")]
    RungOutOfRange { y: f64, left_lane: usize },
}

/// A generated ghost-leg diagram: lanes ordered by index, rungs ordered by
/// ascending `y`.
///
/// The empty ladder (no lanes, no rungs) stands for "fewer than two usable
/// labels" and is never traced.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Ladder {
    lanes: Vec<Lane>,
    rungs: Vec<Rung>,
    lane_spacing: f64,
}

impl Ladder {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Assemble a ladder from pre-built parts, e.g. a hand-drawn fixture.
    ///
    /// Rungs are re-sorted by `y`; every rung must connect two existing lanes.
    pub fn from_parts(
        lanes: Vec<Lane>,
        mut rungs: Vec<Rung>,
        lane_spacing: f64,
    ) -> Result<Self, LadderError> {
        for (position, lane) in lanes.iter().enumerate() {
            if lane.index != position {
                return Err(LadderError::LaneIndexMismatch {
                    position,
                    index: lane.index,
                });
            }
        }
        if let Some(rung) = rungs.iter().find(|r| r.right_lane() >= lanes.len()) {
            return Err(LadderError::RungOutOfRange {
                y: rung.y,
                left_lane: rung.left_lane,
            });
        }
        rungs.sort_by(|a, b| a.y.total_cmp(&b.y));
        Ok(Self {
            lanes,
            rungs,
            lane_spacing,
        })
    }

    /// Parts already indexed by position and ordered by `y`.
    pub(crate) fn from_rows(lanes: Vec<Lane>, rungs: Vec<Rung>, lane_spacing: f64) -> Self {
        debug_assert!(rungs.windows(2).all(|w| w[0].y < w[1].y));
        debug_assert!(rungs.iter().all(|r| r.right_lane() < lanes.len()));
        Self {
            lanes,
            rungs,
            lane_spacing,
        }
    }

    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    pub fn rungs(&self) -> &[Rung] {
        &self.rungs
    }

    pub fn lane(&self, index: usize) -> Option<&Lane> {
        self.lanes.get(index)
    }

    pub fn lane_count(&self) -> usize {
        self.lanes.len()
    }

    pub fn lane_spacing(&self) -> f64 {
        self.lane_spacing
    }

    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    /// Whether `lane` was produced by this ladder (same index, same geometry).
    pub fn contains(&self, lane: &Lane) -> bool {
        self.lanes.get(lane.index) == Some(lane)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lane(index: usize) -> Lane {
        Lane {
            index,
            x: 50.0 + index as f64 * 100.0,
            y_top: 50.0,
            y_bottom: 650.0,
            label: format!("L{index}").into(),
        }
    }

    fn rung(y: f64, left_lane: usize) -> Rung {
        Rung {
            y,
            x_left: 50.0 + left_lane as f64 * 100.0,
            x_right: 150.0 + left_lane as f64 * 100.0,
            left_lane,
        }
    }

    #[test]
    fn from_parts_sorts_rungs_by_row() {
        let ladder = Ladder::from_parts(
            vec![lane(0), lane(1), lane(2)],
            vec![rung(300.0, 1), rung(100.0, 0), rung(200.0, 1)],
            100.0,
        )
        .unwrap();
        let ys: Vec<f64> = ladder.rungs().iter().map(|r| r.y).collect();
        assert_eq!(ys, vec![100.0, 200.0, 300.0]);
    }

    #[test]
    fn from_parts_rejects_dangling_rung() {
        let err = Ladder::from_parts(vec![lane(0), lane(1)], vec![rung(100.0, 1)], 100.0);
        assert_eq!(
            err,
            Err(LadderError::RungOutOfRange {
                y: 100.0,
                left_lane: 1
            })
        );
    }

    #[test]
    fn from_parts_rejects_misnumbered_lanes() {
        let err = Ladder::from_parts(vec![lane(0), lane(2)], vec![], 100.0);
        assert_eq!(
            err,
            Err(LadderError::LaneIndexMismatch {
                position: 1,
                index: 2
            })
        );
    }

    #[test]
    fn contains_rejects_lanes_from_elsewhere() {
        let ladder = Ladder::from_parts(vec![lane(0), lane(1)], vec![], 100.0).unwrap();
        assert!(ladder.contains(&lane(1)));

        let mut moved = lane(1);
        moved.x += 1.0;
        assert!(!ladder.contains(&moved));
        assert!(!ladder.contains(&lane(5)));
    }

    #[test]
    fn empty_ladder_has_nothing() {
        let ladder = Ladder::empty();
        assert!(ladder.is_empty());
        assert_eq!(ladder.lane_count(), 0);
        assert!(ladder.rungs().is_empty());
    }
}
