//! Ladder generation.
//!
//! One lane per usable label, one rung per interior row. Each rung connects
//! a uniformly chosen adjacent lane pair, independently of every other row.

use rand::Rng;
use tracing::debug;

use crate::config::LadderConfig;
use crate::labels::usable_labels;
use crate::model::{Ladder, Lane, Rung};

/// Build a fresh ladder for `labels`.
///
/// Empty labels are dropped first. With fewer than two remaining the empty
/// ladder is returned and `rng` is left untouched.
pub fn generate<S, R>(labels: &[S], config: &LadderConfig, rng: &mut R) -> Ladder
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let usable = usable_labels(labels);
    if usable.len() < 2 {
        debug!(usable = usable.len(), "not enough labels for a ladder");
        return Ladder::empty();
    }

    let y_top = config.start_y;
    let y_bottom = config.y_bottom();
    let lanes: Vec<Lane> = usable
        .iter()
        .enumerate()
        .map(|(index, label)| Lane {
            index,
            x: config.lane_x(index),
            y_top,
            y_bottom,
            label: (*label).into(),
        })
        .collect();

    let pairs = lanes.len() - 1;
    let rungs: Vec<Rung> = (1..config.row_count)
        .map(|row| {
            let left_lane = rng.random_range(0..pairs);
            let x_left = config.lane_x(left_lane);
            Rung {
                y: config.row_y(row),
                x_left,
                x_right: x_left + config.lane_spacing,
                left_lane,
            }
        })
        .collect();

    debug!(lanes = lanes.len(), rungs = rungs.len(), "generated ladder");

    Ladder::from_rows(lanes, rungs, config.lane_spacing)
}
