//! Animated traversal.
//!
//! Each segment is revealed from its start point to its end point by linear
//! interpolation over a fixed duration. [`play`] hands segments to a
//! [`SegmentAnimator`] one at a time and only asks the tracer for the next
//! segment once the animator returns, so segments appear in path order and
//! never overlap in time.

use std::time::Duration;

use tracing::debug;

use crate::model::PathSegment;
use crate::tracer::{PathTracer, Trace};

/// Something that can draw a segment progressively.
///
/// `animate` blocks until the reveal of `segment` has completed. There is no
/// cancellation: a started segment always runs to the end or fails.
pub trait SegmentAnimator {
    type Error;

    fn animate(&mut self, segment: &PathSegment, duration: Duration) -> Result<(), Self::Error>;
}

/// Animator for headless runs: every segment is revealed instantly.
#[derive(Debug, Default, Clone, Copy)]
pub struct Immediate;

impl SegmentAnimator for Immediate {
    type Error = std::convert::Infallible;

    fn animate(&mut self, _: &PathSegment, _: Duration) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Linear progress in `[0, 1]` after `elapsed` of a reveal lasting `duration`.
///
/// A zero-length reveal is complete immediately.
pub fn progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

/// The visible part of `segment` at `progress`: same start, end point moved
/// `progress` of the way along.
pub fn reveal(segment: &PathSegment, progress: f64) -> PathSegment {
    PathSegment {
        from: segment.from,
        to: segment.from.lerp(segment.to, progress),
        color: segment.color,
    }
}

/// Drive `tracer` to completion, animating every segment before computing
/// the next.
pub fn play<A>(
    mut tracer: PathTracer<'_>,
    animator: &mut A,
    duration: Duration,
) -> Result<Trace, A::Error>
where
    A: SegmentAnimator + ?Sized,
{
    let start = tracer.start_lane();
    let mut segments = Vec::new();
    for segment in tracer.by_ref() {
        animator.animate(&segment, duration)?;
        segments.push(segment);
    }
    debug!(
        start,
        terminal = tracer.current_lane(),
        segments = segments.len(),
        "animated path"
    );
    Ok(Trace {
        start,
        terminal: tracer.current_lane(),
        segments,
    })
}
