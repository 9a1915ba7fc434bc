pub mod ladder;
pub mod lane;
pub mod rung;
pub mod segment;
pub mod session;

pub use ladder::{Ladder, LadderError};
pub use lane::Lane;
pub use rung::Rung;
pub use segment::{PathSegment, SegmentKind};
pub use session::{Session, SessionError};
