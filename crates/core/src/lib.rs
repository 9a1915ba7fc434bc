//! Ghost-leg (amidakuji) lottery: ladder generation, path tracing, and the
//! render commands that draw both.

pub mod animation;
pub mod config;
pub mod generator;
pub mod labels;
pub mod model;
pub mod svg;
pub mod tracer;
pub mod views;

pub use config::{ConfigError, LadderConfig};
pub use generator::generate;
pub use model::{Ladder, Lane, PathSegment, Rung, Session, SessionError};
pub use tracer::{PathTracer, Trace, TraceError, trace};
