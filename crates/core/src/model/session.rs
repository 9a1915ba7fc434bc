use ghostleg_protocol::RenderCommand;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use tracing::{debug, info};

use crate::animation::{SegmentAnimator, play};
use crate::config::{ConfigError, LadderConfig};
use crate::generator::generate;
use crate::model::Ladder;
use crate::tracer::{PathTracer, Trace, TraceError};
use crate::views;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("a trace is already running")]
    TraceInProgress,
    #[error("no ladder to trace; generate one from at least two labels")]
    NoLadder,
    #[error("lane {0} does not exist")]
    NoSuchLane(usize),
    #[error(transparent)]
    Trace(#[from] TraceError),
    #[error("animation failed: {0}")]
    Animation(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Owner of the current ladder and the "trace running" flag.
///
/// Replaces the ambient page state: callers hold a `Session`, press
/// "generate" via [`Session::generate`] and "start" via [`Session::start`]
/// (or [`Session::run`]), and call [`Session::finish`] once the traversal
/// completes.
#[derive(Debug)]
pub struct Session {
    config: LadderConfig,
    seed: u64,
    rng: ChaCha8Rng,
    ladder: Ladder,
    running: bool,
    last_trace: Option<Trace>,
}

impl Session {
    /// Session with a random seed.
    pub fn new(config: LadderConfig) -> Result<Self, ConfigError> {
        Self::with_seed(config, rand::random())
    }

    /// Session whose ladders and start lanes are reproducible from `seed`.
    pub fn with_seed(config: LadderConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!(seed, "new session");
        Ok(Self {
            config,
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
            ladder: Ladder::empty(),
            running: false,
            last_trace: None,
        })
    }

    pub fn config(&self) -> &LadderConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn ladder(&self) -> &Ladder {
        &self.ladder
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn last_trace(&self) -> Option<&Trace> {
        self.last_trace.as_ref()
    }

    /// Replace the current ladder with a fresh one, dropping any previous
    /// trace. Fewer than two usable labels leave an empty ladder.
    pub fn generate<S: AsRef<str>>(&mut self, labels: &[S]) -> Result<&Ladder, SessionError> {
        if self.running {
            return Err(SessionError::TraceInProgress);
        }
        self.ladder = generate(labels, &self.config, &mut self.rng);
        self.last_trace = None;
        Ok(&self.ladder)
    }

    /// Begin a traversal from a uniformly random lane.
    pub fn start(&mut self) -> Result<PathTracer<'_>, SessionError> {
        self.check_startable()?;
        let index = self.rng.random_range(0..self.ladder.lane_count());
        self.start_from(index)
    }

    /// Begin a traversal from lane `index`.
    pub fn start_from(&mut self, index: usize) -> Result<PathTracer<'_>, SessionError> {
        self.check_startable()?;
        let lane = self
            .ladder
            .lane(index)
            .ok_or(SessionError::NoSuchLane(index))?;
        let tracer = PathTracer::new(&self.ladder, lane)?;
        self.running = true;
        debug!(start = index, "trace started");
        Ok(tracer)
    }

    /// Record a completed traversal and re-enable the triggers.
    pub fn finish(&mut self, trace: Trace) {
        if let Some(lane) = self.ladder.lane(trace.terminal) {
            info!(
                start = trace.start,
                terminal = trace.terminal,
                result = %lane.label,
                "trace finished"
            );
        }
        self.running = false;
        self.last_trace = Some(trace);
    }

    /// Start from a random lane (or `start` when given), animate every
    /// segment with `animator`, and finish.
    pub fn run<A>(&mut self, start: Option<usize>, animator: &mut A) -> Result<Trace, SessionError>
    where
        A: SegmentAnimator + ?Sized,
        A::Error: std::error::Error + Send + Sync + 'static,
    {
        let duration = self.config.segment_duration();
        let tracer = match start {
            Some(index) => self.start_from(index)?,
            None => self.start()?,
        };
        match play(tracer, animator, duration) {
            Ok(trace) => {
                self.finish(trace.clone());
                Ok(trace)
            }
            Err(e) => {
                self.running = false;
                Err(SessionError::Animation(Box::new(e)))
            }
        }
    }

    /// Render commands for the current ladder and, when present, the last
    /// traced path with its result.
    pub fn render(&self) -> Vec<RenderCommand> {
        let mut commands = views::ladder::render_ladder(&self.ladder, &self.config);
        if let Some(trace) = &self.last_trace {
            commands.extend(views::path::render_path(&trace.segments, &self.config));
            commands.extend(views::path::render_result(&self.ladder, trace, &self.config));
        }
        commands
    }

    fn check_startable(&self) -> Result<(), SessionError> {
        if self.running {
            return Err(SessionError::TraceInProgress);
        }
        if self.ladder.is_empty() {
            return Err(SessionError::NoLadder);
        }
        Ok(())
    }
}
