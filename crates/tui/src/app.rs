use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ghostleg_core::views::ladder::render_ladder;
use ghostleg_core::{Session, SessionError};
use tracing::{info, warn};

use crate::renderer::{TerminalAnimator, TerminalSurface};

/// Interactive session: "generate" and "start" map to keys, and the current
/// ladder plus the last traced path are redrawn between key presses.
pub struct App {
    session: Session,
    labels: Vec<String>,
    status: String,
}

impl App {
    pub fn new(session: Session, labels: Vec<String>) -> Self {
        Self {
            session,
            labels,
            status: String::from("press g to generate"),
        }
    }

    pub fn run(&mut self, surface: &mut TerminalSurface) -> Result<()> {
        self.generate();
        loop {
            let canvas = self
                .session
                .config()
                .canvas(self.session.ladder().lane_count());
            surface.draw(&self.session.render(), canvas, &self.status, true)?;

            if !event::poll(Duration::from_millis(100))? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char('g') => self.generate(),
                    KeyCode::Char('s') | KeyCode::Enter => self.start(surface)?,
                    _ => {}
                },
                _ => {}
            }
        }
        Ok(())
    }

    fn generate(&mut self) {
        match self.session.generate(&self.labels) {
            Ok(ladder) if ladder.is_empty() => {
                self.status = String::from("need at least two labels");
            }
            Ok(ladder) => {
                info!(lanes = ladder.lane_count(), "ladder generated");
                self.status = format!("{} lanes | press s to start", ladder.lane_count());
            }
            Err(e) => self.status = e.to_string(),
        }
    }

    fn start(&mut self, surface: &mut TerminalSurface) -> Result<()> {
        let config = self.session.config().clone();
        let canvas = config.canvas(self.session.ladder().lane_count());
        let base = render_ladder(self.session.ladder(), &config);

        let mut animator = TerminalAnimator::new(surface, base, config, canvas);
        match self.session.run(None, &mut animator) {
            Ok(trace) => {
                let ladder = self.session.ladder();
                let start = ladder.lane(trace.start).map(|l| l.label.to_string());
                let result = ladder.lane(trace.terminal).map(|l| l.label.to_string());
                self.status = format!(
                    "{} → {}",
                    start.unwrap_or_default(),
                    result.unwrap_or_default()
                );
                Ok(())
            }
            Err(SessionError::NoLadder) | Err(SessionError::TraceInProgress) => {
                warn!("start ignored");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}
