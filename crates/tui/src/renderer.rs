use std::io::{Stdout, stdout};
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ghostleg_core::LadderConfig;
use ghostleg_core::PathSegment;
use ghostleg_core::animation::{SegmentAnimator, progress};
use ghostleg_core::views::path::render_path_frame;
use ghostleg_protocol::{Rect as CanvasRect, RenderCommand, TextAlign, ThemeToken};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        Block, Borders,
        canvas::{Canvas, Line as CanvasLine},
    },
};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

fn theme_to_color(token: ThemeToken, dark: bool) -> Color {
    match token {
        ThemeToken::Background if dark => Color::Black,
        ThemeToken::Background => Color::White,
        ThemeToken::LaneLine | ThemeToken::RungLine | ThemeToken::LaneLabel if dark => Color::Gray,
        ThemeToken::LaneLine | ThemeToken::RungLine | ThemeToken::LaneLabel => Color::Black,
        ThemeToken::PathTrace => Color::Red,
        ThemeToken::ResultLabel => Color::Yellow,
    }
}

/// The terminal in raw mode on the alternate screen.
pub struct TerminalSurface {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    dark: bool,
}

impl TerminalSurface {
    pub fn enter(dark: bool) -> std::io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal, dark })
    }

    pub fn leave(&mut self) -> std::io::Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()
    }

    /// Draw a status line and the command list scaled into the rest of the
    /// terminal. Canvas coordinates grow downwards; the terminal canvas grows
    /// upwards, so `y` is flipped.
    pub fn draw(
        &mut self,
        commands: &[RenderCommand],
        canvas: CanvasRect,
        status: &str,
        controls_enabled: bool,
    ) -> std::io::Result<()> {
        let dark = self.dark;
        let background = commands
            .iter()
            .find_map(|c| match c {
                RenderCommand::Clear { color } => Some(theme_to_color(*color, dark)),
                _ => None,
            })
            .unwrap_or(Color::Reset);

        let controls_style = if controls_enabled {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        } else {
            Style::default()
                .fg(Color::Gray)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::DIM)
        };

        self.terminal.draw(|frame| {
            let [header_area, content_area] =
                Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(frame.area());

            let header = Block::default()
                .title(format!(
                    " ghostleg | g generate | s start | q quit | {status} "
                ))
                .style(controls_style);
            frame.render_widget(header, header_area);

            let cell_w = if content_area.width > 0 {
                canvas.w / f64::from(content_area.width)
            } else {
                0.0
            };
            let height = canvas.h;

            let widget = Canvas::default()
                .block(Block::default().borders(Borders::NONE))
                .marker(Marker::Braille)
                .background_color(background)
                .x_bounds([canvas.x, canvas.x + canvas.w])
                .y_bounds([canvas.y, canvas.y + height])
                .paint(|ctx| {
                    for cmd in commands {
                        if let RenderCommand::DrawLine {
                            from, to, color, ..
                        } = cmd
                        {
                            ctx.draw(&CanvasLine::new(
                                from.x,
                                height - from.y,
                                to.x,
                                height - to.y,
                                theme_to_color(*color, dark),
                            ));
                        }
                    }
                    ctx.layer();
                    for cmd in commands {
                        if let RenderCommand::DrawText {
                            position,
                            text,
                            color,
                            align,
                            ..
                        } = cmd
                        {
                            let width = text.chars().count() as f64 * cell_w;
                            let x = match align {
                                TextAlign::Left => position.x,
                                TextAlign::Center => position.x - width / 2.0,
                                TextAlign::Right => position.x - width,
                            };
                            ctx.print(
                                x,
                                height - position.y,
                                Span::styled(
                                    text.to_string(),
                                    Style::default().fg(theme_to_color(*color, dark)),
                                ),
                            );
                        }
                    }
                });
            frame.render_widget(widget, content_area);
        })?;
        Ok(())
    }
}

/// Reveals each segment over its duration by redrawing the whole frame,
/// blocking until the reveal completes.
///
/// Keys pressed while a trace runs are discarded, so "start" and
/// "generate" stay disabled until the path reaches the bottom.
pub struct TerminalAnimator<'a> {
    surface: &'a mut TerminalSurface,
    base: Vec<RenderCommand>,
    done: Vec<PathSegment>,
    config: LadderConfig,
    canvas: CanvasRect,
}

impl<'a> TerminalAnimator<'a> {
    pub fn new(
        surface: &'a mut TerminalSurface,
        base: Vec<RenderCommand>,
        config: LadderConfig,
        canvas: CanvasRect,
    ) -> Self {
        Self {
            surface,
            base,
            done: Vec::new(),
            config,
            canvas,
        }
    }
}

impl SegmentAnimator for TerminalAnimator<'_> {
    type Error = std::io::Error;

    fn animate(&mut self, segment: &PathSegment, duration: Duration) -> std::io::Result<()> {
        let started = Instant::now();
        loop {
            let t = progress(started.elapsed(), duration);
            let mut commands = self.base.clone();
            commands.extend(render_path_frame(&self.done, segment, t, &self.config));
            self.surface
                .draw(&commands, self.canvas, "tracing…", false)?;

            while event::poll(Duration::ZERO)? {
                let _: Event = event::read()?;
            }

            if t >= 1.0 {
                break;
            }
            let remaining = duration.saturating_sub(started.elapsed());
            std::thread::sleep(FRAME_INTERVAL.min(remaining));
        }
        self.done.push(segment.clone());
        Ok(())
    }
}
