use ghostleg_protocol::{Point, RenderCommand, TextAlign, ThemeToken};

use crate::animation::reveal;
use crate::config::LadderConfig;
use crate::model::{Ladder, PathSegment};
use crate::tracer::Trace;

fn segment_line(segment: &PathSegment, config: &LadderConfig) -> RenderCommand {
    RenderCommand::DrawLine {
        from: segment.from,
        to: segment.to,
        color: segment.color,
        width: config.path_width,
    }
}

/// Render fully revealed path segments.
pub fn render_path(segments: &[PathSegment], config: &LadderConfig) -> Vec<RenderCommand> {
    if segments.is_empty() {
        return Vec::new();
    }
    let mut commands = Vec::with_capacity(segments.len() + 2);
    commands.push(RenderCommand::BeginGroup {
        id: "path".into(),
        label: Some("Path".into()),
    });
    commands.extend(segments.iter().map(|s| segment_line(s, config)));
    commands.push(RenderCommand::EndGroup);
    commands
}

/// Render one animation frame: every completed segment plus the segment in
/// flight revealed up to `progress`.
pub fn render_path_frame(
    done: &[PathSegment],
    active: &PathSegment,
    progress: f64,
    config: &LadderConfig,
) -> Vec<RenderCommand> {
    let mut commands = Vec::with_capacity(done.len() + 1);
    commands.extend(done.iter().map(|s| segment_line(s, config)));
    commands.push(segment_line(&reveal(active, progress), config));
    commands
}

/// Highlight the outcome of a finished trace: the terminal lane's label is
/// redrawn in the result color, and the start lane is marked above its top.
pub fn render_result(ladder: &Ladder, trace: &Trace, config: &LadderConfig) -> Vec<RenderCommand> {
    let (Some(start), Some(terminal)) = (ladder.lane(trace.start), ladder.lane(trace.terminal))
    else {
        return Vec::new();
    };
    vec![
        RenderCommand::DrawText {
            position: Point::new(start.x, start.y_top - config.label_offset / 2.0),
            text: start.label.clone(),
            color: ThemeToken::PathTrace,
            font_size: config.label_font_size,
            align: TextAlign::Center,
        },
        RenderCommand::DrawText {
            position: Point::new(terminal.x, terminal.y_bottom + config.label_offset),
            text: terminal.label.clone(),
            color: ThemeToken::ResultLabel,
            font_size: config.label_font_size,
            align: TextAlign::Center,
        },
    ]
}
