use ghostleg_protocol::{Point, RenderCommand, TextAlign, ThemeToken};

use crate::config::LadderConfig;
use crate::model::Ladder;

/// Render a freshly generated ladder: clear the surface, then one line per
/// lane, one line per rung, and each lane's label centered under its bottom
/// endpoint.
///
/// An empty ladder renders nothing, leaving the surface untouched.
pub fn render_ladder(ladder: &Ladder, config: &LadderConfig) -> Vec<RenderCommand> {
    if ladder.is_empty() {
        return Vec::new();
    }

    let mut commands =
        Vec::with_capacity(ladder.lane_count() * 2 + ladder.rungs().len() + 7);
    commands.push(RenderCommand::Clear {
        color: ThemeToken::Background,
    });

    commands.push(RenderCommand::BeginGroup {
        id: "lanes".into(),
        label: Some("Lanes".into()),
    });
    for lane in ladder.lanes() {
        commands.push(RenderCommand::DrawLine {
            from: lane.top(),
            to: lane.bottom(),
            color: ThemeToken::LaneLine,
            width: config.line_width,
        });
    }
    commands.push(RenderCommand::EndGroup);

    commands.push(RenderCommand::BeginGroup {
        id: "rungs".into(),
        label: Some("Rungs".into()),
    });
    for rung in ladder.rungs() {
        commands.push(RenderCommand::DrawLine {
            from: Point::new(rung.x_left, rung.y),
            to: Point::new(rung.x_right, rung.y),
            color: ThemeToken::RungLine,
            width: config.line_width,
        });
    }
    commands.push(RenderCommand::EndGroup);

    commands.push(RenderCommand::BeginGroup {
        id: "labels".into(),
        label: Some("Labels".into()),
    });
    for lane in ladder.lanes() {
        commands.push(RenderCommand::DrawText {
            position: Point::new(lane.x, lane.y_bottom + config.label_offset),
            text: lane.label.clone(),
            color: ThemeToken::LaneLabel,
            font_size: config.label_font_size,
            align: TextAlign::Center,
        });
    }
    commands.push(RenderCommand::EndGroup);

    commands
}
