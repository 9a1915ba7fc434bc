use serde::{Deserialize, Serialize};

use crate::shared_str::SharedStr;
use crate::theme::ThemeToken;
use crate::types::Point;

/// A single, stateless render instruction.
///
/// The core emits a `Vec<RenderCommand>` for the ladder and for each traced
/// path. Renderers consume this list sequentially; each command carries all
/// the data it needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RenderCommand {
    /// Fill the whole drawing surface, discarding anything drawn before.
    Clear { color: ThemeToken },

    /// Draw a text string at a position.
    DrawText {
        position: Point,
        text: SharedStr,
        color: ThemeToken,
        font_size: f64,
        align: TextAlign,
    },

    /// Draw a line segment.
    DrawLine {
        from: Point,
        to: Point,
        color: ThemeToken,
        width: f64,
    },

    /// Begin a logical group (e.g. all rungs). Renderers may use this for
    /// batching or layer separation.
    BeginGroup {
        id: SharedStr,
        label: Option<SharedStr>,
    },

    /// End the current group.
    EndGroup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_line_serializes_with_tag() {
        let cmd = RenderCommand::DrawLine {
            from: Point::new(50.0, 50.0),
            to: Point::new(150.0, 50.0),
            color: ThemeToken::RungLine,
            width: 1.0,
        };
        let json = serde_json::to_string(&cmd).unwrap_or_default();
        assert!(json.starts_with(r#"{"DrawLine":"#));
        assert!(json.contains(r#""color":"RungLine""#));

        let back: Option<RenderCommand> = serde_json::from_str(&json).ok();
        assert_eq!(back, Some(cmd));
    }
}
