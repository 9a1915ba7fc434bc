use serde::{Deserialize, Serialize};

/// Semantic color tokens resolved by the renderer's active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeToken {
    Background,

    // Ladder
    LaneLine,
    RungLine,
    LaneLabel,

    // Traversal
    PathTrace,
    ResultLabel,
}
