use std::time::Duration;

use ghostleg_protocol::Rect;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("row_count must be at least 1")]
    NoRows,
}

/// Geometry and timing of a ladder.
///
/// Every field has a default, so a JSON config only needs the fields it
/// overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LadderConfig {
    /// X of lane 0.
    pub start_x: f64,
    /// Top of every lane.
    pub start_y: f64,
    /// Vertical span of every lane.
    pub ladder_height: f64,
    /// Horizontal distance between adjacent lanes.
    pub lane_spacing: f64,
    /// Number of row slots; `row_count - 1` interior rows carry a rung.
    pub row_count: u32,
    /// How long the reveal of one path segment takes.
    pub segment_duration_ms: u64,
    pub line_width: f64,
    pub path_width: f64,
    pub label_font_size: f64,
    /// Distance from a lane's bottom endpoint to its label baseline.
    pub label_offset: f64,
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            start_x: 50.0,
            start_y: 50.0,
            ladder_height: 600.0,
            lane_spacing: 100.0,
            row_count: 40,
            segment_duration_ms: 200,
            line_width: 1.0,
            path_width: 3.0,
            label_font_size: 16.0,
            label_offset: 20.0,
        }
    }
}

impl LadderConfig {
    pub fn from_json(data: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_slice(data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("start_x", self.start_x),
            ("start_y", self.start_y),
            ("line_width", self.line_width),
            ("path_width", self.path_width),
            ("label_font_size", self.label_font_size),
            ("label_offset", self.label_offset),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }
        for (field, value) in [
            ("ladder_height", self.ladder_height),
            ("lane_spacing", self.lane_spacing),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        if self.row_count == 0 {
            return Err(ConfigError::NoRows);
        }
        Ok(())
    }

    pub fn y_bottom(&self) -> f64 {
        self.start_y + self.ladder_height
    }

    /// Y of interior row `row` (1-based; row 0 is the lane tops).
    pub fn row_y(&self, row: u32) -> f64 {
        self.start_y + f64::from(row) * self.ladder_height / f64::from(self.row_count)
    }

    pub fn lane_x(&self, index: usize) -> f64 {
        self.start_x + index as f64 * self.lane_spacing
    }

    pub fn segment_duration(&self) -> Duration {
        Duration::from_millis(self.segment_duration_ms)
    }

    /// Drawing surface that fits `lane_count` lanes, their labels, and a
    /// margin matching the top-left origin.
    pub fn canvas(&self, lane_count: usize) -> Rect {
        let last_x = self.lane_x(lane_count.saturating_sub(1));
        Rect::new(
            0.0,
            0.0,
            last_x + self.start_x,
            self.y_bottom() + self.label_offset + self.label_font_size + self.start_y,
        )
    }
}
