//! Game configuration
//!
//! Fixed at startup and threaded by reference into the simulation. Loaded
//! from JSON; every missing field falls back to its default.

use std::path::Path;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Keys bound to the paddle power-ups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Hold to double the paddle height
    pub enlarge: String,
    /// Hold to pull the AI paddle level with yours
    pub assist: String,
    /// Tap to drop the block grid on the AI's half
    pub spawn_blocks: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            enlarge: "x".to_string(),
            assist: "z".to_string(),
            spawn_blocks: "v".to_string(),
        }
    }
}

/// Block grid layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockGrid {
    pub columns: u32,
    pub rows: u32,
    pub origin_x: f64,
    pub origin_y: f64,
    pub pitch_x: f64,
    pub pitch_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for BlockGrid {
    fn default() -> Self {
        Self {
            columns: BLOCK_COLUMNS,
            rows: BLOCK_ROWS,
            origin_x: BLOCK_ORIGIN_X,
            origin_y: BLOCK_ORIGIN_Y,
            pitch_x: BLOCK_PITCH_X,
            pitch_y: BLOCK_PITCH_Y,
            width: BLOCK_WIDTH,
            height: BLOCK_HEIGHT,
        }
    }
}

impl BlockGrid {
    /// Top-left corner of the block at `(column, row)`
    pub fn cell(&self, column: u32, row: u32) -> DVec2 {
        DVec2::new(
            self.origin_x + self.pitch_x * column as f64,
            self.origin_y + self.pitch_y * row as f64,
        )
    }

    pub fn block_size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    pub fn len(&self) -> usize {
        (self.columns as usize).saturating_mul(self.rows as usize)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // === Canvas ===
    pub canvas_width: f64,
    pub canvas_height: f64,

    // === Ball ===
    pub max_ball_speed_x: f64,
    pub max_ball_speed_y: f64,
    /// Horizontal speed of the ball at kickoff and after every goal
    pub serve_speed: f64,
    pub ball_radius: f64,

    // === Paddles ===
    pub paddle_width: f64,
    pub paddle_height: f64,
    /// Gap between the canvas edge and each paddle
    pub paddle_inset: f64,
    pub paddle_start_y: f64,
    /// AI paddle travel per tick
    pub ai_speed: f64,

    // === Rules ===
    pub winning_score: u32,

    // === Appearance ===
    pub default_color: String,
    pub highlight_color: String,

    pub blocks: BlockGrid,
    pub keys: KeyBindings,

    // === Host loop ===
    pub tick_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,

            max_ball_speed_x: MAX_BALL_SPEED_X,
            max_ball_speed_y: MAX_BALL_SPEED_Y,
            serve_speed: SERVE_SPEED,
            ball_radius: BALL_RADIUS,

            paddle_width: CANVAS_WIDTH / 24.0,
            paddle_height: CANVAS_HEIGHT / 6.0,
            paddle_inset: CANVAS_WIDTH / 12.0,
            paddle_start_y: CANVAS_HEIGHT / 6.0,
            ai_speed: AI_SPEED,

            winning_score: WINNING_SCORE,

            default_color: DEFAULT_COLOR.to_string(),
            highlight_color: HIGHLIGHT_COLOR.to_string(),

            blocks: BlockGrid::default(),
            keys: KeyBindings::default(),

            tick_interval_ms: TICK_INTERVAL_MS,
        }
    }
}

impl Config {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Reject configurations the simulation cannot honor
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_radius", self.ball_radius),
            ("max_ball_speed_y", self.max_ball_speed_y),
            ("serve_speed", self.serve_speed),
            ("ai_speed", self.ai_speed),
            ("blocks.width", self.blocks.width),
            ("blocks.height", self.blocks.height),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::invalid(field, "must be finite and > 0"));
            }
        }
        // Paddle rebounds never drop below 1 horizontally
        if !(self.max_ball_speed_x.is_finite() && self.max_ball_speed_x >= 1.0) {
            return Err(ConfigError::invalid("max_ball_speed_x", "must be >= 1"));
        }
        if self.paddle_height > self.canvas_height {
            return Err(ConfigError::invalid("paddle_height", "taller than the canvas"));
        }
        if self.winning_score == 0 {
            return Err(ConfigError::invalid("winning_score", "must be >= 1"));
        }
        if self.serve_speed > self.max_ball_speed_x {
            return Err(ConfigError::invalid("serve_speed", "exceeds max_ball_speed_x"));
        }
        if self.blocks.is_empty() {
            return Err(ConfigError::invalid("blocks", "grid needs at least one cell"));
        }
        if self.blocks.len() > MAX_BLOCKS {
            return Err(ConfigError::invalid("blocks", "grid has too many cells"));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::invalid("tick_interval_ms", "must be >= 1"));
        }
        Ok(())
    }

    /// Fixed column of the player's paddle
    pub fn left_paddle_x(&self) -> f64 {
        self.paddle_inset
    }

    /// Fixed column of the AI's paddle
    pub fn right_paddle_x(&self) -> f64 {
        self.canvas_width - self.paddle_inset - self.paddle_width
    }

    pub fn canvas_center(&self) -> DVec2 {
        DVec2::new(self.canvas_width / 2.0, self.canvas_height / 2.0)
    }

    pub fn paddle_size(&self) -> DVec2 {
        DVec2::new(self.paddle_width, self.paddle_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paddle_columns() {
        let config = Config::default();
        assert_eq!(config.left_paddle_x(), 50.0);
        assert_eq!(config.right_paddle_x(), 525.0);
        assert_eq!(config.paddle_size(), DVec2::new(25.0, 100.0));
    }

    #[test]
    fn test_default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = Config::from_json(r#"{ "winning_score": 3, "keys": { "assist": "q" } }"#)
            .unwrap();
        assert_eq!(config.winning_score, 3);
        assert_eq!(config.keys.assist, "q");
        assert_eq!(config.keys.enlarge, "x");
        assert_eq!(config.canvas_width, 600.0);
    }

    #[test]
    fn test_rejects_slow_max_speed() {
        let err = Config::from_json(r#"{ "max_ball_speed_x": 0.5 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "max_ball_speed_x",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_zero_winning_score() {
        let err = Config::from_json(r#"{ "winning_score": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "winning_score", .. }));
    }

    #[test]
    fn test_rejects_serve_above_max() {
        let err = Config::from_json(r#"{ "serve_speed": 5.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "serve_speed", .. }));

        // Equal to the limit is fine
        assert!(Config::from_json(r#"{ "serve_speed": 3.5 }"#).is_ok());
    }

    #[test]
    fn test_rejects_huge_block_grid() {
        let err = Config::from_json(r#"{ "blocks": { "columns": 70000, "rows": 70000 } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "blocks", .. }));

        let grid = BlockGrid {
            columns: u32::MAX,
            rows: u32::MAX,
            ..BlockGrid::default()
        };
        assert_eq!(grid.len(), (u32::MAX as usize).saturating_mul(u32::MAX as usize));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Config::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load("/nonexistent/frp-pong.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_block_grid_cells() {
        let grid = BlockGrid::default();
        assert_eq!(grid.len(), 36);
        assert_eq!(grid.cell(0, 0), DVec2::new(420.0, 5.0));
        assert_eq!(grid.cell(2, 11), DVec2::new(470.0, 555.0));
    }
}
