//! FRP Pong - a Pong/Breakout game advanced by a pure reducer
//!
//! Core modules:
//! - `sim`: Deterministic transition engine (reducer, physics, paddle, blocks)
//! - `config`: Immutable game configuration
//! - `input`: Raw device events to typed actions
//! - `runtime`: Merged event stream and the sequential reduction loop

pub mod config;
pub mod error;
pub mod input;
pub mod runtime;
pub mod sim;

pub use config::Config;
pub use error::ConfigError;

/// Default game constants (canvas units are pixels, speeds are pixels per tick)
pub mod consts {
    /// Canvas dimensions
    pub const CANVAS_WIDTH: f64 = 600.0;
    pub const CANVAS_HEIGHT: f64 = 600.0;

    /// Ball speed limits per axis
    pub const MAX_BALL_SPEED_X: f64 = 3.5;
    pub const MAX_BALL_SPEED_Y: f64 = 2.0;
    /// Horizontal speed of a freshly served ball
    pub const SERVE_SPEED: f64 = 1.5;
    pub const BALL_RADIUS: f64 = 5.0;

    /// Distance the AI paddle moves per tick while chasing the ball
    pub const AI_SPEED: f64 = 1.6;

    /// First score to reach this ends the game
    pub const WINNING_SCORE: u32 = 7;

    /// Maximum rebound angle off a paddle (degrees)
    pub const MAX_BOUNCE_DEGREES: f64 = 80.0;

    /// Block grid (breakout obstacles on the AI's half)
    pub const BLOCK_COLUMNS: u32 = 3;
    pub const BLOCK_ROWS: u32 = 12;
    pub const BLOCK_ORIGIN_X: f64 = 420.0;
    pub const BLOCK_ORIGIN_Y: f64 = 5.0;
    pub const BLOCK_PITCH_X: f64 = 25.0;
    pub const BLOCK_PITCH_Y: f64 = 50.0;
    pub const BLOCK_WIDTH: f64 = 20.0;
    pub const BLOCK_HEIGHT: f64 = 40.0;
    /// Largest grid a config may ask for
    pub const MAX_BLOCKS: usize = 1024;

    pub const DEFAULT_COLOR: &str = "#FFFFFF";
    pub const HIGHLIGHT_COLOR: &str = "#FF0000";

    /// Logical tick period of the host loop
    pub const TICK_INTERVAL_MS: u64 = 1;
}
