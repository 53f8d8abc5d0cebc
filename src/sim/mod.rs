//! Deterministic transition engine
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One fixed logical tick per step
//! - Every step builds a new snapshot from the previous one
//! - Visual handles are forwarded, never interpreted
//! - Block visuals are created/removed only through `SurfaceRequest`s

pub mod action;
pub mod blocks;
pub mod collision;
pub mod paddle;
pub mod physics;
pub mod reducer;
pub mod state;
pub mod tick;

pub use action::{Action, Event};
pub use blocks::{Spawned, spawn_blocks, strike_blocks};
pub use paddle::reduce_paddle;
pub use physics::{deflection_angle, rebound_speed_x, rebound_speed_y};
pub use reducer::{reduce, reduce_event};
pub use state::{
    BallBody, BlockBody, BodyHandles, GameState, PaddleBody, Phase, ScoreBody, Side,
    SurfaceRequest, TextBody, VisualHandle,
};
pub use tick::step;
