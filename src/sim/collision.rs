//! Collision predicates
//!
//! All tests run against the ball's center before it moves this tick. Rectangle
//! bounds are inclusive; canvas bounds are exclusive (a ball exactly on an edge
//! is still in play).

use glam::DVec2;

use super::state::{BallBody, BlockBody, PaddleBody};
use crate::config::Config;

/// Inclusive point-in-rectangle test (`pos` is the top-left corner)
#[inline]
pub fn rect_contains(pos: DVec2, size: DVec2, point: DVec2) -> bool {
    point.x >= pos.x && point.x <= pos.x + size.x && point.y >= pos.y && point.y <= pos.y + size.y
}

pub fn paddle_hit(paddle: &PaddleBody, ball: &BallBody) -> bool {
    rect_contains(paddle.pos, paddle.size, ball.center)
}

pub fn block_hit(block: &BlockBody, ball: &BallBody) -> bool {
    rect_contains(block.pos, block.size, ball.center)
}

pub fn any_block_hit(blocks: &[BlockBody], ball: &BallBody) -> bool {
    blocks.iter().any(|block| block_hit(block, ball))
}

/// Ball left through the top or bottom
pub fn vertical_wall_hit(ball: &BallBody, config: &Config) -> bool {
    ball.center.y < 0.0 || ball.center.y > config.canvas_height
}

/// Ball crossed the player's goal line
pub fn left_goal(ball: &BallBody) -> bool {
    ball.center.x < 0.0
}

/// Ball crossed the AI's goal line
pub fn right_goal(ball: &BallBody, config: &Config) -> bool {
    ball.center.x > config.canvas_width
}
