//! Physics/collision step
//!
//! Advances the ball one tick, resolves paddle, wall, goal and block contacts,
//! keeps score and drives the AI paddle. Every contact is judged on the
//! pre-move snapshot; the new velocity is then applied in the same tick.

use glam::DVec2;

use super::blocks::strike_blocks;
use super::collision::{any_block_hit, left_goal, paddle_hit, right_goal, vertical_wall_hit};
use super::physics::{rebound_speed_x, rebound_speed_y};
use super::state::{BallBody, GameState, PaddleBody, ScoreBody};
use crate::config::Config;

/// Advance the running game by one tick
pub fn step(state: &GameState, config: &Config) -> GameState {
    let ball = &state.ball;
    let left_hit = paddle_hit(&state.left_paddle, ball);
    let right_hit = paddle_hit(&state.right_paddle, ball);
    let block_hit = any_block_hit(&state.blocks, ball);
    let wall_hit = vertical_wall_hit(ball, config);
    let goal_left = left_goal(ball);
    let goal_right = right_goal(ball, config);
    let goal = goal_left || goal_right;

    let speed_x = if left_hit {
        rebound_speed_x(&state.left_paddle, ball, config)
    } else if right_hit {
        -rebound_speed_x(&state.right_paddle, ball, config)
    } else if block_hit {
        -ball.velocity.x
    } else if goal_right {
        // Serve toward the side that conceded
        config.serve_speed
    } else if goal_left {
        -config.serve_speed
    } else {
        ball.velocity.x
    };

    let speed_y = if left_hit {
        rebound_speed_y(&state.left_paddle, ball, config)
    } else if right_hit {
        rebound_speed_y(&state.right_paddle, ball, config)
    } else if wall_hit {
        -ball.velocity.y
    } else if goal {
        0.0
    } else {
        ball.velocity.y
    };

    // A paddle hit snaps the ball onto the struck face before it moves
    let base_x = if left_hit {
        state.left_paddle.pos.x + state.left_paddle.size.x
    } else if right_hit {
        state.right_paddle.pos.x
    } else if goal {
        config.canvas_width / 2.0
    } else {
        ball.center.x
    };
    let base_y = if goal {
        config.canvas_height / 2.0
    } else {
        ball.center.y
    };

    let velocity = DVec2::new(speed_x, speed_y);
    let center = DVec2::new(base_x, base_y) + velocity;

    let left_score = state.left_score.score + u32::from(goal_right);
    let right_score = state.right_score.score + u32::from(goal_left);
    if goal {
        log::debug!("Goal! {} - {}", left_score, right_score);
    }

    let (blocks, removals) = strike_blocks(&state.blocks, ball);
    let mut requests = state.requests.clone();
    requests.extend(removals);

    log::trace!("Ball {:?} -> {:?}, velocity {:?}", ball.center, center, velocity);

    GameState {
        ball: BallBody {
            center,
            velocity,
            ..ball.clone()
        },
        right_paddle: track_ball(&state.right_paddle, ball, config),
        left_score: ScoreBody {
            score: left_score,
            ..state.left_score.clone()
        },
        right_score: ScoreBody {
            score: right_score,
            ..state.right_score.clone()
        },
        running: left_score < config.winning_score && right_score < config.winning_score,
        blocks,
        requests,
        ..state.clone()
    }
}

/// AI paddle: one fixed step toward the ball's height, never clamped
fn track_ball(paddle: &PaddleBody, ball: &BallBody, config: &Config) -> PaddleBody {
    let y = if ball.center.y < paddle.center_y() {
        paddle.pos.y - config.ai_speed
    } else {
        paddle.pos.y + config.ai_speed
    };
    PaddleBody {
        pos: DVec2::new(paddle.pos.x, y),
        ..paddle.clone()
    }
}
