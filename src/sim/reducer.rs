//! Top-level state reducer
//!
//! Folds one event into the game: owns the start / running / ended phases and
//! dispatches actions to the paddle, block and physics steps.

use super::action::{Action, Event};
use super::blocks::spawn_blocks;
use super::paddle::reduce_paddle;
use super::state::{
    GameState, LEFT_WINS_TEXT, PaddleBody, Phase, RIGHT_WINS_TEXT, Side, TextBody,
};
use super::tick::step;
use crate::config::Config;

/// Reduce one stream item into the next snapshot
pub fn reduce_event(state: &GameState, event: &Event, config: &Config) -> GameState {
    reduce(state, event.action(), config)
}

/// Reduce one action (`None` is a bare tick) into the next snapshot
pub fn reduce(state: &GameState, action: Option<&Action>, config: &Config) -> GameState {
    let state = state.without_requests();

    // A click restarts before anything else, including the winner message
    if matches!(action, Some(Action::Click)) && state.phase() != Phase::Running {
        log::info!(
            "{} game (blocks kept: {})",
            if state.started { "Restarting" } else { "Starting" },
            state.blocks.len()
        );
        return state.restarted(config);
    }

    match state.phase() {
        Phase::NotStarted => state,
        Phase::Ended => announce_winner(state, config),
        Phase::Running => match action {
            Some(Action::Pull { color }) => {
                let pulled = GameState {
                    left_paddle: PaddleBody {
                        fill: color.clone(),
                        ..state.left_paddle.clone()
                    },
                    right_paddle: PaddleBody {
                        pos: state.right_paddle.pos.with_y(state.left_paddle.pos.y),
                        ..state.right_paddle.clone()
                    },
                    ..state
                };
                finish_step(&pulled, config)
            }
            Some(Action::SpawnBlocks) => {
                if !state.blocks.is_empty() {
                    log::debug!("Blocks already on the field, ignoring spawn");
                    return state;
                }
                let spawned = spawn_blocks(&state.blocks, config, state.next_handle);
                GameState {
                    blocks: spawned.blocks,
                    requests: spawned.requests,
                    next_handle: spawned.next_handle,
                    ..state
                }
            }
            Some(action) => {
                let moved = GameState {
                    left_paddle: reduce_paddle(&state.left_paddle, action),
                    ..state
                };
                finish_step(&moved, config)
            }
            None => finish_step(&state, config),
        },
    }
}

/// Run physics and log the end of the game when it happens
fn finish_step(state: &GameState, config: &Config) -> GameState {
    let next = step(state, config);
    if state.running && !next.running {
        log::info!(
            "Game over: {} - {}",
            next.left_score.score,
            next.right_score.score
        );
    }
    next
}

/// Hold the ended game, rewriting the center message for the winner
fn announce_winner(state: GameState, config: &Config) -> GameState {
    let text = match state.winner(config) {
        Some(Side::Left) => LEFT_WINS_TEXT,
        _ => RIGHT_WINS_TEXT,
    };
    GameState {
        center_text: TextBody {
            text: text.to_string(),
            ..state.center_text.clone()
        },
        ..state
    }
}
