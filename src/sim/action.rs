//! Actions consumed by the reducer
//!
//! One action (or a bare tick) is folded into the state per reduction step.

use serde::{Deserialize, Serialize};

/// A single typed user action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Move the player's paddle so it is centered on `y` at column `x`
    Move { x: f64, y: f64 },
    /// Replace the player's paddle size
    Resize { width: f64, height: f64 },
    /// Replace the player's paddle color
    Highlight { color: String },
    /// Assist power-up: highlight the player's paddle and pull the AI paddle level with it
    Pull { color: String },
    /// Start or restart the game
    Click,
    /// Drop the breakout block grid on the AI's half
    SpawnBlocks,
}

/// One item of the merged stream: a timing tick or a user action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    Tick,
    Action(Action),
}

impl Event {
    pub fn action(&self) -> Option<&Action> {
        match self {
            Event::Tick => None,
            Event::Action(action) => Some(action),
        }
    }
}

impl From<Action> for Event {
    fn from(action: Action) -> Self {
        Event::Action(action)
    }
}
