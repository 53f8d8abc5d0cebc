//! Input adapter
//!
//! Turns raw pointer/keyboard/click events into `Action`s, filtering out
//! anything the simulation should never see (out-of-range pointer positions,
//! key repeats).

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::sim::Action;

/// A raw event from the host environment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawInput {
    /// Pointer moved over the canvas (canvas coordinates)
    PointerMove { x: f64, y: f64 },
    KeyDown { key: String, repeat: bool },
    KeyUp { key: String },
    /// Click on the center message
    CenterTextClick,
}

/// Maps raw events to actions using the configured paddle geometry and key bindings
#[derive(Debug, Clone)]
pub struct InputAdapter {
    paddle_x: f64,
    paddle_width: f64,
    paddle_height: f64,
    canvas_height: f64,
    default_color: String,
    highlight_color: String,
    enlarge: String,
    assist: String,
    spawn_blocks: String,
}

impl InputAdapter {
    pub fn new(config: &Config) -> Self {
        Self {
            paddle_x: config.left_paddle_x(),
            paddle_width: config.paddle_width,
            paddle_height: config.paddle_height,
            canvas_height: config.canvas_height,
            default_color: config.default_color.clone(),
            highlight_color: config.highlight_color.clone(),
            enlarge: config.keys.enlarge.to_lowercase(),
            assist: config.keys.assist.to_lowercase(),
            spawn_blocks: config.keys.spawn_blocks.to_lowercase(),
        }
    }

    /// Translate one raw event; `None` means the event is dropped
    pub fn translate(&self, input: &RawInput) -> Option<Action> {
        match input {
            RawInput::PointerMove { y, .. } => {
                // Guard uses the resting paddle height, so an enlarged paddle can overhang
                let half = self.paddle_height / 2.0;
                (*y >= half && *y <= self.canvas_height - half).then(|| Action::Move {
                    x: self.paddle_x,
                    y: *y,
                })
            }
            RawInput::KeyDown { repeat: true, .. } => None,
            RawInput::KeyDown { key, .. } => {
                let key = key.to_lowercase();
                if key == self.enlarge {
                    Some(Action::Resize {
                        width: self.paddle_width,
                        height: self.paddle_height * 2.0,
                    })
                } else if key == self.assist {
                    Some(Action::Pull {
                        color: self.highlight_color.clone(),
                    })
                } else if key == self.spawn_blocks {
                    Some(Action::SpawnBlocks)
                } else {
                    None
                }
            }
            RawInput::KeyUp { key } => {
                let key = key.to_lowercase();
                if key == self.enlarge {
                    Some(Action::Resize {
                        width: self.paddle_width,
                        height: self.paddle_height,
                    })
                } else if key == self.assist {
                    Some(Action::Highlight {
                        color: self.default_color.clone(),
                    })
                } else {
                    None
                }
            }
            RawInput::CenterTextClick => Some(Action::Click),
        }
    }
}
