//! Game state and body snapshots
//!
//! Every reduction produces a fresh `GameState`; nothing here is mutated in place
//! once it has been handed to the projector.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Opaque reference to a visual element owned by the rendering projector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VisualHandle(pub u64);

/// Handles for the fixed bodies, supplied by the host at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyHandles {
    pub left_paddle: VisualHandle,
    pub right_paddle: VisualHandle,
    pub ball: VisualHandle,
    pub left_score: VisualHandle,
    pub right_score: VisualHandle,
    pub center_text: VisualHandle,
}

impl BodyHandles {
    /// Handles numbered 1..=6 in field order
    pub fn sequential() -> Self {
        Self {
            left_paddle: VisualHandle(1),
            right_paddle: VisualHandle(2),
            ball: VisualHandle(3),
            left_score: VisualHandle(4),
            right_score: VisualHandle(5),
            center_text: VisualHandle(6),
        }
    }

    fn all(&self) -> [VisualHandle; 6] {
        [
            self.left_paddle,
            self.right_paddle,
            self.ball,
            self.left_score,
            self.right_score,
            self.center_text,
        ]
    }

    /// First handle value free for blocks
    fn first_free(&self) -> u64 {
        self.all().iter().map(|h| h.0).max().unwrap_or(0) + 1
    }
}

/// A player or AI paddle (`pos` is the top-left corner)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaddleBody {
    pub handle: VisualHandle,
    pub pos: DVec2,
    pub size: DVec2,
    pub fill: String,
}

impl PaddleBody {
    /// Vertical center of the paddle
    #[inline]
    pub fn center_y(&self) -> f64 {
        self.pos.y + self.size.y / 2.0
    }
}

/// The ball; `velocity` is applied once per tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallBody {
    pub handle: VisualHandle,
    pub center: DVec2,
    pub radius: f64,
    pub fill: String,
    pub velocity: DVec2,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBody {
    pub handle: VisualHandle,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBody {
    pub handle: VisualHandle,
    pub text: String,
    pub style: String,
    pub fill: String,
}

/// A breakout obstacle (`pos` is the top-left corner)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockBody {
    pub handle: VisualHandle,
    pub pos: DVec2,
    pub size: DVec2,
    pub fill: String,
}

/// Visual element lifecycle requests addressed to the projector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SurfaceRequest {
    CreateBlock {
        handle: VisualHandle,
        pos: DVec2,
        size: DVec2,
        fill: String,
    },
    RemoveBlock {
        handle: VisualHandle,
    },
}

/// Left or right player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// Current phase of the game, derived from the `started`/`running` flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the first click
    NotStarted,
    /// Physics advancing every step
    Running,
    /// A player reached the winning score; waiting for a restart click
    Ended,
}

pub const START_TEXT: &str = "Click here to Start Game";
pub const START_TEXT_STYLE: &str = "font-size:40px";
pub const LEFT_WINS_TEXT: &str = "Left Player Wins! Restart?";
pub const RIGHT_WINS_TEXT: &str = "Right Player Wins! Restart?";

/// Complete game snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub left_paddle: PaddleBody,
    pub right_paddle: PaddleBody,
    pub ball: BallBody,
    pub left_score: ScoreBody,
    pub right_score: ScoreBody,
    pub center_text: TextBody,
    /// Live blocks, in spawn order
    pub blocks: Vec<BlockBody>,
    /// A click has started the first game
    pub started: bool,
    /// Neither player has reached the winning score
    pub running: bool,
    /// Surface requests issued by the step that produced this snapshot
    pub requests: Vec<SurfaceRequest>,
    /// Next handle value assigned to a spawned block
    pub next_handle: u64,
}

impl GameState {
    /// Create the startup state
    pub fn new(config: &Config, handles: BodyHandles) -> Self {
        let paddle = |handle, x| PaddleBody {
            handle,
            pos: DVec2::new(x, config.paddle_start_y),
            size: config.paddle_size(),
            fill: config.default_color.clone(),
        };

        Self {
            left_paddle: paddle(handles.left_paddle, config.left_paddle_x()),
            right_paddle: paddle(handles.right_paddle, config.right_paddle_x()),
            ball: BallBody {
                handle: handles.ball,
                center: config.canvas_center(),
                radius: config.ball_radius,
                fill: config.default_color.clone(),
                // Kickoff heads toward the player
                velocity: DVec2::new(-config.serve_speed, 0.0),
            },
            left_score: ScoreBody {
                handle: handles.left_score,
                score: 0,
            },
            right_score: ScoreBody {
                handle: handles.right_score,
                score: 0,
            },
            center_text: TextBody {
                handle: handles.center_text,
                text: START_TEXT.to_string(),
                style: START_TEXT_STYLE.to_string(),
                fill: config.default_color.clone(),
            },
            blocks: Vec::new(),
            started: false,
            running: false,
            requests: Vec::new(),
            next_handle: handles.first_free(),
        }
    }

    /// The state a start/restart click produces: fresh bodies and scores, live
    /// blocks kept, center message cleared
    pub fn restarted(&self, config: &Config) -> Self {
        let fresh = Self::new(config, self.handles());
        Self {
            blocks: self.blocks.clone(),
            started: true,
            running: true,
            center_text: TextBody {
                text: String::new(),
                ..self.center_text.clone()
            },
            next_handle: self.next_handle,
            ..fresh
        }
    }

    /// Handles of the fixed bodies
    pub fn handles(&self) -> BodyHandles {
        BodyHandles {
            left_paddle: self.left_paddle.handle,
            right_paddle: self.right_paddle.handle,
            ball: self.ball.handle,
            left_score: self.left_score.handle,
            right_score: self.right_score.handle,
            center_text: self.center_text.handle,
        }
    }

    pub fn phase(&self) -> Phase {
        match (self.started, self.running) {
            (false, _) => Phase::NotStarted,
            (true, true) => Phase::Running,
            (true, false) => Phase::Ended,
        }
    }

    /// The side that reached the winning score, if any
    pub fn winner(&self, config: &Config) -> Option<Side> {
        if self.left_score.score >= config.winning_score {
            Some(Side::Left)
        } else if self.right_score.score >= config.winning_score {
            Some(Side::Right)
        } else {
            None
        }
    }

    /// Copy of this state with the previous step's surface requests dropped
    pub(crate) fn without_requests(&self) -> Self {
        Self {
            requests: Vec::new(),
            ..self.clone()
        }
    }
}
