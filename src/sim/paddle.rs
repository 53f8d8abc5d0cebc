//! Player paddle sub-reducer (movement and power-ups)

use glam::DVec2;

use super::action::Action;
use super::state::PaddleBody;

/// Apply one action to a paddle. Actions that do not concern paddles pass through.
pub fn reduce_paddle(paddle: &PaddleBody, action: &Action) -> PaddleBody {
    match action {
        // Center the paddle on the pointer
        Action::Move { x, y } => PaddleBody {
            pos: DVec2::new(*x, *y - paddle.size.y / 2.0),
            ..paddle.clone()
        },
        Action::Resize { width, height } => PaddleBody {
            size: DVec2::new(*width, *height),
            ..paddle.clone()
        },
        Action::Highlight { color } => PaddleBody {
            fill: color.clone(),
            ..paddle.clone()
        },
        Action::Pull { .. } | Action::Click | Action::SpawnBlocks => paddle.clone(),
    }
}
