//! Breakout block manager
//!
//! The grid is generated once per game on the AI's half of the canvas. A block
//! struck by the ball is dropped for good; the projector learns about both
//! through `SurfaceRequest`s.

use super::collision::block_hit;
use super::state::{BallBody, BlockBody, SurfaceRequest, VisualHandle};
use crate::config::Config;

/// Blocks produced by a spawn, with the creation requests for their visuals
#[derive(Debug, Clone)]
pub struct Spawned {
    pub blocks: Vec<BlockBody>,
    pub requests: Vec<SurfaceRequest>,
    pub next_handle: u64,
}

/// Append a full grid to `existing`, column by column
pub fn spawn_blocks(existing: &[BlockBody], config: &Config, next_handle: u64) -> Spawned {
    let grid = &config.blocks;
    let fresh: Vec<BlockBody> = (0..grid.columns)
        .flat_map(|column| (0..grid.rows).map(move |row| (column, row)))
        .zip(next_handle..)
        .map(|((column, row), handle)| BlockBody {
            handle: VisualHandle(handle),
            pos: grid.cell(column, row),
            size: grid.block_size(),
            fill: config.default_color.clone(),
        })
        .collect();

    let requests = fresh
        .iter()
        .map(|block| SurfaceRequest::CreateBlock {
            handle: block.handle,
            pos: block.pos,
            size: block.size,
            fill: block.fill.clone(),
        })
        .collect();

    let next_handle = next_handle + fresh.len() as u64;
    log::info!("Spawned {} blocks", fresh.len());

    Spawned {
        blocks: existing.iter().cloned().chain(fresh).collect(),
        requests,
        next_handle,
    }
}

/// Split `blocks` into those the ball misses and removal requests for those it hits
pub fn strike_blocks(
    blocks: &[BlockBody],
    ball: &BallBody,
) -> (Vec<BlockBody>, Vec<SurfaceRequest>) {
    let (struck, remaining): (Vec<&BlockBody>, Vec<&BlockBody>) =
        blocks.iter().partition(|block| block_hit(block, ball));

    let requests = struck
        .iter()
        .map(|block| {
            log::debug!("Block {:?} struck at {:?}", block.handle, ball.center);
            SurfaceRequest::RemoveBlock {
                handle: block.handle,
            }
        })
        .collect();

    (remaining.into_iter().cloned().collect(), requests)
}
