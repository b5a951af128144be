//! The read-only view of Pac-Man that ghosts steer by.

use glam::{IVec2, Vec2};

use crate::constants::CELL_SIZE;
use crate::map::direction::Direction;

/// Pac-Man's position and heading for one tick.
///
/// Pac-Man's own movement lives outside the ghost simulation; ghosts only ever read this.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PacmanSnapshot {
    pub tile: IVec2,
    pub pixel: Vec2,
    pub facing: Direction,
}

impl PacmanSnapshot {
    pub fn new(tile: IVec2, pixel: Vec2, facing: Direction) -> Self {
        Self { tile, pixel, facing }
    }

    /// A snapshot sitting exactly on the center of `tile`.
    pub fn at_tile(tile: IVec2, facing: Direction) -> Self {
        let pixel = (tile * CELL_SIZE as i32).as_vec2() + Vec2::splat(CELL_SIZE as f32 / 2.0);
        Self { tile, pixel, facing }
    }
}
