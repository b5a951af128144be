//! The read-only maze queries ghosts are steered by.

use glam::{IVec2, Vec2};
use smallvec::SmallVec;

use crate::constants::{BOARD_PIXEL_SIZE, CELL_SIZE};
use crate::map::direction::Direction;

/// The open directions out of an intersection tile, in [`Direction::DECISION_ORDER`].
pub type Turns = SmallVec<[Direction; 4]>;

/// Tile classification and tile/pixel conversion for a static maze.
///
/// Implementations are pure lookups; nothing in the ghost simulation mutates a grid.
/// The conversions have default implementations based on [`CELL_SIZE`].
pub trait Grid {
    /// Whether free movement is blocked by this tile.
    fn is_wall(&self, tile: IVec2) -> bool;

    /// Whether a ghost arriving at this tile has to make a decision.
    fn is_intersection(&self, tile: IVec2) -> bool;

    /// Whether ghosts are slowed down on this tile.
    fn is_tunnel(&self, tile: IVec2) -> bool;

    /// The open directions at an intersection.
    ///
    /// Non-intersection tiles return an empty set; callers hold their direction in that case.
    fn turns_available_at(&self, tile: IVec2) -> Turns;

    /// The pixel center of a tile.
    fn tile_center_pixel(&self, tile: IVec2) -> Vec2 {
        (tile * CELL_SIZE as i32).as_vec2() + Vec2::splat(CELL_SIZE as f32 / 2.0)
    }

    /// The tile containing a pixel position.
    fn pixel_to_tile(&self, pixel: Vec2) -> IVec2 {
        (pixel / CELL_SIZE as f32).floor().as_ivec2()
    }

    /// Folds an x coordinate that left the board through a tunnel back onto it.
    fn wrap_tunnel_x(&self, x: f32) -> f32 {
        x.rem_euclid(BOARD_PIXEL_SIZE.x as f32)
    }
}
