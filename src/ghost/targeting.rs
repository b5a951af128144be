//! The four ghost personalities, expressed as target tiles.

use glam::IVec2;

use crate::ghost::GhostType;
use crate::map::direction::Direction;
use crate::pacman::PacmanSnapshot;

/// Clyde chases only while further than this many tiles from Pac-Man.
pub const CLYDE_SHY_DISTANCE: i32 = 8;

/// The corner each ghost retreats to while scattering. Two of them lie off the board.
pub const fn scatter_corner(ghost_type: GhostType) -> IVec2 {
    match ghost_type {
        GhostType::Blinky => IVec2::new(25, -3),
        GhostType::Pinky => IVec2::new(2, -3),
        GhostType::Inky => IVec2::new(27, 31),
        GhostType::Clyde => IVec2::new(0, 31),
    }
}

/// The tile `distance` tiles in front of Pac-Man.
///
/// Facing up also shifts the tile `distance` tiles to the left. This reproduces the
/// arcade's overflow bug and is kept on purpose; targeting depends on it.
pub fn tile_ahead(pacman: &PacmanSnapshot, distance: i32) -> IVec2 {
    let mut ahead = pacman.tile + pacman.facing.as_ivec2() * distance;
    if pacman.facing == Direction::Up {
        ahead.x -= distance;
    }
    ahead
}

/// The chase-mode target of a ghost.
///
/// Inky needs Blinky's tile, which is passed in rather than looked up.
pub fn chase(ghost_type: GhostType, ghost_tile: IVec2, pacman: &PacmanSnapshot, blinky_tile: IVec2) -> IVec2 {
    match ghost_type {
        GhostType::Blinky => pacman.tile,
        GhostType::Pinky => tile_ahead(pacman, 4),
        GhostType::Inky => tile_ahead(pacman, 2) * 2 - blinky_tile,
        GhostType::Clyde => {
            if (ghost_tile - pacman.tile).length_squared() > CLYDE_SHY_DISTANCE * CLYDE_SHY_DISTANCE {
                pacman.tile
            } else {
                scatter_corner(GhostType::Clyde)
            }
        }
    }
}
