//! This module contains all the constants used by the ghost simulation.

use std::time::Duration;

use glam::{IVec2, UVec2, Vec2};

/// The length of one frame at the reference frame rate (60 Hz).
pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// Frames implying a speed multiplier above this are dropped instead of simulated.
pub const MAX_FRAME_SPEED: f32 = 5.0;

/// The size of each cell, in pixels.
pub const CELL_SIZE: u32 = 8;
/// The size of the game board, in cells.
pub const BOARD_CELL_SIZE: UVec2 = UVec2::new(28, 31);
/// The size of the game board, in pixels.
pub const BOARD_PIXEL_SIZE: UVec2 = UVec2::new(BOARD_CELL_SIZE.x * CELL_SIZE, BOARD_CELL_SIZE.y * CELL_SIZE);

/// Distance covered in one reference frame at 100% speed, in pixels.
pub const FULL_SPEED: f32 = 1.25;

/// Largest distance a single movement sub-step may cover, in pixels.
///
/// Keeping this under half a tile guarantees no tile center is skipped.
pub const MAX_STEP: f32 = CELL_SIZE as f32 / 2.0;

/// How long each blue/white phase lasts once a frightened period starts blinking.
pub const BLINK_DURATION: Duration = Duration::from_millis(250);

/// The tile eaten ghosts steer towards; reaching it starts the pen entry script.
pub const EYES_TARGET: IVec2 = IVec2::new(13, 11);

/// X coordinate of the pen door (the seam between columns 13 and 14), in pixels.
pub const PEN_DOOR_X: f32 = 112.0;
/// Y coordinate of the corridor just above the pen door, in pixels.
pub const PEN_EXIT_Y: f32 = 92.0;
/// Y coordinate of the pen's resting row, in pixels.
pub const PEN_CENTER_Y: f32 = 116.0;
/// Upper and lower turning points of the waiting bounce inside the pen.
pub const PEN_BOUNCE_TOP: f32 = 112.0;
pub const PEN_BOUNCE_BOTTOM: f32 = 120.0;
/// Resting columns of the side slots, in pixels.
pub const PEN_LEFT_X: f32 = 96.0;
pub const PEN_RIGHT_X: f32 = 128.0;

/// Blinky's starting point, sitting on the corridor above the door.
pub const BLINKY_START: Vec2 = Vec2::new(PEN_DOOR_X, PEN_EXIT_Y);

/// An enum representing the different types of tiles on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapTile {
    /// An empty, walkable tile.
    Empty,
    /// A wall tile.
    Wall,
    /// A regular pellet.
    Pellet,
    /// A power pellet.
    PowerPellet,
    /// A walkable tile where ghosts slow down.
    Tunnel,
    /// The pen door; ghosts only pass it on a scripted path.
    Door,
    /// The pen interior; never part of free movement.
    House,
}

impl MapTile {
    /// Whether free-roaming movement treats this tile as solid.
    pub const fn is_solid(self) -> bool {
        matches!(self, MapTile::Wall | MapTile::Door | MapTile::House)
    }
}

/// The raw layout of the game board, as a 2D array of characters.
pub const RAW_BOARD: [&str; BOARD_CELL_SIZE.y as usize] = [
    "############################",
    "#............##............#",
    "#.####.#####.##.#####.####.#",
    "#o####.#####.##.#####.####o#",
    "#.####.#####.##.#####.####.#",
    "#..........................#",
    "#.####.##.########.##.####.#",
    "#.####.##.########.##.####.#",
    "#......##....##....##......#",
    "######.##### ## #####.######",
    "######.##### ## #####.######",
    "######.##          ##.######",
    "######.## ###--### ##.######",
    "######.## #HHHHHH# ##.######",
    "TTTTTT.   #HHHHHH#   .TTTTTT",
    "######.## #HHHHHH# ##.######",
    "######.## ######## ##.######",
    "######.##          ##.######",
    "######.## ######## ##.######",
    "######.## ######## ##.######",
    "#............##............#",
    "#.####.#####.##.#####.####.#",
    "#.####.#####.##.#####.####.#",
    "#o..##.......X .......##..o#",
    "###.##.##.########.##.##.###",
    "###.##.##.########.##.##.###",
    "#......##....##....##......#",
    "#.##########.##.##########.#",
    "#.##########.##.##########.#",
    "#..........................#",
    "############################",
];
