#![allow(dead_code)]

use std::collections::{HashMap, HashSet};

use glam::{IVec2, Vec2};
use pacman_ghosts::ghost::{Ghost, GhostType};
use pacman_ghosts::level::{Level, LevelTable};
use pacman_ghosts::map::direction::Direction;
use pacman_ghosts::map::grid::{Grid, Turns};
use pacman_ghosts::pacman::PacmanSnapshot;

/// An open field with hand-placed intersections, walls and tunnel tiles.
#[derive(Default)]
pub struct StubGrid {
    pub turns: HashMap<IVec2, Turns>,
    pub walls: HashSet<IVec2>,
    pub tunnels: HashSet<IVec2>,
}

impl StubGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_turns(mut self, x: i32, y: i32, directions: &[Direction]) -> Self {
        self.turns.insert(IVec2::new(x, y), directions.iter().copied().collect());
        self
    }

    pub fn with_tunnel(mut self, x: i32, y: i32) -> Self {
        self.tunnels.insert(IVec2::new(x, y));
        self
    }
}

impl Grid for StubGrid {
    fn is_wall(&self, tile: IVec2) -> bool {
        self.walls.contains(&tile)
    }

    fn is_intersection(&self, tile: IVec2) -> bool {
        self.turns.contains_key(&tile)
    }

    fn is_tunnel(&self, tile: IVec2) -> bool {
        self.tunnels.contains(&tile)
    }

    fn turns_available_at(&self, tile: IVec2) -> Turns {
        self.turns.get(&tile).cloned().unwrap_or_default()
    }
}

/// Records every score event, in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub kills: Vec<(u32, IVec2)>,
    pub deaths: u32,
}

impl pacman_ghosts::events::ScoreSink for RecordingSink {
    fn on_kill(&mut self, streak: u32, tile: IVec2) {
        self.kills.push((streak, tile));
    }

    fn on_die(&mut self) {
        self.deaths += 1;
    }
}

pub fn level(round: u32) -> Level {
    LevelTable::classic().get(round).unwrap()
}

pub fn pacman(x: i32, y: i32, facing: Direction) -> PacmanSnapshot {
    PacmanSnapshot::at_tile(IVec2::new(x, y), facing)
}

/// The pixel center of a tile.
pub fn center(x: i32, y: i32) -> Vec2 {
    Vec2::new(x as f32 * 8.0 + 4.0, y as f32 * 8.0 + 4.0)
}

/// Blinky (the only ghost that starts outside the pen) placed free on the center of a tile.
pub fn free_ghost<G: Grid>(grid: &G, x: i32, y: i32, direction: Direction) -> Ghost {
    let mut ghost = Ghost::new(GhostType::Blinky, level(1), grid);
    ghost.position = center(x, y);
    ghost.tile = IVec2::new(x, y);
    ghost.direction = direction;
    ghost
}
