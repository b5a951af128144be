//! Maze construction: tile storage plus the per-intersection turn table.

use std::collections::HashMap;

use glam::IVec2;
use pathfinding::prelude::bfs_reach;
use tracing::debug;

use crate::constants::{MapTile, BOARD_CELL_SIZE, RAW_BOARD};
use crate::error::{GameResult, MapError};
use crate::map::direction::Direction;
use crate::map::grid::{Grid, Turns};
use crate::map::parser::MapTileParser;

type Tiles = [[MapTile; BOARD_CELL_SIZE.y as usize]; BOARD_CELL_SIZE.x as usize];

/// The static maze: tiles and the turn table authored from them.
#[derive(Debug)]
pub struct Maze {
    /// The raw tile data for the map, indexed `[x][y]`.
    tiles: Tiles,
    /// Open directions for every tile where a ghost has to decide.
    turns: HashMap<IVec2, Turns>,
    /// Pac-Man's starting tile.
    pub pacman_start: IVec2,
    /// The two pen door tiles.
    pub door: [IVec2; 2],
}

impl Maze {
    /// Creates a new `Maze` from a raw board layout.
    ///
    /// Fails if the board does not parse, has no Pac-Man start, or if any walkable
    /// tile is unreachable from the start (tunnels included).
    pub fn new(raw_board: [&str; BOARD_CELL_SIZE.y as usize]) -> GameResult<Maze> {
        let parsed = MapTileParser::parse_board(raw_board)?;
        let pacman_start = parsed.pacman_start.ok_or(MapError::MissingStart)?;
        let tiles = parsed.tiles;

        let walkable = Self::positions(&tiles).filter(|&(_, tile)| !tile.is_solid()).count();
        let reached = bfs_reach(pacman_start, |&position| {
            Direction::DIRECTIONS
                .into_iter()
                .filter_map(|dir| Self::step(&tiles, position, dir))
                .collect::<Vec<_>>()
        })
        .count();
        if reached != walkable {
            return Err(MapError::Disconnected {
                unreachable: walkable - reached,
            }
            .into());
        }

        let mut turns = HashMap::new();
        for (position, tile) in Self::positions(&tiles) {
            if tile.is_solid() {
                continue;
            }

            let open: Turns = Direction::DECISION_ORDER
                .into_iter()
                .filter(|&dir| Self::step(&tiles, position, dir).is_some())
                .collect();

            let straight = open.len() == 2 && open[0].opposite() == open[1];
            if !straight {
                turns.insert(position, open);
            }
        }

        debug!(intersections = turns.len(), walkable, "Maze built");

        Ok(Maze {
            tiles,
            turns,
            pacman_start,
            door: parsed.door,
        })
    }

    /// Builds the classic arcade maze.
    pub fn classic() -> GameResult<Maze> {
        Self::new(RAW_BOARD)
    }

    /// Returns the tile at the given cell coordinates, if on the board.
    pub fn tile(&self, cell: IVec2) -> Option<MapTile> {
        Self::get(&self.tiles, cell)
    }

    /// The number of pellets (power pellets included) on a fresh board.
    pub fn pellet_count(&self) -> usize {
        self.pellets().count()
    }

    /// Every pellet and power pellet on the board.
    pub fn pellets(&self) -> impl Iterator<Item = (IVec2, MapTile)> + '_ {
        Self::positions(&self.tiles).filter(|(_, tile)| matches!(tile, MapTile::Pellet | MapTile::PowerPellet))
    }

    fn positions(tiles: &Tiles) -> impl Iterator<Item = (IVec2, MapTile)> + '_ {
        tiles.iter().enumerate().flat_map(|(x, column)| {
            column
                .iter()
                .enumerate()
                .map(move |(y, &tile)| (IVec2::new(x as i32, y as i32), tile))
        })
    }

    fn get(tiles: &Tiles, cell: IVec2) -> Option<MapTile> {
        if cell.x < 0 || cell.y < 0 || cell.x >= BOARD_CELL_SIZE.x as i32 || cell.y >= BOARD_CELL_SIZE.y as i32 {
            return None;
        }
        Some(tiles[cell.x as usize][cell.y as usize])
    }

    /// The walkable neighbour in a direction, wrapping horizontally through tunnels.
    fn step(tiles: &Tiles, from: IVec2, dir: Direction) -> Option<IVec2> {
        let mut next = from + dir.as_ivec2();
        next.x = next.x.rem_euclid(BOARD_CELL_SIZE.x as i32);
        Self::get(tiles, next).filter(|tile| !tile.is_solid()).map(|_| next)
    }
}

impl Grid for Maze {
    fn is_wall(&self, tile: IVec2) -> bool {
        self.tile(tile).is_none_or(MapTile::is_solid)
    }

    fn is_intersection(&self, tile: IVec2) -> bool {
        self.turns.contains_key(&tile)
    }

    fn is_tunnel(&self, tile: IVec2) -> bool {
        self.tile(tile) == Some(MapTile::Tunnel)
    }

    fn turns_available_at(&self, tile: IVec2) -> Turns {
        self.turns.get(&tile).cloned().unwrap_or_default()
    }
}
