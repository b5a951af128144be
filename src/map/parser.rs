//! Map parsing functionality for converting raw board layouts into structured data.

use crate::constants::{MapTile, BOARD_CELL_SIZE};
use crate::error::ParseError;
use glam::IVec2;

/// Represents the parsed data from a raw board layout.
#[derive(Debug)]
pub struct ParsedMap {
    /// The parsed tile layout, indexed `[x][y]`.
    pub tiles: [[MapTile; BOARD_CELL_SIZE.y as usize]; BOARD_CELL_SIZE.x as usize],
    /// The positions of the pen door tiles.
    pub door: [IVec2; 2],
    /// Pac-Man's starting position.
    pub pacman_start: Option<IVec2>,
}

/// Parser for converting raw board layouts into structured map data.
pub struct MapTileParser;

impl MapTileParser {
    /// Parses a single character into a map tile.
    pub fn parse_character(c: char) -> Result<MapTile, ParseError> {
        match c {
            '#' => Ok(MapTile::Wall),
            '.' => Ok(MapTile::Pellet),
            'o' => Ok(MapTile::PowerPellet),
            ' ' => Ok(MapTile::Empty),
            'T' => Ok(MapTile::Tunnel),
            'X' => Ok(MapTile::Empty), // Pac-Man's starting position, treated as empty
            '-' => Ok(MapTile::Door),
            'H' => Ok(MapTile::House),
            _ => Err(ParseError::UnknownCharacter(c)),
        }
    }

    /// Parses a raw board layout into structured map data.
    ///
    /// # Errors
    ///
    /// Returns an error if a row has the wrong width, if the board contains unknown
    /// characters, or if the pen door is not exactly two '-' characters.
    pub fn parse_board(raw_board: [&str; BOARD_CELL_SIZE.y as usize]) -> Result<ParsedMap, ParseError> {
        let mut tiles = [[MapTile::Empty; BOARD_CELL_SIZE.y as usize]; BOARD_CELL_SIZE.x as usize];
        let mut door = Vec::with_capacity(2);
        let mut pacman_start: Option<IVec2> = None;

        for (y, line) in raw_board.iter().enumerate() {
            let width = line.chars().count();
            if width != BOARD_CELL_SIZE.x as usize {
                return Err(ParseError::InvalidRowWidth {
                    row: y,
                    found: width,
                    expected: BOARD_CELL_SIZE.x as usize,
                });
            }

            for (x, character) in line.chars().enumerate() {
                let tile = Self::parse_character(character)?;
                let position = IVec2::new(x as i32, y as i32);

                if tile == MapTile::Door {
                    door.push(position);
                }
                if character == 'X' {
                    pacman_start = Some(position);
                }

                tiles[x][y] = tile;
            }
        }

        let door: [IVec2; 2] = door
            .as_slice()
            .try_into()
            .map_err(|_| ParseError::InvalidDoorCount(door.len()))?;

        Ok(ParsedMap {
            tiles,
            door,
            pacman_start,
        })
    }
}
