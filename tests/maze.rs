use glam::{IVec2, Vec2};
use pacman_ghosts::constants::{MapTile, BOARD_CELL_SIZE, RAW_BOARD};
use pacman_ghosts::error::{GameError, MapError, ParseError};
use pacman_ghosts::map::builder::Maze;
use pacman_ghosts::map::direction::Direction;
use pacman_ghosts::map::grid::Grid;
use pacman_ghosts::map::parser::MapTileParser;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

fn every_tile() -> impl Iterator<Item = IVec2> {
    (0..BOARD_CELL_SIZE.x as i32).flat_map(|x| (0..BOARD_CELL_SIZE.y as i32).map(move |y| IVec2::new(x, y)))
}

#[test]
fn test_tile_pixel_round_trip() {
    let maze = Maze::classic().unwrap();
    for tile in every_tile() {
        assert_eq!(maze.pixel_to_tile(maze.tile_center_pixel(tile)), tile);
    }
    assert_eq!(maze.tile_center_pixel(IVec2::new(13, 11)), Vec2::new(108.0, 92.0));
}

#[test]
fn test_pixel_to_tile_floors() {
    let maze = Maze::classic().unwrap();
    assert_eq!(maze.pixel_to_tile(Vec2::new(7.99, 8.0)), IVec2::new(0, 1));
    assert_eq!(maze.pixel_to_tile(Vec2::new(-0.5, 0.0)), IVec2::new(-1, 0));
}

#[test]
fn test_tunnel_wrap() {
    let maze = Maze::classic().unwrap();
    assert_eq!(maze.wrap_tunnel_x(-4.0), 220.0);
    assert_eq!(maze.wrap_tunnel_x(226.0), 2.0);
    assert_eq!(maze.wrap_tunnel_x(100.0), 100.0);
}

#[test]
fn test_classic_maze() {
    let maze = Maze::classic().unwrap();
    assert_eq!(maze.pellet_count(), 244);
    assert_eq!(maze.pacman_start, IVec2::new(13, 23));
    assert_eq!(maze.door, [IVec2::new(13, 12), IVec2::new(14, 12)]);
    assert_eq!(
        maze.pellets().filter(|&(_, tile)| tile == MapTile::PowerPellet).count(),
        4
    );

    assert!(maze.is_tunnel(IVec2::new(0, 14)));
    assert!(maze.is_tunnel(IVec2::new(27, 14)));
    assert!(!maze.is_tunnel(IVec2::new(6, 14)));
}

#[test]
fn test_intersections_have_turns_in_decision_order() {
    let maze = Maze::classic().unwrap();

    for tile in every_tile() {
        let turns = maze.turns_available_at(tile);
        if maze.is_wall(tile) {
            assert!(!maze.is_intersection(tile), "{tile} is a wall");
            continue;
        }

        if maze.is_intersection(tile) {
            assert_that(&turns.len()).is_greater_than_or_equal_to(2);
            let order: Vec<usize> = turns
                .iter()
                .map(|dir| Direction::DECISION_ORDER.iter().position(|d| d == dir).unwrap())
                .collect();
            assert!(order.windows(2).all(|pair| pair[0] < pair[1]), "{tile}: {turns:?}");
        } else {
            // Straight corridor: no decision, no turns.
            assert!(turns.is_empty());
        }
    }

    let junction = maze.turns_available_at(IVec2::new(6, 5));
    assert_eq!(
        junction.as_slice(),
        &[Direction::Up, Direction::Left, Direction::Down, Direction::Right]
    );
    // Corners count.
    assert!(maze.is_intersection(IVec2::new(1, 1)));
    // Tunnel tiles are corridors, even across the wrap.
    assert!(!maze.is_intersection(IVec2::new(0, 14)));
    assert!(!maze.is_intersection(IVec2::new(13, 11)));
}

#[test]
fn test_pen_is_solid() {
    let maze = Maze::classic().unwrap();
    for door in maze.door {
        assert!(maze.is_wall(door));
    }
    assert!(maze.is_wall(IVec2::new(13, 14)));
    assert!(maze.is_wall(IVec2::new(-1, 14)));
    assert!(!maze.is_wall(IVec2::new(13, 11)));
}

#[test]
fn test_parse_errors() {
    let mut board = RAW_BOARD;
    board[0] = "###########################Z";
    assert_eq!(
        MapTileParser::parse_board(board).unwrap_err(),
        ParseError::UnknownCharacter('Z')
    );

    let mut board = RAW_BOARD;
    board[0] = "####";
    assert_eq!(
        MapTileParser::parse_board(board).unwrap_err(),
        ParseError::InvalidRowWidth {
            row: 0,
            found: 4,
            expected: 28
        }
    );

    let mut board = RAW_BOARD;
    board[12] = "######.## ###-#### ##.######";
    assert_eq!(
        MapTileParser::parse_board(board).unwrap_err(),
        ParseError::InvalidDoorCount(1)
    );
}

#[test]
fn test_maze_errors() {
    let mut board = RAW_BOARD;
    board[23] = "#o..##.......  .......##..o#";
    assert!(matches!(Maze::new(board), Err(GameError::Map(MapError::MissingStart))));

    // An open tile sealed inside a wall block.
    let mut board = RAW_BOARD;
    board[3] = "#o# ##.#####.##.#####.####o#";
    assert!(matches!(
        Maze::new(board),
        Err(GameError::Map(MapError::Disconnected { unreachable: 1 }))
    ));
}
