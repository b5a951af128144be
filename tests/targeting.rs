use std::time::Duration;

use glam::IVec2;
use pacman_ghosts::ghost::targeting::{chase, scatter_corner, tile_ahead};
use pacman_ghosts::ghost::{GhostMode, GhostType};
use pacman_ghosts::ghosts::{Ghosts, Start};
use pacman_ghosts::map::builder::Maze;
use pacman_ghosts::map::direction::Direction;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

mod common;

use common::{level, pacman};

#[test]
fn test_targets_facing_right() {
    let quarry = pacman(5, 5, Direction::Right);
    let blinky = IVec2::new(1, 5);

    assert_eq!(chase(GhostType::Blinky, IVec2::ZERO, &quarry, blinky), IVec2::new(5, 5));
    assert_eq!(chase(GhostType::Pinky, IVec2::ZERO, &quarry, blinky), IVec2::new(9, 5));
    assert_eq!(chase(GhostType::Inky, IVec2::ZERO, &quarry, blinky), IVec2::new(13, 5));
}

#[test]
fn test_up_facing_quirk() {
    let quarry = pacman(10, 10, Direction::Up);
    assert_eq!(tile_ahead(&quarry, 4), IVec2::new(6, 6));
    assert_eq!(tile_ahead(&quarry, 2), IVec2::new(8, 8));

    for facing in [Direction::Down, Direction::Left, Direction::Right] {
        let quarry = pacman(10, 10, facing);
        assert_eq!(tile_ahead(&quarry, 4), IVec2::new(10, 10) + facing.as_ivec2() * 4);
    }
}

#[test]
fn test_clyde_shyness_boundary() {
    let clyde = IVec2::new(0, 31);
    let corner = scatter_corner(GhostType::Clyde);

    // Exactly 8 tiles away: still shy.
    let quarry = pacman(0, 39, Direction::Left);
    assert_eq!(chase(GhostType::Clyde, clyde, &quarry, IVec2::ZERO), corner);

    let quarry = pacman(0, 40, Direction::Left);
    assert_eq!(chase(GhostType::Clyde, clyde, &quarry, IVec2::ZERO), IVec2::new(0, 40));

    // Diagonal distance counts as euclidean: 6^2 + 6^2 = 72 > 64.
    let quarry = pacman(6, 37, Direction::Left);
    assert_eq!(chase(GhostType::Clyde, clyde, &quarry, IVec2::ZERO), IVec2::new(6, 37));
}

#[test]
fn test_scatter_corners_are_distinct() {
    let corners: Vec<IVec2> = GhostType::ALL.iter().map(|&ghost| scatter_corner(ghost)).collect();
    for (i, a) in corners.iter().enumerate() {
        for b in &corners[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_set_targets_in_chase() {
    let maze = Maze::classic().unwrap();
    let level = level(1);
    let mut ghosts = Ghosts::with_seed(&maze, level, Start::NewRound, 1);
    let start = pacman(13, 23, Direction::Left);

    // Run out the first scatter slot.
    ghosts.animate(&maze, level.schedule[0], 0.1, &start);
    assert_eq!(ghosts.mode(), GhostMode::Chase);

    let quarry = pacman(5, 5, Direction::Right);
    ghosts.set_targets(&quarry);

    let blinky_tile = ghosts.ghost(GhostType::Blinky).tile;
    assert_eq!(ghosts.ghost(GhostType::Blinky).target, IVec2::new(5, 5));
    assert_eq!(ghosts.ghost(GhostType::Pinky).target, IVec2::new(9, 5));
    assert_eq!(ghosts.ghost(GhostType::Inky).target, IVec2::new(14, 10) - blinky_tile);
}

#[test]
fn test_set_targets_in_scatter_leaves_targets() {
    let maze = Maze::classic().unwrap();
    let mut ghosts = Ghosts::with_seed(&maze, level(1), Start::NewRound, 1);
    let start = pacman(13, 23, Direction::Left);
    ghosts.animate(&maze, Duration::from_millis(16), 1.0, &start);

    ghosts.set_targets(&pacman(5, 5, Direction::Right));
    for ghost in ghosts.iter() {
        assert_that(&ghost.target).is_equal_to(scatter_corner(ghost.ghost_type));
    }
}
