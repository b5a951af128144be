//! Centralized error types for the ghost simulation.
//!
//! Only construction can fail: parsing the board and building the maze.
//! Everything that runs per tick is total.

/// Main error type for the crate.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Map parsing error: {0}")]
    MapParse(#[from] ParseError),

    #[error("Map error: {0}")]
    Map(#[from] MapError),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Error type for map parsing operations.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown character in board: {0}")]
    UnknownCharacter(char),
    #[error("Pen door must have exactly 2 positions, found {0}")]
    InvalidDoorCount(usize),
    #[error("Board row {row} has {found} columns, expected {expected}")]
    InvalidRowWidth { row: usize, found: usize, expected: usize },
}

/// Errors related to map validation.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum MapError {
    #[error("Pac-Man start position missing from board")]
    MissingStart,

    #[error("{unreachable} walkable tiles are unreachable from the start position")]
    Disconnected { unreachable: usize },
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
