//! Scripted movement inside, out of, and back into the ghost pen.
//!
//! Free movement is tile based, but the pen door sits on the seam between two
//! columns, so everything in here is expressed in pixels instead.

use glam::Vec2;
use strum_macros::AsRefStr;

use crate::constants::{
    BLINKY_START, PEN_BOUNCE_BOTTOM, PEN_BOUNCE_TOP, PEN_CENTER_Y, PEN_DOOR_X, PEN_EXIT_Y, PEN_LEFT_X, PEN_RIGHT_X,
};
use crate::ghost::GhostType;
use crate::map::direction::Direction;

/// The three scripts a ghost can follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum PenPath {
    /// Bounce up and down while waiting for release. Never finishes.
    InPen,
    /// Leave the pen onto the corridor above the door.
    ExitPen,
    /// Return to the pen as eyes and settle into the ghost's slot.
    EnterPen,
}

/// Whether a ghost is roaming the maze or following a pen script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Home {
    #[default]
    Free,
    Scripted { path: PenPath, step: usize },
}

impl Home {
    pub fn is_scripted(self) -> bool {
        matches!(self, Home::Scripted { .. })
    }

    /// The script being followed, if any.
    pub fn path(self) -> Option<PenPath> {
        match self {
            Home::Free => None,
            Home::Scripted { path, .. } => Some(path),
        }
    }
}

/// One segment of a script: travel along `direction` until the relevant axis reaches `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathStep {
    pub direction: Direction,
    pub target: f32,
    /// The segment to continue with, or `None` if this one ends the script.
    pub next: Option<usize>,
}

impl PathStep {
    const fn new(direction: Direction, target: f32, next: Option<usize>) -> Self {
        Self { direction, target, next }
    }

    /// Whether `position` has reached or passed this segment's target.
    pub fn reached(&self, position: Vec2) -> bool {
        match self.direction {
            Direction::Up => position.y <= self.target,
            Direction::Down => position.y >= self.target,
            Direction::Left => position.x <= self.target,
            Direction::Right => position.x >= self.target,
        }
    }

    /// Places `position` exactly on the target along this segment's axis.
    pub fn snap(&self, position: &mut Vec2) {
        if self.direction.is_horizontal() {
            position.x = self.target;
        } else {
            position.y = self.target;
        }
    }
}

const BOUNCE: [PathStep; 2] = [
    PathStep::new(Direction::Up, PEN_BOUNCE_TOP, Some(1)),
    PathStep::new(Direction::Down, PEN_BOUNCE_BOTTOM, Some(0)),
];

const EXIT_CENTER: [PathStep; 1] = [PathStep::new(Direction::Up, PEN_EXIT_Y, None)];

const EXIT_LEFT_SLOT: [PathStep; 2] = [
    PathStep::new(Direction::Right, PEN_DOOR_X, Some(1)),
    PathStep::new(Direction::Up, PEN_EXIT_Y, None),
];

const EXIT_RIGHT_SLOT: [PathStep; 2] = [
    PathStep::new(Direction::Left, PEN_DOOR_X, Some(1)),
    PathStep::new(Direction::Up, PEN_EXIT_Y, None),
];

// Steps 0 and 1 line the eyes up with the door from either side.
const ENTER_CENTER: [PathStep; 3] = [
    PathStep::new(Direction::Right, PEN_DOOR_X, Some(2)),
    PathStep::new(Direction::Left, PEN_DOOR_X, Some(2)),
    PathStep::new(Direction::Down, PEN_CENTER_Y, None),
];

const ENTER_LEFT_SLOT: [PathStep; 4] = [
    PathStep::new(Direction::Right, PEN_DOOR_X, Some(2)),
    PathStep::new(Direction::Left, PEN_DOOR_X, Some(2)),
    PathStep::new(Direction::Down, PEN_CENTER_Y, Some(3)),
    PathStep::new(Direction::Left, PEN_LEFT_X, None),
];

const ENTER_RIGHT_SLOT: [PathStep; 4] = [
    PathStep::new(Direction::Right, PEN_DOOR_X, Some(2)),
    PathStep::new(Direction::Left, PEN_DOOR_X, Some(2)),
    PathStep::new(Direction::Down, PEN_CENTER_Y, Some(3)),
    PathStep::new(Direction::Right, PEN_RIGHT_X, None),
];

/// The segments of a script for a given ghost.
pub fn segments(ghost_type: GhostType, path: PenPath) -> &'static [PathStep] {
    match (path, ghost_type) {
        (PenPath::InPen, _) => &BOUNCE,
        (PenPath::ExitPen, GhostType::Blinky | GhostType::Pinky) => &EXIT_CENTER,
        (PenPath::ExitPen, GhostType::Inky) => &EXIT_LEFT_SLOT,
        (PenPath::ExitPen, GhostType::Clyde) => &EXIT_RIGHT_SLOT,
        (PenPath::EnterPen, GhostType::Blinky | GhostType::Pinky) => &ENTER_CENTER,
        (PenPath::EnterPen, GhostType::Inky) => &ENTER_LEFT_SLOT,
        (PenPath::EnterPen, GhostType::Clyde) => &ENTER_RIGHT_SLOT,
    }
}

/// The segment a script starts on from `position`.
pub fn entry_step(path: PenPath, position: Vec2) -> usize {
    match path {
        PenPath::EnterPen if position.x > PEN_DOOR_X => 1,
        _ => 0,
    }
}

/// The ghost's resting spot inside the pen.
pub const fn home_position(ghost_type: GhostType) -> Vec2 {
    match ghost_type {
        GhostType::Blinky | GhostType::Pinky => Vec2::new(PEN_DOOR_X, PEN_CENTER_Y),
        GhostType::Inky => Vec2::new(PEN_LEFT_X, PEN_CENTER_Y),
        GhostType::Clyde => Vec2::new(PEN_RIGHT_X, PEN_CENTER_Y),
    }
}

/// Where a ghost is placed at the start of a life.
pub const fn start_position(ghost_type: GhostType) -> Vec2 {
    match ghost_type {
        GhostType::Blinky => BLINKY_START,
        _ => home_position(ghost_type),
    }
}
