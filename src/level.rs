//! Per-round difficulty values.
//!
//! Speeds are fractions of [`FULL_SPEED`](crate::constants::FULL_SPEED); durations are wall-clock.

use std::time::Duration;

use crate::error::{GameError, GameResult};
use crate::ghost::GhostType;

/// Number of timed scatter/chase slots before chase becomes permanent.
pub const SCHEDULE_LEN: usize = 7;

/// Global pellet counts releasing each ghost after a lost life.
///
/// Blinky never waits in the pen. Reaching Clyde's count hands control back to the
/// per-ghost limits instead of releasing him directly.
pub const GLOBAL_DOT_LIMITS: [Option<u32>; 4] = [None, Some(7), Some(17), Some(32)];

/// A snapshot of every tuning value for one round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Level {
    pub round: u32,
    pub ghost_speed: f32,
    pub tunnel_speed: f32,
    pub fright_speed: f32,
    /// Blinky's speed in his first and second Elroy tier.
    pub elroy_speeds: [f32; 2],
    pub eyes_speed: f32,
    /// Alternating scatter/chase durations, starting with scatter.
    pub schedule: [Duration; SCHEDULE_LEN],
    pub frighten_time: Duration,
    /// How many blue/white toggles follow the frightened period.
    pub blinks: u32,
    /// How long the pen waits for a pellet before forcing a release.
    pub pen_force_time: Duration,
    /// Per-ghost pellet limits, indexed by ghost id.
    pub dot_limits: [u32; 4],
    /// Global pellet counts used after a lost life, indexed by ghost id.
    pub global_dot_limits: [Option<u32>; 4],
    /// Remaining-pellet counts that push Blinky into each Elroy tier.
    pub elroy_dots: [u32; 2],
}

impl Level {
    /// The per-ghost pellet limit for a ghost.
    pub fn dot_limit(&self, ghost: GhostType) -> u32 {
        self.dot_limits[ghost.id()]
    }

    /// The global pellet count that releases a ghost, if any.
    pub fn global_dot_limit(&self, ghost: GhostType) -> Option<u32> {
        self.global_dot_limits[ghost.id()]
    }
}

/// Lookup of [`Level`]s by round number (1-based).
///
/// Rounds past the end of the table reuse its last entry.
#[derive(Debug, Clone)]
pub struct LevelTable {
    levels: Vec<Level>,
}

impl LevelTable {
    /// Builds a table from explicit levels, in round order.
    pub fn new(levels: Vec<Level>) -> GameResult<Self> {
        if levels.is_empty() {
            return Err(GameError::InvalidState("level table needs at least one level".to_string()));
        }
        Ok(Self { levels })
    }

    /// The arcade values for rounds 1 through 21.
    pub fn classic() -> Self {
        Self {
            levels: (1..=21).map(classic_level).collect(),
        }
    }

    /// The values for a round.
    pub fn get(&self, round: u32) -> GameResult<Level> {
        if round == 0 {
            return Err(GameError::InvalidState("rounds are numbered from 1".to_string()));
        }
        let index = (round as usize - 1).min(self.levels.len() - 1);
        Ok(Level {
            round,
            ..self.levels[index]
        })
    }
}

impl Default for LevelTable {
    fn default() -> Self {
        Self::classic()
    }
}

const fn secs(s: u64) -> Duration {
    Duration::from_secs(s)
}

/// One frame at 60 Hz; the near-instant final scatter of later rounds.
const ONE_FRAME: Duration = Duration::from_nanos(16_666_667);

fn classic_level(round: u32) -> Level {
    let (ghost_speed, tunnel_speed, fright_speed, elroy_speeds) = match round {
        1 => (0.75, 0.40, 0.50, [0.80, 0.85]),
        2..=4 => (0.85, 0.45, 0.55, [0.90, 0.95]),
        _ => (0.95, 0.50, 0.60, [1.00, 1.05]),
    };

    let schedule = match round {
        1 => [secs(7), secs(20), secs(7), secs(20), secs(5), secs(20), secs(5)],
        2..=4 => [secs(7), secs(20), secs(7), secs(20), secs(5), secs(1033), ONE_FRAME],
        _ => [secs(5), secs(20), secs(5), secs(20), secs(5), secs(1037), ONE_FRAME],
    };

    let (frighten_secs, flashes) = match round {
        1 => (6, 5),
        2 | 6 | 10 => (5, 5),
        3 => (4, 5),
        4 | 14 => (3, 5),
        5 | 7 | 8 | 11 => (2, 5),
        9 | 12 | 13 | 15 | 16 | 18 => (1, 3),
        _ => (0, 0),
    };

    let elroy = match round {
        1 => 20,
        2 => 30,
        3..=5 => 40,
        6..=8 => 50,
        9..=11 => 60,
        12..=14 => 80,
        15..=18 => 100,
        _ => 120,
    };

    let dot_limits = match round {
        1 => [0, 0, 30, 60],
        2 => [0, 0, 0, 50],
        _ => [0; 4],
    };

    Level {
        round,
        ghost_speed,
        tunnel_speed,
        fright_speed,
        elroy_speeds,
        eyes_speed: 2.0,
        schedule,
        frighten_time: secs(frighten_secs),
        blinks: flashes * 2,
        pen_force_time: if round < 5 { secs(4) } else { secs(3) },
        dot_limits,
        global_dot_limits: GLOBAL_DOT_LIMITS,
        elroy_dots: [elroy, elroy / 2],
    }
}
