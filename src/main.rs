//! Headless ghost simulation on the classic maze.
//!
//! Usage: `pacman-ghosts [ROUND] [SEED]`. Verbosity follows `RUST_LOG` (default `info`).

use std::collections::HashMap;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use glam::IVec2;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

use pacman_ghosts::constants::{BOARD_CELL_SIZE, CELL_SIZE, FULL_SPEED, LOOP_TIME, MapTile};
use pacman_ghosts::events::{CrashOutcome, ScoreSink};
use pacman_ghosts::formatter::{self, CustomFormatter};
use pacman_ghosts::ghosts::{Ghosts, Start};
use pacman_ghosts::level::{Level, LevelTable};
use pacman_ghosts::map::builder::Maze;
use pacman_ghosts::map::direction::Direction;
use pacman_ghosts::map::grid::Grid;
use pacman_ghosts::pacman::PacmanSnapshot;
use pacman_ghosts::timing::FrameClock;

/// Five minutes of reference frames.
const MAX_FRAMES: u32 = 60 * 60 * 5;
const LIVES: u32 = 3;
/// Every this many frames the host stalls long enough for the frame to be dropped.
const STALL_EVERY: u32 = 1200;

#[derive(Debug, Default)]
struct Score {
    points: u32,
    deaths: u32,
}

impl ScoreSink for Score {
    fn on_kill(&mut self, streak: u32, _tile: IVec2) {
        self.points += 200 << streak.clamp(1, 4).saturating_sub(1);
    }

    fn on_die(&mut self) {
        self.deaths += 1;
    }
}

/// Folds a tile stepped off either tunnel end back onto the board.
fn wrap_tile(mut tile: IVec2) -> IVec2 {
    tile.x = tile.x.rem_euclid(BOARD_CELL_SIZE.x as i32);
    tile
}

/// A Pac-Man that wanders the maze, turning at random where it can.
struct Wanderer {
    tile: IVec2,
    direction: Direction,
    /// Pixels travelled past the current tile's center.
    progress: f32,
    speed: f32,
}

impl Wanderer {
    fn new(maze: &Maze, level: &Level) -> Self {
        Self {
            tile: maze.pacman_start,
            direction: Direction::Left,
            progress: 0.0,
            // Pac-Man runs a little faster than the ghosts' base speed.
            speed: (level.ghost_speed + 0.05).min(1.0),
        }
    }

    fn snapshot(&self, maze: &Maze) -> PacmanSnapshot {
        let pixel = maze.tile_center_pixel(self.tile) + self.direction.as_vec2() * self.progress;
        PacmanSnapshot::new(self.tile, pixel, self.direction)
    }

    /// Moves for `frames` reference frames. Returns whether a new tile was entered.
    fn advance(&mut self, maze: &Maze, frames: f32, rng: &mut SmallRng) -> bool {
        self.progress += self.speed * FULL_SPEED * frames;
        let mut moved = false;

        while self.progress >= CELL_SIZE as f32 {
            self.progress -= CELL_SIZE as f32;
            self.tile = wrap_tile(self.tile + self.direction.as_ivec2());
            moved = true;

            let open: Vec<Direction> = Direction::DIRECTIONS
                .into_iter()
                .filter(|&dir| !maze.is_wall(wrap_tile(self.tile + dir.as_ivec2())))
                .collect();
            let forward: Vec<Direction> = open
                .iter()
                .copied()
                .filter(|&dir| dir != self.direction.opposite())
                .collect();

            let keep_going = forward.contains(&self.direction) && rng.random_bool(0.7);
            if !keep_going {
                let choices = if forward.is_empty() { &open } else { &forward };
                if let Some(&dir) = choices.choose(rng) {
                    self.direction = dir;
                }
            }
        }

        moved
    }
}

fn main() -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .event_format(CustomFormatter)
        .finish()
        .with(ErrorLayer::default());
    tracing::subscriber::set_global_default(subscriber).context("Could not set global default subscriber")?;

    let mut args = std::env::args().skip(1);
    let round: u32 = match args.next() {
        Some(arg) => arg.parse().with_context(|| format!("Invalid round number: {arg}"))?,
        None => 1,
    };
    let seed: u64 = match args.next() {
        Some(arg) => arg.parse().with_context(|| format!("Invalid seed: {arg}"))?,
        None => rand::rng().random(),
    };

    let maze = Maze::classic()?;
    let table = LevelTable::classic();
    let level = table.get(round)?;
    info!(round, seed, pellets = maze.pellet_count(), "Starting simulation");

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut pellets: HashMap<IVec2, MapTile> = maze.pellets().collect();
    let mut pacman = Wanderer::new(&maze, &level);
    let mut ghosts = Ghosts::with_seed(&maze, level, Start::NewRound, seed);
    let mut score = Score::default();
    let mut clock = FrameClock::new();

    let mut now = Instant::now();
    let mut dropped = 0u32;
    let mut frames = 0u32;

    while frames < MAX_FRAMES {
        frames += 1;
        now += if frames % STALL_EVERY == 0 {
            LOOP_TIME * 8
        } else {
            LOOP_TIME
        };

        let Some((elapsed, speed)) = clock.tick(now) else {
            dropped += 1;
            continue;
        };
        formatter::increment_tick();

        if pacman.advance(&maze, speed, &mut rng) {
            let snapshot = pacman.snapshot(&maze);
            ghosts.set_targets(&snapshot);

            if let Some(eaten) = pellets.remove(&pacman.tile) {
                score.points += if eaten == MapTile::PowerPellet { 50 } else { 10 };
                ghosts.pellet_eaten(pellets.len() as u32);
                if eaten == MapTile::PowerPellet {
                    ghosts.frighten(&snapshot);
                }
            }
        }

        let snapshot = pacman.snapshot(&maze);
        ghosts.animate(&maze, elapsed, speed, &snapshot);

        match ghosts.crash(pacman.tile, &mut score) {
            Some(CrashOutcome::Die { ghost }) => {
                info!(?ghost, deaths = score.deaths, "Pac-Man caught");
                if score.deaths >= LIVES {
                    break;
                }
                let dots_eaten = ghosts.dots_eaten();
                ghosts = Ghosts::with_seed(&maze, level, Start::ContinuedLife { dots_eaten }, seed ^ frames as u64);
                pacman = Wanderer::new(&maze, &level);
            }
            Some(CrashOutcome::Kill { ghost, streak, tile }) => {
                debug!(?ghost, streak, ?tile, "Ghost eaten");
            }
            None => {}
        }

        if pellets.is_empty() {
            info!(frames, "Board cleared");
            break;
        }
    }

    for ghost in ghosts.iter() {
        let name: &str = ghost.ghost_type.as_ref();
        let mode: &str = ghost.mode.as_ref();
        info!(ghost = name, mode, tile = ?ghost.tile, home = ?ghost.home(), "Final state");
    }

    let simulated = Duration::from_secs_f64(LOOP_TIME.as_secs_f64() * frames as f64);
    info!(
        frames,
        dropped,
        ?simulated,
        points = score.points,
        deaths = score.deaths,
        pellets_left = pellets.len(),
        "Simulation finished"
    );
    Ok(())
}
