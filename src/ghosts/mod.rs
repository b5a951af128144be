//! The roster of ghosts and the rules that span more than one of them.
//!
//! [`Ghosts`] owns all four [`Ghost`]s, the global mode clock and the pen. It lives
//! for exactly one life of one round; a new round (or a lost life) builds a new one.

pub mod clock;
pub mod house;

use std::time::Duration;

use glam::IVec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::debug;

use crate::events::{CrashOutcome, ScoreSink};
use crate::ghost::pen::PenPath;
use crate::ghost::{Encounter, Ghost, GhostMode, GhostType};
use crate::level::Level;
use crate::map::grid::Grid;
use crate::pacman::PacmanSnapshot;

use self::clock::{ModeClock, Transition};
use self::house::{House, ReleasePolicy};

/// How the roster is being started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Start {
    /// A fresh round: per-ghost release counters and Elroy live from the start.
    NewRound,
    /// The same round after Pac-Man lost a life. Releases use the global counter,
    /// and Elroy waits until Clyde is out again.
    ContinuedLife {
        /// Per-ghost pellet counters kept from the previous life, by ghost id.
        dots_eaten: [u32; 4],
    },
}

#[derive(Debug)]
pub struct Ghosts {
    ghosts: [Ghost; 4],
    clock: ModeClock,
    house: House,
    kill_streak: u32,
    level: Level,
    rng: SmallRng,
}

impl Ghosts {
    /// Creates the roster with an OS-seeded random source.
    pub fn new<G: Grid + ?Sized>(grid: &G, level: Level, start: Start) -> Self {
        Self::with_rng(grid, level, start, SmallRng::from_os_rng())
    }

    /// Creates the roster with a fixed seed, for reproducible frightened movement.
    pub fn with_seed<G: Grid + ?Sized>(grid: &G, level: Level, start: Start, seed: u64) -> Self {
        Self::with_rng(grid, level, start, SmallRng::seed_from_u64(seed))
    }

    fn with_rng<G: Grid + ?Sized>(grid: &G, level: Level, start: Start, rng: SmallRng) -> Self {
        let mut ghosts = GhostType::ALL.map(|ghost_type| Ghost::new(ghost_type, level, grid));

        let policy = match start {
            Start::NewRound => ReleasePolicy::PerGhost,
            Start::ContinuedLife { dots_eaten } => {
                for ghost in &mut ghosts {
                    ghost.dots_eaten = dots_eaten[ghost.ghost_type.id()];
                }
                ghosts[GhostType::Blinky.id()].set_elroy_active(false);
                ReleasePolicy::Global { count: 0 }
            }
        };

        let mut house = House::new(policy);
        for ghost_type in [GhostType::Pinky, GhostType::Inky, GhostType::Clyde] {
            house.enqueue(ghost_type);
        }

        debug!(round = level.round, ?policy, "Ghosts created");
        Self {
            ghosts,
            clock: ModeClock::new(&level),
            house,
            kill_streak: 0,
            level,
            rng,
        }
    }

    pub fn ghost(&self, ghost_type: GhostType) -> &Ghost {
        &self.ghosts[ghost_type.id()]
    }

    pub fn ghost_mut(&mut self, ghost_type: GhostType) -> &mut Ghost {
        &mut self.ghosts[ghost_type.id()]
    }

    /// Every ghost, in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Ghost> {
        self.ghosts.iter()
    }

    /// The global mode.
    pub fn mode(&self) -> GhostMode {
        self.clock.mode()
    }

    pub fn clock(&self) -> &ModeClock {
        &self.clock
    }

    pub fn switch_index(&self) -> usize {
        self.clock.switch_index()
    }

    /// Ghosts eaten during the current frightened period.
    pub fn kill_streak(&self) -> u32 {
        self.kill_streak
    }

    /// Ghosts waiting in the pen, in release order.
    pub fn pen_queue(&self) -> &[GhostType] {
        self.house.queue()
    }

    pub fn release_policy(&self) -> ReleasePolicy {
        self.house.policy
    }

    /// Per-ghost pellet counters, by ghost id. Carry these into [`Start::ContinuedLife`].
    pub fn dots_eaten(&self) -> [u32; 4] {
        self.ghosts.each_ref().map(|ghost| ghost.dots_eaten)
    }

    fn blinky_tile(&self) -> IVec2 {
        self.ghosts[GhostType::Blinky.id()].tile
    }

    /// Advances the whole roster by one tick.
    ///
    /// `elapsed` runs the clocks; `speed` is the number of reference frames this tick
    /// stands for and scales movement.
    pub fn animate<G: Grid + ?Sized>(&mut self, grid: &G, elapsed: Duration, speed: f32, pacman: &PacmanSnapshot) {
        if let Some(transition) = self.clock.tick(elapsed) {
            debug!(old = ?transition.old, new = ?transition.new, index = self.clock.switch_index(), "Mode switch");
            self.broadcast(transition, pacman);
        }

        let schedule_mode = self.clock.schedule_mode();
        for index in 0..self.ghosts.len() {
            let blinky_tile = self.blinky_tile();
            let ghost = &mut self.ghosts[index];
            if !ghost.move_ghost(speed, pacman, blinky_tile, schedule_mode, grid, &mut self.rng) {
                continue;
            }

            let ghost_type = ghost.ghost_type;
            if ghost_type == GhostType::Blinky {
                ghost.set_path(PenPath::ExitPen);
                debug!(ghost = ?ghost_type, "Back in the pen, leaving at once");
            } else {
                self.house.enqueue(ghost_type);
                debug!(ghost = ?ghost_type, queue = ?self.house.queue(), "Back in the pen");
            }
        }

        if let Some(ghost_type) = self.dot_release_candidate() {
            self.release(ghost_type);
        } else if !self.house.is_empty() {
            self.house.force_timer += elapsed;
            if self.house.force_timer >= self.level.pen_force_time {
                if let Some(head) = self.house.head() {
                    debug!(ghost = ?head, "Pen timer ran out");
                    self.release(head);
                }
            }
        }
    }

    fn broadcast(&mut self, transition: Transition, pacman: &PacmanSnapshot) {
        for index in 0..self.ghosts.len() {
            let blinky_tile = self.blinky_tile();
            self.ghosts[index].switch_mode(transition.old, transition.new, pacman, blinky_tile);
        }
    }

    /// Refreshes chase targets after Pac-Man entered a new tile.
    pub fn set_targets(&mut self, pacman: &PacmanSnapshot) {
        let global = self.clock.mode();
        for index in 0..self.ghosts.len() {
            let blinky_tile = self.blinky_tile();
            let ghost = &mut self.ghosts[index];
            if ghost.should_change_target(global) {
                ghost.target = ghost.get_target(pacman, blinky_tile);
            }
        }
    }

    /// Pac-Man ate a power pellet.
    ///
    /// On rounds without a frightened period the ghosts only reverse.
    pub fn frighten(&mut self, pacman: &PacmanSnapshot) {
        self.kill_streak = 0;

        if self.level.frighten_time.is_zero() {
            let mode = self.clock.mode();
            self.broadcast(Transition { old: mode, new: mode }, pacman);
            return;
        }

        let transition = self.clock.frighten();
        debug!(old = ?transition.old, "Frightened");
        self.broadcast(transition, pacman);
    }

    /// Resolves Pac-Man standing on `pacman_tile`. At most one ghost is resolved per call.
    pub fn crash<S: ScoreSink + ?Sized>(&mut self, pacman_tile: IVec2, sink: &mut S) -> Option<CrashOutcome> {
        for ghost in &mut self.ghosts {
            match ghost.kill_or_die(pacman_tile) {
                Encounter::None => continue,
                Encounter::Kill => {
                    self.kill_streak += 1;
                    sink.on_kill(self.kill_streak, ghost.tile);
                    debug!(ghost = ?ghost.ghost_type, streak = self.kill_streak, tile = ?ghost.tile, "Ghost eaten");
                    return Some(CrashOutcome::Kill {
                        ghost: ghost.ghost_type,
                        streak: self.kill_streak,
                        tile: ghost.tile,
                    });
                }
                Encounter::Die => {
                    sink.on_die();
                    debug!(ghost = ?ghost.ghost_type, tile = ?ghost.tile, "Pac-Man caught");
                    return Some(CrashOutcome::Die { ghost: ghost.ghost_type });
                }
            }
        }
        None
    }

    /// Pac-Man ate a pellet, leaving `pellets_remaining` on the board.
    pub fn pellet_eaten(&mut self, pellets_remaining: u32) {
        self.update_elroy(pellets_remaining);
        self.house.force_timer = Duration::ZERO;

        match self.house.policy {
            ReleasePolicy::PerGhost => {
                if let Some(head) = self.house.head() {
                    self.ghosts[head.id()].dots_eaten += 1;
                }
            }
            ReleasePolicy::Global { count } => {
                let count = count + 1;
                self.house.policy = if Some(count) == self.level.global_dot_limit(GhostType::Clyde) {
                    debug!(count, "Global pellet counter done, back to per-ghost counters");
                    ReleasePolicy::PerGhost
                } else {
                    ReleasePolicy::Global { count }
                };
            }
        }
    }

    /// Raises Blinky's Elroy tier if the remaining pellets crossed a threshold.
    pub fn update_elroy(&mut self, pellets_remaining: u32) {
        let blinky = &mut self.ghosts[GhostType::Blinky.id()];
        if blinky.update_elroy(pellets_remaining) {
            debug!(elroy = ?blinky.elroy(), pellets_remaining, "Elroy tier raised");
        }
    }

    /// The waiting ghost whose pellet count allows it out, if any.
    ///
    /// Only the head of the queue is ever considered.
    fn dot_release_candidate(&self) -> Option<GhostType> {
        let head = self.house.head()?;
        let ready = match self.house.policy {
            ReleasePolicy::PerGhost => self.ghosts[head.id()].dots_eaten >= self.level.dot_limit(head),
            // Clyde's global slot switches policy instead of releasing.
            ReleasePolicy::Global { count } => {
                head != GhostType::Clyde && self.level.global_dot_limit(head).is_some_and(|limit| count >= limit)
            }
        };
        ready.then_some(head)
    }

    /// Sends a waiting ghost out of the pen. A ghost that is not waiting is left alone.
    pub fn release(&mut self, ghost_type: GhostType) {
        if !self.house.remove(ghost_type) {
            return;
        }

        self.ghosts[ghost_type.id()].set_path(PenPath::ExitPen);
        self.house.force_timer = Duration::ZERO;
        if ghost_type == GhostType::Clyde {
            self.ghosts[GhostType::Blinky.id()].set_elroy_active(true);
        }
        debug!(ghost = ?ghost_type, queue = ?self.house.queue(), "Released");
    }
}
