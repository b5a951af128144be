//! Ghost entity implementation.
//!
//! A ghost owns its continuous position, its mode, and its target. Movement is
//! tile-quantized: decisions happen when a ghost passes the center of a tile,
//! one tile before the intersection they apply to. Inside the pen, ghosts follow
//! fixed pixel scripts instead (see [`pen`]).

pub mod pen;
pub mod targeting;

use glam::{IVec2, Vec2};
use rand::seq::IndexedRandom;
use rand::Rng;
use strum_macros::{AsRefStr, EnumIter};
use tracing::trace;

use crate::constants::{EYES_TARGET, FULL_SPEED, MAX_STEP};
use crate::level::Level;
use crate::map::direction::Direction;
use crate::map::grid::{Grid, Turns};
use crate::pacman::PacmanSnapshot;

use self::pen::{Home, PenPath};

/// The four classic ghost types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum GhostType {
    Blinky,
    Pinky,
    Inky,
    Clyde,
}

impl GhostType {
    /// Every ghost, in id order.
    pub const ALL: [GhostType; 4] = [GhostType::Blinky, GhostType::Pinky, GhostType::Inky, GhostType::Clyde];

    /// The ghost's fixed id, also its index in per-ghost tables.
    pub const fn id(self) -> usize {
        self as usize
    }
}

/// A ghost's behavioral mode. The global mode clock only ever uses the first four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum GhostMode {
    /// Ghost heads to its home corner.
    #[default]
    Scatter,
    /// Ghost actively pursues Pac-Man using its unique strategy.
    Chase,
    /// Frightened: moves randomly and can be eaten.
    Blue,
    /// Frightened and about to recover (the blinking phase).
    White,
    /// Eaten; returns to the pen and cannot collide.
    Eyes,
}

impl GhostMode {
    pub const fn is_frightened(self) -> bool {
        matches!(self, GhostMode::Blue | GhostMode::White)
    }
}

/// Result of Pac-Man and a ghost sharing a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encounter {
    None,
    /// Pac-Man ate the ghost.
    Kill,
    /// The ghost caught Pac-Man.
    Die,
}

/// Blinky's acceleration state.
///
/// The tier only rises within a round. It has no effect while inactive, which is the
/// case after a lost life until Clyde leaves the pen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Elroy {
    pub tier: u8,
    pub active: bool,
}

/// A ghost that roams the maze.
#[derive(Debug, Clone)]
pub struct Ghost {
    pub ghost_type: GhostType,
    /// Continuous position, in pixels.
    pub position: Vec2,
    /// The tile containing `position`.
    pub tile: IVec2,
    pub direction: Direction,
    /// A turn to take at the next tile center.
    pending_turn: Option<Direction>,
    pub mode: GhostMode,
    pub target: IVec2,
    /// Current speed, as a fraction of full speed.
    pub speed: f32,
    home: Home,
    /// Whether this tile's center has already been handled.
    center_reached: bool,
    in_tunnel: bool,
    /// Pellets credited to this ghost by the per-ghost release policy.
    pub dots_eaten: u32,
    elroy: Option<Elroy>,
    level: Level,
}

impl Ghost {
    /// Creates a ghost at its starting position for a new life.
    ///
    /// Blinky starts outside the pen; everyone else starts bouncing inside it.
    pub fn new<G: Grid + ?Sized>(ghost_type: GhostType, level: Level, grid: &G) -> Self {
        let position = pen::start_position(ghost_type);
        let (home, direction) = match ghost_type {
            GhostType::Blinky => (Home::Free, Direction::Left),
            _ => (
                Home::Scripted {
                    path: PenPath::InPen,
                    step: 0,
                },
                Direction::Up,
            ),
        };

        let mut ghost = Self {
            ghost_type,
            position,
            tile: grid.pixel_to_tile(position),
            direction,
            pending_turn: None,
            mode: GhostMode::Scatter,
            target: targeting::scatter_corner(ghost_type),
            speed: 0.0,
            home,
            center_reached: false,
            in_tunnel: false,
            dots_eaten: 0,
            elroy: (ghost_type == GhostType::Blinky).then(|| Elroy {
                tier: 0,
                active: true,
            }),
            level,
        };
        ghost.speed = ghost.calc_speed();
        ghost
    }

    pub fn home(&self) -> Home {
        self.home
    }

    pub fn pending_turn(&self) -> Option<Direction> {
        self.pending_turn
    }

    /// Queues a turn for the next tile center.
    pub fn queue_turn(&mut self, direction: Direction) {
        self.pending_turn = Some(direction);
    }

    /// Blinky's Elroy state; `None` for every other ghost.
    pub fn elroy(&self) -> Option<Elroy> {
        self.elroy
    }

    /// Whether Blinky's acceleration currently applies.
    pub fn is_elroy(&self) -> bool {
        self.elroy.is_some_and(|elroy| elroy.active && elroy.tier > 0)
    }

    /// Enables or suspends Elroy without touching the tier.
    pub fn set_elroy_active(&mut self, active: bool) {
        if let Some(elroy) = &mut self.elroy {
            elroy.active = active;
            self.speed = self.calc_speed();
        }
    }

    /// Raises the Elroy tier when the remaining pellets drop to a threshold.
    ///
    /// Returns whether the tier changed. Never lowers it.
    pub fn update_elroy(&mut self, pellets_remaining: u32) -> bool {
        let Some(elroy) = &mut self.elroy else {
            return false;
        };

        let tier = self
            .level
            .elroy_dots
            .iter()
            .filter(|&&threshold| pellets_remaining <= threshold)
            .count() as u8;
        if tier <= elroy.tier {
            return false;
        }

        elroy.tier = tier;
        self.speed = self.calc_speed();
        true
    }

    /// The tile this ghost is currently steering towards, for its mode.
    pub fn get_target(&self, pacman: &PacmanSnapshot, blinky_tile: IVec2) -> IVec2 {
        if self.mode == GhostMode::Eyes {
            EYES_TARGET
        } else if self.mode == GhostMode::Chase || self.is_elroy() {
            targeting::chase(self.ghost_type, self.tile, pacman, blinky_tile)
        } else {
            targeting::scatter_corner(self.ghost_type)
        }
    }

    /// Whether a new Pac-Man tile should immediately refresh this ghost's target.
    pub fn should_change_target(&self, global_mode: GhostMode) -> bool {
        self.mode != GhostMode::Eyes && (global_mode == GhostMode::Chase || self.is_elroy())
    }

    /// The speed for the ghost's current state, as a fraction of full speed.
    pub fn calc_speed(&self) -> f32 {
        if self.mode == GhostMode::Eyes {
            self.level.eyes_speed
        } else if self.mode.is_frightened() {
            self.level.fright_speed
        } else if self.in_tunnel {
            self.level.tunnel_speed
        } else if let Some(elroy) = self.elroy.filter(|_| self.is_elroy()) {
            self.level.elroy_speeds[(elroy.tier as usize).min(2) - 1]
        } else {
            self.level.ghost_speed
        }
    }

    fn dont_switch(&self, old_mode: GhostMode) -> bool {
        (old_mode.is_frightened() && !self.mode.is_frightened()) || self.mode == GhostMode::Eyes
    }

    fn dont_half_turn(old_mode: GhostMode) -> bool {
        old_mode.is_frightened()
    }

    /// Reacts to a change of the global mode.
    ///
    /// Eyes ignore every switch, and a ghost that already recovered from a frightened
    /// period is not pulled back into it when the blinking toggles. Switches out of a
    /// frightened mode never reverse the ghost.
    pub fn switch_mode(&mut self, old_mode: GhostMode, new_mode: GhostMode, pacman: &PacmanSnapshot, blinky_tile: IVec2) {
        if self.dont_switch(old_mode) {
            return;
        }

        self.mode = new_mode;
        self.target = self.get_target(pacman, blinky_tile);
        self.speed = self.calc_speed();

        if !Self::dont_half_turn(old_mode) {
            // Scripted ghosts turn right once they leave the pen instead of reversing.
            self.pending_turn = Some(if self.home.is_scripted() {
                Direction::Right
            } else {
                self.direction.opposite()
            });
        }
    }

    /// Chooses the direction to take at the intersection `at`.
    ///
    /// Reversing is never an option. Frightened ghosts pick at random; everyone else
    /// takes the turn whose neighbor is closest to the target, ties going to the first
    /// in [`Direction::DECISION_ORDER`]. An empty turn set holds the current direction.
    pub fn decide_turn<G: Grid + ?Sized, R: Rng + ?Sized>(&self, at: IVec2, grid: &G, rng: &mut R) -> Option<Direction> {
        let reverse = self.direction.opposite();
        let available = grid.turns_available_at(at);
        let options: Turns = Direction::DECISION_ORDER
            .into_iter()
            .filter(|&dir| dir != reverse && available.contains(&dir))
            .collect();

        let choice = match options.as_slice() {
            [] => None,
            [only] => Some(*only),
            _ if self.mode.is_frightened() => options.choose(rng).copied(),
            _ => options
                .iter()
                .copied()
                .min_by_key(|dir| (at + dir.as_ivec2() - self.target).length_squared()),
        };

        trace!(ghost = ?self.ghost_type, ?at, ?choice, target = ?self.target, "Turn decided");
        choice
    }

    /// Resolves Pac-Man standing on `pacman_tile`.
    ///
    /// A frightened ghost is eaten and turns into eyes; any other ghost except eyes
    /// catches Pac-Man. Ghosts on a pen script never collide.
    pub fn kill_or_die(&mut self, pacman_tile: IVec2) -> Encounter {
        if self.tile != pacman_tile || self.home.is_scripted() {
            return Encounter::None;
        }

        if self.mode.is_frightened() {
            self.mode = GhostMode::Eyes;
            self.target = EYES_TARGET;
            self.speed = self.level.eyes_speed;
            Encounter::Kill
        } else if self.mode != GhostMode::Eyes {
            Encounter::Die
        } else {
            Encounter::None
        }
    }

    /// Starts a pen script from the step that fits the current position.
    pub fn set_path(&mut self, path: PenPath) {
        let step = pen::entry_step(path, self.position);
        self.home = Home::Scripted { path, step };
        if path != PenPath::ExitPen {
            self.pending_turn = None;
        }
        trace!(ghost = ?self.ghost_type, ?path, step, "Path set");
    }

    /// Moves the ghost for one tick.
    ///
    /// `speed_multiplier` is the number of reference frames this tick stands for.
    /// `schedule_mode` is the scatter/chase mode a ghost adopts on getting back into
    /// the pen. Returns whether the ghost just finished entering the pen.
    pub fn move_ghost<G: Grid + ?Sized, R: Rng + ?Sized>(
        &mut self,
        speed_multiplier: f32,
        pacman: &PacmanSnapshot,
        blinky_tile: IVec2,
        schedule_mode: GhostMode,
        grid: &G,
        rng: &mut R,
    ) -> bool {
        let mut remaining = self.speed * FULL_SPEED * speed_multiplier;
        let mut entered_pen = false;

        while remaining > 0.0 {
            let step = remaining.min(MAX_STEP);
            remaining -= step;

            if self.home.is_scripted() {
                entered_pen |= self.follow_path(step, pacman, blinky_tile, schedule_mode, grid);
            } else {
                self.roam(step, grid, rng);
            }
        }

        entered_pen
    }

    fn passed_center(&self, center: Vec2) -> bool {
        match self.direction {
            Direction::Up => self.position.y <= center.y,
            Direction::Down => self.position.y >= center.y,
            Direction::Left => self.position.x <= center.x,
            Direction::Right => self.position.x >= center.x,
        }
    }

    fn roam<G: Grid + ?Sized, R: Rng + ?Sized>(&mut self, distance: f32, grid: &G, rng: &mut R) {
        self.position += self.direction.as_vec2() * distance;
        self.position.x = grid.wrap_tunnel_x(self.position.x);

        let tile = grid.pixel_to_tile(self.position);
        if tile != self.tile {
            self.tile = tile;
            self.center_reached = false;
            self.in_tunnel = grid.is_tunnel(tile);

            if self.mode == GhostMode::Eyes && tile == EYES_TARGET {
                self.set_path(PenPath::EnterPen);
                return;
            }
        }

        let center = grid.tile_center_pixel(self.tile);
        if self.center_reached || !self.passed_center(center) {
            return;
        }
        self.center_reached = true;

        if let Some(turn) = self.pending_turn.take() {
            self.position = center;
            self.direction = turn;
        }

        let next = self.tile + self.direction.as_ivec2();
        if grid.is_intersection(next) {
            self.pending_turn = self.decide_turn(next, grid, rng);
        }
        self.speed = self.calc_speed();
    }

    fn follow_path<G: Grid + ?Sized>(
        &mut self,
        distance: f32,
        pacman: &PacmanSnapshot,
        blinky_tile: IVec2,
        schedule_mode: GhostMode,
        grid: &G,
    ) -> bool {
        let Home::Scripted { path, step } = self.home else {
            return false;
        };
        let segment = pen::segments(self.ghost_type, path)[step];

        self.direction = segment.direction;
        self.position += segment.direction.as_vec2() * distance;
        self.tile = grid.pixel_to_tile(self.position);

        if !segment.reached(self.position) {
            return false;
        }
        segment.snap(&mut self.position);

        if let Some(next) = segment.next {
            self.home = Home::Scripted { path, step: next };
            return false;
        }

        match path {
            PenPath::InPen => false,
            PenPath::ExitPen => {
                self.home = Home::Free;
                self.direction = self.pending_turn.take().unwrap_or(Direction::Left);
                self.tile = grid.pixel_to_tile(self.position);
                self.center_reached = false;
                self.in_tunnel = false;
                self.speed = self.calc_speed();
                trace!(ghost = ?self.ghost_type, direction = ?self.direction, "Left the pen");
                false
            }
            PenPath::EnterPen => {
                self.position = pen::home_position(self.ghost_type);
                self.tile = grid.pixel_to_tile(self.position);
                self.home = Home::Scripted {
                    path: PenPath::InPen,
                    step: 0,
                };
                self.mode = schedule_mode;
                self.target = self.get_target(pacman, blinky_tile);
                self.speed = self.calc_speed();
                true
            }
        }
    }
}
