//! What the ghost simulation reports back to the rest of the game.

use glam::IVec2;

use crate::ghost::GhostType;

/// Receives the scoring side effects of collisions.
///
/// The roster never keeps score itself; it reports kills with the running streak so
/// the caller can award 200, 400, 800 and 1600 points.
pub trait ScoreSink {
    /// A frightened ghost was eaten on `tile`. `streak` starts at 1 for each frightened period.
    fn on_kill(&mut self, streak: u32, tile: IVec2);

    /// A ghost caught Pac-Man.
    fn on_die(&mut self);
}

/// Ignores every event.
impl ScoreSink for () {
    fn on_kill(&mut self, _: u32, _: IVec2) {}

    fn on_die(&mut self) {}
}

/// The collision resolved by a crash check, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashOutcome {
    Kill { ghost: GhostType, streak: u32, tile: IVec2 },
    Die { ghost: GhostType },
}

impl CrashOutcome {
    pub fn ghost(&self) -> GhostType {
        match *self {
            CrashOutcome::Kill { ghost, .. } | CrashOutcome::Die { ghost } => ghost,
        }
    }
}
