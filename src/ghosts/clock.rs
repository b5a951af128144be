//! The global mode clock shared by all four ghosts.

use std::time::Duration;

use crate::constants::BLINK_DURATION;
use crate::ghost::GhostMode;
use crate::level::{Level, SCHEDULE_LEN};

/// A change of the global mode, to be broadcast to every ghost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub old: GhostMode,
    pub new: GhostMode,
}

/// Alternates scatter and chase on the level's schedule, and runs the frightened
/// period with its blinking tail on top of it.
///
/// The schedule is paused while frightened. Once every slot has run out, chase is permanent.
#[derive(Debug, Clone)]
pub struct ModeClock {
    mode: GhostMode,
    switch_index: usize,
    mode_timer: Duration,
    frighten_timer: Duration,
    remaining_blinks: i32,
    schedule: [Duration; SCHEDULE_LEN],
    frighten_time: Duration,
    blinks: u32,
}

impl ModeClock {
    pub fn new(level: &Level) -> Self {
        Self {
            mode: GhostMode::Scatter,
            switch_index: 0,
            mode_timer: level.schedule[0],
            frighten_timer: Duration::ZERO,
            remaining_blinks: 0,
            schedule: level.schedule,
            frighten_time: level.frighten_time,
            blinks: level.blinks,
        }
    }

    /// The current global mode. Never `Eyes`.
    pub fn mode(&self) -> GhostMode {
        self.mode
    }

    /// How many scatter/chase switches happened so far.
    pub fn switch_index(&self) -> usize {
        self.switch_index
    }

    pub fn is_frightened(&self) -> bool {
        self.mode.is_frightened()
    }

    /// The scatter/chase mode the schedule is currently in, ignoring any frightened period.
    pub fn schedule_mode(&self) -> GhostMode {
        if self.switch_index % 2 == 0 {
            GhostMode::Scatter
        } else {
            GhostMode::Chase
        }
    }

    pub fn remaining_blinks(&self) -> i32 {
        self.remaining_blinks
    }

    /// Advances the running timer by `elapsed`, returning the transition it caused, if any.
    pub fn tick(&mut self, elapsed: Duration) -> Option<Transition> {
        let old = self.mode;

        if self.is_frightened() {
            self.frighten_timer = self.frighten_timer.saturating_sub(elapsed);
            if !self.frighten_timer.is_zero() {
                return None;
            }

            self.remaining_blinks -= 1;
            self.mode = if self.remaining_blinks >= 0 {
                self.frighten_timer = BLINK_DURATION;
                match old {
                    GhostMode::Blue => GhostMode::White,
                    _ => GhostMode::Blue,
                }
            } else {
                self.schedule_mode()
            };
        } else {
            if self.switch_index >= SCHEDULE_LEN {
                return None;
            }

            self.mode_timer = self.mode_timer.saturating_sub(elapsed);
            if !self.mode_timer.is_zero() {
                return None;
            }

            self.switch_index += 1;
            if let Some(&next) = self.schedule.get(self.switch_index) {
                self.mode_timer = next;
            }
            self.mode = self.schedule_mode();
        }

        Some(Transition { old, new: self.mode })
    }

    /// Starts (or restarts) a frightened period.
    ///
    /// A restart reports the schedule mode as the old mode, so ghosts that already
    /// recovered are frightened again rather than treated as a blink.
    pub fn frighten(&mut self) -> Transition {
        let old = if self.is_frightened() { self.schedule_mode() } else { self.mode };
        self.mode = GhostMode::Blue;
        self.frighten_timer = self.frighten_time;
        self.remaining_blinks = self.blinks as i32;
        Transition { old, new: self.mode }
    }
}
