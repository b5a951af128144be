//! Turns wall-clock frame times into movement speed multipliers.

use std::time::{Duration, Instant};

use tracing::warn;

use crate::constants::{LOOP_TIME, MAX_FRAME_SPEED};

/// The speed multiplier for a frame that took `elapsed`, or `None` if the frame is too
/// far behind to simulate in one step.
pub fn frame_speed(elapsed: Duration) -> Option<f32> {
    let speed = elapsed.as_secs_f32() / LOOP_TIME.as_secs_f32();
    (speed <= MAX_FRAME_SPEED).then_some(speed)
}

/// Tracks the time between frames.
#[derive(Debug, Default)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a frame at `now`, returning the elapsed time and speed multiplier to simulate.
    ///
    /// The first frame simulates one reference frame. A dropped frame returns `None`
    /// and restarts the measurement from `now`.
    pub fn tick(&mut self, now: Instant) -> Option<(Duration, f32)> {
        let elapsed = match self.last.replace(now) {
            Some(last) => now.saturating_duration_since(last),
            None => LOOP_TIME,
        };

        match frame_speed(elapsed) {
            Some(speed) => Some((elapsed, speed)),
            None => {
                warn!(elapsed = ?elapsed, "Frame too far behind, dropped");
                None
            }
        }
    }
}
