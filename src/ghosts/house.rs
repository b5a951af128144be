//! Bookkeeping for the ghosts waiting inside the pen.

use std::time::Duration;

use smallvec::SmallVec;

use crate::ghost::GhostType;

/// How pellets eaten by Pac-Man are turned into pen releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleasePolicy {
    /// Each ghost counts its own pellets; only the ghost at the head of the queue counts.
    PerGhost,
    /// One shared counter, used after Pac-Man lost a life.
    Global { count: u32 },
}

/// The pen queue, ordered by ghost id, with the release policy and force timer.
///
/// Blinky never waits here.
#[derive(Debug, Clone)]
pub struct House {
    queue: SmallVec<[GhostType; 3]>,
    pub policy: ReleasePolicy,
    /// Time since the last pellet or release.
    pub force_timer: Duration,
}

impl House {
    pub fn new(policy: ReleasePolicy) -> Self {
        Self {
            queue: SmallVec::new(),
            policy,
            force_timer: Duration::ZERO,
        }
    }

    /// Adds a ghost in id order. Returns false for Blinky or a ghost already waiting.
    pub fn enqueue(&mut self, ghost_type: GhostType) -> bool {
        if ghost_type == GhostType::Blinky || self.queue.contains(&ghost_type) {
            return false;
        }
        let index = self.queue.partition_point(|waiting| waiting.id() < ghost_type.id());
        self.queue.insert(index, ghost_type);
        true
    }

    /// The ghost next in line for release.
    pub fn head(&self) -> Option<GhostType> {
        self.queue.first().copied()
    }

    pub fn remove(&mut self, ghost_type: GhostType) -> bool {
        match self.queue.iter().position(|&waiting| waiting == ghost_type) {
            Some(index) => {
                self.queue.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn queue(&self) -> &[GhostType] {
        &self.queue
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
