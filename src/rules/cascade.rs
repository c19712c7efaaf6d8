//! The queue of cells waiting to explode.
//!
//! A cell is queued when its value reaches the critical mass. The queue
//! keeps insertion order (waves resolve in that order) and holds each
//! position at most once, so a cell hit twice before it explodes still
//! explodes only once.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::Position;

/// Ordered, de-duplicated set of four-pieces.
#[derive(Clone, Debug, Default)]
pub struct CascadeQueue {
    order: Vec<Position>,
    members: FxHashSet<Position>,
}

impl CascadeQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a position. Returns false if it was already queued.
    pub fn push(&mut self, pos: Position) -> bool {
        if self.members.insert(pos) {
            self.order.push(pos);
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.members.contains(&pos)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Queued positions in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[Position] {
        &self.order
    }

    /// Take the current generation, leaving the queue empty.
    pub fn take_wave(&mut self) -> Vec<Position> {
        self.members.clear();
        std::mem::take(&mut self.order)
    }
}

/// What one cascade wave did.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaveReport {
    /// Cells that exploded this wave, in resolution order.
    pub exploded: Vec<Position>,
    /// Cells that reached critical mass during this wave.
    pub newly_queued: Vec<Position>,
    /// Cells whose owner changed to the mover during this wave
    /// (excluding cells that exploded and were refilled).
    pub captured: Vec<Position>,
}

impl WaveReport {
    /// Whether another wave must follow.
    #[must_use]
    pub fn continues(&self) -> bool {
        !self.newly_queued.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_dedups() {
        let mut queue = CascadeQueue::new();

        assert!(queue.push(Position::new(1, 1)));
        assert!(queue.push(Position::new(0, 2)));
        assert!(!queue.push(Position::new(1, 1)));

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.as_slice(), &[Position::new(1, 1), Position::new(0, 2)]);
    }

    #[test]
    fn test_take_wave_empties() {
        let mut queue = CascadeQueue::new();
        queue.push(Position::new(2, 2));
        queue.push(Position::new(0, 0));

        let wave = queue.take_wave();

        assert_eq!(wave, vec![Position::new(2, 2), Position::new(0, 0)]);
        assert!(queue.is_empty());
        assert!(!queue.contains(Position::new(2, 2)));

        // Can be queued again after being taken
        assert!(queue.push(Position::new(2, 2)));
    }
}
