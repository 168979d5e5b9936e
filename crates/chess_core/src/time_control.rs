//! Clock snapshot handed to an engine once per move.
//!
//! The engines read the clock a single time, before searching, and pick a
//! depth from it. Nothing polls the clock while a search runs.

use std::time::Duration;

/// Remaining and elapsed time for the side about to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock {
    /// Time left on the mover's clock
    pub remaining: Duration,
    /// Increment added after each move
    pub increment: Duration,
    /// Time the mover has already spent this game
    pub elapsed: Duration,
}

impl Clock {
    /// A clock with `remaining` time left and no increment.
    pub fn remaining(remaining: Duration) -> Self {
        Self {
            remaining,
            increment: Duration::ZERO,
            elapsed: Duration::ZERO,
        }
    }

    pub fn from_millis(remaining_ms: u64) -> Self {
        Self::remaining(Duration::from_millis(remaining_ms))
    }

    pub fn with_increment(mut self, increment: Duration) -> Self {
        self.increment = increment;
        self
    }

    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = elapsed;
        self
    }

    /// Clock for analysis without a time limit.
    pub fn unlimited() -> Self {
        Self::remaining(Duration::MAX)
    }

    pub fn is_unlimited(&self) -> bool {
        self.remaining == Duration::MAX
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::unlimited()
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
