//! Consecutive-sample debounce filter.
//!
//! A mechanical switch chatters for a few milliseconds around each edge.
//! The filter accepts a level change only after the new level has been read
//! on `threshold` consecutive polls; any reversion restarts the count. The
//! rule is symmetric, so both press and release are debounced.

/// Debounced view of one digital input, updated once per poll.
#[derive(Clone, Copy, Debug)]
pub struct Debouncer {
    stable: bool,
    candidate: bool,
    run: u8,
    threshold: u8,
}

impl Debouncer {
    /// Create a filter reporting `initial` until the input proves otherwise.
    /// `threshold` is clamped to at least one poll.
    pub fn new(initial: bool, threshold: u8) -> Self {
        Self {
            stable: initial,
            candidate: initial,
            run: 0,
            threshold: threshold.max(1),
        }
    }

    /// Feed one raw sample; returns the debounced level.
    pub fn update(&mut self, raw: bool) -> bool {
        if raw == self.stable {
            // Back at the believed level; forget any partial run.
            self.candidate = raw;
            self.run = 0;
        } else if raw == self.candidate {
            self.run += 1;
            if self.run >= self.threshold {
                self.stable = raw;
                self.run = 0;
            }
        } else {
            self.candidate = raw;
            self.run = 1;
            if self.run >= self.threshold {
                self.stable = raw;
                self.run = 0;
            }
        }
        self.stable
    }

    /// Current debounced level without feeding a sample.
    pub fn level(&self) -> bool {
        self.stable
    }
}
