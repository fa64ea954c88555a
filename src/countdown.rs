//! Transmission countdown state machine.
//!
//! Pure logic, no hardware dependencies. Consumes the PTT level and a
//! monotonic millisecond clock, produces the remaining time. Fully
//! testable on host.
//!
//! The remaining time is always derived from a wall-clock delta against
//! the instant PTT was keyed, never from counting poll iterations, so a
//! late poll cannot lose or gain seconds.

/// Countdown phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Not transmitting.
    Idle,
    /// Transmitting with time remaining.
    Counting,
    /// Transmitting past the timeout; alert active until PTT releases.
    Expired,
}

/// Countdown over one continuous transmission.
#[derive(Clone, Copy, Debug)]
pub struct Countdown {
    phase: Phase,
    /// Timeout snapshotted when PTT was keyed (seconds).
    timeout_secs: u32,
    /// Monotonic ms at the keying edge; meaningless in `Idle`.
    keyed_at_ms: u64,
    remaining_secs: u32,
}

impl Countdown {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            timeout_secs: 0,
            keyed_at_ms: 0,
            remaining_secs: 0,
        }
    }

    /// Advance one poll.
    ///
    /// `timeout_secs` is the currently selected timeout; it is latched on
    /// the keying edge, so changing the selection mid-transmission does not
    /// disturb an active countdown.
    pub fn tick(&mut self, ptt_active: bool, timeout_secs: u32, now_ms: u64) {
        if !ptt_active {
            self.phase = Phase::Idle;
            self.remaining_secs = 0;
            return;
        }

        if self.phase == Phase::Idle {
            // Keying edge: start a fresh countdown.
            self.phase = Phase::Counting;
            self.timeout_secs = timeout_secs;
            self.keyed_at_ms = now_ms;
            self.remaining_secs = timeout_secs;
        }

        let elapsed_secs = (now_ms.saturating_sub(self.keyed_at_ms) / 1000) as u32;
        self.remaining_secs = self.timeout_secs.saturating_sub(elapsed_secs);
        if self.remaining_secs == 0 {
            self.phase = Phase::Expired;
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Seconds left in the current transmission; 0 when idle or expired.
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}
