//! Unified error type for ptt-timer.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging when the
//! `defmt` feature is enabled; the host-test build stays defmt-free.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Configuration
    /// The timeout cycle list is empty; nothing to count down from.
    /// Fatal at startup.
    EmptyTimeoutList,

    // UI / Display
    /// I²C transaction to the display failed during init.
    Display,
}
