//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and timer behavior
//! constants live here so they can be tuned in one place.

// Countdown timer

/// Countdown durations (seconds) cycled by button B, in cycle order.
/// The first entry is selected at power-on. Chosen for repeaters with
/// 90/60/30 second timeouts plus a short demo value.
pub const TIMEOUT_CYCLE_SECS: [u32; 4] = [90, 60, 30, 15];

/// The countdown digits blink during the last `WARN_SECS` seconds of a
/// transmission as a visual pre-warning. The buzzer stays off until expiry.
pub const WARN_SECS: u32 = 5;

/// Sound alert state at power-on. Toggled at runtime with button A.
pub const SOUND_DEFAULT_ON: bool = true;

// Timing

/// Poll period of the main loop (ms). Inputs are sampled and the display
/// refreshed once per period.
pub const POLL_PERIOD_MS: u64 = 50;

/// Consecutive identical polls required before a button level change is
/// believed. 3 polls at 50 ms masks mechanical contact bounce.
pub const DEBOUNCE_POLLS: u8 = 3;

/// Blink half-period (ms) for the expired and warn displays (~1.5 Hz).
pub const BLINK_PERIOD_MS: u64 = 333;

// Buzzer

/// Passive buzzer drive frequency (Hz). Roughly middle C.
pub const BUZZER_FREQ_HZ: u32 = 262;

// Clock

/// Minutes to add to UTC for the local time display. No DST handling;
/// reflash to change.
pub const UTC_OFFSET_MINUTES: i32 = 0;

/// Unix time (UTC seconds) assumed at boot. The board has no battery-backed
/// RTC, so wall time is seeded here at provisioning; drift and sync are the
/// environment's problem.
pub const CLOCK_SEED_UNIX: i64 = 0;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   PTT input      → P0.03  (active low; radio keys it to ground)
//   Button A/sound → P0.11  (active low, internal pull-up)
//   Button B/T-O   → P0.12  (active low, internal pull-up)
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27
//   Buzzer PWM     → P0.08
