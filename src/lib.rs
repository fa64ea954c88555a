//! Pure-logic library for ptt-timer.
//!
//! Everything that can run without hardware lives here: debouncing, button
//! edge detection, the transmission countdown, the per-poll `tick`, and
//! wall-clock formatting. All of it is tested on the host with
//! `cargo test` (no embedded hardware required).
//!
//! The embedded binary uses main.rs with #![no_std] and #![no_main] and is
//! gated behind the `embedded` cargo feature; it owns the GPIO, display,
//! and buzzer and feeds this library once per poll.

#![cfg_attr(not(test), no_std)]

pub mod button;
pub mod clock;
pub mod config;
pub mod countdown;
pub mod debounce;
pub mod error;
pub mod timer;

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
