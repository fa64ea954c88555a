//! Hardware-facing user interface - OLED display + GPIO inputs.
//!
//! The poll loop in `main.rs` samples the inputs, feeds the pure state
//! machine in the library crate, and renders the result here.
//!
//! ## Components
//!
//! - **Display**: SSD1306 128×64 OLED via I²C
//! - **Inputs**: PTT line plus 2 tactile switches (A: sound, B: timeout),
//!   all active-low; debouncing happens in the library, not here

pub mod display;
pub mod inputs;
