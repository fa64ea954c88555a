//! GPIO input sampling.
//!
//! All three lines are active-low with internal pull-ups. The radio's PTT
//! circuit keys the PTT line to ground while transmitting (a radio normally
//! provides its own pull-up; the internal one also covers bench use with a
//! bare switch). Raw levels only - debouncing is the library's job.

use embassy_nrf::gpio::{AnyPin, Input, Pull};

use ptt_timer::timer::Inputs;

/// The three input lines, sampled once per poll.
pub struct InputPins<'d> {
    ptt: Input<'d>,
    button_a: Input<'d>,
    button_b: Input<'d>,
}

impl<'d> InputPins<'d> {
    pub fn new(ptt: AnyPin, button_a: AnyPin, button_b: AnyPin) -> Self {
        Self {
            ptt: Input::new(ptt, Pull::Up),
            button_a: Input::new(button_a, Pull::Up),
            button_b: Input::new(button_b, Pull::Up),
        }
    }

    /// Read the raw levels, mapped to logical polarity (low = asserted).
    pub fn sample(&self) -> Inputs {
        Inputs {
            ptt_asserted: self.ptt.is_low(),
            button_a_pressed: self.button_a.is_low(),
            button_b_pressed: self.button_b.is_low(),
        }
    }
}
