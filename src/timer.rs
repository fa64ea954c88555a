//! Top-level timer state machine: one `tick` per poll.
//!
//! This is the whole control flow of the device with the I/O peeled off.
//! Inputs are the raw GPIO levels plus a monotonic millisecond clock;
//! the output is what the banner line should show and whether the buzzer
//! should sound. The main loop owns the hardware on both sides.

use crate::button::{Button, ButtonEdge};
use crate::countdown::{Countdown, Phase};
use crate::error::Error;

/// Raw input levels for one poll, already mapped to logical polarity
/// (true = asserted/pressed).
#[derive(Clone, Copy, Debug, Default)]
pub struct Inputs {
    pub ptt_asserted: bool,
    pub button_a_pressed: bool,
    pub button_b_pressed: bool,
}

/// Content of the display's banner line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Banner {
    /// Nothing to show; idle with no button held.
    Blank,
    /// Transmission countdown. `visible` carries the blink phase: the
    /// digits blink through the warn window and while expired.
    Countdown { secs: u32, visible: bool },
    /// Sound on/off, shown while button A is held.
    Sound(bool),
    /// Selected timeout (seconds), shown while button B is held.
    TimeoutPreview(u32),
}

/// Result of one poll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickOutput {
    pub banner: Banner,
    pub buzzer_on: bool,
}

/// All mutable state of the device.
#[derive(Debug)]
pub struct TimerState {
    timeouts: &'static [u32],
    timeout_index: usize,
    sound_enabled: bool,
    button_a: Button,
    button_b: Button,
    countdown: Countdown,
}

impl TimerState {
    /// `timeouts` is the cycle list for button B; it must be non-empty.
    pub fn new(
        timeouts: &'static [u32],
        sound_default_on: bool,
        debounce_polls: u8,
    ) -> Result<Self, Error> {
        if timeouts.is_empty() {
            return Err(Error::EmptyTimeoutList);
        }
        Ok(Self {
            timeouts,
            timeout_index: 0,
            sound_enabled: sound_default_on,
            button_a: Button::new(debounce_polls),
            button_b: Button::new(debounce_polls),
            countdown: Countdown::new(),
        })
    }

    /// Currently selected timeout in seconds.
    pub fn selected_timeout_secs(&self) -> u32 {
        self.timeouts[self.timeout_index]
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    pub fn phase(&self) -> Phase {
        self.countdown.phase()
    }

    /// Advance one poll: consume the raw inputs at monotonic time `now_ms`,
    /// produce the banner and buzzer command for this iteration.
    pub fn tick(&mut self, inputs: Inputs, now_ms: u64) -> TickOutput {
        self.countdown
            .tick(inputs.ptt_asserted, self.selected_timeout_secs(), now_ms);

        if inputs.ptt_asserted {
            return self.transmit_output(now_ms);
        }

        // Buttons are serviced only with PTT open, B before A, as on the
        // deployed unit. A press held across PTT release fires on the first
        // poll after release.
        let edge_b = self.button_b.update(inputs.button_b_pressed);
        if edge_b == ButtonEdge::Pressed {
            self.timeout_index = (self.timeout_index + 1) % self.timeouts.len();
        }
        let banner = if self.button_b.is_down() {
            Banner::TimeoutPreview(self.selected_timeout_secs())
        } else {
            let edge_a = self.button_a.update(inputs.button_a_pressed);
            if edge_a == ButtonEdge::Pressed {
                self.sound_enabled = !self.sound_enabled;
            }
            if self.button_a.is_down() {
                Banner::Sound(self.sound_enabled)
            } else {
                Banner::Blank
            }
        };

        TickOutput {
            banner,
            buzzer_on: false,
        }
    }

    fn transmit_output(&self, now_ms: u64) -> TickOutput {
        let remaining = self.countdown.remaining_secs();
        let blink_on = (now_ms / crate::config::BLINK_PERIOD_MS) % 2 == 0;
        match self.countdown.phase() {
            Phase::Expired => TickOutput {
                banner: Banner::Countdown {
                    secs: 0,
                    visible: blink_on,
                },
                // Buzzer pulses in antiphase with the digits: it sounds
                // while the display is blanked.
                buzzer_on: self.sound_enabled && !blink_on,
            },
            _ => TickOutput {
                banner: Banner::Countdown {
                    secs: remaining,
                    visible: remaining > crate::config::WARN_SECS || blink_on,
                },
                buzzer_on: false,
            },
        }
    }
}
