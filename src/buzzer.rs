//! Passive buzzer on one PWM channel.
//!
//! A passive buzzer needs a drive frequency; ~262 Hz (middle C), carried
//! over from the deployed unit. On/off is just duty 50 % / 0.

use embassy_nrf::pwm::{Instance, Prescaler, SimplePwm};

use ptt_timer::config::BUZZER_FREQ_HZ;

pub struct Buzzer<'d, T: Instance> {
    pwm: SimplePwm<'d, T>,
    top: u16,
}

impl<'d, T: Instance> Buzzer<'d, T> {
    /// Wrap a single-channel PWM as a fixed-frequency buzzer, initially off.
    pub fn new(mut pwm: SimplePwm<'d, T>) -> Self {
        // 16 MHz / 128 = 125 kHz PWM clock; counter top sets the tone.
        let top = (125_000 / BUZZER_FREQ_HZ) as u16;
        pwm.set_prescaler(Prescaler::Div128);
        pwm.set_max_duty(top);
        pwm.set_duty(0, 0);
        Self { pwm, top }
    }

    pub fn set(&mut self, on: bool) {
        self.pwm.set_duty(0, if on { self.top / 2 } else { 0 });
    }
}
