//! SSD1306 OLED display wrapper.
//!
//! Layout, top to bottom: date line, local time line, UTC time line, and a
//! large banner line (countdown / timeout preview / sound state). Draw
//! failures after init are ignored per call - a flaky I²C display must not
//! wedge the poll loop.

use core::fmt::Write;

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10};
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

use ptt_timer::clock::ClockReadout;
use ptt_timer::error::Error;
use ptt_timer::timer::Banner;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Initialise the SSD1306 display and clear the screen.
///
/// Init failure is fatal: a timer without a display is useless, so the
/// caller aborts and lets the supervisor deal with it.
pub fn init<I2C>(i2c: I2C) -> Result<Display<I2C>, Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    display.init().map_err(|_| Error::Display)?;
    display.clear_buffer();
    display.flush().map_err(|_| Error::Display)?;
    Ok(display)
}

fn text_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

fn banner_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_10X20)
        .text_color(BinaryColor::On)
        .build()
}

/// Render one full frame: clock lines plus the banner line.
pub fn draw_frame<I2C>(display: &mut Display<I2C>, clock: &ClockReadout, banner: Banner)
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();

    let _ = Text::new(clock.date.as_str(), Point::new(0, 10), text_style()).draw(display);

    let mut line: heapless::String<16> = heapless::String::new();
    let _ = write!(line, "LOC {} {}", clock.local_dow, clock.local_hms);
    let _ = Text::new(line.as_str(), Point::new(0, 22), text_style()).draw(display);

    line.clear();
    let _ = write!(line, "UTC {} {}", clock.utc_dow, clock.utc_hms);
    let _ = Text::new(line.as_str(), Point::new(0, 34), text_style()).draw(display);

    let mut big: heapless::String<12> = heapless::String::new();
    match banner {
        Banner::Blank => {}
        Banner::Countdown { secs, visible } => {
            if visible {
                let _ = write!(big, "  {} s", secs);
            }
        }
        Banner::Sound(on) => {
            let _ = write!(big, "Sound {}", if on { "on" } else { "off" });
        }
        Banner::TimeoutPreview(secs) => {
            let _ = write!(big, "T/O {} s", secs);
        }
    }
    if !big.is_empty() {
        let _ = Text::new(big.as_str(), Point::new(0, 58), banner_style()).draw(display);
    }

    let _ = display.flush();
}
