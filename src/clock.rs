//! Wall-clock tracking and display formatting.
//!
//! The board has no battery-backed RTC, so wall time is a Unix seed mapped
//! onto the monotonic millisecond clock. Keeping it synchronized is the
//! environment's job; the timer only reads it.
//!
//! Formatting writes into fixed-capacity strings, no alloc. The string
//! shapes match the deployed unit: full month date line, three-letter
//! weekday, `HH:MM:SS` for both local and UTC.

use chrono::{DateTime, Datelike, Duration, Timelike, Utc};
use core::fmt::Write;
use heapless::String;

/// Unix time derived from the monotonic clock.
#[derive(Clone, Copy, Debug)]
pub struct WallClock {
    unix_at_ref: i64,
    ref_ms: u64,
}

impl WallClock {
    /// `seed_unix` is the UTC Unix time corresponding to monotonic `now_ms`.
    pub fn new(seed_unix: i64, now_ms: u64) -> Self {
        Self {
            unix_at_ref: seed_unix,
            ref_ms: now_ms,
        }
    }

    /// Re-seed, e.g. after an external time fix.
    pub fn set(&mut self, unix_secs: i64, now_ms: u64) {
        self.unix_at_ref = unix_secs;
        self.ref_ms = now_ms;
    }

    /// Current UTC Unix seconds.
    pub fn unix_now(&self, now_ms: u64) -> i64 {
        self.unix_at_ref + (now_ms.saturating_sub(self.ref_ms) / 1000) as i64
    }
}

/// The five clock strings the display shows each refresh.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClockReadout {
    /// e.g. "March 09, 2025"
    pub date: String<20>,
    /// e.g. "Sun"
    pub local_dow: String<3>,
    /// e.g. "14:03:05"
    pub local_hms: String<8>,
    pub utc_dow: String<3>,
    pub utc_hms: String<8>,
}

impl ClockReadout {
    /// Build the readout for the given UTC Unix time. The date line follows
    /// local time. Out-of-range timestamps fall back to the epoch rather
    /// than failing a display refresh.
    pub fn from_unix(utc_secs: i64, utc_offset_minutes: i32) -> Self {
        let utc = DateTime::<Utc>::from_timestamp(utc_secs, 0)
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH);
        let local = utc + Duration::minutes(utc_offset_minutes as i64);

        let mut date = String::new();
        let _ = write!(
            date,
            "{} {:02}, {}",
            month_name(local.month()),
            local.day(),
            local.year()
        );

        Self {
            date,
            local_dow: dow(&local),
            local_hms: hms(&local),
            utc_dow: dow(&utc),
            utc_hms: hms(&utc),
        }
    }
}

fn dow(dt: &DateTime<Utc>) -> String<3> {
    let mut s = String::new();
    // chrono's Weekday Display is the three-letter abbreviation.
    let _ = write!(s, "{}", dt.weekday());
    s
}

fn hms(dt: &DateTime<Utc>) -> String<8> {
    let mut s = String::new();
    let _ = write!(s, "{:02}:{:02}:{:02}", dt.hour(), dt.minute(), dt.second());
    s
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "?",
    }
}
