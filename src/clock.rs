//! Wall-clock display: 12-hour formatting and second-change debouncing.
//!
//! The clock string is `"H:MM"` — a 12-hour hour with no leading zero (hour 0
//! maps to 12) and a zero-padded minute. Seconds are not displayed, but they
//! drive the re-render cadence: [`Clock::tick`] reports a change only when the
//! observed second differs from the last one, so redundant redraws are skipped
//! even though the loop polls every frame.

use core::fmt::Write;

use chrono::Timelike;
use heapless::String;

/// Format an hour/minute pair as a 12-hour `"H:MM"` clock string.
///
/// `hour24` is the 24-hour clock hour (0-23); 0 and 12 both render as `12`.
pub fn format_clock(
    hour24: u32,
    minute: u32,
) -> String<8> {
    let hour12 = if hour24 % 12 == 0 { 12 } else { hour24 % 12 };
    let mut s: String<8> = String::new();
    let _ = write!(s, "{hour12}:{minute:02}");
    s
}

/// Format any [`Timelike`] value (e.g. `chrono::NaiveTime`) as `"H:MM"`.
pub fn format_clock_time<T: Timelike>(time: &T) -> String<8> { format_clock(time.hour(), time.minute()) }

/// Tracks the last displayed second so the clock redraws only on change.
#[derive(Default)]
pub struct Clock {
    last_second: Option<u32>,
}

impl Clock {
    pub const fn new() -> Self { Self { last_second: None } }

    /// Observe the current time. Returns `true` if the displayed second
    /// changed since the previous observation (always true on the first call).
    pub fn tick<T: Timelike>(
        &mut self,
        now: &T,
    ) -> bool {
        let second = now.second();
        let changed = self.last_second != Some(second);
        self.last_second = Some(second);
        changed
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
