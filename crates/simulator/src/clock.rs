//! Host wall clock → displayed clock value.
//!
//! The only place chrono appears; the model itself never reads a clock.

use chrono::{Datelike, Local, Timelike};
use ui::clock::{CalendarDate, ClockValue, TimeOfDay};

/// The current local time and date as the panel displays them.
// Calendar fields are bounded (hour < 24, day <= 31, month <= 12); the
// narrowing casts cannot truncate.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn local_clock() -> ClockValue {
    let now = Local::now();
    ClockValue {
        time: TimeOfDay::new(now.hour() as u8, now.minute() as u8, now.second() as u8),
        date: CalendarDate::new(
            now.day() as u8,
            now.month() as u8,
            u16::try_from(now.year()).unwrap_or(0),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::local_clock;

    #[test]
    fn test_local_clock_fields_in_range() {
        let clock = local_clock();
        assert!(clock.time.hour <= 23);
        assert!(clock.time.minute <= 59);
        assert!((1..=31).contains(&clock.date.day));
        assert!((1..=12).contains(&clock.date.month));
        assert!(clock.date.year >= 2000);
    }

    #[test]
    fn test_formats_do_not_panic() {
        let clock = local_clock();
        assert_eq!(clock.time.format_hhmm().len(), 5);
        assert_eq!(clock.date.format_numeric().len(), 10);
    }
}
