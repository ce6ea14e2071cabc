//! Time sources and the two clock-derived display strings.
//!
//! The screen never reads the wall clock directly: it goes through a
//! [`TimeSource`] so formatting and descriptor logic can be exercised with a
//! [`ManualClock`].

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local, Timelike};
use parking_lot::Mutex;

/// Provides the current local time
pub trait TimeSource: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Reads the host wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same instant.
#[derive(Debug, Clone)]
pub struct ManualClock {
    current: Arc<Mutex<DateTime<Local>>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Local>) -> Self {
        Self {
            current: Arc::new(Mutex::new(start)),
        }
    }

    pub fn set(&self, instant: DateTime<Local>) {
        *self.current.lock() = instant;
    }

    pub fn advance(&self, by: Duration) {
        let mut current = self.current.lock();
        *current += chrono::Duration::from_std(by).unwrap_or(chrono::Duration::zero());
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> DateTime<Local> {
        *self.current.lock()
    }
}

/// Coarse time-of-day label derived from the hour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayDescriptor {
    QuietNight,
    BrightMorning,
    CoffeeAfternoon,
    WarmEvening,
    LivelyNight,
}

impl DayDescriptor {
    /// Map an hour of the day (0-23) to its descriptor.
    ///
    /// Brackets are checked in ascending order, lower bound inclusive.
    /// Hours past 23 fall into the last bracket.
    pub fn from_hour(hour: u32) -> Self {
        if hour < 5 {
            DayDescriptor::QuietNight
        } else if hour < 12 {
            DayDescriptor::BrightMorning
        } else if hour < 17 {
            DayDescriptor::CoffeeAfternoon
        } else if hour < 21 {
            DayDescriptor::WarmEvening
        } else {
            DayDescriptor::LivelyNight
        }
    }

    pub fn of<T: Timelike>(time: &T) -> Self {
        Self::from_hour(time.hour())
    }

    /// Arabic label shown under the clock
    pub fn label(&self) -> &'static str {
        match self {
            DayDescriptor::QuietNight => "ليلة هادئة",
            DayDescriptor::BrightMorning => "صباح منير",
            DayDescriptor::CoffeeAfternoon => "ظهيرة بنكهة القهوة",
            DayDescriptor::WarmEvening => "مساء دافئ",
            DayDescriptor::LivelyNight => "سهرة ماتعة",
        }
    }
}

impl std::fmt::Display for DayDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

const MARKER_AM: &str = "ص";
const MARKER_PM: &str = "م";

/// Short Arabic-locale time: numeric 12-hour hour, two-digit minute and a
/// day-period marker, e.g. `3:05 م`.
///
/// Digits are Latin, the default numbering system of the plain `ar` locale.
pub fn format_time<T: Timelike>(time: &T) -> String {
    let (is_pm, hour) = time.hour12();
    let marker = if is_pm { MARKER_PM } else { MARKER_AM };
    format!("{}:{:02} {}", hour, time.minute(), marker)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_format_afternoon() {
        assert_eq!(format_time(&at(15, 5)), "3:05 م");
    }

    #[test]
    fn test_format_midnight_and_noon() {
        assert_eq!(format_time(&at(0, 0)), "12:00 ص");
        assert_eq!(format_time(&at(12, 30)), "12:30 م");
    }

    #[test]
    fn test_format_two_digit_hour_morning() {
        assert_eq!(format_time(&at(10, 47)), "10:47 ص");
    }

    #[test]
    fn test_format_uses_latin_digits() {
        let formatted = format_time(&at(21, 9));
        assert_eq!(formatted, "9:09 م");
        assert!(formatted
            .chars()
            .all(|c| c.is_ascii_digit() || c == ':' || c == ' ' || c == 'م'));
    }

    #[test]
    fn test_format_ignores_seconds() {
        let a = NaiveTime::from_hms_opt(9, 1, 0).unwrap();
        let b = NaiveTime::from_hms_opt(9, 1, 59).unwrap();
        assert_eq!(format_time(&a), format_time(&b));
    }

    #[test]
    fn test_descriptor_boundaries() {
        let cases = [
            (0, DayDescriptor::QuietNight),
            (4, DayDescriptor::QuietNight),
            (5, DayDescriptor::BrightMorning),
            (11, DayDescriptor::BrightMorning),
            (12, DayDescriptor::CoffeeAfternoon),
            (16, DayDescriptor::CoffeeAfternoon),
            (17, DayDescriptor::WarmEvening),
            (20, DayDescriptor::WarmEvening),
            (21, DayDescriptor::LivelyNight),
            (23, DayDescriptor::LivelyNight),
        ];
        for (hour, expected) in cases {
            assert_eq!(DayDescriptor::from_hour(hour), expected, "hour {hour}");
        }
    }

    #[test]
    fn test_descriptor_labels() {
        assert_eq!(DayDescriptor::of(&at(3, 0)).label(), "ليلة هادئة");
        assert_eq!(DayDescriptor::of(&at(14, 0)).to_string(), "ظهيرة بنكهة القهوة");
    }

    #[test]
    fn test_manual_clock_shared_between_clones() {
        let start = Local::now();
        let clock = ManualClock::new(start);
        let other = clock.clone();
        clock.advance(Duration::from_secs(60));
        assert_eq!(other.now(), start + chrono::Duration::seconds(60));
    }
}
