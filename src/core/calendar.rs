//! Wall-clock calendar for event windows
//!
//! Provides weekdays and a `{day_of_week, hour}` reading used by the
//! guild war schedule. Day numbering starts at Sunday = 0.

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

/// Day of the week, Sunday first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Map a numeric day (Sunday = 0) to a weekday. Out of range yields None.
    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn index(&self) -> u32 {
        *self as u32
    }

    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Sunday => "sunday",
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Sun => Weekday::Sunday,
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
        }
    }
}

/// A reading of the host clock at hour granularity
///
/// `day_of_week` is kept raw so that values supplied by the host outside
/// 0..=6 can still be evaluated (they fall back to Sunday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallClock {
    pub day_of_week: u32,
    pub hour: u32,
}

impl WallClock {
    pub fn new(day: Weekday, hour: u32) -> Self {
        Self {
            day_of_week: day.index(),
            hour,
        }
    }

    /// Current local time
    pub fn now() -> Self {
        Self::from_datetime(&Local::now())
    }

    pub fn from_datetime<Tz: TimeZone>(time: &DateTime<Tz>) -> Self {
        Self {
            day_of_week: time.weekday().num_days_from_sunday(),
            hour: time.hour(),
        }
    }

    /// The weekday this reading falls on, if the raw value is recognized
    pub fn weekday(&self) -> Option<Weekday> {
        Weekday::from_index(self.day_of_week)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    #[test]
    fn test_weekday_from_index() {
        assert_eq!(Weekday::from_index(0), Some(Weekday::Sunday));
        assert_eq!(Weekday::from_index(2), Some(Weekday::Tuesday));
        assert_eq!(Weekday::from_index(6), Some(Weekday::Saturday));
        assert_eq!(Weekday::from_index(7), None);
    }

    #[test]
    fn test_weekday_index_round_trips() {
        for day in Weekday::ALL {
            assert_eq!(Weekday::from_index(day.index()), Some(day));
        }
    }

    #[test]
    fn test_wall_clock_from_datetime() {
        // 2024-01-02 was a Tuesday
        let time = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(11, 30, 0)
            .unwrap()
            .and_utc();
        let clock = WallClock::from_datetime(&time);
        assert_eq!(clock.weekday(), Some(Weekday::Tuesday));
        assert_eq!(clock.hour, 11);
    }

    #[test]
    fn test_wall_clock_now_is_in_range() {
        let clock = WallClock::from_datetime(&Utc::now());
        assert!(clock.weekday().is_some());
        assert!(clock.hour < 24);
        assert!(WallClock::now().hour < 24);
    }
}
