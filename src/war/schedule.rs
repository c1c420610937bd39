//! Weekly guild war schedule

use serde::{Deserialize, Serialize};

use crate::core::calendar::{WallClock, Weekday};
use crate::core::error::{Result, WarError};

/// Highest hour value accepted in a schedule
pub const MAX_HOUR: u8 = 23;

/// Event window for one day. Half-open: `[start_hour, end_hour)`.
///
/// A window with `start_hour >= end_hour` never matches; windows do not
/// wrap around midnight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventTime {
    pub enabled: bool,
    pub start_hour: u8,
    pub end_hour: u8,
}

impl EventTime {
    pub fn new(start_hour: u8, end_hour: u8) -> Self {
        Self {
            enabled: true,
            start_hour,
            end_hour,
        }
    }

    pub fn off() -> Self {
        Self::default()
    }

    pub fn contains_hour(&self, hour: u32) -> bool {
        self.enabled && hour >= u32::from(self.start_hour) && hour < u32::from(self.end_hour)
    }

    /// Enabled but unable to match any hour
    pub fn is_empty_window(&self) -> bool {
        self.enabled && self.start_hour >= self.end_hour
    }
}

/// One event window per weekday
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventSchedule {
    pub sunday: EventTime,
    pub monday: EventTime,
    pub tuesday: EventTime,
    pub wednesday: EventTime,
    pub thursday: EventTime,
    pub friday: EventTime,
    pub saturday: EventTime,
}

impl EventSchedule {
    /// Same window on every day
    pub fn every_day(time: EventTime) -> Self {
        Self {
            sunday: time,
            monday: time,
            tuesday: time,
            wednesday: time,
            thursday: time,
            friday: time,
            saturday: time,
        }
    }

    pub fn with_day(mut self, day: Weekday, time: EventTime) -> Self {
        *self.day_mut(day) = time;
        self
    }

    pub fn day(&self, day: Weekday) -> &EventTime {
        match day {
            Weekday::Sunday => &self.sunday,
            Weekday::Monday => &self.monday,
            Weekday::Tuesday => &self.tuesday,
            Weekday::Wednesday => &self.wednesday,
            Weekday::Thursday => &self.thursday,
            Weekday::Friday => &self.friday,
            Weekday::Saturday => &self.saturday,
        }
    }

    pub fn day_mut(&mut self, day: Weekday) -> &mut EventTime {
        match day {
            Weekday::Sunday => &mut self.sunday,
            Weekday::Monday => &mut self.monday,
            Weekday::Tuesday => &mut self.tuesday,
            Weekday::Wednesday => &mut self.wednesday,
            Weekday::Thursday => &mut self.thursday,
            Weekday::Friday => &mut self.friday,
            Weekday::Saturday => &mut self.saturday,
        }
    }

    /// Window for a raw day number. Unrecognized values use Sunday's window.
    pub fn for_day_index(&self, day_of_week: u32) -> &EventTime {
        self.day(Weekday::from_index(day_of_week).unwrap_or(Weekday::Sunday))
    }

    pub fn is_active(&self, now: WallClock) -> bool {
        self.for_day_index(now.day_of_week).contains_hour(now.hour)
    }

    /// Reject hours outside 0..=23. Empty windows are allowed but logged.
    pub fn validate(&self) -> Result<()> {
        for day in Weekday::ALL {
            let time = self.day(day);
            for (label, hour) in [("start_hour", time.start_hour), ("end_hour", time.end_hour)] {
                if hour > MAX_HOUR {
                    return Err(WarError::InvalidSchedule {
                        day: day.name().to_string(),
                        reason: format!("{} ({}) must be <= {}", label, hour, MAX_HOUR),
                    });
                }
            }
            if time.is_empty_window() {
                tracing::warn!(
                    "Guild war enabled on {} but window {}..{} is empty",
                    day.name(),
                    time.start_hour,
                    time.end_hour
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuesday_only() -> EventSchedule {
        EventSchedule::default().with_day(Weekday::Tuesday, EventTime::new(10, 12))
    }

    #[test]
    fn test_window_is_half_open() {
        let schedule = tuesday_only();
        assert!(!schedule.is_active(WallClock::new(Weekday::Tuesday, 9)));
        assert!(schedule.is_active(WallClock::new(Weekday::Tuesday, 10)));
        assert!(schedule.is_active(WallClock::new(Weekday::Tuesday, 11)));
        assert!(!schedule.is_active(WallClock::new(Weekday::Tuesday, 12)));
    }

    #[test]
    fn test_other_days_inactive() {
        let schedule = tuesday_only();
        assert!(!schedule.is_active(WallClock::new(Weekday::Monday, 11)));
        assert!(!schedule.is_active(WallClock::new(Weekday::Wednesday, 11)));
    }

    #[test]
    fn test_disabled_day_never_active() {
        let time = EventTime {
            enabled: false,
            start_hour: 0,
            end_hour: 23,
        };
        let schedule = EventSchedule::every_day(time);
        for day in Weekday::ALL {
            for hour in 0..24 {
                assert!(!schedule.is_active(WallClock::new(day, hour)));
            }
        }
    }

    #[test]
    fn test_inverted_window_never_matches() {
        let schedule = EventSchedule::every_day(EventTime::new(22, 2));
        for hour in 0..24 {
            assert!(!schedule.is_active(WallClock::new(Weekday::Friday, hour)));
        }
        assert!(schedule.friday.is_empty_window());
    }

    #[test]
    fn test_unknown_weekday_falls_back_to_sunday() {
        let schedule = EventSchedule::default().with_day(Weekday::Sunday, EventTime::new(18, 20));
        let now = WallClock {
            day_of_week: 42,
            hour: 19,
        };
        assert!(schedule.is_active(now));
        assert_eq!(schedule.for_day_index(7), &schedule.sunday);
    }

    #[test]
    fn test_validate_rejects_out_of_range_hours() {
        let schedule = EventSchedule::default().with_day(Weekday::Monday, EventTime::new(10, 24));
        match schedule.validate() {
            Err(WarError::InvalidSchedule { day, .. }) => assert_eq!(day, "monday"),
            other => panic!("expected schedule error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_accepts_empty_windows() {
        let schedule = EventSchedule::every_day(EventTime::new(12, 12));
        assert!(schedule.validate().is_ok());
    }
}
