//! Business-hours lookup for the contact and header widgets.

use chrono::{DateTime, Datelike, NaiveTime, Utc, Weekday};
use serde::{Deserialize, Serialize};

/// Opening window for a single day. Closing time is exclusive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DayHours {
    pub open: NaiveTime,
    pub close: NaiveTime,
}

/// Weekly schedule, Monday first. `None` marks a closed day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessHours {
    days: [Option<DayHours>; 7],
}

impl Default for BusinessHours {
    /// Mon-Sat 08:00-18:00, closed Sunday.
    fn default() -> Self {
        let weekday = DayHours {
            open: NaiveTime::from_hms_opt(8, 0, 0).unwrap_or_default(),
            close: NaiveTime::from_hms_opt(18, 0, 0).unwrap_or_default(),
        };
        Self {
            days: [
                Some(weekday),
                Some(weekday),
                Some(weekday),
                Some(weekday),
                Some(weekday),
                Some(weekday),
                None,
            ],
        }
    }
}

impl BusinessHours {
    pub fn new(days: [Option<DayHours>; 7]) -> Self {
        Self { days }
    }

    pub fn hours_for(&self, day: Weekday) -> Option<DayHours> {
        self.days[day.num_days_from_monday() as usize]
    }

    /// Whether the shop is open at the given instant. The window is
    /// half-open: open at `open`, closed again at `close`.
    pub fn is_open_at(&self, at: DateTime<Utc>) -> bool {
        match self.hours_for(at.weekday()) {
            Some(hours) => {
                let time = at.time();
                time >= hours.open && time < hours.close
            }
            None => false,
        }
    }

    /// Display string for the hours widget, e.g. "08:00 - 18:00".
    pub fn display_for(&self, day: Weekday) -> String {
        match self.hours_for(day) {
            Some(hours) => format!(
                "{} - {}",
                hours.open.format("%H:%M"),
                hours.close.format("%H:%M")
            ),
            None => "Closed".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_open_weekday_morning() {
        let hours = BusinessHours::default();
        // Monday 2024-06-03, 10:15.
        let at = Utc.with_ymd_and_hms(2024, 6, 3, 10, 15, 0).unwrap();
        assert!(hours.is_open_at(at));
    }

    #[test]
    fn test_closed_sunday() {
        let hours = BusinessHours::default();
        let at = Utc.with_ymd_and_hms(2024, 6, 2, 10, 15, 0).unwrap();
        assert!(!hours.is_open_at(at));
        assert_eq!(hours.display_for(Weekday::Sun), "Closed");
    }

    #[test]
    fn test_closing_minute_is_exclusive() {
        let hours = BusinessHours::default();
        let before_close = Utc.with_ymd_and_hms(2024, 6, 3, 17, 59, 59).unwrap();
        let at_close = Utc.with_ymd_and_hms(2024, 6, 3, 18, 0, 0).unwrap();
        assert!(hours.is_open_at(before_close));
        assert!(!hours.is_open_at(at_close));
    }

    #[test]
    fn test_display_format() {
        let hours = BusinessHours::default();
        assert_eq!(hours.display_for(Weekday::Wed), "08:00 - 18:00");
    }
}
