use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime, Weekday};

pub const REMINDER_TITLE: &str = "Weekly life-balance check";
pub const REMINDER_BODY: &str = "Take a minute to rate this week's balance!";

const REMINDER_WEEKDAY: Weekday = Weekday::Sun;
const REMINDER_HOUR: u32 = 10;

/// Next weekly check-in strictly after `now`, in the same local clock.
pub fn next_reminder(now: NaiveDateTime) -> NaiveDateTime {
    let at = NaiveTime::from_hms_opt(REMINDER_HOUR, 0, 0).unwrap_or_default();
    let days_ahead = (7 + REMINDER_WEEKDAY.num_days_from_monday()
        - now.weekday().num_days_from_monday())
        % 7;
    let candidate = (now.date() + Duration::days(i64::from(days_ahead))).and_time(at);

    if candidate > now {
        candidate
    } else {
        candidate + Duration::days(7)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn sunday_morning_fires_same_day() {
        assert_eq!(next_reminder(at(2026, 10, 18, 8, 15)), at(2026, 10, 18, 10, 0));
    }

    #[test]
    fn sunday_at_or_after_ten_waits_a_week() {
        assert_eq!(next_reminder(at(2026, 10, 18, 10, 0)), at(2026, 10, 25, 10, 0));
        assert_eq!(next_reminder(at(2026, 10, 18, 18, 45)), at(2026, 10, 25, 10, 0));
    }

    #[test]
    fn weekdays_roll_to_next_sunday() {
        assert_eq!(next_reminder(at(2026, 10, 19, 8, 0)), at(2026, 10, 25, 10, 0));
        assert_eq!(next_reminder(at(2026, 10, 24, 23, 59)), at(2026, 10, 25, 10, 0));
    }
}
