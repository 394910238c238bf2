//! Progress Helpers
//!
//! Pure display math for challenge funding bars and deadlines.

use chrono::{DateTime, NaiveDate, Utc};

/// Funding progress as a percentage clamped to [0, 100]
pub fn percent(current: u32, goal: u32) -> f64 {
    if goal == 0 {
        return 0.0;
    }
    (current as f64 / goal as f64 * 100.0).min(100.0)
}

/// Whole days until the deadline (YYYY-MM-DD, taken as midnight UTC),
/// rounded up and floored at 0. Unparsable deadlines count as due.
pub fn days_remaining(deadline: &str, now: DateTime<Utc>) -> i64 {
    let Ok(date) = NaiveDate::parse_from_str(deadline, "%Y-%m-%d") else {
        return 0;
    };
    let deadline_ts = date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc().timestamp()).unwrap_or(0);
    let seconds_left = deadline_ts - now.timestamp();
    (seconds_left.div_euclid(86_400) + i64::from(seconds_left.rem_euclid(86_400) != 0)).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_percent_clamps_to_100() {
        assert_eq!(percent(0, 100), 0.0);
        assert_eq!(percent(50, 100), 50.0);
        assert_eq!(percent(100, 100), 100.0);
        assert_eq!(percent(250, 100), 100.0);
    }

    #[test]
    fn test_percent_monotonic_in_current() {
        let mut last = -1.0;
        for current in 0..300 {
            let p = percent(current, 120);
            assert!(p >= last);
            last = p;
        }
    }

    #[test]
    fn test_percent_zero_goal_does_not_divide() {
        assert_eq!(percent(10, 0), 0.0);
    }

    #[test]
    fn test_days_remaining_rounds_up() {
        // 2025-06-09 18:00 -> midnight of 06-12 is 2.25 days away, ceil = 3
        let now = Utc.with_ymd_and_hms(2025, 6, 9, 18, 0, 0).unwrap();
        assert_eq!(days_remaining("2025-06-12", now), 3);
    }

    #[test]
    fn test_days_remaining_exact_midnight() {
        let now = Utc.with_ymd_and_hms(2025, 6, 9, 0, 0, 0).unwrap();
        assert_eq!(days_remaining("2025-06-12", now), 3);
    }

    #[test]
    fn test_days_remaining_floors_at_zero() {
        let now = Utc.with_ymd_and_hms(2025, 6, 9, 12, 0, 0).unwrap();
        assert_eq!(days_remaining("2025-06-01", now), 0);
        assert_eq!(days_remaining("2025-06-09", now), 0);
    }

    #[test]
    fn test_days_remaining_unparsable_deadline() {
        let now = Utc.with_ymd_and_hms(2025, 6, 9, 12, 0, 0).unwrap();
        assert_eq!(days_remaining("soon", now), 0);
    }
}
