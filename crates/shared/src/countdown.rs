//! Time remaining until the festival opens.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: i64 = 24 * SECS_PER_HOUR;

/// Opening time of the festival (Kolkata, UTC+05:30).
pub fn festival_start() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(5 * 3600 + 30 * 60)
        .and_then(|ist| ist.with_ymd_and_hms(2026, 2, 27, 10, 0, 0).single())
        .unwrap_or_else(|| DateTime::<Utc>::UNIX_EPOCH.fixed_offset())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeLeft {
    pub fn is_over(&self) -> bool {
        *self == Self::default()
    }
}

/// Whole days/hours/minutes/seconds left until `target`, each component
/// floored. Zero once `target` is reached or passed.
pub fn time_left<Tz: TimeZone>(target: &DateTime<Tz>, now: DateTime<Utc>) -> TimeLeft {
    let remaining = target.with_timezone(&Utc).signed_duration_since(now);
    if remaining.num_milliseconds() <= 0 {
        return TimeLeft::default();
    }
    let total_secs = remaining.num_milliseconds() / 1000;

    TimeLeft {
        days: total_secs / SECS_PER_DAY,
        hours: (total_secs % SECS_PER_DAY) / SECS_PER_HOUR,
        minutes: (total_secs % SECS_PER_HOUR) / SECS_PER_MINUTE,
        seconds: total_secs % SECS_PER_MINUTE,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn splits_remaining_time_into_components() {
        let target = festival_start();
        let now = target.with_timezone(&Utc)
            - Duration::days(3)
            - Duration::hours(4)
            - Duration::minutes(5)
            - Duration::seconds(6)
            - Duration::milliseconds(700);
        assert_eq!(
            time_left(&target, now),
            TimeLeft {
                days: 3,
                hours: 4,
                minutes: 5,
                seconds: 6,
            }
        );
    }

    #[test]
    fn clamps_to_zero_after_opening() {
        let target = festival_start();
        let left = time_left(&target, target.with_timezone(&Utc) + Duration::seconds(1));
        assert!(left.is_over());
        assert!(time_left(&target, target.with_timezone(&Utc)).is_over());
    }

    #[test]
    fn festival_opens_at_ten_ist() {
        assert_eq!(
            festival_start().to_rfc3339(),
            "2026-02-27T10:00:00+05:30"
        );
    }
}
