//! Festival countdown.
//!
//! A countdown is a pure function of the current time, a target and the
//! length of the live window that follows it.

use std::fmt;

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

const MS_PER_SECOND: i64 = 1000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Length of the live window after a target: two festival days.
pub fn default_festival_duration() -> Duration {
    Duration::days(2)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CountdownStatus {
    Upcoming,
    Live,
    Ended,
}

impl fmt::Display for CountdownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CountdownStatus::Upcoming => "upcoming",
            CountdownStatus::Live => "live",
            CountdownStatus::Ended => "ended",
        };
        write!(f, "{s}")
    }
}

/// Remaining time split into whole units (floor).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeLeft {
    pub fn from_millis(ms: i64) -> Self {
        let ms = ms.max(0);
        TimeLeft {
            days: ms / MS_PER_DAY,
            hours: (ms % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (ms % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (ms % MS_PER_MINUTE) / MS_PER_SECOND,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == TimeLeft::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountdownState {
    pub status: CountdownStatus,
    pub time_left: TimeLeft,
}

/// Classify `now` against `target` and the live window `[target, target + duration)`.
///
/// Only `Upcoming` carries a non-zero breakdown. A window that ends past the
/// representable calendar never closes.
pub fn classify(now: NaiveDateTime, target: NaiveDateTime, duration: Duration) -> CountdownState {
    let remaining = target - now;

    if remaining > Duration::zero() {
        CountdownState {
            status: CountdownStatus::Upcoming,
            time_left: TimeLeft::from_millis(remaining.num_milliseconds()),
        }
    } else {
        let status = match target.checked_add_signed(duration) {
            Some(end) if now >= end => CountdownStatus::Ended,
            _ => CountdownStatus::Live,
        };
        CountdownState {
            status,
            time_left: TimeLeft::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, day)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn festival_start() -> NaiveDateTime {
        at(11, 9, 0, 0)
    }

    #[test]
    fn breakdown_of_one_of_each_unit() {
        let time_left = TimeLeft::from_millis(90_061_000);
        assert_eq!(
            time_left,
            TimeLeft {
                days: 1,
                hours: 1,
                minutes: 1,
                seconds: 1
            }
        );
    }

    #[test]
    fn breakdown_floors_partial_seconds() {
        let time_left = TimeLeft::from_millis(1_999);
        assert_eq!(time_left.seconds, 1);
        assert_eq!(TimeLeft::from_millis(999), TimeLeft::default());
    }

    #[test]
    fn upcoming_before_target() {
        let now = festival_start() - Duration::milliseconds(90_061_000);
        let state = classify(now, festival_start(), default_festival_duration());
        assert_eq!(state.status, CountdownStatus::Upcoming);
        assert_eq!(state.time_left.days, 1);
        assert_eq!(state.time_left.seconds, 1);
    }

    #[test]
    fn live_exactly_at_target() {
        let state = classify(festival_start(), festival_start(), default_festival_duration());
        assert_eq!(state.status, CountdownStatus::Live);
        assert!(state.time_left.is_zero());
    }

    #[test]
    fn live_one_day_after_target() {
        let state = classify(at(12, 9, 0, 0), festival_start(), default_festival_duration());
        assert_eq!(state.status, CountdownStatus::Live);
        assert!(state.time_left.is_zero());
    }

    #[test]
    fn ended_one_second_past_window() {
        let state = classify(at(13, 9, 0, 1), festival_start(), default_festival_duration());
        assert_eq!(state.status, CountdownStatus::Ended);
        assert!(state.time_left.is_zero());
    }

    #[test]
    fn ended_at_window_boundary() {
        let state = classify(at(13, 9, 0, 0), festival_start(), default_festival_duration());
        assert_eq!(state.status, CountdownStatus::Ended);
    }

    #[test]
    fn window_past_the_calendar_stays_live() {
        let state = classify(at(12, 9, 0, 0), festival_start(), Duration::MAX);
        assert_eq!(state.status, CountdownStatus::Live);

        let far = Duration::days(365 * 1_000_000);
        let state = classify(at(20, 0, 0, 0), festival_start(), far);
        assert_eq!(state.status, CountdownStatus::Live);
    }

    #[test]
    fn statuses_partition_the_timeline() {
        let target = festival_start();
        let duration = default_festival_duration();
        let mut now = target - Duration::hours(6);
        let mut seen = Vec::new();

        while now < target + duration + Duration::hours(6) {
            let status = classify(now, target, duration).status;
            let expected = if now < target {
                CountdownStatus::Upcoming
            } else if now < target + duration {
                CountdownStatus::Live
            } else {
                CountdownStatus::Ended
            };
            assert_eq!(status, expected, "at {now}");
            if seen.last() != Some(&status) {
                seen.push(status);
            }
            now += Duration::minutes(30);
        }

        assert_eq!(
            seen,
            vec![
                CountdownStatus::Upcoming,
                CountdownStatus::Live,
                CountdownStatus::Ended
            ]
        );
    }
}
