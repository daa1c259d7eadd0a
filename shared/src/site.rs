use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Time remaining until the wedding, broken into display units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
}

impl Countdown {
    /// Computes the countdown from `now` to `target`. Once the target has
    /// passed, everything reads zero.
    pub fn until(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let remaining = target - now;
        if remaining <= Duration::zero() {
            return Countdown {
                days: 0,
                hours: 0,
                minutes: 0,
            };
        }

        Countdown {
            days: remaining.num_days(),
            hours: remaining.num_hours() % 24,
            minutes: remaining.num_minutes() % 60,
        }
    }
}
