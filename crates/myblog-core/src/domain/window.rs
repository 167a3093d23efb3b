use chrono::{DateTime, TimeDelta, Utc};

/// Length of the trailing window used by the leaderboard queries.
pub const TRAILING_WINDOW_DAYS: i64 = 180;

/// A closed time interval `[start, end]` ending at "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailingWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TrailingWindow {
    /// The standard 180-day window ending at `now`.
    pub fn ending_at(now: DateTime<Utc>) -> Self {
        Self::days_ending_at(TRAILING_WINDOW_DAYS, now)
    }

    pub fn days_ending_at(days: i64, now: DateTime<Utc>) -> Self {
        Self {
            start: now - TimeDelta::days(days),
            end: now,
        }
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at <= self.end
    }

    /// Window length in whole days.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_bounds_are_inclusive() {
        let now = Utc::now();
        let window = TrailingWindow::ending_at(now);

        assert_eq!(window.days(), 180);
        assert!(window.contains(now));
        assert!(window.contains(now - TimeDelta::days(180)));
        assert!(window.contains(now - TimeDelta::days(10)));
        assert!(!window.contains(now - TimeDelta::days(181)));
        assert!(!window.contains(now + TimeDelta::seconds(1)));
    }
}
