//! Relative time labels for comment timestamps

use chrono::{DateTime, Utc};
use std::fmt;

const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_HOUR: i64 = 3_600_000;
const MS_PER_DAY: i64 = 86_400_000;

/// Elapsed-time bucket, computed by floor division of elapsed milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeTime {
    /// Under one minute
    JustNow,
    /// 1 to 59 minutes
    Minutes(i64),
    /// 1 to 23 hours
    Hours(i64),
    /// 24 hours or more, no upper bound
    Days(i64),
}

impl RelativeTime {
    /// Bucket the time elapsed between `then` and `now`.
    ///
    /// Timestamps after `now` count as zero elapsed.
    pub fn between(then: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let elapsed = now.signed_duration_since(then).num_milliseconds().max(0);

        let minutes = elapsed / MS_PER_MINUTE;
        let hours = elapsed / MS_PER_HOUR;
        let days = elapsed / MS_PER_DAY;

        if minutes < 1 {
            RelativeTime::JustNow
        } else if minutes < 60 {
            RelativeTime::Minutes(minutes)
        } else if hours < 24 {
            RelativeTime::Hours(hours)
        } else {
            RelativeTime::Days(days)
        }
    }
}

impl fmt::Display for RelativeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (n, unit) = match *self {
            RelativeTime::JustNow => return write!(f, "just now"),
            RelativeTime::Minutes(n) => (n, "minute"),
            RelativeTime::Hours(n) => (n, "hour"),
            RelativeTime::Days(n) => (n, "day"),
        };
        let plural = if n == 1 { "" } else { "s" };
        write!(f, "{} {}{} ago", n, unit, plural)
    }
}

/// Format `then` relative to `now`
pub fn format_relative(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    RelativeTime::between(then, now).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn ago(now: DateTime<Utc>, ms: i64) -> DateTime<Utc> {
        now - Duration::milliseconds(ms)
    }

    #[test]
    fn test_just_now() {
        let now = Utc::now();
        assert_eq!(RelativeTime::between(now, now), RelativeTime::JustNow);
        assert_eq!(RelativeTime::between(ago(now, 59_999), now), RelativeTime::JustNow);
        assert_eq!(format_relative(now, now), "just now");
    }

    #[test]
    fn test_minutes_bucket() {
        let now = Utc::now();
        assert_eq!(RelativeTime::between(ago(now, 60_000), now), RelativeTime::Minutes(1));
        assert_eq!(
            RelativeTime::between(ago(now, MS_PER_HOUR - 1), now),
            RelativeTime::Minutes(59)
        );
        assert_eq!(format_relative(ago(now, 5 * MS_PER_MINUTE), now), "5 minutes ago");
        assert_eq!(format_relative(ago(now, MS_PER_MINUTE), now), "1 minute ago");
    }

    #[test]
    fn test_hours_bucket() {
        let now = Utc::now();
        assert_eq!(RelativeTime::between(ago(now, MS_PER_HOUR), now), RelativeTime::Hours(1));
        assert_eq!(
            RelativeTime::between(ago(now, MS_PER_DAY - 1), now),
            RelativeTime::Hours(23)
        );
        assert_eq!(format_relative(ago(now, 3 * MS_PER_HOUR), now), "3 hours ago");
    }

    #[test]
    fn test_days_bucket_has_no_upper_bound() {
        let now = Utc::now();
        assert_eq!(RelativeTime::between(ago(now, MS_PER_DAY), now), RelativeTime::Days(1));
        assert_eq!(
            RelativeTime::between(ago(now, 400 * MS_PER_DAY + 5), now),
            RelativeTime::Days(400)
        );
        assert_eq!(format_relative(ago(now, 2 * MS_PER_DAY), now), "2 days ago");
    }

    #[test]
    fn test_future_timestamp_is_just_now() {
        let now = Utc::now();
        let later = now + Duration::hours(2);
        assert_eq!(RelativeTime::between(later, now), RelativeTime::JustNow);
    }
}
