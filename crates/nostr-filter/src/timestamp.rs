//! Unix timestamps as used by `since` and `until`.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Seconds since the Unix epoch.
///
/// Serializes as a bare JSON integer.
///
/// # Examples
///
/// ```
/// use nostr_filter::Timestamp;
///
/// let ts = Timestamp::from(1_700_000_000);
/// assert_eq!(serde_json::to_string(&ts).unwrap(), "1700000000");
/// assert_eq!(ts.to_datetime().unwrap().to_rfc3339(), "2023-11-14T22:13:20+00:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Creates a timestamp from seconds since the epoch.
    pub const fn new(secs: i64) -> Self {
        Self(secs)
    }

    /// Returns the raw number of seconds.
    pub const fn as_secs(&self) -> i64 {
        self.0
    }

    /// Returns the timestamp as a UTC datetime, if it is within chrono's range.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.0, 0)
    }
}

impl From<i64> for Timestamp {
    fn from(secs: i64) -> Self {
        Self(secs)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_serializes_as_integer() {
        let ts = Timestamp::new(100);
        assert_eq!(serde_json::to_string(&ts).unwrap(), "100");
    }

    #[test]
    fn test_timestamp_deserializes_from_integer() {
        let ts: Timestamp = serde_json::from_str("1234").unwrap();
        assert_eq!(ts.as_secs(), 1234);
    }

    #[test]
    fn test_timestamp_negative_is_before_epoch() {
        let dt = Timestamp::new(-86_400).to_datetime().unwrap();
        assert_eq!(dt.to_rfc3339(), "1969-12-31T00:00:00+00:00");
    }

    #[test]
    fn test_timestamp_out_of_range_has_no_datetime() {
        assert!(Timestamp::new(i64::MAX).to_datetime().is_none());
    }

    #[test]
    fn test_timestamp_display() {
        assert_eq!(Timestamp::new(42).to_string(), "42");
    }
}
