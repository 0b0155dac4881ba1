//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    /// Checks if this timestamp is after another.
    pub fn is_after(&self, other: &Timestamp) -> bool {
        self.0 > other.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(secs: i64) -> Timestamp {
        Timestamp::from_datetime(DateTime::from_timestamp(secs, 0).unwrap())
    }

    #[test]
    fn ordering_reflects_time() {
        let earlier = fixed(1_704_326_400);
        let later = fixed(1_704_326_500);
        assert!(earlier.is_before(&later));
        assert!(later.is_after(&earlier));
        assert!(earlier < later);
    }

    #[test]
    fn from_datetime_preserves_value() {
        let dt = DateTime::from_timestamp(1_704_326_400, 0).unwrap();
        let ts = Timestamp::from_datetime(dt);
        assert_eq!(ts.as_datetime(), &dt);
    }
}
