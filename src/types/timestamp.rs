//! Unix timestamp type for request parameters

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Seconds since the Unix epoch, as the API expects in paths and queries.
///
/// Request builders that default to "now" take `Option<UnixTimestamp>` and
/// resolve `None` with [`UnixTimestamp::now`] when the request is built, so
/// a long-lived program never reuses a stale default.
///
/// # Examples
///
/// ```
/// use defillama::UnixTimestamp;
///
/// let ts = UnixTimestamp::new(1_648_680_149);
/// assert_eq!(ts.to_string(), "1648680149");
/// assert!(UnixTimestamp::now() > ts);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UnixTimestamp(i64);

impl UnixTimestamp {
    /// Create a timestamp from seconds since the epoch.
    pub const fn new(secs: i64) -> Self {
        Self(secs)
    }

    /// Current wall-clock time, truncated to whole seconds.
    pub fn now() -> Self {
        Self(Utc::now().timestamp())
    }

    /// Seconds since the epoch.
    pub const fn as_secs(self) -> i64 {
        self.0
    }

    /// Convert to a UTC datetime, if in range.
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.0, 0)
    }
}

impl fmt::Display for UnixTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UnixTimestamp {
    fn from(secs: i64) -> Self {
        Self(secs)
    }
}

impl From<DateTime<Utc>> for UnixTimestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt.timestamp())
    }
}
