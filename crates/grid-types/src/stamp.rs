use std::fmt;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Creation timestamp for a published file version.
///
/// Assigned when the write stream closes (not when it opens): the stamp
/// marks the publish point, and "latest version" resolution compares stamps
/// first, falling back to [`FileId`](crate::FileId) order on ties.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UploadStamp(DateTime<Utc>);

impl UploadStamp {
    /// Stamp for the current wall-clock time.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Create from milliseconds since the UNIX epoch.
    ///
    /// Out-of-range inputs clamp to the epoch.
    pub fn from_millis(millis: i64) -> Self {
        let ts = Utc
            .timestamp_millis_opt(millis)
            .single()
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH);
        Self(ts)
    }

    /// Milliseconds since the UNIX epoch.
    pub fn as_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// The underlying UTC datetime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl fmt::Debug for UploadStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UploadStamp({})", self.0.to_rfc3339())
    }
}

impl fmt::Display for UploadStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}
