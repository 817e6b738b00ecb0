//! The absolute instant type
//!
//! A `Timestamp` is a signed 64-bit count of nanoseconds since
//! 1970-01-01T00:00:00Z. The representable range covers roughly the
//! years 1677 to 2262; values whose calendar rendering would fall
//! outside 0000-9999 are a caller error, not validated here.

use std::time::Duration;

/// Absolute instant - nanoseconds since the Unix epoch, always UTC
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// 1970-01-01T00:00:00Z
    pub const EPOCH: Timestamp = Timestamp(0);
    pub const MAX: Timestamp = Timestamp(i64::MAX);
    pub const MIN: Timestamp = Timestamp(i64::MIN);

    /// Create a timestamp from raw Unix nanoseconds. Total and lossless.
    #[inline]
    pub fn from_unix_nanos(nanos: i64) -> Self {
        Timestamp(nanos)
    }

    /// Raw Unix nanoseconds. Exact inverse of [`Timestamp::from_unix_nanos`].
    #[inline]
    pub fn as_unix_nanos(self) -> i64 {
        self.0
    }

    #[inline]
    pub fn from_unix_secs(secs: i64) -> Self {
        Timestamp(secs * 1_000_000_000)
    }

    #[inline]
    pub fn as_unix_secs(self) -> i64 {
        self.0.div_euclid(1_000_000_000)
    }

    #[inline]
    pub fn saturating_add(self, duration: Duration) -> Self {
        Timestamp(self.0.saturating_add(duration.as_nanos() as i64))
    }

    #[inline]
    pub fn saturating_sub(self, duration: Duration) -> Self {
        Timestamp(self.0.saturating_sub(duration.as_nanos() as i64))
    }
}

impl std::fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timestamp({}ns)", self.0)
    }
}
