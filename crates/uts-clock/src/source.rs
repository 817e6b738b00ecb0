//! Wall-clock time sources

use std::time::{SystemTime, UNIX_EPOCH};

use uts_core::Timestamp;

/// An opaque wall-clock time source.
///
/// No monotonicity is assumed: a source may stall or jump backward.
/// Implementations must be cheap and non-blocking.
pub trait TimeSource: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// The operating-system wall clock
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> Timestamp {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(since) => Timestamp::from_unix_nanos(since.as_nanos() as i64),
            // System clock set before 1970: the error carries the gap
            Err(e) => Timestamp::from_unix_nanos(-(e.duration().as_nanos() as i64)),
        }
    }
}

/// Read the current UTC instant from the system clock.
///
/// No monotonic guarantee - use [`crate::now_monotonic`] when ordering
/// matters.
pub fn now() -> Timestamp {
    SystemClock.now()
}
