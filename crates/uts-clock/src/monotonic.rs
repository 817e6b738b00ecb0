//! Monotonic instant generation with clock-regression detection
//!
//! INVARIANT: for any two `generate()` calls ordered in real time, the
//! later result is strictly greater - regardless of wall-clock behavior,
//! including clocks that jump backward or stall.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::OnceLock;

use parking_lot::RwLock;

use uts_core::Timestamp;

use crate::{SystemClock, TimeSource};

/// Observational record of a detected clock regression.
///
/// `expected` is the minimum acceptable instant (last emitted + 1ns),
/// `actual` is what the wall clock returned, `adjusted` is the
/// synthesized instant handed to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Regression {
    pub expected: Timestamp,
    pub actual: Timestamp,
    pub adjusted: Timestamp,
}

/// Callback invoked on detected regressions. Purely observational:
/// generation never depends on it being present or well-behaved.
pub type RegressionCallback = Box<dyn Fn(&Regression) + Send + Sync>;

/// Generator of strictly increasing instants over an arbitrary
/// (possibly non-monotonic) time source.
///
/// Independent generators are cheap to construct, so tests can run each
/// scenario against its own instance with a mocked source; the
/// process-wide [`now_monotonic`] uses a shared one over [`SystemClock`].
pub struct MonotonicGenerator<S> {
    source: S,
    /// Last emitted instant in nanoseconds; 0 sits below any real
    /// wall-clock reading, so the first call passes through
    last_emitted: AtomicI64,
    callback: RwLock<Option<RegressionCallback>>,
}

impl<S: TimeSource> MonotonicGenerator<S> {
    pub fn new(source: S) -> Self {
        MonotonicGenerator {
            source,
            last_emitted: AtomicI64::new(0),
            callback: RwLock::new(None),
        }
    }

    /// Generate the next instant.
    ///
    /// Reads the source; if the reading does not advance past the last
    /// emitted instant, synthesizes last + 1ns instead. The update is an
    /// optimistic compare-and-swap loop - the whole read-compare cycle
    /// retries when a concurrent caller wins the race, so no lock is
    /// held and results stay strictly increasing across threads.
    pub fn generate(&self) -> Timestamp {
        loop {
            let now = self.source.now().as_unix_nanos();
            let last = self.last_emitted.load(Ordering::Acquire);

            let regressed = now <= last;
            let next = if regressed { last + 1 } else { now };

            if self
                .last_emitted
                .compare_exchange_weak(last, next, Ordering::AcqRel, Ordering::Relaxed)
                .is_ok()
            {
                if regressed {
                    self.notify_regression(Regression {
                        expected: Timestamp::from_unix_nanos(last + 1),
                        actual: Timestamp::from_unix_nanos(now),
                        adjusted: Timestamp::from_unix_nanos(next),
                    });
                }
                return Timestamp::from_unix_nanos(next);
            }
        }
    }

    /// Replace the regression callback. `None` disables notification.
    ///
    /// Not synchronized with in-flight `generate()` calls; a borderline
    /// regression may deliver zero or one notification, never more.
    pub fn set_regression_callback(&self, callback: Option<RegressionCallback>) {
        *self.callback.write() = callback;
    }

    /// Last instant handed out, or the epoch sentinel before the first call
    pub fn last_emitted(&self) -> Timestamp {
        Timestamp::from_unix_nanos(self.last_emitted.load(Ordering::Acquire))
    }

    /// Runs outside the CAS step: the callback cannot stall or corrupt
    /// the generator state
    fn notify_regression(&self, regression: Regression) {
        tracing::warn!(
            expected_nanos = regression.expected.as_unix_nanos(),
            actual_nanos = regression.actual.as_unix_nanos(),
            adjusted_nanos = regression.adjusted.as_unix_nanos(),
            "wall clock regressed; synthesized monotonic instant"
        );

        if let Some(callback) = self.callback.read().as_ref() {
            callback(&regression);
        }
    }
}

static GLOBAL_GENERATOR: OnceLock<MonotonicGenerator<SystemClock>> = OnceLock::new();

fn global_generator() -> &'static MonotonicGenerator<SystemClock> {
    GLOBAL_GENERATOR.get_or_init(|| MonotonicGenerator::new(SystemClock))
}

/// Current UTC instant, guaranteed strictly greater than any previous
/// result from this function in this process.
pub fn now_monotonic() -> Timestamp {
    global_generator().generate()
}

/// Set or clear the process-wide regression callback used by
/// [`now_monotonic`].
pub fn set_regression_callback(callback: Option<RegressionCallback>) {
    global_generator().set_regression_callback(callback);
}
