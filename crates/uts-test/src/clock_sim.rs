//! Wall-clock simulators for monotonic-generator testing
//!
//! Both simulators implement [`TimeSource`], so any scenario can run
//! against its own [`uts_clock::MonotonicGenerator`] without touching the
//! process-wide generator.

use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use uts_clock::TimeSource;
use uts_core::Timestamp;

/// Replays a predetermined sequence of wall-clock readings.
///
/// Once the script is exhausted the final reading repeats forever, which
/// models a stalled clock.
pub struct ScriptedClock {
    readings: Vec<i64>,
    cursor: AtomicUsize,
}

impl ScriptedClock {
    /// `readings` must be non-empty.
    pub fn new(readings: Vec<i64>) -> Self {
        assert!(!readings.is_empty(), "script needs at least one reading");
        ScriptedClock {
            readings,
            cursor: AtomicUsize::new(0),
        }
    }

    /// Number of readings consumed so far
    pub fn reads(&self) -> usize {
        self.cursor.load(Ordering::Relaxed)
    }
}

impl TimeSource for ScriptedClock {
    fn now(&self) -> Timestamp {
        let i = self.cursor.fetch_add(1, Ordering::Relaxed);
        let i = i.min(self.readings.len() - 1);
        Timestamp::from_unix_nanos(self.readings[i])
    }
}

/// Configuration for [`DriftingClock`]
#[derive(Clone, Copy, Debug)]
pub struct DriftConfig {
    /// Maximum forward step per reading, nanoseconds
    pub max_step_nanos: i64,
    /// Probability that a reading jumps backward instead of forward
    pub regression_probability: f64,
    /// Maximum backward jump, nanoseconds
    pub max_regression_nanos: i64,
}

impl Default for DriftConfig {
    fn default() -> Self {
        DriftConfig {
            max_step_nanos: 1_000,
            regression_probability: 0.2,
            max_regression_nanos: 10_000,
        }
    }
}

struct DriftState {
    rng: StdRng,
    current: i64,
}

/// A seeded, randomly drifting wall clock that occasionally jumps
/// backward. Deterministic per seed, so failures reproduce.
pub struct DriftingClock {
    config: DriftConfig,
    state: Mutex<DriftState>,
}

impl DriftingClock {
    pub fn new(seed: u64, start_nanos: i64, config: DriftConfig) -> Self {
        DriftingClock {
            config,
            state: Mutex::new(DriftState {
                rng: StdRng::seed_from_u64(seed),
                current: start_nanos,
            }),
        }
    }
}

impl TimeSource for DriftingClock {
    fn now(&self) -> Timestamp {
        let mut state = self.state.lock();

        // A zero regression bound disables backward jumps entirely
        let regress = self.config.max_regression_nanos > 0
            && state.rng.gen_bool(self.config.regression_probability);

        if regress {
            let jump = state.rng.gen_range(1..=self.config.max_regression_nanos);
            state.current -= jump;
        } else {
            let step = state.rng.gen_range(0..=self.config.max_step_nanos);
            state.current += step;
        }

        Timestamp::from_unix_nanos(state.current)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;

    use proptest::prelude::*;
    use uts_clock::MonotonicGenerator;

    use super::*;

    #[test]
    fn test_scripted_clock_replays_and_stalls() {
        let clock = ScriptedClock::new(vec![10, 20, 30]);

        assert_eq!(clock.now().as_unix_nanos(), 10);
        assert_eq!(clock.now().as_unix_nanos(), 20);
        assert_eq!(clock.now().as_unix_nanos(), 30);
        // Exhausted: the last reading repeats
        assert_eq!(clock.now().as_unix_nanos(), 30);
        assert_eq!(clock.reads(), 4);
    }

    #[test]
    fn test_drifting_clock_is_deterministic_per_seed() {
        let a = DriftingClock::new(42, 1_000_000, DriftConfig::default());
        let b = DriftingClock::new(42, 1_000_000, DriftConfig::default());

        for _ in 0..100 {
            assert_eq!(a.now(), b.now());
        }
    }

    #[test]
    fn test_drifting_clock_does_regress() {
        let clock = DriftingClock::new(7, 1_000_000, DriftConfig::default());

        let mut regressed = false;
        let mut previous = clock.now();
        for _ in 0..200 {
            let next = clock.now();
            if next <= previous {
                regressed = true;
            }
            previous = next;
        }
        assert!(regressed, "drift config should produce regressions");
    }

    #[test]
    fn test_generator_survives_drifting_clock() {
        let generator = MonotonicGenerator::new(DriftingClock::new(
            1234,
            1_000_000_000,
            DriftConfig::default(),
        ));
        let regressions = Arc::new(AtomicUsize::new(0));

        let sink = Arc::clone(&regressions);
        generator.set_regression_callback(Some(Box::new(move |_| {
            sink.fetch_add(1, Ordering::Relaxed);
        })));

        let mut previous = generator.generate();
        for _ in 0..10_000 {
            let next = generator.generate();
            assert!(next > previous, "monotonic guarantee violated");
            previous = next;
        }

        assert!(
            regressions.load(Ordering::Relaxed) > 0,
            "the drifting clock should have triggered the regression path"
        );
    }

    #[test]
    fn test_zero_regression_bound_never_jumps_back() {
        // Probability 1.0 with a zero bound must neither panic nor regress
        let clock = DriftingClock::new(
            3,
            1_000,
            DriftConfig {
                max_step_nanos: 10,
                regression_probability: 1.0,
                max_regression_nanos: 0,
            },
        );

        let mut previous = clock.now();
        for _ in 0..100 {
            let next = clock.now();
            assert!(next >= previous);
            previous = next;
        }
    }

    proptest! {
        #[test]
        fn prop_generator_monotonic_for_any_drift_seed(seed in any::<u64>()) {
            let generator = MonotonicGenerator::new(DriftingClock::new(
                seed,
                1_000_000,
                DriftConfig::default(),
            ));

            let mut previous = generator.generate();
            for _ in 0..200 {
                let next = generator.generate();
                prop_assert!(next > previous);
                previous = next;
            }
        }
    }
}
