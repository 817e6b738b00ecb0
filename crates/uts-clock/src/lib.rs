//! UTS Clock - Wall-clock reading and monotonic generation
//!
//! The wall clock is an opaque, possibly non-monotonic time source behind
//! the [`TimeSource`] trait. [`MonotonicGenerator`] layers the
//! strict-increase guarantee on top of any source, with clock-regression
//! detection and an observational callback.

pub mod monotonic;
pub mod source;

pub use monotonic::*;
pub use source::*;
