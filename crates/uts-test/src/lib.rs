//! UTS Test Harness - Deterministic clock simulation and validation
//!
//! This crate provides:
//! - Scripted and randomly drifting wall-clock simulators
//! - End-to-end checks of the canonical wire-format vectors
//! - Criterion benchmarks for the hot paths

pub mod clock_sim;
pub mod integration;

pub use clock_sim::*;
pub use integration::*;
