//! UTS Core - Fundamental types and calendar arithmetic
//!
//! This crate defines the types shared by the rest of the workspace:
//! - `Timestamp`: signed nanoseconds since the Unix epoch
//! - `CivilDateTime`: broken-down calendar time and the epoch conversion
//!   arithmetic (proleptic Gregorian, always UTC)
//! - `UtsError`: the closed error taxonomy for parsing and formatting

pub mod civil;
pub mod error;
pub mod timestamp;

pub use civil::*;
pub use error::*;
pub use timestamp::*;
