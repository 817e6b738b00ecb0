//! UTS Calendar - Derived calendar projections
//!
//! Views computed on top of the core Gregorian arithmetic:
//! - Year-offset calendars (Thai Buddhist, Korean Dangi, Minguo/ROC)
//! - Japanese era calendar (Gengo)
//! - ISO 8601 week dates
//!
//! All projections are pure and recomputed on every call; nothing here
//! caches or mutates state.

pub mod era;
pub mod offsets;
pub mod week;

pub use era::*;
pub use offsets::*;
pub use week::*;
