//! UTS Text - The canonical timestamp wire format
//!
//! One bit-exact external contract: `YYYY-MM-DDTHH:MM:SS[.f{1,9}]Z`,
//! always UTC. This crate implements both directions:
//! - [`format`] / [`format_into`]: instant to canonical text
//! - [`parse_strict`] / [`parse_lenient`]: canonical text to instant

pub mod format;
pub mod parse;

pub use format::*;
pub use parse::*;
