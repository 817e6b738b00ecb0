//! Error types for UTS operations

use thiserror::Error;

/// Closed error taxonomy for parsing, validation, and formatting.
///
/// Every failure is surfaced synchronously to the immediate caller;
/// malformed input is permanent and never retried inside the library.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UtsError {
    /// String does not match the expected pattern (bad separator, wrong
    /// designator, trailing characters)
    #[error("Invalid format")]
    InvalidFormat,

    /// Calendar date does not exist (e.g. February 30)
    #[error("Invalid date")]
    InvalidDate,

    /// Component value outside its valid range; also returned when an era
    /// lookup falls before the earliest known era
    #[error("Value out of range")]
    OutOfRange,

    /// Explicit timezone offset - the wire format is UTC-only
    #[error("Unsupported timezone offset")]
    UnsupportedOffset,

    /// More than 9 fractional digits in strict mode
    #[error("Fractional seconds too long")]
    FractionTooLong,

    /// Leap second (SS=60) not supported
    #[error("Leap second not supported")]
    LeapSecond,

    /// Formatter output buffer smaller than the required capacity
    #[error("Buffer too short: expected {expected}, got {actual}")]
    BufferTooShort { expected: usize, actual: usize },
}

/// Result type for UTS operations
pub type UtsResult<T> = Result<T, UtsError>;
