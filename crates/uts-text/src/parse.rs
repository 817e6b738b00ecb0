//! Strict and lenient timestamp parser
//!
//! Fixed-width recognizer for the canonical wire format:
//! - 19 mandatory bytes `YYYY-MM-DDTHH:MM:SS` with separators at byte
//!   offsets 4, 7, 10, 13, 16
//! - optional `.` followed by 1-9 fraction digits
//! - UTC designator (`Z`, lenient `z`, or an explicit zero offset in
//!   lenient mode)
//!
//! Lenient mode additionally accepts a missing designator (assumes UTC)
//! and truncates over-long fractions to nine digits. Non-zero offsets are
//! rejected in both modes; the library is UTC-only.

use uts_core::{civil, CivilDateTime, Timestamp, UtsError, UtsResult};

/// Parsing profile
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Strict,
    Lenient,
}

/// Scale factors turning a 1-9 digit fraction into nanoseconds
const FRACTION_SCALE: [u32; 9] = [
    100_000_000,
    10_000_000,
    1_000_000,
    100_000,
    10_000,
    1_000,
    100,
    10,
    1,
];

/// Parse a fixed-width run of ASCII digits
fn parse_digits(bytes: &[u8]) -> Option<u32> {
    let mut val: u32 = 0;
    for &b in bytes {
        if !b.is_ascii_digit() {
            return None;
        }
        val = val * 10 + u32::from(b - b'0');
    }
    Some(val)
}

/// Parse a timestamp accepting only the fully canonical form.
pub fn parse_strict(input: &str) -> UtsResult<Timestamp> {
    parse(input, Mode::Strict)
}

/// Parse a timestamp accepting documented relaxations: missing or
/// lowercase UTC designator, explicit zero offset, truncated over-long
/// fractions.
pub fn parse_lenient(input: &str) -> UtsResult<Timestamp> {
    parse(input, Mode::Lenient)
}

fn parse(input: &str, mode: Mode) -> UtsResult<Timestamp> {
    let bytes = input.as_bytes();
    let len = bytes.len();

    if len < 19 {
        return Err(UtsError::InvalidFormat);
    }

    if bytes[4] != b'-'
        || bytes[7] != b'-'
        || bytes[10] != b'T'
        || bytes[13] != b':'
        || bytes[16] != b':'
    {
        return Err(UtsError::InvalidFormat);
    }

    let year = parse_digits(&bytes[0..4]).ok_or(UtsError::InvalidFormat)?;
    let month = parse_digits(&bytes[5..7]).ok_or(UtsError::InvalidFormat)?;
    let day = parse_digits(&bytes[8..10]).ok_or(UtsError::InvalidFormat)?;
    let hour = parse_digits(&bytes[11..13]).ok_or(UtsError::InvalidFormat)?;
    let minute = parse_digits(&bytes[14..16]).ok_or(UtsError::InvalidFormat)?;
    let second = parse_digits(&bytes[17..19]).ok_or(UtsError::InvalidFormat)?;

    if hour > 23 || minute > 59 {
        return Err(UtsError::OutOfRange);
    }
    // Leap second is a distinct, pre-date-validation error
    if second == 60 {
        return Err(UtsError::LeapSecond);
    }
    if second > 59 {
        return Err(UtsError::OutOfRange);
    }

    if !civil::validate_date(year as i32, month as u8, day as u8) {
        return Err(UtsError::InvalidDate);
    }

    let mut frac_nanos: u32 = 0;
    let mut pos = 19;

    if pos < len && bytes[pos] == b'.' {
        pos += 1;
        let frac_start = pos;
        while pos < len && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        let mut digits = &bytes[frac_start..pos];

        if digits.is_empty() {
            return Err(UtsError::InvalidFormat);
        }
        if digits.len() > 9 {
            if mode == Mode::Strict {
                return Err(UtsError::FractionTooLong);
            }
            // Truncate, not round; the cursor stays past all digits
            digits = &digits[..9];
        }

        let val = parse_digits(digits).ok_or(UtsError::InvalidFormat)?;
        frac_nanos = val * FRACTION_SCALE[digits.len() - 1];
    }

    if pos < len {
        match bytes[pos] {
            b'Z' => pos += 1,
            b'z' => {
                if mode == Mode::Strict {
                    return Err(UtsError::InvalidFormat);
                }
                pos += 1;
            }
            b'+' | b'-' => {
                if len - pos < 6 {
                    return Err(UtsError::InvalidFormat);
                }
                if bytes[pos + 3] != b':' {
                    return Err(UtsError::InvalidFormat);
                }

                let off_hour = parse_digits(&bytes[pos + 1..pos + 3]).ok_or(UtsError::InvalidFormat)?;
                let off_minute = parse_digits(&bytes[pos + 4..pos + 6]).ok_or(UtsError::InvalidFormat)?;

                if off_hour != 0 || off_minute != 0 {
                    return Err(UtsError::UnsupportedOffset);
                }
                // Strict mode rejects every explicit offset, zero included
                if mode == Mode::Strict {
                    return Err(UtsError::UnsupportedOffset);
                }
                pos += 6;
            }
            _ => {
                if mode == Mode::Strict {
                    return Err(UtsError::InvalidFormat);
                }
                // Lenient: leave the cursor; the trailing check below rejects
            }
        }
    } else if mode == Mode::Strict {
        // Missing designator entirely
        return Err(UtsError::InvalidFormat);
    }

    if pos != len {
        return Err(UtsError::InvalidFormat);
    }

    let dt = CivilDateTime {
        year: year as i32,
        month: month as u8,
        day: day as u8,
        hour: hour as u8,
        minute: minute as u8,
        second: second as u8,
        nanos: frac_nanos,
    };
    Ok(Timestamp::from_unix_nanos(dt.to_nanos()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format;
    use proptest::prelude::*;

    #[test]
    fn test_parse_strict_canonical() {
        assert_eq!(
            parse_strict("1970-01-01T00:00:00Z").unwrap(),
            Timestamp::from_unix_nanos(0)
        );
        assert_eq!(
            parse_strict("2024-12-14T03:13:21Z").unwrap(),
            Timestamp::from_unix_nanos(1_734_146_001_000_000_000)
        );
    }

    #[test]
    fn test_parse_strict_fraction() {
        assert_eq!(
            parse_strict("2024-12-14T03:13:21.5Z").unwrap(),
            Timestamp::from_unix_nanos(1_734_146_001_500_000_000)
        );
        assert_eq!(
            parse_strict("2024-12-14T03:13:21.050Z").unwrap(),
            Timestamp::from_unix_nanos(1_734_146_001_050_000_000)
        );
        assert_eq!(
            parse_strict("2024-12-14T03:13:21.123456789Z").unwrap(),
            Timestamp::from_unix_nanos(1_734_146_001_123_456_789)
        );
    }

    #[test]
    fn test_parse_strict_requires_designator() {
        assert_eq!(
            parse_strict("2024-12-14T03:13:21"),
            Err(UtsError::InvalidFormat)
        );
        assert_eq!(
            parse_strict("2024-12-14T03:13:21z"),
            Err(UtsError::InvalidFormat)
        );
    }

    #[test]
    fn test_parse_strict_rejects_all_offsets() {
        // Even an explicit zero offset is rejected in strict mode
        assert_eq!(
            parse_strict("2024-12-14T03:13:21+00:00"),
            Err(UtsError::UnsupportedOffset)
        );
        assert_eq!(
            parse_strict("2024-12-14T03:13:21+05:30"),
            Err(UtsError::UnsupportedOffset)
        );
    }

    #[test]
    fn test_parse_strict_component_ranges() {
        assert_eq!(
            parse_strict("2024-12-14T24:00:00Z"),
            Err(UtsError::OutOfRange)
        );
        assert_eq!(
            parse_strict("2024-12-14T03:60:00Z"),
            Err(UtsError::OutOfRange)
        );
        assert_eq!(
            parse_strict("2024-12-14T03:13:61Z"),
            Err(UtsError::OutOfRange)
        );
    }

    #[test]
    fn test_parse_leap_second_distinct() {
        assert_eq!(
            parse_strict("2016-12-31T23:59:60Z"),
            Err(UtsError::LeapSecond)
        );
        assert_eq!(
            parse_lenient("2016-12-31T23:59:60Z"),
            Err(UtsError::LeapSecond)
        );
    }

    #[test]
    fn test_parse_invalid_dates() {
        assert_eq!(
            parse_strict("2024-02-30T00:00:00Z"),
            Err(UtsError::InvalidDate)
        );
        assert_eq!(
            parse_strict("2024-13-01T00:00:00Z"),
            Err(UtsError::InvalidDate)
        );
        assert_eq!(
            parse_strict("2023-02-29T00:00:00Z"),
            Err(UtsError::InvalidDate)
        );
        // Leap-day acceptance
        assert!(parse_strict("2000-02-29T00:00:00Z").is_ok());
        assert!(parse_strict("2024-02-29T00:00:00Z").is_ok());
        assert_eq!(
            parse_strict("1900-02-29T00:00:00Z"),
            Err(UtsError::InvalidDate)
        );
    }

    #[test]
    fn test_parse_structural_errors() {
        assert_eq!(parse_strict(""), Err(UtsError::InvalidFormat));
        assert_eq!(parse_strict("2024-12-14"), Err(UtsError::InvalidFormat));
        assert_eq!(
            parse_strict("2024/12/14T03:13:21Z"),
            Err(UtsError::InvalidFormat)
        );
        assert_eq!(
            parse_strict("2024-12-14 03:13:21Z"),
            Err(UtsError::InvalidFormat)
        );
        assert_eq!(
            parse_strict("2024-12-14T03:13:2aZ"),
            Err(UtsError::InvalidFormat)
        );
        // Empty fraction
        assert_eq!(
            parse_strict("2024-12-14T03:13:21.Z"),
            Err(UtsError::InvalidFormat)
        );
        // Trailing garbage after the designator
        assert_eq!(
            parse_strict("2024-12-14T03:13:21Zx"),
            Err(UtsError::InvalidFormat)
        );
    }

    #[test]
    fn test_parse_fraction_too_long_strict() {
        assert_eq!(
            parse_strict("2024-12-14T03:13:21.1234567890Z"),
            Err(UtsError::FractionTooLong)
        );
    }

    #[test]
    fn test_parse_lenient_relaxations() {
        let expected = Timestamp::from_unix_nanos(1_734_146_001_000_000_000);

        // Missing designator assumes UTC
        assert_eq!(parse_lenient("2024-12-14T03:13:21").unwrap(), expected);
        // Lowercase designator
        assert_eq!(parse_lenient("2024-12-14T03:13:21z").unwrap(), expected);
        // Explicit zero offset
        assert_eq!(parse_lenient("2024-12-14T03:13:21+00:00").unwrap(), expected);
        assert_eq!(parse_lenient("2024-12-14T03:13:21-00:00").unwrap(), expected);
    }

    #[test]
    fn test_parse_lenient_truncates_long_fraction() {
        // Truncation keeps the first nine digits, no rounding
        assert_eq!(
            parse_lenient("2024-12-14T03:13:21.1234567899Z").unwrap(),
            Timestamp::from_unix_nanos(1_734_146_001_123_456_789)
        );
    }

    #[test]
    fn test_parse_lenient_still_rejects() {
        // Non-zero offsets are rejected in every mode
        assert_eq!(
            parse_lenient("2024-12-14T03:13:21+05:30"),
            Err(UtsError::UnsupportedOffset)
        );
        // Invalid dates stay invalid
        assert_eq!(
            parse_lenient("2024-02-30T00:00:00Z"),
            Err(UtsError::InvalidDate)
        );
        // Trailing garbage stays rejected (the unknown byte is not consumed)
        assert_eq!(
            parse_lenient("2024-12-14T03:13:21Q"),
            Err(UtsError::InvalidFormat)
        );
    }

    #[test]
    fn test_parse_pre_epoch() {
        assert_eq!(
            parse_strict("1969-12-31T23:59:59Z").unwrap(),
            Timestamp::from_unix_nanos(-1_000_000_000)
        );
    }

    proptest! {
        #[test]
        fn prop_format_parse_roundtrip(nanos in i64::MIN..=i64::MAX) {
            let ts = Timestamp::from_unix_nanos(nanos);
            let text = format(ts, true);
            prop_assert_eq!(parse_strict(&text).unwrap(), ts);
        }

        #[test]
        fn prop_lenient_accepts_everything_strict_accepts(nanos in i64::MIN..=i64::MAX) {
            let ts = Timestamp::from_unix_nanos(nanos);
            let text = format(ts, true);
            prop_assert_eq!(parse_lenient(&text).unwrap(), ts);
        }
    }
}
