//! Canonical timestamp formatter
//!
//! Output shape is fixed: `YYYY-MM-DDTHH:MM:SS`, an optional fraction of
//! 1-9 digits with trailing zeros stripped, then `Z`. No locale, no
//! timezone variation.

use uts_core::{CivilDateTime, Timestamp, UtsError, UtsResult};

/// Worst-case formatted length in bytes: `YYYY-MM-DDTHH:MM:SS.nnnnnnnnnZ`
pub const MAX_TIMESTAMP_LEN: usize = 30;

/// Format a timestamp to its canonical textual form.
///
/// The fraction is emitted only when `include_nanos` is true and the
/// fractional component is non-zero; trailing zeros are stripped but at
/// least one digit is kept.
pub fn format(ts: Timestamp, include_nanos: bool) -> String {
    let dt = CivilDateTime::from_nanos(ts.as_unix_nanos());

    let mut out = format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
        dt.year,
        dt.month,
        dt.day,
        dt.hour,
        dt.minute,
        dt.second
    );

    if include_nanos && dt.nanos > 0 {
        let frac = format!("{:09}", dt.nanos);
        // dt.nanos > 0, so at least one non-zero digit survives
        out.push('.');
        out.push_str(frac.trim_end_matches('0'));
    }

    out.push('Z');
    out
}

/// Format into a caller-provided buffer.
///
/// The buffer must hold the worst case ([`MAX_TIMESTAMP_LEN`] bytes);
/// returns the number of bytes written.
pub fn format_into(ts: Timestamp, buf: &mut [u8], include_nanos: bool) -> UtsResult<usize> {
    if buf.len() < MAX_TIMESTAMP_LEN {
        return Err(UtsError::BufferTooShort {
            expected: MAX_TIMESTAMP_LEN,
            actual: buf.len(),
        });
    }

    let text = format(ts, include_nanos);
    buf[..text.len()].copy_from_slice(text.as_bytes());
    Ok(text.len())
}
