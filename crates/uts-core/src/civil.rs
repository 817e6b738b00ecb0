//! Calendar arithmetic - proleptic Gregorian, always UTC
//!
//! Conversion between broken-down calendar time and nanoseconds since the
//! Unix epoch. The year and month resolution walks year-by-year and
//! month-by-month from 1970 rather than using closed-form day-number
//! formulas; the loops are bounded (years 1677-2262 for any `i64`
//! nanosecond count) and trivially auditable.

pub const NANOS_PER_SECOND: i64 = 1_000_000_000;
pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = 3_600;
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Days per month, 1-indexed; February before leap adjustment
const DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian leap-year rule: divisible by 4 and (not by 100 or by 400)
#[inline]
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Days in a calendar year (365 or 366)
#[inline]
pub fn days_in_year(year: i32) -> i64 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Days in a month, February adjusted for leap years. Returns 0 for
/// months outside 1-12.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    if !(1..=12).contains(&month) {
        return 0;
    }
    if month == 2 && is_leap_year(year) {
        return 29;
    }
    DAYS_IN_MONTH[month as usize]
}

/// Validate a calendar date: year 0-9999, month 1-12, day within month
pub fn validate_date(year: i32, month: u8, day: u8) -> bool {
    if !(0..=9999).contains(&year) {
        return false;
    }
    if !(1..=12).contains(&month) {
        return false;
    }
    day >= 1 && day <= days_in_month(year, month)
}

/// Signed day count from 1970-01-01 to the given date
pub fn days_from_epoch(year: i32, month: u8, day: u8) -> i64 {
    let mut days: i64 = 0;

    if year >= 1970 {
        for y in 1970..year {
            days += days_in_year(y);
        }
    } else {
        for y in year..1970 {
            days -= days_in_year(y);
        }
    }

    for m in 1..month {
        days += i64::from(days_in_month(year, m));
    }

    days + i64::from(day) - 1
}

/// Broken-down calendar time
///
/// Ephemeral decomposition of a [`crate::Timestamp`]; produced by
/// [`CivilDateTime::from_nanos`], consumed immediately by the formatter
/// or a calendar projection, never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CivilDateTime {
    pub year: i32,
    /// 1-12
    pub month: u8,
    /// 1-31
    pub day: u8,
    /// 0-23
    pub hour: u8,
    /// 0-59
    pub minute: u8,
    /// 0-59
    pub second: u8,
    /// Fractional nanoseconds, 0-999_999_999
    pub nanos: u32,
}

impl CivilDateTime {
    /// Convert to nanoseconds since the Unix epoch.
    ///
    /// Performs no validation - callers validate first (the parser does).
    /// Dates whose nanosecond count exceeds the `i64` range (outside
    /// roughly 1677-2262) clamp to the nearest representable instant.
    pub fn to_nanos(&self) -> i64 {
        let days = days_from_epoch(self.year, self.month, self.day);
        let seconds = days * SECONDS_PER_DAY
            + i64::from(self.hour) * SECONDS_PER_HOUR
            + i64::from(self.minute) * SECONDS_PER_MINUTE
            + i64::from(self.second);
        // Widen for the final multiply: near the i64 limits the whole-second
        // product alone can overflow even when seconds-plus-fraction fits.
        let nanos = i128::from(seconds) * i128::from(NANOS_PER_SECOND) + i128::from(self.nanos);
        nanos.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
    }

    /// Convert nanoseconds since the Unix epoch to broken-down time.
    ///
    /// Negative remainders borrow a second (the fraction is always in
    /// [0, 1e9)) and then a day (time-of-day always in [0, 86400)), so
    /// pre-epoch instants resolve to the calendar day they fall in.
    pub fn from_nanos(nanos: i64) -> Self {
        let mut total_seconds = nanos / NANOS_PER_SECOND;
        let mut frac = nanos % NANOS_PER_SECOND;
        if frac < 0 {
            frac += NANOS_PER_SECOND;
            total_seconds -= 1;
        }

        let mut days = total_seconds / SECONDS_PER_DAY;
        let mut day_seconds = total_seconds % SECONDS_PER_DAY;
        if day_seconds < 0 {
            day_seconds += SECONDS_PER_DAY;
            days -= 1;
        }

        let hour = (day_seconds / SECONDS_PER_HOUR) as u8;
        let minute = ((day_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE) as u8;
        let second = (day_seconds % SECONDS_PER_MINUTE) as u8;

        let mut year = 1970;
        if days >= 0 {
            loop {
                let len = days_in_year(year);
                if days < len {
                    break;
                }
                days -= len;
                year += 1;
            }
        } else {
            while days < 0 {
                year -= 1;
                days += days_in_year(year);
            }
        }

        let mut month: u8 = 1;
        loop {
            let len = i64::from(days_in_month(year, month));
            if days < len {
                break;
            }
            days -= len;
            month += 1;
        }

        CivilDateTime {
            year,
            month,
            day: days as u8 + 1,
            hour,
            minute,
            second,
            nanos: frac as u32,
        }
    }
}
