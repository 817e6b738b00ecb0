//! ISO 8601 week dates
//!
//! Weeks start on Monday; week 1 is the week containing the year's first
//! Thursday. The week-numbering year can differ from the Gregorian year
//! by one in the first and last days of January/December.

use uts_core::{civil, CivilDateTime, Timestamp};

/// ISO week date: week-numbering year, week 1-53, weekday 1=Monday..7=Sunday
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IsoWeekDate {
    pub year: i32,
    pub week: u8,
    pub weekday: u8,
}

/// Project a timestamp onto the ISO week calendar.
pub fn to_iso_week(ts: Timestamp) -> IsoWeekDate {
    let dt = CivilDateTime::from_nanos(ts.as_unix_nanos());

    // Epoch day 0 (1970-01-01) was a Thursday, hence the +3 rebase to
    // Monday. The day count comes from the broken-down date so pre-epoch
    // instants with a time of day land on the right calendar day.
    let days = civil::days_from_epoch(dt.year, dt.month, dt.day);
    let dow = (days + 3).rem_euclid(7); // 0=Monday .. 6=Sunday
    let weekday = dow as u8 + 1;

    let mut day_of_year: i64 = 0;
    for m in 1..dt.month {
        day_of_year += i64::from(civil::days_in_month(dt.year, m));
    }
    day_of_year += i64::from(dt.day);

    // The Thursday of this date's week decides the week-numbering year
    let mut anchor = day_of_year + (3 - dow);
    let mut iso_year = dt.year;

    if anchor < 1 {
        iso_year -= 1;
        anchor += civil::days_in_year(iso_year);
    } else if anchor > civil::days_in_year(dt.year) {
        anchor -= civil::days_in_year(dt.year);
        iso_year += 1;
    }

    IsoWeekDate {
        year: iso_year,
        week: ((anchor + 6) / 7) as u8,
        weekday,
    }
}
