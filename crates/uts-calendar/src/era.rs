//! Japanese era calendar (Gengo)
//!
//! Years are expressed as an offset within a named era rather than a
//! continuous count. The table covers the five modern eras, ordered most
//! recent first; lookup is a linear scan over the five entries.

use uts_core::{CivilDateTime, Timestamp, UtsError, UtsResult};

/// Japanese era identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JapaneseEra {
    /// 2019-05-01 onwards
    Reiwa,
    /// 1989-01-08 to 2019-04-30
    Heisei,
    /// 1926-12-25 to 1989-01-07
    Showa,
    /// 1912-07-30 to 1926-12-24
    Taisho,
    /// 1868-01-25 to 1912-07-29
    Meiji,
}

impl JapaneseEra {
    /// Romanized display name
    pub fn name(self) -> &'static str {
        match self {
            JapaneseEra::Reiwa => "Reiwa",
            JapaneseEra::Heisei => "Heisei",
            JapaneseEra::Showa => "Showa",
            JapaneseEra::Taisho => "Taisho",
            JapaneseEra::Meiji => "Meiji",
        }
    }
}

impl std::fmt::Display for JapaneseEra {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Era table entry: era and its Gregorian start date
struct EraEntry {
    era: JapaneseEra,
    start_year: i32,
    start_month: u8,
    start_day: u8,
}

/// Most recent first; the scan returns the first era that started on or
/// before the input date
const ERA_TABLE: [EraEntry; 5] = [
    EraEntry {
        era: JapaneseEra::Reiwa,
        start_year: 2019,
        start_month: 5,
        start_day: 1,
    },
    EraEntry {
        era: JapaneseEra::Heisei,
        start_year: 1989,
        start_month: 1,
        start_day: 8,
    },
    EraEntry {
        era: JapaneseEra::Showa,
        start_year: 1926,
        start_month: 12,
        start_day: 25,
    },
    EraEntry {
        era: JapaneseEra::Taisho,
        start_year: 1912,
        start_month: 7,
        start_day: 30,
    },
    EraEntry {
        era: JapaneseEra::Meiji,
        start_year: 1868,
        start_month: 1,
        start_day: 25,
    },
];

/// Resolve a timestamp to its Japanese era and within-era year.
///
/// The within-era year is 1-based (`year - era_start_year + 1`). Dates
/// before the Meiji era start (1868-01-25) fail with `OutOfRange`.
pub fn to_japanese_era(ts: Timestamp) -> UtsResult<(JapaneseEra, i32)> {
    let dt = CivilDateTime::from_nanos(ts.as_unix_nanos());

    for entry in &ERA_TABLE {
        let on_or_after_start = (dt.year, dt.month, dt.day)
            >= (entry.start_year, entry.start_month, entry.start_day);

        if on_or_after_start {
            return Ok((entry.era, dt.year - entry.start_year + 1));
        }
    }

    Err(UtsError::OutOfRange)
}
