//! Year-offset calendars
//!
//! Thai Buddhist, Korean Dangi, and Minguo (ROC) calendars share the
//! Gregorian month/day structure and differ only in the year count.
//! These are pure integer conversions with no validation; inputs are
//! assumed to be already-valid Gregorian years.

const THAI_OFFSET: i32 = 543;
const DANGI_OFFSET: i32 = 2333;
const MINGUO_OFFSET: i32 = 1911;

/// Gregorian year to Thai Buddhist Era year
#[inline]
pub fn gregorian_to_thai(gregorian_year: i32) -> i32 {
    gregorian_year + THAI_OFFSET
}

/// Thai Buddhist Era year to Gregorian year
#[inline]
pub fn thai_to_gregorian(thai_year: i32) -> i32 {
    thai_year - THAI_OFFSET
}

/// Gregorian year to Korean Dangi year
#[inline]
pub fn gregorian_to_dangi(gregorian_year: i32) -> i32 {
    gregorian_year + DANGI_OFFSET
}

/// Korean Dangi year to Gregorian year
#[inline]
pub fn dangi_to_gregorian(dangi_year: i32) -> i32 {
    dangi_year - DANGI_OFFSET
}

/// Gregorian year to Minguo (ROC) year
#[inline]
pub fn gregorian_to_minguo(gregorian_year: i32) -> i32 {
    gregorian_year - MINGUO_OFFSET
}

/// Minguo (ROC) year to Gregorian year
#[inline]
pub fn minguo_to_gregorian(minguo_year: i32) -> i32 {
    minguo_year + MINGUO_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_offsets() {
        assert_eq!(gregorian_to_thai(2024), 2567);
        assert_eq!(gregorian_to_dangi(2024), 4357);
        assert_eq!(gregorian_to_minguo(2024), 113);
    }

    #[test]
    fn test_inverses_at_boundaries() {
        assert_eq!(thai_to_gregorian(gregorian_to_thai(0)), 0);
        assert_eq!(minguo_to_gregorian(gregorian_to_minguo(1911)), 1911);
    }

    proptest! {
        #[test]
        fn prop_offset_conversions_invert(year in 0i32..=9999) {
            prop_assert_eq!(thai_to_gregorian(gregorian_to_thai(year)), year);
            prop_assert_eq!(dangi_to_gregorian(gregorian_to_dangi(year)), year);
            prop_assert_eq!(minguo_to_gregorian(gregorian_to_minguo(year)), year);
        }
    }
}
