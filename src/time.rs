//! Calendar helpers for the 1-based day-of-year index used throughout the crate.
//!
//! Dates are proleptic Gregorian. Leap years keep their natural ordinals (December 31st is day
//! 366); the declination formula is periodic, so day 366 behaves like day 1.

use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::Datelike;

/// Cumulative day counts before the first of each month in a common year.
const DAYS_BEFORE_MONTH: [i32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Checks for a Gregorian leap year.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!("month already validated"),
    }
}

/// Computes the 1-based day of year for a Gregorian calendar date.
///
/// # Arguments
/// * `year` - Year (leap years per the Gregorian rule)
/// * `month` - Month (1-12)
/// * `day` - Day of month (1-31, checked against the month length)
///
/// # Returns
/// Day of year, 1 to 365 (366 in leap years)
///
/// # Errors
/// Returns `InvalidDate` for an invalid month or a day outside the month.
///
/// # Example
/// ```
/// use pv_yield::time::day_of_year;
///
/// assert_eq!(day_of_year(2023, 1, 1).unwrap(), 1);
/// assert_eq!(day_of_year(2023, 6, 21).unwrap(), 172);
/// assert_eq!(day_of_year(2024, 12, 31).unwrap(), 366);
/// assert!(day_of_year(2023, 2, 29).is_err());
/// ```
pub fn day_of_year(year: i32, month: u32, day: u32) -> Result<i32> {
    if !(1..=12).contains(&month) {
        return Err(Error::invalid_date("month must be between 1 and 12"));
    }
    if !(1..=31).contains(&day) {
        return Err(Error::invalid_date("day must be between 1 and 31"));
    }
    if day > days_in_month(year, month) {
        return Err(Error::invalid_date("day is out of range for month"));
    }

    let month_index = (month - 1) as usize;
    let leap_day = i32::from(month > 2 && is_leap_year(year));
    // day <= 31 after validation
    Ok(DAYS_BEFORE_MONTH[month_index] + leap_day + day as i32)
}

/// Gets the day of year from any date-like type.
///
/// Works with `DateTime`, `NaiveDateTime`, `NaiveDate` and anything else implementing `Datelike`.
///
/// # Example
/// ```
/// # use pv_yield::time::day_of_year_from_date_like;
/// # use chrono::{DateTime, FixedOffset, NaiveDate};
/// let date = NaiveDate::from_ymd_opt(2023, 12, 21).unwrap();
/// assert_eq!(day_of_year_from_date_like(date), 355);
///
/// let datetime = "2023-06-21T12:00:00-07:00".parse::<DateTime<FixedOffset>>().unwrap();
/// assert_eq!(day_of_year_from_date_like(datetime), 172);
/// ```
#[cfg(feature = "chrono")]
#[allow(clippy::needless_pass_by_value)]
#[must_use]
pub fn day_of_year_from_date_like<D: Datelike>(date: D) -> i32 {
    // ordinal() is at most 366
    date.ordinal() as i32
}
