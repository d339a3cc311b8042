//! Age computation.
//!
//! Ages are whole years between a birthdate and a reference date. The
//! reference date is always explicit in the engines so that results do not
//! drift with the wall clock.

use chrono::{Datelike, NaiveDate, Utc};

/// Returns the age in whole years on `reference_date`.
///
/// The year difference is reduced by one when the birthday has not yet been
/// reached in the reference year. A reference date earlier than the
/// birthdate yields a negative value.
///
/// # Examples
///
/// ```
/// use employee_analytics::analytics::age_on;
/// use chrono::NaiveDate;
///
/// let birthdate = NaiveDate::from_ymd_opt(2000, 3, 15).unwrap();
/// let day_before = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
/// let birthday = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
///
/// assert_eq!(age_on(birthdate, day_before), 23);
/// assert_eq!(age_on(birthdate, birthday), 24);
/// ```
pub fn age_on(birthdate: NaiveDate, reference_date: NaiveDate) -> i32 {
    let years = reference_date.year() - birthdate.year();
    let birthday_pending =
        (reference_date.month(), reference_date.day()) < (birthdate.month(), birthdate.day());
    if birthday_pending { years - 1 } else { years }
}

/// Returns the current UTC date.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Returns the age in whole years as of today (UTC).
pub fn age_today(birthdate: NaiveDate) -> i32 {
    age_on(birthdate, today())
}
