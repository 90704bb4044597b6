//! Calendar arithmetic on local calendar dates.
//!
//! Everything here works on whole calendar days. Inputs that carry a time of
//! day are first reduced to their calendar date through [`CalendarDay`], so
//! results never depend on the wall-clock time of either argument, and a
//! daylight-saving shift can never produce a fractional day.

use chrono::{DateTime, Datelike, Days, Local, NaiveDate, NaiveDateTime, TimeZone};

use crate::{CoreError, Result};

/// Anything that can be reduced to a calendar date.
pub trait CalendarDay {
    fn calendar_day(&self) -> NaiveDate;
}

impl CalendarDay for NaiveDate {
    fn calendar_day(&self) -> NaiveDate {
        *self
    }
}

impl CalendarDay for NaiveDateTime {
    fn calendar_day(&self) -> NaiveDate {
        self.date()
    }
}

/// Uses the date as seen in the value's own time zone.
impl<Tz: TimeZone> CalendarDay for DateTime<Tz> {
    fn calendar_day(&self) -> NaiveDate {
        self.date_naive()
    }
}

impl<T: CalendarDay + ?Sized> CalendarDay for &T {
    fn calendar_day(&self) -> NaiveDate {
        (**self).calendar_day()
    }
}

/// Today's date in the local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Signed number of whole days from `from` to `to`.
pub fn days_between(from: impl CalendarDay, to: impl CalendarDay) -> i64 {
    to.calendar_day()
        .signed_duration_since(from.calendar_day())
        .num_days()
}

/// Signed number of whole calendar days from `today` to `target`.
///
/// Positive means `target` is in the future, 0 means it is today and negative
/// means it has passed.
pub fn days_until_from(today: impl CalendarDay, target: impl CalendarDay) -> i64 {
    days_between(today, target)
}

/// Like [`days_until_from`], reading today's local date once.
pub fn days_until(target: impl CalendarDay) -> i64 {
    days_until_from(today(), target)
}

/// Whole years elapsed between `dob` and `today`.
///
/// The count drops by one while this year's birthday is still ahead. A
/// 29 February birthday counts as reached on 1 March in common years.
pub fn age_years_on(dob: impl CalendarDay, today: impl CalendarDay) -> i32 {
    let dob = dob.calendar_day();
    let today = today.calendar_day();

    let mut age = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    age
}

/// Like [`age_years_on`], measured against today's local date.
pub fn age_years(dob: impl CalendarDay) -> i32 {
    age_years_on(dob, today())
}

/// Render a date for display, e.g. `Mar 5, 2025`.
pub fn format_display_date(date: impl CalendarDay) -> String {
    date.calendar_day().format("%b %-d, %Y").to_string()
}

/// Shift `date` by a signed number of days.
///
/// Saturates at [`NaiveDate::MIN`] / [`NaiveDate::MAX`] instead of overflowing.
pub fn add_days(date: impl CalendarDay, days: i64) -> NaiveDate {
    let date = date.calendar_day();
    let shifted = if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    };

    shifted.unwrap_or(if days >= 0 {
        NaiveDate::MAX
    } else {
        NaiveDate::MIN
    })
}

/// 1-based ordinal day within the year (1 January is 1).
pub fn day_of_year(date: impl CalendarDay) -> u32 {
    date.calendar_day().ordinal()
}

/// Parse a date written as `YYYY-MM-DD` or as an RFC 3339 timestamp.
///
/// Timestamps keep the calendar date exactly as written, ignoring the offset.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.date_naive());
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(timestamp.date());
    }

    Err(CoreError::invalid_date(trimmed))
}
