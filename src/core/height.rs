//! Height projection: calendar dates onto the scalar time axis.
//!
//! `100` height units span one calendar year and height `0` is
//! 2000-01-01 00:00. Inside a year the twelve months share the span equally,
//! so a month always covers `100 / 12` units regardless of its length.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::core::calendar::{MAX_YEAR, MIN_YEAR, days_in_month, normalized_date};

pub const EPOCH_YEAR: i32 = 2000;
pub const HEIGHT_PER_YEAR: f64 = 100.0;
pub const HEIGHT_PER_MONTH: f64 = HEIGHT_PER_YEAR / 12.0;

/// Coarse height of January 1st of `year`.
#[must_use]
pub fn height_for_year(year: i32) -> f64 {
    f64::from(year - EPOCH_YEAR) * HEIGHT_PER_YEAR
}

/// Height of `(year, month0, day, hour)`, where `hour` may carry a fraction.
///
/// Strictly monotonic in lexicographic field order for valid dates and
/// `hour` in `[0, 24)`.
#[must_use]
pub fn height_for_date(year: i32, month0: u32, day: u32, hour: f64) -> f64 {
    let month_days = f64::from(days_in_month(year, month0));
    let year_progress = (f64::from(month0)
        + f64::from(day.saturating_sub(1)) / month_days
        + hour / (24.0 * month_days))
        / 12.0;
    height_for_year(year) + year_progress * HEIGHT_PER_YEAR
}

/// Height of a calendar instant. Minutes and seconds feed the fractional hour.
///
/// This is the single projection path for both "now" and navigated dates.
#[must_use]
pub fn height_for_datetime(datetime: NaiveDateTime) -> f64 {
    height_for_date(
        datetime.year(),
        datetime.month0(),
        datetime.day(),
        fractional_hour(datetime.time()),
    )
}

/// Height of local midnight opening `date`.
#[must_use]
pub fn height_for_day_start(date: NaiveDate) -> f64 {
    height_for_date(date.year(), date.month0(), date.day(), 0.0)
}

/// Inverse projection, accurate to the second away from float noise.
///
/// Non-finite heights collapse to the epoch.
#[must_use]
pub fn datetime_for_height(height: f64) -> NaiveDateTime {
    if !height.is_finite() {
        return normalized_date(EPOCH_YEAR, 0, 1).and_time(NaiveTime::MIN);
    }

    let years = (height / HEIGHT_PER_YEAR).floor();
    let year = (f64::from(EPOCH_YEAR) + years).clamp(f64::from(MIN_YEAR), f64::from(MAX_YEAR));
    let year = year as i32;

    let months = ((height - height_for_year(year)) / HEIGHT_PER_MONTH).clamp(0.0, 12.0);
    let month0 = (months.floor() as u32).min(11);
    let month_days = days_in_month(year, month0);

    let days = ((months - f64::from(month0)) * f64::from(month_days))
        .clamp(0.0, f64::from(month_days));
    let day_offset = (days.floor() as u32).min(month_days - 1);
    let seconds = ((days - f64::from(day_offset)) * 86_400.0)
        .round()
        .clamp(0.0, 86_399.0) as u32;

    let date = normalized_date(year, month0, day_offset + 1);
    let time = NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0).unwrap_or(NaiveTime::MIN);
    date.and_time(time)
}

#[must_use]
pub fn fractional_hour(time: NaiveTime) -> f64 {
    f64::from(time.hour())
        + f64::from(time.minute()) / 60.0
        + f64::from(time.second()) / 3_600.0
}
