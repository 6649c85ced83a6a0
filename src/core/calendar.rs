//! Gregorian calendar primitives.
//!
//! Months are 0-based (`0` = January) and days are 1-based throughout the
//! crate. Every date built here goes through `normalized_date`, so callers
//! never hold an invalid `(year, month, day)` tuple.

use chrono::{Datelike, Days, NaiveDate};
use smallvec::SmallVec;

/// Earliest year the engine will construct; offsets beyond it saturate.
pub const MIN_YEAR: i32 = -200_000;
/// Latest year the engine will construct; offsets beyond it saturate.
pub const MAX_YEAR: i32 = 200_000;

pub const DAYS_PER_WEEK: i64 = 7;
pub const MONTHS_PER_YEAR: i32 = 12;
pub const MONTHS_PER_QUARTER: i32 = 3;

/// Gregorian leap rule: divisible by 4, not by 100 unless by 400.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[must_use]
pub const fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Days in `month0` (0-based) of `year`. Out-of-range months are wrapped.
#[must_use]
pub const fn days_in_month(year: i32, month0: u32) -> u32 {
    match month0 % 12 {
        1 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        3 | 5 | 8 | 10 => 30,
        _ => 31,
    }
}

/// Builds a date, clamping the year into the supported range, the month into
/// `0..=11` and the day into `1..=days_in_month`.
#[must_use]
pub fn normalized_date(year: i32, month0: u32, day: u32) -> NaiveDate {
    let year = year.clamp(MIN_YEAR, MAX_YEAR);
    let month0 = month0.min(11);
    let day = day.clamp(1, days_in_month(year, month0));
    // Unreachable after clamping: every component is inside chrono's range.
    NaiveDate::from_ymd_opt(year, month0 + 1, day).unwrap_or(NaiveDate::MIN)
}

/// Resolves an absolute month count (`year * 12 + month0`) into a date on
/// `day`, clamped to the length of the target month.
#[must_use]
pub fn date_from_month_index(month_index: i64, day: u32) -> NaiveDate {
    let year = month_index.div_euclid(i64::from(MONTHS_PER_YEAR));
    let month0 = month_index.rem_euclid(i64::from(MONTHS_PER_YEAR)) as u32;
    let year = year.clamp(i64::from(MIN_YEAR), i64::from(MAX_YEAR)) as i32;
    normalized_date(year, month0, day)
}

/// Absolute month count of `date`, the inverse of `date_from_month_index`.
#[must_use]
pub fn month_index(date: NaiveDate) -> i64 {
    i64::from(date.year()) * i64::from(MONTHS_PER_YEAR) + i64::from(date.month0())
}

/// Moves `date` by a signed number of days, saturating at chrono's range.
#[must_use]
pub fn shift_days(date: NaiveDate, days: i64) -> NaiveDate {
    if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
            .unwrap_or(NaiveDate::MAX)
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
            .unwrap_or(NaiveDate::MIN)
    }
}

/// Weekday index where Sunday is `0` and Saturday is `6`.
#[must_use]
pub fn day_of_week_from_sunday(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// First Sunday on or before `date`.
#[must_use]
pub fn sunday_on_or_before(date: NaiveDate) -> NaiveDate {
    shift_days(date, -i64::from(day_of_week_from_sunday(date)))
}

/// Whole days from `from` to `to` (negative when `to` is earlier).
#[must_use]
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// Day count of the synthetic lunation: exactly four weeks.
pub const LUNATION_DAYS: i64 = 28;
pub const WEEKS_PER_LUNATION: u32 = 4;

/// Sunday opening lunation `0`: the Sunday on or before the 2000-01-06 new
/// moon. Day `0` of every lunation is treated as new moon.
#[must_use]
pub fn lunation_epoch() -> NaiveDate {
    normalized_date(2000, 0, 2)
}

/// Lunation index and week-within-lunation (`0..=3`) holding `date`.
#[must_use]
pub fn lunation_position(date: NaiveDate) -> (i64, u32) {
    let days = days_between(lunation_epoch(), date);
    let cycle = days.div_euclid(LUNATION_DAYS);
    let week = (days.rem_euclid(LUNATION_DAYS) / DAYS_PER_WEEK) as u32;
    (cycle, week)
}

/// Sunday that opens lunation `cycle`.
#[must_use]
pub fn lunation_start(cycle: i64) -> NaiveDate {
    shift_days(lunation_epoch(), cycle.saturating_mul(LUNATION_DAYS))
}

/// Sunday-anchored rows that intersect one calendar month.
///
/// Row `0` starts on the first Sunday on or before the 1st; the last row
/// contains the final day of the month. A month spans 4 to 6 rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthWeekGrid {
    year: i32,
    month0: u32,
    row_starts: SmallVec<[NaiveDate; 6]>,
}

impl MonthWeekGrid {
    pub const MAX_ROWS: u32 = 6;

    #[must_use]
    pub fn new(year: i32, month0: u32) -> Self {
        let first = normalized_date(year, month0, 1);
        let last = normalized_date(year, month0, days_in_month(year, month0));
        let mut row_starts = SmallVec::new();
        let mut start = sunday_on_or_before(first);
        while start <= last {
            row_starts.push(start);
            start = shift_days(start, DAYS_PER_WEEK);
        }
        Self {
            year: first.year(),
            month0: first.month0(),
            row_starts,
        }
    }

    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month0())
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    #[must_use]
    pub fn month0(&self) -> u32 {
        self.month0
    }

    #[must_use]
    pub fn row_count(&self) -> u32 {
        self.row_starts.len() as u32
    }

    /// Sunday that opens `row`; rows past the end clamp to the last row.
    #[must_use]
    pub fn row_start(&self, row: u32) -> NaiveDate {
        let index = (row as usize).min(self.row_starts.len().saturating_sub(1));
        self.row_starts
            .get(index)
            .copied()
            .unwrap_or_else(|| sunday_on_or_before(self.first_day()))
    }

    #[must_use]
    pub fn row_starts(&self) -> &[NaiveDate] {
        &self.row_starts
    }

    /// Row index holding `date`, clamped to `0..=5`.
    #[must_use]
    pub fn row_of(&self, date: NaiveDate) -> u32 {
        let origin = sunday_on_or_before(self.first_day());
        let weeks = days_between(origin, date).div_euclid(DAYS_PER_WEEK);
        weeks.clamp(0, i64::from(Self::MAX_ROWS - 1)) as u32
    }

    #[must_use]
    pub fn first_day(&self) -> NaiveDate {
        normalized_date(self.year, self.month0, 1)
    }

    #[must_use]
    pub fn last_day(&self) -> NaiveDate {
        normalized_date(self.year, self.month0, days_in_month(self.year, self.month0))
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first_day() && date <= self.last_day()
    }

    /// Clamps `date` into the month's first..=last day.
    #[must_use]
    pub fn clamp_into_month(&self, date: NaiveDate) -> NaiveDate {
        date.clamp(self.first_day(), self.last_day())
    }

    /// Every day of the month paired with the row that holds it.
    pub fn days(&self) -> impl Iterator<Item = (u32, NaiveDate)> + '_ {
        let first = self.first_day();
        (0..days_in_month(self.year, self.month0)).map(move |offset| {
            let date = shift_days(first, i64::from(offset));
            (self.row_of(date), date)
        })
    }
}
