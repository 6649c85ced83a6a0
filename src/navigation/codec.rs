//! Pure decode/encode between `NavigationState` and a selected instant.
//!
//! Offsets are interpreted relative to `now`, which is always passed in
//! explicitly. `decode(encode(d, level), level)` returns `d` rounded to the
//! level's granularity: fields finer than the level's unit are taken from
//! `now`, exactly as `decode` fills them.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::core::ZoomLevel;
use crate::core::calendar::{
    DAYS_PER_WEEK, MONTHS_PER_QUARTER, MONTHS_PER_YEAR, MonthWeekGrid, WEEKS_PER_LUNATION,
    date_from_month_index, day_of_week_from_sunday, days_between, lunation_position,
    lunation_start, month_index, normalized_date, shift_days, sunday_on_or_before,
};

use super::NavigationState;

/// Instant selected by `state` at `level`.
#[must_use]
pub fn decode(state: &NavigationState, level: ZoomLevel, now: NaiveDateTime) -> NaiveDateTime {
    let today = now.date();
    let date = match level {
        ZoomLevel::Overview | ZoomLevel::Century | ZoomLevel::Decade => {
            normalized_date(selected_year(state, now), today.month0(), today.day())
        }
        ZoomLevel::Year => normalized_date(
            selected_year(state, now),
            state.month_in_year.clamp(0, MONTHS_PER_YEAR - 1) as u32,
            today.day(),
        ),
        ZoomLevel::Quarter => {
            let actual_quarter = (today.month0() as i32) / MONTHS_PER_QUARTER;
            let month_in_year = (i64::from(actual_quarter) + i64::from(state.quarter_offset))
                * i64::from(MONTHS_PER_QUARTER)
                + i64::from(state.month_in_quarter.clamp(0, MONTHS_PER_QUARTER - 1));
            date_from_month_index(
                i64::from(today.year()) * i64::from(MONTHS_PER_YEAR) + month_in_year,
                today.day(),
            )
        }
        ZoomLevel::Month => {
            let grid = target_month_grid(state, now);
            let row = state.week_in_month.clamp(0, grid.row_count() as i32 - 1) as u32;
            let date = shift_days(
                grid.row_start(row),
                i64::from(day_of_week_from_sunday(today)),
            );
            grid.clamp_into_month(date)
        }
        ZoomLevel::Lunar => {
            let (cycle, _) = lunation_position(today);
            let week = state.week_in_lunation.clamp(0, WEEKS_PER_LUNATION as i32 - 1);
            shift_days(
                lunation_start(cycle + i64::from(state.lunar_offset)),
                i64::from(week) * DAYS_PER_WEEK + i64::from(day_of_week_from_sunday(today)),
            )
        }
        ZoomLevel::Week => shift_days(
            sunday_on_or_before(today),
            i64::from(state.week_offset) * DAYS_PER_WEEK
                + i64::from(state.day_in_week.clamp(0, DAYS_PER_WEEK as i32 - 1)),
        ),
        ZoomLevel::Day | ZoomLevel::Clock => {
            let date = shift_days(today, i64::from(state.hour_offset));
            let hour = state.hour_in_day.clamp(0, 23) as u32;
            let time = now.time().with_hour(hour).unwrap_or(now.time());
            return date.and_time(time);
        }
    };
    date.and_time(now.time())
}

/// Navigation state that selects `selected` at `level`.
///
/// `selected` is first rounded to `level`'s granularity, then every field
/// of the state is derived from that one instant, so decoding the result at
/// a coarser level lands in the same unit as well.
#[must_use]
pub fn encode(selected: NaiveDateTime, level: ZoomLevel, now: NaiveDateTime) -> NavigationState {
    let snapped = decode(&encode_all_fields(selected, now), level, now);
    encode_all_fields(snapped, now)
}

fn encode_all_fields(selected: NaiveDateTime, now: NaiveDateTime) -> NavigationState {
    let date = selected.date();
    let today = now.date();

    let months_from_now_year =
        (i64::from(date.year()) - i64::from(today.year())) * i64::from(MONTHS_PER_YEAR)
            + i64::from(date.month0());
    let quarter_index = months_from_now_year.div_euclid(i64::from(MONTHS_PER_QUARTER));
    let actual_quarter = i64::from(today.month0()) / i64::from(MONTHS_PER_QUARTER);

    let (cycle, week_in_lunation) = lunation_position(date);
    let (actual_cycle, _) = lunation_position(today);

    NavigationState {
        decade_offset: 0,
        year_offset: saturating_i32(i64::from(date.year()) - i64::from(today.year())),
        quarter_offset: saturating_i32(quarter_index - actual_quarter),
        month_offset: saturating_i32(month_index(date) - month_index(today)),
        week_offset: saturating_i32(
            days_between(sunday_on_or_before(today), sunday_on_or_before(date)) / DAYS_PER_WEEK,
        ),
        hour_offset: saturating_i32(days_between(today, date)),
        lunar_offset: saturating_i32(cycle - actual_cycle),
        month_in_year: date.month0() as i32,
        month_in_quarter: months_from_now_year.rem_euclid(i64::from(MONTHS_PER_QUARTER)) as i32,
        week_in_month: MonthWeekGrid::containing(date).row_of(date) as i32,
        week_in_lunation: week_in_lunation as i32,
        day_in_week: day_of_week_from_sunday(date) as i32,
        hour_in_day: selected.hour() as i32,
    }
}

/// Re-anchors `state` from `old_now` onto `new_now` at `level`.
///
/// Counters are absolute positions, so they go stale when the clock crosses
/// a unit boundary. A state sitting at the old present becomes the new
/// present; any other state keeps selecting the same unit at `level`, with
/// finer fields taken from `new_now`.
#[must_use]
pub fn rebase(
    state: &NavigationState,
    level: ZoomLevel,
    old_now: NaiveDateTime,
    new_now: NaiveDateTime,
) -> NavigationState {
    if old_now == new_now {
        return *state;
    }
    if *state == NavigationState::present(old_now) {
        return NavigationState::present(new_now);
    }
    encode(decode(state, level, old_now), level, new_now)
}

/// Year read by Overview, Century, Decade and Year levels.
#[must_use]
pub fn selected_year(state: &NavigationState, now: NaiveDateTime) -> i32 {
    let year = i64::from(now.year())
        + 10 * i64::from(state.decade_offset)
        + i64::from(state.year_offset);
    saturating_i32(year)
}

/// Month grid displayed by the Month level for `state`.
#[must_use]
pub fn target_month_grid(state: &NavigationState, now: NaiveDateTime) -> MonthWeekGrid {
    let first = target_month_first_day(state, now);
    MonthWeekGrid::new(first.year(), first.month0())
}

fn target_month_first_day(state: &NavigationState, now: NaiveDateTime) -> NaiveDate {
    date_from_month_index(month_index(now.date()) + i64::from(state.month_offset), 1)
}

fn saturating_i32(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> NaiveDateTime {
        normalized_date(2026, 9, 14)
            .and_hms_opt(9, 41, 27)
            .expect("valid time")
    }

    #[test]
    fn present_decodes_to_now_at_every_level() {
        let state = NavigationState::present(now());
        for level in ZoomLevel::ALL {
            assert_eq!(decode(&state, level, now()), now(), "{level:?}");
        }
    }

    #[test]
    fn quarter_offset_rolls_into_previous_year() {
        let mut state = NavigationState::present(now());
        state.quarter_offset = -4;
        state.month_in_quarter = 0;
        let selected = decode(&state, ZoomLevel::Quarter, now());
        assert_eq!((selected.year(), selected.month0()), (2025, 9));
    }

    #[test]
    fn month_decode_stays_inside_target_month() {
        let mut state = NavigationState::present(now());
        // 2026-10-14 is a Wednesday; row 0 of November 2026 starts on Nov 1.
        state.month_offset = 1;
        state.week_in_month = 0;
        let selected = decode(&state, ZoomLevel::Month, now());
        assert_eq!((selected.month0(), selected.day()), (10, 4));

        // December 2026 row 0 starts Sunday Nov 29; Wednesday is Dec 2.
        state.month_offset = 2;
        let selected = decode(&state, ZoomLevel::Month, now());
        assert_eq!((selected.month0(), selected.day()), (11, 2));
    }

    #[test]
    fn month_decode_clamps_leading_partial_row() {
        // 2026-11-08 is a Sunday; row 0 of December opens on Sunday Nov 29.
        let sunday = normalized_date(2026, 10, 8)
            .and_hms_opt(12, 0, 0)
            .expect("valid time");
        let mut state = NavigationState::present(sunday);
        state.month_offset = 1;
        state.week_in_month = 0;
        let selected = decode(&state, ZoomLevel::Month, sunday);
        assert_eq!((selected.month0(), selected.day()), (11, 1));
    }

    #[test]
    fn encode_round_trips_a_clock_selection() {
        let selected = normalized_date(2019, 1, 28)
            .and_hms_opt(5, 0, 0)
            .expect("valid time");
        let state = encode(selected, ZoomLevel::Clock, now());
        let decoded = decode(&state, ZoomLevel::Clock, now());
        assert_eq!(decoded.date(), selected.date());
        assert_eq!(decoded.hour(), 5);
        assert_eq!(decoded.minute(), now().minute());
    }

    #[test]
    fn rebase_moves_the_present_across_midnight_and_week_rollover() {
        let saturday_night = normalized_date(2026, 9, 17)
            .and_hms_opt(23, 50, 0)
            .expect("valid time");
        let sunday_morning = normalized_date(2026, 9, 18)
            .and_hms_opt(0, 10, 0)
            .expect("valid time");
        let stale = NavigationState::present(saturday_night);
        for level in ZoomLevel::ALL {
            let rebased = rebase(&stale, level, saturday_night, sunday_morning);
            assert_eq!(rebased, NavigationState::present(sunday_morning), "{level:?}");
            assert_eq!(decode(&rebased, level, sunday_morning), sunday_morning);
        }
    }

    #[test]
    fn rebase_keeps_a_navigated_selection() {
        let mut state = NavigationState::present(now());
        state.navigate(ZoomLevel::Week, crate::navigation::Direction::Backward, now());
        let selected = decode(&state, ZoomLevel::Week, now());

        let later = normalized_date(2026, 9, 18)
            .and_hms_opt(0, 5, 0)
            .expect("valid time");
        let rebased = rebase(&state, ZoomLevel::Week, now(), later);
        let reselected = decode(&rebased, ZoomLevel::Week, later);
        assert_eq!(reselected.date(), selected.date());
        assert_eq!(reselected.time(), later.time());
        assert_eq!(rebased.week_offset, -1);
    }
}
