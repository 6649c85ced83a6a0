use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::core::ZoomLevel;
use crate::core::calendar::{
    MONTHS_PER_QUARTER, MONTHS_PER_YEAR, MonthWeekGrid, WEEKS_PER_LUNATION,
    day_of_week_from_sunday, lunation_position,
};

use super::codec::target_month_grid;

/// Hours moved by one navigation step at Day/Clock levels.
pub const HOUR_STEP: i32 = 3;
const HOURS_PER_DAY: i32 = 24;
const DAYS_PER_WEEK: i32 = 7;

/// Direction of one navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    #[must_use]
    pub const fn sign(self) -> i32 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

/// Mixed-radix odometer of how far the user navigated from "now".
///
/// Offsets are signed deltas in level-native units. Counters hold the
/// position inside the active unit and carry into the next coarser offset
/// when they wrap. Only the fields read by the active level's decode rule
/// are authoritative; `encode` rewrites all of them from one instant so a
/// level switch never observes stale fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct NavigationState {
    pub decade_offset: i32,
    pub year_offset: i32,
    pub quarter_offset: i32,
    /// Month-level offset, in months.
    pub month_offset: i32,
    /// Week-level offset, in weeks.
    pub week_offset: i32,
    /// Day/Clock-level offset, in days.
    pub hour_offset: i32,
    /// Lunar-level offset, in 28-day lunations.
    pub lunar_offset: i32,

    /// `0..=11`.
    pub month_in_year: i32,
    /// `0..=2`.
    pub month_in_quarter: i32,
    /// Row of the Sunday-anchored month grid, `0..=5`.
    pub week_in_month: i32,
    /// `0..=3`.
    pub week_in_lunation: i32,
    /// `0` = Sunday.
    pub day_in_week: i32,
    /// `0..=23`.
    pub hour_in_day: i32,
}

impl NavigationState {
    /// Canonical present: every offset zero, every counter at `now`'s unit.
    #[must_use]
    pub fn present(now: NaiveDateTime) -> Self {
        let today = now.date();
        let grid = MonthWeekGrid::containing(today);
        Self {
            month_in_year: today.month0() as i32,
            month_in_quarter: (today.month0() as i32) % MONTHS_PER_QUARTER,
            week_in_month: grid.row_of(today) as i32,
            week_in_lunation: lunation_position(today).1 as i32,
            day_in_week: day_of_week_from_sunday(today) as i32,
            hour_in_day: now.hour() as i32,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn has_offsets(&self) -> bool {
        self.decade_offset != 0
            || self.year_offset != 0
            || self.quarter_offset != 0
            || self.month_offset != 0
            || self.week_offset != 0
            || self.hour_offset != 0
            || self.lunar_offset != 0
    }

    /// Advances the active level's unit by one step (three hours at
    /// Day/Clock), carrying into the next coarser offset on wrap.
    ///
    /// Overview has no navigable unit and ignores the call.
    pub fn navigate(&mut self, level: ZoomLevel, direction: Direction, now: NaiveDateTime) {
        let step = direction.sign();
        match level {
            ZoomLevel::Overview => {}
            ZoomLevel::Century => {
                self.decade_offset = self.decade_offset.saturating_add(step);
            }
            ZoomLevel::Decade => {
                self.year_offset = self.year_offset.saturating_add(step);
            }
            ZoomLevel::Year => {
                let carry = wrap_counter(&mut self.month_in_year, step, MONTHS_PER_YEAR);
                self.year_offset = self.year_offset.saturating_add(carry);
            }
            ZoomLevel::Quarter => {
                let carry = wrap_counter(&mut self.month_in_quarter, step, MONTHS_PER_QUARTER);
                self.quarter_offset = self.quarter_offset.saturating_add(carry);
            }
            ZoomLevel::Month => self.step_month_grid_row(step, now),
            ZoomLevel::Lunar => {
                let carry =
                    wrap_counter(&mut self.week_in_lunation, step, WEEKS_PER_LUNATION as i32);
                self.lunar_offset = self.lunar_offset.saturating_add(carry);
            }
            ZoomLevel::Week => {
                let carry = wrap_counter(&mut self.day_in_week, step, DAYS_PER_WEEK);
                self.week_offset = self.week_offset.saturating_add(carry);
            }
            ZoomLevel::Day | ZoomLevel::Clock => {
                let carry = wrap_counter(&mut self.hour_in_day, step * HOUR_STEP, HOURS_PER_DAY);
                self.hour_offset = self.hour_offset.saturating_add(carry);
            }
        }
    }

    /// Month rows wrap over the displayed month's own row count (4 to 6),
    /// entering the previous month on its last row.
    fn step_month_grid_row(&mut self, step: i32, now: NaiveDateTime) {
        let rows = target_month_grid(self, now).row_count() as i32;
        let row = self.week_in_month.clamp(0, rows - 1) + step;
        if row < 0 {
            self.month_offset = self.month_offset.saturating_sub(1);
            self.week_in_month = target_month_grid(self, now).row_count() as i32 - 1;
        } else if row >= rows {
            self.month_offset = self.month_offset.saturating_add(1);
            self.week_in_month = 0;
        } else {
            self.week_in_month = row;
        }
    }

    /// Field-wise interpolation toward `target`, rounding to whole units.
    ///
    /// `t = 0` returns `self`, `t = 1` returns `target`.
    #[must_use]
    pub fn interpolate(&self, target: &Self, t: f64) -> Self {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 1.0 };
        let lerp = |from: i32, to: i32| -> i32 {
            let value = f64::from(from) + (f64::from(to) - f64::from(from)) * t;
            value.round() as i32
        };
        Self {
            decade_offset: lerp(self.decade_offset, target.decade_offset),
            year_offset: lerp(self.year_offset, target.year_offset),
            quarter_offset: lerp(self.quarter_offset, target.quarter_offset),
            month_offset: lerp(self.month_offset, target.month_offset),
            week_offset: lerp(self.week_offset, target.week_offset),
            hour_offset: lerp(self.hour_offset, target.hour_offset),
            lunar_offset: lerp(self.lunar_offset, target.lunar_offset),
            month_in_year: lerp(self.month_in_year, target.month_in_year),
            month_in_quarter: lerp(self.month_in_quarter, target.month_in_quarter),
            week_in_month: lerp(self.week_in_month, target.week_in_month),
            week_in_lunation: lerp(self.week_in_lunation, target.week_in_lunation),
            day_in_week: lerp(self.day_in_week, target.day_in_week),
            hour_in_day: lerp(self.hour_in_day, target.hour_in_day),
        }
    }
}

/// Adds `delta` to a counter of the given radix and returns the carry.
fn wrap_counter(counter: &mut i32, delta: i32, radix: i32) -> i32 {
    let total = *counter + delta;
    *counter = total.rem_euclid(radix);
    total.div_euclid(radix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calendar::normalized_date;

    fn now() -> NaiveDateTime {
        normalized_date(2024, 2, 31)
            .and_hms_opt(22, 15, 0)
            .expect("valid time")
    }

    #[test]
    fn wrap_counter_carries_both_ways() {
        let mut counter = 6;
        assert_eq!(wrap_counter(&mut counter, 1, 7), 1);
        assert_eq!(counter, 0);
        assert_eq!(wrap_counter(&mut counter, -1, 7), -1);
        assert_eq!(counter, 6);
    }

    #[test]
    fn present_counters_track_now() {
        let state = NavigationState::present(now());
        assert_eq!(state.month_in_year, 2);
        assert_eq!(state.month_in_quarter, 2);
        // 2024-03-31 is a Sunday in the sixth row of March.
        assert_eq!(state.week_in_month, 5);
        assert_eq!(state.day_in_week, 0);
        assert_eq!(state.hour_in_day, 22);
        assert!(!state.has_offsets());
    }

    #[test]
    fn hour_steps_roll_into_next_day() {
        let mut state = NavigationState::present(now());
        state.navigate(ZoomLevel::Clock, Direction::Forward, now());
        assert_eq!(state.hour_in_day, 1);
        assert_eq!(state.hour_offset, 1);
    }

    #[test]
    fn last_month_row_rolls_into_next_month_first_row() {
        let mut state = NavigationState::present(now());
        state.navigate(ZoomLevel::Month, Direction::Forward, now());
        assert_eq!((state.month_offset, state.week_in_month), (1, 0));
        state.navigate(ZoomLevel::Month, Direction::Backward, now());
        assert_eq!((state.month_offset, state.week_in_month), (0, 5));
    }

    #[test]
    fn interpolation_hits_both_ends() {
        let present = NavigationState::present(now());
        let mut away = present;
        away.year_offset = 40;
        away.month_in_year = 9;
        assert_eq!(away.interpolate(&present, 0.0), away);
        assert_eq!(away.interpolate(&present, 1.0), present);
        assert_eq!(away.interpolate(&present, 0.5).year_offset, 20);
    }
}
