use chrono::{Datelike, NaiveDateTime};

use crate::core::calendar::date_from_month_index;
use crate::core::height::fractional_hour;
use crate::core::{MONTHS_PER_QUARTER, days_in_month, height_for_day_start};
use crate::layout::{LayoutContext, MONTH_NAMES, MarkerLayer, classify, highlighted_units};

const QUARTER_BAND_OUTER: f64 = 1.0 / 3.0;
const MONTH_BAND_OUTER: f64 = 2.0 / 3.0;
const QUARTER_LABEL_FRACTION: f64 = 1.0 / 6.0;
const MONTH_LABEL_FRACTION: f64 = 0.5;
const WEEK_TICK_INNER: f64 = 0.9;
const WEEK_TICKS_PER_MONTH: u32 = 4;

type QuarterKey = (i32, u32);
type MonthKey = (i32, u32);
type WeekTickKey = (i32, u32, u32);

fn quarter_key(datetime: NaiveDateTime) -> QuarterKey {
    (datetime.year(), datetime.month0() / 3)
}

/// Which of the four equal slices of its month `datetime` falls in.
fn week_tick_key(datetime: NaiveDateTime) -> WeekTickKey {
    let elapsed_days = f64::from(datetime.day() - 1) + fractional_hour(datetime.time()) / 24.0;
    let fraction = elapsed_days / f64::from(days_in_month(datetime.year(), datetime.month0()));
    let slice = ((fraction * f64::from(WEEK_TICKS_PER_MONTH)).floor() as u32)
        .min(WEEK_TICKS_PER_MONTH - 1);
    (datetime.year(), datetime.month0(), slice)
}

/// Sun-to-⅓ quarter band, ⅓-to-⅔ month band and week ticks near the orbit.
///
/// Month and finer levels call this first and add their own markers on top.
pub(super) fn layout_quarter(ctx: &LayoutContext<'_>, layer: &mut MarkerLayer) {
    let now_quarter = quarter_key(ctx.now);
    let selected_quarter = quarter_key(ctx.selected);
    let now_month: MonthKey = (ctx.now.year(), ctx.now.month0());
    let selected_month: MonthKey = (ctx.selected.year(), ctx.selected.month0());
    let now_tick = week_tick_key(ctx.now);
    let selected_tick = week_tick_key(ctx.selected);

    for key in highlighted_units(now_quarter, selected_quarter) {
        let first_month = i64::from(key.0) * 12 + i64::from(key.1) * i64::from(MONTHS_PER_QUARTER);
        let start = height_for_day_start(date_from_month_index(first_month, 1));
        let end = height_for_day_start(date_from_month_index(
            first_month + i64::from(MONTHS_PER_QUARTER),
            1,
        ));
        let quarter_highlight = classify(&key, &now_quarter, &selected_quarter);

        layer.push_curve(ctx, ctx.arc(start, end, QUARTER_BAND_OUTER), quarter_highlight);
        layer.push_label(
            ctx,
            format!("Q{} {}", key.1 + 1, key.0),
            ctx.point((start + end) * 0.5, QUARTER_LABEL_FRACTION),
            quarter_highlight,
        );

        for offset in 0..i64::from(MONTHS_PER_QUARTER) {
            let month_start = date_from_month_index(first_month + offset, 1);
            let month_key: MonthKey = (month_start.year(), month_start.month0());
            let month_height = height_for_day_start(month_start);
            let next_height =
                height_for_day_start(date_from_month_index(first_month + offset + 1, 1));
            let month_highlight = classify(&month_key, &now_month, &selected_month);

            layer.push_radial(
                ctx,
                month_height,
                QUARTER_BAND_OUTER,
                MONTH_BAND_OUTER,
                month_highlight,
            );
            layer.push_label(
                ctx,
                MONTH_NAMES[month_key.1 as usize],
                ctx.point((month_height + next_height) * 0.5, MONTH_LABEL_FRACTION),
                month_highlight,
            );

            let slice_height = (next_height - month_height) / f64::from(WEEK_TICKS_PER_MONTH);
            for slice in 0..WEEK_TICKS_PER_MONTH {
                let tick_key: WeekTickKey = (month_key.0, month_key.1, slice);
                layer.push_radial(
                    ctx,
                    month_height + slice_height * f64::from(slice),
                    WEEK_TICK_INNER,
                    1.0,
                    classify(&tick_key, &now_tick, &selected_tick),
                );
            }
        }

        let closing = date_from_month_index(first_month + i64::from(MONTHS_PER_QUARTER), 1);
        let closing_key: MonthKey = (closing.year(), closing.month0());
        layer.push_radial(
            ctx,
            end,
            QUARTER_BAND_OUTER,
            MONTH_BAND_OUTER,
            classify(&closing_key, &now_month, &selected_month),
        );
    }
}
