use chrono::{Datelike, NaiveDate};
use smallvec::SmallVec;

use crate::core::{
    DAYS_PER_WEEK, MonthWeekGrid, height_for_day_start, shift_days, sunday_on_or_before,
};
use crate::layout::quarter::layout_quarter;
use crate::layout::{LayoutContext, MarkerLayer, classify, highlighted_units};

const WEEK_BAND_INNER: f64 = 2.0 / 3.0;
const WEEK_BAND_OUTER: f64 = 5.0 / 6.0;
const DAY_TICK_INNER: f64 = 0.95;
const DAY_LABEL_FRACTION: f64 = 1.03;

pub(super) fn layout_month(ctx: &LayoutContext<'_>, layer: &mut MarkerLayer) {
    layout_quarter(ctx, layer);
    layout_week_grid(ctx, layer);
}

/// Sunday openings of every row in the actual-now and selected month grids,
/// ascending and without duplicates.
pub(super) fn visible_week_rows(ctx: &LayoutContext<'_>) -> SmallVec<[NaiveDate; 12]> {
    let grids = highlighted_units(
        MonthWeekGrid::containing(ctx.now.date()),
        MonthWeekGrid::containing(ctx.selected.date()),
    );
    let mut rows: SmallVec<[NaiveDate; 12]> = grids
        .iter()
        .flat_map(|grid| grid.row_starts().iter().copied())
        .collect();
    rows.sort_unstable();
    rows.dedup();
    rows
}

/// Sunday-anchored week rows with their day ticks, partial edge weeks included.
pub(super) fn layout_week_grid(ctx: &LayoutContext<'_>, layer: &mut MarkerLayer) {
    let now_week = sunday_on_or_before(ctx.now.date());
    let selected_week = sunday_on_or_before(ctx.selected.date());
    let (now_day, selected_day) = (ctx.now.date(), ctx.selected.date());
    let rows = visible_week_rows(ctx);

    for &sunday in &rows {
        let start = height_for_day_start(sunday);
        let end = height_for_day_start(shift_days(sunday, DAYS_PER_WEEK));
        let highlight = classify(&sunday, &now_week, &selected_week);
        layer.push_radial(ctx, start, WEEK_BAND_INNER, WEEK_BAND_OUTER, highlight);
        layer.push_curve(ctx, ctx.arc(start, end, WEEK_BAND_OUTER), highlight);

        for offset in 0..DAYS_PER_WEEK {
            let day = shift_days(sunday, offset);
            let day_start = height_for_day_start(day);
            let day_end = height_for_day_start(shift_days(day, 1));
            let highlight = classify(&day, &now_day, &selected_day);
            layer.push_radial(ctx, day_start, DAY_TICK_INNER, 1.0, highlight);
            layer.push_label(
                ctx,
                day.day().to_string(),
                ctx.point((day_start + day_end) * 0.5, DAY_LABEL_FRACTION),
                highlight,
            );
        }
    }

    if let Some(&last) = rows.last() {
        let closing = shift_days(last, DAYS_PER_WEEK);
        layer.push_radial(
            ctx,
            height_for_day_start(closing),
            WEEK_BAND_INNER,
            WEEK_BAND_OUTER,
            classify(&closing, &now_week, &selected_week),
        );
    }
}
