use std::f64::consts::TAU;

use chrono::{Datelike, NaiveDate, Timelike};

use crate::core::{Point3, height_for_date, height_for_day_start, shift_days};
use crate::layout::week::layout_week;
use crate::layout::{LayoutContext, MarkerLayer, classify, highlighted_units};

const HOURS_PER_DAY: u32 = 24;
const LABELED_HOUR_STEP: u32 = 3;
const RING_SEGMENTS: usize = 96;
const TICK_INNER: f64 = 0.8;
const TICK_OUTER: f64 = 1.2;
const LABEL_REACH: f64 = 1.45;

/// Day and Clock levels: the week layout plus an hour ring around the focus
/// body for the actual-now and selected days.
pub(super) fn layout_hour_ring_level(ctx: &LayoutContext<'_>, layer: &mut MarkerLayer) {
    layout_week(ctx, layer);
    for day in highlighted_units(ctx.now.date(), ctx.selected.date()) {
        layout_hour_ring(ctx, layer, day);
    }
}

/// Point on the ring at fraction `hours / 24` of `day`, `reach` times the
/// ring offset away from the body.
///
/// The dial is measured from the Sun-to-body direction: hour `0` points away
/// from the Sun and hour `12` toward it.
#[must_use]
fn hour_ring_point(
    ctx: &LayoutContext<'_>,
    height: f64,
    hours: f64,
    reach: f64,
) -> Point3 {
    let center = ctx.focus.position_at(height);
    let angle = center.planar_angle() - TAU * hours / f64::from(HOURS_PER_DAY);
    let radius = ctx.style.hour_ring_offset * reach;
    center.offset(radius * angle.cos(), 0.0, radius * angle.sin())
}

fn layout_hour_ring(ctx: &LayoutContext<'_>, layer: &mut MarkerLayer, day: NaiveDate) {
    let start = height_for_day_start(day);
    let end = height_for_day_start(shift_days(day, 1));
    let step = (end - start) / RING_SEGMENTS as f64;
    let ring = (0..=RING_SEGMENTS)
        .map(|index| {
            let fraction = index as f64 / RING_SEGMENTS as f64;
            hour_ring_point(
                ctx,
                start + step * index as f64,
                fraction * f64::from(HOURS_PER_DAY),
                1.0,
            )
        })
        .collect();
    layer.push_curve(
        ctx,
        ring,
        classify(&day, &ctx.now.date(), &ctx.selected.date()),
    );

    let now_block = (ctx.now.date(), ctx.now.hour() / LABELED_HOUR_STEP);
    let selected_block = (ctx.selected.date(), ctx.selected.hour() / LABELED_HOUR_STEP);
    for hour in (0..HOURS_PER_DAY).step_by(LABELED_HOUR_STEP as usize) {
        let height = height_for_date(day.year(), day.month0(), day.day(), f64::from(hour));
        let hours = f64::from(hour);
        let highlight = classify(
            &(day, hour / LABELED_HOUR_STEP),
            &now_block,
            &selected_block,
        );
        layer.push_line(
            ctx,
            hour_ring_point(ctx, height, hours, TICK_INNER),
            hour_ring_point(ctx, height, hours, TICK_OUTER),
            highlight,
        );
        layer.push_label(
            ctx,
            format!("{hour:02}:00"),
            hour_ring_point(ctx, height, hours, LABEL_REACH),
            highlight,
        );
    }
}
