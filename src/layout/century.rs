use chrono::Datelike;

use crate::core::{Point3, datetime_for_height, height_for_year};
use crate::layout::{LayoutContext, MarkerLayer, classify};

/// Radius fraction reached by an unlabeled tick.
const MINOR_TICK_REACH: f64 = 0.5;
const YEAR_LABEL_FRACTION: f64 = 1.08;

#[derive(Debug, Clone, Copy)]
struct YearCadence {
    /// Years between labeled ticks.
    major_every: i32,
    /// Years between unlabeled ticks, if any are drawn.
    minor_every: Option<i32>,
}

pub(super) fn layout_century(ctx: &LayoutContext<'_>, layer: &mut MarkerLayer) {
    year_ticks(
        ctx,
        layer,
        YearCadence {
            major_every: 10,
            minor_every: Some(1),
        },
    );
}

pub(super) fn layout_decade(ctx: &LayoutContext<'_>, layer: &mut MarkerLayer) {
    year_ticks(
        ctx,
        layer,
        YearCadence {
            major_every: 1,
            minor_every: None,
        },
    );
}

fn year_ticks(ctx: &LayoutContext<'_>, layer: &mut MarkerLayer, cadence: YearCadence) {
    let (start, end) = ctx.window;
    let first_year = datetime_for_height(start).year();
    let last_year = datetime_for_height(end).year();
    let (now_year, selected_year) = (ctx.now.year(), ctx.selected.year());

    for year in first_year..=last_year.saturating_add(1) {
        let height = height_for_year(year);
        if !ctx.contains_height(height) {
            continue;
        }
        let major = year.rem_euclid(cadence.major_every) == 0;
        let minor = cadence
            .minor_every
            .is_some_and(|every| year.rem_euclid(every) == 0);
        if !major && !minor {
            continue;
        }

        let highlight = classify(&year, &now_year, &selected_year);
        let reach = if major { 1.0 } else { MINOR_TICK_REACH };
        layer.push_line(
            ctx,
            Point3::on_axis(height),
            ctx.point(height, reach),
            highlight,
        );
        if major {
            layer.push_label(
                ctx,
                year.to_string(),
                ctx.point(height, YEAR_LABEL_FRACTION),
                highlight,
            );
        }
    }

    // One span beyond each edge of the window.
    let span = ctx.level.display_span_height();
    for height in [start - span, end + span] {
        layer.push_context_line(ctx, Point3::on_axis(height), ctx.point(height, 1.0));
    }
}
