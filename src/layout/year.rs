use chrono::Datelike;

use crate::core::{HEIGHT_PER_MONTH, MONTHS_PER_QUARTER, Point3, height_for_date, height_for_year};
use crate::layout::{LayoutContext, MONTH_NAMES, MarkerLayer, classify, highlighted_units};

/// Dividing curve between the inner quarter zone and the outer month zone.
const ZONE_DIVIDER_FRACTION: f64 = 2.0 / 3.0;
const QUARTER_LABEL_FRACTION: f64 = 1.0 / 3.0;
const MONTH_LABEL_FRACTION: f64 = 5.0 / 6.0;

pub(super) fn layout_year(ctx: &LayoutContext<'_>, layer: &mut MarkerLayer) {
    let now_month = (ctx.now.year(), ctx.now.month0());
    let selected_month = (ctx.selected.year(), ctx.selected.month0());
    let now_quarter = (now_month.0, now_month.1 / 3);
    let selected_quarter = (selected_month.0, selected_month.1 / 3);

    let years = highlighted_units(ctx.now.year(), ctx.selected.year());
    for &year in &years {
        let start = height_for_year(year);
        let end = height_for_year(year.saturating_add(1));
        layer.push_curve(
            ctx,
            ctx.arc(start, end, ZONE_DIVIDER_FRACTION),
            classify(&year, &ctx.now.year(), &ctx.selected.year()),
        );

        for month0 in 0..12_u32 {
            let height = height_for_date(year, month0, 1, 0.0);
            let highlight = classify(&(year, month0), &now_month, &selected_month);
            layer.push_line(
                ctx,
                Point3::on_axis(height),
                ctx.point(height, 1.0),
                highlight,
            );
            layer.push_label(
                ctx,
                MONTH_NAMES[month0 as usize],
                ctx.point(height + HEIGHT_PER_MONTH * 0.5, MONTH_LABEL_FRACTION),
                highlight,
            );
        }
        // The next year's January divider already covers this boundary.
        if !years.contains(&year.saturating_add(1)) {
            layer.push_line(
                ctx,
                Point3::on_axis(end),
                ctx.point(end, 1.0),
                classify(&(year.saturating_add(1), 0), &now_month, &selected_month),
            );
        }

        for quarter in 0..4_u32 {
            let height = height_for_date(year, quarter * MONTHS_PER_QUARTER as u32, 1, 0.0)
                + HEIGHT_PER_MONTH * 1.5;
            layer.push_label(
                ctx,
                format!("Q{}", quarter + 1),
                ctx.point(height, QUARTER_LABEL_FRACTION),
                classify(&(year, quarter), &now_quarter, &selected_quarter),
            );
        }
    }
}
