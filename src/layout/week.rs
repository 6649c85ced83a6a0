use chrono::{Datelike, NaiveDate};
use smallvec::SmallVec;

use crate::core::{
    DAYS_PER_WEEK, day_of_week_from_sunday, height_for_day_start, shift_days, sunday_on_or_before,
};
use crate::layout::month::layout_week_grid;
use crate::layout::quarter::layout_quarter;
use crate::layout::{LayoutContext, MarkerLayer, WEEKDAY_NAMES, classify};

const DAY_BAND_INNER: f64 = 5.0 / 6.0;
const DAY_LABEL_FRACTION: f64 = 0.9;

pub(super) fn layout_week(ctx: &LayoutContext<'_>, layer: &mut MarkerLayer) {
    layout_quarter(ctx, layer);
    layout_week_grid(ctx, layer);
    layout_day_boundaries(ctx, layer);
}

/// The selected week's seven days, plus the actual-now day when it lies
/// outside that week.
pub(super) fn boundary_days(ctx: &LayoutContext<'_>) -> SmallVec<[NaiveDate; 8]> {
    let sunday = sunday_on_or_before(ctx.selected.date());
    let mut days: SmallVec<[NaiveDate; 8]> = (0..DAYS_PER_WEEK)
        .map(|offset| shift_days(sunday, offset))
        .collect();
    let today = ctx.now.date();
    if !days.contains(&today) {
        days.push(today);
    }
    days
}

fn layout_day_boundaries(ctx: &LayoutContext<'_>, layer: &mut MarkerLayer) {
    let (now_day, selected_day) = (ctx.now.date(), ctx.selected.date());

    for day in boundary_days(ctx) {
        let start = height_for_day_start(day);
        let end = height_for_day_start(shift_days(day, 1));
        let highlight = classify(&day, &now_day, &selected_day);
        layer.push_radial(ctx, start, DAY_BAND_INNER, 1.0, highlight);
        layer.push_label(
            ctx,
            format!(
                "{} {}",
                WEEKDAY_NAMES[day_of_week_from_sunday(day) as usize],
                day.day()
            ),
            ctx.point((start + end) * 0.5, DAY_LABEL_FRACTION),
            highlight,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ZoomLevel;
    use crate::layout::test_support::{context, datetime, earth_track};
    use crate::layout::{LayoutStyle, MarkerPalette};
    use crate::render::Highlight;

    #[test]
    fn selected_week_lists_sunday_through_saturday() {
        let now = datetime(2026, 10, 14, 9, 41);
        let track = earth_track(now);
        let (palette, style) = (MarkerPalette::default(), LayoutStyle::default());
        let ctx = context(ZoomLevel::Week, now, now, &track, &palette, &style);

        let days = boundary_days(&ctx);
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], NaiveDate::from_ymd_opt(2026, 10, 11).expect("date"));

        let mut layer = MarkerLayer::default();
        layout_day_boundaries(&ctx, &mut layer);
        let labels: Vec<&str> = layer.labels().collect();
        assert_eq!(labels[0], "Sun 11");
        assert_eq!(labels[3], "Wed 14");
    }

    #[test]
    fn actual_day_is_drawn_even_outside_the_selected_week() {
        let now = datetime(2026, 10, 14, 9, 41);
        let selected = datetime(2026, 10, 28, 12, 0);
        let track = earth_track(now);
        let (palette, style) = (MarkerPalette::default(), LayoutStyle::default());
        let ctx = context(ZoomLevel::Week, now, selected, &track, &palette, &style);

        let mut layer = MarkerLayer::default();
        layout_day_boundaries(&ctx, &mut layer);
        let now_labels: Vec<&str> = layer
            .with_highlight(Highlight::ActualNow)
            .filter_map(|marker| marker.label_text())
            .collect();
        let selected_labels: Vec<&str> = layer
            .with_highlight(Highlight::UserSelected)
            .filter_map(|marker| marker.label_text())
            .collect();
        assert_eq!(now_labels, vec!["Wed 14"]);
        assert_eq!(selected_labels, vec!["Wed 28"]);
        assert_eq!(layer.labels().count(), 8);
    }
}
