use std::f64::consts::{PI, TAU};

use chrono::{NaiveDateTime, NaiveTime, TimeDelta};
use ordered_float::OrderedFloat;

use crate::core::{
    BodyTrack, LUNATION_DAYS, Point3, datetime_for_height, height_for_datetime,
    height_for_day_start, lunation_epoch, lunation_position, lunation_start, shift_days,
};
use crate::layout::quarter::layout_quarter;
use crate::layout::{LayoutContext, MarkerLayer, classify, highlighted_units};
use crate::render::{BodyCurve, Polyline};

pub const MOON_NAME: &str = "Moon";

pub const LUNAR_PHASE_NAMES: [&str; 8] = [
    "New Moon",
    "Waxing Crescent",
    "First Quarter",
    "Waxing Gibbous",
    "Full Moon",
    "Waning Gibbous",
    "Last Quarter",
    "Waning Crescent",
];

const SECONDS_PER_DAY: f64 = 86_400.0;
const PHASE_SPACING_HOURS: i64 = 84;
const PHASE_SPACING_DAYS: f64 = 3.5;
const MOON_SEGMENTS_PER_LUNATION: usize = 224;
const DAY_TICK_INNER: f64 = 0.95;
/// Phase labels sit beyond the Moon along the Earth-Moon line.
const PHASE_LABEL_REACH: f64 = 1.6;

fn days_since(start: NaiveDateTime, datetime: NaiveDateTime) -> f64 {
    datetime.signed_duration_since(start).num_seconds() as f64 / SECONDS_PER_DAY
}

/// Synthetic Moon around `focus` at `height`.
///
/// Lunation day `0` puts the Moon on the segment toward the Sun (new moon);
/// day `14` puts it directly opposite (full moon).
#[must_use]
pub fn moon_position(focus: &BodyTrack, height: f64, distance: f64) -> Point3 {
    let center = focus.position_at(height);
    let elapsed = days_since(
        lunation_epoch().and_time(NaiveTime::MIN),
        datetime_for_height(height),
    );
    let phase = TAU * elapsed / LUNATION_DAYS as f64;
    let angle = center.planar_angle() + PI - phase;
    center.offset(distance * angle.cos(), 0.0, distance * angle.sin())
}

/// Lunation and nearest named phase for `datetime`. The phase after
/// "Waning Crescent" rolls into the next lunation's new moon.
fn phase_key(datetime: NaiveDateTime) -> (i64, usize) {
    let (cycle, _) = lunation_position(datetime.date());
    let elapsed = days_since(lunation_start(cycle).and_time(NaiveTime::MIN), datetime);
    let nearest = (0..=LUNAR_PHASE_NAMES.len())
        .min_by_key(|&phase| OrderedFloat((elapsed - phase as f64 * PHASE_SPACING_DAYS).abs()))
        .unwrap_or(0);
    if nearest == LUNAR_PHASE_NAMES.len() {
        (cycle.saturating_add(1), 0)
    } else {
        (cycle, nearest)
    }
}

pub(super) fn layout_lunar(ctx: &LayoutContext<'_>, layer: &mut MarkerLayer) {
    layout_quarter(ctx, layer);

    let now_phase = phase_key(ctx.now);
    let selected_phase = phase_key(ctx.selected);
    let (now_day, selected_day) = (ctx.now.date(), ctx.selected.date());
    let distance = ctx.style.moon_distance;

    for cycle in highlighted_units(
        lunation_position(ctx.now.date()).0,
        lunation_position(ctx.selected.date()).0,
    ) {
        let first_day = lunation_start(cycle);
        let start = height_for_day_start(first_day);
        let end = height_for_day_start(lunation_start(cycle.saturating_add(1)));

        let step = (end - start) / MOON_SEGMENTS_PER_LUNATION as f64;
        let points = (0..=MOON_SEGMENTS_PER_LUNATION)
            .map(|index| moon_position(ctx.focus, start + step * index as f64, distance))
            .collect();
        layer.worldlines.push(BodyCurve {
            body: MOON_NAME.to_owned(),
            curve: Polyline::new(points, ctx.palette.moon, ctx.style.highlight_opacity),
        });

        let opening = first_day.and_time(NaiveTime::MIN);
        for (phase, name) in LUNAR_PHASE_NAMES.iter().enumerate() {
            let Some(at) =
                opening.checked_add_signed(TimeDelta::hours(PHASE_SPACING_HOURS * phase as i64))
            else {
                continue;
            };
            let height = height_for_datetime(at);
            let center = ctx.focus.position_at(height);
            let moon = moon_position(ctx.focus, height, distance);
            let highlight = classify(&(cycle, phase), &now_phase, &selected_phase);
            layer.push_line(ctx, center, moon, highlight);
            layer.push_label(
                ctx,
                *name,
                center.offset(
                    (moon.x - center.x) * PHASE_LABEL_REACH,
                    0.0,
                    (moon.z - center.z) * PHASE_LABEL_REACH,
                ),
                highlight,
            );
        }

        for offset in 0..LUNATION_DAYS {
            let day = shift_days(first_day, offset);
            layer.push_radial(
                ctx,
                height_for_day_start(day),
                DAY_TICK_INNER,
                1.0,
                classify(&day, &now_day, &selected_day),
            );
        }
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
    fn new_moon_faces_the_sun_and_full_moon_faces_away() {
        let now = datetime(2026, 10, 14, 9, 41);
        let track = earth_track(now);
        let cycle_start = lunation_start(lunation_position(now.date()).0);

        let new_height = height_for_day_start(cycle_start);
        let full_height = height_for_day_start(shift_days(cycle_start, 14));
        let earth_new = track.position_at(new_height).planar_radius();
        let earth_full = track.position_at(full_height).planar_radius();

        let new_moon = moon_position(&track, new_height, 9.0).planar_radius();
        let full_moon = moon_position(&track, full_height, 9.0).planar_radius();
        assert!((earth_new - 9.0 - new_moon).abs() <= 1e-6);
        assert!((earth_full + 9.0 - full_moon).abs() <= 1e-6);
    }

    #[test]
    fn phase_key_rolls_over_to_next_new_moon() {
        let start = lunation_start(10);
        let late = shift_days(start, 27).and_hms_opt(12, 0, 0).expect("time");
        assert_eq!(phase_key(late), (11, 0));
        let full = shift_days(start, 14).and_hms_opt(1, 0, 0).expect("time");
        assert_eq!(phase_key(full), (10, 4));
    }

    #[test]
    fn lunation_has_eight_phases_and_twenty_eight_ticks() {
        let now = datetime(2026, 10, 14, 9, 41);
        let track = earth_track(now);
        let (palette, style) = (MarkerPalette::default(), LayoutStyle::default());
        let ctx = context(ZoomLevel::Lunar, now, now, &track, &palette, &style);

        let mut quarter_only = MarkerLayer::default();
        layout_quarter(&ctx, &mut quarter_only);
        let mut layer = MarkerLayer::default();
        layout_lunar(&ctx, &mut layer);

        let added = &layer.markers[quarter_only.len()..];
        assert_eq!(added.len(), 8 * 2 + 28);
        assert_eq!(
            added.iter().filter(|marker| marker.is_label()).count(),
            LUNAR_PHASE_NAMES.len()
        );
        assert_eq!(layer.worldlines.len(), 1);
        assert_eq!(layer.worldlines[0].body, MOON_NAME);
        assert_eq!(
            added
                .iter()
                .filter(|marker| marker.highlight == Highlight::ActualNow && marker.is_label())
                .count(),
            1
        );
    }
}
