use chrono::{NaiveDate, NaiveDateTime};
use cosmic_calendar::core::{BodyCatalog, BodyTrack, PhaseReference, ZoomLevel, height_for_datetime};
use cosmic_calendar::layout::{
    LUNAR_PHASE_NAMES, LayoutContext, LayoutStyle, MOON_NAME, MarkerLayer, MarkerPalette,
    layout_markers,
};
use cosmic_calendar::render::{Highlight, MarkerShape};

fn datetime(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .expect("valid datetime")
}

fn now() -> NaiveDateTime {
    datetime(2026, 10, 14, 9, 41)
}

fn earth_track() -> BodyTrack {
    let catalog = BodyCatalog::solar_system();
    PhaseReference::capture(&catalog, now())
        .track(catalog.require("Earth").expect("earth"))
        .expect("track")
}

fn layout(level: ZoomLevel, selected: NaiveDateTime, palette: &MarkerPalette) -> MarkerLayer {
    let track = earth_track();
    let style = LayoutStyle::default();
    let half = level.display_span_height() * 0.5;
    let height = height_for_datetime(selected);
    layout_markers(&LayoutContext {
        level,
        now: now(),
        selected,
        window: (height - half, height + half),
        focus: &track,
        palette,
        style: &style,
    })
}

#[test]
fn present_selection_never_produces_user_selected_markers() {
    let palette = MarkerPalette::default();
    for level in ZoomLevel::ALL {
        let layer = layout(level, now(), &palette);
        assert_eq!(
            layer.with_highlight(Highlight::UserSelected).count(),
            0,
            "{level:?}"
        );
        if level != ZoomLevel::Overview {
            assert!(
                layer.with_highlight(Highlight::ActualNow).count() > 0,
                "{level:?}"
            );
        }
    }
}

#[test]
fn distant_selection_is_highlighted_at_every_focused_level() {
    let palette = MarkerPalette::default();
    let selected = datetime(2027, 2, 3, 17, 5);
    for level in ZoomLevel::ALL.into_iter().skip(1) {
        let layer = layout(level, selected, &palette);
        assert!(
            layer.with_highlight(Highlight::UserSelected).count() > 0,
            "{level:?}"
        );
    }
}

#[test]
fn marker_colors_follow_the_palette() {
    let palette = MarkerPalette::default();
    let selected = datetime(2026, 12, 24, 20, 0);
    for level in ZoomLevel::ALL.into_iter().skip(1) {
        for marker in layout(level, selected, &palette).markers {
            match marker.highlight {
                Highlight::ActualNow => assert_eq!(marker.color(), palette.actual_now),
                Highlight::UserSelected => assert_eq!(marker.color(), palette.user_selected),
                Highlight::Neutral => assert_eq!(marker.color(), palette.neutral),
            }
        }
    }
}

#[test]
fn overview_is_empty_even_when_navigated() {
    let palette = MarkerPalette::default();
    let layer = layout(ZoomLevel::Overview, datetime(1990, 1, 1, 0, 0), &palette);
    assert!(layer.is_empty());
}

#[test]
fn lunar_level_adds_the_moon_worldline_and_phase_names() {
    let palette = MarkerPalette::default();
    let layer = layout(ZoomLevel::Lunar, now(), &palette);
    assert_eq!(layer.worldlines.len(), 1);
    assert_eq!(layer.worldlines[0].body, MOON_NAME);
    let labels: Vec<&str> = layer.labels().collect();
    for name in LUNAR_PHASE_NAMES {
        assert!(labels.contains(&name), "missing {name}");
    }
}

#[test]
fn clock_level_draws_one_hour_ring_per_highlighted_day() {
    let palette = MarkerPalette::default();
    let count_rings = |layer: &MarkerLayer| {
        layer
            .markers
            .iter()
            .filter(|marker| {
                matches!(&marker.shape, MarkerShape::BoundaryCurve(curve) if curve.points.len() == 97)
            })
            .count()
    };
    let present = layout(ZoomLevel::Clock, now(), &palette);
    let next_day = layout(ZoomLevel::Clock, datetime(2026, 10, 15, 3, 41), &palette);
    assert_eq!(count_rings(&present), 1);
    assert_eq!(count_rings(&next_day), 2);
    assert!(present.labels().any(|label| label == "09:00"));
}
