//! Time-marker layout: one layout function per zoom level, composed from
//! shared bands so nested levels extend coarser ones instead of copying them.

mod century;
mod clock;
mod highlight;
mod lunar;
mod month;
mod quarter;
mod style;
mod week;
mod year;

pub use highlight::{classify, highlighted_units};
pub use lunar::{LUNAR_PHASE_NAMES, MOON_NAME, moon_position};
pub use style::{LayoutStyle, MarkerPalette};

use chrono::NaiveDateTime;

use crate::core::{BodyTrack, Point3, ZoomLevel, segments_for_span};
use crate::render::{BodyCurve, Highlight, Label, MarkerPrimitive, MarkerShape, Polyline};

pub(crate) const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
pub(crate) const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Inputs shared by every layout function.
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext<'a> {
    pub level: ZoomLevel,
    pub now: NaiveDateTime,
    pub selected: NaiveDateTime,
    /// Visible height window `(start, end)`.
    pub window: (f64, f64),
    /// Body whose orbit carries the markers.
    pub focus: &'a BodyTrack,
    pub palette: &'a MarkerPalette,
    pub style: &'a LayoutStyle,
}

impl LayoutContext<'_> {
    #[must_use]
    pub fn orbital_radius(&self) -> f64 {
        self.focus.body.orbital_radius
    }

    /// Point on the focus track at a fraction of its orbital radius.
    #[must_use]
    pub fn point(&self, height: f64, radius_fraction: f64) -> Point3 {
        self.focus.position_at_fraction(height, radius_fraction)
    }

    /// Helical arc along the focus track at a fixed radius fraction.
    #[must_use]
    pub fn arc(&self, start_height: f64, end_height: f64, radius_fraction: f64) -> Vec<Point3> {
        let segments = segments_for_span(
            end_height - start_height,
            self.focus.body.orbital_period_years,
            self.style.segments_per_revolution,
            self.style.min_curve_segments,
            self.style.max_curve_segments,
        );
        self.focus.helix(
            start_height,
            end_height,
            self.orbital_radius() * radius_fraction,
            segments,
        )
    }

    fn contains_height(&self, height: f64) -> bool {
        height >= self.window.0 && height <= self.window.1
    }
}

/// Markers plus any extra per-level curves (the lunar Moon worldline).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerLayer {
    pub markers: Vec<MarkerPrimitive>,
    pub worldlines: Vec<BodyCurve>,
}

impl MarkerLayer {
    /// Radial boundary line at `height` between two radius fractions.
    pub fn push_radial(
        &mut self,
        ctx: &LayoutContext<'_>,
        height: f64,
        inner: f64,
        outer: f64,
        highlight: Highlight,
    ) {
        self.push_line(
            ctx,
            ctx.point(height, inner),
            ctx.point(height, outer),
            highlight,
        );
    }

    pub fn push_line(
        &mut self,
        ctx: &LayoutContext<'_>,
        start: Point3,
        end: Point3,
        highlight: Highlight,
    ) {
        let line = Polyline::segment(
            start,
            end,
            ctx.palette.color_for(highlight),
            ctx.style.opacity_for(highlight),
        );
        self.markers.push(MarkerPrimitive {
            shape: MarkerShape::BoundaryLine(line),
            highlight,
        });
    }

    /// Faint neutral tick outside the highlighted structure.
    pub fn push_context_line(&mut self, ctx: &LayoutContext<'_>, start: Point3, end: Point3) {
        let line = Polyline::segment(
            start,
            end,
            ctx.palette.neutral,
            ctx.style.context_tick_opacity,
        );
        self.markers.push(MarkerPrimitive {
            shape: MarkerShape::BoundaryLine(line),
            highlight: Highlight::Neutral,
        });
    }

    pub fn push_curve(
        &mut self,
        ctx: &LayoutContext<'_>,
        points: Vec<Point3>,
        highlight: Highlight,
    ) {
        if points.len() < 2 {
            return;
        }
        let curve = Polyline::new(
            points,
            ctx.palette.color_for(highlight),
            ctx.style.opacity_for(highlight),
        );
        self.markers.push(MarkerPrimitive {
            shape: MarkerShape::BoundaryCurve(curve),
            highlight,
        });
    }

    pub fn push_label(
        &mut self,
        ctx: &LayoutContext<'_>,
        text: impl Into<String>,
        position: Point3,
        highlight: Highlight,
    ) {
        let label = Label::new(
            text,
            position,
            ctx.palette.color_for(highlight),
            ctx.style.label_scale,
        );
        self.markers.push(MarkerPrimitive {
            shape: MarkerShape::Label(label),
            highlight,
        });
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty() && self.worldlines.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.markers.iter().filter_map(MarkerPrimitive::label_text)
    }

    pub fn with_highlight(&self, highlight: Highlight) -> impl Iterator<Item = &MarkerPrimitive> {
        self.markers
            .iter()
            .filter(move |marker| marker.highlight == highlight)
    }
}

type LayoutFn = fn(&LayoutContext<'_>, &mut MarkerLayer);

/// Layout per zoom level, indexed by `ZoomLevel::index`.
const LAYOUTS: [LayoutFn; 10] = [
    layout_overview,
    century::layout_century,
    century::layout_decade,
    year::layout_year,
    quarter::layout_quarter,
    month::layout_month,
    lunar::layout_lunar,
    week::layout_week,
    clock::layout_hour_ring_level,
    clock::layout_hour_ring_level,
];

/// Builds the full marker set for `ctx.level`.
#[must_use]
pub fn layout_markers(ctx: &LayoutContext<'_>) -> MarkerLayer {
    let mut layer = MarkerLayer::default();
    LAYOUTS[usize::from(ctx.level.index())](ctx, &mut layer);
    layer
}

fn layout_overview(_ctx: &LayoutContext<'_>, _layer: &mut MarkerLayer) {}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{NaiveDate, NaiveDateTime};

    use super::{LayoutContext, LayoutStyle, MarkerPalette};
    use crate::core::{BodyCatalog, BodyTrack, PhaseReference, ZoomLevel};

    pub fn datetime(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, minute, 0))
            .expect("valid datetime")
    }

    pub fn earth_track(now: NaiveDateTime) -> BodyTrack {
        let catalog = BodyCatalog::solar_system();
        let reference = PhaseReference::capture(&catalog, now);
        reference
            .track(catalog.require("Earth").expect("earth"))
            .expect("track")
    }

    pub fn context<'a>(
        level: ZoomLevel,
        now: NaiveDateTime,
        selected: NaiveDateTime,
        focus: &'a BodyTrack,
        palette: &'a MarkerPalette,
        style: &'a LayoutStyle,
    ) -> LayoutContext<'a> {
        let half = level.display_span_height() * 0.5;
        let height = crate::core::height_for_datetime(selected);
        LayoutContext {
            level,
            now,
            selected,
            window: (height - half, height + half),
            focus,
            palette,
            style,
        }
    }
}
