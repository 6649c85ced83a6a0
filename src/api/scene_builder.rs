use std::f64::consts::TAU;

use crate::core::{
    BodyTrack, Clock, FocusTarget, Point3, ZoomLevel, height_for_datetime, segments_for_span,
};
use crate::error::CalendarResult;
use crate::layout::{LayoutContext, LayoutStyle, MarkerLayer, layout_markers};
use crate::render::{BodyCurve, BodyPlacement, CameraHint, Color, Polyline, Renderer, SceneFrame};

use super::CalendarEngine;

/// Name carried by the height-axis worldline.
pub const SUN_NAME: &str = "Sun";

impl<R: Renderer, C: Clock> CalendarEngine<R, C> {
    /// Builds the complete replacement geometry for the current state.
    ///
    /// Nothing is reused from earlier frames.
    pub fn build_scene(&self) -> CalendarResult<SceneFrame> {
        let level = self.zoom_level;
        let now = self.now;
        let selected = self.selected_datetime();
        let now_height = height_for_datetime(now);
        let selected_height = height_for_datetime(selected);
        let half_span = level.display_span_height() * 0.5;
        let window = (selected_height - half_span, selected_height + half_span);
        let style = &self.config.layout_style;
        let palette = &self.config.palette;

        let bodies = self
            .tracks
            .iter()
            .map(|track| BodyPlacement {
                name: track.body.name.clone(),
                orbital_radius: track.body.orbital_radius,
                selected_position: track.position_at(selected_height),
                now_position: track.position_at(now_height),
            })
            .collect();

        let orbits = self
            .tracks
            .iter()
            .map(|track| BodyCurve {
                body: track.body.name.clone(),
                curve: orbit_ring(track, selected_height, style, palette.orbit),
            })
            .collect();

        let mut worldlines: Vec<BodyCurve> = Vec::with_capacity(self.tracks.len() + 2);
        worldlines.push(BodyCurve {
            body: SUN_NAME.to_owned(),
            curve: Polyline::segment(
                Point3::on_axis(window.0),
                Point3::on_axis(window.1),
                palette.worldline,
                style.highlight_opacity,
            ),
        });
        worldlines.extend(self.tracks.iter().map(|track| BodyCurve {
            body: track.body.name.clone(),
            curve: Polyline::new(
                sampled_helix(track, window.0, window.1, style),
                palette.worldline,
                style.neutral_opacity,
            ),
        }));

        let layer = if level == ZoomLevel::Overview {
            MarkerLayer::default()
        } else {
            layout_markers(&LayoutContext {
                level,
                now,
                selected,
                window,
                focus: self.focus_track(),
                palette,
                style,
            })
        };
        worldlines.extend(layer.worldlines);

        // Present and selection coincide at zero offsets: no connectors.
        let connectors = if selected == now {
            Vec::new()
        } else {
            self.tracks
                .iter()
                .map(|track| BodyCurve {
                    body: track.body.name.clone(),
                    curve: Polyline::new(
                        sampled_helix(track, now_height, selected_height, style),
                        palette.connector,
                        style.highlight_opacity,
                    ),
                })
                .collect()
        };

        let spec = level.spec();
        let focus = match spec.focus_target {
            FocusTarget::Earth => self.focus_track().position_at(selected_height),
            FocusTarget::Sun | FocusTarget::None => Point3::on_axis(selected_height),
        };

        Ok(SceneFrame {
            zoom_level: level,
            now,
            selected,
            now_height,
            selected_height,
            window,
            camera: CameraHint {
                focus_target: spec.focus_target,
                focus,
                distance: spec.camera_distance,
            },
            bodies,
            orbits,
            worldlines,
            markers: layer.markers,
            connectors,
        })
    }
}

fn sampled_helix(track: &BodyTrack, start: f64, end: f64, style: &LayoutStyle) -> Vec<Point3> {
    let segments = segments_for_span(
        end - start,
        track.body.orbital_period_years,
        style.segments_per_revolution,
        style.min_curve_segments,
        style.max_curve_segments,
    );
    track.helix(start, end, track.body.orbital_radius, segments)
}

/// Closed horizontal circle of the body's orbit at `height`.
fn orbit_ring(track: &BodyTrack, height: f64, style: &LayoutStyle, color: Color) -> Polyline {
    let segments = style.segments_per_revolution.max(3);
    let points = (0..=segments)
        .map(|index| {
            let angle = TAU * index as f64 / segments as f64;
            Point3::from_polar(angle, track.body.orbital_radius, height)
        })
        .collect();
    Polyline::new(points, color, style.neutral_opacity)
}
