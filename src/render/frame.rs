use chrono::NaiveDateTime;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{FocusTarget, Point3, ZoomLevel};
use crate::error::{CalendarError, CalendarResult};
use crate::render::{Highlight, MarkerPrimitive, Polyline};

/// Where one body sits at the selected and at the real present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyPlacement {
    pub name: String,
    pub orbital_radius: f64,
    pub selected_position: Point3,
    pub now_position: Point3,
}

/// A curve that belongs to one body (orbit ring, worldline or connector).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyCurve {
    pub body: String,
    pub curve: Polyline,
}

/// Camera placement hint for the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraHint {
    pub focus_target: FocusTarget,
    pub focus: Point3,
    pub distance: f64,
}

/// Full replacement geometry for one state of the engine.
///
/// Every user action produces a fresh frame; nothing is patched in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneFrame {
    pub zoom_level: ZoomLevel,
    pub now: NaiveDateTime,
    pub selected: NaiveDateTime,
    pub now_height: f64,
    pub selected_height: f64,
    /// Visible height window `(start, end)`.
    pub window: (f64, f64),
    pub camera: CameraHint,
    pub bodies: Vec<BodyPlacement>,
    pub orbits: Vec<BodyCurve>,
    pub worldlines: Vec<BodyCurve>,
    pub markers: Vec<MarkerPrimitive>,
    pub connectors: Vec<BodyCurve>,
}

impl SceneFrame {
    pub fn validate(&self) -> CalendarResult<()> {
        if !self.now_height.is_finite() || !self.selected_height.is_finite() {
            return Err(CalendarError::InvalidData(
                "frame heights must be finite".to_owned(),
            ));
        }
        if !self.window.0.is_finite() || !self.window.1.is_finite() || self.window.0 > self.window.1
        {
            return Err(CalendarError::InvalidData(
                "frame window must be finite and ordered".to_owned(),
            ));
        }
        if !self.camera.focus.is_finite() || !self.camera.distance.is_finite() {
            return Err(CalendarError::InvalidData(
                "camera hint must be finite".to_owned(),
            ));
        }

        for body in &self.bodies {
            if !body.selected_position.is_finite() || !body.now_position.is_finite() {
                return Err(CalendarError::InvalidData(format!(
                    "body `{}` position must be finite",
                    body.name
                )));
            }
        }
        for curve in self
            .orbits
            .iter()
            .chain(&self.worldlines)
            .chain(&self.connectors)
        {
            curve.curve.validate()?;
        }
        for marker in &self.markers {
            marker.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn body(&self, name: &str) -> Option<&BodyPlacement> {
        self.bodies.iter().find(|body| body.name == name)
    }

    #[must_use]
    pub fn worldline(&self, name: &str) -> Option<&Polyline> {
        self.worldlines
            .iter()
            .find(|track| track.body == name)
            .map(|track| &track.curve)
    }

    pub fn markers_with(&self, highlight: Highlight) -> impl Iterator<Item = &MarkerPrimitive> {
        self.markers
            .iter()
            .filter(move |marker| marker.highlight == highlight)
    }

    pub fn label_texts(&self) -> impl Iterator<Item = &str> {
        self.markers.iter().filter_map(MarkerPrimitive::label_text)
    }

    /// Lowest and highest height touched by any marker or curve.
    #[must_use]
    pub fn height_extent(&self) -> Option<(f64, f64)> {
        let heights = self
            .orbits
            .iter()
            .chain(&self.worldlines)
            .chain(&self.connectors)
            .flat_map(|track| track.curve.points.iter().map(|point| point.y))
            .map(OrderedFloat);
        let (min, max) = heights.fold(None, |acc, height| match acc {
            None => Some((height, height)),
            Some((min, max)) => Some((min.min(height), max.max(height))),
        })?;
        Some((min.into_inner(), max.into_inner()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
            && self.orbits.is_empty()
            && self.worldlines.is_empty()
            && self.markers.is_empty()
            && self.connectors.is_empty()
    }
}
