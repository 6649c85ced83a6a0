use serde::{Deserialize, Serialize};

use crate::core::Point3;
use crate::error::{CalendarError, CalendarResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self::rgba(self.red, self.green, self.blue, alpha)
    }

    pub fn validate(self) -> CalendarResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(CalendarError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Ordered 3D points drawn as one connected line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub points: Vec<Point3>,
    pub color: Color,
    pub opacity: f64,
}

impl Polyline {
    #[must_use]
    pub fn new(points: Vec<Point3>, color: Color, opacity: f64) -> Self {
        Self {
            points,
            color,
            opacity,
        }
    }

    #[must_use]
    pub fn segment(start: Point3, end: Point3, color: Color, opacity: f64) -> Self {
        Self::new(vec![start, end], color, opacity)
    }

    #[must_use]
    pub fn first(&self) -> Option<Point3> {
        self.points.first().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<Point3> {
        self.points.last().copied()
    }

    pub fn validate(&self) -> CalendarResult<()> {
        if self.points.len() < 2 {
            return Err(CalendarError::InvalidData(
                "polyline needs at least two points".to_owned(),
            ));
        }
        if self.points.iter().any(|point| !point.is_finite()) {
            return Err(CalendarError::InvalidData(
                "polyline coordinates must be finite".to_owned(),
            ));
        }
        validate_opacity(self.opacity)?;
        self.color.validate()
    }
}

/// Billboard text anchored at a 3D position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
    pub position: Point3,
    pub color: Color,
    pub scale: f64,
}

impl Label {
    #[must_use]
    pub fn new(text: impl Into<String>, position: Point3, color: Color, scale: f64) -> Self {
        Self {
            text: text.into(),
            position,
            color,
            scale,
        }
    }

    pub fn validate(&self) -> CalendarResult<()> {
        if self.text.is_empty() {
            return Err(CalendarError::InvalidData(
                "label text must not be empty".to_owned(),
            ));
        }
        if !self.position.is_finite() {
            return Err(CalendarError::InvalidData(
                "label position must be finite".to_owned(),
            ));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(CalendarError::InvalidData(
                "label scale must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// How a marker relates to the real and the navigated present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Highlight {
    ActualNow,
    UserSelected,
    Neutral,
}

/// Geometry of one time marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MarkerShape {
    BoundaryLine(Polyline),
    BoundaryCurve(Polyline),
    Label(Label),
}

/// A calendar boundary drawn in the projection, tagged with its highlight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerPrimitive {
    pub shape: MarkerShape,
    pub highlight: Highlight,
}

impl MarkerPrimitive {
    #[must_use]
    pub fn is_label(&self) -> bool {
        matches!(self.shape, MarkerShape::Label(_))
    }

    #[must_use]
    pub fn label_text(&self) -> Option<&str> {
        match &self.shape {
            MarkerShape::Label(label) => Some(label.text.as_str()),
            MarkerShape::BoundaryLine(_) | MarkerShape::BoundaryCurve(_) => None,
        }
    }

    #[must_use]
    pub fn color(&self) -> Color {
        match &self.shape {
            MarkerShape::BoundaryLine(line) | MarkerShape::BoundaryCurve(line) => line.color,
            MarkerShape::Label(label) => label.color,
        }
    }

    pub fn validate(&self) -> CalendarResult<()> {
        match &self.shape {
            MarkerShape::BoundaryLine(line) | MarkerShape::BoundaryCurve(line) => line.validate(),
            MarkerShape::Label(label) => label.validate(),
        }
    }
}

fn validate_opacity(opacity: f64) -> CalendarResult<()> {
    if !opacity.is_finite() || !(0.0..=1.0).contains(&opacity) {
        return Err(CalendarError::InvalidData(
            "opacity must be finite and in [0, 1]".to_owned(),
        ));
    }
    Ok(())
}
