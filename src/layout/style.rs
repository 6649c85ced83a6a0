use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};
use crate::render::{Color, Highlight};

/// Colors handed to the renderer for each marker class and curve family.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerPalette {
    pub actual_now: Color,
    pub user_selected: Color,
    pub neutral: Color,
    pub connector: Color,
    pub orbit: Color,
    pub worldline: Color,
    pub moon: Color,
}

impl Default for MarkerPalette {
    fn default() -> Self {
        Self {
            actual_now: Color::rgb(0.30, 0.90, 0.45),
            user_selected: Color::rgb(1.00, 0.62, 0.15),
            neutral: Color::rgb(0.55, 0.60, 0.70),
            connector: Color::rgb(0.85, 0.35, 0.95),
            orbit: Color::rgb(0.35, 0.45, 0.65),
            worldline: Color::rgb(0.70, 0.75, 0.85),
            moon: Color::rgb(0.86, 0.86, 0.92),
        }
    }
}

impl MarkerPalette {
    #[must_use]
    pub fn color_for(&self, highlight: Highlight) -> Color {
        match highlight {
            Highlight::ActualNow => self.actual_now,
            Highlight::UserSelected => self.user_selected,
            Highlight::Neutral => self.neutral,
        }
    }

    pub fn validate(&self) -> CalendarResult<()> {
        for color in [
            self.actual_now,
            self.user_selected,
            self.neutral,
            self.connector,
            self.orbit,
            self.worldline,
            self.moon,
        ] {
            color.validate()?;
        }
        Ok(())
    }
}

/// Sampling density and marker sizing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutStyle {
    pub segments_per_revolution: usize,
    pub min_curve_segments: usize,
    pub max_curve_segments: usize,
    pub label_scale: f64,
    pub highlight_opacity: f64,
    pub neutral_opacity: f64,
    pub context_tick_opacity: f64,
    /// Distance of the hour ring from the focus body, independent of its
    /// orbital radius.
    pub hour_ring_offset: f64,
    /// Distance of the synthetic Moon from the focus body.
    pub moon_distance: f64,
}

impl Default for LayoutStyle {
    fn default() -> Self {
        Self {
            segments_per_revolution: 96,
            min_curve_segments: 8,
            max_curve_segments: 4_096,
            label_scale: 1.0,
            highlight_opacity: 1.0,
            neutral_opacity: 0.55,
            context_tick_opacity: 0.2,
            hour_ring_offset: 6.0,
            moon_distance: 9.0,
        }
    }
}

impl LayoutStyle {
    #[must_use]
    pub fn opacity_for(&self, highlight: Highlight) -> f64 {
        match highlight {
            Highlight::ActualNow | Highlight::UserSelected => self.highlight_opacity,
            Highlight::Neutral => self.neutral_opacity,
        }
    }

    pub fn validate(&self) -> CalendarResult<()> {
        if self.segments_per_revolution == 0 || self.min_curve_segments == 0 {
            return Err(CalendarError::InvalidConfig(
                "curve segment counts must be > 0".to_owned(),
            ));
        }
        if self.max_curve_segments < self.min_curve_segments {
            return Err(CalendarError::InvalidConfig(
                "max_curve_segments must be >= min_curve_segments".to_owned(),
            ));
        }
        for (value, name) in [
            (self.label_scale, "label_scale"),
            (self.hour_ring_offset, "hour_ring_offset"),
            (self.moon_distance, "moon_distance"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalendarError::InvalidConfig(format!(
                    "layout style `{name}` must be finite and > 0"
                )));
            }
        }
        for (value, name) in [
            (self.highlight_opacity, "highlight_opacity"),
            (self.neutral_opacity, "neutral_opacity"),
            (self.context_tick_opacity, "context_tick_opacity"),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(CalendarError::InvalidConfig(format!(
                    "layout style `{name}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}
