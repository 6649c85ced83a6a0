use serde::{Deserialize, Serialize};

use crate::core::{BodyCatalog, ZoomLevel};
use crate::error::{CalendarError, CalendarResult};
use crate::layout::{LayoutStyle, MarkerPalette};
use crate::navigation::ReturnToPresentConfig;

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can persist and reload a calendar setup, including a
/// custom body catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEngineConfig {
    #[serde(default)]
    pub initial_zoom_level: ZoomLevel,
    #[serde(default)]
    pub catalog: BodyCatalog,
    /// Body whose orbit carries the time markers and the hour ring.
    #[serde(default = "default_focus_body")]
    pub focus_body: String,
    #[serde(default)]
    pub palette: MarkerPalette,
    #[serde(default)]
    pub layout_style: LayoutStyle,
    #[serde(default)]
    pub return_to_present: ReturnToPresentConfig,
}

impl Default for CalendarEngineConfig {
    fn default() -> Self {
        Self {
            initial_zoom_level: ZoomLevel::default(),
            catalog: BodyCatalog::default(),
            focus_body: default_focus_body(),
            palette: MarkerPalette::default(),
            layout_style: LayoutStyle::default(),
            return_to_present: ReturnToPresentConfig::default(),
        }
    }
}

impl CalendarEngineConfig {
    #[must_use]
    pub fn with_initial_zoom_level(mut self, level: ZoomLevel) -> Self {
        self.initial_zoom_level = level;
        self
    }

    /// Replaces the body catalog. The focus body must still be present.
    #[must_use]
    pub fn with_catalog(mut self, catalog: BodyCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    #[must_use]
    pub fn with_focus_body(mut self, name: impl Into<String>) -> Self {
        self.focus_body = name.into();
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: MarkerPalette) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_layout_style(mut self, style: LayoutStyle) -> Self {
        self.layout_style = style;
        self
    }

    /// Sets hour-ring distance from the focus body in scene units.
    #[must_use]
    pub fn with_hour_ring_offset(mut self, offset: f64) -> Self {
        self.layout_style.hour_ring_offset = offset;
        self
    }

    #[must_use]
    pub fn with_moon_distance(mut self, distance: f64) -> Self {
        self.layout_style.moon_distance = distance;
        self
    }

    #[must_use]
    pub fn with_return_to_present(mut self, config: ReturnToPresentConfig) -> Self {
        self.return_to_present = config;
        self
    }

    #[must_use]
    pub fn with_return_duration_secs(mut self, duration_secs: f64) -> Self {
        self.return_to_present.duration_secs = duration_secs;
        self
    }

    /// Rejects configs the engine cannot project: degenerate orbits, a
    /// missing focus body, out-of-range colors or sampling settings.
    pub fn validate(&self) -> CalendarResult<()> {
        self.catalog.validate()?;
        self.catalog.require(&self.focus_body)?;
        self.palette.validate()?;
        self.layout_style.validate()?;
        self.return_to_present.validate()
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> CalendarResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CalendarError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> CalendarResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| CalendarError::InvalidConfig(format!("failed to parse config: {e}")))
    }
}

fn default_focus_body() -> String {
    "Earth".to_owned()
}
