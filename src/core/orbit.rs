use std::f64::consts::TAU;

use chrono::{Datelike, NaiveDateTime};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::Point3;
use crate::core::calendar::days_in_year;
use crate::core::height::{HEIGHT_PER_YEAR, fractional_hour, height_for_datetime};
use crate::core::helix::{HelicalCurveSpec, generate_helical_curve};
use crate::error::{CalendarError, CalendarResult};

/// Zero-based day-of-year used as the stylized vernal equinox (March 20/21).
pub const VERNAL_EQUINOX_DAY_OF_YEAR: f64 = 79.0;

/// Angular position of a body at `height`.
///
/// Angles decrease as height grows, which reads counter-clockwise when the
/// plane is viewed from the north pole of the projection. Every orbit,
/// connector and marker call site goes through this one function.
///
/// `period_years` must be non-zero; catalogs enforce that before any call.
#[must_use]
pub fn orbital_angle(
    height: f64,
    reference_height: f64,
    period_years: f64,
    phase_at_reference: f64,
) -> f64 {
    debug_assert!(period_years != 0.0, "orbital period must be non-zero");
    phase_at_reference - TAU * (height - reference_height) / HEIGHT_PER_YEAR / period_years
}

/// Static catalog entry for one orbiting body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub name: String,
    pub orbital_radius: f64,
    pub orbital_period_years: f64,
    /// Decorative phase (radians) the body holds at the vernal equinox.
    pub phase_reference_angle: f64,
}

impl Body {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        orbital_radius: f64,
        orbital_period_years: f64,
        phase_reference_angle: f64,
    ) -> Self {
        Self {
            name: name.into(),
            orbital_radius,
            orbital_period_years,
            phase_reference_angle,
        }
    }

    pub fn validate(&self) -> CalendarResult<()> {
        if !self.orbital_period_years.is_finite() || self.orbital_period_years == 0.0 {
            return Err(CalendarError::DegenerateOrbit {
                body: self.name.clone(),
            });
        }
        if !self.orbital_radius.is_finite() || self.orbital_radius <= 0.0 {
            return Err(CalendarError::InvalidConfig(format!(
                "body `{}` orbital radius must be finite and > 0",
                self.name
            )));
        }
        if !self.phase_reference_angle.is_finite() {
            return Err(CalendarError::InvalidConfig(format!(
                "body `{}` phase reference angle must be finite",
                self.name
            )));
        }
        Ok(())
    }
}

/// Ordered, name-keyed body catalog. Iteration order is draw order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BodyCatalog {
    bodies: IndexMap<String, Body>,
}

impl Default for BodyCatalog {
    fn default() -> Self {
        Self::solar_system()
    }
}

impl BodyCatalog {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            bodies: IndexMap::new(),
        }
    }

    /// The eight planets with radii in hundredths of an AU.
    #[must_use]
    pub fn solar_system() -> Self {
        [
            Body::new("Mercury", 38.7, 0.2408, 4.40),
            Body::new("Venus", 72.3, 0.6152, 3.18),
            Body::new("Earth", 100.0, 1.0, 1.75),
            Body::new("Mars", 152.4, 1.8809, 6.20),
            Body::new("Jupiter", 520.3, 11.862, 0.60),
            Body::new("Saturn", 953.7, 29.457, 0.87),
            Body::new("Uranus", 1_919.0, 84.011, 5.48),
            Body::new("Neptune", 3_007.0, 164.79, 5.31),
        ]
        .into_iter()
        .collect()
    }

    #[must_use]
    pub fn with_body(mut self, body: Body) -> Self {
        self.bodies.insert(body.name.clone(), body);
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Body> {
        self.bodies.get(name)
    }

    pub fn require(&self, name: &str) -> CalendarResult<&Body> {
        self.get(name)
            .ok_or_else(|| CalendarError::UnknownBody(name.to_owned()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn validate(&self) -> CalendarResult<()> {
        if self.bodies.is_empty() {
            return Err(CalendarError::InvalidConfig(
                "body catalog must not be empty".to_owned(),
            ));
        }
        for body in self.bodies.values() {
            body.validate()?;
        }
        Ok(())
    }
}

impl FromIterator<Body> for BodyCatalog {
    fn from_iter<T: IntoIterator<Item = Body>>(iter: T) -> Self {
        Self {
            bodies: iter
                .into_iter()
                .map(|body| (body.name.clone(), body))
                .collect(),
        }
    }
}

/// Fraction of the year elapsed since the stylized vernal equinox.
///
/// Negative before day 79. This is a decorative approximation, not an
/// ephemeris.
#[must_use]
pub fn year_fraction_since_equinox(datetime: NaiveDateTime) -> f64 {
    let day_of_year = f64::from(datetime.ordinal0()) + fractional_hour(datetime.time()) / 24.0;
    (day_of_year - VERNAL_EQUINOX_DAY_OF_YEAR) / f64::from(days_in_year(datetime.year()))
}

/// Per-body phase anchors captured once from the real clock at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseReference {
    reference_height: f64,
    phases: IndexMap<String, f64>,
}

impl PhaseReference {
    /// Anchors every body of `catalog` at `now`'s height.
    #[must_use]
    pub fn capture(catalog: &BodyCatalog, now: NaiveDateTime) -> Self {
        let fraction = year_fraction_since_equinox(now);
        let phases = catalog
            .iter()
            .map(|body| {
                let phase = body.phase_reference_angle - TAU * fraction / body.orbital_period_years;
                (body.name.clone(), phase)
            })
            .collect();
        Self {
            reference_height: height_for_datetime(now),
            phases,
        }
    }

    #[must_use]
    pub fn reference_height(&self) -> f64 {
        self.reference_height
    }

    #[must_use]
    pub fn phase_of(&self, name: &str) -> Option<f64> {
        self.phases.get(name).copied()
    }

    /// Binds `body` to its captured phase.
    pub fn track(&self, body: &Body) -> CalendarResult<BodyTrack> {
        let phase_at_reference = self
            .phase_of(&body.name)
            .ok_or_else(|| CalendarError::UnknownBody(body.name.clone()))?;
        Ok(BodyTrack {
            body: body.clone(),
            reference_height: self.reference_height,
            phase_at_reference,
        })
    }
}

/// A body bound to its phase reference: height in, geometry out.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyTrack {
    pub body: Body,
    pub reference_height: f64,
    pub phase_at_reference: f64,
}

impl BodyTrack {
    #[must_use]
    pub fn angle_at(&self, height: f64) -> f64 {
        orbital_angle(
            height,
            self.reference_height,
            self.body.orbital_period_years,
            self.phase_at_reference,
        )
    }

    #[must_use]
    pub fn position_at(&self, height: f64) -> Point3 {
        self.position_at_radius(height, self.body.orbital_radius)
    }

    /// Position on the body's angular track at an arbitrary radius.
    #[must_use]
    pub fn position_at_radius(&self, height: f64, radius: f64) -> Point3 {
        Point3::from_polar(self.angle_at(height), radius, height)
    }

    /// Point on the body's track at `radius_fraction` of its orbital radius.
    #[must_use]
    pub fn position_at_fraction(&self, height: f64, radius_fraction: f64) -> Point3 {
        self.position_at_radius(height, self.body.orbital_radius * radius_fraction)
    }

    #[must_use]
    pub fn helix(
        &self,
        start_height: f64,
        end_height: f64,
        radius: f64,
        segments: usize,
    ) -> Vec<Point3> {
        generate_helical_curve(HelicalCurveSpec {
            start_height,
            end_height,
            radius,
            reference_height: self.reference_height,
            period_years: self.body.orbital_period_years,
            phase_at_reference: self.phase_at_reference,
            segments,
        })
    }
}
