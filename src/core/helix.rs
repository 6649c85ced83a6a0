use crate::core::Point3;
use crate::core::height::HEIGHT_PER_YEAR;
use crate::core::orbit::orbital_angle;

/// Inputs for one helical polyline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HelicalCurveSpec {
    pub start_height: f64,
    pub end_height: f64,
    pub radius: f64,
    pub reference_height: f64,
    pub period_years: f64,
    pub phase_at_reference: f64,
    pub segments: usize,
}

/// Samples `segments + 1` ordered points from `start_height` to `end_height`.
///
/// Heights are sampled linearly. Angles come straight from `orbital_angle`
/// and are never reduced modulo `2π`, so consecutive samples stay continuous
/// across revolutions; only the final trigonometric projection wraps.
/// The first and last samples land exactly on the requested heights.
/// A `segments` of zero is treated as one, so the result always holds both
/// endpoints.
#[must_use]
pub fn generate_helical_curve(spec: HelicalCurveSpec) -> Vec<Point3> {
    let segments = spec.segments.max(1);
    let span = spec.end_height - spec.start_height;
    let mut points = Vec::with_capacity(segments + 1);

    for index in 0..=segments {
        let height = if index == segments {
            spec.end_height
        } else {
            spec.start_height + span * (index as f64 / segments as f64)
        };
        let angle = orbital_angle(
            height,
            spec.reference_height,
            spec.period_years,
            spec.phase_at_reference,
        );
        points.push(Point3::from_polar(angle, spec.radius, height));
    }

    points
}

/// Segment count giving roughly `per_revolution` samples per orbit.
#[must_use]
pub fn segments_for_span(
    span_height: f64,
    period_years: f64,
    per_revolution: usize,
    min_segments: usize,
    max_segments: usize,
) -> usize {
    let min_segments = min_segments.max(1);
    let max_segments = max_segments.max(min_segments);
    let revolutions = (span_height / HEIGHT_PER_YEAR / period_years).abs();
    if !revolutions.is_finite() {
        return min_segments;
    }
    let wanted = (revolutions * per_revolution as f64).ceil();
    if wanted >= max_segments as f64 {
        max_segments
    } else {
        (wanted as usize).clamp(min_segments, max_segments)
    }
}
