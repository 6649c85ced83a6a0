use serde::{Deserialize, Serialize};

/// Point in the combined space/time projection.
///
/// `x`/`z` span the orbital plane, `y` is the height (time) axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Point on the height axis at the Sun's position.
    #[must_use]
    pub const fn on_axis(height: f64) -> Self {
        Self::new(0.0, height, 0.0)
    }

    /// Polar placement in the orbital plane at `height`.
    #[must_use]
    pub fn from_polar(angle: f64, radius: f64, height: f64) -> Self {
        Self::new(angle.cos() * radius, height, angle.sin() * radius)
    }

    #[must_use]
    pub fn offset(self, dx: f64, dy: f64, dz: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// Horizontal distance from the height axis.
    #[must_use]
    pub fn planar_radius(self) -> f64 {
        self.x.hypot(self.z)
    }

    /// Angle of the horizontal projection around the height axis.
    #[must_use]
    pub fn planar_angle(self) -> f64 {
        self.z.atan2(self.x)
    }

    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}
