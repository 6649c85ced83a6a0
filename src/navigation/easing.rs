use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Progress curves for the return-to-present transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    QuadInOut,
    #[default]
    CubicInOut,
    SineInOut,
}

impl Easing {
    /// Maps linear progress `t` (clamped to `[0, 1]`) to eased progress.
    ///
    /// Every curve fixes `0 -> 0` and `1 -> 1`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Self::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
        }
    }
}
