use smallvec::{SmallVec, smallvec};

use crate::render::Highlight;

/// Classifies one boundary unit against the real and the navigated present.
///
/// Actual-now wins whenever the unit matches the real clock, so a selected
/// unit equal to "now" never shows the selection color.
#[must_use]
pub fn classify<T: PartialEq>(unit: &T, actual: &T, selected: &T) -> Highlight {
    if unit == actual {
        Highlight::ActualNow
    } else if unit == selected {
        Highlight::UserSelected
    } else {
        Highlight::Neutral
    }
}

/// Units to lay out: the actual-now unit, then the selected one if distinct.
#[must_use]
pub fn highlighted_units<T: PartialEq>(actual: T, selected: T) -> SmallVec<[T; 2]> {
    if actual == selected {
        smallvec![actual]
    } else {
        smallvec![actual, selected]
    }
}
