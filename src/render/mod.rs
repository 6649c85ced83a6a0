mod frame;
mod null_renderer;
mod primitives;

pub use frame::{BodyCurve, BodyPlacement, CameraHint, SceneFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{Color, Highlight, Label, MarkerPrimitive, MarkerShape, Polyline};

use crate::error::CalendarResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `SceneFrame` and replace whatever
/// they drew before; line, curve and billboard drawing stay on their side.
pub trait Renderer {
    fn render(&mut self, frame: &SceneFrame) -> CalendarResult<()>;
}
