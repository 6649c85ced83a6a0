use crate::error::CalendarResult;
use crate::render::{Renderer, SceneFrame};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates every frame so tests catch invalid geometry before
/// it reaches a real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_marker_count: usize,
    pub last_connector_count: usize,
    pub last_frame: Option<SceneFrame>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &SceneFrame) -> CalendarResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_marker_count = frame.markers.len();
        self.last_connector_count = frame.connectors.len();
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
