use chrono::NaiveDateTime;
use tracing::{trace, warn};

use crate::core::{BodyTrack, Clock, SystemClock, ZoomLevel};
use crate::error::CalendarResult;
use crate::navigation::{NavigationState, ReturnToPresent, decode, rebase};
use crate::render::{Renderer, SceneFrame};

use super::CalendarEngineConfig;

/// Main orchestration facade consumed by host applications.
///
/// `CalendarEngine` owns the navigation state, the zoom level and the body
/// tracks, and hands a complete `SceneFrame` to the renderer after every
/// user action.
pub struct CalendarEngine<R: Renderer, C: Clock = SystemClock> {
    pub(super) renderer: R,
    pub(super) clock: C,
    pub(super) config: CalendarEngineConfig,
    /// One track per catalog body, in catalog order.
    pub(super) tracks: Vec<BodyTrack>,
    pub(super) focus_index: usize,
    pub(super) zoom_level: ZoomLevel,
    pub(super) state: NavigationState,
    pub(super) now: NaiveDateTime,
    pub(super) return_animation: ReturnToPresent,
    pub(super) last_scene: Option<SceneFrame>,
}

impl<R: Renderer, C: Clock> CalendarEngine<R, C> {
    #[must_use]
    pub fn config(&self) -> &CalendarEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn zoom_level(&self) -> ZoomLevel {
        self.zoom_level
    }

    /// Real present as of the last action.
    #[must_use]
    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    #[must_use]
    pub fn navigation_state(&self) -> &NavigationState {
        &self.state
    }

    /// Instant selected by the current state at the current level.
    #[must_use]
    pub fn selected_datetime(&self) -> NaiveDateTime {
        decode(&self.state, self.zoom_level, self.now)
    }

    #[must_use]
    pub fn tracks(&self) -> &[BodyTrack] {
        &self.tracks
    }

    #[must_use]
    pub fn focus_track(&self) -> &BodyTrack {
        &self.tracks[self.focus_index]
    }

    #[must_use]
    pub fn is_returning_to_present(&self) -> bool {
        self.return_animation.is_active()
    }

    /// Frame handed to the renderer by the most recent `render`.
    #[must_use]
    pub fn last_scene(&self) -> Option<&SceneFrame> {
        self.last_scene.as_ref()
    }

    /// Rebuilds the full scene and passes it to the renderer.
    pub fn render(&mut self) -> CalendarResult<()> {
        let scene = self.build_scene()?;
        if let Err(err) = self.renderer.render(&scene) {
            warn!(
                error = %err,
                zoom_level = self.zoom_level.index(),
                "renderer rejected scene"
            );
            return Err(err);
        }
        trace!(
            zoom_level = self.zoom_level.index(),
            markers = scene.markers.len(),
            connectors = scene.connectors.len(),
            "render scene"
        );
        self.last_scene = Some(scene);
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Reads the clock and re-anchors the navigation state on the new
    /// present, so zero offsets keep selecting "now" across unit rollovers.
    pub(super) fn refresh_now(&mut self) {
        let now = self.clock.now();
        if now != self.now {
            self.state = rebase(&self.state, self.zoom_level, self.now, now);
            self.now = now;
        }
    }
}
