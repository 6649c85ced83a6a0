use tracing::debug;

use crate::core::{Clock, PhaseReference};
use crate::error::{CalendarError, CalendarResult};
use crate::navigation::{NavigationState, ReturnToPresent};
use crate::render::Renderer;

use super::{CalendarEngine, CalendarEngineConfig};

impl<R: Renderer, C: Clock> CalendarEngine<R, C> {
    /// Creates an engine positioned at the real present and renders the
    /// first frame.
    ///
    /// Body phases are anchored once here from `clock`; later clock reads
    /// only move "now", never the orbital phase reference.
    pub fn new(renderer: R, clock: C, config: CalendarEngineConfig) -> CalendarResult<Self> {
        config.validate()?;

        let now = clock.now();
        let reference = PhaseReference::capture(&config.catalog, now);
        let tracks = config
            .catalog
            .iter()
            .map(|body| reference.track(body))
            .collect::<CalendarResult<Vec<_>>>()?;
        let focus_index = tracks
            .iter()
            .position(|track| track.body.name == config.focus_body)
            .ok_or_else(|| CalendarError::UnknownBody(config.focus_body.clone()))?;

        debug!(
            bodies = tracks.len(),
            focus = %config.focus_body,
            zoom_level = config.initial_zoom_level.index(),
            reference_height = reference.reference_height(),
            "initialize calendar engine"
        );

        let mut engine = Self {
            renderer,
            clock,
            zoom_level: config.initial_zoom_level,
            return_animation: ReturnToPresent::new(config.return_to_present),
            config,
            tracks,
            focus_index,
            state: NavigationState::present(now),
            now,
            last_scene: None,
        };
        engine.render()?;
        Ok(engine)
    }
}
