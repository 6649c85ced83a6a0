use tracing::{debug, trace};

use crate::core::{Clock, ZoomLevel};
use crate::error::CalendarResult;
use crate::navigation::{Direction, NavigationState, ReturnStep, SelectionTranslator};
use crate::render::Renderer;

use super::CalendarEngine;

impl<R: Renderer, C: Clock> CalendarEngine<R, C> {
    /// Switches zoom level, re-expressing the selection for the new level.
    ///
    /// Cancels any running return-to-present transition.
    pub fn set_zoom_level(&mut self, level: ZoomLevel) -> CalendarResult<()> {
        self.refresh_now();
        self.return_animation.cancel();
        let from = self.zoom_level;
        if from != level {
            self.state = SelectionTranslator::new(self.now).translate(&self.state, from, level);
            self.zoom_level = level;
            debug!(
                from = from.index(),
                to = level.index(),
                selected = %self.selected_datetime(),
                "zoom level changed"
            );
        }
        self.render()
    }

    pub fn zoom_in(&mut self) -> CalendarResult<()> {
        self.set_zoom_level(self.zoom_level.zoomed_in())
    }

    pub fn zoom_out(&mut self) -> CalendarResult<()> {
        self.set_zoom_level(self.zoom_level.zoomed_out())
    }

    /// Steps the active level's unit forward or backward.
    ///
    /// Cancels any running return-to-present transition.
    pub fn navigate(&mut self, direction: Direction) -> CalendarResult<()> {
        self.refresh_now();
        self.return_animation.cancel();
        self.state.navigate(self.zoom_level, direction, self.now);
        trace!(
            zoom_level = self.zoom_level.index(),
            ?direction,
            selected = %self.selected_datetime(),
            "navigate"
        );
        self.render()
    }

    /// Starts the animated return to the real present.
    ///
    /// Returns `false` and leaves the running transition untouched when one
    /// is already active, or when the state is already the present.
    pub fn return_to_present(&mut self) -> CalendarResult<bool> {
        self.refresh_now();
        if self.state == NavigationState::present(self.now) {
            return Ok(false);
        }
        let started = self.return_animation.start(self.state);
        if started {
            debug!(
                selected = %self.selected_datetime(),
                duration_secs = self.return_animation.config().duration_secs,
                "return to present started"
            );
        }
        Ok(started)
    }

    /// Advances the return-to-present transition by `delta_seconds` and
    /// renders the resulting state. Returns whether a frame was produced.
    pub fn tick(&mut self, delta_seconds: f64) -> CalendarResult<bool> {
        if !self.return_animation.is_active() {
            return Ok(false);
        }
        self.refresh_now();
        let present = NavigationState::present(self.now);
        match self.return_animation.step(delta_seconds, &present) {
            ReturnStep::Idle => return Ok(false),
            ReturnStep::Moving(state) => {
                self.state = state;
                trace!(
                    progress = self.return_animation.progress().unwrap_or(1.0),
                    "return to present step"
                );
            }
            ReturnStep::Arrived(state) => {
                self.state = state;
                debug!(now = %self.now, "return to present finished");
            }
        }
        self.render()?;
        Ok(true)
    }
}
