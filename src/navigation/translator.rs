use chrono::NaiveDateTime;

use crate::core::ZoomLevel;

use super::NavigationState;
use super::codec::{decode, encode};

/// Carries the selected instant across zoom-level changes.
///
/// The selection is always re-derived from the state being left, never from
/// a cached value, so rapid zoom switching cannot desynchronize offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionTranslator {
    now: NaiveDateTime,
}

impl SelectionTranslator {
    #[must_use]
    pub fn new(now: NaiveDateTime) -> Self {
        Self { now }
    }

    #[must_use]
    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    #[must_use]
    pub fn selected(&self, state: &NavigationState, level: ZoomLevel) -> NaiveDateTime {
        decode(state, level, self.now)
    }

    /// State that selects `selected` at `level`.
    #[must_use]
    pub fn state_for(&self, selected: NaiveDateTime, level: ZoomLevel) -> NavigationState {
        encode(selected, level, self.now)
    }

    /// Re-expresses `state` (authoritative at `from`) for the `to` level.
    #[must_use]
    pub fn translate(
        &self,
        state: &NavigationState,
        from: ZoomLevel,
        to: ZoomLevel,
    ) -> NavigationState {
        self.state_for(self.selected(state, from), to)
    }
}
