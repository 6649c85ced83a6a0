use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};

use super::{Easing, NavigationState};

/// Tuning for the animated return to the present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReturnToPresentConfig {
    pub duration_secs: f64,
    pub easing: Easing,
}

impl Default for ReturnToPresentConfig {
    fn default() -> Self {
        Self {
            duration_secs: 1.0,
            easing: Easing::CubicInOut,
        }
    }
}

/// Outcome of one animation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnStep {
    /// No transition is running.
    Idle,
    /// Intermediate state for this tick.
    Moving(NavigationState),
    /// Final tick: exactly the canonical present.
    Arrived(NavigationState),
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ActiveReturn {
    from: NavigationState,
    elapsed_secs: f64,
}

/// Bounded, idempotent transition from a navigated state back to "now".
///
/// Intermediate states are interpolated from the state captured at start.
/// The last step always yields the target state itself rather than an
/// interpolated value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReturnToPresent {
    config: ReturnToPresentConfig,
    active: Option<ActiveReturn>,
}

impl ReturnToPresentConfig {
    pub fn validate(&self) -> CalendarResult<()> {
        if !self.duration_secs.is_finite() || self.duration_secs < 0.0 {
            return Err(CalendarError::InvalidConfig(
                "return-to-present duration must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

impl ReturnToPresent {
    #[must_use]
    pub fn new(config: ReturnToPresentConfig) -> Self {
        Self {
            config,
            active: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> ReturnToPresentConfig {
        self.config
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Starts a transition from `from`. Returns `false` and changes nothing
    /// while a transition is already running.
    pub fn start(&mut self, from: NavigationState) -> bool {
        if self.active.is_some() {
            return false;
        }
        self.active = Some(ActiveReturn {
            from,
            elapsed_secs: 0.0,
        });
        true
    }

    pub fn cancel(&mut self) {
        self.active = None;
    }

    /// Eased progress in `[0, 1]`, or `None` when idle.
    #[must_use]
    pub fn progress(&self) -> Option<f64> {
        self.active.map(|run| self.eased(run.elapsed_secs))
    }

    /// Advances by `delta_seconds` and returns the state to display.
    pub fn step(&mut self, delta_seconds: f64, present: &NavigationState) -> ReturnStep {
        let Some(mut run) = self.active else {
            return ReturnStep::Idle;
        };

        if delta_seconds.is_finite() && delta_seconds > 0.0 {
            run.elapsed_secs += delta_seconds;
        }

        if self.config.duration_secs <= 0.0 || run.elapsed_secs >= self.config.duration_secs {
            self.active = None;
            return ReturnStep::Arrived(*present);
        }

        self.active = Some(run);
        let eased = self.eased(run.elapsed_secs);
        ReturnStep::Moving(run.from.interpolate(present, eased))
    }

    fn eased(&self, elapsed_secs: f64) -> f64 {
        if self.config.duration_secs <= 0.0 {
            return 1.0;
        }
        self.config
            .easing
            .apply(elapsed_secs / self.config.duration_secs)
    }
}
