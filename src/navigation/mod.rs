//! Navigation state, its decode/encode rules and the return-to-present
//! transition.

pub mod codec;
mod easing;
mod present;
mod state;
mod translator;

pub use codec::{decode, encode, rebase};
pub use easing::Easing;
pub use present::{ReturnStep, ReturnToPresent, ReturnToPresentConfig};
pub use state::{Direction, HOUR_STEP, NavigationState};
pub use translator::SelectionTranslator;
