//! Light/dark mode selection over a [`ColorScheme`](crate::theme::ColorScheme).
//!
//! A [`ModeState`] tracks the user's [`ColorMode`], resolves it against a
//! [`SystemPreference`], and optionally persists it through a [`ModeStore`].
//! [`ModeScope`] makes a state available to code further down the call
//! stack on the same thread.

mod scope;
mod state;
mod system;

pub use scope::{ModeScope, ModeScopeGuard};
pub use state::{ColorMode, MemoryModeStore, ModeState, ModeStore};
pub use system::SystemPreference;
