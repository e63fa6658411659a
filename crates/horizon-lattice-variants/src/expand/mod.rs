//! Shorthand utility ("macro") expansion.

mod expander;
mod macros;

pub use expander::{expand_config, expand_slots, expand_style};
pub use macros::{MacroFn, Macros};
