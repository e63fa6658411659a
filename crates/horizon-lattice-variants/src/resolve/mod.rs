//! Variant resolution.

mod selections;
mod variants;

pub use selections::{Selections, VariantProps, resolve_selections};
pub use variants::{compute_slot_style, compute_styles};
