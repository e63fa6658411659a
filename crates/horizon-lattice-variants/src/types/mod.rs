//! Style and variant value types.

mod value;

pub use value::{StyleValue, VariantValue};
