//! Style maps and per-slot style tables.

mod map;

pub use map::{SlotStyles, StyleMap};
