//! Style caching for repeated computations.

mod key;
mod store;

pub use key::{CacheEpoch, StyleCacheKey};
pub use store::StyleCache;
