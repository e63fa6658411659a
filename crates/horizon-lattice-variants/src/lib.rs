//! Variant-driven style resolution for Horizon Lattice.
//!
//! This crate computes per-slot style maps for components from declarative
//! configurations, featuring:
//!
//! - **Design tokens**: Built-in token tables merged with user overrides
//! - **Color schemes**: Flat or light/dark color input with a mode layer
//! - **Utilities**: Shorthand style keys expanded into canonical properties
//! - **Variants**: Named axes, default selections, and compound overrides
//! - **Caching**: Each declaration memoizes its results per selection
//!
//! # Example
//!
//! ```
//! use horizon_lattice_variants::prelude::*;
//!
//! let engine = Engine::new(
//!     ThemeInput::new().colors(ColorInput::flat([("primary", "#6200EE")])),
//!     Macros::new().alias("px", ["paddingLeft", "paddingRight"]),
//! );
//!
//! let button = engine
//!     .styled_with(|helper, theme| {
//!         helper
//!             .config(["root", "label"])
//!             .base("root", helper.style().with("px", 12))
//!             .base("label", helper.style().with("color", theme.color("primary").unwrap_or("black")))
//!             .variant("size", "lg", SlotStyles::new().with("root", helper.style().with("px", 24)))
//!             .build()
//!     })
//!     .unwrap();
//!
//! let styles = button.compute(&VariantProps::new().set("size", "lg"));
//! assert_eq!(styles["root"].get("paddingLeft"), Some(&StyleValue::from(24)));
//! assert_eq!(styles["label"].get("color"), Some(&StyleValue::from("#6200EE")));
//! ```

pub mod cache;
pub mod config;
pub mod engine;
pub mod expand;
pub mod logging;
pub mod mode;
pub mod resolve;
pub mod style;
pub mod theme;
pub mod types;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::config::{CompoundVariant, Config, ConfigBuilder, ConfigHelper, ConfigSource};
    pub use crate::engine::{Engine, Styled};
    pub use crate::expand::Macros;
    pub use crate::mode::{
        ColorMode, MemoryModeStore, ModeScope, ModeScopeGuard, ModeState, ModeStore,
        SystemPreference,
    };
    pub use crate::resolve::VariantProps;
    pub use crate::style::{SlotStyles, StyleMap};
    pub use crate::theme::{
        ColorInput, ColorMap, ColorScheme, ResolvedTheme, SchemeKind, ThemeDefaults, ThemeInput,
        TokenCategory,
    };
    pub use crate::types::{StyleValue, VariantValue};
    pub use crate::{Error, Result};
}
