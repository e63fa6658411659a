//! Design tokens, color schemes, and theme merging.

mod colors;
mod defaults;
mod input;
mod merge;
mod tokens;

pub use colors::{ColorInput, ColorScheme, SchemeKind};
pub use defaults::ThemeDefaults;
pub use input::ThemeInput;
pub use merge::{MergedTheme, ResolvedTheme, merge_theme};
pub use tokens::{ColorMap, TokenCategory, TokenTable};
