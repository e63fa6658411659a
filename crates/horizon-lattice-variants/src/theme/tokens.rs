//! Token categories and tables.

use std::fmt;

use indexmap::IndexMap;

use crate::types::StyleValue;

/// A table of named design tokens within one category.
pub type TokenTable = IndexMap<String, StyleValue>;

/// A table of named colors.
pub type ColorMap = IndexMap<String, String>;

/// The token categories every resolved theme carries.
///
/// Theme input keys outside this set (and other than `colors`) are kept as
/// extra tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenCategory {
    /// Margins, paddings and gaps.
    Spacing,
    /// Font sizes.
    FontSizes,
    /// Corner radii.
    Radii,
    /// Box shadows.
    Shadows,
    /// Stacking order.
    ZIndex,
    /// Opacity levels.
    Opacity,
    /// Line heights.
    LineHeights,
    /// Font weights.
    FontWeights,
    /// Letter spacing.
    LetterSpacing,
    /// Border widths.
    BorderWidths,
    /// Animation durations.
    Durations,
}

impl TokenCategory {
    /// All known categories, in canonical order.
    pub const ALL: [TokenCategory; 11] = [
        TokenCategory::Spacing,
        TokenCategory::FontSizes,
        TokenCategory::Radii,
        TokenCategory::Shadows,
        TokenCategory::ZIndex,
        TokenCategory::Opacity,
        TokenCategory::LineHeights,
        TokenCategory::FontWeights,
        TokenCategory::LetterSpacing,
        TokenCategory::BorderWidths,
        TokenCategory::Durations,
    ];

    /// The theme key of this category.
    pub fn key(self) -> &'static str {
        match self {
            TokenCategory::Spacing => "spacing",
            TokenCategory::FontSizes => "fontSizes",
            TokenCategory::Radii => "radii",
            TokenCategory::Shadows => "shadows",
            TokenCategory::ZIndex => "zIndex",
            TokenCategory::Opacity => "opacity",
            TokenCategory::LineHeights => "lineHeights",
            TokenCategory::FontWeights => "fontWeights",
            TokenCategory::LetterSpacing => "letterSpacing",
            TokenCategory::BorderWidths => "borderWidths",
            TokenCategory::Durations => "durations",
        }
    }

    /// Look up a category by its theme key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.key() == key)
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Merge `overrides` over `defaults`, override entries winning.
pub(crate) fn merge_tables<V: Clone>(
    defaults: &IndexMap<String, V>,
    overrides: &IndexMap<String, V>,
) -> IndexMap<String, V> {
    let mut merged = defaults.clone();
    for (name, value) in overrides {
        merged.insert(name.clone(), value.clone());
    }
    merged
}
