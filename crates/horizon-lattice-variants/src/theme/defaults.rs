//! Built-in default token tables.

use std::sync::LazyLock;

use indexmap::IndexMap;

use super::tokens::{ColorMap, TokenCategory, TokenTable};
use crate::types::StyleValue;

static BUILTIN: LazyLock<ThemeDefaults> = LazyLock::new(ThemeDefaults::create_builtin);

/// Default token tables that user themes are merged over.
#[derive(Debug, Clone, Default)]
pub struct ThemeDefaults {
    /// Default color palette.
    pub colors: ColorMap,
    /// Default table per token category.
    pub tokens: IndexMap<TokenCategory, TokenTable>,
}

impl ThemeDefaults {
    /// Defaults with every table empty.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The shared built-in defaults.
    pub fn builtin() -> &'static ThemeDefaults {
        &BUILTIN
    }

    /// Get the default table of a category.
    pub fn table(&self, category: TokenCategory) -> Option<&TokenTable> {
        self.tokens.get(&category)
    }

    fn create_builtin() -> Self {
        let colors = colors(&[
            // Primary - blue
            ("primary", "#007AFF"),
            ("primaryLight", "#4DA3FF"),
            ("primaryDark", "#0056B3"),
            ("onPrimary", "#FFFFFF"),
            // Secondary - gray
            ("secondary", "#6C757D"),
            ("secondaryLight", "#ADB5BD"),
            ("secondaryDark", "#495057"),
            ("onSecondary", "#FFFFFF"),
            // Background
            ("background", "#FFFFFF"),
            ("surface", "#F8F9FA"),
            ("surfaceVariant", "#E9ECEF"),
            // Text
            ("textPrimary", "#212529"),
            ("textSecondary", "#6C757D"),
            ("textDisabled", "#ADB5BD"),
            // Semantic
            ("error", "#DC3545"),
            ("warning", "#FFC107"),
            ("success", "#28A745"),
            ("info", "#17A2B8"),
            // Borders
            ("border", "#DEE2E6"),
            ("borderLight", "#E9ECEF"),
            ("divider", "#CED4DA"),
            // Fixed
            ("white", "#FFFFFF"),
            ("black", "#000000"),
            ("transparent", "transparent"),
        ]);

        let mut tokens = IndexMap::new();
        tokens.insert(
            TokenCategory::Spacing,
            table(&[
                ("0", 0.0),
                ("xs", 4.0),
                ("sm", 8.0),
                ("md", 16.0),
                ("lg", 24.0),
                ("xl", 32.0),
                ("2xl", 48.0),
            ]),
        );
        tokens.insert(
            TokenCategory::FontSizes,
            table(&[
                ("xs", 12.0),
                ("sm", 14.0),
                ("md", 16.0),
                ("lg", 18.0),
                ("xl", 24.0),
                ("2xl", 32.0),
            ]),
        );
        tokens.insert(
            TokenCategory::Radii,
            table(&[
                ("none", 0.0),
                ("sm", 4.0),
                ("md", 8.0),
                ("lg", 12.0),
                ("full", 9999.0),
            ]),
        );
        tokens.insert(
            TokenCategory::Shadows,
            strings(&[
                ("none", "none"),
                ("sm", "0 1px 2px rgba(0, 0, 0, 0.05)"),
                ("md", "0 4px 6px rgba(0, 0, 0, 0.1)"),
                ("lg", "0 10px 15px rgba(0, 0, 0, 0.1)"),
            ]),
        );
        tokens.insert(
            TokenCategory::ZIndex,
            table(&[
                ("base", 0.0),
                ("dropdown", 1000.0),
                ("overlay", 1100.0),
                ("modal", 1200.0),
                ("toast", 1300.0),
                ("tooltip", 1400.0),
            ]),
        );
        tokens.insert(
            TokenCategory::Opacity,
            table(&[("disabled", 0.6), ("muted", 0.8), ("full", 1.0)]),
        );
        tokens.insert(
            TokenCategory::LineHeights,
            table(&[("tight", 1.2), ("normal", 1.4), ("relaxed", 1.6)]),
        );
        tokens.insert(
            TokenCategory::FontWeights,
            strings(&[
                ("regular", "400"),
                ("medium", "500"),
                ("semibold", "600"),
                ("bold", "700"),
            ]),
        );
        tokens.insert(
            TokenCategory::LetterSpacing,
            table(&[("tight", -0.5), ("normal", 0.0), ("wide", 0.5)]),
        );
        tokens.insert(
            TokenCategory::BorderWidths,
            table(&[("none", 0.0), ("thin", 1.0), ("thick", 2.0)]),
        );
        tokens.insert(
            TokenCategory::Durations,
            table(&[("fast", 150.0), ("normal", 250.0), ("slow", 400.0)]),
        );

        Self { colors, tokens }
    }
}

fn colors(entries: &[(&str, &str)]) -> ColorMap {
    entries
        .iter()
        .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
        .collect()
}

fn table(entries: &[(&str, f64)]) -> TokenTable {
    entries
        .iter()
        .map(|(name, value)| ((*name).to_string(), StyleValue::Number(*value)))
        .collect()
}

fn strings(entries: &[(&str, &str)]) -> TokenTable {
    entries
        .iter()
        .map(|(name, value)| ((*name).to_string(), StyleValue::from(*value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_every_category() {
        let defaults = ThemeDefaults::builtin();
        for category in TokenCategory::ALL {
            assert!(
                defaults.table(category).is_some_and(|t| !t.is_empty()),
                "missing defaults for {category}"
            );
        }
    }

    #[test]
    fn builtin_palette_has_primary() {
        assert_eq!(
            ThemeDefaults::builtin().colors.get("primary").map(String::as_str),
            Some("#007AFF")
        );
    }
}
