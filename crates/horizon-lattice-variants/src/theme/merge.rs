//! Merging user themes over default token tables.

use indexmap::IndexMap;
use serde_json::Value;

use super::colors::{ColorInput, ColorScheme};
use super::defaults::ThemeDefaults;
use super::input::ThemeInput;
use super::tokens::{ColorMap, TokenCategory, TokenTable, merge_tables};
use crate::Error;
use crate::logging::targets;
use crate::types::StyleValue;

/// A fully merged theme.
///
/// Every known category is present, even when neither the defaults nor the
/// user supplied any tokens for it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedTheme {
    /// Flattened colors: default palette with user colors applied.
    pub colors: ColorMap,
    /// Merged table per known token category.
    pub tokens: IndexMap<TokenCategory, TokenTable>,
    /// Custom token groups passed through from the input.
    pub extra: IndexMap<String, Value>,
}

impl ResolvedTheme {
    /// Get a color by name.
    pub fn color(&self, name: &str) -> Option<&str> {
        self.colors.get(name).map(String::as_str)
    }

    /// Get the table of a category.
    pub fn tokens(&self, category: TokenCategory) -> Option<&TokenTable> {
        self.tokens.get(&category)
    }

    /// Get one token.
    pub fn token(&self, category: TokenCategory, name: &str) -> Option<&StyleValue> {
        self.tokens.get(&category)?.get(name)
    }

    /// Shorthand for a spacing token.
    pub fn spacing(&self, name: &str) -> Option<&StyleValue> {
        self.token(TokenCategory::Spacing, name)
    }

    /// Get a custom token group.
    pub fn extra(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }

    /// A copy of this theme whose colors are replaced wholesale.
    pub fn with_colors(&self, colors: ColorMap) -> ResolvedTheme {
        ResolvedTheme {
            colors,
            tokens: self.tokens.clone(),
            extra: self.extra.clone(),
        }
    }
}

/// The result of merging a theme: the resolved tokens and the color scheme.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergedTheme {
    /// Resolved theme tokens.
    pub theme: ResolvedTheme,
    /// Light/dark colors for the mode layer.
    pub scheme: ColorScheme,
}

/// Merge a user theme over default tables.
///
/// Defaults are applied first and user entries win per key. Light/dark key
/// mismatches are accepted and only logged; call [`ThemeInput::validate`]
/// to reject them.
pub fn merge_theme(defaults: &ThemeDefaults, input: &ThemeInput) -> MergedTheme {
    let empty = ColorInput::Flat(ColorMap::new());
    let color_input = input.colors.as_ref().unwrap_or(&empty);

    if let Err(Error::ColorKeyMismatch {
        missing_in_light,
        missing_in_dark,
    }) = color_input.check_parity()
    {
        tracing::warn!(
            target: targets::THEME,
            ?missing_in_light,
            ?missing_in_dark,
            "light and dark colors expose different keys"
        );
    }

    let colors = merge_tables(&defaults.colors, &color_input.default_colors());
    let scheme = color_input.scheme();

    let empty_table = TokenTable::new();
    let tokens: IndexMap<TokenCategory, TokenTable> = TokenCategory::ALL
        .into_iter()
        .map(|category| {
            let base = defaults.table(category).unwrap_or(&empty_table);
            let overrides = input.tokens.get(&category).unwrap_or(&empty_table);
            (category, merge_tables(base, overrides))
        })
        .collect();

    tracing::debug!(
        target: targets::THEME,
        colors = colors.len(),
        extra = input.extra.len(),
        has_dark = scheme.has_dark(),
        "merged theme"
    );

    MergedTheme {
        theme: ResolvedTheme {
            colors,
            tokens,
            extra: input.extra.clone(),
        },
        scheme,
    }
}
