//! User theme input and loaders.

use std::path::Path;

use indexmap::IndexMap;
use serde_json::Value;

use super::colors::ColorInput;
use super::tokens::{TokenCategory, TokenTable};
use crate::types::StyleValue;
use crate::{Error, Result};

/// User-supplied theme overrides.
///
/// Known token categories are merged over the defaults; any other key is
/// carried verbatim as an extra token group.
///
/// # Example
///
/// ```
/// use horizon_lattice_variants::prelude::*;
///
/// let input = ThemeInput::from_json_str(r##"{
///     "colors": { "primary": "#000" },
///     "spacing": { "md": 12 },
///     "breakpoints": { "tablet": 768 }
/// }"##).unwrap();
///
/// assert!(input.colors.is_some());
/// assert!(input.extra.contains_key("breakpoints"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeInput {
    /// Color overrides.
    pub colors: Option<ColorInput>,
    /// Overrides per known token category.
    pub tokens: IndexMap<TokenCategory, TokenTable>,
    /// Custom token groups passed through unchanged.
    pub extra: IndexMap<String, Value>,
}

impl ThemeInput {
    /// Create an empty theme input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the color input.
    pub fn colors(mut self, colors: ColorInput) -> Self {
        self.colors = Some(colors);
        self
    }

    /// Override one token.
    pub fn token(
        mut self,
        category: TokenCategory,
        name: impl Into<String>,
        value: impl Into<StyleValue>,
    ) -> Self {
        self.tokens
            .entry(category)
            .or_default()
            .insert(name.into(), value.into());
        self
    }

    /// Add a custom token group.
    pub fn extra(mut self, name: impl Into<String>, value: Value) -> Self {
        self.extra.insert(name.into(), value);
        self
    }

    /// Check the input for problems the merge itself tolerates.
    ///
    /// Currently this reports light/dark color key mismatches.
    pub fn validate(&self) -> Result<()> {
        match &self.colors {
            Some(colors) => colors.check_parity(),
            None => Ok(()),
        }
    }

    /// Parse a theme from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// Parse a theme from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let value: Value = toml::from_str(text)?;
        Self::from_value(&value)
    }

    /// Load a theme from a `.json` or `.toml` file.
    ///
    /// Files with any other extension are read as JSON.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        if is_toml {
            Self::from_toml_str(&content)
        } else {
            Self::from_json_str(&content)
        }
    }

    /// Build a theme input from a JSON value.
    pub fn from_value(value: &Value) -> Result<Self> {
        let Value::Object(entries) = value else {
            return Err(Error::invalid_theme("<root>", "expected an object"));
        };

        let mut input = Self::new();
        for (key, value) in entries {
            if key == "colors" {
                input.colors = Some(ColorInput::from_json(value)?);
            } else if let Some(category) = TokenCategory::from_key(key) {
                input.tokens.insert(category, token_table(key, value)?);
            } else {
                input.extra.insert(key.clone(), value.clone());
            }
        }
        Ok(input)
    }
}

impl TryFrom<Value> for ThemeInput {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(&value)
    }
}

fn token_table(key: &str, value: &Value) -> Result<TokenTable> {
    let Value::Object(entries) = value else {
        return Err(Error::invalid_theme(key, "expected an object of tokens"));
    };

    let mut table = TokenTable::new();
    for (name, token) in entries {
        let token = match token {
            Value::Number(n) => match n.as_f64() {
                Some(n) => StyleValue::Number(n),
                None => {
                    return Err(Error::invalid_theme(
                        format!("{key}.{name}"),
                        "number out of range",
                    ));
                }
            },
            Value::String(s) => StyleValue::Str(s.clone()),
            other => {
                return Err(Error::invalid_theme(
                    format!("{key}.{name}"),
                    format!("expected a string or number, found {other}"),
                ));
            }
        };
        table.insert(name.clone(), token);
    }
    Ok(table)
}
