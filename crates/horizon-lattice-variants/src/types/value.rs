//! Value types for style properties and variant selections.
//!
//! # Example
//!
//! ```
//! use horizon_lattice_variants::prelude::*;
//!
//! // Booleans and their string labels select the same variant value.
//! assert_eq!(VariantValue::from(true).label(), "true");
//! assert_eq!(VariantValue::from("true").label(), "true");
//!
//! // Whole numbers print without a fractional part.
//! assert_eq!(StyleValue::from(16).to_string(), "16");
//! ```

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single style property value.
///
/// The engine never interprets values; it only stores and overwrites them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// A numeric value (lengths, weights, opacities...).
    Number(f64),
    /// A textual value (colors, keywords, font families...).
    Str(String),
}

impl StyleValue {
    /// Get the numeric value, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleValue::Number(n) => Some(*n),
            StyleValue::Str(_) => None,
        }
    }

    /// Get the string value, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::Str(s) => Some(s),
            StyleValue::Number(_) => None,
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Number(n) => write!(f, "{n}"),
            StyleValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value)
    }
}

impl From<f32> for StyleValue {
    fn from(value: f32) -> Self {
        StyleValue::Number(f64::from(value))
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Number(f64::from(value))
    }
}

impl From<u32> for StyleValue {
    fn from(value: u32) -> Self {
        StyleValue::Number(f64::from(value))
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Str(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Str(value)
    }
}

impl From<&StyleValue> for StyleValue {
    fn from(value: &StyleValue) -> Self {
        value.clone()
    }
}

/// A runtime selection for one variant axis.
///
/// Selections are compared by their [label](VariantValue::label), so
/// `true` and `"true"` pick the same variant value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariantValue {
    /// A boolean selection, labelled `"true"` or `"false"`.
    Bool(bool),
    /// A numeric selection, labelled by its natural decimal form.
    Number(f64),
    /// A string selection, used as its own label.
    Str(String),
}

impl VariantValue {
    /// The normalized label used to look up variant values and build cache keys.
    ///
    /// Numbers use their shortest plain decimal form without exponent
    /// (`2`, `1.5`, `1e21` as `1000000000000000000000`). Negative zero is
    /// labelled `0`; non-finite numbers are labelled `inf`, `-inf` and `NaN`.
    pub fn label(&self) -> Cow<'_, str> {
        match self {
            VariantValue::Bool(true) => Cow::Borrowed("true"),
            VariantValue::Bool(false) => Cow::Borrowed("false"),
            VariantValue::Number(n) if *n == 0.0 => Cow::Borrowed("0"),
            VariantValue::Number(n) => Cow::Owned(n.to_string()),
            VariantValue::Str(s) => Cow::Borrowed(s),
        }
    }

    /// Check whether two selections normalize to the same label.
    pub fn matches(&self, other: &VariantValue) -> bool {
        self.label() == other.label()
    }
}

impl fmt::Display for VariantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl From<bool> for VariantValue {
    fn from(value: bool) -> Self {
        VariantValue::Bool(value)
    }
}

impl From<f64> for VariantValue {
    fn from(value: f64) -> Self {
        VariantValue::Number(value)
    }
}

impl From<i32> for VariantValue {
    fn from(value: i32) -> Self {
        VariantValue::Number(f64::from(value))
    }
}

impl From<&str> for VariantValue {
    fn from(value: &str) -> Self {
        VariantValue::Str(value.to_string())
    }
}

impl From<String> for VariantValue {
    fn from(value: String) -> Self {
        VariantValue::Str(value)
    }
}
