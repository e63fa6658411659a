//! Runtime variant selections.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::theme::ColorMap;
use crate::types::VariantValue;

/// Resolved selections: one value per axis, defaults filled in.
pub type Selections = IndexMap<String, VariantValue>;

/// The arguments of one style computation.
///
/// Holds the caller's variant selections, where `None` means "not
/// provided", and an optional color override consumed by theme-factory
/// declarations.
///
/// # Example
///
/// ```
/// use horizon_lattice_variants::prelude::*;
///
/// let props = VariantProps::new().set("size", "lg").set("square", true).unset("tone");
/// assert_eq!(props.cache_key(), "size=lg&square=true");
/// ```
#[derive(Debug, Clone, Default)]
pub struct VariantProps {
    values: IndexMap<String, Option<VariantValue>>,
    colors: Option<Arc<ColorMap>>,
}

impl VariantProps {
    /// Create empty props.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a value for an axis.
    pub fn set(mut self, axis: impl Into<String>, value: impl Into<VariantValue>) -> Self {
        self.values.insert(axis.into(), Some(value.into()));
        self
    }

    /// Mark an axis as explicitly not provided.
    ///
    /// Equivalent to omitting the axis: the default still applies.
    pub fn unset(mut self, axis: impl Into<String>) -> Self {
        self.values.insert(axis.into(), None);
        self
    }

    /// Supply a full color map that replaces the theme colors.
    ///
    /// Overrides are cached by identity: pass the same `Arc` to hit the
    /// cache again.
    pub fn with_colors(mut self, colors: Arc<ColorMap>) -> Self {
        self.colors = Some(colors);
        self
    }

    /// The color override, if any.
    pub fn colors(&self) -> Option<&Arc<ColorMap>> {
        self.colors.as_ref()
    }

    /// Get the provided value of an axis.
    pub fn get(&self, axis: &str) -> Option<&VariantValue> {
        self.values.get(axis)?.as_ref()
    }

    /// Iterate over provided (defined) selections.
    pub fn defined(&self) -> impl Iterator<Item = (&str, &VariantValue)> {
        self.values
            .iter()
            .filter_map(|(axis, value)| value.as_ref().map(|value| (axis.as_str(), value)))
    }

    /// Order-independent key over the defined selections.
    ///
    /// Axes are sorted by name and paired with their normalized labels, so
    /// `true` and `"true"` produce the same key.
    pub fn cache_key(&self) -> String {
        let mut pairs: Vec<(&str, String)> = self
            .defined()
            .map(|(axis, value)| (axis, value.label().into_owned()))
            .collect();
        pairs.sort_by(|a, b| a.0.cmp(b.0));

        let mut key = String::new();
        for (index, (axis, label)) in pairs.iter().enumerate() {
            if index > 0 {
                key.push('&');
            }
            push_escaped(&mut key, axis);
            key.push('=');
            push_escaped(&mut key, label);
        }
        key
    }
}

impl<K, V> FromIterator<(K, V)> for VariantProps
where
    K: Into<String>,
    V: Into<VariantValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |props, (axis, value)| props.set(axis, value))
    }
}

/// Fill omitted axes from the defaults.
///
/// Provided values win; values marked as not provided never erase a
/// default.
pub fn resolve_selections(
    defaults: &IndexMap<String, VariantValue>,
    props: &VariantProps,
) -> Selections {
    let mut resolved = defaults.clone();
    for (axis, value) in props.defined() {
        resolved.insert(axis.to_string(), value.clone());
    }
    resolved
}

fn push_escaped(key: &mut String, part: &str) {
    for ch in part.chars() {
        if matches!(ch, '%' | '&' | '=') {
            key.push_str(&format!("%{:02X}", ch as u32));
        } else {
            key.push(ch);
        }
    }
}
