//! Ordered style maps.

use std::ops::Index;

use indexmap::IndexMap;
use indexmap::map::{IntoIter, Iter};
use serde::{Deserialize, Serialize};

use crate::types::StyleValue;

/// An ordered mapping from property name to value.
///
/// Assigning an existing property overwrites its value in place, so a
/// property keeps the position of its first assignment.
///
/// # Example
///
/// ```
/// use horizon_lattice_variants::prelude::*;
///
/// let mut style = StyleMap::new().with("padding", 16).with("color", "#000");
/// style.merge(&StyleMap::new().with("padding", 8));
///
/// assert_eq!(style.get("padding"), Some(&StyleValue::from(8)));
/// assert_eq!(style.keys().collect::<Vec<_>>(), ["padding", "color"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap {
    properties: IndexMap<String, StyleValue>,
}

impl StyleMap {
    /// Create an empty style map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, returning the updated map for chaining.
    pub fn with(mut self, property: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.insert(property, value);
        self
    }

    /// Set a property.
    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<StyleValue>) {
        self.properties.insert(property.into(), value.into());
    }

    /// Get a property value.
    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.properties.get(property)
    }

    /// Check if a property is present.
    pub fn contains_key(&self, property: &str) -> bool {
        self.properties.contains_key(property)
    }

    /// Shallow-assign every property of `source` over this map.
    pub fn merge(&mut self, source: &StyleMap) {
        for (property, value) in &source.properties {
            self.properties.insert(property.clone(), value.clone());
        }
    }

    /// Iterate over properties in order.
    pub fn iter(&self) -> Iter<'_, String, StyleValue> {
        self.properties.iter()
    }

    /// Iterate over property names in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Check if the map has no properties.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for StyleMap
where
    K: Into<String>,
    V: Into<StyleValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (property, value) in iter {
            map.insert(property, value);
        }
        map
    }
}

impl<'a> IntoIterator for &'a StyleMap {
    type Item = (&'a String, &'a StyleValue);
    type IntoIter = Iter<'a, String, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}

impl IntoIterator for StyleMap {
    type Item = (String, StyleValue);
    type IntoIter = IntoIter<String, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.into_iter()
    }
}

/// Style maps keyed by slot name.
///
/// Used for base styles, for each variant value, for compound overrides,
/// and for computed results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotStyles {
    slots: IndexMap<String, StyleMap>,
}

impl SlotStyles {
    /// Create an empty slot table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the style of a slot, returning the updated table for chaining.
    pub fn with(mut self, slot: impl Into<String>, style: StyleMap) -> Self {
        self.insert(slot, style);
        self
    }

    /// Set the style of a slot.
    pub fn insert(&mut self, slot: impl Into<String>, style: StyleMap) {
        self.slots.insert(slot.into(), style);
    }

    /// Get the style of a slot.
    pub fn get(&self, slot: &str) -> Option<&StyleMap> {
        self.slots.get(slot)
    }

    /// Iterate over slots in order.
    pub fn iter(&self) -> Iter<'_, String, StyleMap> {
        self.slots.iter()
    }

    /// Iterate over slot names in order.
    pub fn slot_names(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    /// Apply `f` to every slot style, keeping slot order.
    pub fn map_styles(&self, mut f: impl FnMut(&StyleMap) -> StyleMap) -> SlotStyles {
        SlotStyles {
            slots: self
                .slots
                .iter()
                .map(|(slot, style)| (slot.clone(), f(style)))
                .collect(),
        }
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the table has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Index<&str> for SlotStyles {
    type Output = StyleMap;

    /// Get the style of a slot.
    ///
    /// # Panics
    ///
    /// Panics if the slot is not present.
    fn index(&self, slot: &str) -> &StyleMap {
        match self.slots.get(slot) {
            Some(style) => style,
            None => panic!("no style for slot '{slot}'"),
        }
    }
}

impl<K: Into<String>> FromIterator<(K, StyleMap)> for SlotStyles {
    fn from_iter<I: IntoIterator<Item = (K, StyleMap)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (slot, style) in iter {
            table.insert(slot, style);
        }
        table
    }
}

impl<'a> IntoIterator for &'a SlotStyles {
    type Item = (&'a String, &'a StyleMap);
    type IntoIter = Iter<'a, String, StyleMap>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}
