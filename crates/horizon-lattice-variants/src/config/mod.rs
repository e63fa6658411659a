//! Variant configurations.
//!
//! A [`Config`] declares the slots of a component, its base styles, its
//! variant axes, default selections, and compound overrides. Configurations
//! can be static or produced by a theme factory ([`ConfigSource`]).

mod builder;
mod source;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::style::SlotStyles;
use crate::types::VariantValue;
use crate::{Error, Result};

pub use builder::ConfigBuilder;
pub use source::{ConfigFactory, ConfigHelper, ConfigSource};

/// Variant table: axis name → value label → per-slot styles.
pub type Variants = IndexMap<String, IndexMap<String, SlotStyles>>;

/// A declarative style configuration for one component.
///
/// Every section except `slots` is optional and defaults to empty.
///
/// # Example
///
/// ```
/// use horizon_lattice_variants::prelude::*;
///
/// let config = Config::from_json_str(r#"{
///     "slots": ["root"],
///     "base": { "root": { "padding": 16 } },
///     "variants": { "size": { "sm": { "root": { "padding": 8 } } } },
///     "defaultVariants": { "size": "sm" }
/// }"#).unwrap();
///
/// assert_eq!(config.slots, ["root"]);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Slot names in declaration order.
    pub slots: Vec<String>,
    /// Styles applied unconditionally.
    #[serde(default)]
    pub base: SlotStyles,
    /// Variant axes.
    #[serde(default)]
    pub variants: Variants,
    /// Selections used for axes the caller omits.
    #[serde(default)]
    pub default_variants: IndexMap<String, VariantValue>,
    /// Overrides applied when several selections co-occur.
    #[serde(default)]
    pub compound_variants: Vec<CompoundVariant>,
}

impl Config {
    /// Start building a configuration with the given slots.
    pub fn builder<I, S>(slots: I) -> ConfigBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ConfigBuilder::new(slots)
    }

    /// Parse a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check that the slot list is non-empty and free of duplicates.
    pub fn validate(&self) -> Result<()> {
        if self.slots.is_empty() {
            return Err(Error::EmptySlots);
        }
        for (index, slot) in self.slots.iter().enumerate() {
            if self.slots[..index].contains(slot) {
                return Err(Error::duplicate_slot(slot.as_str()));
            }
        }
        Ok(())
    }

    /// Get the value table of one variant axis.
    pub fn axis(&self, axis: &str) -> Option<&IndexMap<String, SlotStyles>> {
        self.variants.get(axis)
    }
}

/// A style override gated on several variant selections.
///
/// In JSON the conditions are the object's keys other than `css`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompoundVariant {
    /// Axis → value conditions, all of which must match.
    #[serde(flatten)]
    pub conditions: IndexMap<String, VariantValue>,
    /// Styles applied when every condition matches.
    #[serde(default)]
    pub css: SlotStyles,
}

impl CompoundVariant {
    /// Create a compound variant with no conditions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an axis condition.
    pub fn when(mut self, axis: impl Into<String>, value: impl Into<VariantValue>) -> Self {
        self.conditions.insert(axis.into(), value.into());
        self
    }

    /// Set the style of one slot.
    pub fn css(mut self, slot: impl Into<String>, style: crate::style::StyleMap) -> Self {
        self.css.insert(slot, style);
        self
    }

    /// Check whether every condition matches the resolved selections.
    ///
    /// A compound variant without conditions always matches.
    pub fn matches(&self, selections: &IndexMap<String, VariantValue>) -> bool {
        self.conditions.iter().all(|(axis, expected)| {
            selections
                .get(axis)
                .is_some_and(|selected| selected.matches(expected))
        })
    }
}
