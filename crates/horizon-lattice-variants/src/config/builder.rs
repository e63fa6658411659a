//! Fluent builder for variant configurations.

use super::{CompoundVariant, Config};
use crate::style::{SlotStyles, StyleMap};
use crate::types::VariantValue;

/// Builder for creating configurations with a fluent API.
///
/// # Example
///
/// ```
/// use horizon_lattice_variants::prelude::*;
///
/// let config = Config::builder(["root"])
///     .base("root", StyleMap::new().with("padding", 16))
///     .variant("size", "sm", SlotStyles::new().with("root", StyleMap::new().with("padding", 8)))
///     .variant("size", "lg", SlotStyles::new().with("root", StyleMap::new().with("padding", 24)))
///     .default_variant("size", "sm")
///     .build();
///
/// assert_eq!(config.variants["size"].len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a builder with the given slots.
    pub fn new<I, S>(slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            config: Config {
                slots: slots.into_iter().map(Into::into).collect(),
                ..Config::default()
            },
        }
    }

    /// Build the final configuration.
    pub fn build(self) -> Config {
        self.config
    }

    /// Set the base style of a slot.
    pub fn base(mut self, slot: impl Into<String>, style: StyleMap) -> Self {
        self.config.base.insert(slot, style);
        self
    }

    /// Add a value to a variant axis.
    ///
    /// The value is stored under its label, so `true` and `"true"` name the
    /// same entry.
    pub fn variant(
        mut self,
        axis: impl Into<String>,
        value: impl Into<VariantValue>,
        styles: SlotStyles,
    ) -> Self {
        let label = value.into().label().into_owned();
        self.config
            .variants
            .entry(axis.into())
            .or_default()
            .insert(label, styles);
        self
    }

    /// Set the default selection of an axis.
    pub fn default_variant(
        mut self,
        axis: impl Into<String>,
        value: impl Into<VariantValue>,
    ) -> Self {
        self.config
            .default_variants
            .insert(axis.into(), value.into());
        self
    }

    /// Append a compound variant.
    pub fn compound(mut self, compound: CompoundVariant) -> Self {
        self.config.compound_variants.push(compound);
        self
    }
}
