//! Shorthand utility tables.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::style::StyleMap;
use crate::types::StyleValue;

/// A shorthand expansion: value in, canonical properties out.
pub type MacroFn = Arc<dyn Fn(&StyleValue) -> StyleMap + Send + Sync>;

/// A table of named shorthand utilities.
///
/// # Example
///
/// ```
/// use horizon_lattice_variants::prelude::*;
///
/// let macros = Macros::new().add("px", |v| {
///     StyleMap::new().with("paddingLeft", v).with("paddingRight", v)
/// });
///
/// let expanded = macros.apply("px", &StyleValue::from(16)).unwrap();
/// assert_eq!(expanded.len(), 2);
/// ```
#[derive(Clone, Default)]
pub struct Macros {
    table: IndexMap<String, MacroFn>,
}

impl Macros {
    /// Create an empty macro table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a macro, returning the updated table for chaining.
    ///
    /// Registering a name twice replaces the earlier macro.
    pub fn add<F>(mut self, name: impl Into<String>, expand: F) -> Self
    where
        F: Fn(&StyleValue) -> StyleMap + Send + Sync + 'static,
    {
        self.table.insert(name.into(), Arc::new(expand));
        self
    }

    /// Register a macro that copies its value to each listed property.
    pub fn alias<I, S>(self, name: impl Into<String>, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let properties: Vec<String> = properties.into_iter().map(Into::into).collect();
        self.add(name, move |value| {
            properties
                .iter()
                .map(|property| (property.as_str(), value.clone()))
                .collect()
        })
    }

    /// Check if a macro is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    /// Expand one macro, or `None` if no macro has this name.
    pub fn apply(&self, name: &str, value: &StyleValue) -> Option<StyleMap> {
        self.table.get(name).map(|expand| expand(value))
    }

    /// Registered macro names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.table.keys().map(String::as_str)
    }

    /// Number of registered macros.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Check if no macros are registered.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl fmt::Debug for Macros {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Macros")
            .field("names", &self.table.keys().collect::<Vec<_>>())
            .finish()
    }
}
