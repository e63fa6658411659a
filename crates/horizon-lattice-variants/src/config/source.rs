//! Static and theme-aware configuration sources.

use std::fmt;
use std::sync::Arc;

use super::{Config, ConfigBuilder};
use crate::expand::Macros;
use crate::style::StyleMap;
use crate::theme::ResolvedTheme;

/// A function producing a configuration from a resolved theme.
pub type ConfigFactory = Arc<dyn Fn(&ConfigHelper, &ResolvedTheme) -> Config + Send + Sync>;

/// Helper handed to configuration factories.
#[derive(Debug, Clone)]
pub struct ConfigHelper {
    macros: Arc<Macros>,
}

impl ConfigHelper {
    pub(crate) fn new(macros: Arc<Macros>) -> Self {
        Self { macros }
    }

    /// Start building a configuration with the given slots.
    pub fn config<I, S>(&self, slots: I) -> ConfigBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ConfigBuilder::new(slots)
    }

    /// Start an empty style map.
    pub fn style(&self) -> StyleMap {
        StyleMap::new()
    }

    /// Check if a shorthand utility is available.
    pub fn has_macro(&self, name: &str) -> bool {
        self.macros.contains(name)
    }
}

/// Where a declaration's configuration comes from.
///
/// Factories are evaluated against the engine theme when declared, and
/// again whenever a call supplies a color override.
#[derive(Clone)]
pub enum ConfigSource {
    /// A fixed configuration.
    Static(Config),
    /// A configuration derived from the theme.
    Factory(ConfigFactory),
}

impl ConfigSource {
    /// Wrap a factory function.
    pub fn factory<F>(factory: F) -> Self
    where
        F: Fn(&ConfigHelper, &ResolvedTheme) -> Config + Send + Sync + 'static,
    {
        ConfigSource::Factory(Arc::new(factory))
    }

    /// Whether this source depends on the theme.
    pub fn is_factory(&self) -> bool {
        matches!(self, ConfigSource::Factory(_))
    }

    /// Produce the configuration for a theme.
    pub fn evaluate(&self, helper: &ConfigHelper, theme: &ResolvedTheme) -> Config {
        match self {
            ConfigSource::Static(config) => config.clone(),
            ConfigSource::Factory(factory) => factory(helper, theme),
        }
    }
}

impl From<Config> for ConfigSource {
    fn from(config: Config) -> Self {
        ConfigSource::Static(config)
    }
}

impl From<ConfigBuilder> for ConfigSource {
    fn from(builder: ConfigBuilder) -> Self {
        ConfigSource::Static(builder.build())
    }
}

impl fmt::Debug for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Static(config) => f.debug_tuple("Static").field(config).finish(),
            ConfigSource::Factory(_) => f.write_str("Factory(..)"),
        }
    }
}
