//! The styling engine: theme, utilities, and component declarations.

use std::sync::Arc;

use crate::Result;
use crate::cache::{CacheEpoch, StyleCache, StyleCacheKey};
use crate::config::{Config, ConfigHelper, ConfigSource};
use crate::expand::{Macros, expand_config};
use crate::logging::targets;
use crate::resolve::{VariantProps, compute_styles, resolve_selections};
use crate::style::SlotStyles;
use crate::theme::{ColorMap, ColorScheme, ResolvedTheme, ThemeDefaults, ThemeInput, merge_theme};

/// The main styling engine.
///
/// The engine owns the merged theme, the color scheme, and the shorthand
/// utilities. Components are declared with [`Engine::styled`], which
/// returns a [`Styled`] handle carrying its own result cache.
///
/// # Example
///
/// ```
/// use horizon_lattice_variants::prelude::*;
///
/// let engine = Engine::new(ThemeInput::new(), Macros::new());
/// let button = engine
///     .styled(
///         Config::builder(["root"])
///             .base("root", StyleMap::new().with("padding", 16))
///             .variant("size", "sm", SlotStyles::new().with("root", StyleMap::new().with("padding", 8)))
///             .variant("size", "lg", SlotStyles::new().with("root", StyleMap::new().with("padding", 24)))
///             .default_variant("size", "sm"),
///     )
///     .unwrap();
///
/// assert_eq!(button.compute_default()["root"].get("padding"), Some(&StyleValue::from(8)));
/// let large = button.compute(&VariantProps::new().set("size", "lg"));
/// assert_eq!(large["root"].get("padding"), Some(&StyleValue::from(24)));
/// ```
#[derive(Debug)]
pub struct Engine {
    /// Merged theme tokens.
    theme: Arc<ResolvedTheme>,
    /// Light/dark colors for the mode layer.
    scheme: Arc<ColorScheme>,
    /// Shorthand utilities.
    macros: Arc<Macros>,
    /// Shared by the caches of every declaration made by this engine.
    epoch: CacheEpoch,
}

impl Engine {
    /// Create an engine from a user theme over the built-in defaults.
    pub fn new(theme: ThemeInput, macros: Macros) -> Self {
        Self::with_defaults(ThemeDefaults::builtin(), &theme, macros)
    }

    /// Create an engine from a user theme over custom defaults.
    pub fn with_defaults(defaults: &ThemeDefaults, theme: &ThemeInput, macros: Macros) -> Self {
        let merged = merge_theme(defaults, theme);
        tracing::debug!(
            target: targets::ENGINE,
            macros = macros.len(),
            "engine created"
        );

        Self {
            theme: Arc::new(merged.theme),
            scheme: Arc::new(merged.scheme),
            macros: Arc::new(macros),
            epoch: CacheEpoch::new(),
        }
    }

    /// Get the resolved theme.
    pub fn theme(&self) -> &Arc<ResolvedTheme> {
        &self.theme
    }

    /// Get the color scheme.
    pub fn color_scheme(&self) -> &Arc<ColorScheme> {
        &self.scheme
    }

    /// Get the shorthand utilities.
    pub fn macros(&self) -> &Arc<Macros> {
        &self.macros
    }

    /// Get a helper for building configurations.
    pub fn helper(&self) -> ConfigHelper {
        ConfigHelper::new(Arc::clone(&self.macros))
    }

    /// Declare a component.
    ///
    /// Factories are evaluated against the engine theme here. The resulting
    /// configuration is expanded once and validated.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration declares no slots or repeats
    /// a slot.
    pub fn styled(&self, source: impl Into<ConfigSource>) -> Result<Styled> {
        let source = source.into();
        let helper = self.helper();
        let config = expand_config(&source.evaluate(&helper, &self.theme), &self.macros);
        config.validate()?;

        tracing::debug!(
            target: targets::ENGINE,
            slots = config.slots.len(),
            axes = config.variants.len(),
            compounds = config.compound_variants.len(),
            factory = source.is_factory(),
            "declared styled component"
        );

        Ok(Styled {
            inner: Arc::new(StyledInner {
                source,
                config,
                helper,
                theme: Arc::clone(&self.theme),
                macros: Arc::clone(&self.macros),
                cache: StyleCache::with_epoch(self.epoch.clone()),
            }),
        })
    }

    /// Declare a component from a theme factory.
    pub fn styled_with<F>(&self, factory: F) -> Result<Styled>
    where
        F: Fn(&ConfigHelper, &ResolvedTheme) -> Config + Send + Sync + 'static,
    {
        self.styled(ConfigSource::factory(factory))
    }

    /// Clear the selection-keyed cache of every declaration made by this
    /// engine.
    ///
    /// Results cached under color overrides are kept.
    pub fn clear_cache(&self) {
        let epoch = self.epoch.advance();
        tracing::debug!(target: targets::CACHE, epoch, "style caches cleared");
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(ThemeInput::default(), Macros::new())
    }
}

#[derive(Debug)]
struct StyledInner {
    source: ConfigSource,
    /// Expanded configuration for the engine theme.
    config: Config,
    helper: ConfigHelper,
    theme: Arc<ResolvedTheme>,
    macros: Arc<Macros>,
    cache: StyleCache,
}

/// A declared component: computes per-slot styles for variant selections.
///
/// Clones share the same configuration and cache.
#[derive(Debug, Clone)]
pub struct Styled {
    inner: Arc<StyledInner>,
}

impl Styled {
    /// Compute the styles for the given props.
    ///
    /// Results are cached: equal selections return the same `Arc`. A color
    /// override re-evaluates factory declarations against the overridden
    /// theme and is cached by the override's identity; static declarations
    /// ignore it.
    pub fn compute(&self, props: &VariantProps) -> Arc<SlotStyles> {
        let inner = &self.inner;
        let key = StyleCacheKey::new(props);

        match (props.colors(), &inner.source) {
            (Some(colors), ConfigSource::Factory(_)) => inner
                .cache
                .get_or_compute_override(colors, key, || self.compute_with_colors(colors, props)),
            _ => inner.cache.get_or_compute(key, || {
                let selections = resolve_selections(&inner.config.default_variants, props);
                compute_styles(&inner.config, &selections)
            }),
        }
    }

    /// Compute the styles with default selections only.
    pub fn compute_default(&self) -> Arc<SlotStyles> {
        self.compute(&VariantProps::new())
    }

    /// The expanded configuration for the engine theme.
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// The declared slots.
    pub fn slots(&self) -> &[String] {
        &self.inner.config.slots
    }

    /// Whether this declaration was made from a theme factory.
    pub fn is_theme_aware(&self) -> bool {
        self.inner.source.is_factory()
    }

    /// The result cache of this declaration.
    pub fn cache(&self) -> &StyleCache {
        &self.inner.cache
    }

    /// Turn this declaration into a plain function.
    pub fn into_fn(self) -> impl Fn(&VariantProps) -> Arc<SlotStyles> + Send + Sync {
        move |props| self.compute(props)
    }

    fn compute_with_colors(&self, colors: &ColorMap, props: &VariantProps) -> SlotStyles {
        let inner = &self.inner;
        let theme = inner.theme.with_colors(colors.clone());
        let config = expand_config(&inner.source.evaluate(&inner.helper, &theme), &inner.macros);
        if let Err(err) = config.validate() {
            tracing::warn!(
                target: targets::ENGINE,
                error = %err,
                "factory produced an invalid configuration for a color override"
            );
        }

        let selections = resolve_selections(&config.default_variants, props);
        compute_styles(&config, &selections)
    }
}
