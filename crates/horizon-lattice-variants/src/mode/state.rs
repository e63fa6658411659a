//! Color mode state and persistence.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};

use super::SystemPreference;
use crate::logging::targets;
use crate::theme::{ColorMap, ColorScheme, SchemeKind};
use crate::{Error, Result};

/// The user's color mode choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Always light.
    Light,
    /// Always dark.
    Dark,
    /// Follow the system preference.
    #[default]
    System,
}

impl ColorMode {
    /// The lowercase name of the mode.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
            ColorMode::System => "system",
        }
    }

    /// Resolve to a scheme half given the system preference.
    pub fn resolve(self, system: SchemeKind) -> SchemeKind {
        match self {
            ColorMode::Light => SchemeKind::Light,
            ColorMode::Dark => SchemeKind::Dark,
            ColorMode::System => system,
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            "system" => Ok(ColorMode::System),
            _ => Err(Error::InvalidMode(s.to_string())),
        }
    }
}

/// Persistence for the chosen color mode.
pub trait ModeStore: Send + Sync {
    /// Load the stored mode, if any.
    fn load(&self) -> Option<ColorMode>;

    /// Store a mode.
    fn save(&self, mode: ColorMode) -> Result<()>;
}

/// A mode store that keeps the mode in memory.
#[derive(Debug, Default)]
pub struct MemoryModeStore {
    mode: Mutex<Option<ColorMode>>,
}

impl MemoryModeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding a mode.
    pub fn with_mode(mode: ColorMode) -> Self {
        Self {
            mode: Mutex::new(Some(mode)),
        }
    }
}

impl ModeStore for MemoryModeStore {
    fn load(&self) -> Option<ColorMode> {
        *self.mode.lock()
    }

    fn save(&self, mode: ColorMode) -> Result<()> {
        *self.mode.lock() = Some(mode);
        Ok(())
    }
}

impl<S: ModeStore + ?Sized> ModeStore for Arc<S> {
    fn load(&self) -> Option<ColorMode> {
        (**self).load()
    }

    fn save(&self, mode: ColorMode) -> Result<()> {
        (**self).save(mode)
    }
}

/// The active color mode over a color scheme.
///
/// Reads the scheme but never changes it.
///
/// # Example
///
/// ```
/// use horizon_lattice_variants::prelude::*;
///
/// let engine = Engine::new(
///     ThemeInput::new().colors(ColorInput::structured(
///         [("bg".to_string(), "#fff".to_string())].into_iter().collect(),
///         Some([("bg".to_string(), "#000".to_string())].into_iter().collect()),
///     )),
///     Macros::new(),
/// );
///
/// let state = ModeState::new(engine.color_scheme().clone(), SystemPreference::fixed(SchemeKind::Light));
/// assert_eq!(state.active_colors()["bg"], "#fff");
///
/// state.set_mode(ColorMode::Dark).unwrap();
/// assert_eq!(state.active_colors()["bg"], "#000");
/// ```
pub struct ModeState {
    scheme: Arc<ColorScheme>,
    system: SystemPreference,
    store: Option<Box<dyn ModeStore>>,
    mode: RwLock<ColorMode>,
}

impl ModeState {
    /// Create a mode state starting in [`ColorMode::System`].
    pub fn new(scheme: Arc<ColorScheme>, system: SystemPreference) -> Self {
        Self {
            scheme,
            system,
            store: None,
            mode: RwLock::new(ColorMode::System),
        }
    }

    /// Create a mode state backed by a store.
    ///
    /// Starts in the stored mode, or [`ColorMode::System`] if none is stored.
    pub fn with_store(
        scheme: Arc<ColorScheme>,
        system: SystemPreference,
        store: impl ModeStore + 'static,
    ) -> Self {
        let initial = store.load().unwrap_or_default();
        tracing::debug!(target: targets::MODE, mode = %initial, "loaded color mode");

        Self {
            scheme,
            system,
            store: Some(Box::new(store)),
            mode: RwLock::new(initial),
        }
    }

    /// The chosen mode.
    pub fn mode(&self) -> ColorMode {
        *self.mode.read()
    }

    /// Choose a mode and persist it.
    ///
    /// The in-memory mode changes even if persisting fails.
    ///
    /// # Errors
    ///
    /// Returns the store's error if saving fails.
    pub fn set_mode(&self, mode: ColorMode) -> Result<()> {
        *self.mode.write() = mode;
        tracing::debug!(target: targets::MODE, mode = %mode, "color mode changed");

        match &self.store {
            Some(store) => store.save(mode),
            None => Ok(()),
        }
    }

    /// Switch to the opposite of the currently resolved scheme.
    ///
    /// Returns the new mode.
    pub fn toggle(&self) -> Result<ColorMode> {
        let next = if self.resolved().is_dark() {
            ColorMode::Light
        } else {
            ColorMode::Dark
        };
        self.set_mode(next)?;
        Ok(next)
    }

    /// The scheme half in effect.
    pub fn resolved(&self) -> SchemeKind {
        self.mode().resolve(self.system.current())
    }

    /// The colors of the scheme half in effect.
    pub fn active_colors(&self) -> &ColorMap {
        self.scheme.colors_for(self.resolved())
    }

    /// The color scheme.
    pub fn scheme(&self) -> &Arc<ColorScheme> {
        &self.scheme
    }
}

impl fmt::Debug for ModeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModeState")
            .field("mode", &self.mode())
            .field("resolved", &self.resolved())
            .field("persistent", &self.store.is_some())
            .finish()
    }
}
