//! The system color scheme signal.

use std::fmt;
use std::sync::Arc;

use crate::theme::SchemeKind;

/// Where the [`System`](super::ColorMode::System) mode reads its scheme from.
#[derive(Clone)]
pub struct SystemPreference {
    source: Arc<dyn Fn() -> SchemeKind + Send + Sync>,
}

impl SystemPreference {
    /// Always report the same scheme.
    pub fn fixed(kind: SchemeKind) -> Self {
        Self::from_fn(move || kind)
    }

    /// Ask a function every time the scheme is needed.
    pub fn from_fn<F>(source: F) -> Self
    where
        F: Fn() -> SchemeKind + Send + Sync + 'static,
    {
        Self {
            source: Arc::new(source),
        }
    }

    /// Follow the operating system.
    ///
    /// Requires the `system-theme` feature; without it, light is reported.
    pub fn detect() -> Self {
        Self::from_fn(detect_os_scheme)
    }

    /// The current system scheme.
    pub fn current(&self) -> SchemeKind {
        (self.source)()
    }
}

impl Default for SystemPreference {
    fn default() -> Self {
        Self::detect()
    }
}

impl fmt::Debug for SystemPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemPreference")
            .field("current", &self.current())
            .finish()
    }
}

#[cfg(feature = "system-theme")]
fn detect_os_scheme() -> SchemeKind {
    match dark_light::detect() {
        dark_light::Mode::Dark => SchemeKind::Dark,
        dark_light::Mode::Light | dark_light::Mode::Default => SchemeKind::Light,
    }
}

#[cfg(not(feature = "system-theme"))]
fn detect_os_scheme() -> SchemeKind {
    SchemeKind::Light
}
