//! Error types for the variant styling system.

use std::path::PathBuf;

/// Result type alias for variant styling operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the variant styling system.
///
/// Style resolution itself never fails; these errors come from loading
/// inputs, validating declarations, and the mode scope boundary.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error.
    #[error("Failed to read theme file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The theme input has an unexpected shape.
    #[error("Invalid theme entry '{key}': {message}")]
    InvalidTheme { key: String, message: String },

    /// A configuration declared no slots.
    #[error("Configuration must declare at least one slot")]
    EmptySlots,

    /// A configuration declared the same slot twice.
    #[error("Slot '{slot}' is declared more than once")]
    DuplicateSlot { slot: String },

    /// Light and dark color maps expose different keys.
    #[error(
        "Light and dark colors differ: missing in light [{}], missing in dark [{}]",
        missing_in_light.join(", "),
        missing_in_dark.join(", ")
    )]
    ColorKeyMismatch {
        missing_in_light: Vec<String>,
        missing_in_dark: Vec<String>,
    },

    /// Mode state was requested with no enclosing mode scope.
    #[error("No color mode scope is active. Wrap the caller in ModeScope::enter() first")]
    NoModeScope,

    /// A color mode string could not be parsed.
    #[error("Invalid color mode '{0}': expected 'light', 'dark' or 'system'")]
    InvalidMode(String),
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a theme shape error.
    pub fn invalid_theme(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidTheme {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create a duplicate slot error.
    pub fn duplicate_slot(slot: impl Into<String>) -> Self {
        Self::DuplicateSlot { slot: slot.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_mismatch_lists_keys() {
        let err = Error::ColorKeyMismatch {
            missing_in_light: vec!["accent".into()],
            missing_in_dark: vec!["muted".into(), "border".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("missing in light [accent]"));
        assert!(msg.contains("missing in dark [muted, border]"));
    }

    #[test]
    fn no_scope_message_is_descriptive() {
        let msg = Error::NoModeScope.to_string();
        assert!(msg.contains("ModeScope::enter"));
    }
}
