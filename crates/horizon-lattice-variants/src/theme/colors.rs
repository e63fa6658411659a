//! Color input and light/dark color schemes.

use serde_json::Value;

use super::tokens::{ColorMap, merge_tables};
use crate::{Error, Result};

/// Which half of a color scheme is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SchemeKind {
    /// Light colors.
    #[default]
    Light,
    /// Dark colors.
    Dark,
}

impl SchemeKind {
    /// Whether this is the dark half.
    pub fn is_dark(self) -> bool {
        matches!(self, SchemeKind::Dark)
    }
}

/// User-supplied colors.
///
/// A flat map applies to both light and dark mode. A structured input
/// carries separate light and dark maps plus standalone entries shared by
/// both.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorInput {
    /// One color map for every mode.
    Flat(ColorMap),
    /// Separate light and dark maps.
    Structured {
        /// Light mode colors.
        light: ColorMap,
        /// Dark mode colors, if any.
        dark: Option<ColorMap>,
        /// Entries merged into both light and dark, winning on clashes.
        standalone: ColorMap,
    },
}

impl ColorInput {
    /// Create a flat color input.
    pub fn flat<I, K, V>(colors: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        ColorInput::Flat(collect_colors(colors))
    }

    /// Create a structured color input from light and optional dark maps.
    pub fn structured(light: ColorMap, dark: Option<ColorMap>) -> Self {
        ColorInput::Structured {
            light,
            dark,
            standalone: ColorMap::new(),
        }
    }

    /// Add a standalone color shared by light and dark.
    ///
    /// A flat input simply gains the entry.
    pub fn standalone(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        match &mut self {
            ColorInput::Flat(colors) => {
                colors.insert(name.into(), value.into());
            }
            ColorInput::Structured { standalone, .. } => {
                standalone.insert(name.into(), value.into());
            }
        }
        self
    }

    /// The colors used for the resolved theme's flattened `colors` field.
    ///
    /// Light colors with standalone entries applied, or the flat map.
    pub fn default_colors(&self) -> ColorMap {
        match self {
            ColorInput::Flat(colors) => colors.clone(),
            ColorInput::Structured {
                light, standalone, ..
            } => merge_tables(light, standalone),
        }
    }

    /// Build the light/dark color scheme for this input.
    pub fn scheme(&self) -> ColorScheme {
        match self {
            ColorInput::Flat(colors) => ColorScheme {
                light: colors.clone(),
                dark: Some(colors.clone()),
            },
            ColorInput::Structured {
                light,
                dark,
                standalone,
            } => ColorScheme {
                light: merge_tables(light, standalone),
                dark: dark.as_ref().map(|dark| merge_tables(dark, standalone)),
            },
        }
    }

    /// Check that light and dark maps expose the same keys.
    ///
    /// Flat inputs and structured inputs without a dark map always pass.
    pub fn check_parity(&self) -> Result<()> {
        let ColorInput::Structured {
            light,
            dark: Some(dark),
            ..
        } = self
        else {
            return Ok(());
        };

        let missing_in_dark: Vec<String> = light
            .keys()
            .filter(|key| !dark.contains_key(*key))
            .cloned()
            .collect();
        let missing_in_light: Vec<String> = dark
            .keys()
            .filter(|key| !light.contains_key(*key))
            .cloned()
            .collect();

        if missing_in_dark.is_empty() && missing_in_light.is_empty() {
            Ok(())
        } else {
            Err(Error::ColorKeyMismatch {
                missing_in_light,
                missing_in_dark,
            })
        }
    }

    /// Read a color input from a JSON value.
    ///
    /// An object whose `light` entry is itself an object is structured;
    /// any other object is flat.
    pub fn from_json(value: &Value) -> Result<Self> {
        let Value::Object(entries) = value else {
            return Err(Error::invalid_theme("colors", "expected an object"));
        };

        if !matches!(entries.get("light"), Some(Value::Object(_))) {
            let mut colors = ColorMap::new();
            for (name, value) in entries {
                colors.insert(name.clone(), color_string(name, value)?);
            }
            return Ok(ColorInput::Flat(colors));
        }

        let mut light = ColorMap::new();
        let mut dark = None;
        let mut standalone = ColorMap::new();
        for (name, value) in entries {
            match (name.as_str(), value) {
                ("light", Value::Object(map)) => light = object_colors("light", map)?,
                ("dark", Value::Object(map)) => dark = Some(object_colors("dark", map)?),
                ("dark", Value::Null) => {}
                _ => {
                    standalone.insert(name.clone(), color_string(name, value)?);
                }
            }
        }

        Ok(ColorInput::Structured {
            light,
            dark,
            standalone,
        })
    }
}

/// The light/dark pair of color tables derived from theme input.
///
/// Consumed read-only by the mode layer to pick the active colors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorScheme {
    /// Light mode colors.
    pub light: ColorMap,
    /// Dark mode colors, if the theme defines them.
    pub dark: Option<ColorMap>,
}

impl ColorScheme {
    /// Whether a separate dark map exists.
    pub fn has_dark(&self) -> bool {
        self.dark.is_some()
    }

    /// The colors for a scheme half; dark falls back to light when absent.
    pub fn colors_for(&self, kind: SchemeKind) -> &ColorMap {
        match (kind, &self.dark) {
            (SchemeKind::Dark, Some(dark)) => dark,
            _ => &self.light,
        }
    }
}

fn collect_colors<I, K, V>(colors: I) -> ColorMap
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    colors
        .into_iter()
        .map(|(name, value)| (name.into(), value.into()))
        .collect()
}

fn object_colors(prefix: &str, map: &serde_json::Map<String, Value>) -> Result<ColorMap> {
    let mut colors = ColorMap::new();
    for (name, value) in map {
        colors.insert(name.clone(), color_string(&format!("{prefix}.{name}"), value)?);
    }
    Ok(colors)
}

fn color_string(name: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(color) => Ok(color.clone()),
        other => Err(Error::invalid_theme(
            format!("colors.{name}"),
            format!("expected a color string, found {other}"),
        )),
    }
}
