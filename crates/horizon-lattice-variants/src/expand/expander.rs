//! Expansion of shorthand keys into canonical properties.

use super::Macros;
use crate::config::{CompoundVariant, Config};
use crate::style::{SlotStyles, StyleMap};

/// Expand shorthand keys in one style map.
///
/// Keys naming a macro are replaced by the macro's output, assigned at the
/// key's position; other keys are copied. Macro output is not expanded
/// again.
pub fn expand_style(style: &StyleMap, macros: &Macros) -> StyleMap {
    if macros.is_empty() || !style.keys().any(|key| macros.contains(key)) {
        return style.clone();
    }

    let mut expanded = StyleMap::new();
    for (key, value) in style {
        match macros.apply(key, value) {
            Some(properties) => expanded.merge(&properties),
            None => expanded.insert(key.as_str(), value.clone()),
        }
    }
    expanded
}

/// Expand every slot style of a table.
pub fn expand_slots(styles: &SlotStyles, macros: &Macros) -> SlotStyles {
    styles.map_styles(|style| expand_style(style, macros))
}

/// Expand base styles, every variant value, and every compound override.
pub fn expand_config(config: &Config, macros: &Macros) -> Config {
    if macros.is_empty() {
        return config.clone();
    }

    Config {
        slots: config.slots.clone(),
        base: expand_slots(&config.base, macros),
        variants: config
            .variants
            .iter()
            .map(|(axis, values)| {
                let values = values
                    .iter()
                    .map(|(label, styles)| (label.clone(), expand_slots(styles, macros)))
                    .collect();
                (axis.clone(), values)
            })
            .collect(),
        default_variants: config.default_variants.clone(),
        compound_variants: config
            .compound_variants
            .iter()
            .map(|compound| CompoundVariant {
                conditions: compound.conditions.clone(),
                css: expand_slots(&compound.css, macros),
            })
            .collect(),
    }
}
