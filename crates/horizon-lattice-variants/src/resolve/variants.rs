//! Variant resolution: base, axes, then compounds.

use super::Selections;
use crate::config::Config;
use crate::style::{SlotStyles, StyleMap};

/// Compute the style of one slot.
///
/// Layers are applied in order, each overwriting overlapping properties:
/// 1. The slot's base style
/// 2. The selected value of each axis, in variant-table order
/// 3. Every matching compound variant, in declaration order
///
/// Axes or labels the configuration doesn't declare contribute nothing.
pub fn compute_slot_style(slot: &str, config: &Config, selections: &Selections) -> StyleMap {
    let mut style = config.base.get(slot).cloned().unwrap_or_default();

    for (axis, values) in &config.variants {
        let Some(selected) = selections.get(axis) else {
            continue;
        };
        if let Some(layer) = values
            .get(&*selected.label())
            .and_then(|slots| slots.get(slot))
        {
            style.merge(layer);
        }
    }

    for compound in &config.compound_variants {
        if !compound.matches(selections) {
            continue;
        }
        if let Some(layer) = compound.css.get(slot) {
            style.merge(layer);
        }
    }

    style
}

/// Compute the style of every declared slot, in declaration order.
pub fn compute_styles(config: &Config, selections: &Selections) -> SlotStyles {
    config
        .slots
        .iter()
        .map(|slot| (slot.as_str(), compute_slot_style(slot, config, selections)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CompoundVariant;
    use crate::types::{StyleValue, VariantValue};

    fn selections(pairs: &[(&str, VariantValue)]) -> Selections {
        pairs
            .iter()
            .map(|(axis, value)| ((*axis).to_string(), value.clone()))
            .collect()
    }

    fn layer(property: &str, value: i32) -> SlotStyles {
        SlotStyles::new().with("root", StyleMap::new().with(property, value))
    }

    #[test]
    fn base_only() {
        let config = Config::builder(["root"])
            .base("root", StyleMap::new().with("padding", 16))
            .build();
        let style = compute_slot_style("root", &config, &Selections::new());
        assert_eq!(style.get("padding"), Some(&StyleValue::from(16)));
    }

    #[test]
    fn precedence_compound_over_axis_over_base() {
        let config = Config::builder(["root"])
            .base("root", StyleMap::new().with("color", 0).with("margin", 0))
            .variant("tone", "info", layer("color", 1))
            .compound(
                CompoundVariant::new()
                    .when("tone", "info")
                    .css("root", StyleMap::new().with("color", 2)),
            )
            .build();

        let style = compute_slot_style(
            "root",
            &config,
            &selections(&[("tone", VariantValue::from("info"))]),
        );
        assert_eq!(style.get("color"), Some(&StyleValue::from(2)));
        assert_eq!(style.get("margin"), Some(&StyleValue::from(0)));
    }

    #[test]
    fn later_axis_wins() {
        let config = Config::builder(["root"])
            .variant("size", "lg", layer("padding", 24))
            .variant("dense", true, layer("padding", 4))
            .build();

        let style = compute_slot_style(
            "root",
            &config,
            &selections(&[
                ("dense", VariantValue::from(true)),
                ("size", VariantValue::from("lg")),
            ]),
        );
        assert_eq!(style.get("padding"), Some(&StyleValue::from(4)));
    }

    #[test]
    fn matching_compounds_apply_in_order() {
        let config = Config::builder(["root"])
            .compound(CompoundVariant::new().css("root", StyleMap::new().with("a", 1).with("b", 1)))
            .compound(
                CompoundVariant::new()
                    .when("size", "lg")
                    .css("root", StyleMap::new().with("b", 2)),
            )
            .build();

        let style = compute_slot_style(
            "root",
            &config,
            &selections(&[("size", VariantValue::from("lg"))]),
        );
        assert_eq!(style.get("a"), Some(&StyleValue::from(1)));
        assert_eq!(style.get("b"), Some(&StyleValue::from(2)));
    }

    #[test]
    fn unknown_axis_and_label_are_ignored() {
        let config = Config::builder(["root"])
            .base("root", StyleMap::new().with("padding", 16))
            .variant("size", "sm", layer("padding", 8))
            .build();

        let style = compute_slot_style(
            "root",
            &config,
            &selections(&[
                ("size", VariantValue::from("xxl")),
                ("shape", VariantValue::from("round")),
            ]),
        );
        assert_eq!(style.get("padding"), Some(&StyleValue::from(16)));
    }

    #[test]
    fn missing_base_starts_empty() {
        let config = Config::builder(["root", "label"])
            .base("root", StyleMap::new().with("padding", 16))
            .build();
        let styles = compute_styles(&config, &Selections::new());

        assert_eq!(styles.slot_names().collect::<Vec<_>>(), ["root", "label"]);
        assert!(styles["label"].is_empty());
    }

    #[test]
    fn numeric_selection_matches_label() {
        let config = Config::builder(["root"])
            .variant("columns", 2, layer("gap", 8))
            .build();
        let style = compute_slot_style(
            "root",
            &config,
            &selections(&[("columns", VariantValue::from(2))]),
        );
        assert_eq!(style.get("gap"), Some(&StyleValue::from(8)));
    }

    #[test]
    fn negative_zero_selects_zero_label() {
        let config = Config::builder(["root"])
            .variant("offset", "0", layer("margin", 0))
            .build();
        let style = compute_slot_style(
            "root",
            &config,
            &selections(&[("offset", VariantValue::from(-0.0))]),
        );
        assert_eq!(style.get("margin"), Some(&StyleValue::from(0)));
    }
}
