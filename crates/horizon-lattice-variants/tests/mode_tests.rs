//! Color mode layer tests.

use std::sync::Arc;

use horizon_lattice_variants::prelude::*;
use serde_json::json;

fn themed_engine() -> Engine {
    let input = ThemeInput::from_value(&json!({
        "colors": {
            "light": { "bg": "#ffffff", "fg": "#111111" },
            "dark": { "bg": "#000000", "fg": "#eeeeee" }
        }
    }))
    .unwrap();
    Engine::new(input, Macros::new())
}

fn background() -> String {
    ModeScope::current().active_colors()["bg"].clone()
}

#[test]
fn test_scope_drives_active_colors() {
    let engine = themed_engine();
    let state = Arc::new(ModeState::new(
        Arc::clone(engine.color_scheme()),
        SystemPreference::fixed(SchemeKind::Light),
    ));

    let _guard = ModeScope::enter(Arc::clone(&state));
    assert_eq!(background(), "#ffffff");

    state.toggle().unwrap();
    assert_eq!(background(), "#000000");
}

#[test]
fn test_system_mode_follows_preference() {
    let engine = themed_engine();
    let state = ModeState::new(
        Arc::clone(engine.color_scheme()),
        SystemPreference::fixed(SchemeKind::Dark),
    );

    assert_eq!(state.mode(), ColorMode::System);
    assert_eq!(state.active_colors()["fg"], "#eeeeee");

    state.set_mode(ColorMode::Light).unwrap();
    assert_eq!(state.active_colors()["fg"], "#111111");
}

#[test]
fn test_mode_persists_across_states() {
    let engine = themed_engine();
    let store = Arc::new(MemoryModeStore::new());
    let system = SystemPreference::fixed(SchemeKind::Light);

    let first = ModeState::with_store(
        Arc::clone(engine.color_scheme()),
        system.clone(),
        Arc::clone(&store),
    );
    first.set_mode(ColorMode::Dark).unwrap();

    let second = ModeState::with_store(
        Arc::clone(engine.color_scheme()),
        system,
        Arc::clone(&store),
    );
    assert_eq!(second.mode(), ColorMode::Dark);
    assert_eq!(second.resolved(), SchemeKind::Dark);
}

#[test]
fn test_active_colors_feed_color_overrides() {
    let engine = themed_engine();
    let state = ModeState::new(
        Arc::clone(engine.color_scheme()),
        SystemPreference::fixed(SchemeKind::Dark),
    );
    let card = engine
        .styled_with(|helper, theme| {
            helper
                .config(["root"])
                .base(
                    "root",
                    helper
                        .style()
                        .with("background", theme.color("bg").unwrap_or("none")),
                )
                .build()
        })
        .unwrap();

    let dark = Arc::new(state.active_colors().clone());
    let styles = card.compute(&VariantProps::new().with_colors(dark));
    assert_eq!(styles["root"].get("background"), Some(&StyleValue::from("#000000")));
    assert_eq!(
        card.compute_default()["root"].get("background"),
        Some(&StyleValue::from("#ffffff"))
    );
}

#[test]
fn test_outside_scope_is_an_error() {
    assert!(matches!(ModeScope::try_current(), Err(Error::NoModeScope)));
}

#[test]
#[should_panic(expected = "No color mode scope is active")]
fn test_current_outside_scope_panics() {
    background();
}
