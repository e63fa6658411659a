//! Theme merging and loading tests.

use std::fmt::{self, Write as _};
use std::io::Write;
use std::sync::Arc;

use horizon_lattice_variants::logging::targets;
use horizon_lattice_variants::prelude::*;
use horizon_lattice_variants::theme::merge_theme;
use parking_lot::Mutex;
use serde_json::json;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Records warnings as `target: field=value ...` lines.
#[derive(Clone, Default)]
struct WarningLog(Arc<Mutex<Vec<String>>>);

impl WarningLog {
    fn lines(&self) -> Vec<String> {
        self.0.lock().clone()
    }
}

struct FieldText(String);

impl Visit for FieldText {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        let _ = write!(self.0, " {}={:?}", field.name(), value);
    }
}

impl<S: Subscriber> Layer<S> for WarningLog {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() != Level::WARN {
            return;
        }
        let mut text = FieldText(format!("{}:", event.metadata().target()));
        event.record(&mut text);
        self.0.lock().push(text.0);
    }
}

fn warnings_during(f: impl FnOnce()) -> Vec<String> {
    let log = WarningLog::default();
    let subscriber = tracing_subscriber::registry().with(log.clone());
    tracing::subscriber::with_default(subscriber, f);
    log.lines()
}

#[test]
fn test_flat_primary_is_shared_by_both_modes() {
    let engine = Engine::new(
        ThemeInput::new().colors(ColorInput::flat([("primary", "#000")])),
        Macros::new(),
    );

    let scheme = engine.color_scheme();
    let dark = scheme.dark.as_ref().expect("flat input yields a dark map");
    assert_eq!(scheme.light["primary"], "#000");
    assert_eq!(dark["primary"], "#000");
    assert_eq!(engine.theme().color("primary"), Some("#000"));
}

#[test]
fn test_user_tokens_override_defaults() {
    let engine = Engine::new(
        ThemeInput::new().token(TokenCategory::Spacing, "md", 12),
        Macros::new(),
    );

    let theme = engine.theme();
    assert_eq!(theme.spacing("md"), Some(&StyleValue::from(12)));
    assert_eq!(theme.spacing("sm"), Some(&StyleValue::from(8)));
    assert_eq!(theme.color("primary"), Some("#007AFF"));
}

#[test]
fn test_every_category_is_present() {
    let merged = merge_theme(&ThemeDefaults::empty(), &ThemeInput::new());
    for category in TokenCategory::ALL {
        let table = merged.theme.tokens(category);
        assert!(table.is_some(), "missing category {category}");
        assert!(table.unwrap().is_empty());
    }
    assert!(merged.theme.colors.is_empty());
}

#[test]
fn test_structured_colors() {
    let input = ThemeInput::from_value(&json!({
        "colors": {
            "light": { "bg": "#fff", "fg": "#111" },
            "dark": { "bg": "#000", "fg": "#eee" },
            "brand": "#ff0066"
        }
    }))
    .unwrap();
    let engine = Engine::with_defaults(&ThemeDefaults::empty(), &input, Macros::new());

    let scheme = engine.color_scheme();
    assert_eq!(scheme.light["bg"], "#fff");
    assert_eq!(scheme.colors_for(SchemeKind::Dark)["bg"], "#000");
    assert_eq!(scheme.colors_for(SchemeKind::Dark)["brand"], "#ff0066");
    assert_eq!(engine.theme().color("bg"), Some("#fff"));
    assert!(input.validate().is_ok());
}

#[test]
fn test_mismatched_dark_keys_fail_validation() {
    let input = ThemeInput::from_value(&json!({
        "colors": {
            "light": { "bg": "#fff", "accent": "#f00" },
            "dark": { "bg": "#000", "shadow": "#222" }
        }
    }))
    .unwrap();

    let engine = Engine::new(input.clone(), Macros::new());
    assert!(engine.color_scheme().has_dark());

    match input.validate() {
        Err(Error::ColorKeyMismatch {
            missing_in_light,
            missing_in_dark,
        }) => {
            assert_eq!(missing_in_light, ["shadow"]);
            assert_eq!(missing_in_dark, ["accent"]);
        }
        other => panic!("expected a color key mismatch, got {other:?}"),
    }
}

#[test]
fn test_mismatched_dark_keys_log_a_warning() {
    let input = ThemeInput::from_value(&json!({
        "colors": {
            "light": { "bg": "#fff", "accent": "#f00" },
            "dark": { "bg": "#000", "shadow": "#222" }
        }
    }))
    .unwrap();

    let warnings = warnings_during(|| {
        let merged = merge_theme(ThemeDefaults::builtin(), &input);
        assert!(merged.scheme.has_dark());
    });

    assert_eq!(warnings.len(), 1, "unexpected warnings: {warnings:?}");
    let warning = &warnings[0];
    assert!(warning.starts_with(targets::THEME), "{warning}");
    assert!(warning.contains("shadow"), "{warning}");
    assert!(warning.contains("accent"), "{warning}");
}

#[test]
fn test_matching_dark_keys_log_nothing() {
    let input = ThemeInput::from_value(&json!({
        "colors": {
            "light": { "bg": "#fff" },
            "dark": { "bg": "#000" }
        }
    }))
    .unwrap();

    let warnings = warnings_during(|| {
        merge_theme(ThemeDefaults::builtin(), &input);
    });
    assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
}

#[test]
fn test_extra_groups_pass_through() {
    let input = ThemeInput::from_json_str(r#"{ "breakpoints": { "tablet": 768 } }"#).unwrap();
    let engine = Engine::new(input, Macros::new());
    assert_eq!(engine.theme().extra("breakpoints"), Some(&json!({ "tablet": 768 })));
}

#[test]
fn test_load_json_file() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r##"{{ "colors": {{ "primary": "#123456" }}, "radii": {{ "md": 6 }} }}"##
    )
    .unwrap();

    let input = ThemeInput::from_file(file.path()).unwrap();
    let engine = Engine::new(input, Macros::new());
    assert_eq!(engine.theme().color("primary"), Some("#123456"));
    assert_eq!(engine.theme().token(TokenCategory::Radii, "md"), Some(&StyleValue::from(6)));
}

#[test]
fn test_load_toml_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[colors]\nprimary = \"#abcdef\"\n\n[spacing]\nxl = 40").unwrap();

    let input = ThemeInput::from_file(file.path()).unwrap();
    assert_eq!(
        input.tokens[&TokenCategory::Spacing].get("xl"),
        Some(&StyleValue::from(40))
    );
    assert_eq!(
        Engine::new(input, Macros::new()).theme().color("primary"),
        Some("#abcdef")
    );
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");

    match ThemeInput::from_file(&path) {
        Err(Error::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected an I/O error, got {other:?}"),
    }
}

#[test]
fn test_malformed_theme_is_rejected() {
    assert!(matches!(
        ThemeInput::from_json_str("[1, 2, 3]"),
        Err(Error::InvalidTheme { .. })
    ));
    assert!(matches!(
        ThemeInput::from_json_str("{ not json"),
        Err(Error::Json(_))
    ));
    assert!(matches!(
        ThemeInput::from_value(&json!({ "colors": { "primary": 5 } })),
        Err(Error::InvalidTheme { .. })
    ));
}
