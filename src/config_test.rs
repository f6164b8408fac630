#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_matches_stock_editor_look() {
    let cfg = EditorConfig::default();
    assert_eq!(cfg.initial_color.to_hex(), "#0096ff");
    assert_eq!(cfg.canvas_width, 800);
    assert_eq!(cfg.canvas_height, 600);
    assert_eq!(cfg.styles, StylePalette::default());
}

#[test]
fn empty_object_yields_defaults() {
    assert_eq!(EditorConfig::from_json("{}").unwrap(), EditorConfig::default());
}

#[test]
fn partial_overrides_keep_other_defaults() {
    let cfg = EditorConfig::from_json(
        r##"{ "initial_color": "#F00", "canvas_width": 1024, "styles": { "hovered": { "color": "#00ff00", "width": 4.0 } } }"##,
    )
    .unwrap();
    assert_eq!(cfg.initial_color, Color::rgb(255, 0, 0));
    assert_eq!(cfg.canvas_width, 1024);
    assert_eq!(cfg.canvas_height, 600);
    assert_eq!(cfg.styles.hovered.color, Color::rgb(0, 255, 0));
    assert_eq!(cfg.styles.hovered.width, 4.0);
    assert_eq!(cfg.styles.selected, StylePalette::default().selected);
}

#[test]
fn malformed_json_errors() {
    let err = EditorConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, EditorError::Config(_)));
    assert!(err.to_string().starts_with("invalid editor config"));
}

#[test]
fn invalid_color_errors() {
    let err = EditorConfig::from_json(r#"{ "initial_color": "teal" }"#).unwrap_err();
    assert!(err.to_string().contains("invalid color"));
}

#[test]
fn zero_canvas_size_errors() {
    let err = EditorConfig::from_json(r#"{ "canvas_height": 0 }"#).unwrap_err();
    assert!(err.to_string().contains("non-zero"));
}
