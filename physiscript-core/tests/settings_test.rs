//! Settings loading tests
//!
//! Run with: `cargo test --features serde`

#![cfg(feature = "serde")]

use physiscript::settings::{AppSettings, FALLBACK_FPS};
use physiscript::{Color, ColorDisplayMode, PhysiscriptError};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_settings(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_full_settings_file() {
    let file = write_settings(
        r##"{
            "width": 1024,
            "height": 768,
            "title": "Pendulum",
            "fps": 120,
            "vsync": false,
            "exit_on_escape": false,
            "disable_tools_menubar": true,
            "clear_color": "#202020",
            "color_display": "hex"
        }"##,
    );

    let settings = AppSettings::from_file(file.path()).unwrap();
    assert_eq!(
        settings,
        AppSettings {
            width: 1024,
            height: 768,
            title: "Pendulum".to_string(),
            fps: Some(120),
            vsync: false,
            exit_on_escape: false,
            disable_tools_menubar: true,
            clear_color: Color::from_rgb8(0x20, 0x20, 0x20),
            color_display: ColorDisplayMode::Hex,
        }
    );
}

#[test]
fn test_clear_color_accepts_every_json_shape() {
    let cases = [
        (r#""black""#, Color::BLACK),
        (r#""0x000000FF""#, Color::BLACK),
        ("255", Color::from_rgba8(0, 0, 0, 255)),
        ("[0, 1, 0.5]", Color::new(0.0, 1.0, 0.5, 1.0).unwrap()),
        ("[1, 1, 1, 0]", Color::new(1.0, 1.0, 1.0, 0.0).unwrap()),
    ];

    for (value, expected) in cases {
        let json = format!(r#"{{"clear_color": {value}}}"#);
        let settings = AppSettings::from_json_str(&json).unwrap();
        assert_eq!(settings.clear_color, expected, "clear_color = {value}");
    }
}

#[test]
fn test_clear_color_rejections_are_reported() {
    for value in [r##""#12345""##, "3.5", "true", "null", "[0.5, 0.5]", "4294967296", "{}"] {
        let json = format!(r#"{{"clear_color": {value}}}"#);
        let err = AppSettings::from_json_str(&json).unwrap_err();
        assert!(
            matches!(err, PhysiscriptError::InvalidSettings(_)),
            "clear_color = {value} gave {err:?}"
        );
    }
}

#[test]
fn test_integers_beyond_64_bits_are_out_of_range_values() {
    for value in ["18446744073709551616", "1e20", "-1e30"] {
        let json = format!(r#"{{"clear_color": {value}}}"#);
        let err = AppSettings::from_json_str(&json).unwrap_err();
        assert!(
            err.to_string().contains("Invalid color value"),
            "clear_color = {value} gave {err}"
        );
    }

    let err = AppSettings::from_json_str(r#"{"clear_color": 18446744073709551616}"#).unwrap_err();
    assert!(err.to_string().contains("18446744073709551616"));
}

#[test]
fn test_fractional_float_stays_unsupported() {
    for value in ["3.5", "4294967296.5", "1.0"] {
        let json = format!(r#"{{"clear_color": {value}}}"#);
        let err = AppSettings::from_json_str(&json).unwrap_err();
        assert!(
            err.to_string().contains("Unsupported color type"),
            "clear_color = {value} gave {err}"
        );
    }
}

#[test]
fn test_non_numeric_sequence_element_is_format_error() {
    for value in [r#"[0.5, "x", 0.1]"#, "[0.5, true, 0.1]", "[0.5, null, 0.1]", "[[0.5], 0.5, 0.1]"] {
        let json = format!(r#"{{"clear_color": {value}}}"#);
        let err = AppSettings::from_json_str(&json).unwrap_err();
        assert!(
            err.to_string().contains("Invalid color format"),
            "clear_color = {value} gave {err}"
        );
    }
}

#[test]
fn test_unsupported_type_message_survives() {
    let err = AppSettings::from_json_str(r#"{"clear_color": 3.5}"#).unwrap_err();
    assert!(err.to_string().contains("Unsupported color type"));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = AppSettings::from_file(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, PhysiscriptError::Io(_)));
}

#[test]
fn test_invalid_window_size() {
    let err = AppSettings::from_json_str(r#"{"width": 0}"#).unwrap_err();
    assert!(matches!(err, PhysiscriptError::InvalidSettings(_)));
}

#[test]
fn test_empty_object_is_default() {
    let settings = AppSettings::from_json_str("{}").unwrap();
    assert_eq!(settings, AppSettings::default());
    assert_eq!(settings.effective_fps(), FALLBACK_FPS);
}

#[test]
fn test_color_serializes_as_normalized_floats() {
    let json = serde_json::to_string(&Color::from_rgba8(255, 0, 255, 0)).unwrap();
    assert_eq!(json, "[1.0,0.0,1.0,0.0]");

    let back: Color = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Color::from_rgba8(255, 0, 255, 0));
}
