use super::*;

#[test]
fn parse_hex_supports_short_and_long_forms() {
    assert_eq!(parse_hex("#ABC").unwrap(), Color::rgb(170, 187, 204));
    assert_eq!(parse_hex("  #a1B2c3 ").unwrap(), Color::rgb(161, 178, 195));
}

#[test]
fn parse_hex_rejects_invalid_inputs() {
    for raw in ["AABBCC", "#12", "#abcd", "#12GG34", "", "#", "blue", "#ééé", "#+a+b+c", "#+ab", "#-1-2-3"] {
        let err = parse_hex(raw).unwrap_err();
        assert_eq!(err, EditorError::InvalidColor(raw.to_string()), "input {raw:?}");
    }
}

#[test]
fn display_is_canonical_lowercase() {
    let color: Color = "#FF0000".parse().unwrap();
    assert_eq!(color.to_string(), "#ff0000");
    assert_eq!(color.to_hex(), "#ff0000");
    assert_eq!(Color::rgb(0, 150, 255).to_string(), "#0096ff");
}

#[test]
fn serde_uses_hex_string() {
    let json = serde_json::to_string(&Color::rgb(0x12, 0xab, 0x00)).unwrap();
    assert_eq!(json, "\"#12ab00\"");
    let back: Color = serde_json::from_str("\"#FFF\"").unwrap();
    assert_eq!(back, Color::rgb(255, 255, 255));
}

#[test]
fn serde_rejects_non_hex_string() {
    let err = serde_json::from_str::<Color>("\"orange\"").unwrap_err();
    assert!(err.to_string().contains("invalid color"));
}
