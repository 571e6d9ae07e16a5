use super::*;
use serde_json::json;

#[test]
fn parses_hex_with_and_without_hash() {
    assert_eq!(
        FrameColor::from_hex("#ff8000").unwrap(),
        FrameColor::rgb(255, 128, 0)
    );
    assert_eq!(
        FrameColor::from_hex("FF8000").unwrap(),
        FrameColor::rgb(255, 128, 0)
    );
    assert_eq!(
        "#A0b0C0".parse::<FrameColor>().unwrap(),
        FrameColor::rgb(0xa0, 0xb0, 0xc0)
    );
}

#[test]
fn rejects_malformed_hex() {
    for bad in ["", "#fff", "#ff00001", "#gg0000", "#ff00ä", "#+f0000"] {
        let err = FrameColor::from_hex(bad).unwrap_err();
        assert!(
            matches!(err, FrameError::Validation(_)),
            "{bad:?} should be a validation error"
        );
    }
}

#[test]
fn hex_display_is_lowercase() {
    let c = FrameColor::rgb(0xAB, 0x01, 0xFF);
    assert_eq!(c.to_hex(), "#ab01ff");
    assert_eq!(c.to_string(), "#ab01ff");
}

#[test]
fn deserializes_hex_object_and_array() {
    let c: FrameColor = serde_json::from_value(json!("#102030")).unwrap();
    assert_eq!(c, FrameColor::rgb(0x10, 0x20, 0x30));

    let c: FrameColor = serde_json::from_value(json!({"r": 1, "g": 2, "b": 3})).unwrap();
    assert_eq!(c, FrameColor::rgb(1, 2, 3));

    let c: FrameColor = serde_json::from_value(json!([4, 5, 6])).unwrap();
    assert_eq!(c, FrameColor::rgb(4, 5, 6));

    assert!(serde_json::from_value::<FrameColor>(json!([1, 2])).is_err());
}

#[test]
fn serializes_as_hex_string() {
    let v = serde_json::to_value(FrameColor::rgb(255, 0, 0)).unwrap();
    assert_eq!(v, json!("#ff0000"));
}

#[test]
fn white_is_linear_one() {
    assert_eq!(FrameColor::default(), FrameColor::WHITE);
    for c in FrameColor::WHITE.to_linear_rgb() {
        assert!((c - 1.0).abs() < 1e-12);
    }
}
