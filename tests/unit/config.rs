use super::*;

#[test]
fn empty_object_uses_defaults() {
    let cfg = FrameConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, FrameConfig::default());
    assert_eq!(cfg.output, "photo-frame.glb");

    let dims = cfg.dimensions().unwrap();
    assert_eq!(dims.width_cm(), 30.0);
    assert_eq!(dims.height_cm(), 20.0);
    assert_eq!(dims.depth_cm(), 2.0);
    assert!(!dims.border_enabled());
    assert_eq!(dims.effective_border_cm(), 0.0);
}

#[test]
fn full_config_parses() {
    let cfg = FrameConfig::from_json_str(
        r##"{
            "width_cm": 40,
            "height_cm": 30,
            "depth_cm": 5,
            "border": { "enabled": true, "cm": 3.5 },
            "frame_color": "#1A2b3C",
            "output": "out.glb"
        }"##,
    )
    .unwrap();

    assert_eq!(cfg.frame_color, FrameColor::rgb(0x1a, 0x2b, 0x3c));
    let dims = cfg.dimensions().unwrap();
    assert!(dims.border_enabled());
    assert_eq!(dims.border_cm(), 3.5);
}

#[test]
fn oversized_border_is_clamped() {
    let cfg = FrameConfig::from_json_str(
        r#"{ "width_cm": 9, "height_cm": 20, "border": { "enabled": true, "cm": 10 } }"#,
    )
    .unwrap();
    assert_eq!(cfg.dimensions().unwrap().border_cm(), 4.5);
}

#[test]
fn non_positive_dimensions_are_rejected() {
    let cfg = FrameConfig::from_json_str(r#"{ "width_cm": 0 }"#).unwrap();
    assert!(matches!(cfg.dimensions(), Err(FrameError::Validation(_))));
}

#[test]
fn bad_color_and_unknown_fields_are_validation_errors() {
    assert!(matches!(
        FrameConfig::from_json_str(r#"{ "frame_color": "red" }"#),
        Err(FrameError::Validation(_))
    ));
    assert!(matches!(
        FrameConfig::from_json_str(r##"{ "colour": "#ffffff" }"##),
        Err(FrameError::Validation(_))
    ));
}

#[test]
fn missing_file_is_reported() {
    let err = FrameConfig::from_path("target/does-not-exist/frame.json").unwrap_err();
    assert!(err.to_string().contains("open frame config"));
}
