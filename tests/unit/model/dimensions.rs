use super::*;

#[test]
fn max_border_is_half_shorter_side_floored_to_tenth() {
    assert_eq!(DimensionModel::new(30.0, 20.0, 5.0).max_border_cm(), 10.0);
    assert_eq!(DimensionModel::new(15.5, 40.0, 5.0).max_border_cm(), 7.7);
    assert_eq!(DimensionModel::new(9.99, 9.99, 1.0).max_border_cm(), 4.9);
    assert_eq!(DimensionModel::new(0.1, 3.0, 1.0).max_border_cm(), 0.0);
}

#[test]
fn max_border_is_monotonic_in_shorter_side() {
    let mut prev = -1.0;
    let mut side = 0.05;
    while side < 60.0 {
        let max = DimensionModel::new(side, side + 3.0, 1.0).max_border_cm();
        assert!(max >= prev, "side {side}: {max} < {prev}");
        // Always a whole number of tenths.
        assert!(((max * 10.0).round() - max * 10.0).abs() < 1e-9);
        assert!(max <= side / 2.0 + 1e-12);
        prev = max;
        side += 0.37;
    }
}

#[test]
fn shrinking_width_clamps_border_down() {
    let mut d = DimensionModel::new(30.0, 20.0, 5.0);
    d.set_border_enabled(true);
    d.set_border_cm(8.0);
    assert_eq!(d.border_cm(), 8.0);

    d.set_width_cm(12.3);
    assert_eq!(d.max_border_cm(), 6.1);
    assert_eq!(d.border_cm(), 6.1);

    // Growing back does not restore the old value.
    d.set_width_cm(30.0);
    assert_eq!(d.border_cm(), 6.1);
}

#[test]
fn shrinking_height_clamps_border_down() {
    let mut d = DimensionModel::new(30.0, 20.0, 5.0);
    d.set_border_enabled(true);
    d.set_border_cm(4.0);
    d.set_height_cm(5.0);
    assert_eq!(d.border_cm(), 2.5);
}

#[test]
fn border_setter_limits_to_range() {
    let mut d = DimensionModel::new(10.0, 10.0, 1.0);
    d.set_border_cm(12.0);
    assert_eq!(d.border_cm(), 5.0);
    d.set_border_cm(-3.0);
    assert_eq!(d.border_cm(), 0.0);
}

#[test]
fn disabled_border_is_effectively_zero() {
    let mut d = DimensionModel::new(30.0, 20.0, 5.0);
    d.set_border_cm(2.0);
    assert!(!d.border_enabled());
    assert_eq!(d.effective_border_cm(), 0.0);
    assert_eq!(d.border_cm(), 2.0);

    d.set_border_enabled(true);
    assert_eq!(d.effective_border_cm(), 2.0);
}

#[test]
fn to_meters_divides_by_hundred() {
    let m = DimensionModel::new(30.0, 20.0, 5.0).to_meters();
    assert_eq!(
        m,
        MeterDims {
            width: 0.3,
            height: 0.2,
            depth: 0.05,
        }
    );
}

#[test]
fn validate_rejects_non_positive_and_non_finite() {
    assert!(DimensionModel::new(30.0, 20.0, 5.0).validate().is_ok());
    for d in [
        DimensionModel::new(0.0, 20.0, 5.0),
        DimensionModel::new(30.0, -1.0, 5.0),
        DimensionModel::new(30.0, 20.0, 0.0),
        DimensionModel::new(f64::NAN, 20.0, 5.0),
        DimensionModel::new(30.0, f64::INFINITY, 5.0),
    ] {
        assert!(matches!(d.validate(), Err(FrameError::Validation(_))));
    }
}
