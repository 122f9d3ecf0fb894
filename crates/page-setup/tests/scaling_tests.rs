use page_setup::*;

fn pt(v: i64) -> Length {
    Length::from_points(v)
}

#[test]
fn test_eleven_point_standard_leading() {
    let mut model = TextScalingModel::new(TextScaling {
        base_font_size: pt(11),
        base_line_spacing: pt(11),
        leading_factor: 1.0,
        allow_non_standard: false,
    });
    model.on_font_size_changed();
    assert_eq!(model.scaling().base_line_spacing, Length::new(13_200));
}

#[test]
fn test_standard_mode_is_a_fixed_point() {
    for units in [1_000, 7_333, 11_000, 12_345, 99_999, 200_001] {
        let mut model = TextScalingModel::new(TextScaling::default());
        model.set_defaults(Length::new(units), Length::new(units));
        let font = model.scaling().base_font_size;

        model.on_font_size_changed();
        model.on_line_spacing_changed();
        model.on_font_size_changed();

        assert_eq!(model.scaling().base_font_size, font, "font size {units} drifted");
        assert!(model.scaling().follows_standard());
    }
}

#[test]
fn test_set_defaults_skips_recompute() {
    let mut model = TextScalingModel::new(TextScaling::default());
    let scaling = model.set_defaults(pt(10), pt(14));
    assert_eq!(scaling.base_font_size, pt(10));
    assert_eq!(scaling.base_line_spacing, pt(14));
    assert!((scaling.leading_factor - 1.4).abs() < 1e-9);
    assert!(!scaling.follows_standard());
}

#[test]
fn test_non_standard_spacing_never_below_font() {
    let mut model = TextScalingModel::new(TextScaling::default());
    model.set_allow_non_standard(true);
    for spacing in [4, 8, 11, 30] {
        let scaling = model.set_line_spacing(pt(spacing));
        assert!(scaling.base_font_size <= scaling.base_line_spacing);
    }
}
