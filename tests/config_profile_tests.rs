use wheel_rs::config::{Palette, Skin, WheelProfile};
use wheel_rs::core::Segment;
use wheel_rs::error::WheelError;

#[test]
fn default_profile_has_four_enabled_ocean_segments() {
    let profile = WheelProfile::default();
    assert_eq!(profile.segments().len(), 4);
    assert_eq!(profile.enabled_segment_count(), 4);
    assert_eq!(profile.selected_palette(), "Ocean");

    let ocean = profile.palette("Ocean").expect("ocean palette");
    assert_eq!(profile.segments()[0].color, ocean.colors[0]);
}

#[test]
fn duplicate_labels_are_rejected() {
    let mut profile = WheelProfile::default();
    let first_label = profile.segments()[0].label.clone();

    let result = profile.add_segment(Segment::new(first_label.clone(), "#000000"));
    assert!(matches!(
        result,
        Err(WheelError::DuplicateLabel { label }) if label == first_label
    ));
    assert_eq!(profile.segments().len(), 4);

    // Replacing a segment with its own label is not a collision.
    let replacement = Segment::new(first_label, "#ffffff");
    assert!(profile.replace_segment(0, replacement).expect("replace"));
}

#[test]
fn segment_crud_round_trip() {
    let mut profile = WheelProfile::default();
    profile
        .add_segment(Segment::new("Bonus", "#ab87ff"))
        .expect("add segment");
    assert_eq!(profile.segments().len(), 5);

    assert!(profile.set_segment_enabled(4, false));
    assert_eq!(profile.enabled_segment_count(), 4);
    assert!(!profile.set_segment_enabled(9, false));

    assert!(profile.remove_segment(4).expect("remove"));
    assert_eq!(profile.segments().len(), 4);
    assert!(!profile.remove_segment(99).expect("out of range"));
}

#[test]
fn apply_palette_cycles_colors_over_segments() {
    let mut profile = WheelProfile::default();
    for index in 0..4 {
        profile
            .add_segment(Segment::new(format!("extra-{index}"), "#101010"))
            .expect("add segment");
    }
    assert_eq!(profile.segments().len(), 8);

    profile.apply_palette("Fire").expect("apply fire");
    let fire = profile.palette("Fire").expect("fire palette").clone();
    for (index, segment) in profile.segments().iter().enumerate() {
        assert_eq!(segment.color, fire.colors[index % fire.colors.len()]);
    }
    assert_eq!(profile.selected_palette(), "Fire");
}

#[test]
fn unknown_palettes_are_reported() {
    let mut profile = WheelProfile::default();
    assert!(matches!(
        profile.apply_palette("Nonexistent"),
        Err(WheelError::UnknownPalette { .. })
    ));
    assert!(matches!(
        profile.select_palette("Nonexistent"),
        Err(WheelError::UnknownPalette { .. })
    ));
}

#[test]
fn custom_palettes_join_the_registry() {
    let mut profile = WheelProfile::default();
    let palette =
        Palette::new("Mono", vec!["#111111".into(), "#999999".into()]).expect("valid palette");
    profile.add_custom_palette(palette).expect("add palette");

    assert!(profile.palette("Mono").is_some());
    profile.select_palette("Mono").expect("select");
    profile.apply_palette("Mono").expect("apply");
    assert_eq!(profile.segments()[2].color, "#111111");

    assert!(profile.remove_custom_palette("Mono"));
    assert!(!profile.remove_custom_palette("Mono"));
    assert!(profile.palette("Ocean").is_some());
}

#[test]
fn builtin_count_plus_custom_count_matches_iterator() {
    let mut profile = WheelProfile::default();
    let builtin_count = profile.palettes().count();
    profile
        .add_custom_palette(Palette::new("Extra", vec!["#123456".into()]).expect("valid"))
        .expect("add palette");
    assert_eq!(profile.palettes().count(), builtin_count + 1);
}

#[test]
fn skin_selection_is_bounds_checked() {
    let mut profile = WheelProfile::default();
    assert_eq!(profile.active_skin().name, "Red");

    profile.set_active_skin(3).expect("select last skin");
    assert_eq!(profile.active_skin().name, "Purple");
    assert!(profile.set_active_skin(10).is_err());

    profile.add_skin(Skin::image("Star", "star.png"));
    profile.set_active_skin(4).expect("select new skin");
    assert_eq!(profile.active_skin().image.as_deref(), Some("star.png"));
}

#[test]
fn pointer_rotation_must_be_finite() {
    let mut profile = WheelProfile::default();
    profile.set_pointer_rotation_deg(15.0).expect("finite");
    assert_eq!(profile.pointer_rotation_deg(), 15.0);
    assert!(profile.set_pointer_rotation_deg(f64::INFINITY).is_err());
    assert_eq!(profile.pointer_rotation_deg(), 15.0);
}

#[test]
fn custom_background_overrides_the_preset() {
    let mut profile = WheelProfile::default();
    assert_eq!(
        profile.effective_background_color(),
        profile.background_color()
    );

    profile.set_custom_background_color(Some("#222233".into()));
    assert_eq!(profile.effective_background_color(), "#222233");

    profile.set_custom_background_color(None);
    profile.set_background_color("#eeeeee");
    assert_eq!(profile.effective_background_color(), "#eeeeee");
}
