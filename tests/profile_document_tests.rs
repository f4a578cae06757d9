use wheel_rs::config::{PROFILE_FORMAT_VERSION, Palette, ProfileDocument, WheelProfile};
use wheel_rs::core::Segment;
use wheel_rs::error::WheelError;

fn customized_profile() -> WheelProfile {
    let mut profile = WheelProfile::default();
    profile
        .add_segment(Segment::new("Jackpot", "#ffd700").disabled())
        .expect("add segment");
    profile
        .add_custom_palette(Palette::new("Night", vec!["#0b0b1a".into(), "#20204a".into()]).expect("valid"))
        .expect("add palette");
    profile.apply_palette("Night").expect("apply palette");
    profile.set_custom_background_color(Some("#101018".into()));
    profile.set_pointer_rotation_deg(7.5).expect("pointer");
    profile
}

#[test]
fn document_round_trips_through_json() {
    let document = ProfileDocument::export(customized_profile());
    let json = document.to_json_string().expect("serialize");
    let restored = ProfileDocument::from_json_str(&json).expect("deserialize");

    assert_eq!(restored.format_version, PROFILE_FORMAT_VERSION);
    assert_eq!(restored.profile, document.profile);
    assert_eq!(restored.exported_at_unix, document.exported_at_unix);
}

#[test]
fn builtin_palettes_are_reattached_on_import() {
    let document = ProfileDocument::export(customized_profile());
    let json = document.to_json_string().expect("serialize");

    // Built-ins are not part of the payload.
    assert!(!json.contains("\"Ocean\""));

    let restored = ProfileDocument::from_json_str(&json).expect("deserialize");
    assert!(restored.profile.palette("Ocean").is_some());
    assert!(restored.profile.palette("Night").is_some());
}

#[test]
fn unsupported_versions_are_rejected() {
    let document = ProfileDocument::export(WheelProfile::default());
    let json = document
        .to_json_string()
        .expect("serialize")
        .replace(
            &format!("\"format_version\": {PROFILE_FORMAT_VERSION}"),
            "\"format_version\": 999",
        );

    let result = ProfileDocument::from_json_str(&json);
    assert!(matches!(result, Err(WheelError::InvalidData(_))));
}

#[test]
fn malformed_json_maps_to_a_serialization_error() {
    let result = ProfileDocument::from_json_str("{not json");
    assert!(matches!(result, Err(WheelError::Serialization(_))));
}

#[test]
fn disabled_segments_survive_the_round_trip() {
    let document = ProfileDocument::export(customized_profile());
    let json = document.to_json_string().expect("serialize");
    let restored = ProfileDocument::from_json_str(&json).expect("deserialize");

    let jackpot = restored
        .profile
        .segments()
        .iter()
        .find(|segment| segment.label == "Jackpot")
        .expect("jackpot present");
    assert!(!jackpot.enabled);
    assert_eq!(
        restored.profile.enabled_segment_count(),
        restored.profile.segments().len() - 1
    );
}
