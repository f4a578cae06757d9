use wheel_rs::core::{center_angle_deg, normalize_deg, plan_spin};

#[test]
fn alignment_is_exact_for_every_winner_up_to_twenty_segments() {
    for segment_count in 2..=20 {
        for winner_index in 0..segment_count {
            let plan = plan_spin(0.0, winner_index, segment_count, 5).expect("plan");
            let expected =
                normalize_deg(-center_angle_deg(winner_index, segment_count));
            let landed = normalize_deg(plan.target_rotation_deg);
            assert!(
                (landed - expected).abs() <= 1e-9,
                "n={segment_count} winner={winner_index}: landed {landed}, expected {expected}"
            );
        }
    }
}

#[test]
fn alignment_ignores_prior_rotation_state() {
    for prior in [0.0, 90.0, 359.9, 1_800.0, 123_456.789] {
        let plan = plan_spin(prior, 2, 4, 6).expect("plan");
        assert!((normalize_deg(plan.target_rotation_deg) - 135.0).abs() <= 1e-9);
        assert!(plan.target_rotation_deg > prior);
    }
}

#[test]
fn four_segment_winner_two_lands_on_135() {
    // 4 segments of 90 degrees: winner 2 centers at 225, so the wheel must
    // park at -(225) mod 360 = 135.
    let plan = plan_spin(0.0, 2, 4, 5).expect("plan");
    assert!((normalize_deg(plan.target_rotation_deg) - 135.0).abs() <= 1e-9);
    assert!((plan.winning_angle_deg - 225.0).abs() <= 1e-9);
}

#[test]
fn target_always_exceeds_current_rotation() {
    let mut rotation = 0.0;
    for spin in 0..50 {
        let winner = spin % 6;
        let revolutions = 5 + (spin % 5) as u32;
        let plan = plan_spin(rotation, winner, 6, revolutions).expect("plan");
        assert!(
            plan.target_rotation_deg > rotation,
            "spin {spin} did not advance the cumulative rotation"
        );
        rotation = plan.target_rotation_deg;
    }
}

#[test]
fn revolutions_only_add_whole_turns() {
    let five = plan_spin(0.0, 1, 8, 5).expect("five revolutions");
    let nine = plan_spin(0.0, 1, 8, 9).expect("nine revolutions");
    assert!((nine.target_rotation_deg - five.target_rotation_deg - 4.0 * 360.0).abs() <= 1e-9);
    assert!(
        (normalize_deg(five.target_rotation_deg) - normalize_deg(nine.target_rotation_deg)).abs()
            <= 1e-9
    );
}
