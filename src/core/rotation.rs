use crate::core::angle::{FULL_TURN_DEG, center_angle_deg};
use crate::error::{WheelError, WheelResult};

/// Resolved rotation target for one spin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinPlan {
    /// New absolute cumulative rotation the wheel must reach.
    pub target_rotation_deg: f64,
    /// Center angle of the winning segment, i.e. the angle that ends up
    /// under the fixed 12-o'clock pointer.
    pub winning_angle_deg: f64,
}

/// Computes the cumulative rotation that parks the pointer on the winner.
///
/// The pointer is fixed; the wheel rotates, so the winning center angle
/// must travel backward to 0°: the target satisfies
/// `target mod 360 == (-winning_angle) mod 360`. The current rotation is
/// first snapped down to its last whole turn, then `extra_revolutions`
/// full turns are added, which keeps the cumulative value strictly
/// increasing for `extra_revolutions >= 1` regardless of prior state.
pub fn plan_spin(
    current_rotation_deg: f64,
    winner_index: usize,
    segment_count: usize,
    extra_revolutions: u32,
) -> WheelResult<SpinPlan> {
    if !current_rotation_deg.is_finite() || current_rotation_deg < 0.0 {
        return Err(WheelError::InvalidData(
            "current rotation must be finite and >= 0".to_owned(),
        ));
    }
    if segment_count < 1 || winner_index >= segment_count {
        return Err(WheelError::InvalidData(format!(
            "winner index {winner_index} out of range for {segment_count} segments"
        )));
    }
    if extra_revolutions < 1 {
        return Err(WheelError::InvalidData(
            "spin needs at least one full revolution".to_owned(),
        ));
    }

    let winning_angle_deg = center_angle_deg(winner_index, segment_count);
    let whole_turns_base = current_rotation_deg - current_rotation_deg % FULL_TURN_DEG;
    let target_rotation_deg =
        whole_turns_base + f64::from(extra_revolutions) * FULL_TURN_DEG - winning_angle_deg;

    Ok(SpinPlan {
        target_rotation_deg,
        winning_angle_deg,
    })
}
