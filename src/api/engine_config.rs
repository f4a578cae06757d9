use serde::{Deserialize, Serialize};

use crate::error::{WheelError, WheelResult};

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load wheel
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelEngineConfig {
    /// Fixed spin animation length; completion fires when it elapses.
    #[serde(default = "default_spin_duration_ms")]
    pub spin_duration_ms: f64,
    /// Celebratory window between completion and the result-hide signal.
    #[serde(default = "default_result_display_ms")]
    pub result_display_ms: f64,
    /// Whole extra revolutions drawn uniformly in
    /// `[min_revolutions, min_revolutions + revolution_spread)`.
    /// Visual effect only; fairness is decided by the winner draw.
    #[serde(default = "default_min_revolutions")]
    pub min_revolutions: u32,
    #[serde(default = "default_revolution_spread")]
    pub revolution_spread: u32,
    /// Pointer skin rotation applied by renderers.
    #[serde(default)]
    pub pointer_rotation_deg: f64,
}

impl Default for WheelEngineConfig {
    fn default() -> Self {
        Self {
            spin_duration_ms: default_spin_duration_ms(),
            result_display_ms: default_result_display_ms(),
            min_revolutions: default_min_revolutions(),
            revolution_spread: default_revolution_spread(),
            pointer_rotation_deg: 0.0,
        }
    }
}

impl WheelEngineConfig {
    pub fn validate(self) -> WheelResult<()> {
        if !self.spin_duration_ms.is_finite() || self.spin_duration_ms <= 0.0 {
            return Err(WheelError::InvalidConfig(
                "spin duration must be finite and > 0".to_owned(),
            ));
        }
        if !self.result_display_ms.is_finite() || self.result_display_ms < 0.0 {
            return Err(WheelError::InvalidConfig(
                "result display window must be finite and >= 0".to_owned(),
            ));
        }
        if self.min_revolutions < 1 {
            return Err(WheelError::InvalidConfig(
                "spin needs at least one full revolution".to_owned(),
            ));
        }
        if self.revolution_spread < 1 {
            return Err(WheelError::InvalidConfig(
                "revolution spread must be >= 1".to_owned(),
            ));
        }
        if !self.pointer_rotation_deg.is_finite() {
            return Err(WheelError::InvalidConfig(
                "pointer rotation must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

fn default_spin_duration_ms() -> f64 {
    6_000.0
}

fn default_result_display_ms() -> f64 {
    5_000.0
}

fn default_min_revolutions() -> u32 {
    5
}

fn default_revolution_spread() -> u32 {
    5
}
