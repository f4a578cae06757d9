use crate::core::WheelLayout;
use crate::error::{WheelError, WheelResult};

/// Backend-agnostic scene for one wheel draw pass.
///
/// Backends apply `rotation_deg` to the whole partition, place content at
/// the layout's center angles, and draw the fixed pointer at 12 o'clock
/// rotated by `pointer_rotation_deg`. An empty layout stands for the
/// neutral empty-state fill.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelFrame {
    pub rotation_deg: f64,
    pub pointer_rotation_deg: f64,
    pub layout: WheelLayout,
}

impl WheelFrame {
    #[must_use]
    pub fn new(rotation_deg: f64, pointer_rotation_deg: f64, layout: WheelLayout) -> Self {
        Self {
            rotation_deg,
            pointer_rotation_deg,
            layout,
        }
    }

    pub fn validate(&self) -> WheelResult<()> {
        if !self.rotation_deg.is_finite() || !self.pointer_rotation_deg.is_finite() {
            return Err(WheelError::InvalidData(
                "frame rotation angles must be finite".to_owned(),
            ));
        }
        for arc in self.layout.arcs() {
            if !arc.start_deg.is_finite() || !arc.end_deg.is_finite() || arc.end_deg < arc.start_deg
            {
                return Err(WheelError::InvalidData(
                    "layout arcs must be finite and ordered".to_owned(),
                ));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layout.is_empty()
    }
}
