use serde::{Deserialize, Serialize};

use crate::interaction::{SpinPhase, WinnerDisplay};
use crate::render::Renderer;

use super::{WheelEngine, WheelEngineConfig};

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub phase: SpinPhase,
    pub rotation_deg: f64,
    pub last_winner_index: Option<usize>,
    pub winner_display: WinnerDisplay,
    pub segment_count: usize,
    pub enabled_segment_count: usize,
    pub time_until_completion_ms: Option<f64>,
    pub time_until_hide_ms: Option<f64>,
    pub config: WheelEngineConfig,
}

impl<R: Renderer> WheelEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            phase: self.phase(),
            rotation_deg: self.rotation_deg(),
            last_winner_index: self.last_winner_index(),
            winner_display: self.winner_display().clone(),
            segment_count: self.segments().len(),
            enabled_segment_count: self.enabled_segment_count(),
            time_until_completion_ms: self.time_until_completion_ms(),
            time_until_hide_ms: self.time_until_hide_ms(),
            config: self.config(),
        }
    }
}
