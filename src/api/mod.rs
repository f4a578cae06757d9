mod engine;
mod engine_config;
mod engine_core;
mod engine_snapshot;
mod observer_dispatch;
mod spin_controller;
mod spin_timeline;

pub use engine::WheelEngine;
pub use engine_config::WheelEngineConfig;
pub use engine_snapshot::EngineSnapshot;

use serde::{Deserialize, Serialize};

/// Everything a host needs to run one spin animation: interpolate the
/// wheel to `target_rotation_deg` over `duration_ms`, monotonically, then
/// step the engine past the deadline to observe completion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpinIntent {
    /// Index into the enabled segment list at the moment of the request.
    pub winner_index: usize,
    pub target_rotation_deg: f64,
    pub duration_ms: f64,
}
