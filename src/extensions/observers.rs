use serde::{Deserialize, Serialize};

use crate::interaction::SpinPhase;

/// Read-only state snapshot passed alongside every event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObserverContext {
    pub rotation_deg: f64,
    pub phase: SpinPhase,
    pub enabled_segment_count: usize,
    pub winner_visible: bool,
}

/// Event stream exposed to observers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum WheelEvent {
    SegmentsUpdated { enabled_len: usize },
    SpinStarted { target_rotation_deg: f64, duration_ms: f64 },
    SpinCompleted { winner_index: usize },
    ResultHidden,
    Rendered,
}

/// Subscription hook for hosts that want to react to engine transitions.
///
/// Observers receive events synchronously, in registration order, and can
/// read engine context without mutating core internals directly.
pub trait WheelObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: WheelEvent, context: ObserverContext);
}
