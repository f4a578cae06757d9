use crate::core::{RandomSource, Segment};
use crate::extensions::WheelObserver;
use crate::interaction::{SpinState, WinnerDisplay};

use super::{WheelEngineConfig, spin_timeline::SpinTimeline};

/// Internal engine state used by the public facade (`WheelEngine`).
pub(super) struct EngineCore {
    pub(super) config: WheelEngineConfig,
    pub(super) segments: Vec<Segment>,
    pub(super) spin: SpinState,
    pub(super) display: WinnerDisplay,
    pub(super) timeline: SpinTimeline,
    pub(super) random: Box<dyn RandomSource>,
    pub(super) observers: Vec<Box<dyn WheelObserver>>,
}

impl EngineCore {
    pub(super) fn new(config: WheelEngineConfig, random: Box<dyn RandomSource>) -> Self {
        Self {
            config,
            segments: Vec::new(),
            spin: SpinState::default(),
            display: WinnerDisplay::default(),
            timeline: SpinTimeline::default(),
            random,
            observers: Vec::new(),
        }
    }
}
