use tracing::debug;

use crate::core::{
    RandomSource, Segment, ThreadRandom, WheelLayout, compute_layout, enabled_segments,
};
use crate::error::{WheelError, WheelResult};
use crate::extensions::{WheelEvent, WheelObserver};
use crate::interaction::{SpinPhase, WinnerDisplay};
use crate::render::{Renderer, WheelFrame};

use super::{WheelEngineConfig, engine_core::EngineCore};

/// Main orchestration facade consumed by host applications.
///
/// `WheelEngine` coordinates the segment snapshot, spin resolution,
/// deadline timing, observer dispatch, and renderer calls. It performs no
/// animation itself: `request_spin` hands back a target rotation and
/// duration, the host interpolates, and `advance_by` drives completion.
pub struct WheelEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) core: EngineCore,
}

impl<R: Renderer> WheelEngine<R> {
    /// Creates an engine with the default thread-RNG winner source.
    pub fn new(renderer: R, config: WheelEngineConfig) -> WheelResult<Self> {
        Self::with_random_source(renderer, config, Box::new(ThreadRandom))
    }

    /// Creates an engine with an injected random source, making spin
    /// outcomes reproducible for tests and replays.
    pub fn with_random_source(
        renderer: R,
        config: WheelEngineConfig,
        random: Box<dyn RandomSource>,
    ) -> WheelResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            core: EngineCore::new(config, random),
        })
    }

    /// Replaces the segment snapshot the next spin and render draw from.
    ///
    /// Rejected while a spin is in flight so a completed spin's winner
    /// index always refers to the list it was drawn from. Disabled
    /// segments may be included; the engine filters them internally.
    pub fn set_segments(&mut self, segments: Vec<Segment>) -> WheelResult<()> {
        if self.core.spin.is_spinning() {
            return Err(WheelError::SpinInFlight);
        }
        let enabled_len = enabled_segments(&segments).count();
        debug!(total = segments.len(), enabled = enabled_len, "set segments");
        self.core.segments = segments;
        self.emit_event(WheelEvent::SegmentsUpdated { enabled_len });
        Ok(())
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.core.segments
    }

    #[must_use]
    pub fn enabled_segment_count(&self) -> usize {
        enabled_segments(&self.core.segments).count()
    }

    /// Current angular partition of the enabled segments.
    #[must_use]
    pub fn layout(&self) -> WheelLayout {
        compute_layout(&self.core.segments)
    }

    /// Absolute cumulative rotation, strictly non-decreasing across spins.
    #[must_use]
    pub fn rotation_deg(&self) -> f64 {
        self.core.spin.rotation_deg()
    }

    #[must_use]
    pub fn phase(&self) -> SpinPhase {
        self.core.spin.phase()
    }

    #[must_use]
    pub fn last_winner_index(&self) -> Option<usize> {
        self.core.spin.last_winner_index()
    }

    #[must_use]
    pub fn winner_display(&self) -> &WinnerDisplay {
        &self.core.display
    }

    #[must_use]
    pub fn config(&self) -> WheelEngineConfig {
        self.core.config
    }

    pub fn set_pointer_rotation_deg(&mut self, rotation_deg: f64) -> WheelResult<()> {
        if !rotation_deg.is_finite() {
            return Err(WheelError::InvalidConfig(
                "pointer rotation must be finite".to_owned(),
            ));
        }
        self.core.config.pointer_rotation_deg = rotation_deg;
        Ok(())
    }

    /// Builds the current frame and hands it to the renderer.
    pub fn render(&mut self) -> WheelResult<()> {
        let frame = WheelFrame::new(
            self.core.spin.rotation_deg(),
            self.core.config.pointer_rotation_deg,
            compute_layout(&self.core.segments),
        );
        self.renderer.render(&frame)?;
        self.emit_event(WheelEvent::Rendered);
        Ok(())
    }

    pub fn add_observer(&mut self, observer: Box<dyn WheelObserver>) {
        self.core.observers.push(observer);
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
