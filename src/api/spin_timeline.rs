use tracing::{debug, warn};

use crate::extensions::WheelEvent;
use crate::render::Renderer;

use super::WheelEngine;

/// Completion payload captured when a spin starts.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct PendingCompletion {
    pub(super) at_ms: f64,
    pub(super) winner_index: usize,
    pub(super) winner_label: String,
}

/// Host-stepped clock plus the two deadlines a spin schedules.
///
/// The completion deadline is fixed at spin start; the hide deadline is
/// derived from it at completion time, so one oversized `advance_by`
/// resolves both in order and the hide signal stays exactly-once.
#[derive(Debug, Default)]
pub(super) struct SpinTimeline {
    clock_ms: f64,
    completion: Option<PendingCompletion>,
    hide_at_ms: Option<f64>,
}

impl SpinTimeline {
    #[must_use]
    pub(super) fn now_ms(&self) -> f64 {
        self.clock_ms
    }

    pub(super) fn tick(&mut self, delta_ms: f64) {
        self.clock_ms += delta_ms;
    }

    pub(super) fn schedule_completion(
        &mut self,
        delay_ms: f64,
        winner_index: usize,
        winner_label: String,
    ) {
        self.completion = Some(PendingCompletion {
            at_ms: self.clock_ms + delay_ms,
            winner_index,
            winner_label,
        });
    }

    /// A new spin supersedes the previous spin's display window.
    pub(super) fn cancel_hide(&mut self) {
        self.hide_at_ms = None;
    }

    pub(super) fn schedule_hide(&mut self, at_ms: f64) {
        self.hide_at_ms = Some(at_ms);
    }

    pub(super) fn take_completion_due(&mut self) -> Option<PendingCompletion> {
        if self
            .completion
            .as_ref()
            .is_some_and(|pending| self.clock_ms >= pending.at_ms)
        {
            return self.completion.take();
        }
        None
    }

    pub(super) fn take_hide_due(&mut self) -> Option<f64> {
        if self.hide_at_ms.is_some_and(|at_ms| self.clock_ms >= at_ms) {
            return self.hide_at_ms.take();
        }
        None
    }

    #[must_use]
    pub(super) fn time_until_completion_ms(&self) -> Option<f64> {
        self.completion
            .as_ref()
            .map(|pending| (pending.at_ms - self.clock_ms).max(0.0))
    }

    #[must_use]
    pub(super) fn time_until_hide_ms(&self) -> Option<f64> {
        self.hide_at_ms.map(|at_ms| (at_ms - self.clock_ms).max(0.0))
    }
}

impl<R: Renderer> WheelEngine<R> {
    /// Steps the engine clock by `delta_ms` and resolves any deadlines
    /// that fall due: spin completion first, then the result-hide signal.
    ///
    /// Completion is resolved against the recorded deadline rather than
    /// the observed tick time, so overshooting hosts cannot stretch the
    /// celebratory window.
    pub fn advance_by(&mut self, delta_ms: f64) {
        if !delta_ms.is_finite() || delta_ms < 0.0 {
            warn!(delta_ms, "ignoring invalid clock step");
            return;
        }
        self.core.timeline.tick(delta_ms);

        if let Some(pending) = self.core.timeline.take_completion_due() {
            self.core.spin.complete_spin(pending.winner_index);
            self.core.display.show(pending.winner_label);
            self.core
                .timeline
                .schedule_hide(pending.at_ms + self.core.config.result_display_ms);
            debug!(winner_index = pending.winner_index, "spin completed");
            self.emit_event(WheelEvent::SpinCompleted {
                winner_index: pending.winner_index,
            });
        }

        if self.core.timeline.take_hide_due().is_some() {
            self.core.display.hide();
            self.emit_event(WheelEvent::ResultHidden);
        }
    }

    /// Remaining time of the in-flight spin, `None` when idle.
    #[must_use]
    pub fn time_until_completion_ms(&self) -> Option<f64> {
        self.core.timeline.time_until_completion_ms()
    }

    /// Remaining celebratory display window, `None` when nothing is shown.
    #[must_use]
    pub fn time_until_hide_ms(&self) -> Option<f64> {
        self.core.timeline.time_until_hide_ms()
    }

    /// Engine-local clock in milliseconds, advanced only by `advance_by`.
    #[must_use]
    pub fn clock_ms(&self) -> f64 {
        self.core.timeline.now_ms()
    }
}
