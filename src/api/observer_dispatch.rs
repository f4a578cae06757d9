use crate::extensions::{ObserverContext, WheelEvent};
use crate::render::Renderer;

use super::WheelEngine;

impl<R: Renderer> WheelEngine<R> {
    pub(super) fn observer_context(&self) -> ObserverContext {
        ObserverContext {
            rotation_deg: self.core.spin.rotation_deg(),
            phase: self.core.spin.phase(),
            enabled_segment_count: self.enabled_segment_count(),
            winner_visible: self.core.display.visible,
        }
    }

    pub(super) fn emit_event(&mut self, event: WheelEvent) {
        let context = self.observer_context();
        for observer in &mut self.core.observers {
            observer.on_event(event, context);
        }
    }
}
