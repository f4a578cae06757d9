use tracing::{debug, warn};

use crate::core::{Segment, enabled_segments, plan_spin};
use crate::extensions::WheelEvent;
use crate::render::Renderer;

use super::{SpinIntent, WheelEngine};

impl<R: Renderer> WheelEngine<R> {
    /// Resolves one spin: picks the winner, plans the rotation, arms the
    /// completion deadline.
    ///
    /// Invalid requests (a spin already in flight, or fewer than two
    /// enabled segments) are inert no-ops returning `None`, never errors:
    /// the host UI is expected to disable its spin control, and the
    /// engine guards independently. The winner is drawn uniformly over
    /// the enabled segments at call time; the extra revolutions are
    /// visual only and cannot affect which segment wins.
    pub fn request_spin(&mut self) -> Option<SpinIntent> {
        if self.core.spin.is_spinning() {
            debug!("spin rejected: already in flight");
            return None;
        }
        let enabled: Vec<&Segment> = enabled_segments(&self.core.segments).collect();
        if enabled.len() < 2 {
            debug!(
                enabled = enabled.len(),
                "spin rejected: need at least two enabled segments"
            );
            return None;
        }

        // A new spin supersedes the previous result: no stale winner text
        // during the animation, no pending hide firing into new state.
        self.core.display.clear();
        self.core.timeline.cancel_hide();

        let segment_count = enabled.len();
        let winner_index = self.core.random.next_index(segment_count);
        let winner_label = enabled[winner_index].label.clone();
        let revolutions = self.core.config.min_revolutions
            + self
                .core
                .random
                .next_index(self.core.config.revolution_spread as usize) as u32;

        let plan = match plan_spin(
            self.core.spin.rotation_deg(),
            winner_index,
            segment_count,
            revolutions,
        ) {
            Ok(plan) => plan,
            Err(err) => {
                warn!(error = %err, "spin planning failed");
                return None;
            }
        };

        let duration_ms = self.core.config.spin_duration_ms;
        self.core.spin.begin_spin(plan.target_rotation_deg);
        self.core
            .timeline
            .schedule_completion(duration_ms, winner_index, winner_label);
        debug!(
            winner_index,
            revolutions,
            target_rotation_deg = plan.target_rotation_deg,
            "spin started"
        );
        self.emit_event(WheelEvent::SpinStarted {
            target_rotation_deg: plan.target_rotation_deg,
            duration_ms,
        });

        Some(SpinIntent {
            winner_index,
            target_rotation_deg: plan.target_rotation_deg,
            duration_ms,
        })
    }
}
