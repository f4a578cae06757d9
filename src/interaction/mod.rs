use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpinPhase {
    Idle,
    Spinning,
}

/// Winner banner shown during the celebratory display window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WinnerDisplay {
    pub visible: bool,
    pub label: Option<String>,
}

impl WinnerDisplay {
    pub fn show(&mut self, label: impl Into<String>) {
        self.visible = true;
        self.label = Some(label.into());
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Drops any stale winner text so it cannot linger into a new spin.
    pub fn clear(&mut self) {
        self.visible = false;
        self.label = None;
    }
}

/// Single source of truth for "can a new spin start".
///
/// Created once at engine construction and never destroyed; the
/// cumulative rotation is strictly non-decreasing across spins (never
/// reset to zero) so the visual spin direction stays consistent with no
/// snap-back. Only `begin_spin` and `complete_spin` mutate it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinState {
    phase: SpinPhase,
    cumulative_rotation_deg: f64,
    last_winner_index: Option<usize>,
}

impl Default for SpinState {
    fn default() -> Self {
        Self {
            phase: SpinPhase::Idle,
            cumulative_rotation_deg: 0.0,
            last_winner_index: None,
        }
    }
}

impl SpinState {
    #[must_use]
    pub fn phase(self) -> SpinPhase {
        self.phase
    }

    #[must_use]
    pub fn is_spinning(self) -> bool {
        self.phase == SpinPhase::Spinning
    }

    #[must_use]
    pub fn rotation_deg(self) -> f64 {
        self.cumulative_rotation_deg
    }

    /// Index into the enabled segment list of the last completed spin.
    #[must_use]
    pub fn last_winner_index(self) -> Option<usize> {
        self.last_winner_index
    }

    /// Enters `Spinning` and advances the cumulative rotation.
    ///
    /// Callers guarantee `target_rotation_deg` exceeds the current value;
    /// the debug assertion documents the monotonicity invariant.
    pub fn begin_spin(&mut self, target_rotation_deg: f64) {
        debug_assert!(target_rotation_deg > self.cumulative_rotation_deg);
        self.phase = SpinPhase::Spinning;
        self.cumulative_rotation_deg = target_rotation_deg;
    }

    pub fn complete_spin(&mut self, winner_index: usize) {
        self.phase = SpinPhase::Idle;
        self.last_winner_index = Some(winner_index);
    }
}
