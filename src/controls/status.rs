use serde::{Deserialize, Serialize};

/// Classification of the current interaction, used to pick load
/// granularity in edge-pan mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionStatus {
    /// Nothing has happened yet this session.
    #[default]
    Idle,
    /// The camera is panning continuously.
    Moving,
    /// Panning just ended; a full load is due.
    Stopping,
    /// The altitude just changed; a full load is due.
    Scrolling,
    /// The last full load has been issued.
    Stopped,
}

/// Something that moves [`MotionStatus`] along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionTrigger {
    /// A frame tick moved the camera.
    Push,
    /// Directional input ended.
    Release,
    /// Wheel input.
    Wheel,
    /// The view jumped to a new place (click to centre).
    Recenter,
    /// The full load for the current status was issued.
    LoadComplete,
}

impl MotionStatus {
    /// Status after `trigger`.
    #[must_use]
    pub const fn next(self, trigger: MotionTrigger) -> Self {
        match (self, trigger) {
            (_, MotionTrigger::Push) => Self::Moving,
            (Self::Moving, MotionTrigger::Release) => Self::Stopping,
            (_, MotionTrigger::Wheel) => Self::Scrolling,
            (_, MotionTrigger::Recenter) => Self::Stopping,
            (Self::Stopping | Self::Scrolling, MotionTrigger::LoadComplete) => {
                Self::Stopped
            }
            (status, _) => status,
        }
    }

    /// Whether this status calls for a full region load.
    #[must_use]
    pub const fn wants_full_load(self) -> bool {
        matches!(self, Self::Stopping | Self::Scrolling)
    }
}
