use std::time::Duration;

use web_time::Instant;

use super::platform::{FrameHandle, Platform};

/// Elapsed time assumed for the first tick of a motion burst.
pub const NOMINAL_FRAME: Duration = Duration::from_micros(16_667);

/// Upper bound on the elapsed time of one tick, so a backgrounded tab
/// does not teleport the camera when it resumes.
pub const MAX_FRAME: Duration = Duration::from_millis(100);

/// Owns the session's single outstanding animation-frame request.
///
/// Modes say whether they want continuous motion; the loop makes sure at
/// most one frame is pending at a time and that a stopped loop leaves
/// nothing behind.
#[derive(Debug, Default, Clone)]
pub struct FrameLoop {
    pending: Option<FrameHandle>,
    wanted: bool,
    last_tick: Option<Instant>,
}

impl FrameLoop {
    /// Idle loop.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: None,
            wanted: false,
            last_tick: None,
        }
    }

    /// Currently outstanding frame, if any.
    #[must_use]
    pub const fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Whether continuous motion is wanted.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.wanted
    }

    /// Start (or keep) ticking. Requests a frame only if none is pending.
    pub fn start(&mut self, platform: &mut dyn Platform) {
        if !self.wanted {
            self.last_tick = None;
        }
        self.wanted = true;
        self.ensure_pending(platform);
    }

    /// Stop ticking and cancel the pending frame.
    pub fn stop(&mut self, platform: &mut dyn Platform) {
        self.wanted = false;
        self.last_tick = None;
        if let Some(handle) = self.pending.take() {
            platform.cancel_frame(handle);
        }
    }

    /// Consume a fired frame. Returns the elapsed seconds to integrate,
    /// or `None` if `handle` is not the pending frame (stale or already
    /// cancelled).
    pub fn fire(&mut self, handle: FrameHandle, now: Instant) -> Option<f32> {
        if self.pending != Some(handle) {
            return None;
        }
        self.pending = None;
        let elapsed = self
            .last_tick
            .map_or(NOMINAL_FRAME, |last| now.saturating_duration_since(last))
            .min(MAX_FRAME);
        self.last_tick = Some(now);
        Some(elapsed.as_secs_f32())
    }

    /// After a tick: request the next frame if motion is still wanted.
    pub fn resume(&mut self, platform: &mut dyn Platform) {
        if self.wanted {
            self.ensure_pending(platform);
        }
    }

    fn ensure_pending(&mut self, platform: &mut dyn Platform) {
        if self.pending.is_none() {
            self.pending = Some(platform.request_frame());
        }
    }
}
