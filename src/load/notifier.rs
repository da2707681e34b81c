/// Coalesces continuous camera motion into occasional notifications.
///
/// Movement is accumulated until it crosses `threshold`, at which point
/// one notification fires and the accumulator restarts. Bursts of
/// per-frame motion therefore produce a handful of loads instead of one
/// per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewChangeNotifier {
    threshold: f32,
    accumulated: f32,
}

impl ViewChangeNotifier {
    /// Notifier firing every `threshold` units of movement. Non-positive
    /// thresholds fire on every non-zero movement.
    #[must_use]
    pub const fn new(threshold: f32) -> Self {
        Self {
            threshold,
            accumulated: 0.0,
        }
    }

    /// Record `distance` of movement. Returns `true` when the accumulated
    /// movement crossed the threshold.
    pub fn accumulate(&mut self, distance: f32) -> bool {
        if distance <= 0.0 || !distance.is_finite() {
            return false;
        }
        self.accumulated += distance;
        if self.accumulated >= self.threshold {
            self.accumulated = 0.0;
            true
        } else {
            false
        }
    }

    /// Movement recorded since the last notification.
    #[must_use]
    pub const fn pending(&self) -> f32 {
        self.accumulated
    }

    /// Drop any pending movement, e.g. after a full reload.
    pub fn reset(&mut self) {
        self.accumulated = 0.0;
    }
}
