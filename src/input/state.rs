use glam::Vec2;

use super::keyboard::{HeldKeys, MoveAction};
use super::wheel::WheelNormalizer;

/// Transient input state owned by one control session.
///
/// Created when a mode is activated and dropped with it, so two sessions
/// never share held keys or wheel baselines.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct InputState {
    /// Directional keys currently held.
    pub held: HeldKeys,
    /// Last known cursor position in viewport pixels.
    pub pointer: Option<Vec2>,
    /// Pointer movement accumulated since the last [`take_delta`](Self::take_delta).
    pub pointer_delta: Vec2,
    /// Whether the primary button is held.
    pub dragging: bool,
    /// Per-session wheel normalization.
    pub wheel: WheelNormalizer,
}

impl InputState {
    /// Empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an absolute cursor position and return the movement since
    /// the previous one (zero for the first).
    pub fn move_pointer(&mut self, position: Vec2) -> Vec2 {
        let delta = self.pointer.map_or(Vec2::ZERO, |last| position - last);
        self.pointer = Some(position);
        self.pointer_delta += delta;
        delta
    }

    /// Record relative movement (pointer lock).
    pub fn add_delta(&mut self, delta: Vec2) {
        self.pointer_delta += delta;
    }

    /// Drain the accumulated pointer movement.
    pub fn take_delta(&mut self) -> Vec2 {
        std::mem::take(&mut self.pointer_delta)
    }

    /// Forget the cursor position, e.g. when it leaves the viewport.
    pub fn clear_pointer(&mut self) {
        self.pointer = None;
        self.dragging = false;
    }

    /// Record a directional key press or release.
    pub fn set_held(&mut self, action: MoveAction, pressed: bool) {
        self.held.set(action, pressed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_cursor_position_has_no_delta() {
        let mut state = InputState::new();
        assert_eq!(state.move_pointer(Vec2::new(10.0, 10.0)), Vec2::ZERO);
        assert_eq!(
            state.move_pointer(Vec2::new(13.0, 6.0)),
            Vec2::new(3.0, -4.0)
        );
    }

    #[test]
    fn deltas_accumulate_until_taken() {
        let mut state = InputState::new();
        state.add_delta(Vec2::new(1.0, 2.0));
        state.add_delta(Vec2::new(4.0, -1.0));
        assert_eq!(state.take_delta(), Vec2::new(5.0, 1.0));
        assert_eq!(state.take_delta(), Vec2::ZERO);
    }

    #[test]
    fn leaving_the_viewport_ends_a_drag() {
        let mut state = InputState::new();
        let _ = state.move_pointer(Vec2::new(1.0, 1.0));
        state.dragging = true;
        state.clear_pointer();
        assert!(!state.dragging);
        assert_eq!(state.pointer, None);
    }
}
