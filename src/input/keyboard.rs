use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Directional actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// forward = ["ArrowUp", "KeyZ"]
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MoveAction {
    /// Along the view direction, or north for top-down modes.
    Forward,
    /// Opposite of forward.
    Backward,
    /// Strafe left, or west for top-down modes.
    Left,
    /// Strafe right, or east for top-down modes.
    Right,
}

impl MoveAction {
    /// Unit screen-axis direction: `x` = right, `y` = forward.
    #[must_use]
    pub const fn axis(self) -> Vec2 {
        match self {
            Self::Forward => Vec2::Y,
            Self::Backward => Vec2::NEG_Y,
            Self::Left => Vec2::NEG_X,
            Self::Right => Vec2::X,
        }
    }
}

/// Which directional actions are currently held down.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HeldKeys {
    /// Forward held.
    pub forward: bool,
    /// Backward held.
    pub backward: bool,
    /// Left held.
    pub left: bool,
    /// Right held.
    pub right: bool,
}

impl HeldKeys {
    /// Record a press or release.
    pub fn set(&mut self, action: MoveAction, pressed: bool) {
        match action {
            MoveAction::Forward => self.forward = pressed,
            MoveAction::Backward => self.backward = pressed,
            MoveAction::Left => self.left = pressed,
            MoveAction::Right => self.right = pressed,
        }
    }

    /// Whether any action is held.
    #[must_use]
    pub const fn any(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Net direction: `x` = right minus left, `y` = forward minus
    /// backward. Opposing keys cancel.
    #[must_use]
    pub fn axis(&self) -> Vec2 {
        Vec2::new(
            Self::to_direction(self.right, self.left),
            Self::to_direction(self.forward, self.backward),
        )
    }

    const fn to_direction(positive: bool, negative: bool) -> f32 {
        match (positive, negative) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposing_keys_cancel() {
        let mut held = HeldKeys::default();
        held.set(MoveAction::Forward, true);
        held.set(MoveAction::Backward, true);
        held.set(MoveAction::Right, true);
        assert_eq!(held.axis(), Vec2::new(1.0, 0.0));
        assert!(held.any());
    }

    #[test]
    fn release_clears_the_action() {
        let mut held = HeldKeys::default();
        held.set(MoveAction::Left, true);
        held.set(MoveAction::Left, false);
        assert!(!held.any());
        assert_eq!(held.axis(), Vec2::ZERO);
    }

    #[test]
    fn action_axes_point_along_screen_directions() {
        assert_eq!(MoveAction::Forward.axis(), Vec2::Y);
        assert_eq!(MoveAction::Left.axis(), Vec2::NEG_X);
    }
}
