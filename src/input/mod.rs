//! Input handling: event types, held-key tracking, wheel normalization and
//! the per-session input state.

/// Platform-agnostic input events.
pub mod event;
/// Directional key actions and held-key tracking.
pub mod keyboard;
/// Per-session transient input state.
pub mod state;
/// Cross-browser wheel delta normalization.
pub mod wheel;

pub use event::{InputEvent, InputKind, MouseButton};
pub use keyboard::{HeldKeys, MoveAction};
pub use state::InputState;
pub use wheel::WheelNormalizer;
