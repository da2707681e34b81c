use serde::{Deserialize, Serialize};

/// Platform-agnostic input events.
///
/// These are fed into
/// [`CameraControls::handle_event`](crate::controls::CameraControls::handle_event),
/// which routes them to the active control mode.
///
/// # Example
///
/// ```ignore
/// controls.handle_event(&InputEvent::CursorMoved { x: 100.0, y: 200.0 });
/// controls.handle_event(&InputEvent::key("ArrowUp", true));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// Cursor moved to a position relative to the viewport's top-left
    /// corner.
    CursorMoved {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
    },
    /// Relative pointer movement, as delivered while pointer lock is held.
    PointerMotion {
        /// Horizontal movement in pixels (positive = right).
        dx: f32,
        /// Vertical movement in pixels (positive = down).
        dy: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel.
    Scroll {
        /// Vertical scroll amount in whatever unit the platform reports.
        /// Positive scrolls down, which zooms out.
        delta_y: f32,
    },
    /// Cursor left the viewport.
    CursorLeft,
    /// Keyboard key pressed or released.
    Key {
        /// Physical key code string (`"ArrowUp"`, `"KeyZ"`, ...).
        code: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Completed click at a viewport position.
    Click {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

/// Listener category an event is delivered through.
///
/// A control mode only receives events whose kind it registered a
/// listener for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    /// Pointer movement, absolute or relative.
    PointerMove,
    /// Button press.
    PointerDown,
    /// Button release.
    PointerUp,
    /// Pointer leaving the viewport.
    PointerLeave,
    /// Scroll wheel.
    Wheel,
    /// Key press.
    KeyDown,
    /// Key release.
    KeyUp,
    /// Click.
    Click,
}

impl InputKind {
    /// DOM event type the kind corresponds to.
    #[must_use]
    pub const fn dom_event_name(self) -> &'static str {
        match self {
            Self::PointerMove => "mousemove",
            Self::PointerDown => "mousedown",
            Self::PointerUp => "mouseup",
            Self::PointerLeave => "mouseleave",
            Self::Wheel => "wheel",
            Self::KeyDown => "keydown",
            Self::KeyUp => "keyup",
            Self::Click => "click",
        }
    }

    /// Whether the DOM delivers this kind on the window rather than on
    /// the canvas element.
    #[must_use]
    pub const fn targets_window(self) -> bool {
        matches!(self, Self::KeyDown | Self::KeyUp)
    }
}

impl InputEvent {
    /// Shorthand for a [`InputEvent::Key`] event.
    #[must_use]
    pub fn key(code: &str, pressed: bool) -> Self {
        Self::Key {
            code: code.to_owned(),
            pressed,
        }
    }

    /// Listener category for this event.
    #[must_use]
    pub const fn kind(&self) -> InputKind {
        match self {
            Self::CursorMoved { .. } | Self::PointerMotion { .. } => {
                InputKind::PointerMove
            }
            Self::MouseButton { pressed: true, .. } => InputKind::PointerDown,
            Self::MouseButton { pressed: false, .. } => InputKind::PointerUp,
            Self::Scroll { .. } => InputKind::Wheel,
            Self::CursorLeft => InputKind::PointerLeave,
            Self::Key { pressed: true, .. } => InputKind::KeyDown,
            Self::Key { pressed: false, .. } => InputKind::KeyUp,
            Self::Click { .. } => InputKind::Click,
        }
    }
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Convert a winit window event. Returns `None` for events the camera
    /// controls do not consume.
    ///
    /// Key codes use the `winit::keyboard::KeyCode` debug format, which
    /// matches the DOM `KeyboardEvent.code` strings for the keys we bind.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_window_event(event: &winit::event::WindowEvent) -> Option<Self> {
        use winit::event::{MouseScrollDelta, WindowEvent};
        use winit::keyboard::PhysicalKey;

        // Pixels per scroll line, so line and pixel deltas land in the
        // same range before normalization.
        const LINE_HEIGHT: f32 = 100.0;

        match event {
            WindowEvent::CursorMoved { position, .. } => Some(Self::CursorMoved {
                x: position.x as f32,
                y: position.y as f32,
            }),
            WindowEvent::CursorLeft { .. } => Some(Self::CursorLeft),
            WindowEvent::MouseInput { state, button, .. } => {
                Some(Self::MouseButton {
                    button: (*button).into(),
                    pressed: state.is_pressed(),
                })
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let delta_y = match delta {
                    MouseScrollDelta::LineDelta(_, y) => -y * LINE_HEIGHT,
                    MouseScrollDelta::PixelDelta(pos) => -(pos.y as f32),
                };
                Some(Self::Scroll { delta_y })
            }
            WindowEvent::KeyboardInput { event, .. } => match event.physical_key {
                PhysicalKey::Code(code) => Some(Self::Key {
                    code: format!("{code:?}"),
                    pressed: event.state.is_pressed(),
                }),
                PhysicalKey::Unidentified(_) => None,
            },
            _ => None,
        }
    }

    /// Convert a winit device event (raw mouse motion, used while the
    /// cursor is grabbed).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_device_event(event: &winit::event::DeviceEvent) -> Option<Self> {
        match event {
            winit::event::DeviceEvent::MouseMotion { delta } => {
                Some(Self::PointerMotion {
                    dx: delta.0 as f32,
                    dy: delta.1 as f32,
                })
            }
            _ => None,
        }
    }
}
