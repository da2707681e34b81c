use serde::{Deserialize, Serialize};

use crate::input::InputKind;

/// Handle of a requested animation frame.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct FrameHandle(pub u64);

/// Handle of a bound input listener.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ListenerId(pub u64);

/// Handle of a camera view-change subscription.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct SubscriptionId(pub u64);

/// The host surface a control session runs against: the window/element
/// delivering input, the animation-frame scheduler, pointer lock, and the
/// camera's view-change signal.
///
/// Everything is single-threaded and callback driven. Registering a
/// listener or requesting a frame only records intent; the host later
/// delivers events through
/// [`CameraControls::handle_event`](super::CameraControls::handle_event)
/// and frames through [`CameraControls::frame`](super::CameraControls::frame).
pub trait Platform {
    /// Request one animation-frame callback.
    fn request_frame(&mut self) -> FrameHandle;

    /// Cancel a previously requested frame. Unknown handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);

    /// Start delivering events of `kind`.
    fn add_listener(&mut self, kind: InputKind) -> ListenerId;

    /// Stop delivering events for a listener. Unknown ids are ignored.
    fn remove_listener(&mut self, id: ListenerId);

    /// Subscribe to the camera's own (debounced) view-change signal.
    fn subscribe_view_change(&mut self) -> SubscriptionId;

    /// Release a view-change subscription. Unknown ids are ignored.
    fn unsubscribe_view_change(&mut self, id: SubscriptionId);

    /// Ask for exclusive relative pointer input. Returns `false` when the
    /// platform lacks support or the request is denied.
    fn request_pointer_lock(&mut self) -> bool {
        false
    }

    /// Release pointer lock, if held.
    fn exit_pointer_lock(&mut self) {}

    /// Whether pointer lock is engaged right now. Browsers settle a lock
    /// request asynchronously, so this can disagree with what
    /// [`request_pointer_lock`](Self::request_pointer_lock) returned.
    fn pointer_locked(&self) -> bool {
        false
    }
}
