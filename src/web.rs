//! Browser platform: DOM listeners, `requestAnimationFrame`, pointer lock.
//!
//! DOM callbacks cannot reach the session that owns the platform, so they
//! queue what happened and call a host-provided waker. The waker borrows
//! the session and calls [`dispatch`], which drains the queue into it:
//!
//! ```ignore
//! let platform = BrowserPlatform::new(canvas)?;
//! let controls = Rc::new(RefCell::new(CameraControls::new(platform, loader, floor, options)));
//! let weak = Rc::downgrade(&controls);
//! controls.borrow().platform().set_waker(move || {
//!     if let Some(controls) = weak.upgrade() {
//!         if let Ok(mut controls) = controls.try_borrow_mut() {
//!             dispatch(&mut controls);
//!         }
//!     }
//! });
//! controls.borrow_mut().activate(ModeKind::Rts);
//! ```

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, EventTarget, HtmlElement, KeyboardEvent, MouseEvent, WheelEvent};

use crate::camera::FloorProbe;
use crate::controls::{
    CameraControls, FrameHandle, ListenerId, Platform, SubscriptionId,
};
use crate::input::{InputEvent, InputKind, MouseButton};
use crate::load::ObjectLoader;
use crate::options::KeybindingOptions;

/// Install the console logger and panic hook. Safe to call more than once.
pub fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed.
    let _ = console_log::init_with_level(level);
}

/// DOM `MouseEvent.button` to a [`MouseButton`].
#[must_use]
pub const fn mouse_button_from_dom(button: i16) -> Option<MouseButton> {
    match button {
        0 => Some(MouseButton::Left),
        1 => Some(MouseButton::Middle),
        2 => Some(MouseButton::Right),
        _ => None,
    }
}

/// Convert a DOM event delivered through a listener of `kind`.
///
/// `pointer_locked` selects relative motion for `mousemove`. Returns
/// `None` for events of an unexpected type.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn input_from_dom(kind: InputKind, event: &Event, pointer_locked: bool) -> Option<InputEvent> {
    match kind {
        InputKind::PointerMove => {
            let mouse = event.dyn_ref::<MouseEvent>()?;
            Some(if pointer_locked {
                InputEvent::PointerMotion {
                    dx: mouse.movement_x() as f32,
                    dy: mouse.movement_y() as f32,
                }
            } else {
                InputEvent::CursorMoved {
                    x: mouse.offset_x() as f32,
                    y: mouse.offset_y() as f32,
                }
            })
        }
        InputKind::PointerDown | InputKind::PointerUp => {
            let mouse = event.dyn_ref::<MouseEvent>()?;
            Some(InputEvent::MouseButton {
                button: mouse_button_from_dom(mouse.button())?,
                pressed: kind == InputKind::PointerDown,
            })
        }
        InputKind::PointerLeave => Some(InputEvent::CursorLeft),
        InputKind::Wheel => {
            let wheel = event.dyn_ref::<WheelEvent>()?;
            Some(InputEvent::Scroll {
                delta_y: wheel.delta_y() as f32,
            })
        }
        InputKind::KeyDown | InputKind::KeyUp => {
            let key = event.dyn_ref::<KeyboardEvent>()?;
            Some(InputEvent::Key {
                code: key.code(),
                pressed: kind == InputKind::KeyDown,
            })
        }
        InputKind::Click => {
            let mouse = event.dyn_ref::<MouseEvent>()?;
            Some(InputEvent::Click {
                x: mouse.offset_x() as f32,
                y: mouse.offset_y() as f32,
            })
        }
    }
}

/// Whether the page's default action for `input` should be suppressed:
/// wheel zoom must not scroll the page, and bound keys must not scroll it
/// either.
#[must_use]
pub fn claims_default(input: &InputEvent, keys: &KeybindingOptions) -> bool {
    match input {
        InputEvent::Scroll { .. } => true,
        InputEvent::Key { code, .. } => keys.handles(code),
        _ => false,
    }
}

enum Queued {
    Input(InputEvent),
    Frame(FrameHandle),
}

type Waker = Rc<dyn Fn()>;

#[derive(Default)]
struct Shared {
    queue: RefCell<VecDeque<Queued>>,
    waker: RefCell<Option<Waker>>,
    pending_frame: Cell<Option<(FrameHandle, i32)>>,
    /// Keys whose default browser action is suppressed.
    handled_keys: RefCell<KeybindingOptions>,
}

impl Shared {
    fn push(&self, item: Queued) {
        self.queue.borrow_mut().push_back(item);
        let waker = self.waker.borrow().clone();
        if let Some(wake) = waker {
            wake();
        }
    }
}

struct Listener {
    target: EventTarget,
    name: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

/// [`Platform`] over a DOM element and its window.
pub struct BrowserPlatform {
    window: web_sys::Window,
    element: HtmlElement,
    shared: Rc<Shared>,
    frame_callback: Closure<dyn FnMut(f64)>,
    listeners: HashMap<ListenerId, Listener>,
    /// Removed listeners whose closures may still be on the call stack.
    retired: Vec<Listener>,
    next_id: u64,
}

impl BrowserPlatform {
    /// Platform bound to `element` (normally the canvas).
    pub fn new(element: HtmlElement) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let shared = Rc::new(Shared {
            handled_keys: RefCell::new(KeybindingOptions::arrows()),
            ..Shared::default()
        });
        let frame_shared = Rc::clone(&shared);
        let frame_callback = Closure::new(move |_timestamp: f64| {
            if let Some((handle, _)) = frame_shared.pending_frame.take() {
                frame_shared.push(Queued::Frame(handle));
            }
        });
        Ok(Self {
            window,
            element,
            shared,
            frame_callback,
            listeners: HashMap::new(),
            retired: Vec::new(),
            next_id: 0,
        })
    }

    /// Callback run after each queued DOM event or frame.
    pub fn set_waker(&self, wake: impl Fn() + 'static) {
        *self.shared.waker.borrow_mut() = Some(Rc::new(wake));
    }

    /// Keys whose default browser action (page scrolling) is suppressed.
    /// Arrows by default; pass the active bindings when they differ.
    pub fn set_handled_keys(&self, keys: KeybindingOptions) {
        *self.shared.handled_keys.borrow_mut() = keys;
    }

    fn next(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn lock_held(element: &HtmlElement, window: &web_sys::Window) -> bool {
        window
            .document()
            .and_then(|doc| doc.pointer_lock_element())
            .is_some_and(|locked| locked == **element)
    }

    fn pop(&self) -> Option<Queued> {
        self.shared.queue.borrow_mut().pop_front()
    }
}

impl Platform for BrowserPlatform {
    fn request_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next());
        match self
            .window
            .request_animation_frame(self.frame_callback.as_ref().unchecked_ref())
        {
            Ok(id) => self.shared.pending_frame.set(Some((handle, id))),
            Err(e) => log::warn!("requestAnimationFrame failed: {e:?}"),
        }
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        match self.shared.pending_frame.get() {
            Some((pending, id)) if pending == handle => {
                self.shared.pending_frame.set(None);
                if let Err(e) = self.window.cancel_animation_frame(id) {
                    log::warn!("cancelAnimationFrame failed: {e:?}");
                }
            }
            _ => {}
        }
    }

    fn add_listener(&mut self, kind: InputKind) -> ListenerId {
        self.retired.clear();
        let id = ListenerId(self.next());
        let target: EventTarget = if kind.targets_window() {
            self.window.clone().into()
        } else {
            self.element.clone().into()
        };
        let shared = Rc::clone(&self.shared);
        let element = self.element.clone();
        let window = self.window.clone();
        let callback = Closure::new(move |event: Event| {
            let locked = Self::lock_held(&element, &window);
            if let Some(input) = input_from_dom(kind, &event, locked) {
                if claims_default(&input, &shared.handled_keys.borrow()) {
                    event.prevent_default();
                }
                shared.push(Queued::Input(input));
            }
        });
        let name = kind.dom_event_name();
        if let Err(e) =
            target.add_event_listener_with_callback(name, callback.as_ref().unchecked_ref())
        {
            log::warn!("addEventListener({name}) failed: {e:?}");
        }
        let _ = self.listeners.insert(
            id,
            Listener {
                target,
                name,
                callback,
            },
        );
        id
    }

    fn remove_listener(&mut self, id: ListenerId) {
        let Some(listener) = self.listeners.remove(&id) else {
            return;
        };
        if let Err(e) = listener
            .target
            .remove_event_listener_with_callback(listener.name, listener.callback.as_ref().unchecked_ref())
        {
            log::warn!("removeEventListener({}) failed: {e:?}", listener.name);
        }
        self.retired.push(listener);
    }

    fn subscribe_view_change(&mut self) -> SubscriptionId {
        // The host forwards its camera's change event to
        // `CameraControls::view_changed`; the id only balances bookkeeping.
        SubscriptionId(self.next())
    }

    fn unsubscribe_view_change(&mut self, _id: SubscriptionId) {}

    fn request_pointer_lock(&mut self) -> bool {
        let supported =
            js_sys::Reflect::has(&self.element, &JsValue::from_str("requestPointerLock"))
                .unwrap_or(false);
        if supported {
            self.element.request_pointer_lock();
        }
        supported
    }

    fn exit_pointer_lock(&mut self) {
        if let Some(document) = self.window.document() {
            document.exit_pointer_lock();
        }
    }

    fn pointer_locked(&self) -> bool {
        Self::lock_held(&self.element, &self.window)
    }
}

impl Drop for BrowserPlatform {
    fn drop(&mut self) {
        let ids: Vec<_> = self.listeners.keys().copied().collect();
        for id in ids {
            self.remove_listener(id);
        }
        if let Some((handle, _)) = self.shared.pending_frame.get() {
            self.cancel_frame(handle);
        }
        let _ = self.shared.waker.borrow_mut().take();
    }
}

/// Drain queued DOM events and frames into `controls`.
pub fn dispatch<L: ObjectLoader, F: FloorProbe>(
    controls: &mut CameraControls<BrowserPlatform, L, F>,
) {
    while let Some(item) = controls.platform().pop() {
        match item {
            Queued::Input(event) => controls.handle_event(&event),
            Queued::Frame(handle) => controls.frame(handle, web_time::Instant::now()),
        }
    }
}
