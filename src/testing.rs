//! Recording collaborators for unit tests.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use glam::Vec3;

use crate::camera::{CameraState, ViewRect};
use crate::controls::{FrameHandle, ListenerId, Platform, SubscriptionId};
use crate::input::InputKind;
use crate::load::{ObjectId, ObjectLoader};

/// Platform that records every registration and hands out sequential
/// handles. Frames stay pending until a test takes them.
#[derive(Debug, Default)]
pub(crate) struct MockPlatform {
    pub next_id: u64,
    pub pending: BTreeSet<FrameHandle>,
    pub frames_requested: usize,
    pub listeners: BTreeMap<ListenerId, InputKind>,
    pub subscriptions: BTreeSet<SubscriptionId>,
    pub grant_pointer_lock: bool,
    pub pointer_locked: bool,
    pub lock_requests: usize,
    pub lock_exits: usize,
}

impl MockPlatform {
    fn next(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    pub fn outstanding_frames(&self) -> usize {
        self.pending.len()
    }

    pub fn active_listeners(&self) -> usize {
        self.listeners.len()
    }

    pub fn pending_frames(&self) -> impl Iterator<Item = FrameHandle> + '_ {
        self.pending.iter().copied()
    }

    /// Fire the oldest pending frame, the way the browser would.
    pub fn take_frame(&mut self) -> Option<FrameHandle> {
        self.pending.pop_first()
    }
}

impl Platform for MockPlatform {
    fn request_frame(&mut self) -> FrameHandle {
        self.frames_requested += 1;
        let handle = FrameHandle(self.next());
        let _ = self.pending.insert(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let _ = self.pending.remove(&handle);
    }

    fn add_listener(&mut self, kind: InputKind) -> ListenerId {
        let id = ListenerId(self.next());
        let _ = self.listeners.insert(id, kind);
        id
    }

    fn remove_listener(&mut self, id: ListenerId) {
        let _ = self.listeners.remove(&id);
    }

    fn subscribe_view_change(&mut self) -> SubscriptionId {
        let id = SubscriptionId(self.next());
        let _ = self.subscriptions.insert(id);
        id
    }

    fn unsubscribe_view_change(&mut self, id: SubscriptionId) {
        let _ = self.subscriptions.remove(&id);
    }

    fn request_pointer_lock(&mut self) -> bool {
        self.lock_requests += 1;
        self.pointer_locked = self.grant_pointer_lock;
        self.pointer_locked
    }

    fn exit_pointer_lock(&mut self) {
        self.lock_exits += 1;
        self.pointer_locked = false;
    }

    fn pointer_locked(&self) -> bool {
        self.pointer_locked
    }
}

/// Shared handle so a test can inspect the platform after the session
/// that owns it is gone.
impl Platform for Rc<RefCell<MockPlatform>> {
    fn request_frame(&mut self) -> FrameHandle {
        self.borrow_mut().request_frame()
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.borrow_mut().cancel_frame(handle);
    }

    fn add_listener(&mut self, kind: InputKind) -> ListenerId {
        self.borrow_mut().add_listener(kind)
    }

    fn remove_listener(&mut self, id: ListenerId) {
        self.borrow_mut().remove_listener(id);
    }

    fn subscribe_view_change(&mut self) -> SubscriptionId {
        self.borrow_mut().subscribe_view_change()
    }

    fn unsubscribe_view_change(&mut self, id: SubscriptionId) {
        self.borrow_mut().unsubscribe_view_change(id);
    }

    fn request_pointer_lock(&mut self) -> bool {
        self.borrow_mut().request_pointer_lock()
    }

    fn exit_pointer_lock(&mut self) {
        self.borrow_mut().exit_pointer_lock();
    }

    fn pointer_locked(&self) -> bool {
        self.borrow().pointer_locked
    }
}

/// One call made against a [`RecordingLoader`].
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum LoaderCall {
    IdsAround { point: Vec3, distance: f32 },
    IdsFromCamera { extra: f32 },
    IdsAway { point: Vec3, distance: f32 },
    Load(Vec<ObjectId>),
    LoadRegion(ViewRect),
    Hide(Vec<ObjectId>),
}

/// Loader that records calls and answers every id query with the same
/// list.
#[derive(Debug, Default)]
pub(crate) struct RecordingLoader {
    ids: Vec<ObjectId>,
    pub calls: Vec<LoaderCall>,
}

impl RecordingLoader {
    pub fn with_ids(ids: Vec<ObjectId>) -> Self {
        Self {
            ids,
            calls: Vec::new(),
        }
    }
}

impl ObjectLoader for RecordingLoader {
    fn ids_around_point(&mut self, point: Vec3, distance: f32) -> Vec<ObjectId> {
        self.calls.push(LoaderCall::IdsAround { point, distance });
        self.ids.clone()
    }

    fn ids_from_camera(&mut self, _camera: &CameraState, extra: f32) -> Vec<ObjectId> {
        self.calls.push(LoaderCall::IdsFromCamera { extra });
        self.ids.clone()
    }

    fn ids_away_from_point(&mut self, point: Vec3, distance: f32) -> Vec<ObjectId> {
        self.calls.push(LoaderCall::IdsAway { point, distance });
        self.ids.clone()
    }

    fn load_objects(&mut self, ids: &[ObjectId]) {
        self.calls.push(LoaderCall::Load(ids.to_vec()));
    }

    fn load_region(&mut self, region: &ViewRect) {
        self.calls.push(LoaderCall::LoadRegion(*region));
    }

    fn hide_objects(&mut self, ids: &[ObjectId]) {
        self.calls.push(LoaderCall::Hide(ids.to_vec()));
    }
}
