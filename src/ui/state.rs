//! Shared state for property inputs: pointer ownership and deferred clicks.

use bevy::prelude::*;

use crate::numeric::{
    HeadlessPointerHost, PointerCapture, PointerId, PointerLockProvider, WidgetId,
};

/// Widget pointer id of the mouse.
pub const MOUSE_POINTER: PointerId = PointerId(0);

/// Pointer capture and infinite-drag lock, owned by at most one widget at a time.
///
/// While the mouse holds the lock the window cursor is grabbed and hidden, and
/// drag movement comes from raw mouse motion instead of picking.
#[derive(Resource, Debug, Default)]
pub struct PointerGrab {
    host: HeadlessPointerHost,
}

impl PointerGrab {
    pub fn new(lock_supported: bool) -> Self {
        Self {
            host: HeadlessPointerHost {
                lock_supported,
                ..Default::default()
            },
        }
    }

    /// Whether a drag currently holds any pointer.
    pub fn is_grabbed(&self) -> bool {
        self.host.has_captures()
    }

    /// The widget whose drag holds `pointer`.
    pub fn capture_owner(&self, pointer: PointerId) -> Option<WidgetId> {
        self.host.capture_owner(pointer)
    }

    /// Every `(widget, pointer)` capture currently held.
    pub fn captures(&self) -> impl Iterator<Item = (WidgetId, PointerId)> + '_ {
        self.host.captures()
    }

    /// The lock holder, if it is dragging with the mouse.
    pub fn mouse_lock_holder(&self) -> Option<WidgetId> {
        self.host
            .lock_holder()
            .filter(|holder| self.host.capture_owner(MOUSE_POINTER) == Some(*holder))
    }
}

impl PointerLockProvider for PointerGrab {
    fn is_lock_supported(&self) -> bool {
        self.host.is_lock_supported()
    }

    fn request_lock(&mut self, target: WidgetId) {
        debug!("Infinite-drag lock requested by {:?}", target);
        self.host.request_lock(target);
    }

    fn release_lock(&mut self) {
        debug!("Infinite-drag lock released");
        self.host.release_lock();
    }

    fn lock_holder(&self) -> Option<WidgetId> {
        self.host.lock_holder()
    }
}

impl PointerCapture for PointerGrab {
    fn set_capture(&mut self, target: WidgetId, pointer: PointerId) {
        self.host.set_capture(target, pointer);
    }

    fn release_capture(&mut self, target: WidgetId, pointer: PointerId) {
        self.host.release_capture(target, pointer);
    }
}

/// Facet entities clicked this frame.
///
/// Picking delivers `Click` before the release that ends a drag, so clicks
/// are applied once the gesture is over.
#[derive(Resource, Default)]
pub struct PendingClicks {
    pub facets: Vec<Entity>,
}
