//! Host capabilities for exclusive pointer ownership during a drag.
//!
//! A widget never reaches for ambient environment state: the pointer capture
//! and the infinite-drag lock are injected as a [`PointerHost`] on every call
//! that can start or end a drag.

use std::sync::atomic::{AtomicU64, Ordering};

use bevy::log::{trace, warn};

/// Unique identifier for a widget instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(u64);

impl WidgetId {
    /// Allocates a fresh id.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw id value.
    pub fn to_raw(self) -> u64 {
        self.0
    }
}

impl Default for WidgetId {
    fn default() -> Self {
        Self::new()
    }
}

/// Identifies the pointer (mouse, touch contact, pen) driving a gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

/// Infinite-drag lock: movement reported as unbounded relative deltas.
pub trait PointerLockProvider {
    /// Whether the environment can provide relative movement at all.
    fn is_lock_supported(&self) -> bool;

    /// Asks for the lock on behalf of `target`. The grant may arrive later.
    fn request_lock(&mut self, target: WidgetId);

    /// Gives the lock up. Best effort.
    fn release_lock(&mut self);

    /// The widget currently holding the lock.
    fn lock_holder(&self) -> Option<WidgetId>;
}

/// Exclusive routing of a pointer's events to one widget.
pub trait PointerCapture {
    fn set_capture(&mut self, target: WidgetId, pointer: PointerId);

    /// Releases a capture. Best effort; never fails.
    fn release_capture(&mut self, target: WidgetId, pointer: PointerId);
}

/// Everything a drag needs from the host environment.
pub trait PointerHost: PointerLockProvider + PointerCapture {}

impl<T: PointerLockProvider + PointerCapture> PointerHost for T {}

/// In-memory pointer host.
///
/// Grants lock requests immediately when `lock_supported` is set and no other
/// widget holds the lock. Used by
/// headless hosts and tests, and wrapped by the Bevy integration.
#[derive(Debug, Default)]
pub struct HeadlessPointerHost {
    /// Whether lock requests are granted.
    pub lock_supported: bool,
    pub(crate) lock_holder: Option<WidgetId>,
    pub(crate) captures: Vec<(WidgetId, PointerId)>,
}

impl HeadlessPointerHost {
    /// A host that grants infinite-drag lock requests.
    pub fn with_lock() -> Self {
        Self {
            lock_supported: true,
            ..Default::default()
        }
    }

    /// The widget holding `pointer`, if captured.
    pub fn capture_owner(&self, pointer: PointerId) -> Option<WidgetId> {
        self.captures
            .iter()
            .find(|(_, captured)| *captured == pointer)
            .map(|(owner, _)| *owner)
    }

    /// Every `(widget, pointer)` capture currently held.
    pub fn captures(&self) -> impl Iterator<Item = (WidgetId, PointerId)> + '_ {
        self.captures.iter().copied()
    }

    /// Whether any pointer is currently captured.
    pub fn has_captures(&self) -> bool {
        !self.captures.is_empty()
    }
}

impl PointerLockProvider for HeadlessPointerHost {
    fn is_lock_supported(&self) -> bool {
        self.lock_supported
    }

    fn request_lock(&mut self, target: WidgetId) {
        if !self.lock_supported {
            return;
        }
        match self.lock_holder {
            Some(holder) if holder != target => {
                trace!("pointer lock held by {:?}, refused for {:?}", holder, target);
            }
            _ => {
                trace!("pointer lock granted to {:?}", target);
                self.lock_holder = Some(target);
            }
        }
    }

    fn release_lock(&mut self) {
        self.lock_holder = None;
    }

    fn lock_holder(&self) -> Option<WidgetId> {
        self.lock_holder
    }
}

impl PointerCapture for HeadlessPointerHost {
    fn set_capture(&mut self, target: WidgetId, pointer: PointerId) {
        // A pointer is routed to one widget at a time.
        self.captures.retain(|(_, captured)| *captured != pointer);
        self.captures.push((target, pointer));
    }

    fn release_capture(&mut self, target: WidgetId, pointer: PointerId) {
        let before = self.captures.len();
        self.captures.retain(|entry| *entry != (target, pointer));
        if self.captures.len() == before {
            warn!("release of pointer {:?} not captured by {:?}", pointer, target);
        }
    }
}
