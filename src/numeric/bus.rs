//! Synchronizing container: one logical value mirrored across child widgets.
//!
//! Children are owned by the bus and interacted with through
//! [`ValueBus::dispatch`], which drains the child's notifications before it
//! returns. A change from one child is copied into every other child, never
//! back into the originator, and yields exactly one bus notification.

use bevy::log::trace;

use super::pointer::PointerHost;
use super::widget::{NumericWidget, WidgetEvent};

/// Anything a [`ValueBus`] can mirror its value into.
pub trait BusMember {
    fn value(&self) -> f64;

    /// External assignment. Returns `true` if the value changed.
    fn set_value(&mut self, value: f64) -> bool;

    fn set_disabled(&mut self, disabled: bool, host: &mut dyn PointerHost);

    /// Drains pending notifications.
    fn take_events(&mut self) -> Vec<WidgetEvent>;
}

impl BusMember for NumericWidget {
    fn value(&self) -> f64 {
        NumericWidget::value(self)
    }

    fn set_value(&mut self, value: f64) -> bool {
        NumericWidget::set_value(self, value)
    }

    fn set_disabled(&mut self, disabled: bool, host: &mut dyn PointerHost) {
        NumericWidget::set_disabled(self, disabled, host);
    }

    fn take_events(&mut self) -> Vec<WidgetEvent> {
        NumericWidget::take_events(self)
    }
}

/// Handle to a child attached to a bus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChildId(u32);

/// Notifications produced by a bus.
#[derive(Clone, Debug, PartialEq)]
pub enum BusEvent {
    /// The bus value changed, from a child or from outside.
    ValueChanged { value: f64 },
    /// A child entered or left edit mode.
    ChildEditingChanged {
        child: ChildId,
        editing: bool,
        restore_focus: bool,
    },
}

/// Mirrors one value across any number of children.
#[derive(Debug)]
pub struct ValueBus<M> {
    value: f64,
    disabled: bool,
    children: Vec<(ChildId, M)>,
    next_child: u32,
    events: Vec<BusEvent>,
}

impl<M: BusMember> Default for ValueBus<M> {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl<M: BusMember> ValueBus<M> {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            disabled: false,
            children: Vec::new(),
            next_child: 0,
            events: Vec::new(),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn child(&self, id: ChildId) -> Option<&M> {
        self.children
            .iter()
            .find(|(child, _)| *child == id)
            .map(|(_, member)| member)
    }

    pub fn children(&self) -> impl Iterator<Item = (ChildId, &M)> {
        self.children.iter().map(|(id, member)| (*id, member))
    }

    /// Attaches a child, pushing the current value and disabled state into it.
    pub fn attach(&mut self, mut child: M, host: &mut dyn PointerHost) -> ChildId {
        child.set_value(self.value);
        child.set_disabled(self.disabled, host);
        // Initial mirroring is not a change the child originated.
        child.take_events();

        let id = ChildId(self.next_child);
        self.next_child += 1;
        self.children.push((id, child));
        trace!("bus attached child {:?} at {}", id, self.value);
        id
    }

    /// Detaches a child. Nothing it does afterwards reaches the bus.
    pub fn detach(&mut self, id: ChildId) -> Option<M> {
        let index = self.index_of(id)?;
        let (_, child) = self.children.remove(index);
        trace!("bus detached child {:?}", id);
        Some(child)
    }

    /// Runs an interaction on one child, then reconciles whatever it changed.
    ///
    /// Returns `None` if `id` is not attached.
    pub fn dispatch<R>(&mut self, id: ChildId, interact: impl FnOnce(&mut M) -> R) -> Option<R> {
        let index = self.index_of(id)?;
        let result = interact(&mut self.children[index].1);
        let events = self.children[index].1.take_events();
        for event in events {
            self.route(id, event);
        }
        Some(result)
    }

    /// Assigns the bus value from outside and mirrors it into every child.
    ///
    /// Returns `true` and emits a notification if the value changed.
    pub fn set_value(&mut self, value: f64) -> bool {
        if value == self.value {
            return false;
        }
        self.value = value;
        self.mirror(None);
        self.events.push(BusEvent::ValueChanged { value });
        true
    }

    /// Forwards the disabled state to every child.
    pub fn set_disabled(&mut self, disabled: bool, host: &mut dyn PointerHost) {
        self.disabled = disabled;
        let ids: Vec<ChildId> = self.children.iter().map(|(id, _)| *id).collect();
        for id in ids {
            self.dispatch(id, |child| child.set_disabled(disabled, &mut *host));
        }
    }

    /// Drains pending notifications.
    pub fn take_events(&mut self) -> Vec<BusEvent> {
        std::mem::take(&mut self.events)
    }

    fn index_of(&self, id: ChildId) -> Option<usize> {
        self.children.iter().position(|(child, _)| *child == id)
    }

    fn route(&mut self, origin: ChildId, event: WidgetEvent) {
        match event {
            WidgetEvent::ValueChanged { value } => self.adopt(origin, value),
            WidgetEvent::EditingChanged {
                editing,
                restore_focus,
            } => self.events.push(BusEvent::ChildEditingChanged {
                child: origin,
                editing,
                restore_focus,
            }),
        }
    }

    fn adopt(&mut self, origin: ChildId, value: f64) {
        if value == self.value {
            return;
        }
        self.value = value;
        self.mirror(Some(origin));
        self.events.push(BusEvent::ValueChanged { value });
    }

    fn mirror(&mut self, skip: Option<ChildId>) {
        let value = self.value;
        for (id, child) in &mut self.children {
            if Some(*id) == skip {
                continue;
            }
            child.set_value(value);
            // Echoes of the mirror write, not new changes.
            child.take_events();
        }
    }
}
