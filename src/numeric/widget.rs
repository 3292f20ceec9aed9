//! The interactive numeric value widget.
//!
//! A [`NumericWidget`] reconciles three interaction sources into one value:
//! 1. Horizontal dragging, with or without the infinite-drag lock
//! 2. Clicking to enter text edit mode
//! 3. Arrow keys stepping by the effective step
//!
//! Every committed change is pushed into an outbox drained with
//! [`NumericWidget::take_events`].

use bevy::log::{debug, trace};

use super::bounds::Bounds;
use super::drag::{DeltaToChange, DragScaling, DragSession, PointerDown, PointerMove, process_drag};
use super::edit::{EditExit, EditSession};
use super::keys::{KeyAction, KeyResponse, KeyStepController, WidgetKey};
use super::pointer::{PointerHost, PointerId, WidgetId};
use super::transform::TransformType;

/// Default number of decimals shown.
pub const DEFAULT_PRECISION: usize = 3;

/// Notifications produced by widgets, buses and composites.
#[derive(Clone, Debug, PartialEq)]
pub enum WidgetEvent {
    /// The stored value changed.
    ValueChanged { value: f64 },
    /// Edit mode was entered or left.
    EditingChanged {
        editing: bool,
        /// Whether focus should go back to the display element.
        restore_focus: bool,
    },
}

/// Props for building a [`NumericWidget`].
#[derive(Clone, Debug)]
pub struct NumericWidgetProps {
    /// Initial value.
    pub value: f64,
    /// Range and step.
    pub bounds: Bounds,
    /// Multiplier applied to every drag-derived change.
    pub drag_factor: f64,
    /// Decimals shown in the display text.
    pub precision: usize,
    pub disabled: bool,
    /// Whether dragging asks the host for the infinite-drag lock.
    pub infinite_drag: bool,
    pub transform: TransformType,
    /// Pixel-to-value primitive.
    pub delta_to_change: DeltaToChange,
}

impl Default for NumericWidgetProps {
    fn default() -> Self {
        Self {
            value: 0.0,
            bounds: Bounds::UNBOUNDED,
            drag_factor: 1.0,
            precision: DEFAULT_PRECISION,
            disabled: false,
            infinite_drag: true,
            transform: TransformType::Raw,
            delta_to_change: process_drag,
        }
    }
}

impl NumericWidgetProps {
    /// Default props for a transform type.
    pub fn of_type(transform: TransformType) -> Self {
        Self {
            transform,
            ..Default::default()
        }
    }
}

/// One interactive numeric value control.
#[derive(Clone, Debug)]
pub struct NumericWidget {
    id: WidgetId,
    value: f64,
    bounds: Bounds,
    drag_factor: f64,
    precision: usize,
    disabled: bool,
    infinite_drag: bool,
    transform: TransformType,
    delta_to_change: DeltaToChange,
    drag: Option<DragSession>,
    edit: Option<EditSession>,
    /// Set when the last gesture moved, so the click that follows it does not edit.
    suppress_click: bool,
    keys: KeyStepController,
    events: Vec<WidgetEvent>,
}

impl Default for NumericWidget {
    fn default() -> Self {
        Self::new(NumericWidgetProps::default())
    }
}

impl NumericWidget {
    pub fn new(props: NumericWidgetProps) -> Self {
        Self {
            id: WidgetId::new(),
            value: props.value,
            bounds: props.bounds,
            drag_factor: props.drag_factor,
            precision: props.precision,
            disabled: props.disabled,
            infinite_drag: props.infinite_drag,
            transform: props.transform,
            delta_to_change: props.delta_to_change,
            drag: None,
            edit: None,
            suppress_click: false,
            keys: KeyStepController,
            events: Vec::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn drag_factor(&self) -> f64 {
        self.drag_factor
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn transform(&self) -> TransformType {
        self.transform
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_editing(&self) -> bool {
        self.edit.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The active drag gesture, if any.
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// The edit buffer, if in edit mode.
    pub fn edit_text(&self) -> Option<&str> {
        self.edit.as_ref().map(EditSession::text)
    }

    /// The value rendered for the transform type, outside edit mode.
    pub fn formatted(&self) -> String {
        self.transform.display(self.value, self.precision)
    }

    /// What presentation shows: the edit buffer while editing, else the formatted value.
    pub fn display_text(&self) -> String {
        match &self.edit {
            Some(edit) => edit.text().to_string(),
            None => self.formatted(),
        }
    }

    /// The step arrow keys and quantization use.
    pub fn effective_step(&self) -> f64 {
        self.bounds.effective_step(self.transform.default_step())
    }

    /// Drains pending notifications.
    pub fn take_events(&mut self) -> Vec<WidgetEvent> {
        std::mem::take(&mut self.events)
    }

    // -------------------------------------------------------------------------
    // Property writes
    // -------------------------------------------------------------------------

    /// Assigns the value from outside. Bounds are not applied.
    ///
    /// Returns `true` and emits a notification if the value changed.
    pub fn set_value(&mut self, value: f64) -> bool {
        self.commit(value)
    }

    /// Replaces the bounds. Takes effect from the next mutation.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    pub fn set_drag_factor(&mut self, drag_factor: f64) {
        self.drag_factor = drag_factor;
    }

    pub fn set_precision(&mut self, precision: usize) {
        self.precision = precision;
    }

    pub fn set_infinite_drag(&mut self, infinite_drag: bool) {
        self.infinite_drag = infinite_drag;
    }

    /// Enables or disables the widget.
    ///
    /// Disabling cancels an active drag, releasing its pointer resources, and
    /// closes edit mode without committing.
    pub fn set_disabled(&mut self, disabled: bool, host: &mut dyn PointerHost) {
        if self.disabled == disabled {
            return;
        }
        self.disabled = disabled;
        if !disabled {
            return;
        }
        if self.drag.is_some() {
            debug!("widget {:?} disabled mid-drag; cancelling", self.id);
            self.end_drag(host);
            self.suppress_click = true;
        }
        if self.edit.take().is_some() {
            self.events.push(WidgetEvent::EditingChanged {
                editing: false,
                restore_focus: false,
            });
        }
    }

    // -------------------------------------------------------------------------
    // Dragging
    // -------------------------------------------------------------------------

    /// Starts a drag gesture.
    ///
    /// Ignored while disabled, editing, or already dragging. Returns `true`
    /// if a session started.
    pub fn pointer_down(&mut self, event: &PointerDown, host: &mut dyn PointerHost) -> bool {
        if self.disabled || self.edit.is_some() || self.drag.is_some() {
            return false;
        }
        host.set_capture(self.id, event.pointer);
        if self.infinite_drag && host.is_lock_supported() {
            host.request_lock(self.id);
        }
        debug!("widget {:?} drag start at {}", self.id, event.position);
        self.drag = Some(DragSession::start(event.pointer, event.position));
        self.suppress_click = false;
        true
    }

    /// Applies a movement event to the active drag.
    pub fn pointer_move(&mut self, event: &PointerMove, host: &dyn PointerHost) {
        if self.disabled {
            return;
        }
        let locked = host.lock_holder() == Some(self.id);
        let scaling = DragScaling {
            delta_to_change: self.delta_to_change,
            drag_factor: self.drag_factor,
            transform: self.transform,
        };
        let Some(session) = self.drag.as_mut() else {
            return;
        };
        if session.pointer() != event.pointer {
            return;
        }
        let pixels = session.position_delta(event, locked);
        if pixels == 0.0 {
            return;
        }
        let value = session.advance(self.value, pixels, &scaling, &self.bounds);
        self.commit(value);
    }

    /// Ends the drag on pointer release.
    pub fn pointer_up(&mut self, pointer: PointerId, host: &mut dyn PointerHost) {
        if self.drag.as_ref().is_some_and(|session| session.pointer() == pointer) {
            self.end_drag(host);
        }
    }

    /// Ends the drag when the host cancels the pointer.
    pub fn pointer_cancel(&mut self, pointer: PointerId, host: &mut dyn PointerHost) {
        self.pointer_up(pointer, host);
    }

    /// A click on the display. Enters edit mode unless the gesture was a drag.
    pub fn click(&mut self) -> bool {
        if std::mem::take(&mut self.suppress_click) {
            return false;
        }
        self.begin_edit()
    }

    fn end_drag(&mut self, host: &mut dyn PointerHost) {
        let Some(session) = self.drag.take() else {
            return;
        };
        host.release_capture(self.id, session.pointer());
        if host.lock_holder() == Some(self.id) {
            host.release_lock();
        }
        self.suppress_click = session.moved();
        debug!(
            "widget {:?} drag end at {} (moved: {})",
            self.id,
            self.value,
            session.moved()
        );
    }

    // -------------------------------------------------------------------------
    // Editing
    // -------------------------------------------------------------------------

    /// Enters edit mode with the formatted value fully selected.
    pub fn begin_edit(&mut self) -> bool {
        if self.disabled || self.edit.is_some() || self.drag.is_some() {
            return false;
        }
        self.edit = Some(EditSession::new(self.formatted()));
        self.events.push(WidgetEvent::EditingChanged {
            editing: true,
            restore_focus: false,
        });
        true
    }

    /// Replaces the edit buffer with text reported by a native field.
    pub fn set_edit_text(&mut self, text: impl Into<String>) {
        if let Some(edit) = self.edit.as_mut() {
            edit.set_text(text);
        }
    }

    /// Leaves edit mode, committing the buffer if it holds a number.
    ///
    /// Malformed text is dropped without a notification.
    pub fn commit_edit(&mut self, exit: EditExit) {
        let Some(edit) = self.edit.take() else {
            return;
        };
        match edit.parsed() {
            Some(typed) => {
                let parsed = self.transform.parse(typed, self.value);
                let value = self.bounds.apply(parsed, self.transform.default_step());
                debug!("widget {:?} edit commit {} -> {}", self.id, typed, value);
                self.commit(value);
            }
            None => trace!("widget {:?} ignored edit text {:?}", self.id, edit.text()),
        }
        self.events.push(WidgetEvent::EditingChanged {
            editing: false,
            restore_focus: exit.restores_focus(),
        });
    }

    /// Leaves edit mode without touching the value.
    pub fn cancel_edit(&mut self) {
        if self.edit.take().is_some() {
            self.events.push(WidgetEvent::EditingChanged {
                editing: false,
                restore_focus: true,
            });
        }
    }

    /// Focus left the edit field.
    pub fn blur(&mut self) {
        self.commit_edit(EditExit::Blur);
    }

    // -------------------------------------------------------------------------
    // Keyboard
    // -------------------------------------------------------------------------

    pub fn key_down(&mut self, key: &WidgetKey) -> KeyResponse {
        if self.disabled {
            return KeyResponse::Ignored;
        }
        match self.keys.classify(key, self.edit.is_some()) {
            KeyAction::Step { direction } => {
                let step = self.transform.key_step(self.effective_step());
                let value = self
                    .bounds
                    .apply(self.value + direction * step, self.transform.default_step());
                self.commit(value);
                KeyResponse::HandledPreventDefault
            }
            KeyAction::BeginEdit => {
                if self.begin_edit() {
                    KeyResponse::Handled
                } else {
                    KeyResponse::Ignored
                }
            }
            KeyAction::CommitEdit => {
                self.commit_edit(EditExit::Keyboard);
                KeyResponse::Handled
            }
            KeyAction::CancelEdit => {
                self.cancel_edit();
                KeyResponse::Handled
            }
            KeyAction::Type(text) => match self.edit.as_mut() {
                Some(edit) => {
                    if edit.insert(&text) {
                        KeyResponse::Handled
                    } else {
                        KeyResponse::Ignored
                    }
                }
                None => KeyResponse::Ignored,
            },
            KeyAction::Erase => {
                if let Some(edit) = self.edit.as_mut() {
                    edit.backspace();
                }
                KeyResponse::Handled
            }
            KeyAction::Ignore => KeyResponse::Ignored,
        }
    }

    fn commit(&mut self, value: f64) -> bool {
        if value == self.value {
            return false;
        }
        self.value = value;
        self.events.push(WidgetEvent::ValueChanged { value });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::pointer::{HeadlessPointerHost, PointerLockProvider};

    const MOUSE: PointerId = PointerId(0);

    fn widget(props: NumericWidgetProps) -> NumericWidget {
        NumericWidget::new(props)
    }

    fn down(position: f64) -> PointerDown {
        PointerDown {
            pointer: MOUSE,
            position,
        }
    }

    fn move_to(position: f64) -> PointerMove {
        PointerMove {
            pointer: MOUSE,
            position,
            movement: 0.0,
        }
    }

    fn nudge(movement: f64) -> PointerMove {
        PointerMove {
            pointer: MOUSE,
            position: 0.0,
            movement,
        }
    }

    fn values(events: &[WidgetEvent]) -> Vec<f64> {
        events
            .iter()
            .filter_map(|event| match event {
                WidgetEvent::ValueChanged { value } => Some(*value),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn drag_rounds_to_nearest_step() {
        let mut host = HeadlessPointerHost::default();
        let mut number = widget(NumericWidgetProps {
            bounds: Bounds::UNBOUNDED.with_step(2.0),
            ..Default::default()
        });
        number.pointer_down(&down(0.0), &mut host);
        number.pointer_move(&move_to(3.0), &host);
        assert_eq!(number.value(), 4.0);
        assert_eq!(values(&number.take_events()), vec![4.0]);
    }

    #[test]
    fn split_drag_matches_single_drag() {
        let props = NumericWidgetProps {
            drag_factor: 0.3,
            bounds: Bounds::new(Some(-50.0), Some(50.0)).with_step(0.5),
            ..Default::default()
        };

        let mut host = HeadlessPointerHost::default();
        let mut single = widget(props.clone());
        single.pointer_down(&down(0.0), &mut host);
        single.pointer_move(&move_to(10.0), &host);
        single.pointer_up(MOUSE, &mut host);

        let mut split = widget(props);
        split.pointer_down(&down(0.0), &mut host);
        split.pointer_move(&move_to(5.0), &host);
        split.pointer_move(&move_to(10.0), &host);
        split.pointer_up(MOUSE, &mut host);

        assert_eq!(single.value(), split.value());
    }

    #[test]
    fn locked_drag_uses_relative_movement() {
        let mut host = HeadlessPointerHost::with_lock();
        let mut number = widget(NumericWidgetProps::default());
        number.pointer_down(&down(100.0), &mut host);
        assert_eq!(host.lock_holder(), Some(number.id()));

        number.pointer_move(&nudge(5.0), &host);
        number.pointer_move(&nudge(5.0), &host);
        assert_eq!(number.value(), 10.0);
        assert!(number.drag_session().is_some_and(DragSession::uses_pointer_lock));

        number.pointer_up(MOUSE, &mut host);
        assert_eq!(host.lock_holder(), None);
        assert!(!host.has_captures());
    }

    #[test]
    fn second_drag_does_not_steal_the_lock() {
        let mut host = HeadlessPointerHost::with_lock();
        let touch = PointerId(1);
        let mut first = widget(NumericWidgetProps::default());
        let mut second = widget(NumericWidgetProps::default());

        first.pointer_down(&down(0.0), &mut host);
        second.pointer_down(
            &PointerDown {
                pointer: touch,
                position: 10.0,
            },
            &mut host,
        );
        assert_eq!(host.lock_holder(), Some(first.id()));

        // Without the lock the second drag follows absolute positions.
        second.pointer_move(
            &PointerMove {
                pointer: touch,
                position: 14.0,
                movement: 100.0,
            },
            &host,
        );
        assert_eq!(second.value(), 4.0);

        second.pointer_up(touch, &mut host);
        assert_eq!(host.lock_holder(), Some(first.id()));
        first.pointer_up(MOUSE, &mut host);
        assert_eq!(host.lock_holder(), None);
    }

    #[test]
    fn lock_is_not_requested_when_disabled_by_props() {
        let mut host = HeadlessPointerHost::with_lock();
        let mut number = widget(NumericWidgetProps {
            infinite_drag: false,
            ..Default::default()
        });
        number.pointer_down(&down(0.0), &mut host);
        assert_eq!(host.lock_holder(), None);
        assert_eq!(host.capture_owner(MOUSE), Some(number.id()));
    }

    #[test]
    fn cancel_releases_capture() {
        let mut host = HeadlessPointerHost::with_lock();
        let mut number = widget(NumericWidgetProps::default());
        number.pointer_down(&down(0.0), &mut host);
        number.pointer_cancel(MOUSE, &mut host);
        assert!(!number.is_dragging());
        assert!(!host.has_captures());
        assert_eq!(host.lock_holder(), None);
    }

    #[test]
    fn click_after_drag_does_not_edit() {
        let mut host = HeadlessPointerHost::default();
        let mut number = widget(NumericWidgetProps::default());
        number.pointer_down(&down(0.0), &mut host);
        number.pointer_move(&move_to(4.0), &host);
        number.pointer_up(MOUSE, &mut host);
        assert!(!number.click());
        assert!(!number.is_editing());

        number.pointer_down(&down(4.0), &mut host);
        number.pointer_up(MOUSE, &mut host);
        assert!(number.click());
        assert_eq!(number.edit_text(), Some("4"));
    }

    #[test]
    fn disabling_mid_drag_releases_and_freezes() {
        let mut host = HeadlessPointerHost::with_lock();
        let mut number = widget(NumericWidgetProps::default());
        number.pointer_down(&down(0.0), &mut host);
        number.pointer_move(&nudge(3.0), &host);
        assert_eq!(number.value(), 3.0);
        number.set_disabled(true, &mut host);

        assert!(!number.is_dragging());
        assert!(!host.has_captures());
        assert_eq!(host.lock_holder(), None);

        number.pointer_move(&move_to(30.0), &host);
        assert_eq!(number.value(), 3.0);
    }

    #[test]
    fn disabled_widget_ignores_input() {
        let mut host = HeadlessPointerHost::default();
        let mut number = widget(NumericWidgetProps {
            disabled: true,
            value: 7.0,
            ..Default::default()
        });
        assert!(!number.pointer_down(&down(0.0), &mut host));
        number.pointer_move(&move_to(10.0), &host);
        assert_eq!(number.key_down(&WidgetKey::ArrowUp), KeyResponse::Ignored);
        assert_eq!(number.key_down(&WidgetKey::Enter), KeyResponse::Ignored);
        assert!(!number.click());
        assert_eq!(number.value(), 7.0);
        assert!(number.take_events().is_empty());
        assert!(!host.has_captures());
    }

    #[test]
    fn arrow_keys_step_and_clamp() {
        let mut number = widget(NumericWidgetProps {
            value: 9.0,
            bounds: Bounds::new(Some(0.0), Some(10.0)),
            ..Default::default()
        });
        assert_eq!(
            number.key_down(&WidgetKey::ArrowUp),
            KeyResponse::HandledPreventDefault
        );
        number.key_down(&WidgetKey::ArrowRight);
        assert_eq!(number.value(), 10.0);
        number.key_down(&WidgetKey::ArrowDown);
        number.key_down(&WidgetKey::ArrowLeft);
        assert_eq!(number.value(), 8.0);
        // The clamped second step produced no change, so no notification.
        assert_eq!(values(&number.take_events()), vec![10.0, 9.0, 8.0]);
    }

    #[test]
    fn percent_keys_step_by_one_percent() {
        let mut number = widget(NumericWidgetProps {
            value: 0.5,
            ..NumericWidgetProps::of_type(TransformType::Percent)
        });
        number.key_down(&WidgetKey::ArrowUp);
        assert!((number.value() - 0.51).abs() < 1e-9);
        assert_eq!(number.formatted(), "51");
    }

    #[test]
    fn rotation_keys_step_whole_turns() {
        let mut number = widget(NumericWidgetProps {
            value: 390.0,
            ..NumericWidgetProps::of_type(TransformType::WholeRotation)
        });
        number.key_down(&WidgetKey::ArrowUp);
        assert_eq!(number.value(), 750.0);
        assert_eq!(number.formatted(), "2");
    }

    #[test]
    fn rotation_keys_ignore_degree_step_size() {
        let mut number = widget(NumericWidgetProps {
            bounds: Bounds::UNBOUNDED.with_step(15.0),
            ..NumericWidgetProps::of_type(TransformType::WholeRotation)
        });
        number.key_down(&WidgetKey::ArrowUp);
        assert_eq!(number.value(), 360.0);
        assert_eq!(number.formatted(), "1");
        number.key_down(&WidgetKey::ArrowDown);
        number.key_down(&WidgetKey::ArrowDown);
        assert_eq!(number.value(), -360.0);
    }

    #[test]
    fn part_rotation_keys_use_declared_step() {
        let mut number = widget(NumericWidgetProps {
            bounds: Bounds::UNBOUNDED.with_step(15.0),
            ..NumericWidgetProps::of_type(TransformType::PartRotation)
        });
        number.key_down(&WidgetKey::ArrowUp);
        assert_eq!(number.value(), 15.0);
        assert_eq!(number.display_text(), "+15");
    }

    #[test]
    fn enter_edits_and_commits_through_bounds() {
        let mut number = widget(NumericWidgetProps {
            bounds: Bounds::new(None, Some(5.0)),
            ..Default::default()
        });
        assert_eq!(number.key_down(&WidgetKey::Enter), KeyResponse::Handled);
        assert_eq!(
            number.take_events(),
            vec![WidgetEvent::EditingChanged {
                editing: true,
                restore_focus: false
            }]
        );
        assert_eq!(number.display_text(), "0");

        number.key_down(&WidgetKey::Character("1".into()));
        number.key_down(&WidgetKey::Character("0".into()));
        assert_eq!(number.display_text(), "10");
        number.key_down(&WidgetKey::Enter);

        assert_eq!(number.value(), 5.0);
        assert_eq!(
            number.take_events(),
            vec![
                WidgetEvent::ValueChanged { value: 5.0 },
                WidgetEvent::EditingChanged {
                    editing: false,
                    restore_focus: true
                },
            ]
        );
    }

    #[test]
    fn blur_with_garbage_is_silently_ignored() {
        let mut number = widget(NumericWidgetProps {
            value: 3.0,
            ..Default::default()
        });
        assert!(number.click());
        number.set_edit_text("abc");
        number.take_events();
        number.blur();

        assert_eq!(number.value(), 3.0);
        assert!(!number.is_editing());
        assert_eq!(
            number.take_events(),
            vec![WidgetEvent::EditingChanged {
                editing: false,
                restore_focus: false
            }]
        );
    }

    #[test]
    fn blur_with_number_commits_clamped() {
        let mut number = widget(NumericWidgetProps {
            bounds: Bounds::new(None, Some(5.0)),
            ..Default::default()
        });
        number.click();
        number.set_edit_text("10");
        number.blur();
        assert_eq!(number.value(), 5.0);
        assert_eq!(values(&number.take_events()), vec![5.0]);
    }

    #[test]
    fn escape_cancels_without_change() {
        let mut number = widget(NumericWidgetProps {
            value: 2.0,
            ..Default::default()
        });
        number.begin_edit();
        number.set_edit_text("99");
        number.key_down(&WidgetKey::Escape);
        assert_eq!(number.value(), 2.0);
        assert!(!number.is_editing());
        assert!(values(&number.take_events()).is_empty());
    }

    #[test]
    fn part_rotation_edit_keeps_turns() {
        let mut number = widget(NumericWidgetProps {
            value: 750.0,
            ..NumericWidgetProps::of_type(TransformType::PartRotation)
        });
        number.begin_edit();
        assert_eq!(number.edit_text(), Some("+30"));
        number.set_edit_text("45");
        number.commit_edit(EditExit::Keyboard);
        assert_eq!(number.value(), 765.0);
    }

    #[test]
    fn drag_and_edit_are_exclusive() {
        let mut host = HeadlessPointerHost::default();
        let mut number = widget(NumericWidgetProps::default());
        number.begin_edit();
        assert!(!number.pointer_down(&down(0.0), &mut host));

        number.cancel_edit();
        number.pointer_down(&down(0.0), &mut host);
        assert!(!number.begin_edit());
        assert_eq!(number.key_down(&WidgetKey::Enter), KeyResponse::Ignored);
    }

    #[test]
    fn disabling_closes_edit_without_commit() {
        let mut host = HeadlessPointerHost::default();
        let mut number = widget(NumericWidgetProps::default());
        number.begin_edit();
        number.set_edit_text("8");
        number.take_events();
        number.set_disabled(true, &mut host);
        assert!(!number.is_editing());
        assert_eq!(number.value(), 0.0);
        assert_eq!(
            number.take_events(),
            vec![WidgetEvent::EditingChanged {
                editing: false,
                restore_focus: false
            }]
        );
    }

    #[test]
    fn external_assignment_bypasses_bounds() {
        let mut number = widget(NumericWidgetProps {
            bounds: Bounds::new(Some(0.0), Some(1.0)),
            ..Default::default()
        });
        assert!(number.set_value(42.5));
        assert!(!number.set_value(42.5));
        assert_eq!(number.value(), 42.5);
        assert_eq!(values(&number.take_events()), vec![42.5]);
    }

    #[test]
    fn custom_delta_to_change_and_factor_apply() {
        fn doubled(pixels: f64) -> f64 {
            pixels * 2.0
        }
        let mut host = HeadlessPointerHost::default();
        let mut number = widget(NumericWidgetProps {
            delta_to_change: doubled,
            drag_factor: 3.0,
            ..Default::default()
        });
        number.pointer_down(&down(0.0), &mut host);
        number.pointer_move(&move_to(2.0), &host);
        assert_eq!(number.value(), 12.0);
    }
}
