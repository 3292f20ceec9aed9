//! Property input widget - draggable, click-to-edit numeric facets.
//!
//! Each facet of a [`CompositeWidget`] is a UI node that can be:
//! 1. Dragged horizontally to scrub the value
//! 2. Clicked (without dragging) to enter text input mode
//! 3. Stepped with the arrow keys while focused

use bevy::ecs::event::Event;
use bevy::ecs::observer::On;
use bevy::input::ButtonState;
use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::input_focus::{FocusedInput, InputFocus};
use bevy::picking::events::{Cancel, Click, Drag, DragEnd, Pointer, Press, Release};
use bevy::picking::pointer::{PointerButton, PointerId as PickingPointerId, PointerPress};
use bevy::prelude::*;
use bevy::window::{CursorGrabMode, CursorOptions, PrimaryWindow};

use crate::numeric::{
    CompositeKind, CompositeProps, CompositeWidget, Facet, KeyResponse, NumericWidget,
    PointerDown, PointerId, PointerMove, WidgetEvent, WidgetId, WidgetKey,
};
use crate::ui::config::PropertyInputConfig;
use crate::ui::state::{MOUSE_POINTER, PendingClicks, PointerGrab};

/// A numeric property input. Lives on the container entity; its facets are children.
#[derive(Component)]
pub struct PropertyInput {
    widget: CompositeWidget,
    facet_entities: Vec<(Facet, Entity)>,
}

impl PropertyInput {
    pub fn new(widget: CompositeWidget, facet_entities: Vec<(Facet, Entity)>) -> Self {
        Self {
            widget,
            facet_entities,
        }
    }

    pub fn widget(&self) -> &CompositeWidget {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut CompositeWidget {
        &mut self.widget
    }

    /// The facet whose widget is `id`.
    pub fn facet_with_id(&self, id: WidgetId) -> Option<Facet> {
        self.widget.facets().find(|facet| {
            self.widget
                .facet(*facet)
                .is_some_and(|widget| widget.id() == id)
        })
    }

    /// The UI node showing `facet`.
    pub fn facet_entity(&self, facet: Facet) -> Option<Entity> {
        self.facet_entities
            .iter()
            .find(|(shown, _)| *shown == facet)
            .map(|(_, entity)| *entity)
    }
}

/// Marks a UI node that shows one facet of a [`PropertyInput`].
#[derive(Component, Clone, Copy, Debug)]
pub struct PropertyInputFacet {
    /// The entity holding the [`PropertyInput`].
    pub owner: Entity,
    pub facet: Facet,
}

/// Event emitted when a property input's value changes.
#[derive(Event, Clone, Debug)]
pub struct PropertyInputChanged {
    /// The entity holding the [`PropertyInput`].
    pub source: Entity,
    /// The new value.
    pub value: f64,
}

/// Event emitted when a facet enters or leaves edit mode.
#[derive(Event, Clone, Debug)]
pub struct PropertyInputEditModeChanged {
    /// The facet node.
    pub entity: Entity,
    pub editing: bool,
}

/// Assigns a property input's value from outside.
#[derive(Event, Clone, Debug)]
pub struct SetPropertyInputValue {
    pub entity: Entity,
    pub value: f64,
}

/// Enables or disables a property input.
#[derive(Event, Clone, Debug)]
pub struct SetPropertyInputDisabled {
    pub entity: Entity,
    pub disabled: bool,
}

/// Spawns a property input and its facet nodes. Returns the container entity.
pub fn spawn_property_input(
    commands: &mut Commands,
    kind: CompositeKind,
    props: CompositeProps,
    config: &PropertyInputConfig,
) -> Entity {
    let widget = CompositeWidget::new(kind, props);
    let owner = commands
        .spawn((
            Node {
                flex_direction: FlexDirection::Row,
                align_items: AlignItems::Center,
                column_gap: config.facet_gap,
                ..default()
            },
            Name::new(format!("PropertyInput({kind:?})")),
        ))
        .id();

    let mut facet_entities = Vec::new();
    commands.entity(owner).with_children(|parent| {
        for facet in kind.facets() {
            let shown = widget
                .facet(*facet)
                .map(NumericWidget::formatted)
                .unwrap_or_default();
            let entity = parent
                .spawn((
                    Node {
                        min_width: config.facet_min_width,
                        padding: config.facet_padding,
                        border: UiRect::all(Val::Px(1.0)),
                        ..default()
                    },
                    BorderColor::all(config.border_color),
                    BackgroundColor(config.background_color),
                    PropertyInputFacet {
                        owner,
                        facet: *facet,
                    },
                    Text::new(shown),
                    TextFont {
                        font_size: config.font_size,
                        ..default()
                    },
                    TextColor(config.text_color),
                    Interaction::default(),
                ))
                .id();
            facet_entities.push((*facet, entity));

            if let Some(label) = facet_suffix(*facet) {
                parent.spawn((
                    Text::new(label),
                    TextFont {
                        font_size: config.font_size,
                        ..default()
                    },
                    TextColor(config.disabled_text_color),
                ));
            }
        }
    });

    commands
        .entity(owner)
        .insert(PropertyInput::new(widget, facet_entities));
    owner
}

/// Static label shown after a facet.
fn facet_suffix(facet: Facet) -> Option<&'static str> {
    match facet {
        Facet::Rotations => Some("x"),
        Facet::Degrees => Some("°"),
        Facet::Percent => Some("%"),
        Facet::Value => None,
    }
}

/// Maps a picking pointer to the widget's pointer id.
fn pointer_id(id: PickingPointerId) -> PointerId {
    match id {
        PickingPointerId::Mouse => MOUSE_POINTER,
        PickingPointerId::Touch(touch) => PointerId(touch.wrapping_add(1)),
        PickingPointerId::Custom(_) => PointerId(u64::MAX),
    }
}

/// Maps a logical key to a widget key.
pub fn widget_key(key: &Key) -> WidgetKey {
    match key {
        Key::ArrowUp => WidgetKey::ArrowUp,
        Key::ArrowDown => WidgetKey::ArrowDown,
        Key::ArrowLeft => WidgetKey::ArrowLeft,
        Key::ArrowRight => WidgetKey::ArrowRight,
        Key::Enter => WidgetKey::Enter,
        Key::Escape => WidgetKey::Escape,
        Key::Backspace => WidgetKey::Backspace,
        Key::Character(text) => WidgetKey::Character(text.to_string()),
        _ => WidgetKey::Other,
    }
}

/// Helper: drain the widget's outbox into events and focus changes.
fn forward_events(
    owner: Entity,
    facet: Option<Facet>,
    input: &mut PropertyInput,
    input_focus: &mut InputFocus,
    commands: &mut Commands,
) {
    let facet_entity = facet.and_then(|facet| input.facet_entity(facet));
    for event in input.widget.take_events() {
        match event {
            WidgetEvent::ValueChanged { value } => {
                commands.trigger(PropertyInputChanged {
                    source: owner,
                    value,
                });
            }
            WidgetEvent::EditingChanged {
                editing,
                restore_focus,
            } => {
                let Some(entity) = facet_entity else {
                    continue;
                };
                if editing || restore_focus {
                    input_focus.set(entity);
                }
                commands.trigger(PropertyInputEditModeChanged { entity, editing });
            }
        }
    }
}

// Observer: pointer pressed on a facet starts a drag session
fn property_input_on_press(
    mut press: On<Pointer<Press>>,
    q_facets: Query<&PropertyInputFacet>,
    mut q_inputs: Query<&mut PropertyInput>,
    mut grab: ResMut<PointerGrab>,
    mut input_focus: ResMut<InputFocus>,
) {
    if press.button != PointerButton::Primary {
        return;
    }
    let Ok(facet) = q_facets.get(press.entity).copied() else {
        return;
    };
    let Ok(mut input) = q_inputs.get_mut(facet.owner) else {
        return;
    };
    press.propagate(false);

    // Focus follows the pointer, which also blurs a facet being edited elsewhere.
    input_focus.set(press.entity);

    let down = PointerDown {
        pointer: pointer_id(press.pointer_id),
        position: press.pointer_location.position.x as f64,
    };
    input
        .widget_mut()
        .dispatch(facet.facet, |widget| widget.pointer_down(&down, &mut *grab));
}

// Observer: drag movement scrubs the value
fn property_input_on_drag(
    mut drag: On<Pointer<Drag>>,
    q_facets: Query<&PropertyInputFacet>,
    mut q_inputs: Query<&mut PropertyInput>,
    grab: Res<PointerGrab>,
    mut input_focus: ResMut<InputFocus>,
    mut commands: Commands,
) {
    let Ok(facet) = q_facets.get(drag.entity).copied() else {
        return;
    };
    let Ok(mut input) = q_inputs.get_mut(facet.owner) else {
        return;
    };
    drag.propagate(false);

    // A mouse drag holding the lock is driven by raw motion instead.
    if grab.mouse_lock_holder().and_then(|id| input.facet_with_id(id)) == Some(facet.facet) {
        return;
    }

    let movement = PointerMove {
        pointer: pointer_id(drag.pointer_id),
        position: drag.pointer_location.position.x as f64,
        movement: drag.delta.x as f64,
    };
    input
        .widget_mut()
        .dispatch(facet.facet, |widget| widget.pointer_move(&movement, &*grab));
    forward_events(
        facet.owner,
        Some(facet.facet),
        &mut input,
        &mut input_focus,
        &mut commands,
    );
}

/// Helper: end the drag on a facet, if one is active.
fn end_facet_drag(
    entity: Entity,
    pointer: PickingPointerId,
    cancelled: bool,
    q_facets: &Query<&PropertyInputFacet>,
    q_inputs: &mut Query<&mut PropertyInput>,
    grab: &mut PointerGrab,
) {
    let Ok(facet) = q_facets.get(entity).copied() else {
        return;
    };
    let Ok(mut input) = q_inputs.get_mut(facet.owner) else {
        return;
    };
    let pointer = pointer_id(pointer);
    input.widget_mut().dispatch(facet.facet, |widget| {
        if cancelled {
            widget.pointer_cancel(pointer, grab);
        } else {
            widget.pointer_up(pointer, grab);
        }
    });
}

// Observer: pointer released over the facet
fn property_input_on_release(
    release: On<Pointer<Release>>,
    q_facets: Query<&PropertyInputFacet>,
    mut q_inputs: Query<&mut PropertyInput>,
    mut grab: ResMut<PointerGrab>,
) {
    end_facet_drag(
        release.entity,
        release.pointer_id,
        false,
        &q_facets,
        &mut q_inputs,
        &mut grab,
    );
}

// Observer: drag ended, wherever the pointer was released
fn property_input_on_drag_end(
    mut drag_end: On<Pointer<DragEnd>>,
    q_facets: Query<&PropertyInputFacet>,
    mut q_inputs: Query<&mut PropertyInput>,
    mut grab: ResMut<PointerGrab>,
) {
    if q_facets.contains(drag_end.entity) {
        drag_end.propagate(false);
    }
    end_facet_drag(
        drag_end.entity,
        drag_end.pointer_id,
        false,
        &q_facets,
        &mut q_inputs,
        &mut grab,
    );
}

// Observer: the host cancelled the pointer
fn property_input_on_cancel(
    cancel: On<Pointer<Cancel>>,
    q_facets: Query<&PropertyInputFacet>,
    mut q_inputs: Query<&mut PropertyInput>,
    mut grab: ResMut<PointerGrab>,
) {
    end_facet_drag(
        cancel.entity,
        cancel.pointer_id,
        true,
        &q_facets,
        &mut q_inputs,
        &mut grab,
    );
}

// Observer: queue clicks until the gesture is over
fn property_input_on_click(
    mut click: On<Pointer<Click>>,
    q_facets: Query<&PropertyInputFacet>,
    mut pending: ResMut<PendingClicks>,
) {
    if click.button != PointerButton::Primary || !q_facets.contains(click.entity) {
        return;
    }
    click.propagate(false);
    pending.facets.push(click.entity);
}

/// System: while a mouse drag holds the infinite-drag lock, raw mouse motion
/// drives it. The cursor is grabbed, so picking reports no further movement.
pub fn drive_locked_drag(
    motion: Res<AccumulatedMouseMotion>,
    grab: Res<PointerGrab>,
    mut q_inputs: Query<(Entity, &mut PropertyInput)>,
    mut input_focus: ResMut<InputFocus>,
    mut commands: Commands,
) {
    let Some(holder) = grab.mouse_lock_holder() else {
        return;
    };
    if motion.delta.x == 0.0 {
        return;
    }
    let movement = PointerMove {
        pointer: MOUSE_POINTER,
        position: 0.0,
        movement: motion.delta.x as f64,
    };
    for (owner, mut input) in q_inputs.iter_mut() {
        let Some(facet) = input.facet_with_id(holder) else {
            continue;
        };
        input
            .widget_mut()
            .dispatch(facet, |widget| widget.pointer_move(&movement, &*grab));
        forward_events(
            owner,
            Some(facet),
            &mut input,
            &mut input_focus,
            &mut commands,
        );
        return;
    }
}

/// System: end drags whose pointer is no longer pressed.
///
/// Covers releases that land away from the facet (and despawned touch
/// pointers), where no `Release` or `DragEnd` reaches the facet.
pub fn end_released_drags(
    q_pointers: Query<(&PickingPointerId, &PointerPress)>,
    mut q_inputs: Query<&mut PropertyInput>,
    mut grab: ResMut<PointerGrab>,
) {
    let released: Vec<(WidgetId, PointerId)> = grab
        .captures()
        .filter(|(_, pointer)| {
            !q_pointers
                .iter()
                .any(|(id, press)| pointer_id(*id) == *pointer && press.is_primary_pressed())
        })
        .collect();

    for (holder, pointer) in released {
        for mut input in q_inputs.iter_mut() {
            let Some(facet) = input.facet_with_id(holder) else {
                continue;
            };
            debug!("Ending drag of {:?}: pointer {:?} released", holder, pointer);
            input
                .widget_mut()
                .dispatch(facet, |widget| widget.pointer_up(pointer, &mut *grab));
            break;
        }
    }
}

/// System: apply queued clicks, entering edit mode where the gesture did not drag.
pub fn apply_pending_clicks(
    mut pending: ResMut<PendingClicks>,
    q_facets: Query<&PropertyInputFacet>,
    mut q_inputs: Query<&mut PropertyInput>,
    mut input_focus: ResMut<InputFocus>,
    mut commands: Commands,
) {
    for entity in std::mem::take(&mut pending.facets) {
        let Ok(facet) = q_facets.get(entity).copied() else {
            continue;
        };
        let Ok(mut input) = q_inputs.get_mut(facet.owner) else {
            continue;
        };
        input.widget_mut().dispatch(facet.facet, NumericWidget::click);
        forward_events(
            facet.owner,
            Some(facet.facet),
            &mut input,
            &mut input_focus,
            &mut commands,
        );
    }
}

/// System: a facet in edit mode that lost focus commits its text.
pub fn commit_on_focus_loss(
    mut q_inputs: Query<(Entity, &mut PropertyInput)>,
    mut input_focus: ResMut<InputFocus>,
    mut commands: Commands,
) {
    for (owner, mut input) in q_inputs.iter_mut() {
        let Some(editing) = input.widget().editing_facet() else {
            continue;
        };
        let focused = input.facet_entity(editing) == input_focus.get();
        if focused {
            continue;
        }
        input.widget_mut().dispatch(editing, NumericWidget::blur);
        forward_events(
            owner,
            Some(editing),
            &mut input,
            &mut input_focus,
            &mut commands,
        );
    }
}

/// Observer: handle keyboard input on a focused facet
fn property_input_on_keyboard_input(
    trigger: On<FocusedInput<KeyboardInput>>,
    q_facets: Query<&PropertyInputFacet>,
    mut q_inputs: Query<&mut PropertyInput>,
    mut input_focus: ResMut<InputFocus>,
    mut commands: Commands,
) {
    // Only process key presses
    if trigger.input.state != ButtonState::Pressed {
        return;
    }

    let Ok(facet) = q_facets.get(trigger.focused_entity).copied() else {
        return;
    };
    let Ok(mut input) = q_inputs.get_mut(facet.owner) else {
        return;
    };

    let key = widget_key(&trigger.input.logical_key);
    let response = input
        .widget_mut()
        .dispatch(facet.facet, |widget| widget.key_down(&key));
    if !response.is_some_and(KeyResponse::is_handled) {
        return;
    }
    forward_events(
        facet.owner,
        Some(facet.facet),
        &mut input,
        &mut input_focus,
        &mut commands,
    );
}

// Observer: external value assignment
fn property_input_on_set_value(
    set: On<SetPropertyInputValue>,
    mut q_inputs: Query<&mut PropertyInput>,
    mut input_focus: ResMut<InputFocus>,
    mut commands: Commands,
) {
    let Ok(mut input) = q_inputs.get_mut(set.entity) else {
        warn!("SetPropertyInputValue on {:?}, which is not a property input", set.entity);
        return;
    };
    input.widget_mut().set_value(set.value);
    forward_events(set.entity, None, &mut input, &mut input_focus, &mut commands);
}

// Observer: enable or disable, cancelling any gesture in progress
fn property_input_on_set_disabled(
    set: On<SetPropertyInputDisabled>,
    mut q_inputs: Query<&mut PropertyInput>,
    mut grab: ResMut<PointerGrab>,
    mut input_focus: ResMut<InputFocus>,
    mut commands: Commands,
) {
    let Ok(mut input) = q_inputs.get_mut(set.entity) else {
        warn!("SetPropertyInputDisabled on {:?}, which is not a property input", set.entity);
        return;
    };
    let editing = input.widget().editing_facet();
    input.widget_mut().set_disabled(set.disabled, &mut *grab);
    forward_events(set.entity, editing, &mut input, &mut input_focus, &mut commands);
}

/// System: update facet text when a property input changes
pub fn sync_property_input_text(
    config: Res<PropertyInputConfig>,
    q_inputs: Query<&PropertyInput, Changed<PropertyInput>>,
    mut q_text: Query<(&mut Text, &mut TextColor), With<PropertyInputFacet>>,
) {
    for input in q_inputs.iter() {
        let widget = input.widget();
        for (facet, entity) in &input.facet_entities {
            let Some(number) = widget.facet(*facet) else {
                continue;
            };
            let Ok((mut text, mut color)) = q_text.get_mut(*entity) else {
                continue;
            };
            if number.is_editing() {
                // Show edit buffer with cursor indicator
                text.0 = format!("{}|", number.display_text());
                color.0 = config.editing_text_color;
            } else {
                text.0 = number.formatted();
                color.0 = if widget.is_disabled() {
                    config.disabled_text_color
                } else {
                    config.text_color
                };
            }
        }
    }
}

/// System: grab and hide the cursor while a mouse drag holds the
/// infinite-drag lock, restoring the previous cursor state afterwards.
pub fn sync_cursor_grab(
    grab: Res<PointerGrab>,
    mut q_cursor: Query<&mut CursorOptions, With<PrimaryWindow>>,
    mut saved: Local<Option<(CursorGrabMode, bool)>>,
) {
    let locked = grab.mouse_lock_holder().is_some();
    if locked == saved.is_some() {
        return;
    }
    let Ok(mut cursor) = q_cursor.single_mut() else {
        return;
    };
    if locked {
        *saved = Some((cursor.grab_mode, cursor.visible));
        cursor.grab_mode = CursorGrabMode::Locked;
        cursor.visible = false;
        debug!("Cursor locked for infinite drag");
    } else if let Some((grab_mode, visible)) = saved.take() {
        cursor.grab_mode = grab_mode;
        cursor.visible = visible;
        debug!("Cursor restored after infinite drag");
    }
}

/// Registers the property input observers.
pub(crate) fn add_property_input_observers(app: &mut App) {
    app.add_observer(property_input_on_press)
        .add_observer(property_input_on_drag)
        .add_observer(property_input_on_release)
        .add_observer(property_input_on_drag_end)
        .add_observer(property_input_on_cancel)
        .add_observer(property_input_on_click)
        .add_observer(property_input_on_keyboard_input)
        .add_observer(property_input_on_set_value)
        .add_observer(property_input_on_set_disabled);
}
