//! One logical value presented as one or two dependent facets.
//!
//! A rotation composite shows an angle as a turn count and a signed
//! remainder; both facet widgets store the full angle, so editing either one
//! recomputes the angle relative to its current split. Percent and plain
//! composites wrap a single facet.

use super::bounds::Bounds;
use super::bus::{BusEvent, BusMember, ChildId, ValueBus};
use super::drag::{DeltaToChange, process_drag};
use super::pointer::{HeadlessPointerHost, PointerHost};
use super::transform::TransformType;
use super::widget::{DEFAULT_PRECISION, NumericWidget, NumericWidgetProps, WidgetEvent};

/// Which presentation a composite uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CompositeKind {
    /// A single raw number.
    #[default]
    Plain,
    /// Turn count plus signed degrees.
    Rotation,
    /// A fraction shown as a percentage.
    Percent,
}

impl CompositeKind {
    /// Facets shown by this kind, in display order.
    pub fn facets(self) -> &'static [Facet] {
        match self {
            CompositeKind::Plain => &[Facet::Value],
            CompositeKind::Rotation => &[Facet::Rotations, Facet::Degrees],
            CompositeKind::Percent => &[Facet::Percent],
        }
    }
}

/// One displayed aspect of a composite's value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Facet {
    Value,
    Rotations,
    Degrees,
    Percent,
}

impl Facet {
    pub fn transform(self) -> TransformType {
        match self {
            Facet::Value => TransformType::Raw,
            Facet::Rotations => TransformType::WholeRotation,
            Facet::Degrees => TransformType::PartRotation,
            Facet::Percent => TransformType::Percent,
        }
    }

    /// Part name used by presentation.
    pub fn name(self) -> &'static str {
        match self {
            Facet::Value => "value",
            Facet::Rotations => "rotations",
            Facet::Degrees => "degrees",
            Facet::Percent => "percent",
        }
    }
}

/// Props for building a [`CompositeWidget`]. Forwarded to every facet.
#[derive(Clone, Debug)]
pub struct CompositeProps {
    pub value: f64,
    pub bounds: Bounds,
    pub drag_factor: f64,
    pub precision: usize,
    pub disabled: bool,
    pub infinite_drag: bool,
    pub delta_to_change: DeltaToChange,
}

impl Default for CompositeProps {
    fn default() -> Self {
        Self {
            value: 0.0,
            bounds: Bounds::UNBOUNDED,
            drag_factor: 1.0,
            precision: DEFAULT_PRECISION,
            disabled: false,
            infinite_drag: true,
            delta_to_change: process_drag,
        }
    }
}

/// A value shown through one or more facet widgets kept in sync by a bus.
#[derive(Debug)]
pub struct CompositeWidget {
    kind: CompositeKind,
    bus: ValueBus<NumericWidget>,
    facets: Vec<(Facet, ChildId)>,
    bounds: Bounds,
    editing: Option<Facet>,
    events: Vec<WidgetEvent>,
}

impl CompositeWidget {
    pub fn new(kind: CompositeKind, props: CompositeProps) -> Self {
        let mut bus = ValueBus::new(props.value);
        // Fresh facets hold no pointer resources, so any host will do here.
        let mut host = HeadlessPointerHost::default();
        let facets = kind
            .facets()
            .iter()
            .map(|facet| {
                let widget = NumericWidget::new(NumericWidgetProps {
                    value: props.value,
                    bounds: props.bounds,
                    drag_factor: props.drag_factor,
                    precision: props.precision,
                    disabled: false,
                    infinite_drag: props.infinite_drag,
                    transform: facet.transform(),
                    delta_to_change: props.delta_to_change,
                });
                (*facet, bus.attach(widget, &mut host))
            })
            .collect();
        if props.disabled {
            bus.set_disabled(true, &mut host);
            bus.take_events();
        }
        Self {
            kind,
            bus,
            facets,
            bounds: props.bounds,
            editing: None,
            events: Vec::new(),
        }
    }

    pub fn kind(&self) -> CompositeKind {
        self.kind
    }

    pub fn value(&self) -> f64 {
        self.bus.value()
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn is_disabled(&self) -> bool {
        self.bus.is_disabled()
    }

    /// The facet currently in edit mode, if any.
    pub fn editing_facet(&self) -> Option<Facet> {
        self.editing
    }

    pub fn facets(&self) -> impl Iterator<Item = Facet> + '_ {
        self.facets.iter().map(|(facet, _)| *facet)
    }

    pub fn facet(&self, facet: Facet) -> Option<&NumericWidget> {
        self.bus.child(self.child_id(facet)?)
    }

    /// Runs an interaction on one facet and folds its changes into the value.
    ///
    /// Returns `None` if this composite does not show `facet`.
    pub fn dispatch<R>(
        &mut self,
        facet: Facet,
        interact: impl FnOnce(&mut NumericWidget) -> R,
    ) -> Option<R> {
        let id = self.child_id(facet)?;
        let result = self.bus.dispatch(id, interact);
        self.collect();
        result
    }

    /// Assigns the value from outside, updating every facet.
    pub fn set_value(&mut self, value: f64) -> bool {
        let changed = self.bus.set_value(value);
        self.collect();
        changed
    }

    /// Forwards bounds to every facet.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        self.for_each_facet(|widget| widget.set_bounds(bounds));
    }

    pub fn set_drag_factor(&mut self, drag_factor: f64) {
        self.for_each_facet(|widget| widget.set_drag_factor(drag_factor));
    }

    pub fn set_disabled(&mut self, disabled: bool, host: &mut dyn PointerHost) {
        self.bus.set_disabled(disabled, host);
        self.collect();
    }

    /// One-line rendering of the whole value, e.g. `1x+30°` or `50%`.
    pub fn summary(&self) -> String {
        let shown = |facet: Facet| {
            self.facet(facet)
                .map(NumericWidget::formatted)
                .unwrap_or_default()
        };
        match self.kind {
            CompositeKind::Plain => shown(Facet::Value),
            CompositeKind::Rotation => {
                format!("{}x{}°", shown(Facet::Rotations), shown(Facet::Degrees))
            }
            CompositeKind::Percent => format!("{}%", shown(Facet::Percent)),
        }
    }

    /// Drains pending notifications.
    pub fn take_events(&mut self) -> Vec<WidgetEvent> {
        std::mem::take(&mut self.events)
    }

    fn child_id(&self, facet: Facet) -> Option<ChildId> {
        self.facets
            .iter()
            .find(|(shown, _)| *shown == facet)
            .map(|(_, id)| *id)
    }

    fn facet_of(&self, id: ChildId) -> Option<Facet> {
        self.facets
            .iter()
            .find(|(_, child)| *child == id)
            .map(|(facet, _)| *facet)
    }

    fn for_each_facet(&mut self, mut apply: impl FnMut(&mut NumericWidget)) {
        let ids: Vec<ChildId> = self.facets.iter().map(|(_, id)| *id).collect();
        for id in ids {
            self.bus.dispatch(id, &mut apply);
        }
        self.collect();
    }

    fn collect(&mut self) {
        for event in self.bus.take_events() {
            match event {
                BusEvent::ValueChanged { value } => {
                    self.events.push(WidgetEvent::ValueChanged { value });
                }
                BusEvent::ChildEditingChanged {
                    child,
                    editing,
                    restore_focus,
                } => {
                    self.editing = if editing { self.facet_of(child) } else { None };
                    self.events.push(WidgetEvent::EditingChanged {
                        editing,
                        restore_focus,
                    });
                }
            }
        }
    }
}

impl BusMember for CompositeWidget {
    fn value(&self) -> f64 {
        CompositeWidget::value(self)
    }

    fn set_value(&mut self, value: f64) -> bool {
        CompositeWidget::set_value(self, value)
    }

    fn set_disabled(&mut self, disabled: bool, host: &mut dyn PointerHost) {
        CompositeWidget::set_disabled(self, disabled, host);
    }

    fn take_events(&mut self) -> Vec<WidgetEvent> {
        CompositeWidget::take_events(self)
    }
}
