//! Headless numeric value widgets.
//!
//! Everything here is plain state and methods with no dependency on the ECS:
//! - [`TransformType`]: per-type format/parse (raw, rotations, percent)
//! - [`Bounds`]: clamp and step quantization
//! - [`NumericWidget`]: drag, click-to-edit and keyboard stepping
//! - [`ValueBus`]: one value mirrored across several children
//! - [`CompositeWidget`]: one value shown as dependent facets
//!
//! Pointer capture and the infinite-drag lock are injected as a
//! [`PointerHost`].

pub mod attributes;
pub mod bounds;
pub mod bus;
pub mod composite;
pub mod drag;
pub mod edit;
pub mod error;
pub mod keys;
pub mod pointer;
pub mod transform;
pub mod widget;

pub use bounds::Bounds;
pub use bus::{BusEvent, BusMember, ChildId, ValueBus};
pub use composite::{CompositeKind, CompositeProps, CompositeWidget, Facet};
pub use drag::{DeltaToChange, DragSession, PointerDown, PointerMove, process_drag};
pub use edit::{EditExit, EditSession};
pub use error::{AttributeError, TransformParseError};
pub use keys::{KeyAction, KeyResponse, KeyStepController, WidgetKey};
pub use pointer::{
    HeadlessPointerHost, PointerCapture, PointerHost, PointerId, PointerLockProvider, WidgetId,
};
pub use transform::TransformType;
pub use widget::{NumericWidget, NumericWidgetProps, WidgetEvent};
