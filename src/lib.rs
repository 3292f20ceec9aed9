//! Numeric property inputs for Bevy.
//!
//! Draggable, click-to-edit number fields with step quantization, infinite
//! drag and composite rotation/percent views. The [`numeric`] module holds
//! the headless widget logic; [`ui`] spawns it as bevy_ui nodes.

pub mod numeric;
pub mod ui;

// Re-export the main types for convenience
pub use numeric::{
    Bounds, CompositeKind, CompositeProps, CompositeWidget, NumericWidget, NumericWidgetProps,
    TransformType, ValueBus,
};
pub use ui::{PropertyInputConfig, PropertyInputPlugin, spawn_property_input};
