//! Bevy UI front end for the numeric widgets.
//!
//! Spawns property inputs as bevy_ui nodes and drives them from picking
//! and focused keyboard input.

pub mod config;
pub mod plugin;
pub mod state;
pub mod widgets;

pub use config::PropertyInputConfig;
pub use plugin::{PropertyInputPlugin, PropertyInputSet};
pub use state::{PendingClicks, PointerGrab};
pub use widgets::{
    PropertyInput, PropertyInputChanged, PropertyInputEditModeChanged, PropertyInputFacet,
    SetPropertyInputDisabled, SetPropertyInputValue, spawn_property_input,
};
