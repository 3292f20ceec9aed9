//! Property input widgets.
//!
//! - PropertyInput: one numeric value shown as draggable facets
//!   - Drag horizontally to change value
//!   - Click to enter text input mode
//!   - Arrow keys step the focused facet

pub mod property_input;

pub use property_input::{
    PropertyInput, PropertyInputChanged, PropertyInputEditModeChanged, PropertyInputFacet,
    SetPropertyInputDisabled, SetPropertyInputValue, apply_pending_clicks, commit_on_focus_loss,
    drive_locked_drag, end_released_drags, spawn_property_input, sync_cursor_grab,
    sync_property_input_text, widget_key,
};
