//! Property input plugin.

use bevy::input_focus::InputFocus;
use bevy::prelude::*;

use super::config::PropertyInputConfig;
use super::state::{PendingClicks, PointerGrab};
use super::widgets::property_input::add_property_input_observers;
use super::widgets::{
    apply_pending_clicks, commit_on_focus_loss, drive_locked_drag, end_released_drags,
    sync_cursor_grab, sync_property_input_text,
};

/// System sets for organizing property input systems.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyInputSet {
    /// Drive locked drags, end stale ones, then apply deferred clicks and focus changes.
    Input,
    /// Sync UI with widget state.
    SyncUI,
}

/// Plugin that drives every spawned property input.
///
/// Insert a [`PropertyInputConfig`] before adding the plugin to change the defaults.
pub struct PropertyInputPlugin;

impl Plugin for PropertyInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PropertyInputConfig>()
            .init_resource::<PendingClicks>()
            .init_resource::<InputFocus>();

        let lock_supported = app.world().resource::<PropertyInputConfig>().infinite_drag;
        app.insert_resource(PointerGrab::new(lock_supported));

        add_property_input_observers(app);

        app
            // System ordering
            .configure_sets(
                Update,
                (PropertyInputSet::Input, PropertyInputSet::SyncUI).chain(),
            )
            .add_systems(
                Update,
                (
                    // Clicks before blur, so a click that moves focus is not read as a blur
                    (
                        drive_locked_drag,
                        end_released_drags,
                        apply_pending_clicks,
                        commit_on_focus_loss,
                    )
                        .chain()
                        .in_set(PropertyInputSet::Input),
                    (sync_property_input_text, sync_cursor_grab).in_set(PropertyInputSet::SyncUI),
                ),
            );

        debug!("Property input plugin initialized");
    }
}
