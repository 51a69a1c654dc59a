//! Operator-facing layer: the status panel mirroring the console telemetry
//! and the keyboard test controls for the manual blockage overrides.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod override_controls;
pub mod status_panel;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin).add_systems(
            Update,
            (
                override_controls::handle_override_keys,
                status_panel::status_panel_ui,
            ),
        );
    }
}
