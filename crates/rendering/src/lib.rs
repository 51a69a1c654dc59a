//! Rendering layer: draws the intersection, the vehicle stream, and the
//! signal heads from read-only simulation snapshots, and hosts the audio cue
//! subscriber. Nothing in this crate feeds back into the controller.

use bevy::prelude::*;

pub mod audio_playback;
pub mod camera;
pub mod scene;
pub mod signal_render;
pub mod vehicle_render;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::srgb(0.08, 0.08, 0.08)))
            .add_systems(
                Startup,
                (
                    camera::setup_camera,
                    scene::spawn_roads,
                    signal_render::spawn_signal_heads,
                ),
            )
            .add_systems(
                Update,
                (
                    vehicle_render::attach_vehicle_sprites,
                    vehicle_render::sync_vehicle_transforms,
                    signal_render::update_lamps,
                    audio_playback::play_change_cue,
                ),
            );
    }
}
