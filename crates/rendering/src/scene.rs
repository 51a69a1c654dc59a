//! Static scene: the two crossing road surfaces.

use bevy::prelude::*;

const ROAD_COLOR: Color = Color::srgb(0.39, 0.39, 0.39);
/// Width of each road surface in world units; matches the span between the
/// stop line and the exit zone so the crossing box lines up with the zones.
const ROAD_WIDTH: f32 = 100.0;

pub fn spawn_roads(mut commands: Commands) {
    // Principal approach runs left to right across the whole window.
    commands.spawn((
        Sprite::from_color(ROAD_COLOR, Vec2::new(800.0, ROAD_WIDTH)),
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));
    // Secondary approach runs bottom to top.
    commands.spawn((
        Sprite::from_color(ROAD_COLOR, Vec2::new(ROAD_WIDTH, 600.0)),
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));
}
