//! Three-lamp signal heads, one per approach. Lamp materials track the
//! `Signals` resource every frame; there is no state here beyond handles.

use bevy::prelude::*;

use simulation::signals::{SignalState, Signals};
use simulation::Approach;

const LAMP_RADIUS: f32 = 12.0;
const HOUSING_COLOR: Color = Color::srgb(0.2, 0.2, 0.2);

/// One lamp of a signal head: lights up while its approach's signal is in
/// `lights_when`.
#[derive(Component, Debug, Clone, Copy)]
pub struct Lamp {
    pub approach: Approach,
    pub lights_when: SignalState,
}

/// Shared lamp materials, created once at startup.
#[derive(Resource)]
pub struct LampMaterials {
    pub red_on: Handle<ColorMaterial>,
    pub yellow_on: Handle<ColorMaterial>,
    pub green_on: Handle<ColorMaterial>,
    pub off: Handle<ColorMaterial>,
}

impl LampMaterials {
    fn lit(&self, state: SignalState) -> Handle<ColorMaterial> {
        match state {
            SignalState::Red => self.red_on.clone(),
            SignalState::Yellow => self.yellow_on.clone(),
            SignalState::Green => self.green_on.clone(),
        }
    }
}

pub fn spawn_signal_heads(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let lamp_materials = LampMaterials {
        red_on: materials.add(Color::srgb(1.0, 0.0, 0.0)),
        yellow_on: materials.add(Color::srgb(1.0, 1.0, 0.0)),
        green_on: materials.add(Color::srgb(0.0, 1.0, 0.0)),
        off: materials.add(Color::srgb(0.16, 0.16, 0.16)),
    };
    let lamp_mesh = meshes.add(Circle::new(LAMP_RADIUS));

    // Each head sits beside its stop line: red on top, then yellow, green.
    let heads = [
        (Approach::Principal, Vec2::new(-75.0, 95.0)),
        (Approach::Secondary, Vec2::new(75.0, -95.0)),
    ];
    for (approach, center) in heads {
        commands.spawn((
            Sprite::from_color(HOUSING_COLOR, Vec2::new(30.0, 90.0)),
            Transform::from_translation(center.extend(1.5)),
        ));
        let order = [SignalState::Red, SignalState::Yellow, SignalState::Green];
        for (slot, state) in order.into_iter().enumerate() {
            let offset = Vec2::new(0.0, 30.0 - 30.0 * slot as f32);
            commands.spawn((
                Lamp {
                    approach,
                    lights_when: state,
                },
                Mesh2d(lamp_mesh.clone()),
                MeshMaterial2d(lamp_materials.off.clone()),
                Transform::from_translation((center + offset).extend(2.0)),
            ));
        }
    }

    commands.insert_resource(lamp_materials);
}

pub fn update_lamps(
    signals: Res<Signals>,
    lamp_materials: Res<LampMaterials>,
    mut lamps: Query<(&Lamp, &mut MeshMaterial2d<ColorMaterial>)>,
) {
    for (lamp, mut material) in &mut lamps {
        let state = signals.get(lamp.approach).state;
        material.0 = if state == lamp.lights_when {
            lamp_materials.lit(state)
        } else {
            lamp_materials.off.clone()
        };
    }
}
