//! Vehicle sprites: attach a colored rectangle to each new `Vehicle` entity
//! and keep its transform in sync with the scalar corridor position.

use bevy::prelude::*;

use simulation::vehicles::Vehicle;
use simulation::Approach;

/// Visual-only perpendicular offset picking one of the two drawn lanes.
#[derive(Component, Debug, Clone, Copy)]
pub struct LaneOffset(pub f32);

/// Corridor progress 0 sits 400 units before the window center, so the
/// intersection's stop line (progress 310..345) lands just left of / below
/// the crossing box.
fn vehicle_translation(approach: Approach, position: f32, lane_offset: f32) -> Vec3 {
    match approach {
        // Principal traffic flows west to east.
        Approach::Principal => Vec3::new(position - 400.0, lane_offset, 1.0),
        // Secondary traffic flows south to north.
        Approach::Secondary => Vec3::new(lane_offset, position - 400.0, 1.0),
    }
}

fn vehicle_size(approach: Approach) -> Vec2 {
    match approach {
        Approach::Principal => Vec2::new(30.0, 18.0),
        Approach::Secondary => Vec2::new(18.0, 30.0),
    }
}

pub fn attach_vehicle_sprites(
    mut commands: Commands,
    new_vehicles: Query<(Entity, &Vehicle), Added<Vehicle>>,
) {
    for (entity, vehicle) in &new_vehicles {
        // Entity-derived lane and pastel body color keep visuals stable
        // without touching the simulation RNG.
        let lane = if entity.index() % 2 == 0 { -15.0 } else { 15.0 };
        let hue = (entity.index().wrapping_mul(47) % 360) as f32;
        commands.entity(entity).insert((
            Sprite::from_color(Color::hsl(hue, 0.35, 0.75), vehicle_size(vehicle.approach)),
            Transform::from_translation(vehicle_translation(
                vehicle.approach,
                vehicle.position,
                lane,
            )),
            LaneOffset(lane),
        ));
    }
}

pub fn sync_vehicle_transforms(
    mut vehicles: Query<(&Vehicle, &LaneOffset, &mut Transform)>,
) {
    for (vehicle, lane, mut transform) in &mut vehicles {
        transform.translation =
            vehicle_translation(vehicle.approach, vehicle.position, lane.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approaches_map_to_perpendicular_axes() {
        let principal = vehicle_translation(Approach::Principal, 400.0, 15.0);
        assert_eq!(principal, Vec3::new(0.0, 15.0, 1.0));

        let secondary = vehicle_translation(Approach::Secondary, 400.0, 15.0);
        assert_eq!(secondary, Vec3::new(15.0, 0.0, 1.0));
    }

    #[test]
    fn progress_moves_principal_east_and_secondary_north() {
        let before = vehicle_translation(Approach::Principal, 100.0, 0.0);
        let after = vehicle_translation(Approach::Principal, 200.0, 0.0);
        assert!(after.x > before.x);

        let before = vehicle_translation(Approach::Secondary, 100.0, 0.0);
        let after = vehicle_translation(Approach::Secondary, 200.0, 0.0);
        assert!(after.y > before.y);
    }
}
