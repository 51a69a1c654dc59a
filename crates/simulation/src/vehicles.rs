//! Vehicle stream: generation, motion, and removal.
//!
//! Vehicles are the only producer of sensor input. Each one advances along a
//! scalar corridor at a speed drawn once at spawn; a vehicle holds position
//! while it sits in the stop zone and its approach's signal is not green.
//! There is no car-following model: vehicles may overlap.

use bevy::prelude::*;
use rand::Rng;

use crate::config::{
    ARRIVAL_PROBABILITY_PRINCIPAL, ARRIVAL_PROBABILITY_SECONDARY, ENTRY_POS, EXIT_POS, MOTION_DT,
    SPEED_MAX, SPEED_MIN, STOP_ZONE,
};
use crate::sim_rng::SimRng;
use crate::signals::{SignalState, Signals};
use crate::{Approach, ByApproach};

#[derive(Component, Debug, Clone, Copy)]
pub struct Vehicle {
    pub approach: Approach,
    /// Scalar progress along the approach corridor, in world units.
    pub position: f32,
    /// Units per second, fixed for the vehicle's lifetime.
    pub speed: f32,
}

impl Vehicle {
    /// A vehicle yields at the stop line unless its approach holds green.
    /// Yellow also stops traffic, clearing the intersection before handoff.
    pub fn held_at_stop_line(&self, state: SignalState) -> bool {
        state != SignalState::Green && STOP_ZONE.contains(self.position)
    }
}

/// Per-motion-tick arrival probability for each approach. A resource rather
/// than bare constants so tests and tooling can silence or skew arrivals.
#[derive(Resource, Debug, Clone, Copy)]
pub struct ArrivalRates(pub ByApproach<f64>);

impl Default for ArrivalRates {
    fn default() -> Self {
        Self(ByApproach {
            principal: ARRIVAL_PROBABILITY_PRINCIPAL,
            secondary: ARRIVAL_PROBABILITY_SECONDARY,
        })
    }
}

/// Each motion tick, independently per approach, spawn a vehicle at the
/// corridor entry with probability taken from `ArrivalRates`.
pub fn spawn_vehicles(mut commands: Commands, rates: Res<ArrivalRates>, mut rng: ResMut<SimRng>) {
    for approach in Approach::ALL {
        if rng.0.gen_bool(*rates.0.get(approach)) {
            commands.spawn(Vehicle {
                approach,
                position: ENTRY_POS,
                speed: rng.0.gen_range(SPEED_MIN..SPEED_MAX),
            });
        }
    }
}

/// Advance every vehicle that is not held at the stop line.
pub fn move_vehicles(signals: Res<Signals>, mut vehicles: Query<&mut Vehicle>) {
    for mut vehicle in &mut vehicles {
        if vehicle.held_at_stop_line(signals.get(vehicle.approach).state) {
            continue;
        }
        vehicle.position += vehicle.speed * MOTION_DT;
    }
}

/// Remove vehicles that have left the simulated corridor.
pub fn despawn_vehicles(mut commands: Commands, vehicles: Query<(Entity, &Vehicle)>) {
    for (entity, vehicle) in &vehicles {
        if vehicle.position > EXIT_POS {
            commands.entity(entity).despawn();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle_at(position: f32) -> Vehicle {
        Vehicle {
            approach: Approach::Principal,
            position,
            speed: 180.0,
        }
    }

    #[test]
    fn held_at_stop_line_when_not_green() {
        let vehicle = vehicle_at(320.0);
        assert!(vehicle.held_at_stop_line(SignalState::Red));
        assert!(vehicle.held_at_stop_line(SignalState::Yellow));
        assert!(!vehicle.held_at_stop_line(SignalState::Green));
    }

    #[test]
    fn not_held_outside_stop_zone() {
        // Past the stop line: a red light never traps a vehicle inside the
        // intersection itself.
        assert!(!vehicle_at(400.0).held_at_stop_line(SignalState::Red));
        // Still approaching.
        assert!(!vehicle_at(100.0).held_at_stop_line(SignalState::Red));
    }

    #[test]
    fn stop_zone_boundaries_match_reserve_zone() {
        assert!(!vehicle_at(309.9).held_at_stop_line(SignalState::Red));
        assert!(vehicle_at(310.0).held_at_stop_line(SignalState::Red));
        assert!(vehicle_at(344.9).held_at_stop_line(SignalState::Red));
        assert!(!vehicle_at(345.0).held_at_stop_line(SignalState::Red));
    }
}
