//! Zone sensor model.
//!
//! Three fixed detection zones per approach (demand, reserve, exit) map the
//! vehicle snapshot to the counts and flags the arbitration policy consumes.
//! Readings are recomputed from scratch every decision tick; the only sticky
//! input is the per-approach manual override, which simulates a downstream
//! incident until it is explicitly cleared.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{DEMAND_ZONE, EXIT_ZONE, RESERVE_ZONE, STALL_SPEED};
use crate::vehicles::Vehicle;
use crate::{Approach, ByApproach};

/// A fixed half-open interval `[start, end)` along an approach corridor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zone {
    pub start: f32,
    pub end: f32,
}

impl Zone {
    pub const fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, position: f32) -> bool {
        position >= self.start && position < self.end
    }

    pub fn length(&self) -> f32 {
        self.end - self.start
    }
}

/// Manual exit-blockage overrides, the single external mutation path into
/// sensor state. Asserted/cleared by the input layer; while asserted the
/// exit zone reads blocked regardless of what the vehicles are doing.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct ExitOverrides(pub ByApproach<bool>);

/// One approach's sensor output for a single decision tick.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorReading {
    /// Vehicles currently inside the demand zone.
    pub demand_count: u32,
    /// Vehicles currently inside the reserve (stop-line) zone.
    pub reserve_count: u32,
    /// True when a stalled vehicle occupies the exit zone, or the manual
    /// override for this approach is asserted.
    pub exit_blocked: bool,
}

/// The latest sensor pass, one reading per approach. No smoothing: each
/// decision tick fully replaces the previous readings.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct SensorReadings(pub ByApproach<SensorReading>);

impl SensorReadings {
    pub fn get(&self, approach: Approach) -> &SensorReading {
        self.0.get(approach)
    }
}

/// Compute one approach's reading from a vehicle snapshot.
pub fn read_approach<'a>(
    vehicles: impl Iterator<Item = &'a Vehicle>,
    approach: Approach,
    overridden: bool,
) -> SensorReading {
    let mut reading = SensorReading {
        exit_blocked: overridden,
        ..Default::default()
    };
    for vehicle in vehicles.filter(|v| v.approach == approach) {
        if DEMAND_ZONE.contains(vehicle.position) {
            reading.demand_count += 1;
        }
        if RESERVE_ZONE.contains(vehicle.position) {
            reading.reserve_count += 1;
        }
        if EXIT_ZONE.contains(vehicle.position) && vehicle.speed < STALL_SPEED {
            reading.exit_blocked = true;
        }
    }
    reading
}

/// Decision-tick system: refresh both approaches' readings.
pub fn refresh_sensors(
    vehicles: Query<&Vehicle>,
    overrides: Res<ExitOverrides>,
    mut readings: ResMut<SensorReadings>,
) {
    for approach in Approach::ALL {
        *readings.0.get_mut(approach) =
            read_approach(vehicles.iter(), approach, *overrides.0.get(approach));
    }
}
