use bevy::prelude::*;
use serde::{Deserialize, Serialize};

pub mod config;
pub mod policy;
pub mod sim_rng;
pub mod signals;
pub mod telemetry;
pub mod vehicles;
pub mod zones;

#[cfg(test)]
pub mod test_harness;

use config::{DECISION_INTERVAL_TICKS, MOTION_TICK};

// ---------------------------------------------------------------------------
// Core types
// ---------------------------------------------------------------------------

/// One of the two traffic flows competing for the intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Approach {
    Principal,
    Secondary,
}

impl Approach {
    /// Restart preference order: the principal approach wins ties.
    pub const ALL: [Approach; 2] = [Approach::Principal, Approach::Secondary];

    pub fn other(self) -> Self {
        match self {
            Approach::Principal => Approach::Secondary,
            Approach::Secondary => Approach::Principal,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Approach::Principal => "principal",
            Approach::Secondary => "secondary",
        }
    }
}

/// A value held once per approach. Most per-intersection state (signals,
/// sensor readings, overrides) is a `ByApproach` of something.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ByApproach<T> {
    pub principal: T,
    pub secondary: T,
}

impl<T> ByApproach<T> {
    pub fn get(&self, approach: Approach) -> &T {
        match approach {
            Approach::Principal => &self.principal,
            Approach::Secondary => &self.secondary,
        }
    }

    pub fn get_mut(&mut self, approach: Approach) -> &mut T {
        match approach {
            Approach::Principal => &mut self.principal,
            Approach::Secondary => &mut self.secondary,
        }
    }
}

// ---------------------------------------------------------------------------
// Tick bookkeeping
// ---------------------------------------------------------------------------

/// Global tick counter incremented each FixedUpdate. Motion systems run every
/// tick; the decision pipeline is throttled to every DECISION_INTERVAL_TICKS.
#[derive(Resource, Default)]
pub struct TickCounter(pub u64);

pub fn advance_tick(mut tick: ResMut<TickCounter>) {
    tick.0 = tick.0.wrapping_add(1);
}

/// Run condition for the once-per-second decision pass.
pub fn decision_tick(tick: Res<TickCounter>) -> bool {
    tick.0 > 0 && tick.0.is_multiple_of(DECISION_INTERVAL_TICKS)
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_duration(MOTION_TICK))
            .init_resource::<TickCounter>()
            .init_resource::<sim_rng::SimRng>()
            .init_resource::<signals::Signals>()
            .init_resource::<zones::ExitOverrides>()
            .init_resource::<zones::SensorReadings>()
            .init_resource::<policy::PolicyParams>()
            .init_resource::<policy::PressureCounter>()
            .init_resource::<policy::PendingHandoff>()
            .init_resource::<vehicles::ArrivalRates>()
            .init_resource::<telemetry::TickSnapshot>()
            .add_event::<signals::SignalChanged>()
            .add_systems(Startup, signals::grant_initial_green)
            .add_systems(
                FixedUpdate,
                (
                    advance_tick,
                    vehicles::spawn_vehicles,
                    vehicles::move_vehicles,
                    vehicles::despawn_vehicles,
                    zones::refresh_sensors.run_if(decision_tick),
                    policy::apply_policy.run_if(decision_tick),
                    signals::tick_signal_timers.run_if(decision_tick),
                    telemetry::publish_snapshot.run_if(decision_tick),
                )
                    .chain(),
            );
    }
}
