//! Headless integration test harness.
//!
//! Wraps `bevy::app::App` + `SimulationPlugin` with `MinimalPlugins` so tests
//! can drive the controller without a window, advancing virtual time by
//! exactly one fixed timestep per update for deterministic tick counts.

use bevy::app::App;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use crate::config::{DECISION_INTERVAL_TICKS, MOTION_TICK};
use crate::policy::PressureCounter;
use crate::sim_rng::SimRng;
use crate::signals::{Signal, Signals};
use crate::vehicles::{ArrivalRates, Vehicle};
use crate::zones::{ExitOverrides, SensorReading, SensorReadings};
use crate::{Approach, ByApproach, SimulationPlugin};

pub struct TestIntersection {
    app: App,
}

impl TestIntersection {
    /// A quiet intersection: no random arrivals, so tests control every
    /// vehicle. Startup has already run and granted the principal green.
    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(SimulationPlugin);
        app.insert_resource(ArrivalRates(ByApproach {
            principal: 0.0,
            secondary: 0.0,
        }));
        app.insert_resource(TimeUpdateStrategy::ManualDuration(MOTION_TICK));
        // One update so Startup systems execute; the first clock update has a
        // zero delta, so no fixed tick runs.
        app.update();
        Self { app }
    }

    /// An intersection with the default arrival rates and a fixed seed.
    pub fn with_traffic(seed: u64) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(SimulationPlugin);
        app.insert_resource(SimRng::from_seed_u64(seed));
        app.insert_resource(TimeUpdateStrategy::ManualDuration(MOTION_TICK));
        app.update();
        Self { app }
    }

    // -----------------------------------------------------------------------
    // Setup
    // -----------------------------------------------------------------------

    pub fn spawn_vehicle(&mut self, approach: Approach, position: f32, speed: f32) -> Entity {
        self.app
            .world_mut()
            .spawn(Vehicle {
                approach,
                position,
                speed,
            })
            .id()
    }

    pub fn set_override(&mut self, approach: Approach, asserted: bool) {
        *self
            .app
            .world_mut()
            .resource_mut::<ExitOverrides>()
            .0
            .get_mut(approach) = asserted;
    }

    pub fn set_signal(&mut self, approach: Approach, signal: Signal) {
        *self
            .app
            .world_mut()
            .resource_mut::<Signals>()
            .get_mut(approach) = signal;
    }

    // -----------------------------------------------------------------------
    // Driving
    // -----------------------------------------------------------------------

    /// Advance `n` motion ticks (one FixedUpdate each). The ManualDuration
    /// update strategy advances the clock by exactly MOTION_TICK per update.
    pub fn tick(&mut self, n: u64) {
        for _ in 0..n {
            self.app.update();
        }
    }

    /// Advance exactly one decision interval (one policy pass).
    pub fn tick_decision(&mut self) {
        self.tick(DECISION_INTERVAL_TICKS);
    }

    pub fn tick_decisions(&mut self, n: u64) {
        self.tick(DECISION_INTERVAL_TICKS * n);
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn signal(&self, approach: Approach) -> Signal {
        *self.app.world().resource::<Signals>().get(approach)
    }

    pub fn reading(&self, approach: Approach) -> SensorReading {
        *self.app.world().resource::<SensorReadings>().get(approach)
    }

    pub fn pressure(&self) -> u32 {
        self.app.world().resource::<PressureCounter>().0
    }

    pub fn vehicle_count(&mut self) -> usize {
        let world = self.app.world_mut();
        let mut query = world.query::<&Vehicle>();
        query.iter(world).count()
    }

    pub fn vehicle_positions(&mut self, approach: Approach) -> Vec<f32> {
        let world = self.app.world_mut();
        let mut query = world.query::<&Vehicle>();
        query
            .iter(world)
            .filter(|v| v.approach == approach)
            .map(|v| v.position)
            .collect()
    }
}
