//! Structured per-decision-tick snapshot for logging collaborators.
//!
//! After each decision pass the controller exposes signal states, timers,
//! sensor counts, and the pressure counter as one serializable value. The
//! console report goes out at `info` level; a JSON line for external
//! shipping goes out at `debug` level under the `telemetry` target.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::policy::PressureCounter;
use crate::signals::{Signal, Signals};
use crate::zones::{SensorReading, SensorReadings};
use crate::{Approach, ByApproach, TickCounter};

/// Read-only snapshot of one decision tick. Rebuilt in full every tick.
#[derive(Resource, Debug, Default, Clone, Copy, Serialize, Deserialize)]
pub struct TickSnapshot {
    /// Motion tick at which the decision pass ran.
    pub tick: u64,
    pub signals: ByApproach<Signal>,
    pub sensors: ByApproach<SensorReading>,
    pub pressure: u32,
}

pub fn publish_snapshot(
    tick: Res<TickCounter>,
    signals: Res<Signals>,
    readings: Res<SensorReadings>,
    pressure: Res<PressureCounter>,
    mut snapshot: ResMut<TickSnapshot>,
) {
    *snapshot = TickSnapshot {
        tick: tick.0,
        signals: signals.0,
        sensors: readings.0,
        pressure: pressure.0,
    };

    info!(
        "state: principal {} ({}s) | secondary {} ({}s)",
        snapshot.signals.principal.state.label(),
        snapshot.signals.principal.elapsed,
        snapshot.signals.secondary.state.label(),
        snapshot.signals.secondary.elapsed,
    );
    for approach in Approach::ALL {
        let reading = snapshot.sensors.get(approach);
        info!(
            "sensors {}: demand={} reserve={} exit_blocked={}",
            approach.label(),
            reading.demand_count,
            reading.reserve_count,
            reading.exit_blocked,
        );
    }
    info!("pressure counter: {}", snapshot.pressure);

    if let Ok(json) = serde_json::to_string(&*snapshot) {
        debug!(target: "telemetry", "{json}");
    }
}
