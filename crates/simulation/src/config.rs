use std::time::Duration;

use crate::zones::Zone;

/// Fixed timestep for the motion cadence (20 Hz).
pub const MOTION_TICK: Duration = Duration::from_millis(50);
/// Seconds advanced per motion tick.
pub const MOTION_DT: f32 = 0.05;
/// Motion ticks per decision tick (20 ticks at 20 Hz = one decision per second).
pub const DECISION_INTERVAL_TICKS: u64 = 20;

/// Corridor geometry, in scalar progress units along each approach.
/// Vehicles enter before the demand zone and are despawned past EXIT_POS.
pub const ENTRY_POS: f32 = -40.0;
pub const EXIT_POS: f32 = 840.0;

/// Detection zones, identical layout on both approaches.
pub const DEMAND_ZONE: Zone = Zone::new(0.0, 310.0);
pub const RESERVE_ZONE: Zone = Zone::new(310.0, 345.0);
pub const EXIT_ZONE: Zone = Zone::new(450.0, 500.0);
/// Vehicles hold position here while their signal is not green. Coincides
/// with the reserve zone: a platoon is exactly the cluster at the stop line.
pub const STOP_ZONE: Zone = RESERVE_ZONE;

/// Vehicle speed range in units/second, drawn once at spawn.
pub const SPEED_MIN: f32 = 150.0;
pub const SPEED_MAX: f32 = 240.0;
/// Below this speed a vehicle in the exit zone counts as a downstream blockage.
pub const STALL_SPEED: f32 = 60.0;

/// Per-motion-tick arrival probability for each approach.
pub const ARRIVAL_PROBABILITY_PRINCIPAL: f64 = 0.15;
pub const ARRIVAL_PROBABILITY_SECONDARY: f64 = 0.09;

/// U: minimum green hold, in decision ticks (seconds).
pub const MIN_GREEN_SECS: u32 = 10;
/// N: pressure counter threshold that forces a change request.
pub const PRESSURE_THRESHOLD: u32 = 15;
/// M: largest stop-line cluster that platoon protection refuses to split.
pub const PLATOON_LIMIT: u32 = 2;
/// Yellow dwell before the red handoff, in decision ticks.
pub const YELLOW_DWELL_SECS: u32 = 3;
/// Clearance delay between one approach going red and the other going green,
/// in motion ticks (one second, i.e. exactly one decision interval).
pub const HANDOFF_DELAY_TICKS: u64 = 20;
