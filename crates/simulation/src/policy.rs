//! Arbitration policy: the six-rule decision procedure.
//!
//! Runs once per decision tick, after the sensor refresh. The rules are
//! evaluated in a fixed order and the first one that fires ends the tick:
//!
//! 1. Yellow dwell expiry: yellow held long enough goes red and schedules a
//!    delayed green handoff to the waiting approach.
//! 2. Both-red restart: grant green to an approach with demand and a clear
//!    exit, preferring the principal approach.
//! 3. Mutual deadlock: both exits blocked forces both signals red.
//! 4. Pressure accumulation: the waiting approach's demand feeds the counter.
//! 5. Change request: active exit blocked, or (after the minimum green) own
//!    demand exhausted while the other side waits, or pressure over threshold.
//! 6. Platoon protection: a small cluster at the stop line suppresses the
//!    change for one tick rather than splitting it mid-intersection.
//!
//! The original blocking one-second pause between red and the opposing green
//! is modeled as [`PendingHandoff`]: while a handoff is pending the decision
//! pass only checks readiness, and vehicle motion continues underneath.

use bevy::prelude::*;

use crate::config::{
    HANDOFF_DELAY_TICKS, MIN_GREEN_SECS, PLATOON_LIMIT, PRESSURE_THRESHOLD, YELLOW_DWELL_SECS,
};
use crate::signals::{SignalChanged, SignalState, Signals};
use crate::zones::SensorReadings;
use crate::{Approach, TickCounter};

/// Fixed policy constants. Carried as a resource so tests can vary the
/// thresholds; never mutated at runtime.
#[derive(Resource, Debug, Clone, Copy)]
pub struct PolicyParams {
    /// U: minimum green hold in seconds.
    pub min_green_secs: u32,
    /// N: accumulated pressure that forces a change request.
    pub pressure_threshold: u32,
    /// M: inclusive upper bound of a protected stop-line platoon.
    pub platoon_limit: u32,
    /// Yellow dwell in seconds before the red handoff.
    pub yellow_dwell_secs: u32,
}

impl Default for PolicyParams {
    fn default() -> Self {
        Self {
            min_green_secs: MIN_GREEN_SECS,
            pressure_threshold: PRESSURE_THRESHOLD,
            platoon_limit: PLATOON_LIMIT,
            yellow_dwell_secs: YELLOW_DWELL_SECS,
        }
    }
}

/// Accumulated unserved demand on the waiting approach. Reset to zero every
/// time the green approach changes.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct PressureCounter(pub u32);

/// A scheduled green grant, created when a yellow dwell expires. The waiting
/// approach receives green once the clearance delay has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Handoff {
    pub to: Approach,
    /// Motion tick at which the grant becomes due.
    pub ready_at: u64,
}

#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct PendingHandoff(pub Option<Handoff>);

/// One decision pass over the current signals and sensor readings. Mutates
/// the signals, pressure counter, and pending handoff in place and returns
/// the transitions that actually fired, in order.
pub fn arbitrate(
    signals: &mut Signals,
    readings: &SensorReadings,
    pressure: &mut PressureCounter,
    pending: &mut PendingHandoff,
    now_tick: u64,
    params: &PolicyParams,
) -> Vec<SignalChanged> {
    let mut changes = Vec::new();
    let mut transition = |signals: &mut Signals, approach: Approach, state: SignalState| {
        if signals.get_mut(approach).transition_to(state) {
            changes.push(SignalChanged { approach, state });
        }
    };

    // A pending handoff owns the pipeline until the clearance delay passes.
    if let Some(handoff) = pending.0 {
        if now_tick >= handoff.ready_at {
            transition(signals, handoff.to, SignalState::Green);
            pressure.0 = 0;
            pending.0 = None;
        }
        return changes;
    }

    let Some(active) = signals.active_approach() else {
        // Rule 2: both red. Grant green where there is demand and a clear
        // exit, preferring the principal approach; otherwise stay red.
        for approach in Approach::ALL {
            let reading = readings.get(approach);
            if reading.demand_count > 0 && !reading.exit_blocked {
                transition(signals, approach, SignalState::Green);
                pressure.0 = 0;
                break;
            }
        }
        return changes;
    };
    let waiting = active.other();

    // Rule 1: a yellow signal only waits out its dwell; nothing else runs.
    if signals.get(active).state == SignalState::Yellow {
        if signals.get(active).elapsed >= params.yellow_dwell_secs {
            transition(signals, active, SignalState::Red);
            pending.0 = Some(Handoff {
                to: waiting,
                ready_at: now_tick + HANDOFF_DELAY_TICKS,
            });
        }
        return changes;
    }

    let own = *readings.get(active);
    let cross = *readings.get(waiting);

    // Rule 3: mutual deadlock. Clear the whole intersection.
    if own.exit_blocked && cross.exit_blocked {
        transition(signals, active, SignalState::Red);
        transition(signals, waiting, SignalState::Red);
        return changes;
    }

    // Rule 4: unserved demand keeps accumulating while green is held.
    pressure.0 += cross.demand_count;

    // Rule 5: evaluate a change request.
    let mut change_requested = own.exit_blocked;
    if signals.get(active).elapsed < params.min_green_secs {
        // Minimum green guarantee outranks every request source.
        return changes;
    }
    if own.demand_count == 0 && cross.demand_count > 0 {
        change_requested = true;
    }
    if pressure.0 > params.pressure_threshold {
        change_requested = true;
    }

    if change_requested {
        // Rule 6: don't split a small platoon crossing the stop line.
        if own.reserve_count > 0 && own.reserve_count <= params.platoon_limit {
            return changes;
        }
        transition(signals, active, SignalState::Yellow);
    }

    changes
}

/// Decision-tick system wrapper around [`arbitrate`]: applies the pass and
/// forwards real transitions as events and log lines.
pub fn apply_policy(
    mut signals: ResMut<Signals>,
    readings: Res<SensorReadings>,
    mut pressure: ResMut<PressureCounter>,
    mut pending: ResMut<PendingHandoff>,
    tick: Res<TickCounter>,
    params: Res<PolicyParams>,
    mut events: EventWriter<SignalChanged>,
) {
    for change in arbitrate(
        &mut signals,
        &readings,
        &mut pressure,
        &mut pending,
        tick.0,
        &params,
    ) {
        info!(
            "signal {} changed to {}",
            change.approach.label(),
            change.state.label()
        );
        events.send(change);
    }
}
