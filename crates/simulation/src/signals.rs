//! Per-approach signal state machine.
//!
//! Each approach carries a two-timer machine: the current lamp state and the
//! whole seconds elapsed since the last change. All mutation goes through
//! [`Signal::transition_to`], which the arbitration policy drives; everything
//! else (rendering, audio, telemetry) only reads snapshots or subscribes to
//! [`SignalChanged`] events.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{Approach, ByApproach};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalState {
    #[default]
    Red,
    Green,
    Yellow,
}

impl SignalState {
    /// Green and Yellow both hold the intersection; at most one approach may
    /// be in either at a time.
    pub fn holds_intersection(self) -> bool {
        matches!(self, SignalState::Green | SignalState::Yellow)
    }

    pub fn label(self) -> &'static str {
        match self {
            SignalState::Red => "RED",
            SignalState::Green => "GREEN",
            SignalState::Yellow => "YELLOW",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signal {
    pub state: SignalState,
    /// Whole decision ticks (seconds) since the last state change.
    pub elapsed: u32,
}

impl Signal {
    /// Switch to `new_state`, resetting the elapsed timer. Returns `false`
    /// without touching the timer when the state is unchanged, so callers can
    /// emit change notifications only for real transitions.
    pub fn transition_to(&mut self, new_state: SignalState) -> bool {
        if self.state == new_state {
            return false;
        }
        self.state = new_state;
        self.elapsed = 0;
        true
    }
}

/// The two signals of the intersection. Both start Red; startup grants the
/// principal approach green.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct Signals(pub ByApproach<Signal>);

impl Signals {
    pub fn get(&self, approach: Approach) -> &Signal {
        self.0.get(approach)
    }

    pub fn get_mut(&mut self, approach: Approach) -> &mut Signal {
        self.0.get_mut(approach)
    }

    /// The approach currently holding the intersection (Green or Yellow), or
    /// `None` during an all-red handoff / deadlock-recovery phase.
    pub fn active_approach(&self) -> Option<Approach> {
        Approach::ALL
            .into_iter()
            .find(|&a| self.get(a).state.holds_intersection())
    }
}

/// Emitted on every real signal transition. Consumed by the audio cue
/// subscriber and the rendering layer; losing a subscriber has no effect on
/// the controller.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalChanged {
    pub approach: Approach,
    pub state: SignalState,
}

/// Startup: both signals were created Red; hand the principal approach the
/// first green so the controller starts from a served state.
pub fn grant_initial_green(
    mut signals: ResMut<Signals>,
    mut changes: EventWriter<SignalChanged>,
) {
    if signals.get_mut(Approach::Principal).transition_to(SignalState::Green) {
        info!("signal principal changed to GREEN");
        changes.send(SignalChanged {
            approach: Approach::Principal,
            state: SignalState::Green,
        });
    }
}

/// Advance both elapsed timers by one second. Runs once per decision tick,
/// after the policy pass, so a signal changed this tick reads elapsed = 1 on
/// the next decision.
pub fn tick_signal_timers(mut signals: ResMut<Signals>) {
    for approach in Approach::ALL {
        signals.get_mut(approach).elapsed += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_resets_elapsed() {
        let mut signal = Signal {
            state: SignalState::Red,
            elapsed: 7,
        };
        assert!(signal.transition_to(SignalState::Green));
        assert_eq!(signal.state, SignalState::Green);
        assert_eq!(signal.elapsed, 0);
    }

    #[test]
    fn same_state_transition_is_a_noop() {
        let mut signal = Signal {
            state: SignalState::Green,
            elapsed: 4,
        };
        assert!(!signal.transition_to(SignalState::Green));
        assert_eq!(signal.elapsed, 4, "no-op must not reset the timer");
    }

    #[test]
    fn active_approach_finds_green_and_yellow() {
        let mut signals = Signals::default();
        assert_eq!(signals.active_approach(), None);

        signals.get_mut(Approach::Secondary).state = SignalState::Green;
        assert_eq!(signals.active_approach(), Some(Approach::Secondary));

        signals.get_mut(Approach::Secondary).state = SignalState::Yellow;
        assert_eq!(signals.active_approach(), Some(Approach::Secondary));
    }

    #[test]
    fn timers_advance_one_second_per_tick() {
        let mut signals = Signals::default();
        signals.get_mut(Approach::Principal).elapsed = 2;
        for approach in Approach::ALL {
            signals.get_mut(approach).elapsed += 1;
        }
        assert_eq!(signals.get(Approach::Principal).elapsed, 3);
        assert_eq!(signals.get(Approach::Secondary).elapsed, 1);
    }
}
