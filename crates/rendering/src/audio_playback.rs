//! Audio cue subscriber for signal changes.
//!
//! Consumes [`SignalChanged`] events and logs each cue at debug level; no
//! audio asset files ship with the repository, so playback degrades to a
//! no-op without touching the controller. When a cue asset is added this
//! module can load it and play via Bevy's `AudioPlayer` API.

use bevy::prelude::*;

use simulation::signals::SignalChanged;

pub fn play_change_cue(mut changes: EventReader<SignalChanged>) {
    for change in changes.read() {
        debug!(
            "cue: signal {} -> {}",
            change.approach.label(),
            change.state.label()
        );
    }
}
