//! Keyboard test controls for the exit-blockage overrides.
//!
//! B asserts a simulated downstream incident on the principal approach, N on
//! the secondary, and R clears both. Overrides stay asserted until cleared;
//! this is the only external mutation path into sensor state.

use bevy::prelude::*;

use simulation::zones::ExitOverrides;
use simulation::Approach;

pub fn handle_override_keys(
    keys: Res<ButtonInput<KeyCode>>,
    mut overrides: ResMut<ExitOverrides>,
) {
    if keys.just_pressed(KeyCode::KeyB) {
        *overrides.0.get_mut(Approach::Principal) = true;
        info!("manual blockage asserted on principal approach");
    }
    if keys.just_pressed(KeyCode::KeyN) {
        *overrides.0.get_mut(Approach::Secondary) = true;
        info!("manual blockage asserted on secondary approach");
    }
    if keys.just_pressed(KeyCode::KeyR) {
        overrides.0 = Default::default();
        info!("manual blockages cleared");
    }
}
