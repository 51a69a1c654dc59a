//! Egui status panel: the per-tick telemetry snapshot plus the override
//! flags, read-only except for what the keyboard controls already mutate.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::telemetry::TickSnapshot;
use simulation::zones::ExitOverrides;
use simulation::Approach;

pub fn status_panel_ui(
    mut contexts: EguiContexts,
    snapshot: Res<TickSnapshot>,
    overrides: Res<ExitOverrides>,
) {
    egui::Window::new("Intersection")
        .anchor(egui::Align2::LEFT_TOP, [10.0, 10.0])
        .resizable(false)
        .show(contexts.ctx_mut(), |ui| {
            for approach in Approach::ALL {
                let signal = snapshot.signals.get(approach);
                let reading = snapshot.sensors.get(approach);
                ui.label(format!(
                    "{}: {} ({}s)  d={} r={} blocked={}",
                    approach.label(),
                    signal.state.label(),
                    signal.elapsed,
                    reading.demand_count,
                    reading.reserve_count,
                    reading.exit_blocked,
                ));
            }
            ui.label(format!("pressure: {}", snapshot.pressure));
            ui.separator();
            let flags = &overrides.0;
            ui.label(format!(
                "overrides: principal={} secondary={}",
                flags.principal, flags.secondary
            ));
            ui.label("B/N: force blockage   R: clear");
        });
}
