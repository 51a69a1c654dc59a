use bevy::prelude::*;
use bevy::window::PresentMode;

use simulation::sim_rng::SimRng;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Crossway — Self-Organizing Intersection".to_string(),
            resolution: (800.0, 600.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .add_plugins((
        simulation::SimulationPlugin,
        rendering::RenderingPlugin,
        ui::UiPlugin,
    ));

    // Reproducible runs: CROSSWAY_SEED pins the vehicle stream RNG.
    if let Ok(seed) = std::env::var("CROSSWAY_SEED") {
        match seed.parse::<u64>() {
            Ok(seed) => {
                app.insert_resource(SimRng::from_seed_u64(seed));
            }
            Err(_) => warn!("ignoring unparseable CROSSWAY_SEED: {seed}"),
        }
    }

    app.run();
}
