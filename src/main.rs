use bevy::prelude::*;
use particles_core::SimConfig;
use particles_render::plugin::ParticlesRenderPlugin;
use particles_sim::pipeline::SimulationPlugin;
use particles_sim::simulation::Simulation;

fn main() {
    let config = SimConfig::default();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Particles".into(),
                resolution: (1920.0, 1080.0).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.066, 0.066, 0.133)))
        .insert_resource(Simulation::new(config))
        .add_plugins(SimulationPlugin)
        .add_plugins(ParticlesRenderPlugin)
        .run();
}
