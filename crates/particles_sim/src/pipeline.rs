use bevy::prelude::*;

use super::simulation::Simulation;

/// Bevy plugin for the simulation pipeline
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, simulation_tick);
    }
}

/// Main simulation tick — exactly one fixed timestep per frame. Pause is
/// handled inside `Simulation::step`, so this stays a dumb gate.
fn simulation_tick(mut sim: ResMut<Simulation>) {
    sim.step();
}
