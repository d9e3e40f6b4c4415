use bevy::prelude::*;

use super::particles;
use super::ui;

/// Main render plugin: camera, particle dots, HUD overlay, keyboard input
pub struct ParticlesRenderPlugin;

impl Plugin for ParticlesRenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ui::HudThrottle>()
            .add_systems(
                Startup,
                (spawn_camera, particles::spawn_particle_visuals, ui::spawn_hud),
            )
            .add_systems(
                Update,
                (
                    particles::update_particle_visuals,
                    ui::update_hud,
                    ui::keyboard_control_system,
                ),
            );
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
