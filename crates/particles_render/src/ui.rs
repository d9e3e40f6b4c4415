use bevy::prelude::*;
use particles_sim::simulation::Simulation;
use std::path::PathBuf;

/// Marker for the HUD text
#[derive(Component)]
pub struct HudText;

/// HUD frame counter for throttling
#[derive(Resource, Default)]
pub struct HudThrottle {
    pub frame: u32,
}

/// Name used for quick-saved worlds
const QUICKSAVE_NAME: &str = "world";

fn saves_dir() -> PathBuf {
    PathBuf::from("saves")
}

/// Spawn the HUD overlay
pub fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Text::new("Particles"),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgba(0.85, 0.85, 0.95, 0.9)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        HudText,
    ));
}

/// Update HUD text every 10th frame (string formatting is expensive)
pub fn update_hud(
    sim: Res<Simulation>,
    mut throttle: ResMut<HudThrottle>,
    mut query: Query<&mut Text, With<HudText>>,
) {
    throttle.frame = throttle.frame.wrapping_add(1);
    if throttle.frame % 10 != 0 {
        return;
    }
    let Ok(mut text) = query.get_single_mut() else {
        return;
    };

    let paused = if sim.paused() { " [PAUSED]" } else { "" };
    **text = format!(
        "PARTICLES | {} particles, {} colors{}\n\
         \n\
         [Space] Pause  [N] New matrix\n\
         [F5] Save world  [F9] Load latest world",
        sim.particle_count(),
        sim.config().color_count,
        paused,
    );
}

/// Keyboard controls: pause, matrix randomization, world save/load
pub fn keyboard_control_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut sim: ResMut<Simulation>,
) {
    if keyboard.just_pressed(KeyCode::Space) {
        let paused = !sim.paused();
        sim.set_paused(paused);
    }
    if keyboard.just_pressed(KeyCode::KeyN) {
        sim.randomize_matrix();
    }
    if keyboard.just_pressed(KeyCode::F5) {
        match particles_storage::save_world(&saves_dir(), QUICKSAVE_NAME, sim.matrix()) {
            Ok(path) => info!("Saved world to {}", path.display()),
            Err(err) => warn!("Save failed: {err}"),
        }
    }
    if keyboard.just_pressed(KeyCode::F9) {
        let Some(path) = particles_storage::find_latest_world(&saves_dir()) else {
            warn!("No saved worlds in {}", saves_dir().display());
            return;
        };
        match particles_storage::load_world(&path) {
            Ok(world) => match sim.replace_matrix(world.matrix) {
                Ok(()) => info!("Loaded world '{}' from {}", world.name, path.display()),
                Err(err) => warn!("Rejected world {}: {err}", path.display()),
            },
            Err(err) => warn!("Load failed: {err}"),
        }
    }
}
