use bevy::prelude::*;
use particles_sim::simulation::Simulation;

/// Marker for particle dot entities in the render world
#[derive(Component)]
pub struct ParticleDot {
    pub index: usize,
}

/// Side length of the on-screen square the unit domain maps onto
const VIEW_SIZE: f32 = 1000.0;

/// On-screen dot radius
const DOT_RADIUS: f32 = 2.0;

/// Spawn one dot per particle, with one shared material per color
pub fn spawn_particle_visuals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    sim: Res<Simulation>,
) {
    let mesh = meshes.add(Circle::new(DOT_RADIUS));

    let color_count = sim.config().color_count;
    let palette: Vec<Handle<ColorMaterial>> = (0..color_count)
        .map(|color| materials.add(ColorMaterial::from(dot_color(color, color_count))))
        .collect();

    let (pos_x, pos_y) = sim.positions();
    for (i, &color) in sim.colors().iter().enumerate() {
        commands.spawn((
            Mesh2d(mesh.clone()),
            MeshMaterial2d(palette[color as usize].clone()),
            Transform::from_translation(to_view(pos_x[i], pos_y[i])),
            ParticleDot { index: i },
        ));
    }

    info!(
        "Spawned {} particle dots ({} colors)",
        sim.particle_count(),
        color_count
    );
}

/// Copy simulation positions into dot transforms
pub fn update_particle_visuals(
    sim: Res<Simulation>,
    mut query: Query<(&mut Transform, &ParticleDot)>,
) {
    let (pos_x, pos_y) = sim.positions();
    for (mut transform, dot) in query.iter_mut() {
        if dot.index >= pos_x.len() {
            continue;
        }
        transform.translation = to_view(pos_x[dot.index], pos_y[dot.index]);
    }
}

/// Map unit-domain coordinates to world space, centered on the origin with
/// screen-style y (domain y grows downward)
fn to_view(x: f32, y: f32) -> Vec3 {
    Vec3::new((x - 0.5) * VIEW_SIZE, (0.5 - y) * VIEW_SIZE, 0.0)
}

/// Evenly spaced hues at full saturation, one per color index
fn dot_color(color: usize, color_count: usize) -> Color {
    Color::hsl(360.0 * color as f32 / color_count as f32, 1.0, 0.5)
}
