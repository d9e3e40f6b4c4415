use particles_core::{Ensemble, SimConfig};
use rand::Rng;

/// Generate the initial particle ensemble: uniform random positions on the
/// unit torus, uniform random colors, zero velocity.
pub fn spawn_ensemble(config: &SimConfig, rng: &mut impl Rng) -> Ensemble {
    let n = config.particle_count;
    let mut colors = Vec::with_capacity(n);
    let mut pos_x = Vec::with_capacity(n);
    let mut pos_y = Vec::with_capacity(n);

    for _ in 0..n {
        colors.push(rng.gen_range(0..config.color_count) as u8);
        pos_x.push(rng.gen_range(0.0..1.0));
        pos_y.push(rng.gen_range(0.0..1.0));
    }

    Ensemble {
        colors,
        pos_x,
        pos_y,
        vel_x: vec![0.0; n],
        vel_y: vec![0.0; n],
    }
}
