use particles_core::InteractionMatrix;
use particles_core::constants::BETA;
use rayon::prelude::*;

/// Radial force law between two particles.
///
/// `r` is the center distance pre-normalized by the cutoff radius and `a`
/// is the matrix coefficient for the ordered color pair. Below BETA the
/// result is `r / BETA - 1`: repulsion for every color pair, strongest
/// (-1) at contact, fading to zero at BETA. From BETA to 1 it is a tent
/// kernel peaking at (1 + BETA) / 2 with value `a`, zero at both ends, so
/// the coefficient's sign decides attraction or repulsion at mid range.
/// At and beyond the cutoff the force is exactly zero. Continuous at both
/// seams.
pub fn force_law(r: f32, a: f32) -> f32 {
    if r < BETA {
        r / BETA - 1.0
    } else if r < 1.0 {
        a * (1.0 - (2.0 * r - 1.0 - BETA).abs() / (1.0 - BETA))
    } else {
        0.0
    }
}

/// Accumulate pairwise forces on every particle from a snapshot of
/// positions taken at the start of the step.
///
/// Returns one unscaled (fx, fy) accumulator per particle. Pairs at r = 0
/// (the self-pair, or exactly coincident particles) and pairs at or beyond
/// `r_max` contribute nothing. Displacements are raw coordinate
/// differences: interactions do not reach across the torus seam.
///
/// The outer loop is parallel. Each particle reads only the shared
/// snapshot, so the result is invariant to how rayon partitions the
/// indices.
pub fn accumulate_forces(
    pos_x: &[f32],
    pos_y: &[f32],
    colors: &[u8],
    matrix: &InteractionMatrix,
    r_max: f32,
) -> Vec<[f32; 2]> {
    let n = pos_x.len();
    (0..n)
        .into_par_iter()
        .map(|i| {
            let mut fx = 0.0f32;
            let mut fy = 0.0f32;
            for j in 0..n {
                let dx = pos_x[j] - pos_x[i];
                let dy = pos_y[j] - pos_y[i];
                let r = dx.hypot(dy);
                if r > 0.0 && r < r_max {
                    let a = matrix.get(colors[i] as usize, colors[j] as usize);
                    let f = force_law(r / r_max, a);
                    fx += dx / r * f;
                    fy += dy / r * f;
                }
            }
            [fx, fy]
        })
        .collect()
}
