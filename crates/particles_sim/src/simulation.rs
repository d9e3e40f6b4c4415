use bevy::prelude::*;
use particles_core::{Ensemble, InteractionMatrix, MatrixError, SimConfig};
use particles_physics::forces;
use particles_physics::particle;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// The simulation context, tracked as a Bevy Resource.
///
/// Owns the interaction matrix, the particle ensemble, the parameters, and
/// a seeded RNG for matrix regeneration. The stepper here is the sole
/// mutator of the ensemble and the sole reader of the matrix while a step
/// is in progress; the renderer only ever sees state between steps.
#[derive(Resource)]
pub struct Simulation {
    config: SimConfig,
    matrix: InteractionMatrix,
    ensemble: Ensemble,
    rng: ChaCha8Rng,
    paused: bool,
}

impl Simulation {
    /// Build a simulation from config: seeded RNG, random matrix, random
    /// initial ensemble.
    pub fn new(config: SimConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let matrix = InteractionMatrix::random(config.color_count, &mut rng);
        let ensemble = particle::spawn_ensemble(&config, &mut rng);
        Self {
            config,
            matrix,
            ensemble,
            rng,
            paused: false,
        }
    }

    /// Build a simulation from explicit parts. The matrix dimension must
    /// match the config's color count.
    pub fn from_parts(config: SimConfig, matrix: InteractionMatrix, ensemble: Ensemble) -> Self {
        debug_assert_eq!(matrix.size(), config.color_count);
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self {
            config,
            matrix,
            ensemble,
            rng,
            paused: false,
        }
    }

    /// Advance the ensemble by exactly one fixed timestep.
    ///
    /// Two-pass update: every new velocity is computed from the position
    /// snapshot taken at the start of the step, then every position
    /// advances from its finalized velocity, then positions wrap back onto
    /// the torus. When paused this is a no-op and the ensemble is frozen.
    pub fn step(&mut self) {
        if self.paused {
            return;
        }

        let dt = self.config.dt;
        let decay = self.config.friction_decay();
        let force_scale = self.config.r_max * self.config.force_scale;

        let forces = forces::accumulate_forces(
            &self.ensemble.pos_x,
            &self.ensemble.pos_y,
            &self.ensemble.colors,
            &self.matrix,
            self.config.r_max,
        );

        let e = &mut self.ensemble;
        for (i, [fx, fy]) in forces.into_iter().enumerate() {
            e.vel_x[i] = e.vel_x[i] * decay + fx * force_scale * dt;
            e.vel_y[i] = e.vel_y[i] * decay + fy * force_scale * dt;
        }

        for i in 0..e.len() {
            e.pos_x[i] += e.vel_x[i] * dt;
            e.pos_y[i] += e.vel_y[i] * dt;
        }

        // Single correction per axis keeps positions in [0, 1): one step
        // never moves a particle a full domain width.
        for i in 0..e.len() {
            if e.pos_x[i] < 0.0 {
                e.pos_x[i] += 1.0;
            }
            if e.pos_x[i] >= 1.0 {
                e.pos_x[i] -= 1.0;
            }
            if e.pos_y[i] < 0.0 {
                e.pos_y[i] += 1.0;
            }
            if e.pos_y[i] >= 1.0 {
                e.pos_y[i] -= 1.0;
            }
        }
    }

    /// Replace the live matrix with an already-validated candidate whose
    /// dimension matches the running color count. On rejection the live
    /// matrix is untouched; the ensemble is never reset by a matrix change.
    pub fn replace_matrix(&mut self, candidate: InteractionMatrix) -> Result<(), MatrixError> {
        if candidate.size() != self.config.color_count {
            return Err(MatrixError::SizeMismatch {
                expected: self.config.color_count,
                found: candidate.size(),
            });
        }
        self.matrix = candidate;
        Ok(())
    }

    /// Regenerate the matrix in place with fresh uniform draws
    pub fn randomize_matrix(&mut self) {
        self.matrix = InteractionMatrix::random(self.config.color_count, &mut self.rng);
        info!(
            "Randomized {0}x{0} interaction matrix",
            self.config.color_count
        );
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn matrix(&self) -> &InteractionMatrix {
        &self.matrix
    }

    pub fn particle_count(&self) -> usize {
        self.ensemble.len()
    }

    /// Read-only position view for rendering
    pub fn positions(&self) -> (&[f32], &[f32]) {
        (&self.ensemble.pos_x, &self.ensemble.pos_y)
    }

    /// Read-only velocity view
    pub fn velocities(&self) -> (&[f32], &[f32]) {
        (&self.ensemble.vel_x, &self.ensemble.vel_y)
    }

    /// Read-only color view for rendering
    pub fn colors(&self) -> &[u8] {
        &self.ensemble.colors
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use particles_core::constants::{BETA, DEFAULT_DT, DEFAULT_FORCE_SCALE, DEFAULT_R_MAX};
    use particles_physics::forces::force_law;

    const EPS: f32 = 1e-6;

    fn two_particle_sim(coefficient: f32, separation: f32) -> Simulation {
        let config = SimConfig {
            particle_count: 2,
            color_count: 1,
            ..SimConfig::default()
        };
        let matrix = InteractionMatrix::from_rows(vec![vec![coefficient]]).unwrap();
        let ensemble = Ensemble {
            colors: vec![0, 0],
            pos_x: vec![0.25, 0.25 + separation],
            pos_y: vec![0.5, 0.5],
            vel_x: vec![0.0, 0.0],
            vel_y: vec![0.0, 0.0],
        };
        Simulation::from_parts(config, matrix, ensemble)
    }

    #[test]
    fn two_particles_attract_with_the_expected_velocity() {
        // Separation 0.5 * rMax normalizes to 0.5, past the repulsion
        // boundary, so the matrix coefficient governs
        assert!(0.5 > BETA);
        let mut sim = two_particle_sim(0.5, 0.5 * DEFAULT_R_MAX);
        sim.step();

        let expected =
            force_law(0.5, 0.5) * DEFAULT_R_MAX * DEFAULT_FORCE_SCALE * DEFAULT_DT;
        let (vel_x, vel_y) = sim.velocities();

        // Equal and opposite along the connecting line; friction acts on
        // zero initial velocity and contributes nothing
        assert!((vel_x[0] - expected).abs() < EPS);
        assert!((vel_x[1] + expected).abs() < EPS);
        assert!(vel_y[0].abs() < EPS);
        assert!(vel_y[1].abs() < EPS);

        // Positions advanced from the finalized velocities
        let (pos_x, _) = sim.positions();
        assert!((pos_x[0] - (0.25 + expected * DEFAULT_DT)).abs() < EPS);
    }

    #[test]
    fn lone_particle_only_decays_its_velocity() {
        let config = SimConfig {
            particle_count: 1,
            color_count: 1,
            ..SimConfig::default()
        };
        let matrix = InteractionMatrix::from_rows(vec![vec![1.0]]).unwrap();
        let ensemble = Ensemble {
            colors: vec![0],
            pos_x: vec![0.5],
            pos_y: vec![0.5],
            vel_x: vec![0.3],
            vel_y: vec![-0.2],
        };
        let decay = config.friction_decay();
        let mut sim = Simulation::from_parts(config, matrix, ensemble);
        sim.step();

        let (vel_x, vel_y) = sim.velocities();
        assert_eq!(vel_x[0], 0.3 * decay);
        assert_eq!(vel_y[0], -0.2 * decay);
    }

    #[test]
    fn positions_stay_on_the_torus() {
        let config = SimConfig {
            particle_count: 200,
            seed: 11,
            ..SimConfig::default()
        };
        let mut sim = Simulation::new(config);
        for _ in 0..10 {
            sim.step();
            let (pos_x, pos_y) = sim.positions();
            for i in 0..pos_x.len() {
                assert!((0.0..1.0).contains(&pos_x[i]));
                assert!((0.0..1.0).contains(&pos_y[i]));
            }
        }
    }

    #[test]
    fn wrap_pulls_an_escaping_particle_back_in() {
        let config = SimConfig {
            particle_count: 1,
            color_count: 1,
            ..SimConfig::default()
        };
        let matrix = InteractionMatrix::from_rows(vec![vec![0.0]]).unwrap();
        let ensemble = Ensemble {
            colors: vec![0],
            pos_x: vec![0.999],
            pos_y: vec![0.001],
            vel_x: vec![1.0],
            vel_y: vec![-1.0],
        };
        let mut sim = Simulation::from_parts(config, matrix, ensemble);
        sim.step();

        let (pos_x, pos_y) = sim.positions();
        assert!((0.0..1.0).contains(&pos_x[0]));
        assert!((0.0..1.0).contains(&pos_y[0]));
    }

    #[test]
    fn paused_simulation_is_frozen() {
        let mut sim = two_particle_sim(1.0, 0.05);
        sim.set_paused(true);

        let before_positions = sim.positions().0.to_vec();
        let before_velocities = sim.velocities().0.to_vec();
        sim.step();
        assert_eq!(sim.positions().0, before_positions.as_slice());
        assert_eq!(sim.velocities().0, before_velocities.as_slice());

        sim.set_paused(false);
        sim.step();
        assert_ne!(sim.velocities().0, before_velocities.as_slice());
    }

    #[test]
    fn rejected_replacement_leaves_the_live_matrix_unchanged() {
        let mut sim = two_particle_sim(0.5, 0.05);
        let live = sim.matrix().clone();

        let wrong_size =
            InteractionMatrix::from_rows(vec![vec![0.0, 0.0], vec![0.0, 0.0]]).unwrap();
        let err = sim.replace_matrix(wrong_size).unwrap_err();
        assert_eq!(err, MatrixError::SizeMismatch { expected: 1, found: 2 });
        assert_eq!(sim.matrix(), &live);

        let replacement = InteractionMatrix::from_rows(vec![vec![-0.5]]).unwrap();
        sim.replace_matrix(replacement.clone()).unwrap();
        assert_eq!(sim.matrix(), &replacement);
    }

    #[test]
    fn same_seed_steps_identically() {
        let config = SimConfig {
            particle_count: 150,
            seed: 3,
            ..SimConfig::default()
        };
        let mut a = Simulation::new(config.clone());
        let mut b = Simulation::new(config);
        for _ in 0..3 {
            a.step();
            b.step();
        }
        assert_eq!(a.positions(), b.positions());
        assert_eq!(a.velocities(), b.velocities());
    }
}
