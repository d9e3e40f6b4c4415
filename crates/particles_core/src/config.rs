use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Simulation configuration, fixed for the lifetime of a simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of particles in the ensemble
    pub particle_count: usize,
    /// Number of distinct particle colors (interaction matrix dimension)
    pub color_count: usize,
    /// Fixed timestep (simulated seconds)
    pub dt: f32,
    /// Time for velocity to halve under friction (simulated seconds)
    pub friction_half_life: f32,
    /// Interaction cutoff radius (domain units)
    pub r_max: f32,
    /// Scale factor applied to accumulated forces
    pub force_scale: f32,
    /// Random seed for deterministic simulation
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            color_count: DEFAULT_COLOR_COUNT,
            dt: DEFAULT_DT,
            friction_half_life: DEFAULT_FRICTION_HALF_LIFE,
            r_max: DEFAULT_R_MAX,
            force_scale: DEFAULT_FORCE_SCALE,
            seed: 42,
        }
    }
}

impl SimConfig {
    /// Per-step velocity decay factor: 0.5^(dt / half-life).
    /// Velocity halves every `friction_half_life` simulated seconds
    /// independent of step size.
    pub fn friction_decay(&self) -> f32 {
        0.5f32.powf(self.dt / self.friction_half_life)
    }
}
