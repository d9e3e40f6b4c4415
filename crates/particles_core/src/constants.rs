// Simulation-scaled units:
// - Space: the unit torus [0, 1) x [0, 1); positions wrap at the edges
// - Time: one step advances the clock by dt simulated seconds
// The values below are the canonical defaults; SimConfig carries the live
// parameters for a running simulation.

/// Short-range repulsion boundary of the force law, in distance normalized
/// by the cutoff radius. Below this every color pair repels.
pub const BETA: f32 = 0.3;

/// Default number of particles in the ensemble
pub const DEFAULT_PARTICLE_COUNT: usize = 1250;

/// Default number of particle colors (interaction matrix dimension)
pub const DEFAULT_COLOR_COUNT: usize = 6;

/// Default fixed timestep (simulated seconds)
pub const DEFAULT_DT: f32 = 0.02;

/// Default time for velocity to halve under friction (simulated seconds)
pub const DEFAULT_FRICTION_HALF_LIFE: f32 = 0.04;

/// Default interaction cutoff radius (domain units)
pub const DEFAULT_R_MAX: f32 = 0.1;

/// Default scale factor applied to accumulated forces
pub const DEFAULT_FORCE_SCALE: f32 = 10.0;
