pub mod config;
pub mod constants;
pub mod matrix;
pub mod types;

pub use config::SimConfig;
pub use constants::*;
pub use matrix::{InteractionMatrix, MatrixError};
pub use types::Ensemble;
