use thiserror::Error;

use super::ConfigError;

/// Errors that can occur during the energy search.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("no convergence within {max_iters} iterations: psi = {psi} at {energy_mev} MeV")]
    ConvergenceFailure {
        max_iters: usize,
        energy_mev: f64,
        psi: f64,
    },

    #[error("non-finite psi ({psi}) at {energy_mev} MeV")]
    NonFinitePsi { energy_mev: f64, psi: f64 },
}
