use thiserror::Error;
use uom::si::{energy::megaelectronvolt, f64::Energy};

/// Configuration for the energy search.
///
/// The defaults reproduce the reference harmonic-oscillator run: start at
/// 1 MeV, move in 0.1 MeV steps, shrink tenfold on each overshoot, and call
/// the Numerov estimator with 200 grid steps per trial energy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Trial energy the first iteration steps away from.
    pub initial_energy: Energy,

    /// Energy adjustment applied per iteration before any refinement.
    pub initial_step: Energy,

    /// Terminal condition: converged once `|psi| <= psi_tolerance`.
    pub psi_tolerance: f64,

    /// Factor the step shrinks by on each overshoot.
    pub step_reduction: f64,

    /// Grid steps used by the Numerov estimator at each trial energy.
    pub numerov_iterations: usize,

    /// Bound on search iterations before giving up.
    pub max_iters: usize,
}

/// Errors that can occur when validating an energy search config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("initial_energy must be finite")]
    InitialEnergy,

    #[error("initial_step must be finite and positive")]
    InitialStep,

    #[error("psi_tolerance must be finite and non-negative")]
    PsiTolerance,

    #[error("step_reduction must be finite and greater than 1")]
    StepReduction,

    #[error("numerov_iterations must be at least 2")]
    NumerovIterations,

    #[error("max_iters must be nonzero")]
    MaxIters,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_energy: Energy::new::<megaelectronvolt>(1.0),
            initial_step: Energy::new::<megaelectronvolt>(0.1),
            psi_tolerance: 1e-9,
            step_reduction: 10.0,
            numerov_iterations: 200,
            max_iters: 100,
        }
    }
}

impl Config {
    /// Validates the search parameters.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first parameter that is non-finite, out
    /// of range, or too small to run the search.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.initial_energy.get::<megaelectronvolt>().is_finite() {
            return Err(ConfigError::InitialEnergy);
        }

        let step = self.initial_step.get::<megaelectronvolt>();
        if !step.is_finite() || step <= 0.0 {
            return Err(ConfigError::InitialStep);
        }

        if !self.psi_tolerance.is_finite() || self.psi_tolerance < 0.0 {
            return Err(ConfigError::PsiTolerance);
        }

        if !self.step_reduction.is_finite() || self.step_reduction <= 1.0 {
            return Err(ConfigError::StepReduction);
        }

        if self.numerov_iterations < 2 {
            return Err(ConfigError::NumerovIterations);
        }

        if self.max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }

        Ok(())
    }
}
