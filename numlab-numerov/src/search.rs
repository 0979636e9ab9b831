//! Damped sign-flip search for the oscillator's ground-state energy.
//!
//! # Algorithm
//!
//! The Numerov estimator in [`crate::oscillator`] integrates the
//! wavefunction across the domain and reports its value at the far boundary.
//! That value vanishes only at an eigenvalue, and near the ground state its
//! sign says which side of the eigenvalue a trial energy sits on. The search
//! walks the trial energy in a fixed direction until the sign of the
//! boundary value calls for a turn, then shrinks the step by a fixed factor
//! and reverses, homing in on the zero crossing.
//!
//! # Convergence
//!
//! Overshoot is inferred purely from sign flips; the search keeps no
//! bracketing points. It converges quickly for the built-in harmonic
//! oscillator, whose boundary value crosses zero smoothly near the ground
//! state, but it carries no termination guarantee for arbitrary parameters.
//! [`Config::max_iters`] bounds the loop, and exhausting the bound is
//! reported as [`Error::ConvergenceFailure`] rather than returned as a
//! result.
//!
//! # Observer Events
//!
//! The search emits one [`Event`] per iteration, after the trial energy has
//! moved and its boundary value has been computed. A smaller `step` than the
//! previous event's marks a refinement: the search overshot and turned
//! around. Observers can return [`Action::StopEarly`] to halt immediately
//! with the current iterate.

mod action;
mod config;
mod direction;
mod error;
mod event;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use direction::StepDirection;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use uom::si::{energy::megaelectronvolt, f64::Energy};

use crate::{observe::Observer, oscillator};

/// Searches for the energy where the boundary wavefunction value vanishes.
///
/// The observer receives an [`Event`] for each iteration. See the
/// [module docs](self) for event timing and observer actions.
///
/// # Errors
///
/// Returns an error if the config is invalid, the boundary value turns
/// non-finite, or the iteration bound is reached before convergence.
pub fn solve<Obs>(config: &Config, mut observer: Obs) -> Result<Solution, Error>
where
    Obs: Observer<Event, Action>,
{
    config.validate()?;

    let mut direction = StepDirection::Increasing;
    let mut step = config.initial_step.get::<megaelectronvolt>();
    let mut energy = config.initial_energy.get::<megaelectronvolt>();

    // Sentinel that forces the first update; never observed or returned.
    let mut psi = -1.0;

    for iter in 1..=config.max_iters {
        if psi > 0.0 {
            if direction == StepDirection::Increasing {
                step /= config.step_reduction;
            }
            direction = StepDirection::Decreasing;
            energy -= step;
        } else {
            if direction == StepDirection::Decreasing {
                step /= config.step_reduction;
            }
            direction = StepDirection::Increasing;
            energy += step;
        }

        psi = oscillator::boundary_psi_mev(energy, config.numerov_iterations);

        if !psi.is_finite() {
            return Err(Error::NonFinitePsi {
                energy_mev: energy,
                psi,
            });
        }

        let event = Event {
            iter,
            direction,
            step: Energy::new::<megaelectronvolt>(step),
            energy: Energy::new::<megaelectronvolt>(energy),
            psi,
        };

        if let Some(action) = observer.observe(&event) {
            match action {
                Action::StopEarly => {
                    return Ok(Solution {
                        status: Status::StoppedByObserver,
                        energy: Energy::new::<megaelectronvolt>(energy),
                        psi,
                        iters: iter,
                    });
                }
            }
        }

        if psi.abs() <= config.psi_tolerance {
            return Ok(Solution {
                status: Status::Converged,
                energy: Energy::new::<megaelectronvolt>(energy),
                psi,
                iters: iter,
            });
        }
    }

    Err(Error::ConvergenceFailure {
        max_iters: config.max_iters,
        energy_mev: energy,
        psi,
    })
}

/// Runs the energy search without observation.
///
/// # Errors
///
/// Returns an error if the config is invalid, the boundary value turns
/// non-finite, or the iteration bound is reached before convergence.
pub fn solve_unobserved(config: &Config) -> Result<Solution, Error> {
    solve(config, ())
}
