//! Ground-state energy of a quantum harmonic oscillator via the Numerov
//! method.
//!
//! The time-independent Schrödinger equation is integrated across a fixed
//! spatial domain; the wavefunction value arriving at the far boundary
//! vanishes only when the trial energy is an eigenvalue. This crate splits
//! the problem the same way:
//!
//! - [`oscillator`] — the Numerov boundary-value estimator for this potential
//! - [`search`] — adjusts a trial energy until the boundary value vanishes
//! - [`Observer`] — receives search events and can steer or stop the search
//! - [`ground_state`] — the whole procedure with the reference parameters

mod observe;
pub mod oscillator;
pub mod search;

pub use observe::Observer;

use search::{Config, Error, Solution};

/// Finds the oscillator's ground-state energy with the reference parameters.
///
/// Equivalent to [`search::solve_unobserved`] with a default [`Config`]. To
/// watch the search converge, attach an observer via [`search::solve`].
///
/// # Errors
///
/// Returns an error if the search does not converge within the default
/// iteration bound.
pub fn ground_state() -> Result<Solution, Error> {
    search::solve_unobserved(&Config::default())
}
