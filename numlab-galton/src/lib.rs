//! Monte Carlo simulation of a Galton board (bean machine).
//!
//! A ball dropped onto a board of staggered pegs is deflected sideways at
//! each row; collect enough drops and the landing slots trace out the
//! binomial bell curve. This crate models that experiment:
//!
//! - [`Board`] — board geometry and the per-ball random walk
//! - [`Histogram`] — frequency counts of where balls land
//! - [`run`] — drives many drops against an injected random source
//! - [`bean_machine`] — the one-call experiment using the thread-local RNG

mod board;
mod histogram;
mod simulation;

pub use board::{Board, BoardError};
pub use histogram::{Histogram, HistogramError};
pub use simulation::run;

/// Runs the classic bean machine experiment: `trials` balls dropped from the
/// center of a `width`-slot board through `depth` peg rows.
///
/// Uses the thread-local RNG. For a reproducible run, build a [`Board`] and
/// call [`run`] with a seeded generator instead.
///
/// # Errors
///
/// Returns an error if `width` is zero.
pub fn bean_machine(width: usize, depth: usize, trials: usize) -> Result<Histogram, BoardError> {
    let board = Board::new(width, depth)?;
    Ok(run(&board, trials, &mut rand::thread_rng()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bean_machine_counts_every_trial() {
        let histogram = bean_machine(50, 50, 2_000).expect("valid parameters");

        assert_eq!(histogram.counts().len(), 50);
        assert_eq!(histogram.total(), 2_000);
    }

    #[test]
    fn bean_machine_rejects_an_empty_board() {
        assert_eq!(bean_machine(0, 50, 100), Err(BoardError::ZeroWidth));
    }
}
