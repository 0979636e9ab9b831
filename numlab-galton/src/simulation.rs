use rand::Rng;

use crate::{board::Board, histogram::Histogram};

/// Drops `trials` balls from the board's center slot and histograms where
/// they land.
///
/// Trials are independent and run sequentially. The caller supplies the
/// random source, so a seeded generator reproduces a run exactly.
pub fn run<R: Rng + ?Sized>(board: &Board, trials: usize, rng: &mut R) -> Histogram {
    let mut histogram = Histogram::for_board(board);
    let start = board.center();

    for _ in 0..trials {
        histogram.record(board.drop_ball(start, rng));
    }

    histogram
}
