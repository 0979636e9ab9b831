use rand::Rng;
use thiserror::Error;

/// A Galton board: `width` landing slots beneath `depth` rows of pegs.
///
/// A ball starts in one of the slots and falls one peg row at a time. Each
/// row either bumps it one slot sideways or lets it drop straight through,
/// and the position is clamped to the board after every row, so a ball
/// pressed against a wall stays on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    width: usize,
    depth: usize,
}

/// Errors that can occur when constructing a board.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("board width must be nonzero")]
    ZeroWidth,
}

impl Board {
    /// Creates a board with `width` landing slots and `depth` peg rows.
    ///
    /// Bump directions alternate row by row (right on even rows, left on
    /// odd), so an even `depth` is recommended: an odd depth leaves one
    /// rightward row unpaired and skews the walk.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` is zero.
    pub fn new(width: usize, depth: usize) -> Result<Self, BoardError> {
        if width == 0 {
            return Err(BoardError::ZeroWidth);
        }
        Ok(Self { width, depth })
    }

    /// Returns the number of landing slots.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of peg rows a ball falls through.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the center slot, the usual drop point.
    #[must_use]
    pub fn center(&self) -> usize {
        self.width / 2
    }

    /// Walks a ball through the peg rows with a predetermined flip sequence.
    ///
    /// Row `d` bumps right when `d` is even and left when odd; the `d`-th
    /// flip decides whether the bump lands or the ball falls straight
    /// through. The position is clamped to the board after every row, and a
    /// `start` beyond the last slot is clamped before the walk begins.
    ///
    /// Flips beyond `depth` are ignored; if `flips` runs out early, the
    /// remaining rows are skipped.
    #[must_use]
    pub fn walk(&self, start: usize, flips: impl IntoIterator<Item = bool>) -> usize {
        let last = self.width - 1;
        let mut position = start.min(last);

        for (d, flip) in flips.into_iter().take(self.depth).enumerate() {
            if flip {
                position = if d % 2 == 0 {
                    (position + 1).min(last)
                } else {
                    position.saturating_sub(1)
                };
            }
        }

        position
    }

    /// Drops a ball from `start`, flipping a fair coin at every peg row.
    pub fn drop_ball<R: Rng + ?Sized>(&self, start: usize, rng: &mut R) -> usize {
        self.walk(start, std::iter::from_fn(|| Some(rng.gen_bool(0.5))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn zero_depth_returns_start_unchanged() {
        let board = Board::new(50, 0).expect("valid board");
        assert_eq!(board.walk(25, []), 25);

        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(board.drop_ball(25, &mut rng), 25);
    }

    #[test]
    fn forced_flips_cancel_over_one_row_pair() {
        // Row 0 bumps right, row 1 bumps left. Taking both lands back home.
        let board = Board::new(50, 2).expect("valid board");
        assert_eq!(board.walk(10, [true, true]), 10);
    }

    #[test]
    fn forced_flips_apply_alternating_bumps() {
        let board = Board::new(50, 4).expect("valid board");

        assert_eq!(board.walk(10, [true, false]), 11);
        assert_eq!(board.walk(10, [false, true]), 9);
        assert_eq!(board.walk(10, [false, false, false, false]), 10);
        assert_eq!(board.walk(10, [true, false, true, false]), 12);
    }

    #[test]
    fn walls_clamp_the_walk() {
        let board = Board::new(3, 2).expect("valid board");

        // A rightward bump at the last slot stays put.
        assert_eq!(board.walk(2, [true, false]), 2);

        // A leftward bump at slot zero stays put.
        assert_eq!(board.walk(0, [false, true]), 0);
    }

    #[test]
    fn out_of_range_start_is_clamped() {
        let board = Board::new(50, 0).expect("valid board");
        assert_eq!(board.walk(usize::MAX, []), 49);
    }

    #[test]
    fn extra_flips_are_ignored() {
        let board = Board::new(50, 1).expect("valid board");
        assert_eq!(board.walk(10, [true, true, true, true]), 11);
    }

    #[test]
    fn drop_stays_in_range_for_any_start_and_depth() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for depth in [0, 1, 2, 5, 50, 51] {
            let board = Board::new(50, depth).expect("valid board");
            for start in 0..50 {
                for _ in 0..20 {
                    let position = board.drop_ball(start, &mut rng);
                    assert!(position < 50, "landed at {position} from start {start}");
                }
            }
        }
    }

    #[test]
    fn drop_ball_accepts_a_type_erased_generator() {
        let board = Board::new(50, 50).expect("valid board");
        let mut seeded = ChaCha8Rng::seed_from_u64(11);
        let rng: &mut dyn rand::RngCore = &mut seeded;

        let position = board.drop_ball(25, rng);
        assert!(position < 50);
    }

    #[test]
    fn errors_on_zero_width() {
        assert_eq!(Board::new(0, 10), Err(BoardError::ZeroWidth));
    }

    #[test]
    fn center_is_half_the_width() {
        assert_eq!(Board::new(50, 0).expect("valid board").center(), 25);
        assert_eq!(Board::new(5, 0).expect("valid board").center(), 2);
    }
}
