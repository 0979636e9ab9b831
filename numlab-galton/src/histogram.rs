use thiserror::Error;

use crate::board::Board;

/// Frequency counts of ball landings by slot index.
///
/// Positions are clamped into range before counting, matching the board's
/// own clamping, so every recorded landing is counted somewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: Vec<usize>,
}

/// Errors that can occur when constructing a histogram.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HistogramError {
    #[error("histogram size must be nonzero")]
    ZeroSize,
}

impl Histogram {
    /// Creates a histogram with `size` empty bins.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is zero.
    pub fn new(size: usize) -> Result<Self, HistogramError> {
        if size == 0 {
            return Err(HistogramError::ZeroSize);
        }
        Ok(Self {
            counts: vec![0; size],
        })
    }

    /// Creates a histogram with one empty bin per board slot.
    #[must_use]
    pub fn for_board(board: &Board) -> Self {
        Self {
            counts: vec![0; board.width()],
        }
    }

    /// Counts one landing, clamping `position` to the last bin if needed.
    pub fn record(&mut self, position: usize) {
        let last = self.counts.len() - 1;
        self.counts[position.min(last)] += 1;
    }

    /// Returns the counts by slot index.
    #[must_use]
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Returns the total number of recorded landings.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_clamped_positions() {
        let mut histogram = Histogram::new(5).expect("valid size");
        for position in [0, 0, 2, 4, 4, 4] {
            histogram.record(position);
        }

        assert_eq!(histogram.counts(), &[2, 0, 1, 0, 3]);
    }

    #[test]
    fn out_of_range_records_land_in_the_last_bin() {
        let mut histogram = Histogram::new(3).expect("valid size");
        histogram.record(2);
        histogram.record(3);
        histogram.record(100);

        assert_eq!(histogram.counts(), &[0, 0, 3]);
    }

    #[test]
    fn total_matches_the_number_of_record_calls() {
        let mut histogram = Histogram::new(4).expect("valid size");
        let positions = [0, 9, 2, 2, 17, 1, 3, 3, 3];
        for position in positions {
            histogram.record(position);
        }

        assert_eq!(histogram.total(), positions.len());
    }

    #[test]
    fn errors_on_zero_size() {
        assert_eq!(Histogram::new(0), Err(HistogramError::ZeroSize));
    }

    #[test]
    fn for_board_matches_board_width() {
        let board = Board::new(12, 4).expect("valid board");
        let histogram = Histogram::for_board(&board);

        assert_eq!(histogram.counts().len(), 12);
        assert_eq!(histogram.total(), 0);
    }
}
