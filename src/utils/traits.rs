use crate::Grid;

/// Game engine for Game of Life on a bounded field.
///
/// Cells outside the field are permanently dead. An engine keeps the current
/// generation and the one right before it.
pub trait Engine {
    /// Create an engine whose current generation is `grid`.
    fn from_grid(grid: &Grid) -> Self
    where
        Self: Sized;

    /// Number of visible rows.
    fn rows(&self) -> usize;

    /// Number of visible columns.
    fn cols(&self) -> usize;

    /// Number of generations advanced since construction.
    fn generation(&self) -> u64;

    /// Get cell state of the current generation at (row, col).
    fn get_cell(&self, row: usize, col: usize) -> bool;

    /// Compute the next generation; the current one becomes the previous.
    fn advance(&mut self);

    /// Advance the field `generations` times.
    fn update(&mut self, generations: u64) {
        for _ in 0..generations {
            self.advance();
        }
    }

    /// Current generation without padding.
    fn current_grid(&self) -> Grid;

    /// Previous generation without padding, `None` until the first `advance`.
    fn previous_grid(&self) -> Option<Grid>;

    /// Total number of alive cells in the current generation.
    fn population(&self) -> usize {
        self.current_grid().population()
    }
}
