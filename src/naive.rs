use crate::{Engine, Grid};

/// Straightforward engine: counts the neighbours of every cell and applies the
/// rules directly. Cells outside the field count as dead.
pub struct NaiveEngine {
    cells_curr: Vec<bool>,
    cells_prev: Vec<bool>,
    width: usize,
    height: usize,
    generation: u64,
}

impl NaiveEngine {
    fn count_neibs(&self, x: usize, y: usize) -> usize {
        let mut count = 0;
        for ny in y.saturating_sub(1)..=(y + 1).min(self.height - 1) {
            for nx in x.saturating_sub(1)..=(x + 1).min(self.width - 1) {
                if (nx, ny) != (x, y) {
                    count += self.cells_curr[nx + ny * self.width] as usize;
                }
            }
        }
        count
    }
}

impl Engine for NaiveEngine {
    fn from_grid(grid: &Grid) -> Self {
        let (width, height) = (grid.cols(), grid.rows());
        assert!(width >= 1 && height >= 1);
        let cells_curr = grid.iter_rows().flatten().copied().collect();
        Self {
            cells_curr,
            cells_prev: vec![false; width * height],
            width,
            height,
            generation: 0,
        }
    }

    fn rows(&self) -> usize {
        self.height
    }

    fn cols(&self) -> usize {
        self.width
    }

    fn generation(&self) -> u64 {
        self.generation
    }

    fn get_cell(&self, row: usize, col: usize) -> bool {
        assert!(row < self.height && col < self.width);
        self.cells_curr[col + row * self.width]
    }

    fn advance(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                let neibs = self.count_neibs(x, y);
                let next = if self.cells_curr[x + y * self.width] {
                    neibs == 2 || neibs == 3
                } else {
                    neibs == 3
                };
                self.cells_prev[x + y * self.width] = next;
            }
        }
        std::mem::swap(&mut self.cells_prev, &mut self.cells_curr);
        self.generation += 1;
    }

    fn current_grid(&self) -> Grid {
        Grid::from_cells(self.height, self.width, self.cells_curr.clone())
    }

    fn previous_grid(&self) -> Option<Grid> {
        if self.generation == 0 {
            return None;
        }
        Some(Grid::from_cells(
            self.height,
            self.width,
            self.cells_prev.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_neibs_at_border() {
        let engine = NaiveEngine::from_grid(&Grid::from_rows(&[[true; 3]; 3]).unwrap());
        assert_eq!(engine.count_neibs(0, 0), 3);
        assert_eq!(engine.count_neibs(1, 0), 5);
        assert_eq!(engine.count_neibs(1, 1), 8);
        assert_eq!(engine.count_neibs(2, 2), 3);
    }

    #[test]
    fn test_glider_moves() {
        let (o, x) = (false, true);
        let glider = [
            [o, x, o, o, o, o],
            [o, o, x, o, o, o],
            [x, x, x, o, o, o],
            [o, o, o, o, o, o],
            [o, o, o, o, o, o],
            [o, o, o, o, o, o],
        ];
        let mut engine = NaiveEngine::from_grid(&Grid::from_rows(&glider).unwrap());
        engine.update(4);
        assert_eq!(engine.generation(), 4);
        for y in 0..6 {
            for x in 0..6 {
                let expected = y >= 1 && x >= 1 && glider[y - 1][x - 1];
                assert_eq!(engine.get_cell(y, x), expected, "cell ({}, {})", y, x);
            }
        }
    }

    #[test]
    fn test_previous_generation() {
        let grid = Grid::random(5, 5, Some(42), 0.5).unwrap();
        let mut engine = NaiveEngine::from_grid(&grid);
        assert!(engine.previous_grid().is_none());
        engine.advance();
        assert_eq!(engine.previous_grid(), Some(grid));
    }
}
