use crate::{Error, Result};
use std::fmt;

/// Rectangular field of cells as the caller sees it, without padding.
///
/// Cells are stored row-major; `true` is alive. A `Grid` always has at
/// least one row and one column.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: Vec<bool>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Create a grid of dead cells.
    pub fn blank(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::EmptyUniverse);
        }
        Ok(Self {
            cells: vec![false; rows * cols],
            rows,
            cols,
        })
    }

    /// Build a grid from a slice of rows; every row must be as long as the first one.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        let mut grid = Self::blank(rows.len(), cols)?;
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(Error::RaggedRow {
                    line: y + 1,
                    expected: cols,
                    found: row.len(),
                });
            }
            grid.cells[y * cols..(y + 1) * cols].copy_from_slice(row);
        }
        Ok(grid)
    }

    /// Create a grid with random cells.
    ///
    /// `fill_rate` - probability of cell being alive
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn random(rows: usize, cols: usize, seed: Option<u64>, fill_rate: f64) -> Result<Self> {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        let mut result = Self::blank(rows, cols)?;
        for cell in result.cells.iter_mut() {
            *cell = rng.gen_bool(fill_rate);
        }
        Ok(result)
    }

    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<bool>) -> Self {
        assert!(rows >= 1 && cols >= 1);
        assert_eq!(cells.len(), rows * cols);
        Self { cells, rows, cols }
    }

    /// Cut the interior out of a field padded with one dead cell on every side.
    pub(crate) fn from_padded(padded: &[bool], rows: usize, cols: usize) -> Self {
        let width = cols + 2;
        assert_eq!(padded.len(), width * (rows + 2));
        let cells = padded
            .chunks_exact(width)
            .skip(1)
            .take(rows)
            .flat_map(|row| &row[1..=cols])
            .copied()
            .collect();
        Self { cells, rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Panics if `(row, col)` is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> bool {
        assert!(row < self.rows && col < self.cols);
        self.cells[row * self.cols + col]
    }

    /// Panics if `(row, col)` is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, state: bool) {
        assert!(row < self.rows && col < self.cols);
        self.cells[row * self.cols + col] = state;
    }

    pub fn row(&self, row: usize) -> &[bool] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks_exact(self.cols)
    }

    /// Total number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for &cell in row {
                write!(f, "{} ", if cell { '#' } else { '_' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
