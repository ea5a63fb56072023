use crate::{
    table::{transition_table, TABLE_SIZE},
    Engine, Grid,
};
use tracing::{debug, trace};

/// Engine that derives every cell from the transition table.
///
/// The field is stored with one ring of dead cells around it, so the 3x3
/// window of a border cell never leaves the buffer. Two padded buffers are
/// kept: one holds the current generation, the other the previous one and
/// receives the next generation on `advance`.
pub struct LookupEngine {
    buffers: [Vec<bool>; 2],
    current: usize,
    rows: usize,
    cols: usize,
    generation: u64,
    table: &'static [bool; TABLE_SIZE],
}

impl LookupEngine {
    /// Current generation including the dead ring, `(rows + 2) x (cols + 2)` row-major.
    pub fn padded_current(&self) -> &[bool] {
        &self.buffers[self.current]
    }

    /// Previous generation including the dead ring.
    pub fn padded_previous(&self) -> Option<&[bool]> {
        (self.generation != 0).then(|| self.buffers[1 - self.current].as_slice())
    }

    pub fn table(&self) -> &'static [bool; TABLE_SIZE] {
        self.table
    }

    /// Writes the interior of `dst`; the ring of `dst` is left untouched.
    ///
    /// The code of the window is carried along the row: moving one cell right
    /// drops the leftmost column (`% 64`), shifts the rest up by one column
    /// (`* 8`) and appends the new right column.
    fn next_generation(
        src: &[bool],
        dst: &mut [bool],
        rows: usize,
        cols: usize,
        table: &[bool; TABLE_SIZE],
    ) {
        let w = cols + 2;
        for y in 1..=rows {
            let up = &src[(y - 1) * w..y * w];
            let mid = &src[y * w..(y + 1) * w];
            let down = &src[(y + 1) * w..(y + 2) * w];
            let row = &mut dst[y * w..(y + 1) * w];

            let mut code = (up[0] as usize) << 5
                | (up[1] as usize) << 2
                | (mid[0] as usize) << 4
                | (mid[1] as usize) << 1
                | (down[0] as usize) << 3
                | down[1] as usize;
            for x in 1..=cols {
                code = (code % 64) * 8
                    + ((up[x + 1] as usize) << 2)
                    + ((mid[x + 1] as usize) << 1)
                    + down[x + 1] as usize;
                row[x] = table[code];
            }
        }
    }
}

impl Engine for LookupEngine {
    fn from_grid(grid: &Grid) -> Self {
        let (rows, cols) = (grid.rows(), grid.cols());
        assert!(rows >= 1 && cols >= 1);
        let w = cols + 2;
        let mut cells = vec![false; w * (rows + 2)];
        for (y, row) in grid.iter_rows().enumerate() {
            let start = (y + 1) * w + 1;
            cells[start..start + cols].copy_from_slice(row);
        }
        debug!(rows, cols, "created lookup engine");
        Self {
            buffers: [cells, vec![false; w * (rows + 2)]],
            current: 0,
            rows,
            cols,
            generation: 0,
            table: transition_table(),
        }
    }

    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn generation(&self) -> u64 {
        self.generation
    }

    fn get_cell(&self, row: usize, col: usize) -> bool {
        assert!(row < self.rows && col < self.cols);
        self.buffers[self.current][(row + 1) * (self.cols + 2) + col + 1]
    }

    fn advance(&mut self) {
        let current = self.current;
        let (src, dst) = match &mut self.buffers {
            [a, b] if current == 0 => (&*a, b),
            [a, b] => (&*b, a),
        };
        Self::next_generation(src, dst, self.rows, self.cols, self.table);
        self.current = 1 - current;
        self.generation += 1;
        trace!(generation = self.generation, "advanced");
    }

    fn current_grid(&self) -> Grid {
        Grid::from_padded(self.padded_current(), self.rows, self.cols)
    }

    fn previous_grid(&self) -> Option<Grid> {
        self.padded_previous()
            .map(|cells| Grid::from_padded(cells, self.rows, self.cols))
    }
}
