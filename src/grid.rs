use crate::error::{Error, Result};

/// A single cell of a [`Grid`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Free,
    Blocked,
}

/// A `(row, column)` coordinate pair
pub type Pos = (usize, usize);

/// A rectangular layout of free and blocked cells, fixed at construction
///
/// Also owns the encoding between coordinates and the flat state indices
/// used by value tables: `state = row * cols + col`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Builds a grid from rows of cells
    ///
    /// Errors if the rows are empty or not all the same length.
    pub fn new(rows: Vec<Vec<Cell>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |r| r.len());
        if n_rows == 0 || n_cols == 0 {
            return Err(Error::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(n_rows * n_cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                return Err(Error::RaggedGrid {
                    row: i,
                    got: row.len(),
                    expected: n_cols,
                });
            }
            cells.extend(row);
        }

        Ok(Self {
            cells,
            rows: n_rows,
            cols: n_cols,
        })
    }

    /// Builds a fully open `rows x cols` grid
    pub fn open(rows: usize, cols: usize) -> Result<Self> {
        Self::new(vec![vec![Cell::Free; cols]; rows])
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of encoded states, one per cell
    pub fn n_states(&self) -> usize {
        self.rows * self.cols
    }

    /// Whether a signed candidate coordinate lands on the grid
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    /// The cell at an in-bounds coordinate
    pub fn cell(&self, (row, col): Pos) -> Cell {
        self.cells[row * self.cols + col]
    }

    /// Encodes an in-bounds coordinate as a flat state index
    pub fn state_of(&self, (row, col): Pos) -> usize {
        row * self.cols + col
    }

    /// Decodes a flat state index back into a coordinate
    pub fn pos_of(&self, state: usize) -> Pos {
        debug_assert!(state < self.n_states());
        (state / self.cols, state % self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_ragged_grids() {
        assert_eq!(Grid::new(vec![]), Err(Error::EmptyGrid));
        assert_eq!(Grid::new(vec![vec![]]), Err(Error::EmptyGrid));

        let ragged = Grid::new(vec![
            vec![Cell::Free, Cell::Free],
            vec![Cell::Free],
        ]);
        assert_eq!(
            ragged,
            Err(Error::RaggedGrid {
                row: 1,
                got: 1,
                expected: 2
            })
        );
    }

    #[test]
    fn state_index_round_trip() {
        let grid = Grid::open(4, 5).unwrap();
        for row in 0..4 {
            for col in 0..5 {
                let state = grid.state_of((row, col));
                assert!(state < grid.n_states(), "Index is in range");
                assert_eq!(grid.pos_of(state), (row, col), "Round trip is lossless");
            }
        }
    }

    #[test]
    fn bounds_checks() {
        let grid = Grid::open(3, 2).unwrap();
        assert!(grid.in_bounds(0, 0));
        assert!(grid.in_bounds(2, 1));
        assert!(!grid.in_bounds(-1, 0));
        assert!(!grid.in_bounds(0, -1));
        assert!(!grid.in_bounds(3, 0));
        assert!(!grid.in_bounds(0, 2));
    }

    #[test]
    fn cell_lookup() {
        let grid = Grid::new(vec![
            vec![Cell::Free, Cell::Blocked],
            vec![Cell::Free, Cell::Free],
        ])
        .unwrap();
        assert_eq!(grid.cell((0, 1)), Cell::Blocked);
        assert_eq!(grid.cell((1, 1)), Cell::Free);
    }
}
