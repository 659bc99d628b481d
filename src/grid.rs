//! Grid of letter cells.
//!
//! A grid is built once from equal-length rows and never changes afterwards.
//! Cells hold a lowercase ASCII letter or are excluded (written as a space).
//! Adjacency between usable cells is worked out at construction so the search
//! only ever walks precomputed neighbour lists.

use std::fmt;

use crate::error::{Result, SquaredleError};
use crate::{EXCLUDED_CELL, ROW_SEPARATOR};

/// Row/column offsets of the 8 neighbours of a cell
const NEIGHBOUR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Immutable rectangular puzzle grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Row-major cells, `None` for excluded
    cells: Vec<Option<char>>,
    /// Usable neighbours of each usable cell, by flattened index
    neighbours: Vec<Vec<usize>>,
}

impl Grid {
    /// Build a grid from its rows.
    ///
    /// Fails with [`SquaredleError::MalformedGrid`] if there are no rows, the
    /// rows are empty or of unequal length, or a row contains anything other
    /// than `a`-`z` and the exclusion marker.
    pub fn new<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let first = rows
            .first()
            .ok_or_else(|| SquaredleError::MalformedGrid("grid has no rows".to_string()))?;
        let cols = first.as_ref().chars().count();
        if cols == 0 {
            return Err(SquaredleError::MalformedGrid(
                "grid rows are empty".to_string(),
            ));
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let len = row.chars().count();
            if len != cols {
                return Err(SquaredleError::MalformedGrid(format!(
                    "row {} has {} cells, expected {}",
                    y, len, cols
                )));
            }
            for (x, c) in row.chars().enumerate() {
                match c {
                    'a'..='z' => cells.push(Some(c)),
                    EXCLUDED_CELL => cells.push(None),
                    _ => {
                        return Err(SquaredleError::MalformedGrid(format!(
                            "invalid character {:?} at row {}, column {}",
                            c, y, x
                        )))
                    }
                }
            }
        }

        let mut grid = Self {
            rows: rows.len(),
            cols,
            cells,
            neighbours: Vec::new(),
        };
        let neighbours: Vec<Vec<usize>> = (0..grid.cells.len())
            .map(|index| grid.usable_neighbours(index))
            .collect();
        grid.neighbours = neighbours;
        Ok(grid)
    }

    /// Parse the single-line form, rows separated by `-`.
    ///
    /// Input is lowercased first, so `"A P N-ML SO"` and `"a p n-ml so"` are
    /// the same grid.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim_end_matches(['\r', '\n']).to_lowercase();
        let rows: Vec<&str> = text.split(ROW_SEPARATOR).collect();
        Self::new(&rows)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells, usable or not
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Letter at a cell, `None` if excluded or out of bounds
    pub fn letter_at(&self, row: usize, col: usize) -> Option<char> {
        self.index(row, col).and_then(|i| self.cells[i])
    }

    /// True if the cell is in bounds and not excluded
    pub fn is_usable(&self, row: usize, col: usize) -> bool {
        self.letter_at(row, col).is_some()
    }

    /// Number of cells a word may use
    pub fn usable_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Flattened index of a cell, `None` if out of bounds
    pub fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// Letter at a flattened index
    pub(crate) fn cell(&self, index: usize) -> Option<char> {
        self.cells[index]
    }

    /// Usable neighbours of the cell at a flattened index
    pub(crate) fn neighbours(&self, index: usize) -> &[usize] {
        &self.neighbours[index]
    }

    /// Flattened indices of all usable cells, row-major
    pub(crate) fn usable_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.map(|_| i))
    }

    fn usable_neighbours(&self, index: usize) -> Vec<usize> {
        if self.cells[index].is_none() {
            return Vec::new();
        }
        let (row, col) = ((index / self.cols) as isize, (index % self.cols) as isize);
        NEIGHBOUR_OFFSETS
            .iter()
            .filter_map(|&(dy, dx)| {
                let (y, x) = (row + dy, col + dx);
                if y < 0 || x < 0 {
                    return None;
                }
                self.index(y as usize, x as usize)
            })
            .filter(|&i| self.cells[i].is_some())
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks(self.cols).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            write!(f, "|")?;
            for cell in row {
                write!(f, " {}", cell.unwrap_or(EXCLUDED_CELL))?;
            }
            write!(f, " |")?;
        }
        Ok(())
    }
}
