use data::{Cell, Direction};
use error::GridError;

pub const DEFAULT_VALID_MARKER: i64 = 1;

/// Reads one whitespace-separated line of integers. `line` is only used for
/// error messages.
pub fn parse_line_of_nums<I: Iterator<Item = String>>(lines_iter: &mut I, line: usize) -> Result<Vec<i64>, GridError> {
    let text = match lines_iter.next() {
        Some(text) => text,
        None => return Err(GridError::invalid(format!("input ended before line {}", line))),
    };
    let nums = text.split_whitespace()
        .map(|tok| tok.parse::<i64>().map_err(|_| GridError::Parse { line, token: tok.to_string() }))
        .collect();
    nums
}

#[derive(Debug, Clone, PartialEq)]
pub struct GMap<T> {
    pub gmap: Vec<Vec<T>>,
}

impl <T> GMap<T> {
    pub fn get(&self, cell: Cell) -> &T {
        &self.gmap[cell.row][cell.col]
    }

    pub fn get_mut(&mut self, cell: Cell) -> &mut T {
        &mut self.gmap[cell.row][cell.col]
    }
}

impl <T: Clone> GMap<T> {
    pub fn filled(dim: usize, value: T) -> GMap<T> {
        GMap { gmap: vec![vec![value; dim]; dim] }
    }
}

/// An immutable NxN grid. Cells equal to `marker` are valid.
#[derive(Debug, Clone)]
pub struct Grid {
    dim: usize,
    marker: i64,
    values: GMap<i64>,
}

impl Grid {
    pub fn new(rows: Vec<Vec<i64>>, marker: i64) -> Result<Grid, GridError> {
        let dim = rows.len();
        if dim == 0 {
            return Err(GridError::invalid("grid has no rows"));
        }
        for (r, row) in rows.iter().enumerate() {
            if row.len() != dim {
                return Err(GridError::invalid(format!(
                    "row {} has {} entries, expected {} for a square grid", r, row.len(), dim)));
            }
        }
        Ok(Grid { dim, marker, values: GMap { gmap: rows } })
    }

    /// Reads `N` followed by N rows. `first_line` is the 1-based input line
    /// holding `N`.
    pub fn read<I: Iterator<Item = String>>(lines_iter: &mut I, first_line: usize, marker: i64) -> Result<Grid, GridError> {
        let header = parse_line_of_nums(lines_iter, first_line)?;
        if header.len() != 1 || header[0] < 0 {
            return Err(GridError::invalid(format!(
                "line {}: expected a single non-negative dimension, got {:?}", first_line, header)));
        }
        let dim = header[0] as usize;
        // N is untrusted until its rows arrive
        let mut rows: Vec<Vec<i64>> = Vec::new();
        for r in 0..dim {
            rows.push(parse_line_of_nums(lines_iter, first_line + 1 + r)?);
        }
        Grid::new(rows, marker)
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn marker(&self) -> i64 {
        self.marker
    }

    pub fn num_cells(&self) -> usize {
        self.dim * self.dim
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.dim && cell.col < self.dim
    }

    pub fn check(&self, cell: Cell) -> Result<(), GridError> {
        if self.contains(cell) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds { row: cell.row, col: cell.col, dim: self.dim })
        }
    }

    pub fn value_at(&self, cell: Cell) -> Result<i64, GridError> {
        self.check(cell)?;
        Ok(*self.values.get(cell))
    }

    pub fn is_valid(&self, cell: Cell) -> Result<bool, GridError> {
        Ok(self.value_at(cell)? == self.marker)
    }

    // caller guarantees `cell` is in range
    pub fn is_valid_unchecked(&self, cell: Cell) -> bool {
        *self.values.get(cell) == self.marker
    }

    pub fn to_1d(&self, cell: Cell) -> usize {
        cell.row * self.dim + cell.col
    }

    pub fn from_1d(&self, idx: usize) -> Result<Cell, GridError> {
        let cell = Cell::new(idx / self.dim, idx % self.dim);
        if idx >= self.num_cells() {
            return Err(GridError::OutOfBounds { row: cell.row, col: cell.col, dim: self.dim });
        }
        Ok(cell)
    }

    pub fn step_toward(&self, cell: Cell, d: Direction) -> Option<Cell> {
        let (dr, dc) = d.offset();
        let row = cell.row as isize + dr;
        let col = cell.col as isize + dc;
        if row < 0 || col < 0 || row >= self.dim as isize || col >= self.dim as isize {
            return None;
        }
        Some(Cell::new(row as usize, col as usize))
    }

    /// In-range valid neighbours of `cell` in the given directions.
    pub fn valid_neighbors(&self, cell: Cell, dirs: &[Direction]) -> Vec<Cell> {
        dirs.iter()
            .filter_map(|&d| self.step_toward(cell, d))
            .filter(|&n| self.is_valid_unchecked(n))
            .collect()
    }

    pub fn cells(&self) -> Vec<Cell> {
        let dim = self.dim;
        (0..dim).flat_map(|r| (0..dim).map(move |c| Cell::new(r, c))).collect()
    }

    pub fn num_valid(&self) -> usize {
        self.values.gmap.iter()
            .map(|row| row.iter().filter(|&&v| v == self.marker).count())
            .sum()
    }
}
