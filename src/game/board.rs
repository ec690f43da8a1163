use std::fmt;

use serde::{Deserialize, Serialize};

use super::player::Owner;

/// Minimum board height.
pub const MIN_ROWS: usize = 6;
/// Minimum board width.
pub const MIN_COLUMNS: usize = 7;
/// Largest height or width the driver sets up or loads.
pub const MAX_DIMENSION: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiscKind {
    Ordinary,
    Boring,
    Magnetic,
}

impl DiscKind {
    pub const ALL: [DiscKind; 3] = [DiscKind::Ordinary, DiscKind::Boring, DiscKind::Magnetic];

    /// Lowercase name used in messages
    pub fn name(self) -> &'static str {
        match self {
            DiscKind::Ordinary => "ordinary",
            DiscKind::Boring => "boring",
            DiscKind::Magnetic => "magnetic",
        }
    }
}

impl fmt::Display for DiscKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied { owner: Owner, kind: DiscKind },
}

impl Cell {
    /// An ordinary marker owned by `owner`
    pub fn ordinary(owner: Owner) -> Self {
        Cell::Occupied {
            owner,
            kind: DiscKind::Ordinary,
        }
    }

    /// Owner of the disc in this cell, whatever its kind
    pub fn owner(self) -> Option<Owner> {
        match self {
            Cell::Empty => None,
            Cell::Occupied { owner, .. } => Some(owner),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn is_owned_by(self, who: Owner) -> bool {
        self.owner() == Some(who)
    }
}

/// Rectangular grid of cells. Row 0 is the bottom; discs stack upward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid. Size limits are enforced by `Game::new`.
    pub fn new(rows: usize, columns: usize) -> Self {
        Grid {
            rows,
            columns,
            cells: vec![Cell::Empty; rows * columns],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Get the cell at a specific position, or `None` off the board
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.rows || col >= self.columns {
            return None;
        }
        Some(self.at(row, col))
    }

    /// Lowest empty row in `col`, or `None` if the column is full or off the board
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= self.columns {
            return None;
        }
        (0..self.rows).find(|&row| self.at(row, col).is_empty())
    }

    /// Check if a column is full. Columns off the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.columns {
            return true;
        }
        !self.at(self.rows - 1, col).is_empty()
    }

    /// Check if the board is completely full.
    /// Columns have no gaps, so only the top row needs looking at.
    pub fn is_full(&self) -> bool {
        (0..self.columns).all(|col| self.is_column_full(col))
    }

    /// Number of discs in a column
    pub fn height(&self, col: usize) -> usize {
        self.landing_row(col).unwrap_or(self.rows)
    }

    /// Cell at a position already known to be on the board
    pub(crate) fn at(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let idx = self.index(row, col);
        self.cells[idx] = cell;
    }

    pub(crate) fn swap(&mut self, col: usize, a: usize, b: usize) {
        let ia = self.index(a, col);
        let ib = self.index(b, col);
        self.cells.swap(ia, ib);
    }

    /// Position of the first occupied cell sitting above an empty one, if any
    pub(crate) fn find_gap(&self) -> Option<(usize, usize)> {
        for col in 0..self.columns {
            let height = self.height(col);
            if let Some(row) = (height..self.rows).find(|&r| !self.at(r, col).is_empty()) {
                return Some((row, col));
            }
        }
        None
    }

    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.columns);
        row * self.columns + col
    }
}
