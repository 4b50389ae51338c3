//! Grid representation and tile placement.
//!
//! A board is a rectangular grid of cells that are either empty or occupied.
//! A tile covers two adjacent cells; which two is decided by its
//! [`Orientation`], anchored at the tile's top-left cell.
//!
//! Boards have value semantics through [`Board::apply`], which leaves the
//! receiver untouched. The search uses [`Board::place`] instead: it marks the
//! tile in place and hands back a guard that lifts the tile again when dropped.

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use crate::constants::{EMPTY, OCCUPIED};

/// Anchor cell of a placement as `(row, col)`.
pub type Move = (usize, usize);

/// Shape of a tile, which doubles as the identity of the player placing it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Covers `(row, col)` and `(row + 1, col)`.
    Vertical,
    /// Covers `(row, col)` and `(row, col + 1)`.
    Horizontal,
}

impl Orientation {
    /// The orientation of the other player.
    pub fn opposite(self) -> Self {
        match self {
            Orientation::Vertical => Orientation::Horizontal,
            Orientation::Horizontal => Orientation::Vertical,
        }
    }

    /// The two cells a tile anchored at `(row, col)` covers, or `None` on overflow.
    fn footprint(self, (row, col): Move) -> Option<[Move; 2]> {
        let second = match self {
            Orientation::Vertical => (row.checked_add(1)?, col),
            Orientation::Horizontal => (row, col.checked_add(1)?),
        };
        Some([(row, col), second])
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Vertical => f.pad("vertical"),
            Orientation::Horizontal => f.pad("horizontal"),
        }
    }
}

impl FromStr for Orientation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v" | "vertical" => Ok(Orientation::Vertical),
            "h" | "horizontal" => Ok(Orientation::Horizontal),
            _ => Err(ParseError::Orientation(s.to_string())),
        }
    }
}

/// Reasons a placement cannot be made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Part of the tile would fall outside the grid.
    OutOfBounds {
        row: usize,
        col: usize,
        orientation: Orientation,
    },
    /// The tile would cover an occupied cell.
    Occupied { row: usize, col: usize },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfBounds {
                row,
                col,
                orientation,
            } => write!(
                f,
                "Illegal move: {orientation} tile at {row},{col} leaves the board"
            ),
            MoveError::Occupied { row, col } => {
                write!(f, "Illegal move: cell {row},{col} is occupied")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Failure to read a board, orientation or move from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Not one of `v`, `vertical`, `h`, `horizontal`.
    Orientation(String),
    /// Not of the form `row,col`.
    Move(String),
    /// A board line whose width differs from the first line.
    Ragged { line: usize },
    /// A board character other than `.` or `#`.
    BadCell(char),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Orientation(s) => write!(f, "unknown orientation '{s}'"),
            ParseError::Move(s) => write!(f, "expected 'row,col', got '{s}'"),
            ParseError::Ragged { line } => write!(f, "board line {line} has the wrong width"),
            ParseError::BadCell(ch) => write!(f, "unexpected board character '{ch}'"),
        }
    }
}

impl std::error::Error for ParseError {}

/// A rectangular grid of occupancy flags.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Board {
    /// Create an empty board. Either dimension may be zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Occupancy of a cell, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.cells[self.idx(row, col)])
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Check a placement against the grid bounds and the current occupancy.
    pub fn is_legal(&self, row: usize, col: usize, orientation: Orientation) -> bool {
        self.check((row, col), orientation).is_ok()
    }

    fn check(&self, mv: Move, orientation: Orientation) -> Result<[Move; 2], MoveError> {
        let out_of_bounds = MoveError::OutOfBounds {
            row: mv.0,
            col: mv.1,
            orientation,
        };
        let footprint = orientation.footprint(mv).ok_or(out_of_bounds.clone())?;
        for (r, c) in footprint {
            match self.get(r, c) {
                None => return Err(out_of_bounds),
                Some(true) => return Err(MoveError::Occupied { row: r, col: c }),
                Some(false) => {}
            }
        }
        Ok(footprint)
    }

    fn set(&mut self, footprint: [Move; 2], occupied: bool) {
        for (r, c) in footprint {
            let i = self.idx(r, c);
            self.cells[i] = occupied;
        }
    }

    /// Return a copy of this board with the tile placed. The receiver is unchanged.
    ///
    /// # Errors
    /// - [`MoveError::OutOfBounds`] if the tile leaves the grid
    /// - [`MoveError::Occupied`] if the tile covers an occupied cell
    pub fn apply(&self, row: usize, col: usize, orientation: Orientation) -> Result<Board, MoveError> {
        let footprint = self.check((row, col), orientation)?;
        let mut next = self.clone();
        next.set(footprint, true);
        Ok(next)
    }

    /// Place a tile in place. The tile is lifted again when the guard drops.
    pub fn place(&mut self, mv: Move, orientation: Orientation) -> Result<Placed<'_>, MoveError> {
        let footprint = self.check(mv, orientation)?;
        self.set(footprint, true);
        Ok(Placed {
            board: self,
            footprint,
        })
    }

    /// Whether the given side can place at least one tile.
    pub fn has_any_legal_move(&self, orientation: Orientation) -> bool {
        (0..self.rows).any(|r| (0..self.cols).any(|c| self.is_legal(r, c, orientation)))
    }
}

/// A tile placed by [`Board::place`], removed again on drop.
pub struct Placed<'a> {
    board: &'a mut Board,
    footprint: [Move; 2],
}

impl Deref for Placed<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for Placed<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for Placed<'_> {
    fn drop(&mut self) {
        self.board.set(self.footprint, false);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            for c in 0..self.cols {
                let ch = if self.cells[self.idx(r, c)] { OCCUPIED } else { EMPTY };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseError;

    /// Read the [`Display`](fmt::Display) form back. Whitespace inside a line
    /// and blank lines are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::new();
        let mut rows = 0;
        let mut cols = 0;
        for (line_no, line) in s.lines().enumerate() {
            let row: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if row.is_empty() {
                continue;
            }
            if rows == 0 {
                cols = row.len();
            } else if row.len() != cols {
                return Err(ParseError::Ragged { line: line_no + 1 });
            }
            for ch in row {
                cells.push(match ch {
                    EMPTY => false,
                    OCCUPIED => true,
                    other => return Err(ParseError::BadCell(other)),
                });
            }
            rows += 1;
        }
        Ok(Board { rows, cols, cells })
    }
}

/// Parse a move written as `row,col`.
pub fn parse_move(s: &str) -> Result<Move, ParseError> {
    let err = || ParseError::Move(s.to_string());
    let (row, col) = s.split_once(',').ok_or_else(err)?;
    let row = row.trim().parse().map_err(|_| err())?;
    let col = col.trim().parse().map_err(|_| err())?;
    Ok((row, col))
}

/// Format a move as `row,col`, or `none` when there is no move.
pub fn str_move(mv: Option<Move>) -> String {
    match mv {
        Some((row, col)) => format!("{row},{col}"),
        None => "none".into(),
    }
}
