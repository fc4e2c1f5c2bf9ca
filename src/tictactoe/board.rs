//! Board representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{Position, StateKey};

/// Side length of the square board
pub const BOARD_SIZE: usize = 4;

/// Number of cells on the board
pub const BOARD_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    /// Strict decoding used for state keys.
    pub fn from_key_char(c: char) -> Option<Cell> {
        match c {
            '-' => Some(Cell::Empty),
            'X' => Some(Cell::X),
            'O' => Some(Cell::O),
            _ => None,
        }
    }

    /// Lenient decoding used for hand-written boards.
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '-' | '.' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A token a player places on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Get the opposing mark
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Convert mark to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// The 4x4 grid of cells.
///
/// Cells are stored row-major. The only mutating operation is [`Board::place`],
/// which turns one empty cell into a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; BOARD_CELLS],
        }
    }

    /// Create a board from its cells in row-major order.
    pub fn from_cells(cells: [Cell; BOARD_CELLS]) -> Self {
        Board { cells }
    }

    /// Create a board from a loose string representation.
    ///
    /// Whitespace is ignored, so rows can be written on separate lines.
    /// Empty cells may be written as `-` or `.`.
    ///
    /// # Errors
    ///
    /// Returns error if the string does not contain exactly 16 cells or any
    /// character is not a valid cell representation.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != BOARD_CELLS {
            return Err(crate::Error::InvalidBoardLength {
                expected: BOARD_CELLS,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; BOARD_CELLS];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    /// Reconstruct the board encoded by a state key.
    pub fn from_state_key(key: &StateKey) -> Self {
        let mut cells = [Cell::Empty; BOARD_CELLS];
        for (cell, c) in cells.iter_mut().zip(key.as_str().chars()) {
            // StateKey only ever holds validated characters
            *cell = Cell::from_key_char(c).unwrap_or(Cell::Empty);
        }
        Board { cells }
    }

    /// Encode the board as its canonical state key
    pub fn state_key(&self) -> StateKey {
        StateKey::from_cells(&self.cells)
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    /// Get the cell at a position
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Get all empty positions in row-major order
    pub fn empty_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| Position::from_raw(i / BOARD_SIZE, i % BOARD_SIZE))
            .collect()
    }

    /// Check whether any empty cell remains
    pub fn has_empty(&self) -> bool {
        self.cells.contains(&Cell::Empty)
    }

    /// Number of marks placed on the board
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Place a mark on an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OccupiedCell`] if the cell already holds a mark.
    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), crate::Error> {
        if !self.is_empty(pos) {
            return Err(crate::Error::OccupiedCell {
                row: pos.row(),
                col: pos.col(),
            });
        }
        self.cells[pos.index()] = mark.to_cell();
        Ok(())
    }

    /// Cells of row `i`, left to right
    pub fn row(&self, i: usize) -> [Cell; BOARD_SIZE] {
        std::array::from_fn(|j| self.cells[i * BOARD_SIZE + j])
    }

    /// Cells of column `j`, top to bottom
    pub fn column(&self, j: usize) -> [Cell; BOARD_SIZE] {
        std::array::from_fn(|i| self.cells[i * BOARD_SIZE + j])
    }

    /// Cells (0,0), (1,1), (2,2), (3,3)
    pub fn main_diagonal(&self) -> [Cell; BOARD_SIZE] {
        std::array::from_fn(|i| self.cells[i * BOARD_SIZE + i])
    }

    /// Cells (0,3), (1,2), (2,1), (3,0)
    pub fn anti_diagonal(&self) -> [Cell; BOARD_SIZE] {
        std::array::from_fn(|i| self.cells[i * BOARD_SIZE + (BOARD_SIZE - 1 - i)])
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the interactive grid: column headers, then each row prefixed by
/// its index, with a blank line after every printed line.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: Vec<String> = (0..BOARD_SIZE).map(|col| col.to_string()).collect();
        writeln!(f, "    {}", header.join("   "))?;
        writeln!(f)?;
        for row in 0..BOARD_SIZE {
            write!(f, "{row}   ")?;
            for cell in self.row(row) {
                write!(f, "{}   ", cell.to_char())?;
            }
            writeln!(f)?;
            writeln!(f)?;
        }
        Ok(())
    }
}
