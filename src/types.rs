//! Newtype wrappers for improved type safety and domain modeling.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tictactoe::{BOARD_CELLS, BOARD_SIZE, Cell};

/// A cell coordinate on the 4x4 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Create a new position, validating it's within board bounds.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::PositionOutOfRange`] if row or column is >= 4.
    pub fn new(row: usize, col: usize) -> Result<Self, crate::Error> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Position { row, col })
        } else {
            Err(crate::Error::PositionOutOfRange { row, col })
        }
    }

    /// Create a position from a known-good constant coordinate.
    pub(crate) const fn from_raw(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Create a position from a row-major cell index (0-15).
    pub fn from_index(index: usize) -> Result<Self, crate::Error> {
        Self::new(index / BOARD_SIZE, index % BOARD_SIZE)
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Row-major index into the flat cell array.
    pub fn index(&self) -> usize {
        self.row * BOARD_SIZE + self.col
    }
}

/// Unchecked wire form of [`Position`]
#[derive(Deserialize)]
struct RawPosition {
    row: usize,
    col: usize,
}

impl TryFrom<RawPosition> for Position {
    type Error = crate::Error;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Position::new(raw.row, raw.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// Probability that the teacher follows its rule cascade on a given move.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Skill(f64);

impl Skill {
    /// Teacher skill used when none is configured.
    pub const DEFAULT: Skill = Skill(0.9);

    /// A teacher that never takes the random bypass.
    pub const PERFECT: Skill = Skill(1.0);

    /// A teacher that always plays a random legal move.
    pub const RANDOM: Skill = Skill(0.0);

    /// Create a new skill level.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidSkill`] if the value is outside [0, 1] or not finite.
    pub fn new(value: f64) -> Result<Self, crate::Error> {
        if value.is_finite() && (0.0..=1.0).contains(&value) {
            Ok(Skill(value))
        } else {
            Err(crate::Error::InvalidSkill { value })
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Skill {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for Skill {
    type Error = crate::Error;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Skill::new(value)
    }
}

impl From<Skill> for f64 {
    fn from(skill: Skill) -> Self {
        skill.0
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Canonical string encoding of a full board: 16 cells in row-major order,
/// one character per cell (`X`, `O`, or `-` for empty).
///
/// This is the lookup key handed to learning agents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StateKey(String);

impl StateKey {
    /// Parse and validate a state key.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidBoardLength`] if the key does not hold
    /// exactly 16 cells, or [`crate::Error::InvalidCellCharacter`] for any
    /// character other than `X`, `O` or `-`.
    pub fn parse(key: &str) -> Result<Self, crate::Error> {
        let count = key.chars().count();
        if count != BOARD_CELLS {
            return Err(crate::Error::InvalidBoardLength {
                expected: BOARD_CELLS,
                got: count,
                context: key.to_string(),
            });
        }

        for (position, character) in key.chars().enumerate() {
            if Cell::from_key_char(character).is_none() {
                return Err(crate::Error::InvalidCellCharacter {
                    character,
                    position,
                    context: key.to_string(),
                });
            }
        }

        Ok(StateKey(key.to_string()))
    }

    /// Build a key from already-validated cells.
    pub(crate) fn from_cells(cells: &[Cell; BOARD_CELLS]) -> Self {
        StateKey(cells.iter().map(|cell| cell.to_char()).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Positions of empty cells, in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        self.0
            .chars()
            .enumerate()
            .filter(|&(_, c)| Cell::from_key_char(c) == Some(Cell::Empty))
            .map(|(i, _)| Position::from_raw(i / BOARD_SIZE, i % BOARD_SIZE))
            .collect()
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for StateKey {
    type Error = crate::Error;

    fn try_from(key: String) -> Result<Self, Self::Error> {
        StateKey::parse(&key)
    }
}

impl From<StateKey> for String {
    fn from(key: StateKey) -> Self {
        key.into_string()
    }
}

impl std::str::FromStr for StateKey {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StateKey::parse(s)
    }
}
