//! Winning line analysis for the 4x4 board

use serde::{Deserialize, Serialize};

use super::{BOARD_SIZE, Board, Cell, Mark};
use crate::types::Position;

/// A straight line of four cells
pub type Line = [Position; BOARD_SIZE];

const fn row(i: usize) -> Line {
    [
        Position::from_raw(i, 0),
        Position::from_raw(i, 1),
        Position::from_raw(i, 2),
        Position::from_raw(i, 3),
    ]
}

const fn column(j: usize) -> Line {
    [
        Position::from_raw(0, j),
        Position::from_raw(1, j),
        Position::from_raw(2, j),
        Position::from_raw(3, j),
    ]
}

/// The ten winning lines.
///
/// Ordered the way the teacher scans them: main diagonal, anti-diagonal, then
/// for each index 0..3 the row before the column.
pub const WINNING_LINES: [Line; 10] = [
    [
        Position::from_raw(0, 0),
        Position::from_raw(1, 1),
        Position::from_raw(2, 2),
        Position::from_raw(3, 3),
    ],
    [
        Position::from_raw(0, 3),
        Position::from_raw(1, 2),
        Position::from_raw(2, 1),
        Position::from_raw(3, 0),
    ],
    row(0),
    column(0),
    row(1),
    column(1),
    row(2),
    column(2),
    row(3),
    column(3),
];

/// Result of a game derived from the board after a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    InProgress,
    Win(Mark),
    Draw,
}

impl GameResult {
    /// Evaluate the board after `mover` has placed a mark.
    ///
    /// A win is checked before the draw, so a full board with a completed line
    /// is a win.
    pub fn after_move(board: &Board, mover: Mark) -> Self {
        if LineAnalyzer::has_won(board, mover) {
            GameResult::Win(mover)
        } else if LineAnalyzer::is_draw(board) {
            GameResult::Draw
        } else {
            GameResult::InProgress
        }
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, GameResult::InProgress)
    }
}

/// Utility for analyzing winning lines
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if `mark` fills any of the ten lines
    pub fn has_won(board: &Board, mark: Mark) -> bool {
        let target = mark.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&pos| board.get(pos) == target))
    }

    /// True iff no empty cell remains. Says nothing about wins.
    pub fn is_draw(board: &Board) -> bool {
        !board.has_empty()
    }

    /// The empty cell of a line holding exactly three of `mark` and one empty cell
    pub fn completing_cell(board: &Board, mark: Mark, line: &Line) -> Option<Position> {
        let target = mark.to_cell();
        let mut count = 0;
        let mut empty_pos = None;

        for &pos in line {
            match board.get(pos) {
                Cell::Empty => {
                    if empty_pos.is_some() {
                        return None;
                    }
                    empty_pos = Some(pos);
                }
                c if c == target => count += 1,
                _ => return None,
            }
        }

        if count == BOARD_SIZE - 1 { empty_pos } else { None }
    }

    /// First completing cell for `mark`, scanning lines in [`WINNING_LINES`] order
    pub fn first_completing_cell(board: &Board, mark: Mark) -> Option<Position> {
        WINNING_LINES
            .iter()
            .find_map(|line| Self::completing_cell(board, mark, line))
    }
}
