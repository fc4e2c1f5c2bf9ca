//! The teacher's tactical rules.
//!
//! Each rule is a pure function of the board and the teacher's own mark that
//! either proposes a move or passes. [`CASCADE`] fixes their priority; the
//! teacher takes the first proposal.

use serde::{Deserialize, Serialize};

use crate::{
    tictactoe::{BOARD_SIZE, Board, LineAnalyzer, Mark},
    types::Position,
};

/// Identifies a rule in the cascade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleKind {
    Win,
    Block,
    Fork,
    BlockFork,
    Center,
    Corner,
    Side,
}

impl RuleKind {
    /// Get short label
    pub fn label(&self) -> &'static str {
        match self {
            RuleKind::Win => "win",
            RuleKind::Block => "block",
            RuleKind::Fork => "fork",
            RuleKind::BlockFork => "block-fork",
            RuleKind::Center => "center",
            RuleKind::Corner => "corner",
            RuleKind::Side => "side",
        }
    }
}

/// A rule evaluator: board and own mark in, optional move out
pub type RuleFn = fn(&Board, Mark) -> Option<Position>;

/// One entry of the cascade
#[derive(Clone, Copy)]
pub struct Rule {
    pub kind: RuleKind,
    pub evaluate: RuleFn,
}

/// Rules in priority order
pub const CASCADE: [Rule; 7] = [
    Rule {
        kind: RuleKind::Win,
        evaluate: win,
    },
    Rule {
        kind: RuleKind::Block,
        evaluate: block,
    },
    Rule {
        kind: RuleKind::Fork,
        evaluate: fork,
    },
    Rule {
        kind: RuleKind::BlockFork,
        evaluate: block_fork,
    },
    Rule {
        kind: RuleKind::Center,
        evaluate: center,
    },
    Rule {
        kind: RuleKind::Corner,
        evaluate: corner,
    },
    Rule {
        kind: RuleKind::Side,
        evaluate: side,
    },
];

/// Interior cell the teacher treats as the center
pub const CENTER: Position = Position::from_raw(1, 1);

/// Corners in the order they are tried
pub const CORNERS: [Position; 4] = [
    Position::from_raw(0, 0),
    Position::from_raw(0, 3),
    Position::from_raw(3, 0),
    Position::from_raw(3, 3),
];

/// Edge cells that are not corners, in the order they are tried
pub const SIDES: [Position; 8] = [
    Position::from_raw(0, 1),
    Position::from_raw(0, 2),
    Position::from_raw(1, 0),
    Position::from_raw(1, 3),
    Position::from_raw(2, 0),
    Position::from_raw(2, 3),
    Position::from_raw(3, 1),
    Position::from_raw(3, 2),
];

/// Run the cascade and return the first rule that proposes a move
pub fn evaluate_cascade(board: &Board, mark: Mark) -> Option<(RuleKind, Position)> {
    CASCADE
        .iter()
        .find_map(|rule| (rule.evaluate)(board, mark).map(|pos| (rule.kind, pos)))
}

/// Complete a line holding three of our marks and one empty cell.
///
/// Diagonals are scanned first, then rows and columns by index with the row
/// checked before the column.
pub fn win(board: &Board, mark: Mark) -> Option<Position> {
    LineAnalyzer::first_completing_cell(board, mark)
}

/// Take the cell that would complete a line for the opponent
pub fn block(board: &Board, mark: Mark) -> Option<Position> {
    win(board, mark.opponent())
}

/// Look for two of our marks on adjacent diagonal cells `(i, j)` and
/// `(i + 1, j + 1)` whose cross cells `(i, j + 1)` and `(i + 1, j)` are both
/// empty, and take `(i, j + 1)`.
///
/// This approximates setting up a double threat; it does not verify that two
/// winning lines actually result.
pub fn fork(board: &Board, mark: Mark) -> Option<Position> {
    let own = mark.to_cell();
    for i in 0..BOARD_SIZE - 1 {
        for j in 0..BOARD_SIZE - 1 {
            let top_left = Position::from_raw(i, j);
            let bottom_right = Position::from_raw(i + 1, j + 1);
            let top_right = Position::from_raw(i, j + 1);
            let bottom_left = Position::from_raw(i + 1, j);

            if board.get(top_left) == own
                && board.get(bottom_right) == own
                && board.is_empty(top_right)
                && board.is_empty(bottom_left)
            {
                return Some(top_right);
            }
        }
    }
    None
}

/// Meant to break up an opponent fork, but scans for our own pattern exactly
/// like [`fork`], so it never fires once `fork` has passed.
pub fn block_fork(board: &Board, mark: Mark) -> Option<Position> {
    fork(board, mark)
}

/// Take the fixed interior cell (1, 1)
pub fn center(board: &Board, _mark: Mark) -> Option<Position> {
    board.is_empty(CENTER).then_some(CENTER)
}

/// Take the first free corner
pub fn corner(board: &Board, _mark: Mark) -> Option<Position> {
    first_empty(board, &CORNERS)
}

/// Take the first free non-corner edge cell
pub fn side(board: &Board, _mark: Mark) -> Option<Position> {
    first_empty(board, &SIDES)
}

fn first_empty(board: &Board, candidates: &[Position]) -> Option<Position> {
    candidates.iter().copied().find(|&pos| board.is_empty(pos))
}
