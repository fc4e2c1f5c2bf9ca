//! Common test utilities for the tictactoe4 test suite.

#![allow(dead_code)]

use tictactoe4::{
    tictactoe::{Board, Mark, WINNING_LINES},
    types::Position,
};

pub fn pos(row: usize, col: usize) -> Position {
    Position::new(row, col).unwrap()
}

pub fn board(s: &str) -> Board {
    Board::from_string(s).unwrap()
}

/// Board with `mark` on every cell of winning line `line` except `gap`
pub fn line_minus_one(line: usize, gap: usize, mark: Mark) -> Board {
    let mut board = Board::new();
    for (i, &cell) in WINNING_LINES[line].iter().enumerate() {
        if i != gap {
            board.place(cell, mark).unwrap();
        }
    }
    board
}
