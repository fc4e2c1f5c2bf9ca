//! 4x4 tic-tac-toe: board, win detection and turn sequencing

pub mod board;
pub mod game;
pub mod lines;

pub use board::{BOARD_CELLS, BOARD_SIZE, Board, Cell, Mark};
pub use game::{Game, GameOutcome, GameState, Move};
pub use lines::{GameResult, Line, LineAnalyzer, WINNING_LINES};
