//! Turn sequencing and the game state machine

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Board, GameResult, Mark};
use crate::types::Position;

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: Position,
    pub mark: Mark,
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Mark),
    Draw,
}

/// State of the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    AwaitingMove(Mark),
    Won(Mark),
    Draw,
}

impl GameState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameState::AwaitingMove(_))
    }

    /// Final outcome, or `None` while moves are still awaited
    pub fn outcome(self) -> Option<GameOutcome> {
        match self {
            GameState::AwaitingMove(_) => None,
            GameState::Won(mark) => Some(GameOutcome::Win(mark)),
            GameState::Draw => Some(GameOutcome::Draw),
        }
    }
}

/// A single game: one board, strictly alternating turns.
///
/// The state machine knows nothing about who supplies moves; humans, scripts
/// and tests all drive it through [`Game::play`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    state: GameState,
    moves: Vec<Move>,
}

impl Game {
    /// Create a new game with `first` to move
    pub fn new(first: Mark) -> Self {
        Game {
            board: Board::new(),
            state: GameState::AwaitingMove(first),
            moves: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Mark whose turn it is, if the game is still running
    pub fn to_move(&self) -> Option<Mark> {
        match self.state {
            GameState::AwaitingMove(mark) => Some(mark),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.state.outcome()
    }

    /// Apply a move for the side to move and advance the state machine.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] once the game has ended and
    /// [`crate::Error::OccupiedCell`] for a move onto a marked cell. A rejected
    /// move leaves the game untouched.
    pub fn play(&mut self, position: Position) -> Result<GameState, crate::Error> {
        let mark = self.to_move().ok_or(crate::Error::GameOver)?;
        self.board.place(position, mark)?;
        self.moves.push(Move { position, mark });

        self.state = match GameResult::after_move(&self.board, mark) {
            GameResult::Win(winner) => GameState::Won(winner),
            GameResult::Draw => GameState::Draw,
            GameResult::InProgress => GameState::AwaitingMove(mark.opponent()),
        };

        debug!(
            mark = %mark,
            position = %position,
            ply = self.moves.len(),
            state = ?self.state,
            "applied move"
        );

        Ok(self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn test_new_game() {
        let game = Game::new(Mark::O);
        assert_eq!(game.state(), GameState::AwaitingMove(Mark::O));
        assert_eq!(game.to_move(), Some(Mark::O));
        assert!(game.moves().is_empty());
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new(Mark::X);
        assert_eq!(game.play(pos(0, 0)).unwrap(), GameState::AwaitingMove(Mark::O));
        assert_eq!(game.play(pos(1, 1)).unwrap(), GameState::AwaitingMove(Mark::X));
        assert_eq!(game.board().occupied_count(), 2);
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut game = Game::new(Mark::X);
        game.play(pos(0, 0)).unwrap();
        assert!(game.play(pos(0, 0)).is_err());
        assert_eq!(game.to_move(), Some(Mark::O));
        assert_eq!(game.moves().len(), 1);
    }

    #[test]
    fn test_win_on_row() {
        let mut game = Game::new(Mark::X);
        for col in 0..3 {
            game.play(pos(0, col)).unwrap();
            game.play(pos(1, col)).unwrap();
        }
        assert_eq!(game.play(pos(0, 3)).unwrap(), GameState::Won(Mark::X));
        assert_eq!(game.outcome(), Some(GameOutcome::Win(Mark::X)));
    }

    #[test]
    fn test_no_moves_after_end() {
        let mut game = Game::new(Mark::O);
        for row in 0..3 {
            game.play(pos(row, 0)).unwrap();
            game.play(pos(row, 1)).unwrap();
        }
        game.play(pos(3, 0)).unwrap();
        assert!(game.is_over());

        let err = game.play(pos(3, 3)).unwrap_err();
        assert!(matches!(err, crate::Error::GameOver));
    }

    #[test]
    fn test_draw() {
        // Fill in an order that never completes a line:
        // X X O O
        // O O X X
        // X X O O
        // O O X X
        #[rustfmt::skip]
        let order = [
            (0, 0), (0, 2), (0, 1), (0, 3),
            (1, 2), (1, 0), (1, 3), (1, 1),
            (2, 0), (2, 2), (2, 1), (2, 3),
            (3, 2), (3, 0), (3, 3), (3, 1),
        ];
        let mut game = Game::new(Mark::X);
        let mut last = game.state();
        for (row, col) in order {
            last = game.play(pos(row, col)).unwrap();
        }
        assert_eq!(last, GameState::Draw);
        assert_eq!(game.outcome(), Some(GameOutcome::Draw));
    }
}
