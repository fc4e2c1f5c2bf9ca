//! Policy vs policy games

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    Error, Result,
    ports::Policy,
    tictactoe::{Game, GameOutcome, Mark},
};

/// A finished game between two policies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub game: Game,
    pub outcome: GameOutcome,
}

/// Play one game; `x` plays X, `o` plays O and `first` opens.
///
/// # Errors
///
/// Fails if either policy fails or proposes an illegal move.
pub fn play_match(x: &mut dyn Policy, o: &mut dyn Policy, first: Mark) -> Result<MatchReport> {
    let mut game = Game::new(first);

    while let Some(mark) = game.to_move() {
        let policy: &mut dyn Policy = match mark {
            Mark::X => &mut *x,
            Mark::O => &mut *o,
        };
        let position = policy.select_move(game.board(), mark)?;
        game.play(position)?;
    }

    let outcome = game.outcome().ok_or(Error::GameOver)?;
    debug!(x = x.name(), o = o.name(), ?outcome, plies = game.moves().len(), "match finished");

    Ok(MatchReport { game, outcome })
}

/// Running score over many matches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchTally {
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl MatchTally {
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win(Mark::X) => self.x_wins += 1,
            GameOutcome::Win(Mark::O) => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.x_wins + self.o_wins + self.draws
    }
}
