//! Game loop drivers
//!
//! Both drivers push moves into a [`Game`](crate::tictactoe::Game) and stop
//! at its terminal state; neither touches the console.
//!
//! - [`episode`]: a policy-driven player against a learning agent, with the
//!   agent's reward protocol
//! - [`matchup`]: two policies against each other

pub mod episode;
pub mod matchup;

use rand::Rng;
use serde::{Deserialize, Serialize};

pub use episode::{EpisodeReport, EpisodeRunner, reward_for};
pub use matchup::{MatchReport, MatchTally, play_match};

/// Which side places the first mark of an episode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opener {
    Player,
    Agent,
}

/// Fair coin toss for the opening move
pub fn coin_toss<R: Rng + ?Sized>(rng: &mut R) -> Opener {
    if rng.random::<f64>() < 0.5 {
        Opener::Agent
    } else {
        Opener::Player
    }
}
