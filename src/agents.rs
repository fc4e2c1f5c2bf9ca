//! Reference implementations of the learning agent port
//!
//! Real learners live outside this crate. These adapters let the episode loop
//! run without one: a uniform random baseline, and a wrapper that turns any
//! [`Policy`] into an agent by decoding the state key back into a board.

use rand::{SeedableRng, random, rngs::StdRng, seq::IndexedRandom};

use crate::{
    Error, Result,
    ports::{LearningAgent, Policy},
    tictactoe::{Board, Mark},
    types::{Position, StateKey},
};

/// Agent that picks uniformly among the empty cells of the state key and
/// ignores rewards
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    /// Create a new random agent
    pub fn new(name: String) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a new random agent with a deterministic seed
    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl LearningAgent for RandomAgent {
    fn get_action(&mut self, state: &StateKey) -> Result<Position> {
        state
            .empty_positions()
            .choose(&mut self.rng)
            .copied()
            .ok_or(Error::NoValidMoves)
    }

    fn update(
        &mut self,
        _prev_state: &StateKey,
        _new_state: Option<&StateKey>,
        _prev_action: Position,
        _new_action: Option<Position>,
        _reward: f64,
    ) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}

/// Plays a [`Policy`] through the agent interface
pub struct PolicyAgent<P> {
    policy: P,
    mark: Mark,
}

impl<P: Policy> PolicyAgent<P> {
    /// Wrap `policy`, which will play as `mark`
    pub fn new(policy: P, mark: Mark) -> Self {
        Self { policy, mark }
    }
}

impl<P: Policy> LearningAgent for PolicyAgent<P> {
    fn get_action(&mut self, state: &StateKey) -> Result<Position> {
        let board = Board::from_state_key(state);
        self.policy.select_move(&board, self.mark)
    }

    fn update(
        &mut self,
        _prev_state: &StateKey,
        _new_state: Option<&StateKey>,
        _prev_action: Position,
        _new_action: Option<Position>,
        _reward: f64,
    ) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        self.policy.name()
    }

    fn set_rng_seed(&mut self, seed: u64) {
        self.policy.set_rng_seed(seed);
    }
}
