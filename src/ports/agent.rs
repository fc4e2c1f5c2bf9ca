//! Learning agent port - the reinforcement learning collaborator
//!
//! The game loop only sees the agent through state keys, actions and rewards;
//! how the agent learns is its own business.

use crate::{
    Result,
    types::{Position, StateKey},
};

/// Reward for the agent winning a game
pub const WIN_REWARD: f64 = 1.0;

/// Reward for a draw, and for every non-terminal step
pub const NEUTRAL_REWARD: f64 = 0.0;

/// Reward for the agent losing a game
pub const LOSS_REWARD: f64 = -1.0;

/// A state -> action learner driven by the episode loop.
///
/// Per episode the loop calls [`get_action`](LearningAgent::get_action) for
/// each agent turn and [`update`](LearningAgent::update) after each step.
/// The last update of an episode carries `None` for the next state and action.
pub trait LearningAgent {
    /// Choose an action for the encoded state.
    ///
    /// The action must reference an empty cell of the encoded board.
    fn get_action(&mut self, state: &StateKey) -> Result<Position>;

    /// Learn from one step.
    ///
    /// `new_state` and `new_action` are `None` exactly once per episode, on
    /// the final update after the game has ended.
    fn update(
        &mut self,
        prev_state: &StateKey,
        new_state: Option<&StateKey>,
        prev_action: Position,
        new_action: Option<Position>,
        reward: f64,
    ) -> Result<()>;

    /// Get the agent's name.
    fn name(&self) -> &str;

    /// Seed the agent's internal random number generator, if it has one.
    fn set_rng_seed(&mut self, _seed: u64) {}
}
