//! Player vs learning agent episodes

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Opener;
use crate::{
    Result,
    ports::{LOSS_REWARD, LearningAgent, NEUTRAL_REWARD, Policy, WIN_REWARD},
    tictactoe::{Game, GameOutcome, Mark},
};

/// Reward the agent playing `agent_mark` receives for a finished game
pub fn reward_for(outcome: GameOutcome, agent_mark: Mark) -> f64 {
    match outcome {
        GameOutcome::Win(winner) if winner == agent_mark => WIN_REWARD,
        GameOutcome::Win(_) => LOSS_REWARD,
        GameOutcome::Draw => NEUTRAL_REWARD,
    }
}

/// Summary of one finished episode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeReport {
    /// The finished game, including the final board and move list
    pub game: Game,
    pub outcome: GameOutcome,
    pub opener: Opener,
    /// Reward passed with the final update
    pub agent_reward: f64,
    /// Number of update calls the agent received, the final one included
    pub agent_updates: usize,
}

/// Runs episodes between a policy-driven player and a learning agent.
///
/// Per episode the agent sees the state key before each of its turns and
/// gets one update per step with a neutral reward. Once the game ends, it gets
/// exactly one final update with no next state or action and the terminal
/// reward.
#[derive(Debug, Clone, Copy)]
pub struct EpisodeRunner {
    agent_mark: Mark,
}

impl EpisodeRunner {
    /// Create a runner where the agent plays `agent_mark`
    pub fn new(agent_mark: Mark) -> Self {
        Self { agent_mark }
    }

    pub fn player_mark(&self) -> Mark {
        self.agent_mark.opponent()
    }

    /// Play one episode to completion.
    ///
    /// # Errors
    ///
    /// Fails if either side proposes an illegal move or the agent's update
    /// fails. Nothing illegal is ever applied to the board.
    pub fn run(
        &self,
        player: &mut dyn Policy,
        agent: &mut dyn LearningAgent,
        opener: Opener,
    ) -> Result<EpisodeReport> {
        let first = match opener {
            Opener::Player => self.player_mark(),
            Opener::Agent => self.agent_mark,
        };
        let mut game = Game::new(first);
        let mut agent_updates = 0;

        if opener == Opener::Player {
            self.player_turn(&mut game, player)?;
        }

        let mut prev_state = game.board().state_key();
        let mut prev_action = agent.get_action(&prev_state)?;

        let outcome = loop {
            game.play(prev_action)?;
            if let Some(outcome) = game.outcome() {
                break outcome;
            }

            self.player_turn(&mut game, player)?;
            if let Some(outcome) = game.outcome() {
                break outcome;
            }

            let new_state = game.board().state_key();
            let new_action = agent.get_action(&new_state)?;
            agent.update(
                &prev_state,
                Some(&new_state),
                prev_action,
                Some(new_action),
                NEUTRAL_REWARD,
            )?;
            agent_updates += 1;

            prev_state = new_state;
            prev_action = new_action;
        };

        let agent_reward = reward_for(outcome, self.agent_mark);
        agent.update(&prev_state, None, prev_action, None, agent_reward)?;
        agent_updates += 1;

        debug!(
            agent = agent.name(),
            player = player.name(),
            ?opener,
            ?outcome,
            plies = game.moves().len(),
            reward = agent_reward,
            "episode finished"
        );

        Ok(EpisodeReport {
            game,
            outcome,
            opener,
            agent_reward,
            agent_updates,
        })
    }

    fn player_turn(&self, game: &mut Game, player: &mut dyn Policy) -> Result<()> {
        let position = player.select_move(game.board(), self.player_mark())?;
        game.play(position)?;
        Ok(())
    }
}

impl Default for EpisodeRunner {
    fn default() -> Self {
        Self::new(Mark::O)
    }
}
