//! Batch teaching runs: a learning agent against the teacher

use std::path::Path;

use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    Error, Result,
    config::TeacherConfig,
    ports::{LearningAgent, Observer, Policy},
    session::{EpisodeRunner, Opener, coin_toss},
    teacher::Teacher,
    tictactoe::{GameOutcome, Mark},
    types::Skill,
};

/// Training configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Number of training games
    pub num_games: usize,

    /// Random seed
    pub seed: Option<u64>,

    /// Skill of the teacher the agent plays against
    pub teacher_skill: Skill,

    /// Whether the agent plays as X or O
    pub agent_mark: Mark,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            num_games: 500,
            seed: None,
            teacher_skill: Skill::default(),
            agent_mark: Mark::O,
        }
    }
}

impl TrainingConfig {
    fn teacher(&self) -> TeacherConfig {
        let config = TeacherConfig::new(self.teacher_skill);
        match self.seed {
            Some(seed) => config.with_seed(seed.wrapping_add(1)),
            None => config,
        }
    }
}

/// Result of a training run, counted from the agent's side.
///
/// Only the counts are stored; rates are derived on demand so a saved result
/// reloads exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingResult {
    /// Total games played
    pub total_games: usize,

    /// Number of wins
    pub wins: usize,

    /// Number of draws
    pub draws: usize,

    /// Number of losses
    pub losses: usize,

    /// Games in which the agent placed the first mark
    pub agent_first: usize,
}

impl TrainingResult {
    /// Create a new training result
    pub fn new(
        total_games: usize,
        wins: usize,
        draws: usize,
        losses: usize,
        agent_first: usize,
    ) -> Self {
        Self {
            total_games,
            wins,
            draws,
            losses,
            agent_first,
        }
    }

    fn rate(&self, count: usize) -> f64 {
        if self.total_games > 0 {
            count as f64 / self.total_games as f64
        } else {
            0.0
        }
    }

    pub fn win_rate(&self) -> f64 {
        self.rate(self.wins)
    }

    pub fn draw_rate(&self) -> f64 {
        self.rate(self.draws)
    }

    pub fn loss_rate(&self) -> f64 {
        self.rate(self.losses)
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|source| Error::Io {
            operation: format!("create result file {}", path.display()),
            source,
        })?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| Error::Io {
            operation: format!("open result file {}", path.display()),
            source,
        })?;
        let result = serde_json::from_reader(file)?;
        Ok(result)
    }
}

/// Plays a learning agent against an opponent for a fixed number of episodes.
///
/// The first mover of every episode is a fair coin toss.
pub struct TrainingPipeline {
    config: TrainingConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl TrainingPipeline {
    /// Create a new training pipeline
    pub fn new(config: TrainingConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the pipeline
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Run training against a teacher built from the configuration
    pub fn run(&mut self, agent: &mut dyn LearningAgent) -> Result<TrainingResult> {
        let mut teacher = Teacher::from_config(&self.config.teacher());
        self.run_against(&mut teacher, agent)
    }

    /// Run training with the given opponent
    pub fn run_against(
        &mut self,
        opponent: &mut dyn Policy,
        agent: &mut dyn LearningAgent,
    ) -> Result<TrainingResult> {
        let mut rng = match self.config.seed {
            Some(seed) => {
                agent.set_rng_seed(seed);
                StdRng::seed_from_u64(seed.wrapping_add(2))
            }
            None => StdRng::from_rng(&mut rand::rng()),
        };

        let runner = EpisodeRunner::new(self.config.agent_mark);
        let mut wins = 0;
        let mut draws = 0;
        let mut losses = 0;
        let mut agent_first = 0;

        for observer in &mut self.observers {
            observer.on_training_start(self.config.num_games)?;
        }

        for game_num in 0..self.config.num_games {
            let opener = coin_toss(&mut rng);
            let report = runner.run(opponent, agent, opener)?;

            if opener == Opener::Agent {
                agent_first += 1;
            }
            match report.outcome {
                GameOutcome::Win(winner) if winner == self.config.agent_mark => wins += 1,
                GameOutcome::Win(_) => losses += 1,
                GameOutcome::Draw => draws += 1,
            }

            for observer in &mut self.observers {
                observer.on_episode_end(game_num, &report)?;
            }
        }

        for observer in &mut self.observers {
            observer.on_training_end()?;
        }

        let result = TrainingResult::new(self.config.num_games, wins, draws, losses, agent_first);
        info!(
            agent = agent.name(),
            opponent = opponent.name(),
            games = result.total_games,
            wins = result.wins,
            draws = result.draws,
            losses = result.losses,
            "training finished"
        );
        Ok(result)
    }
}
