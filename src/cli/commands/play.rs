//! Play command - a human at the terminal against an agent

use std::io;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::info;

use crate::{
    agents::{PolicyAgent, RandomAgent},
    config::AppConfig,
    console::{ConsolePlayer, announce_result, prompt_first_move},
    ports::LearningAgent,
    session::EpisodeRunner,
    teacher::Teacher,
    tictactoe::Mark,
};

use super::resolve_skill;

/// Agent the human plays against
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Opponent {
    /// The heuristic teacher
    Teacher,
    /// Uniformly random moves
    Random,
}

#[derive(Parser, Debug)]
#[command(about = "Play a game against the teacher or a random agent")]
pub struct PlayArgs {
    /// Agent to play against
    #[arg(long, value_enum, default_value_t = Opponent::Teacher)]
    pub opponent: Opponent,

    /// Teacher skill in [0, 1]
    #[arg(long)]
    pub skill: Option<f64>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

/// The human always plays X and the agent O
const HUMAN: Mark = Mark::X;

pub fn execute(args: PlayArgs, config: &AppConfig) -> Result<()> {
    let config = AppConfig {
        teacher_skill: resolve_skill(args.skill, config.teacher_skill)?,
        seed: args.seed.or(config.seed),
        ..config.clone()
    };
    let skill = config.teacher_skill;

    let mut agent: Box<dyn LearningAgent> = match args.opponent {
        Opponent::Teacher => {
            let teacher = Teacher::from_config(&config.teacher()).with_name("RL agent");
            Box::new(PolicyAgent::new(teacher, HUMAN.opponent()))
        }
        Opponent::Random => match config.seed {
            Some(seed) => Box::new(RandomAgent::with_seed("RL agent".to_string(), seed)),
            None => Box::new(RandomAgent::new("RL agent".to_string())),
        },
    };

    let mut input = io::stdin().lock();
    let mut output = io::stdout();
    let opener = prompt_first_move(&mut input, &mut output)?;
    info!(opponent = ?args.opponent, %skill, ?opener, "starting interactive game");

    let mut human = ConsolePlayer::new(input, output);
    let report = EpisodeRunner::new(HUMAN.opponent()).run(&mut human, agent.as_mut(), opener)?;

    announce_result(
        human.output_mut(),
        report.game.board(),
        report.outcome,
        HUMAN,
    )?;

    Ok(())
}
