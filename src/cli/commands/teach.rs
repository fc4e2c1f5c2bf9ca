//! Teach command - run a learning agent against the teacher for many games

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::{Parser, ValueEnum};

use crate::{
    agents::{PolicyAgent, RandomAgent},
    cli::output::{format_number, format_share, print_kv, print_section, print_stats_table},
    config::AppConfig,
    pipeline::{JsonlObserver, ProgressObserver, TrainingConfig, TrainingPipeline},
    ports::LearningAgent,
    teacher::Teacher,
    types::Skill,
};

use super::{parse_player_token, resolve_skill};

/// Agent being taught
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Student {
    /// Uniformly random moves, no learning
    Random,
    /// A second teacher playing through the agent interface
    Teacher,
}

#[derive(Parser, Debug)]
#[command(about = "Run teaching episodes against the heuristic teacher")]
pub struct TeachArgs {
    /// Number of games to play
    #[arg(long, short = 'g')]
    pub games: Option<usize>,

    /// Teacher skill in [0, 1]
    #[arg(long)]
    pub skill: Option<f64>,

    /// Agent to teach
    #[arg(long, value_enum, default_value_t = Student::Random)]
    pub agent: Student,

    /// Skill of the agent when it is itself a teacher
    #[arg(long = "agent-skill", default_value_t = 0.9)]
    pub agent_skill: f64,

    /// Mark played by the agent (`x` or `o`)
    #[arg(long = "agent-mark")]
    pub agent_mark: Option<String>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the summary as JSON
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Write one JSON line per episode
    #[arg(long)]
    pub episodes: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

pub fn execute(args: TeachArgs, config: &AppConfig) -> Result<()> {
    let num_games = args.games.unwrap_or(config.games);
    if num_games == 0 {
        return Err(anyhow!("--games must be greater than 0"));
    }
    let agent_mark = match &args.agent_mark {
        Some(token) => parse_player_token(token, "--agent-mark")?,
        None => config.agent_mark,
    };
    let training = TrainingConfig {
        num_games,
        seed: args.seed.or(config.seed),
        teacher_skill: resolve_skill(args.skill, config.teacher_skill)?,
        agent_mark,
    };

    let mut agent: Box<dyn LearningAgent> = match args.agent {
        Student::Random => Box::new(RandomAgent::new("Random agent".to_string())),
        Student::Teacher => {
            let teacher = Teacher::new(Skill::new(args.agent_skill)?).with_name("Teacher agent");
            Box::new(PolicyAgent::new(teacher, agent_mark))
        }
    };

    print_section("Teaching run");
    print_stats_table(&[
        ("Agent", agent.name().to_string()),
        ("Agent mark", agent_mark.to_string()),
        ("Teacher skill", training.teacher_skill.to_string()),
        ("Games", format_number(num_games)),
        (
            "Seed",
            training
                .seed
                .map_or_else(|| "none".to_string(), |seed| seed.to_string()),
        ),
    ]);
    println!();

    let mut pipeline = TrainingPipeline::new(training);
    if !args.no_progress {
        pipeline = pipeline.with_observer(Box::new(ProgressObserver::new(agent_mark)));
    }
    if let Some(path) = &args.episodes {
        pipeline = pipeline.with_observer(Box::new(JsonlObserver::create(path)?));
    }

    let result = pipeline.run(agent.as_mut())?;

    print_section("Results");
    print_stats_table(&[
        ("Wins", format_share(result.wins, result.total_games)),
        ("Draws", format_share(result.draws, result.total_games)),
        ("Losses", format_share(result.losses, result.total_games)),
        ("Agent moved first", format_share(result.agent_first, result.total_games)),
    ]);

    if let Some(path) = &args.output {
        result.save(path)?;
        print_kv("Summary written", &path.display().to_string());
    }
    if let Some(path) = &args.episodes {
        print_kv("Episodes written", &path.display().to_string());
    }

    Ok(())
}
