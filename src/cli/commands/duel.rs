//! Duel command - two teachers play each other

use anyhow::{Result, anyhow};
use clap::Parser;
use tracing::info;

use crate::{
    cli::output::{format_number, format_share, print_section, print_stats_table},
    config::AppConfig,
    pipeline::games_progress_bar,
    session::{MatchTally, play_match},
    teacher::Teacher,
};

use super::{parse_player_token, resolve_skill};

#[derive(Parser, Debug)]
#[command(about = "Play two teachers against each other")]
pub struct DuelArgs {
    /// Number of games to play
    #[arg(long, short = 'g')]
    pub games: Option<usize>,

    /// Skill of the teacher playing X
    #[arg(long = "x-skill")]
    pub x_skill: Option<f64>,

    /// Skill of the teacher playing O
    #[arg(long = "o-skill")]
    pub o_skill: Option<f64>,

    /// Which mark opens every game (`x` or `o`)
    #[arg(long = "first-player", default_value = "x")]
    pub first_player: String,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

pub fn execute(args: DuelArgs, config: &AppConfig) -> Result<()> {
    let games = args.games.unwrap_or(config.games);
    if games == 0 {
        return Err(anyhow!("--games must be greater than 0"));
    }
    let first = parse_player_token(&args.first_player, "--first-player")?;
    let x_skill = resolve_skill(args.x_skill, config.teacher_skill)?;
    let o_skill = resolve_skill(args.o_skill, config.teacher_skill)?;

    let mut x = Teacher::new(x_skill).with_name("Teacher X");
    let mut o = Teacher::new(o_skill).with_name("Teacher O");
    if let Some(seed) = args.seed.or(config.seed) {
        x = x.with_seed(seed);
        o = o.with_seed(seed.wrapping_add(1));
    }

    let progress = if args.no_progress {
        None
    } else {
        Some(games_progress_bar(games as u64)?)
    };

    let mut tally = MatchTally::default();
    let mut longest = 0;
    for _ in 0..games {
        let report = play_match(&mut x, &mut o, first)?;
        tally.record(report.outcome);
        longest = longest.max(report.game.moves().len());
        if let Some(pb) = &progress {
            pb.inc(1);
            pb.set_message(format!("X:{} O:{} D:{}", tally.x_wins, tally.o_wins, tally.draws));
        }
    }
    if let Some(pb) = progress {
        pb.finish();
    }
    info!(games, x_wins = tally.x_wins, o_wins = tally.o_wins, draws = tally.draws, "duel finished");

    print_section(&format!("Duel: X (skill {x_skill}) vs O (skill {o_skill})"));
    print_stats_table(&[
        ("Games", format_number(tally.total())),
        ("X wins", format_share(tally.x_wins, tally.total())),
        ("O wins", format_share(tally.o_wins, tally.total())),
        ("Draws", format_share(tally.draws, tally.total())),
        ("Longest game", format!("{longest} moves")),
    ]);

    Ok(())
}
