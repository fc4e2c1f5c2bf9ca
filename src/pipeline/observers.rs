//! Observers for teaching runs

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    ports::Observer,
    session::{EpisodeReport, Opener},
    tictactoe::{GameOutcome, Mark},
    types::{Position, StateKey},
};

/// Progress bar over a number of games, with the running tally as its message
pub fn games_progress_bar(total_games: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(total_games);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
            .map_err(|e| Error::ProgressBarTemplate {
                message: e.to_string(),
            })?
            .progress_chars("=>-"),
    );
    Ok(pb)
}

/// Progress bar showing the agent's running win/draw/loss record
pub struct ProgressObserver {
    agent_mark: Mark,
    progress_bar: Option<ProgressBar>,
    wins: usize,
    draws: usize,
    losses: usize,
}

impl ProgressObserver {
    pub fn new(agent_mark: Mark) -> Self {
        Self {
            agent_mark,
            progress_bar: None,
            wins: 0,
            draws: 0,
            losses: 0,
        }
    }

    fn message(&self) -> String {
        format!("W:{} D:{} L:{}", self.wins, self.draws, self.losses)
    }
}

impl Observer for ProgressObserver {
    fn on_training_start(&mut self, total_games: usize) -> Result<()> {
        self.progress_bar = Some(games_progress_bar(total_games as u64)?);
        Ok(())
    }

    fn on_episode_end(&mut self, game_num: usize, report: &EpisodeReport) -> Result<()> {
        match report.outcome {
            GameOutcome::Win(winner) if winner == self.agent_mark => self.wins += 1,
            GameOutcome::Win(_) => self.losses += 1,
            GameOutcome::Draw => self.draws += 1,
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position(game_num as u64 + 1);
            pb.set_message(self.message());
        }
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.message());
        }
        Ok(())
    }
}

/// One line of a JSONL episode log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeRecord {
    pub game_num: usize,
    pub opener: Opener,
    pub outcome: GameOutcome,
    pub agent_reward: f64,
    pub moves: Vec<Position>,
    pub final_state: StateKey,
}

impl EpisodeRecord {
    pub fn from_report(game_num: usize, report: &EpisodeReport) -> Self {
        Self {
            game_num,
            opener: report.opener,
            outcome: report.outcome,
            agent_reward: report.agent_reward,
            moves: report.game.moves().iter().map(|m| m.position).collect(),
            final_state: report.game.board().state_key(),
        }
    }
}

/// Writes one JSON object per finished episode
pub struct JsonlObserver<W: Write> {
    writer: W,
}

impl JsonlObserver<BufWriter<File>> {
    /// Create an observer writing to a new file at `path`
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create episode log {}", path.display()),
            source,
        })?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> JsonlObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Observer for JsonlObserver<W> {
    fn on_episode_end(&mut self, game_num: usize, report: &EpisodeReport) -> Result<()> {
        serde_json::to_writer(&mut self.writer, &EpisodeRecord::from_report(game_num, report))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
