//! Observer port for batch teaching runs
//!
//! Lets progress display and data export hook into the pipeline without the
//! pipeline knowing about either.

use crate::{Result, session::EpisodeReport};

/// Receives pipeline events.
///
/// Call order: `on_training_start` once, `on_episode_end` after every
/// finished episode, then `on_training_end` once. All methods default to
/// doing nothing.
pub trait Observer {
    fn on_training_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    /// Called after episode `game_num` (zero-based) has finished
    fn on_episode_end(&mut self, _game_num: usize, _report: &EpisodeReport) -> Result<()> {
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        Ok(())
    }
}
