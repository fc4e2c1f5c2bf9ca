//! Batch teaching pipeline
//!
//! - [`training`]: runs a learning agent against the teacher for many
//!   episodes and aggregates the results
//! - [`observers`]: progress display and episode logging hooks

pub mod observers;
pub mod training;

pub use observers::{EpisodeRecord, JsonlObserver, ProgressObserver, games_progress_bar};
pub use training::{TrainingConfig, TrainingPipeline, TrainingResult};

pub use crate::ports::Observer;
