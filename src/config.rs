//! Configuration types for teachers and runs.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result, tictactoe::Mark, types::Skill};

/// Configuration for creating a [`Teacher`](crate::teacher::Teacher).
///
/// # Examples
///
/// ```
/// use tictactoe4::{config::TeacherConfig, types::Skill};
///
/// let config = TeacherConfig::new(Skill::new(0.75).unwrap()).with_seed(42);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TeacherConfig {
    /// Probability of following the rule cascade on a given move
    pub skill: Skill,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl TeacherConfig {
    /// Create a configuration with the given skill and no seed
    pub fn new(skill: Skill) -> Self {
        Self { skill, seed: None }
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for TeacherConfig {
    fn default() -> Self {
        Self::new(Skill::default())
    }
}

/// Settings shared by the command-line tools, loadable from a JSON file.
///
/// Missing fields take their defaults, so a file only needs the values it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Skill of the scripted teacher
    pub teacher_skill: Skill,

    /// Random seed for reproducibility
    pub seed: Option<u64>,

    /// Number of games in batch runs
    pub games: usize,

    /// Mark played by the learning agent
    pub agent_mark: Mark,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            teacher_skill: Skill::default(),
            seed: None,
            games: 500,
            agent_mark: Mark::O,
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| Error::Io {
            operation: format!("open config file {}", path.display()),
            source,
        })?;
        let config: AppConfig = serde_json::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.games == 0 {
            return Err(Error::InvalidConfiguration {
                message: "games must be > 0".to_string(),
            });
        }
        Ok(())
    }

    /// Teacher configuration derived from these settings
    pub fn teacher(&self) -> TeacherConfig {
        let config = TeacherConfig::new(self.teacher_skill);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}
