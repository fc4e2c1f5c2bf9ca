//! Subcommand implementations
//!
//! Each command exposes a clap `Args` struct and an `execute` function taking
//! the parsed arguments and the loaded [`AppConfig`](crate::config::AppConfig).
//! Command-line flags override values from the configuration file.

pub mod duel;
pub mod play;
pub mod teach;

use anyhow::{Result, anyhow};

use crate::{tictactoe::Mark, types::Skill};

pub(crate) fn parse_player_token(value: &str, flag: &str) -> Result<Mark> {
    match value.trim().to_ascii_lowercase().as_str() {
        "x" | "first" | "player1" | "p1" => Ok(Mark::X),
        "o" | "second" | "player2" | "p2" => Ok(Mark::O),
        other => Err(anyhow!(
            "Invalid value '{other}' for {flag} (expected 'x' or 'o')"
        )),
    }
}

/// Skill from a flag, falling back to the configured value
pub(crate) fn resolve_skill(flag: Option<f64>, fallback: Skill) -> Result<Skill> {
    match flag {
        Some(value) => Ok(Skill::new(value)?),
        None => Ok(fallback),
    }
}
