//! CLI infrastructure for the tictactoe4 tools
//!
//! Subcommands for playing the teacher interactively, running batch teaching
//! episodes, and pitting two teachers against each other.

pub mod commands;
pub mod output;
