//! 4x4 tic-tac-toe with a scripted heuristic teacher
//!
//! This crate provides:
//! - The board, win/draw detection and the turn state machine
//! - The teacher: a prioritized rule cascade with a tunable skill level
//! - Trait seams for move policies and external learning agents
//! - Episode and match drivers, an interactive console protocol and a batch
//!   teaching pipeline

pub mod agents;
pub mod cli;
pub mod config;
pub mod console;
pub mod error;
pub mod pipeline;
pub mod players;
pub mod ports;
pub mod session;
pub mod teacher;
pub mod tictactoe;
pub mod types;

pub use error::{Error, Result};
