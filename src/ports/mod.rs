//! Ports (trait boundaries) between the game loop and whoever supplies moves.
//!
//! The game loop owns these traits; the teacher, the console player and the
//! learning agents are adapters that implement them.

pub mod agent;
pub mod observer;
pub mod policy;

pub use agent::{LOSS_REWARD, LearningAgent, NEUTRAL_REWARD, WIN_REWARD};
pub use observer::Observer;
pub use policy::Policy;
