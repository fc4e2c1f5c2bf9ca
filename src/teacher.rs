//! Scripted heuristic opponent
//!
//! The teacher plays a fixed rule cascade (win, block, fork, block-fork,
//! center, corner, side) with a tunable chance of ignoring it entirely:
//! each move starts with one uniform draw `r` in [0, 1), and if `r > skill`
//! the teacher plays a uniformly random legal move instead. When no rule
//! applies it also falls back to a random legal move.
//!
//! The teacher holds no per-game state, so one instance can play any number
//! of games.

pub mod rules;

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use rules::{CASCADE, Rule, RuleKind, evaluate_cascade};

use crate::{
    Error, Result,
    config::TeacherConfig,
    ports::Policy,
    tictactoe::{Board, Mark},
    types::{Position, Skill},
};

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Which step of the decision procedure produced a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecisionSource {
    /// The skill draw failed and the cascade was skipped
    Bypass,
    /// A cascade rule fired
    Rule(RuleKind),
    /// No rule fired
    Fallback,
}

/// A move together with the reason it was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Decision {
    pub position: Position,
    pub source: DecisionSource,
}

/// Heuristic teacher with a fixed skill level
#[derive(Debug, Clone)]
pub struct Teacher {
    name: String,
    skill: Skill,
    rng: StdRng,
}

impl Teacher {
    /// Create a teacher seeded from the thread-local generator
    pub fn new(skill: Skill) -> Self {
        Self {
            name: "Teacher".to_string(),
            skill,
            rng: build_rng(None),
        }
    }

    /// Create a teacher from a configuration
    pub fn from_config(config: &TeacherConfig) -> Self {
        Self {
            name: "Teacher".to_string(),
            skill: config.skill,
            rng: build_rng(config.seed),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn skill(&self) -> Skill {
        self.skill
    }

    /// Pick a move for `mark` and report which step chose it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValidMoves`] if the board is full. The game loop
    /// never asks for a move on a finished game, so this signals a caller bug.
    pub fn decide(&mut self, board: &Board, mark: Mark) -> Result<Decision> {
        let empties = board.empty_positions();
        if empties.is_empty() {
            return Err(Error::NoValidMoves);
        }

        let draw: f64 = self.rng.random();
        if draw > self.skill.value() {
            let position = self.random_move(&empties)?;
            debug!(teacher = %self.name, %mark, %position, draw, "skill bypass");
            return Ok(Decision {
                position,
                source: DecisionSource::Bypass,
            });
        }

        if let Some((kind, position)) = evaluate_cascade(board, mark) {
            debug!(teacher = %self.name, %mark, %position, rule = kind.label(), "rule fired");
            return Ok(Decision {
                position,
                source: DecisionSource::Rule(kind),
            });
        }

        let position = self.random_move(&empties)?;
        debug!(teacher = %self.name, %mark, %position, "no rule applied");
        Ok(Decision {
            position,
            source: DecisionSource::Fallback,
        })
    }

    fn random_move(&mut self, empties: &[Position]) -> Result<Position> {
        empties
            .choose(&mut self.rng)
            .copied()
            .ok_or(Error::NoValidMoves)
    }
}

impl Default for Teacher {
    fn default() -> Self {
        Self::new(Skill::default())
    }
}

impl Policy for Teacher {
    fn select_move(&mut self, board: &Board, mark: Mark) -> Result<Position> {
        self.decide(board, mark).map(|decision| decision.position)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn test_perfect_teacher_never_bypasses() {
        let mut teacher = Teacher::new(Skill::PERFECT).with_seed(1);
        let board = Board::new();
        for _ in 0..500 {
            let decision = teacher.decide(&board, Mark::X).unwrap();
            assert_eq!(decision.source, DecisionSource::Rule(RuleKind::Center));
            assert_eq!(decision.position, pos(1, 1));
        }
    }

    #[test]
    fn test_random_teacher_always_bypasses() {
        let mut teacher = Teacher::new(Skill::RANDOM).with_seed(2);
        let board = Board::from_string("XXX- ---- ---- ----").unwrap();
        let mut seen = HashMap::new();
        for _ in 0..2000 {
            let decision = teacher.decide(&board, Mark::X).unwrap();
            assert_eq!(decision.source, DecisionSource::Bypass);
            assert!(board.is_empty(decision.position));
            *seen.entry(decision.position).or_insert(0) += 1;
        }
        // Every one of the 13 empty cells shows up, not just the winning cell
        assert_eq!(seen.len(), 13);
    }

    #[test]
    fn test_takes_win_over_block() {
        let mut teacher = Teacher::new(Skill::PERFECT).with_seed(3);
        let board = Board::from_string("OOO- XXX- ---- ----").unwrap();
        let decision = teacher.decide(&board, Mark::X).unwrap();
        assert_eq!(decision.position, pos(1, 3));
        assert_eq!(decision.source, DecisionSource::Rule(RuleKind::Win));
    }

    #[test]
    fn test_fallback_when_no_rule_applies() {
        let mut teacher = Teacher::new(Skill::PERFECT).with_seed(4);
        let board = Board::from_string("XOXO OX-X X--O OXOO").unwrap();
        let decision = teacher.decide(&board, Mark::O).unwrap();
        assert_eq!(decision.source, DecisionSource::Fallback);
        assert!(board.is_empty(decision.position));
    }

    #[test]
    fn test_full_board_is_an_error() {
        let mut teacher = Teacher::new(Skill::PERFECT);
        let board = Board::from_string("XXOO OOXX XXOO OOXX").unwrap();
        assert!(matches!(
            teacher.decide(&board, Mark::X),
            Err(Error::NoValidMoves)
        ));
    }

    #[test]
    fn test_seeded_teachers_agree() {
        let board = Board::from_string("X--- -O-- ---- ----").unwrap();
        let mut a = Teacher::new(Skill::new(0.5).unwrap()).with_seed(99);
        let mut b = Teacher::new(Skill::new(0.5).unwrap()).with_seed(99);
        for _ in 0..100 {
            assert_eq!(
                a.decide(&board, Mark::X).unwrap(),
                b.decide(&board, Mark::X).unwrap()
            );
        }
    }

    #[test]
    fn test_from_config() {
        let config = TeacherConfig::new(Skill::new(0.25).unwrap()).with_seed(5);
        let teacher = Teacher::from_config(&config);
        assert_eq!(teacher.skill().value(), 0.25);
        assert_eq!(teacher.name(), "Teacher");
    }

    #[test]
    fn test_policy_plays_as_either_mark() {
        let mut teacher = Teacher::new(Skill::PERFECT).with_seed(6);
        let board = Board::from_string("---- XXX- ---- ----").unwrap();
        // As O the X threat is blocked, as X it is completed
        assert_eq!(teacher.select_move(&board, Mark::O).unwrap(), pos(1, 3));
        assert_eq!(teacher.select_move(&board, Mark::X).unwrap(), pos(1, 3));
    }
}
