//! Behavioral properties of the heuristic teacher

mod common;

use std::collections::HashMap;

use common::{board, line_minus_one, pos};
use rand::{Rng, SeedableRng, rngs::StdRng};
use statrs::distribution::{ChiSquared, ContinuousCDF};
use tictactoe4::{
    ports::Policy,
    session::{MatchTally, play_match},
    teacher::{DecisionSource, RuleKind, Teacher},
    tictactoe::{Board, Mark, WINNING_LINES},
    types::Skill,
};

#[test]
fn test_win_rule_finds_gap_on_every_line() {
    let mut teacher = Teacher::new(Skill::PERFECT).with_seed(1);
    for (line_idx, line) in WINNING_LINES.iter().enumerate() {
        for gap in 0..line.len() {
            for mark in [Mark::X, Mark::O] {
                let board = line_minus_one(line_idx, gap, mark);
                let decision = teacher.decide(&board, mark).unwrap();
                assert_eq!(decision.position, line[gap]);
                assert_eq!(decision.source, DecisionSource::Rule(RuleKind::Win));
            }
        }
    }
}

#[test]
fn test_block_rule_finds_gap_on_every_line() {
    let mut teacher = Teacher::new(Skill::PERFECT).with_seed(2);
    for (line_idx, line) in WINNING_LINES.iter().enumerate() {
        for gap in 0..line.len() {
            let board = line_minus_one(line_idx, gap, Mark::O);
            let decision = teacher.decide(&board, Mark::X).unwrap();
            assert_eq!(decision.position, line[gap]);
            assert_eq!(decision.source, DecisionSource::Rule(RuleKind::Block));
        }
    }
}

#[test]
fn test_fork_scenario() {
    let mut teacher = Teacher::new(Skill::PERFECT);
    let b = board("X--- -X-- ---- ----");
    let decision = teacher.decide(&b, Mark::X).unwrap();
    assert_eq!(decision.position, pos(0, 1));
    assert_eq!(decision.source, DecisionSource::Rule(RuleKind::Fork));
}

#[test]
fn test_zero_skill_is_uniform_over_empty_cells() {
    // Ten empty cells, one of which wins immediately for X
    let b = board("XXX- OO-- O--- ----");
    let empties = b.empty_positions();
    assert_eq!(empties.len(), 10);

    let mut teacher = Teacher::new(Skill::RANDOM).with_seed(2024);
    let trials = 20_000;
    let mut counts: HashMap<_, usize> = HashMap::new();
    for _ in 0..trials {
        let decision = teacher.decide(&b, Mark::X).unwrap();
        assert_eq!(decision.source, DecisionSource::Bypass);
        *counts.entry(decision.position).or_default() += 1;
    }

    assert_eq!(counts.len(), empties.len());
    let expected = trials as f64 / empties.len() as f64;
    let statistic: f64 = empties
        .iter()
        .map(|p| {
            let observed = counts[p] as f64;
            (observed - expected).powi(2) / expected
        })
        .sum();

    let dof = (empties.len() - 1) as f64;
    let critical = ChiSquared::new(dof).unwrap().inverse_cdf(0.999);
    assert!(
        statistic < critical,
        "chi-squared {statistic:.2} exceeds {critical:.2}"
    );
}

#[test]
fn test_perfect_skill_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(77);
    for _ in 0..200 {
        // Random mid-game board reached by random play
        let mut b = Board::new();
        let mut mark = Mark::X;
        let plies = rng.random_range(0..10);
        for _ in 0..plies {
            let empties = b.empty_positions();
            let cell = empties[rng.random_range(0..empties.len())];
            b.place(cell, mark).unwrap();
            mark = mark.opponent();
        }

        let mut a = Teacher::new(Skill::PERFECT).with_seed(rng.random());
        let mut c = Teacher::new(Skill::PERFECT).with_seed(rng.random());
        let first = a.decide(&b, mark).unwrap();
        assert_ne!(first.source, DecisionSource::Bypass);
        if first.source == DecisionSource::Fallback {
            continue;
        }
        for _ in 0..5 {
            assert_eq!(a.decide(&b, mark).unwrap(), first);
            assert_eq!(c.decide(&b, mark).unwrap(), first);
        }
    }
}

#[test]
fn test_perfect_teacher_opens_center() {
    let mut teacher = Teacher::new(Skill::PERFECT);
    assert_eq!(teacher.select_move(&Board::new(), Mark::X).unwrap(), pos(1, 1));
    assert_eq!(teacher.select_move(&Board::new(), Mark::O).unwrap(), pos(1, 1));
}

#[test]
fn test_perfect_teachers_always_terminate() {
    let mut tally = MatchTally::default();
    for seed in 0..100 {
        let mut x = Teacher::new(Skill::PERFECT).with_seed(seed);
        let mut o = Teacher::new(Skill::PERFECT).with_seed(seed + 1000);
        let first = if seed % 2 == 0 { Mark::X } else { Mark::O };

        let report = play_match(&mut x, &mut o, first).unwrap();
        assert!(report.game.is_over());
        assert!(report.game.moves().len() <= 16);
        assert_eq!(report.game.moves()[0].mark, first);
        if first == Mark::X {
            assert_eq!(report.game.moves()[0].position, pos(1, 1));
        }
        tally.record(report.outcome);
    }
    assert_eq!(tally.total(), 100);
}

#[test]
fn test_noisy_teachers_always_terminate() {
    for seed in 0..200 {
        let mut x = Teacher::new(Skill::new(0.5).unwrap()).with_seed(seed);
        let mut o = Teacher::new(Skill::DEFAULT).with_seed(seed + 7);
        let report = play_match(&mut x, &mut o, Mark::X).unwrap();
        assert!(report.game.moves().len() <= 16);
    }
}
