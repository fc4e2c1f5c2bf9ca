//! Scripted interactive games through the console protocol

mod common;

use std::io::Cursor;

use common::board;
use tictactoe4::{
    agents::PolicyAgent,
    console::{
        ConsolePlayer, INVALID_INPUT, INVALID_MOVE, MOVE_PROMPT, announce_result,
        prompt_first_move,
    },
    session::{EpisodeRunner, Opener},
    teacher::Teacher,
    tictactoe::{GameOutcome, Mark},
    types::Skill,
};

#[test]
fn test_interactive_game_against_perfect_teacher() {
    // The human never threatens, so the teacher takes the center, three
    // corners and finally completes the main diagonal
    let script = "y\n2,0\nfoo\n2,3\n1,1\n1,0\n1,3\n3,1\n3,2\n";
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut output = Vec::new();

    let opener = prompt_first_move(&mut input, &mut output).unwrap();
    assert_eq!(opener, Opener::Player);

    let mut human = ConsolePlayer::new(input, output);
    let mut agent = PolicyAgent::new(Teacher::new(Skill::PERFECT), Mark::O);
    let report = EpisodeRunner::new(Mark::O)
        .run(&mut human, &mut agent, opener)
        .unwrap();

    assert_eq!(report.outcome, GameOutcome::Win(Mark::O));
    assert_eq!(report.agent_reward, 1.0);
    assert_eq!(report.game.moves().len(), 12);
    assert_eq!(*report.game.board(), board("O--O XO-X X-OX OXXO"));

    announce_result(
        human.output_mut(),
        report.game.board(),
        report.outcome,
        Mark::X,
    )
    .unwrap();

    let (_, output) = human.into_inner();
    let transcript = String::from_utf8(output).unwrap();
    assert_eq!(transcript.matches(INVALID_INPUT).count(), 1);
    assert_eq!(transcript.matches(INVALID_MOVE).count(), 1);
    assert_eq!(transcript.matches(MOVE_PROMPT).count(), 8);
    assert!(transcript.ends_with("Agent wins!\n"));
}

#[test]
fn test_agent_opens_when_human_declines() {
    let script = "no\n0,0\n";
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut output = Vec::new();

    let opener = prompt_first_move(&mut input, &mut output).unwrap();
    assert_eq!(opener, Opener::Agent);

    let mut human = ConsolePlayer::new(input, output);
    let mut agent = PolicyAgent::new(Teacher::new(Skill::PERFECT), Mark::O);
    // The script runs out after one move, which ends the game with an error
    let err = EpisodeRunner::new(Mark::O)
        .run(&mut human, &mut agent, opener)
        .unwrap_err();
    assert!(matches!(err, tictactoe4::Error::Io { .. }));

    let (_, output) = human.into_inner();
    let transcript = String::from_utf8(output).unwrap();
    // The first board the human sees already holds the teacher's center move
    assert!(transcript.contains("1   -   O   -   -   "));
}
