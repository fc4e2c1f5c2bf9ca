//! Interactive text protocol
//!
//! The game state machine never sees raw input. [`ConsolePlayer`] is a
//! [`Policy`] that keeps prompting until the human enters a move the board
//! accepts, so a malformed or illegal entry is never an error and never
//! reaches the board. Input and output are generic so tests can drive the
//! protocol with in-memory buffers.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::{
    Error, Result,
    ports::Policy,
    session::Opener,
    tictactoe::{Board, GameOutcome, Mark},
    types::Position,
};

pub const MOVE_PROMPT: &str =
    "Your move! Please select a row and column from 0-3 in the format row,col: ";
pub const INVALID_INPUT: &str = "INVALID INPUT! Please use the correct format.";
pub const INVALID_MOVE: &str = "INVALID MOVE! Choose again.";
pub const FIRST_MOVE_PROMPT: &str = "Would you like to go first? [y/n]: ";
pub const INVALID_ANSWER: &str = "Invalid input. Please enter 'y' or 'n'.";

/// Parse a move written as `row,col` with single digits.
///
/// Surrounding whitespace is ignored. Anything else that does not have the
/// shape `<digit>,<digit>` is [`Error::MalformedMove`]; well-formed digits
/// outside 0-3 give [`Error::PositionOutOfRange`].
///
/// # Examples
///
/// ```
/// use tictactoe4::console::parse_move;
///
/// let pos = parse_move("2,3").unwrap();
/// assert_eq!((pos.row(), pos.col()), (2, 3));
/// assert!(parse_move("2 3").is_err());
/// ```
pub fn parse_move(input: &str) -> Result<Position> {
    let trimmed = input.trim();
    let malformed = || Error::MalformedMove {
        input: trimmed.to_string(),
    };

    let (row, col) = trimmed.split_once(',').ok_or_else(malformed)?;
    let digit = |s: &str| -> Option<usize> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.to_digit(10).map(|d| d as usize),
            _ => None,
        }
    };

    match (digit(row), digit(col)) {
        (Some(row), Some(col)) => Position::new(row, col),
        _ => Err(malformed()),
    }
}

/// Message announcing the end of an interactive game
pub fn result_message(outcome: GameOutcome, human: Mark) -> &'static str {
    match outcome {
        GameOutcome::Win(winner) if winner == human => "Player wins!",
        GameOutcome::Win(_) => "Agent wins!",
        GameOutcome::Draw => "It's a draw!",
    }
}

/// Render the final board followed by the result message
pub fn announce_result<W: Write>(
    output: &mut W,
    board: &Board,
    outcome: GameOutcome,
    human: Mark,
) -> Result<()> {
    write!(output, "{board}")?;
    writeln!(output, "{}", result_message(outcome, human))?;
    output.flush()?;
    Ok(())
}

/// Ask whether the human wants the first move, until the answer is usable.
///
/// Accepts `y`, `yes`, `n` and `no` in any case.
///
/// # Errors
///
/// Fails only on I/O errors, including end of input before an answer.
pub fn prompt_first_move<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Opener> {
    loop {
        write!(output, "{FIRST_MOVE_PROMPT}")?;
        output.flush()?;
        let line = read_line(input, "read first-move answer")?;
        writeln!(output)?;

        match line.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => return Ok(Opener::Player),
            "n" | "no" => return Ok(Opener::Agent),
            _ => writeln!(output, "{INVALID_ANSWER}")?,
        }
    }
}

fn read_line<R: BufRead>(input: &mut R, operation: &str) -> Result<String> {
    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(|source| Error::Io {
        operation: operation.to_string(),
        source,
    })?;
    if read == 0 {
        return Err(Error::Io {
            operation: operation.to_string(),
            source: std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "input closed"),
        });
    }
    Ok(line)
}

/// A human at a terminal
pub struct ConsolePlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            name: "Player".to_string(),
            input,
            output,
        }
    }

    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> Policy for ConsolePlayer<R, W> {
    /// Render the board, then prompt until a legal move is entered.
    ///
    /// # Errors
    ///
    /// Fails only on I/O errors, including end of input.
    fn select_move(&mut self, board: &Board, _mark: Mark) -> Result<Position> {
        write!(self.output, "{board}")?;
        loop {
            write!(self.output, "{MOVE_PROMPT}")?;
            self.output.flush()?;
            let line = read_line(&mut self.input, "read move")?;
            writeln!(self.output)?;

            match parse_move(&line) {
                Ok(position) if board.is_empty(position) => return Ok(position),
                Ok(position) => {
                    debug!(%position, "occupied cell entered");
                    writeln!(self.output, "{INVALID_MOVE}")?;
                }
                Err(Error::MalformedMove { input }) => {
                    debug!(%input, "malformed move entered");
                    writeln!(self.output, "{INVALID_INPUT}")?;
                }
                Err(err) => {
                    debug!(%err, "move rejected");
                    writeln!(self.output, "{INVALID_MOVE}")?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn console(input: &str) -> ConsolePlayer<Cursor<Vec<u8>>, Vec<u8>> {
        ConsolePlayer::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn transcript(player: ConsolePlayer<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(player.into_inner().1).unwrap()
    }

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_move("0,3").unwrap(), Position::new(0, 3).unwrap());
        assert_eq!(parse_move(" 1,2\n").unwrap(), Position::new(1, 2).unwrap());
    }

    #[test]
    fn test_parse_move_malformed() {
        for input in ["", "1", "12", "1 2", "a,b", "1,", ",1", "1,2,3", "10,1", "-1,2"] {
            assert!(
                matches!(parse_move(input), Err(Error::MalformedMove { .. })),
                "{input:?}"
            );
        }
    }

    #[test]
    fn test_parse_move_out_of_range() {
        assert!(matches!(
            parse_move("4,0"),
            Err(Error::PositionOutOfRange { row: 4, col: 0 })
        ));
        assert!(matches!(
            parse_move("0,9"),
            Err(Error::PositionOutOfRange { .. })
        ));
    }

    #[test]
    fn test_console_player_accepts_first_legal_move() {
        let mut player = console("2,1\n");
        let pos = player.select_move(&Board::new(), Mark::X).unwrap();
        assert_eq!(pos, Position::new(2, 1).unwrap());

        let out = transcript(player);
        assert!(out.starts_with("    0   1   2   3\n"));
        assert_eq!(out.matches(MOVE_PROMPT).count(), 1);
    }

    #[test]
    fn test_console_player_reprompts() {
        let board = Board::from_string("X--- ---- ---- ----").unwrap();
        let mut player = console("hello\n0,0\n5,5\n3,3\n");
        let pos = player.select_move(&board, Mark::X).unwrap();
        assert_eq!(pos, Position::new(3, 3).unwrap());

        let out = transcript(player);
        assert_eq!(out.matches(MOVE_PROMPT).count(), 4);
        assert_eq!(out.matches(INVALID_INPUT).count(), 1);
        assert_eq!(out.matches(INVALID_MOVE).count(), 2);
        // The board is shown once, not after every rejection
        assert_eq!(out.matches("    0   1   2   3").count(), 1);
    }

    #[test]
    fn test_console_player_eof_is_io_error() {
        let mut player = console("bad\n");
        let err = player.select_move(&Board::new(), Mark::X).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_prompt_first_move() {
        let mut out = Vec::new();
        let mut input = Cursor::new(b"maybe\nYES\n".to_vec());
        assert_eq!(
            prompt_first_move(&mut input, &mut out).unwrap(),
            Opener::Player
        );
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.matches(FIRST_MOVE_PROMPT).count(), 2);
        assert_eq!(out.matches(INVALID_ANSWER).count(), 1);

        let mut input = Cursor::new(b"n\n".to_vec());
        assert_eq!(
            prompt_first_move(&mut input, &mut Vec::new()).unwrap(),
            Opener::Agent
        );
    }

    #[test]
    fn test_result_messages() {
        assert_eq!(result_message(GameOutcome::Win(Mark::X), Mark::X), "Player wins!");
        assert_eq!(result_message(GameOutcome::Win(Mark::O), Mark::X), "Agent wins!");
        assert_eq!(result_message(GameOutcome::Draw, Mark::X), "It's a draw!");
    }

    #[test]
    fn test_announce_result() {
        let board = Board::from_string("XXXX OOO- ---- ----").unwrap();
        let mut out = Vec::new();
        announce_result(&mut out, &board, GameOutcome::Win(Mark::X), Mark::X).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("0   X   X   X   X   "));
        assert!(out.ends_with("Player wins!\n"));
    }
}
