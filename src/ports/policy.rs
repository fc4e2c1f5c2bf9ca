//! Policy port - abstraction over anything that picks a move
//!
//! Implemented by:
//! - The heuristic teacher
//! - Random baselines
//! - The interactive console player

use crate::{
    Result,
    tictactoe::{Board, Mark},
    types::Position,
};

/// Policy trait - picks a move for `mark` on a board.
///
/// The game loop drives every side through this trait, so a human at the
/// terminal, a script or a test harness all look the same to it.
///
/// # Examples
///
/// ```no_run
/// use tictactoe4::{
///     ports::Policy,
///     tictactoe::{Board, Mark},
/// };
///
/// fn opening_move<P: Policy>(policy: &mut P) -> tictactoe4::Result<()> {
///     let board = Board::new();
///     let position = policy.select_move(&board, Mark::X)?;
///     println!("{} opens at {position}", policy.name());
///     Ok(())
/// }
/// ```
pub trait Policy {
    /// Select a move for `mark` on the given board.
    ///
    /// The returned position must reference an empty cell.
    ///
    /// # Errors
    ///
    /// Returns an error if no empty cell remains, or if the policy's move
    /// source fails (e.g. console input closed).
    fn select_move(&mut self, board: &Board, mark: Mark) -> Result<Position>;

    /// Get the policy's name.
    ///
    /// Used for identification in reports and logging.
    fn name(&self) -> &str;

    /// Seed the policy's internal random number generator.
    ///
    /// Deterministic runs call this with a fixed seed. Policies without
    /// randomness can ignore it.
    fn set_rng_seed(&mut self, _seed: u64) {}
}

impl<P: Policy + ?Sized> Policy for Box<P> {
    fn select_move(&mut self, board: &Board, mark: Mark) -> Result<Position> {
        (**self).select_move(board, mark)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn set_rng_seed(&mut self, seed: u64) {
        (**self).set_rng_seed(seed)
    }
}
