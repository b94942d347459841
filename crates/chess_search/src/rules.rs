//! Rules-engine contract
//!
//! Search and evaluation never generate moves or detect mate themselves. They
//! drive a position through this trait: enumerate moves, make and unmake them on
//! one shared mutable position, and ask for status, check and piece queries.

use crate::error::EngineResult;
use crate::types::*;

/// A mutable game position with make/unmake semantics
pub trait Rules {
    fn side_to_move(&self) -> Color;

    /// Legal moves for the side to move, in generation order
    fn legal_moves(&self) -> Vec<Move>;

    /// Number of legal moves `color` would have if it were to move.
    ///
    /// For the side not to move this counts the moves available after passing
    /// the turn. If the side to move is in check, capturing its king counts as a
    /// move.
    fn legal_move_count(&self, color: Color) -> usize;

    /// Apply `mv` in place and push it on the move stack
    fn make_move(&mut self, mv: Move) -> EngineResult<()>;

    /// Exact inverse of the most recent `make_move`
    fn unmake_move(&mut self) -> EngineResult<Move>;

    /// Moves applied so far, oldest first
    fn move_stack(&self) -> &[Move];

    fn status(&self) -> GameStatus;

    /// Whether the side to move is in check
    fn is_check(&self) -> bool;

    fn piece_at(&self, square: Square) -> Option<Piece>;

    /// Whether `mv` removes an enemy piece, en passant included
    fn is_capture(&self, mv: Move) -> bool;

    /// Every occupied square with its piece, `a1` first
    fn pieces(&self) -> Vec<(Square, Piece)> {
        Square::ALL
            .iter()
            .filter_map(|&sq| self.piece_at(sq).map(|piece| (sq, piece)))
            .collect()
    }
}
