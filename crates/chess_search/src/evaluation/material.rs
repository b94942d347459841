//! Material evaluation
//!
//! Evaluates the material balance of a position by counting piece values.

use crate::types::*;

/// Evaluate material balance (White minus Black)
pub fn evaluate_material(pieces: &[(Square, Piece)]) -> Score {
    pieces
        .iter()
        .map(|(_, piece)| piece.kind.value() * piece.color.multiplier())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::ChessBoard;
    use crate::constants::{PAWN_VALUE, QUEEN_VALUE};
    use crate::rules::Rules;

    fn material(fen: &str) -> Score {
        let board = ChessBoard::from_fen(fen).unwrap();
        evaluate_material(&board.pieces())
    }

    #[test]
    fn test_starting_position_material_balance() {
        let board = ChessBoard::new();
        assert_eq!(
            evaluate_material(&board.pieces()),
            0,
            "Starting position should have 0 material balance"
        );
    }

    #[test]
    fn test_white_up_queen() {
        let score = material("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert_eq!(score, QUEEN_VALUE, "Score should be exactly the queen value");
    }

    #[test]
    fn test_black_up_pawn() {
        let score = material("rnbqkbnr/pppppppp/8/8/8/8/PPPP1PPP/RNBQKBNR w KQkq - 0 1");
        assert_eq!(score, -PAWN_VALUE, "Score should be exactly negative pawn value");
    }

    #[test]
    fn test_bare_kings_cancel() {
        assert_eq!(material("4k3/8/8/8/8/8/8/4K3 w - - 0 1"), 0);
    }
}
