//! Full position evaluation
//!
//! Evaluates positions using material, piece-square tables, mobility, pawn
//! structure and king safety.

use super::material::evaluate_material;
use super::pst::{evaluate_positioning, is_endgame};
use super::structure::{evaluate_king_safety, evaluate_pawn_structure};
use super::Evaluation;
use crate::constants::*;
use crate::rules::Rules;
use crate::types::*;

/// Evaluate full position from White's perspective
pub fn evaluate<P: Rules>(position: &P) -> Score {
    evaluate_breakdown(position).total()
}

/// Evaluate every term separately
pub fn evaluate_breakdown<P: Rules>(position: &P) -> Evaluation {
    let pieces = position.pieces();
    let endgame = is_endgame(&pieces);

    Evaluation {
        material: evaluate_material(&pieces),
        positioning: evaluate_positioning(&pieces, endgame),
        mobility: evaluate_mobility(position),
        pawn_structure: evaluate_pawn_structure(&pieces),
        king_safety: evaluate_king_safety(&pieces),
        endgame,
    }
}

/// Legal move difference (White minus Black), weighted
pub fn evaluate_mobility<P: Rules>(position: &P) -> Score {
    let white_moves = position.legal_move_count(Color::White) as Score;
    let black_moves = position.legal_move_count(Color::Black) as Score;
    (white_moves - black_moves) * MOBILITY_WEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::ChessBoard;

    #[test]
    fn test_starting_position_evaluates_to_zero() {
        let board = ChessBoard::new();
        let eval = evaluate_breakdown(&board);
        assert_eq!(eval, Evaluation::default());
        assert_eq!(evaluate(&board), 0);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let board =
            ChessBoard::from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3")
                .unwrap();
        assert_eq!(evaluate(&board), evaluate(&board));
    }

    #[test]
    fn test_mobility_after_e4() {
        let mut board = ChessBoard::new();
        board.make_move("e2e4".parse().unwrap()).unwrap();
        // White: 30 moves after e4, Black still 20
        assert_eq!(evaluate_mobility(&board), (30 - 20) * MOBILITY_WEIGHT);
    }

    #[test]
    fn test_total_is_sum_of_terms() {
        let board =
            ChessBoard::from_fen("6k1/5ppp/8/3n4/8/2P5/PP3PPP/R5K1 w - - 0 1").unwrap();
        let eval = evaluate_breakdown(&board);
        assert_eq!(
            eval.total(),
            eval.material + eval.positioning + eval.mobility + eval.pawn_structure + eval.king_safety
        );
        assert_eq!(evaluate(&board), eval.total());
    }
}
