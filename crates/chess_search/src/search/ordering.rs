//! Move ordering for alpha-beta pruning
//!
//! Orders moves to maximize alpha-beta pruning efficiency by trying the most
//! promising moves first. The priority of a move is the sum of:
//! - MVV-LVA for captures: `10 * victim - attacker`
//! - The promoted piece's value for promotions
//! - A flat bonus when the move gives check
//!
//! Ties keep generation order.

use super::make_unmake::MadeMove;
use crate::constants::*;
use crate::error::EngineResult;
use crate::rules::Rules;
use crate::types::*;

/// Ordering priority of `mv` in `position`, higher first.
///
/// The check bonus is found by making the move and unmaking it again, which is
/// why the position is borrowed mutably. It is unchanged when this returns.
pub fn score_move<P: Rules>(position: &mut P, mv: Move) -> EngineResult<Score> {
    let mut score = 0;

    if position.is_capture(mv) {
        let attacker = position
            .piece_at(mv.from)
            .map_or(0, |piece| piece.kind.value());
        // Empty destination on a capture is en passant
        let victim = position
            .piece_at(mv.to)
            .map_or(PieceKind::Pawn.value(), |piece| piece.kind.value());
        // MVV-LVA: Most Valuable Victim - Least Valuable Attacker
        score += VICTIM_WEIGHT * victim - attacker;
    }

    if let Some(kind) = mv.promotion {
        score += kind.value();
    }

    let gives_check = MadeMove::new(position, mv)?.is_check();
    if gives_check {
        score += CHECK_BONUS;
    }

    Ok(score)
}

/// Sort moves by ordering priority (descending, stable)
pub fn order_moves<P: Rules>(position: &mut P, moves: Vec<Move>) -> EngineResult<Vec<Move>> {
    let mut scored: Vec<(Score, Move)> = Vec::with_capacity(moves.len());
    for mv in moves {
        scored.push((score_move(position, mv)?, mv));
    }

    // Sort moves by score (descending)
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    Ok(scored.into_iter().map(|(_, mv)| mv).collect())
}
