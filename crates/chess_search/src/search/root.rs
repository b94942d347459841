//! Root drivers
//!
//! The root never prunes its own siblings: every legal move is searched so the
//! reported score is exact for the requested depth. With pruning enabled the
//! root still narrows alpha, which lets children cut off lines that cannot beat
//! the best move found so far.

use tracing::{debug, trace};

use super::alphabeta::{terminal_score, SearchContext};
use super::make_unmake::MadeMove;
use super::ordering::order_moves;
use crate::constants::*;
use crate::error::{EngineError, EngineResult};
use crate::rules::Rules;
use crate::types::*;

fn check_depth(depth: u32) -> EngineResult<()> {
    if depth == 0 {
        return Err(EngineError::InvalidDepth { depth });
    }
    Ok(())
}

/// Best move for the side to move, score reported from White's perspective
pub(crate) fn find_best_move<P: Rules>(
    position: &mut P,
    depth: u32,
    pruning: bool,
) -> EngineResult<SearchResult> {
    check_depth(depth)?;

    let side = position.side_to_move();
    let mut ctx = SearchContext::new(pruning);
    // Root bookkeeping node
    ctx.nodes = 1;

    let moves = position.legal_moves();
    if moves.is_empty() {
        let score = terminal_score(position.status()).unwrap_or(DRAW_SCORE);
        debug!("[SEARCH] No legal moves for {:?}, score {}", side, score);
        return Ok(SearchResult {
            best_move: None,
            score: score * side.multiplier(),
            nodes: ctx.nodes,
            cutoffs: 0,
            depth,
        });
    }

    let moves = order_moves(position, moves)?;

    let mut alpha = -AB_INF;
    let beta = AB_INF;
    let mut best_move = None;
    let mut best_score = -AB_INF;

    for mv in moves {
        let score = {
            let mut child = MadeMove::new(position, mv)?;
            -ctx.negamax(&mut *child, depth - 1, -beta, -alpha)?
        };
        trace!("[SEARCH] Root move {} scored {}", mv, score);

        // Strictly greater: first found wins ties
        if score > best_score {
            best_score = score;
            best_move = Some(mv);
        }
        if ctx.pruning() {
            alpha = alpha.max(score);
        }
    }

    let result = SearchResult {
        best_move,
        score: best_score * side.multiplier(),
        nodes: ctx.nodes,
        cutoffs: ctx.cutoffs,
        depth,
    };

    debug!(
        "[SEARCH] Best move {:?} score {} (depth {}, nodes {}, cutoffs {})",
        result.best_move.map(|mv| mv.to_string()),
        result.score,
        result.depth,
        result.nodes,
        result.cutoffs
    );

    Ok(result)
}

/// Top `k` root moves, best first, scores from White's perspective.
///
/// Every root move gets a full window so each score is exact. Moves are visited
/// in generation order and the sort is stable, so equal scores keep that order.
pub(crate) fn analyze_position<P: Rules>(
    position: &mut P,
    depth: u32,
    k: usize,
    pruning: bool,
) -> EngineResult<Vec<AnalysisEntry>> {
    check_depth(depth)?;

    let side = position.side_to_move();
    let mut ctx = SearchContext::new(pruning);
    ctx.nodes = 1;

    let moves = position.legal_moves();
    let mut scored: Vec<(Score, Move)> = Vec::with_capacity(moves.len());

    for mv in moves {
        let score = {
            let mut child = MadeMove::new(position, mv)?;
            -ctx.negamax(&mut *child, depth - 1, -AB_INF, AB_INF)?
        };
        trace!("[SEARCH] Analysis move {} scored {}", mv, score);
        scored.push((score, mv));
    }

    // Best for the mover first
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.truncate(k);

    debug!(
        "[SEARCH] Analysis kept {} moves (depth {}, nodes {}, cutoffs {})",
        scored.len(),
        depth,
        ctx.nodes,
        ctx.cutoffs
    );

    Ok(scored
        .into_iter()
        .map(|(score, mv)| AnalysisEntry {
            mv,
            score: score * side.multiplier(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::ChessBoard;
    use crate::evaluation::evaluate;

    fn mv(text: &str) -> Move {
        text.parse().unwrap()
    }

    #[test]
    fn test_zero_depth_is_rejected() {
        let mut board = ChessBoard::new();
        assert!(matches!(
            find_best_move(&mut board, 0, true),
            Err(EngineError::InvalidDepth { depth: 0 })
        ));
        assert!(matches!(
            analyze_position(&mut board, 0, 3, true),
            Err(EngineError::InvalidDepth { depth: 0 })
        ));
    }

    #[test]
    fn test_start_position_depth_one() {
        let mut board = ChessBoard::new();
        let result = find_best_move(&mut board, 1, true).unwrap();

        assert_eq!(result.nodes, 21);
        assert_eq!(result.depth, 1);

        let best_static = board
            .legal_moves()
            .into_iter()
            .map(|m| {
                board.make_move(m).unwrap();
                let score = evaluate(&board);
                board.unmake_move().unwrap();
                score
            })
            .max()
            .unwrap();
        assert_eq!(result.score, best_static);
        assert!(board.move_stack().is_empty());
    }

    #[test]
    fn test_mate_in_one_for_white() {
        let mut board = ChessBoard::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").unwrap();
        for depth in 1..=3 {
            let result = find_best_move(&mut board, depth, true).unwrap();
            assert_eq!(result.best_move, Some(mv("a1a8")), "depth {depth}");
            assert_eq!(result.score, MATE_SCORE, "depth {depth}");
        }
    }

    #[test]
    fn test_mate_in_one_for_black() {
        let mut board = ChessBoard::from_fen("r5k1/8/8/8/8/8/5PPP/6K1 b - - 0 1").unwrap();
        let result = find_best_move(&mut board, 2, true).unwrap();
        assert_eq!(result.best_move, Some(mv("a8a1")));
        assert_eq!(result.score, -MATE_SCORE);
    }

    #[test]
    fn test_no_legal_moves_reports_terminal_score() {
        let mut mated = ChessBoard::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
        let result = find_best_move(&mut mated, 2, true).unwrap();
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, MATE_SCORE, "Black is mated: good for White");
        assert_eq!(result.nodes, 1);

        let mut stalemate = ChessBoard::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        let result = find_best_move(&mut stalemate, 2, true).unwrap();
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_analysis_is_sorted_and_truncated() {
        let mut board = ChessBoard::from_fen("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1").unwrap();
        let entries = analyze_position(&mut board, 1, 3, true).unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].mv, mv("e4d5"));
        assert!(entries.windows(2).all(|w| w[0].score >= w[1].score));

        let best = find_best_move(&mut board, 1, true).unwrap();
        assert_eq!(best.best_move, Some(entries[0].mv));
        assert_eq!(best.score, entries[0].score);
    }

    #[test]
    fn test_analysis_for_black_sorts_by_black_interest() {
        let mut board = ChessBoard::from_fen("4k3/8/8/3q4/4P3/8/8/4K3 b - - 0 1").unwrap();
        let entries = analyze_position(&mut board, 1, 5, true).unwrap();

        // Lower White-perspective scores are better for Black
        assert!(entries.windows(2).all(|w| w[0].score <= w[1].score));
        let best = find_best_move(&mut board, 1, true).unwrap();
        assert_eq!(best.score, entries[0].score);
    }

    #[test]
    fn test_analysis_width_larger_than_move_count() {
        let mut board = ChessBoard::new();
        let entries = analyze_position(&mut board, 1, 100, true).unwrap();
        assert_eq!(entries.len(), 20);
        assert!(analyze_position(&mut board, 1, 0, true).unwrap().is_empty());
    }
}
