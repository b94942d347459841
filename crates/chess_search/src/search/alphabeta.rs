//! Alpha-beta search with negamax
//!
//! Plain depth-first recursion over one shared position. Each level negates the
//! child's score and swaps the window, so every node maximizes from the point of
//! view of its own side to move.
//!
//! Statistics live in a [`SearchContext`] created by each top-level call and
//! dropped when it returns, so nothing is shared between searches.

use super::make_unmake::MadeMove;
use super::ordering::order_moves;
use crate::constants::*;
use crate::error::EngineResult;
use crate::evaluation::evaluate;
use crate::rules::Rules;
use crate::types::*;

/// Counters and switches for one top-level search
#[derive(Debug, Clone)]
pub(crate) struct SearchContext {
    pub(crate) nodes: u64,
    pub(crate) cutoffs: u64,
    pruning: bool,
}

impl SearchContext {
    pub(crate) fn new(pruning: bool) -> Self {
        SearchContext {
            nodes: 0,
            cutoffs: 0,
            pruning,
        }
    }

    #[inline]
    pub(crate) fn pruning(&self) -> bool {
        self.pruning
    }

    /// Score of `position` for its side to move, searched `depth` plies deep
    pub(crate) fn negamax<P: Rules>(
        &mut self,
        position: &mut P,
        depth: u32,
        mut alpha: Score,
        beta: Score,
    ) -> EngineResult<Score> {
        self.nodes += 1;

        if let Some(score) = terminal_score(position.status()) {
            return Ok(score);
        }
        if depth == 0 {
            return Ok(evaluate(position) * position.side_to_move().multiplier());
        }

        let moves = position.legal_moves();
        let moves = order_moves(position, moves)?;

        let mut max_score = -AB_INF;
        for mv in moves {
            let score = {
                let mut child = MadeMove::new(position, mv)?;
                -self.negamax(&mut *child, depth - 1, -beta, -alpha)?
            };

            max_score = max_score.max(score);
            alpha = alpha.max(score);

            // Beta cutoff
            if self.pruning && beta <= alpha {
                self.cutoffs += 1;
                break;
            }
        }

        Ok(max_score)
    }
}

/// Score of a finished game for the side to move, `None` while it goes on
pub(crate) fn terminal_score(status: GameStatus) -> Option<Score> {
    match status {
        GameStatus::Ongoing => None,
        GameStatus::Checkmate => Some(-MATE_SCORE),
        GameStatus::Stalemate | GameStatus::Draw => Some(DRAW_SCORE),
    }
}

/// Negamax with alpha-beta pruning on a fresh set of statistics.
///
/// The score is from the point of view of the side to move in `position`.
pub fn negamax<P: Rules>(
    position: &mut P,
    depth: u32,
    alpha: Score,
    beta: Score,
) -> EngineResult<Score> {
    SearchContext::new(true).negamax(position, depth, alpha, beta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::ChessBoard;

    #[test]
    fn test_depth_zero_is_static_eval_for_mover() {
        let mut board = ChessBoard::new();
        board.make_move("d2d4".parse().unwrap()).unwrap();

        let score = negamax(&mut board, 0, -AB_INF, AB_INF).unwrap();
        assert_eq!(score, -evaluate(&board), "Black to move sees White's score negated");
    }

    #[test]
    fn test_checkmated_side_scores_minus_mate() {
        let mut board = ChessBoard::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
        assert_eq!(negamax(&mut board, 0, -AB_INF, AB_INF).unwrap(), -MATE_SCORE);
        assert_eq!(negamax(&mut board, 3, -AB_INF, AB_INF).unwrap(), -MATE_SCORE);
    }

    #[test]
    fn test_stalemate_scores_zero() {
        let mut board = ChessBoard::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert_eq!(negamax(&mut board, 2, -AB_INF, AB_INF).unwrap(), DRAW_SCORE);
    }

    #[test]
    fn test_node_counter_counts_every_call() {
        let mut board = ChessBoard::new();
        let mut ctx = SearchContext::new(true);
        ctx.negamax(&mut board, 1, -AB_INF, AB_INF).unwrap();
        assert_eq!(ctx.nodes, 21, "One node for the call itself and one per reply");
        assert_eq!(ctx.cutoffs, 0);
    }

    #[test]
    fn test_cutoffs_only_when_pruning() {
        let mut board = ChessBoard::new();

        let mut pruned = SearchContext::new(true);
        let a = pruned.negamax(&mut board, 3, -AB_INF, AB_INF).unwrap();

        let mut full = SearchContext::new(false);
        let b = full.negamax(&mut board, 3, -AB_INF, AB_INF).unwrap();

        assert_eq!(a, b);
        assert!(pruned.cutoffs > 0);
        assert_eq!(full.cutoffs, 0);
        assert!(pruned.nodes < full.nodes);
        assert!(board.move_stack().is_empty());
    }
}
