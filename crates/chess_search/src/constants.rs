//! # Engine Constants - Piece Values, Terminal Scores & Heuristic Weights
//!
//! ## Centipawn Valuation
//!
//! Scores are integers in centipawns (1/100th of a pawn):
//!
//! - **Pawn**: 100
//! - **Knight**: 320
//! - **Bishop**: 330 (slightly above the knight)
//! - **Rook**: 500
//! - **Queen**: 900
//! - **King**: 20,000
//!
//! The king value only matters for move ordering (a king is never captured) and for
//! the material sum, where both kings cancel out.
//!
//! ## Terminal Scores
//!
//! A checkmate scores `MATE_SCORE` from the winner's side. It is larger than any
//! sum of heuristic terms a legal position can produce, so a forced mate always
//! dominates a material edge. No ply distance is folded in: a mate in one and a
//! mate in three score the same.
//!
//! ## Search Window
//!
//! `AB_INF` bounds the alpha-beta window. It sits well above `MATE_SCORE` and well
//! below `i32::MAX`, so negating any window bound never overflows.

use crate::types::Score;

pub const PAWN_VALUE: Score = 100;
pub const KNIGHT_VALUE: Score = 320;
pub const BISHOP_VALUE: Score = 330;
pub const ROOK_VALUE: Score = 500;
pub const QUEEN_VALUE: Score = 900;
pub const KING_VALUE: Score = 20_000;

/// Score of a checkmated side to move, negated
pub const MATE_SCORE: Score = 20_000;
pub const DRAW_SCORE: Score = 0;

/// Alpha-beta window bound
pub const AB_INF: Score = 1_000_000;

/// Centipawns per legal move of mobility difference
pub const MOBILITY_WEIGHT: Score = 10;
/// Penalty per extra pawn on a file
pub const DOUBLED_PAWN_PENALTY: Score = 10;
/// Penalty per pawn without friendly pawns on adjacent files
pub const ISOLATED_PAWN_PENALTY: Score = 15;
/// Bonus for a king sheltered on the a, b, g or h file
pub const KING_SHELTER_BONUS: Score = 20;

/// Ordering bonus for a move that gives check
pub const CHECK_BONUS: Score = 50;
/// MVV-LVA victim multiplier
pub const VICTIM_WEIGHT: Score = 10;

/// Default search depth in plies
pub const DEFAULT_DEPTH: u32 = 3;
/// Default number of moves returned by analysis
pub const DEFAULT_ANALYSIS_MOVES: usize = 5;
