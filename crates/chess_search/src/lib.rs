//! # Chess Search - Negamax Alpha-Beta with a Hand-Crafted Evaluator
//!
//! ## Overview
//!
//! This crate picks a move for the side to move by searching a fixed-depth game tree
//! with negamax and alpha-beta pruning, scoring leaves with a static evaluator built
//! from five terms: material, piece-square tables, mobility, pawn structure and king
//! shelter.
//!
//! The crate never generates moves itself. Everything it needs from the rules of the
//! game goes through the [`Rules`] trait, and [`ChessBoard`] provides a ready
//! implementation backed by `cozy-chess`.
//!
//! ## Module Organization
//!
//! - `types` - Colors, pieces, squares, moves and search results
//! - `constants` - Piece values, mate score and heuristic weights
//! - `error` - Error type shared by every fallible operation
//! - `config` - Engine configuration (depth, analysis width, pruning)
//! - `rules` - The rules-engine contract consumed by search and evaluation
//! - `board` - `cozy-chess` backed implementation of that contract
//! - `evaluation` - Static position evaluation
//! - `search` - Move ordering, negamax and the root drivers
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chess_search::{ChessBoard, Engine, EngineConfig};
//!
//! # fn main() -> chess_search::EngineResult<()> {
//! let engine = Engine::new(EngineConfig::default())?;
//! let mut board = ChessBoard::new();
//!
//! let result = engine.find_best_move(&mut board, 3)?;
//! if let Some(mv) = result.best_move {
//!     println!("{mv} scores {} after {} nodes", result.score, result.nodes);
//! }
//! # Ok(())
//! # }
//! ```

pub mod board;
pub mod config;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod rules;
pub mod search;
pub mod types;

pub use board::ChessBoard;
pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};
pub use evaluation::{evaluate, evaluate_breakdown, Evaluation};
pub use rules::Rules;
pub use search::{negamax, order_moves, score_move, Engine};
pub use types::{
    AnalysisEntry, Color, GameStatus, Move, Piece, PieceKind, Score, SearchResult, Square,
};
