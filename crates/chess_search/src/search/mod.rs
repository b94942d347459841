//! Alpha-beta search
//!
//! This module implements move selection using:
//! - Negamax variant of alpha-beta pruning (recursive, fixed depth)
//! - Move ordering for better pruning (MVV-LVA, promotions, checks)
//! - A scoped make/unmake guard so the shared position is always restored
//!
//! Node and cutoff statistics belong to one top-level call and are returned
//! with its result.
//!
//! ## Module Organization
//!
//! - `alphabeta` - Core negamax algorithm
//! - `ordering` - Move ordering heuristics
//! - `make_unmake` - Move making/unmaking guard
//! - `root` - Best-move and top-k drivers
//! - `engine` - Configured facade over the drivers

mod alphabeta;
mod engine;
mod make_unmake;
mod ordering;
mod root;

pub use alphabeta::negamax;
pub use engine::Engine;
pub use ordering::{order_moves, score_move};
