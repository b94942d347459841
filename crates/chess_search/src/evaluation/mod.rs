//! Static position evaluation
//!
//! Scores a position from White's point of view as the plain sum of five terms:
//! - Material (piece values)
//! - Positioning (piece-square tables, king table chosen by game phase)
//! - Mobility (legal move difference)
//! - Pawn structure (doubled and isolated pawns)
//! - King safety (king sheltered on a wing file)
//!
//! Every term is computed the same way for both colors and subtracted, so the
//! score of a color-mirrored position is exactly the negation. Checkmate and
//! stalemate are not special-cased here; search handles them before it ever
//! asks for a static score.
//!
//! ## Module Organization
//!
//! - `material` - Material balance
//! - `pst` - Piece-square tables and phase detection
//! - `structure` - Pawn structure and king safety
//! - `position` - Mobility and the full evaluation

mod material;
mod position;
mod pst;
mod structure;

pub use material::evaluate_material;
pub use position::{evaluate, evaluate_breakdown, evaluate_mobility};
pub use pst::{evaluate_positioning, is_endgame, pst_value};
pub use structure::{evaluate_king_safety, evaluate_pawn_structure};

use crate::types::Score;

/// Per-term evaluation, all from White's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Evaluation {
    pub material: Score,
    pub positioning: Score,
    pub mobility: Score,
    pub pawn_structure: Score,
    pub king_safety: Score,
    /// Whether the end-phase king table was used
    pub endgame: bool,
}

impl Evaluation {
    pub fn total(&self) -> Score {
        self.material + self.positioning + self.mobility + self.pawn_structure + self.king_safety
    }
}
