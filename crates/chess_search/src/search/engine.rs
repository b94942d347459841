//! Engine facade
//!
//! Bundles an [`EngineConfig`] with the search and evaluation entry points so
//! callers do not have to thread depth, width and the pruning switch by hand.

use super::make_unmake::MadeMove;
use super::root;
use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::evaluation;
use crate::rules::Rules;
use crate::types::*;

/// Configured move search over any [`Rules`] position.
///
/// The engine holds no search state between calls. Every method leaves the
/// position's move stack exactly as it found it.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Engine { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Search `depth` plies and return the best move, score from White's perspective
    pub fn find_best_move<P: Rules>(&self, position: &mut P, depth: u32) -> EngineResult<SearchResult> {
        root::find_best_move(position, depth, self.config.pruning)
    }

    /// [`find_best_move`](Self::find_best_move) at the configured depth
    pub fn best_move<P: Rules>(&self, position: &mut P) -> EngineResult<SearchResult> {
        self.find_best_move(position, self.config.depth)
    }

    /// Best `k` moves at the configured depth, best for the side to move first
    pub fn analyze_position<P: Rules>(
        &self,
        position: &mut P,
        k: usize,
    ) -> EngineResult<Vec<AnalysisEntry>> {
        root::analyze_position(position, self.config.depth, k, self.config.pruning)
    }

    /// [`analyze_position`](Self::analyze_position) with the configured width
    pub fn analyze<P: Rules>(&self, position: &mut P) -> EngineResult<Vec<AnalysisEntry>> {
        self.analyze_position(position, self.config.analysis_moves)
    }

    pub fn evaluate<P: Rules>(&self, position: &P) -> Score {
        evaluation::evaluate(position)
    }

    /// Static score after playing `mv`, from White's perspective
    pub fn evaluate_move<P: Rules>(&self, position: &mut P, mv: Move) -> EngineResult<Score> {
        let made = MadeMove::new(position, mv)?;
        Ok(evaluation::evaluate(&*made))
    }
}
