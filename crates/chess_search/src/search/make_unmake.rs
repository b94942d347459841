//! Move making and unmaking for search
//!
//! [`MadeMove`] applies a move on creation and unmakes it when dropped. Search
//! and move ordering only touch the position through it, so every exit path
//! (normal return, cutoff `break`, or an error bubbling up through `?`) leaves
//! the position exactly as it was found.

use std::ops::{Deref, DerefMut};

use tracing::error;

use crate::error::EngineResult;
use crate::rules::Rules;
use crate::types::Move;

/// A move applied to a borrowed position, unmade on drop
pub(crate) struct MadeMove<'a, P: Rules> {
    position: &'a mut P,
    mv: Move,
}

impl<'a, P: Rules> MadeMove<'a, P> {
    /// Make `mv` on `position`. Nothing is applied if the rules engine refuses it.
    pub(crate) fn new(position: &'a mut P, mv: Move) -> EngineResult<Self> {
        position.make_move(mv)?;
        Ok(MadeMove { position, mv })
    }
}

impl<P: Rules> Deref for MadeMove<'_, P> {
    type Target = P;

    fn deref(&self) -> &P {
        &*self.position
    }
}

impl<P: Rules> DerefMut for MadeMove<'_, P> {
    fn deref_mut(&mut self) -> &mut P {
        &mut *self.position
    }
}

impl<P: Rules> Drop for MadeMove<'_, P> {
    fn drop(&mut self) {
        if let Err(e) = self.position.unmake_move() {
            error!("[SEARCH] Failed to unmake {}: {}", self.mv, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::ChessBoard;
    use crate::error::EngineError;
    use crate::types::Color;

    #[test]
    fn test_move_is_unmade_on_drop() {
        let mut board = ChessBoard::new();
        {
            let made = MadeMove::new(&mut board, "g1f3".parse().unwrap()).unwrap();
            assert_eq!(made.side_to_move(), Color::Black);
            assert_eq!(made.move_stack().len(), 1);
        }
        assert_eq!(board.side_to_move(), Color::White);
        assert!(board.move_stack().is_empty());
    }

    #[test]
    fn test_nested_moves_unwind_in_order() {
        let mut board = ChessBoard::new();
        {
            let mut first = MadeMove::new(&mut board, "e2e4".parse().unwrap()).unwrap();
            let second = MadeMove::new(&mut *first, "e7e5".parse().unwrap()).unwrap();
            assert_eq!(second.move_stack().len(), 2);
        }
        assert!(board.move_stack().is_empty());
    }

    #[test]
    fn test_refused_move_leaves_nothing_to_unmake() {
        let mut board = ChessBoard::new();
        assert!(matches!(
            MadeMove::new(&mut board, "e2e5".parse().unwrap()),
            Err(EngineError::IllegalMove { .. })
        ));
        assert!(board.move_stack().is_empty());
    }
}
