//! `cozy-chess` backed rules engine
//!
//! [`ChessBoard`] implements [`Rules`] on top of `cozy_chess::Board`. Making a move
//! pushes a snapshot of the previous board, so unmaking is an exact restore rather
//! than a reverse computation.
//!
//! `cozy-chess` encodes castling as the king capturing its own rook (`e1h1`). The
//! adapter translates to and from the usual king-two-squares form (`e1g1`) so the
//! rest of the crate only ever sees standard coordinate notation.
//!
//! The adapter keeps its own halfmove clock because `cozy-chess` stops counting
//! at 100, while the automatic draw needs 150.

mod attacks;

use std::fmt;

use cozy_chess::BitBoard;

use crate::error::{EngineError, EngineResult};
use crate::rules::Rules;
use crate::types::*;

/// Plies without a capture or pawn move that end the game
pub const SEVENTY_FIVE_MOVE_PLIES: u32 = 150;

/// Occurrences of one position that end the game
pub const FIVEFOLD_REPETITION: usize = 5;

/// Largest halfmove clock `cozy-chess` accepts in a FEN
const COZY_MAX_HALFMOVE: u32 = 100;

#[derive(Clone)]
struct Snapshot {
    board: cozy_chess::Board,
    halfmove_clock: u32,
}

#[derive(Clone)]
pub struct ChessBoard {
    board: cozy_chess::Board,
    halfmove_clock: u32,
    history: Vec<Snapshot>,
    moves: Vec<Move>,
}

impl ChessBoard {
    /// Standard starting position
    pub fn new() -> Self {
        Self::from_board(cozy_chess::Board::default())
    }

    /// Parse a FEN, keeping halfmove clocks above 100
    pub fn from_fen(fen: &str) -> EngineResult<Self> {
        let invalid = |reason: String| EngineError::InvalidFen {
            fen: fen.to_string(),
            reason,
        };

        let halfmove_clock = match fen.split_whitespace().nth(4) {
            Some(field) => field
                .parse::<u32>()
                .map_err(|e| invalid(format!("halfmove clock {field:?}: {e}")))?,
            None => 0,
        };
        let capped = halfmove_clock.min(COZY_MAX_HALFMOVE).to_string();
        let normalized = fen
            .split_whitespace()
            .enumerate()
            .map(|(i, field)| if i == 4 { capped.as_str() } else { field })
            .collect::<Vec<_>>()
            .join(" ");

        let board = cozy_chess::Board::from_fen(&normalized, false)
            .map_err(|e| invalid(format!("{:?}", e)))?;
        Ok(ChessBoard {
            halfmove_clock,
            ..Self::from_board(board)
        })
    }

    pub fn from_board(board: cozy_chess::Board) -> Self {
        ChessBoard {
            halfmove_clock: u32::from(board.halfmove_clock()),
            board,
            history: Vec::new(),
            moves: Vec::new(),
        }
    }

    /// Underlying `cozy-chess` board
    pub fn board(&self) -> &cozy_chess::Board {
        &self.board
    }

    /// Plies since the last capture or pawn move
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// Times the current position has occurred since the last capture or pawn
    /// move, counting the current one
    pub fn repetitions(&self) -> usize {
        let window = (self.halfmove_clock as usize).min(self.history.len());
        let reversible = &self.history[self.history.len() - window..];
        1 + reversible
            .iter()
            .filter(|snapshot| snapshot.board.same_position(&self.board))
            .count()
    }

    fn engine_move(&self, mv: cozy_chess::Move) -> Move {
        let from = from_cozy_square(mv.from);
        let mut to = from_cozy_square(mv.to);

        // King onto its own rook is castling
        if self.board.piece_on(mv.from) == Some(cozy_chess::Piece::King)
            && self.board.color_on(mv.to) == Some(self.board.side_to_move())
        {
            let file = if to.file() > from.file() { 6 } else { 2 };
            to = Square::from_coords(file, from.rank()).unwrap_or(to);
        }

        Move {
            from,
            to,
            promotion: mv.promotion.map(from_cozy_piece),
        }
    }

    fn cozy_move(&self, mv: Move) -> cozy_chess::Move {
        let from = to_cozy_square(mv.from);
        let mut to = to_cozy_square(mv.to);

        if self.board.piece_on(from) == Some(cozy_chess::Piece::King)
            && mv.from.file().abs_diff(mv.to.file()) == 2
        {
            let rook_file = if mv.to.file() > mv.from.file() { 7 } else { 0 };
            if let Some(rook) = Square::from_coords(rook_file, mv.from.rank()) {
                to = to_cozy_square(rook);
            }
        }

        cozy_chess::Move {
            from,
            to,
            promotion: mv.promotion.map(to_cozy_piece),
        }
    }

    fn has_legal_moves(&self) -> bool {
        let mut any = false;
        self.board.generate_moves(|_| {
            any = true;
            true
        });
        any
    }

    /// Neither side can ever deliver mate
    fn is_insufficient_material(&self) -> bool {
        use cozy_chess::Color as C;

        [C::White, C::Black]
            .into_iter()
            .all(|color| self.has_insufficient_material(color))
    }

    /// `color` cannot mate by any sequence of legal moves
    ///
    /// A lone knight is insufficient only against a king with at most queens
    /// left. Bishops are insufficient while every bishop on the board stands on
    /// one square color and no pawn or knight remains.
    fn has_insufficient_material(&self, color: cozy_chess::Color) -> bool {
        use cozy_chess::Piece as P;

        let board = &self.board;
        let ours = board.colors(color);

        let heavy = board.pieces(P::Pawn) | board.pieces(P::Rook) | board.pieces(P::Queen);
        if !(ours & heavy).is_empty() {
            return false;
        }

        if !(ours & board.pieces(P::Knight)).is_empty() {
            let their_minors_and_rooks =
                board.colors(!color) & !board.pieces(P::King) & !board.pieces(P::Queen);
            return ours.len() <= 2 && their_minors_and_rooks.is_empty();
        }

        if !(ours & board.pieces(P::Bishop)).is_empty() {
            let bishops = board.pieces(P::Bishop);
            let one_square_color = (bishops & BitBoard::DARK_SQUARES).is_empty()
                || (bishops & BitBoard::LIGHT_SQUARES).is_empty();
            return one_square_color
                && board.pieces(P::Pawn).is_empty()
                && board.pieces(P::Knight).is_empty();
        }

        true
    }
}

impl Default for ChessBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ChessBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChessBoard")
            .field("side_to_move", &self.side_to_move())
            .field("pieces", &self.pieces().len())
            .field("halfmove_clock", &self.halfmove_clock)
            .field("moves", &self.moves)
            .finish()
    }
}

impl Rules for ChessBoard {
    fn side_to_move(&self) -> Color {
        from_cozy_color(self.board.side_to_move())
    }

    fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        self.board.generate_moves(|piece_moves| {
            for mv in piece_moves {
                moves.push(self.engine_move(mv));
            }
            false
        });
        moves
    }

    fn legal_move_count(&self, color: Color) -> usize {
        if self.side_to_move() == color {
            count_moves(&self.board)
        } else {
            match self.board.null_move() {
                Some(passed) => count_moves(&passed),
                None => attacks::count_moves_out_of_turn(&self.board, to_cozy_color(color)),
            }
        }
    }

    fn make_move(&mut self, mv: Move) -> EngineResult<()> {
        let illegal = || EngineError::IllegalMove { mv: mv.to_string() };

        // Castling is only accepted as the king moving two squares
        if self.board.color_on(to_cozy_square(mv.to)) == Some(self.board.side_to_move()) {
            return Err(illegal());
        }

        let resets_clock = self.is_capture(mv)
            || self.board.piece_on(to_cozy_square(mv.from)) == Some(cozy_chess::Piece::Pawn);
        let mut next = self.board.clone();
        next.try_play(self.cozy_move(mv)).map_err(|_| illegal())?;

        let halfmove_clock = if resets_clock {
            0
        } else {
            self.halfmove_clock + 1
        };
        self.history.push(Snapshot {
            board: std::mem::replace(&mut self.board, next),
            halfmove_clock: std::mem::replace(&mut self.halfmove_clock, halfmove_clock),
        });
        self.moves.push(mv);
        Ok(())
    }

    fn unmake_move(&mut self) -> EngineResult<Move> {
        let previous = self.history.pop().ok_or(EngineError::EmptyMoveStack)?;
        self.board = previous.board;
        self.halfmove_clock = previous.halfmove_clock;
        self.moves.pop().ok_or(EngineError::EmptyMoveStack)
    }

    fn move_stack(&self) -> &[Move] {
        &self.moves
    }

    fn status(&self) -> GameStatus {
        let has_moves = self.has_legal_moves();
        if !has_moves && self.is_check() {
            GameStatus::Checkmate
        } else if self.is_insufficient_material() {
            GameStatus::Draw
        } else if !has_moves {
            GameStatus::Stalemate
        } else if self.halfmove_clock >= SEVENTY_FIVE_MOVE_PLIES
            || self.repetitions() >= FIVEFOLD_REPETITION
        {
            GameStatus::Draw
        } else {
            GameStatus::Ongoing
        }
    }

    fn is_check(&self) -> bool {
        !self.board.checkers().is_empty()
    }

    fn piece_at(&self, square: Square) -> Option<Piece> {
        let sq = to_cozy_square(square);
        let kind = self.board.piece_on(sq)?;
        let color = self.board.color_on(sq)?;
        Some(Piece::new(from_cozy_color(color), from_cozy_piece(kind)))
    }

    fn is_capture(&self, mv: Move) -> bool {
        let from = to_cozy_square(mv.from);
        let to = to_cozy_square(mv.to);
        match self.board.color_on(to) {
            Some(color) => color != self.board.side_to_move(),
            // En passant: pawn changes file onto an empty square
            None => {
                self.board.piece_on(from) == Some(cozy_chess::Piece::Pawn)
                    && mv.from.file() != mv.to.file()
            }
        }
    }
}

fn count_moves(board: &cozy_chess::Board) -> usize {
    let mut count = 0;
    board.generate_moves(|piece_moves| {
        count += piece_moves.into_iter().count();
        false
    });
    count
}

#[inline]
fn to_cozy_square(square: Square) -> cozy_chess::Square {
    cozy_chess::Square::index(square.index())
}

#[inline]
fn from_cozy_square(square: cozy_chess::Square) -> Square {
    Square::ALL[square as usize]
}

fn from_cozy_piece(piece: cozy_chess::Piece) -> PieceKind {
    match piece {
        cozy_chess::Piece::Pawn => PieceKind::Pawn,
        cozy_chess::Piece::Knight => PieceKind::Knight,
        cozy_chess::Piece::Bishop => PieceKind::Bishop,
        cozy_chess::Piece::Rook => PieceKind::Rook,
        cozy_chess::Piece::Queen => PieceKind::Queen,
        cozy_chess::Piece::King => PieceKind::King,
    }
}

fn to_cozy_piece(kind: PieceKind) -> cozy_chess::Piece {
    match kind {
        PieceKind::Pawn => cozy_chess::Piece::Pawn,
        PieceKind::Knight => cozy_chess::Piece::Knight,
        PieceKind::Bishop => cozy_chess::Piece::Bishop,
        PieceKind::Rook => cozy_chess::Piece::Rook,
        PieceKind::Queen => cozy_chess::Piece::Queen,
        PieceKind::King => cozy_chess::Piece::King,
    }
}

fn from_cozy_color(color: cozy_chess::Color) -> Color {
    match color {
        cozy_chess::Color::White => Color::White,
        cozy_chess::Color::Black => Color::Black,
    }
}

fn to_cozy_color(color: Color) -> cozy_chess::Color {
    match color {
        Color::White => cozy_chess::Color::White,
        Color::Black => cozy_chess::Color::Black,
    }
}
