//! Piece-square tables
//!
//! One 64-entry table per piece kind, two for the king (middle and end phase).
//! Tables are indexed by square with `a1 = 0`, so the first row as written is
//! rank 1. White looks up its own square directly and Black looks up the
//! rank-flipped square.

use crate::types::*;

#[rustfmt::skip]
const PAWN_PST: [Score; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
    50, 50, 50, 50, 50, 50, 50, 50,
    10, 10, 20, 30, 30, 20, 10, 10,
     5,  5, 10, 25, 25, 10,  5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5, -5,-10,  0,  0,-10, -5,  5,
     5, 10, 10,-20,-20, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_PST: [Score; 64] = [
   -50,-40,-30,-30,-30,-30,-40,-50,
   -40,-20,  0,  0,  0,  0,-20,-40,
   -30,  0, 10, 15, 15, 10,  0,-30,
   -30,  5, 15, 20, 20, 15,  5,-30,
   -30,  0, 15, 20, 20, 15,  0,-30,
   -30,  5, 10, 15, 15, 10,  5,-30,
   -40,-20,  0,  5,  5,  0,-20,-40,
   -50,-40,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
const BISHOP_PST: [Score; 64] = [
   -20,-10,-10,-10,-10,-10,-10,-20,
   -10,  0,  0,  0,  0,  0,  0,-10,
   -10,  0,  5, 10, 10,  5,  0,-10,
   -10,  5,  5, 10, 10,  5,  5,-10,
   -10,  0, 10, 10, 10, 10,  0,-10,
   -10, 10, 10, 10, 10, 10, 10,-10,
   -10,  5,  0,  0,  0,  0,  5,-10,
   -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const ROOK_PST: [Score; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10, 10, 10, 10, 10,  5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     0,  0,  0,  5,  5,  0,  0,  0,
];

#[rustfmt::skip]
const QUEEN_PST: [Score; 64] = [
   -20,-10,-10, -5, -5,-10,-10,-20,
   -10,  0,  0,  0,  0,  0,  0,-10,
   -10,  0,  5,  5,  5,  5,  0,-10,
    -5,  0,  5,  5,  5,  5,  0, -5,
     0,  0,  5,  5,  5,  5,  0, -5,
   -10,  5,  5,  5,  5,  5,  0,-10,
   -10,  0,  5,  0,  0,  0,  0,-10,
   -20,-10,-10, -5, -5,-10,-10,-20,
];

#[rustfmt::skip]
const KING_PST_MIDDLEGAME: [Score; 64] = [
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -20,-30,-30,-40,-40,-30,-30,-20,
   -10,-20,-20,-20,-20,-20,-20,-10,
    20, 20,  0,  0,  0,  0, 20, 20,
    20, 30, 10,  0,  0, 10, 30, 20,
];

#[rustfmt::skip]
const KING_PST_ENDGAME: [Score; 64] = [
   -50,-40,-30,-20,-20,-30,-40,-50,
   -30,-20,-10,  0,  0,-10,-20,-30,
   -30,-10, 20, 30, 30, 20,-10,-30,
   -30,-10, 30, 40, 40, 30,-10,-30,
   -30,-10, 30, 40, 40, 30,-10,-30,
   -30,-10, 20, 30, 30, 20,-10,-30,
   -30,-30,  0,  0,  0,  0,-30,-30,
   -50,-30,-30,-30,-30,-30,-30,-50,
];

impl PieceKind {
    fn table(self, endgame: bool) -> &'static [Score; 64] {
        match self {
            PieceKind::Pawn => &PAWN_PST,
            PieceKind::Knight => &KNIGHT_PST,
            PieceKind::Bishop => &BISHOP_PST,
            PieceKind::Rook => &ROOK_PST,
            PieceKind::Queen => &QUEEN_PST,
            PieceKind::King if endgame => &KING_PST_ENDGAME,
            PieceKind::King => &KING_PST_MIDDLEGAME,
        }
    }
}

/// Table value for `piece` on `square`, signed for the piece's color
pub fn pst_value(piece: Piece, square: Square, endgame: bool) -> Score {
    let index = match piece.color {
        Color::White => square,
        Color::Black => square.flip_rank(),
    };
    piece.kind.table(endgame)[index.index()] * piece.color.multiplier()
}

/// Sum of table values over the board (White minus Black)
pub fn evaluate_positioning(pieces: &[(Square, Piece)], endgame: bool) -> Score {
    pieces
        .iter()
        .map(|&(square, piece)| pst_value(piece, square, endgame))
        .sum()
}

/// End phase: no queens left, or exactly two queens with at most two minor pieces
pub fn is_endgame(pieces: &[(Square, Piece)]) -> bool {
    let queens = pieces
        .iter()
        .filter(|(_, piece)| piece.kind == PieceKind::Queen)
        .count();
    let minors = pieces
        .iter()
        .filter(|(_, piece)| piece.kind.is_minor())
        .count();

    queens == 0 || (queens == 2 && minors <= 2)
}
