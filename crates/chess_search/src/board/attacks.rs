//! Attack detection and out-of-turn move counting
//!
//! `cozy-chess` only generates moves for the side to move, and it refuses to
//! pass the turn while that side is in check. Mobility still needs the other
//! side's count in that case, so this module counts it directly from the move
//! tables: a move is counted when the mover's own king is not attacked once the
//! move is on the board. Capturing the enemy king counts like any other capture.

use cozy_chess::{
    get_between_rays, get_bishop_moves, get_king_moves, get_knight_moves, get_pawn_attacks,
    get_pawn_quiets, get_rook_moves, BitBoard, Board, Color, File, Piece, Rank, Square,
};

/// Promotion choices per pawn move onto the last rank
const PROMOTION_PIECES: usize = 4;

/// Check if `square` is attacked by `by` with the given occupancy
///
/// Pieces on `captured` are treated as gone, which lets callers test a
/// position after a capture without building it.
pub(super) fn is_attacked(
    board: &Board,
    square: Square,
    by: Color,
    occupied: BitBoard,
    captured: BitBoard,
) -> bool {
    let attackers = board.colors(by) & !captured;
    let diagonal = attackers & (board.pieces(Piece::Bishop) | board.pieces(Piece::Queen));
    let orthogonal = attackers & (board.pieces(Piece::Rook) | board.pieces(Piece::Queen));

    !(get_bishop_moves(square, occupied) & diagonal).is_empty()
        || !(get_rook_moves(square, occupied) & orthogonal).is_empty()
        || !(get_knight_moves(square) & attackers & board.pieces(Piece::Knight)).is_empty()
        || !(get_king_moves(square) & attackers & board.pieces(Piece::King)).is_empty()
        || !(get_pawn_attacks(square, !by) & attackers & board.pieces(Piece::Pawn)).is_empty()
}

/// Number of legal moves `color` would have if it were its turn
///
/// No en passant is counted, since the double push it needs was not the last
/// move made by the other side.
pub(super) fn count_moves_out_of_turn(board: &Board, color: Color) -> usize {
    let ours = board.colors(color);
    let theirs = board.colors(!color);
    let occupied = board.occupied();
    let king = board.king(color);
    let last_rank = Rank::Eighth.relative_to(color).bitboard();

    let mut count = 0;
    for from in ours {
        let Some(piece) = board.piece_on(from) else {
            continue;
        };
        let targets = match piece {
            Piece::Pawn => {
                get_pawn_quiets(from, color, occupied) | (get_pawn_attacks(from, color) & theirs)
            }
            Piece::Knight => get_knight_moves(from) & !ours,
            Piece::Bishop => get_bishop_moves(from, occupied) & !ours,
            Piece::Rook => get_rook_moves(from, occupied) & !ours,
            Piece::Queen => {
                (get_bishop_moves(from, occupied) | get_rook_moves(from, occupied)) & !ours
            }
            Piece::King => get_king_moves(from) & !ours,
        };

        for to in targets {
            let after = (occupied ^ from.bitboard()) | to.bitboard();
            let king_square = if piece == Piece::King { to } else { king };
            if is_attacked(board, king_square, !color, after, to.bitboard()) {
                continue;
            }
            count += if piece == Piece::Pawn && last_rank.has(to) {
                PROMOTION_PIECES
            } else {
                1
            };
        }
    }

    count + count_castles(board, color)
}

fn count_castles(board: &Board, color: Color) -> usize {
    let rights = board.castle_rights(color);
    [(rights.short, File::G, File::F), (rights.long, File::C, File::D)]
        .into_iter()
        .filter(|&(rook, king_dest, rook_dest)| {
            rook.is_some_and(|rook| can_castle(board, color, rook, king_dest, rook_dest))
        })
        .count()
}

/// Path between king and rook is clear and the king never crosses an attacked square
fn can_castle(board: &Board, color: Color, rook: File, king_dest: File, rook_dest: File) -> bool {
    let back_rank = Rank::First.relative_to(color);
    let king = board.king(color);
    let rook = Square::new(rook, back_rank);
    let king_dest = Square::new(king_dest, back_rank);
    let rook_dest = Square::new(rook_dest, back_rank);

    let blockers = board.occupied() ^ king.bitboard() ^ rook.bitboard();
    let must_be_safe = get_between_rays(king, king_dest) | king_dest.bitboard();
    let must_be_empty = must_be_safe | get_between_rays(king, rook) | rook_dest.bitboard();

    (blockers & must_be_empty).is_empty()
        && !is_attacked(board, king, !color, board.occupied(), BitBoard::EMPTY)
        && must_be_safe
            .into_iter()
            .all(|square| !is_attacked(board, square, !color, board.occupied(), BitBoard::EMPTY))
}
