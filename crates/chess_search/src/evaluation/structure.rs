//! Pawn structure and king safety

use crate::constants::*;
use crate::types::*;

/// Doubled and isolated pawn penalties, netted White minus Black
pub fn evaluate_pawn_structure(pieces: &[(Square, Piece)]) -> Score {
    Color::ALL
        .iter()
        .map(|&color| pawn_penalty(pieces, color) * -color.multiplier())
        .sum()
}

fn pawn_penalty(pieces: &[(Square, Piece)], color: Color) -> Score {
    let mut files = [0 as Score; 8];
    for (square, piece) in pieces {
        if piece.color == color && piece.kind == PieceKind::Pawn {
            files[square.file() as usize] += 1;
        }
    }

    let mut penalty = 0;
    for (file, &count) in files.iter().enumerate() {
        if count > 1 {
            penalty += DOUBLED_PAWN_PENALTY * (count - 1);
        }

        let left = file.checked_sub(1).map_or(0, |f| files[f]);
        let right = files.get(file + 1).copied().unwrap_or(0);
        if left == 0 && right == 0 {
            penalty += ISOLATED_PAWN_PENALTY * count;
        }
    }
    penalty
}

/// Bonus for a king sitting on the a, b, g or h file, netted White minus Black
pub fn evaluate_king_safety(pieces: &[(Square, Piece)]) -> Score {
    pieces
        .iter()
        .filter(|(square, piece)| {
            piece.kind == PieceKind::King && matches!(square.file(), 0 | 1 | 6 | 7)
        })
        .map(|(_, piece)| KING_SHELTER_BONUS * piece.color.multiplier())
        .sum()
}
