//! Shared helpers for integration tests

#![allow(dead_code)]

use chess_search::{ChessBoard, Color, Move, Piece, Rules, Square};

/// Positions used across test files, all with legal moves for the side to move
pub const TEST_POSITIONS: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3",
    "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/3P1N2/PPP2PPP/RNBQK2R w KQkq - 1 5",
    "4k3/8/8/3q4/1r2P3/3p4/2N1Q3/4K3 w - - 0 1",
    "6k1/5ppp/8/3n4/8/2P5/PP3PPP/R5K1 w - - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R b KQkq - 0 1",
    "3r4/4P3/8/8/7k/8/8/K7 w - - 0 1",
];

/// Swap colors, flip every square vertically and hand the move to the other side
pub fn mirror_fen(fen: &str) -> String {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    assert!(fields.len() >= 4, "FEN needs at least four fields: {fen}");

    let placement = fields[0]
        .split('/')
        .rev()
        .map(swap_case)
        .collect::<Vec<_>>()
        .join("/");

    let side = if fields[1] == "w" { "b" } else { "w" };

    let castling = if fields[2] == "-" {
        "-".to_string()
    } else {
        let swapped = swap_case(fields[2]);
        // Canonical KQkq order
        "KQkq".chars().filter(|c| swapped.contains(*c)).collect()
    };

    let en_passant = match fields[3] {
        "-" => "-".to_string(),
        ep => {
            let file = &ep[..1];
            let rank = if &ep[1..] == "3" { "6" } else { "3" };
            format!("{file}{rank}")
        }
    };

    let halfmove = fields.get(4).copied().unwrap_or("0");
    let fullmove = fields.get(5).copied().unwrap_or("1");

    format!("{placement} {side} {castling} {en_passant} {halfmove} {fullmove}")
}

fn swap_case(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                c.to_ascii_lowercase()
            } else {
                c.to_ascii_uppercase()
            }
        })
        .collect()
}

/// Everything about a position a search must leave untouched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub stack: Vec<Move>,
    pub side: Color,
    pub pieces: Vec<(Square, Piece)>,
    pub legal_moves: Vec<Move>,
}

pub fn snapshot<P: Rules>(position: &P) -> Snapshot {
    Snapshot {
        stack: position.move_stack().to_vec(),
        side: position.side_to_move(),
        pieces: position.pieces(),
        legal_moves: position.legal_moves(),
    }
}

pub fn board(fen: &str) -> ChessBoard {
    ChessBoard::from_fen(fen).unwrap_or_else(|e| panic!("bad test FEN {fen}: {e}"))
}

pub fn mv(text: &str) -> Move {
    text.parse()
        .unwrap_or_else(|e| panic!("bad test move {text}: {e}"))
}

/// Install a test-writer subscriber once, filtered by `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
