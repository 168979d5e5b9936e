//! Perft counts through the make/unmake stack.
//!
//! These catch any mismatch between our move classification (castling on the
//! king's destination square, en passant flags) and the underlying move
//! generator: a move that fails to round-trip changes the node counts.

use chess_core::{Position, perft};

const CASES: &[(&str, &[(u8, u64)])] = &[
    (
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        &[(1, 20), (2, 400), (3, 8_902)],
    ),
    (
        // "Kiwipete": castling, en passant and promotions all show up by depth 3
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        &[(1, 48), (2, 2_039), (3, 97_862)],
    ),
    (
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        &[(1, 14), (2, 191), (3, 2_812), (4, 43_238)],
    ),
    (
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        &[(1, 6), (2, 264), (3, 9_467)],
    ),
];

#[test]
fn perft_known_positions() {
    for (fen, depths) in CASES {
        for &(depth, expected) in depths.iter() {
            let mut pos = Position::from_fen(fen).expect("valid FEN");
            let before = pos.fen();
            let got = perft(&mut pos, depth);
            assert_eq!(
                got, expected,
                "Perft mismatch for FEN '{fen}' at depth {depth}: expected {expected}, got {got}"
            );
            assert_eq!(pos.fen(), before, "perft must leave the position untouched");
        }
    }
}
