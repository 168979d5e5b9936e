use super::*;

fn moves_of(pos: &Position) -> Vec<Move> {
    let mut moves = Vec::new();
    pos.legal_moves(&mut moves);
    moves
}

fn find(pos: &Position, from: &str, to: &str) -> Move {
    let (from, to) = (coord_to_sq(from).unwrap(), coord_to_sq(to).unwrap());
    moves_of(pos)
        .into_iter()
        .find(|m| m.from == from && m.to == to)
        .expect("move should be legal")
}

#[test]
fn test_startpos_has_twenty_moves() {
    let pos = Position::startpos();
    assert_eq!(moves_of(&pos).len(), 20);
    assert_eq!(pos.piece_count(), 32);
    assert_eq!(pos.game_ply(), 0);
    assert_eq!(pos.side_to_move(), Color::White);
}

#[test]
fn test_invalid_fen_is_rejected() {
    assert!(matches!(
        Position::from_fen("not a fen"),
        Err(PositionError::InvalidFen(_))
    ));
}

#[test]
fn test_make_unmake_restores_position() {
    let mut pos = Position::startpos();
    let before = pos.fen();
    let hash = pos.position_hash();

    let mv = find(&pos, "e2", "e4");
    pos.make_move(mv);
    assert_ne!(pos.fen(), before);
    assert_eq!(pos.side_to_move(), Color::Black);
    assert_eq!(pos.game_ply(), 1);

    pos.unmake_move();
    assert_eq!(pos.fen(), before);
    assert_eq!(pos.position_hash(), hash);
    assert_eq!(pos.history_len(), 0);
}

#[test]
#[should_panic(expected = "no move to undo")]
fn test_unmake_on_empty_history_panics() {
    let mut pos = Position::startpos();
    pos.unmake_move();
}

#[test]
fn test_capture_is_classified() {
    let pos = Position::from_fen("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1").unwrap();
    let mv = find(&pos, "e4", "d5");
    assert_eq!(mv.piece, PieceKind::Pawn);
    assert_eq!(mv.captured, Some(PieceKind::Queen));
    assert!(mv.is_capture());
}

#[test]
fn test_castling_uses_king_destination() {
    let mut pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let short = find(&pos, "e1", "g1");
    let long = find(&pos, "e1", "c1");
    assert!(short.is_castle && long.is_castle);
    assert!(!short.is_capture());

    pos.make_move(short);
    assert_eq!(
        pos.piece_at(coord_to_sq("f1").unwrap()).map(|p| p.kind),
        Some(PieceKind::Rook)
    );
    assert_eq!(
        pos.piece_at(coord_to_sq("g1").unwrap()).map(|p| p.kind),
        Some(PieceKind::King)
    );
    pos.unmake_move();

    pos.make_move(long);
    assert_eq!(
        pos.piece_at(coord_to_sq("d1").unwrap()).map(|p| p.kind),
        Some(PieceKind::Rook)
    );
}

#[test]
fn test_en_passant_is_classified() {
    let mut pos = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
    let ep = find(&pos, "e5", "d6");
    assert!(ep.is_en_passant);
    assert_eq!(ep.captured, Some(PieceKind::Pawn));

    pos.make_move(ep);
    assert!(pos.piece_at(coord_to_sq("d5").unwrap()).is_none());
    assert_eq!(pos.piece_count(), 3);
}

#[test]
fn test_capture_moves_are_a_subset_of_legal_moves() {
    let pos = Position::from_fen(
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    )
    .unwrap();
    let legal = moves_of(&pos);
    let mut captures = Vec::new();
    pos.capture_moves(&mut captures);

    let expected: Vec<Move> = legal.into_iter().filter(|m| m.is_capture()).collect();
    assert_eq!(captures.len(), expected.len());
    assert!(captures.iter().all(|m| expected.contains(m)));
}

#[test]
fn test_capture_moves_include_en_passant() {
    let pos = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
    let mut captures = Vec::new();
    pos.capture_moves(&mut captures);
    assert_eq!(captures.len(), 1);
    assert!(captures[0].is_en_passant);
}

#[test]
fn test_checkmate_and_stalemate() {
    let mate =
        Position::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1")
            .unwrap();
    assert!(mate.in_check());
    assert!(mate.is_checkmate());
    assert!(!mate.is_draw());

    let stalemate = Position::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(!stalemate.is_checkmate());
    assert!(stalemate.is_draw());
}

#[test]
fn test_square_attacks() {
    let pos = Position::from_fen("4k3/8/8/8/8/8/3p4/R3K3 w - - 0 1").unwrap();
    // rook on a1 sees along the first rank up to the king
    assert!(pos.is_square_attacked(coord_to_sq("d1").unwrap(), Color::White));
    assert!(pos.is_square_attacked(coord_to_sq("a8").unwrap(), Color::White));
    // black pawn on d2 hits c1 and e1
    assert!(pos.is_square_attacked(coord_to_sq("e1").unwrap(), Color::Black));
    assert!(pos.is_square_attacked(coord_to_sq("c1").unwrap(), Color::Black));
    assert!(!pos.is_square_attacked(coord_to_sq("d1").unwrap(), Color::Black));
    assert!(!pos.is_square_attacked(coord_to_sq("h8").unwrap(), Color::White));
}

#[test]
fn test_threefold_repetition_by_knight_shuffle() {
    let mut pos = Position::startpos();
    let shuffle = [("g1", "f3"), ("g8", "f6"), ("f3", "g1"), ("f6", "g8")];
    for _ in 0..2 {
        assert!(!pos.is_draw());
        for (from, to) in shuffle {
            let mv = find(&pos, from, to);
            pos.make_move(mv);
        }
    }
    assert!(pos.is_threefold_repetition());
    assert!(pos.is_draw());

    pos.unmake_move();
    assert!(!pos.is_threefold_repetition());
}
