use super::*;

fn pos(fen: &str) -> Position {
    Position::from_fen(fen).unwrap()
}

fn fixed(ply: u8) -> ClassicalEngine {
    let mut engine = ClassicalEngine::new();
    engine.config_mut().search.fixed_ply = Some(ply);
    engine
}

#[test]
fn test_think_returns_legal_move() {
    let mut engine = fixed(2);
    let mut p = Position::startpos();
    let before = p.fen();

    let result = engine.think(&mut p, &Clock::unlimited());

    let mut legal = Vec::new();
    p.legal_moves(&mut legal);
    let best = result.best_move.expect("startpos has moves");
    assert!(legal.contains(&best));
    assert_eq!(p.fen(), before);
    assert!(engine.last_stats().nodes > 0);
}

#[test]
fn test_no_move_when_game_is_over() {
    let mut engine = fixed(3);

    let mut mated = pos("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1");
    let result = engine.think(&mut mated, &Clock::unlimited());
    assert_eq!(result.best_move, None);
    assert_eq!(result.score, -MATE_SCORE);

    let mut stalemate = pos("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");
    let result = engine.think(&mut stalemate, &Clock::unlimited());
    assert_eq!(result.best_move, None);
    assert_eq!(result.score, DRAW_SCORE);
}

#[test]
fn test_zero_ply_plays_first_ordered_move() {
    let engine = fixed(0);
    let mut p = Position::startpos();
    let thought = engine.think_with(&mut p, &Clock::unlimited());

    let mut moves = Vec::new();
    p.legal_moves(&mut moves);
    order_moves(&mut moves);
    assert_eq!(thought.result.best_move, Some(moves[0]));
    assert_eq!(thought.result.score, evaluate(&p, true));
    assert_eq!(thought.budget.max_ply, 0);
}

#[test]
fn test_dead_position_still_moves() {
    // K+N vs K is a draw by rule but White still has to play something
    let engine = ClassicalEngine::new();
    let mut p = pos("8/8/8/4k3/8/8/8/4K1N1 w - - 0 1");
    let thought = engine.think_with(&mut p, &Clock::unlimited());

    assert_eq!(thought.result.score, DRAW_SCORE);
    assert!(thought.result.best_move.is_some());
    assert_eq!(thought.budget, DepthBudget::new(10, UNBOUNDED_EXCHANGE));
}

#[test]
fn test_budget_follows_the_clock() {
    let engine = ClassicalEngine::new();
    let mut p = Position::startpos();

    let thought = engine.think_with(&mut p, &Clock::from_millis(500));
    assert_eq!(thought.budget, DepthBudget::new(1, 0));
    assert!(thought.result.best_move.is_some());

    let thought = engine.think_with(&mut p, &Clock::from_millis(3_000));
    assert_eq!(thought.budget, DepthBudget::new(2, 1));
}

#[test]
fn test_short_clock_keeps_endgame_search_shallow() {
    let engine = ClassicalEngine::new();
    let mut p = pos("8/8/8/4k3/8/8/3QK3/7R w - - 0 1");
    assert_eq!(p.piece_count(), 4);

    let thought = engine.think_with(&mut p, &Clock::from_millis(500));
    assert_eq!(thought.budget, DepthBudget::new(1, 0));
    assert!(thought.result.best_move.is_some());
    // one ply with no exchange search is a root plus one leaf per move
    let mut moves = Vec::new();
    p.legal_moves(&mut moves);
    assert_eq!(thought.stats.nodes, 1 + moves.len() as u64);
}

#[test]
fn test_captures_hanging_queen() {
    let mut engine = fixed(2);
    let mut p = pos("4k3/8/8/3q4/4P3/8/8/Q3K3 w - - 0 1");
    let result = engine.think(&mut p, &Clock::unlimited());
    assert_eq!(result.best_move.map(chess_core::move_to_uci).as_deref(), Some("e4d5"));
}

#[test]
fn test_set_option() {
    let mut engine = ClassicalEngine::new();

    assert!(engine.set_option("Depth", "3"));
    assert_eq!(engine.config().search.fixed_ply, Some(3));
    assert!(engine.set_option("Depth", "0"));
    assert_eq!(engine.config().search.fixed_ply, None);
    assert!(!engine.set_option("Depth", "deep"));

    assert!(engine.set_option("MoveOrdering", "false"));
    assert!(!engine.config().search.move_ordering);
    assert!(engine.set_option("PieceSquareTables", "off"));
    assert!(!engine.config().search.use_pst);
    assert!(!engine.set_option("PieceSquareTables", "maybe"));

    assert!(!engine.set_option("Hash", "64"));
}

#[test]
fn test_new_game_clears_stats() {
    let mut engine = fixed(1);
    let mut p = Position::startpos();
    engine.think(&mut p, &Clock::unlimited());
    assert!(engine.last_stats().total_nodes() > 0);

    engine.new_game();
    assert_eq!(engine.last_stats(), SearchStats::default());
}

#[test]
fn test_engine_identity() {
    let engine = ClassicalEngine::new();
    assert_eq!(engine.name(), "Classical v2.0");
    assert_eq!(engine.author(), "ML-chess");
}
