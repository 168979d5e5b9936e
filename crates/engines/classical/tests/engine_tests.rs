//! Whole-engine checks on positions reached by random play.

use chess_core::{Clock, Engine, Position, PositionOracle};
use classical_engine::{
    evaluate, exchange, search, terminal_score, ClassicalEngine, SearchParams, SearchStats,
    INFINITY, UNBOUNDED_EXCHANGE,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Plays `plies` random moves from the start, stopping early if the game ends.
fn random_position(rng: &mut StdRng, plies: usize) -> Position {
    let mut pos = Position::startpos();
    let mut moves = Vec::new();
    for _ in 0..plies {
        moves.clear();
        pos.legal_moves(&mut moves);
        let Some(&mv) = moves.choose(rng) else {
            break;
        };
        pos.make_move(mv);
        if terminal_score(&pos).is_some() {
            pos.unmake_move();
            break;
        }
    }
    pos
}

#[test]
fn exchange_never_scores_below_stand_pat() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..30 {
        let mut pos = random_position(&mut rng, 30);
        let fen = pos.fen();
        let stand_pat = evaluate(&pos, true);

        let mut stats = SearchStats::default();
        let score = exchange(
            &mut pos,
            UNBOUNDED_EXCHANGE,
            -INFINITY,
            INFINITY,
            &SearchParams::default(),
            &mut stats,
        );
        assert!(score >= stand_pat, "{fen}: {score} < {stand_pat}");
        assert_eq!(pos.fen(), fen);
    }
}

#[test]
fn engine_moves_are_legal_and_leave_position_intact() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut engine = ClassicalEngine::new();
    engine.config_mut().search.fixed_ply = Some(2);

    for _ in 0..15 {
        let mut pos = random_position(&mut rng, 40);
        let fen = pos.fen();
        let hash = pos.position_hash();
        let depth = pos.history_len();

        let result = engine.think(&mut pos, &Clock::unlimited());

        let mut legal = Vec::new();
        pos.legal_moves(&mut legal);
        let best = result.best_move.expect("position was not terminal");
        assert!(legal.contains(&best), "{fen}: {best:?} is not legal");
        assert_eq!(pos.fen(), fen);
        assert_eq!(pos.position_hash(), hash);
        assert_eq!(pos.history_len(), depth);
    }
}

#[test]
fn mate_in_one_found_at_every_shallow_depth() {
    let mut pos = Position::from_fen("6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1").unwrap();
    for ply in 1..=2 {
        let mut stats = SearchStats::default();
        let result = search(
            &mut pos,
            ply,
            -INFINITY,
            INFINITY,
            &SearchParams::default(),
            &mut stats,
        );
        assert_eq!(
            result.best_move.map(chess_core::move_to_uci).as_deref(),
            Some("e1e8"),
            "ply {ply}"
        );
    }
}

#[test]
fn short_self_play_game_stays_consistent() {
    let mut white = ClassicalEngine::new();
    let mut black = ClassicalEngine::new();
    white.config_mut().search.fixed_ply = Some(2);
    black.config_mut().search.fixed_ply = Some(1);

    let mut pos = Position::startpos();
    for ply in 0..20 {
        if terminal_score(&pos).is_some() {
            break;
        }
        let engine = if ply % 2 == 0 { &mut white } else { &mut black };
        let result = engine.think(&mut pos, &Clock::unlimited());
        let mv = result.best_move.expect("game not over");
        pos.make_move(mv);
    }
    assert!(pos.history_len() > 0);
}
