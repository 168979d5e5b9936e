use crate::{oracle::PositionOracle, types::Move};

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`, going
/// through the oracle's make/unmake stack rather than copying positions.
pub fn perft<P: PositionOracle>(pos: &mut P, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner<P: PositionOracle>(pos: &mut P, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        let Some((buf, rest)) = layers.split_first_mut() else {
            return 1;
        };

        buf.clear();
        pos.legal_moves(buf);
        if depth == 1 {
            return buf.len() as u64;
        }

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            pos.make_move(mv);
            nodes += inner(pos, depth - 1, rest);
            pos.unmake_move();
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    inner(pos, depth, &mut layers[..])
}
