pub mod board;
pub mod oracle;
pub mod perft;
pub mod time_control;
pub mod types;
pub mod uci;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use oracle::PositionOracle;
pub use perft::perft;
pub use time_control::*;
pub use types::*;
pub use uci::*;

/// Errors raised while setting up a position from external input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    #[error("invalid FEN: {0}")]
    InvalidFen(String),
    #[error("illegal move: {0}")]
    IllegalMove(String),
}

// =============================================================================
// Engine trait, implemented by every chess engine
// =============================================================================

/// Outcome of a search at one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Score in centipawns, relative to the side to move at the node
    pub score: i32,
    /// Best move found (None at terminal nodes, or if no legal moves exist)
    pub best_move: Option<Move>,
    /// The opponent's expected answer to `best_move` (diagnostics only)
    pub expected_reply: Option<Move>,
}

impl SearchResult {
    /// A result carrying only a score.
    pub fn leaf(score: i32) -> Self {
        Self {
            score,
            best_move: None,
            expected_reply: None,
        }
    }
}

/// Trait that all chess engines must implement.
///
/// The driver calls `think` once per turn with the current position and the
/// mover's clock. Legality of calling (the game is not over) is the driver's
/// responsibility.
pub trait Engine {
    /// Picks a move for the side to move.
    ///
    /// The position may be mutated during the call but must be restored
    /// before returning. `best_move` is `None` only if no legal move exists.
    fn think(&mut self, pos: &mut Position, clock: &Clock) -> SearchResult;

    /// Returns the engine's name for UCI identification
    fn name(&self) -> &str;

    /// Returns the engine's author for UCI identification
    fn author(&self) -> &str {
        "ML-chess"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}

    /// Optional: Set a UCI option. Returns true if the option was recognized.
    fn set_option(&mut self, _name: &str, _value: &str) -> bool {
        false
    }
}
