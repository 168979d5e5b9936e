//! Per-search counters.

/// Diagnostics collected during one search.
///
/// A fresh value is created for every search and passed down by reference,
/// so the search functions themselves keep no state between calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Principal search nodes visited
    pub nodes: u64,
    /// Exchange (quiescence) nodes visited
    pub exchange_nodes: u64,
    /// Beta cutoffs, in both searches
    pub cutoffs: u64,
    /// Material and placement scores computed (terminal nodes excluded)
    pub evaluations: u64,
}

impl SearchStats {
    pub fn total_nodes(&self) -> u64 {
        self.nodes + self.exchange_nodes
    }
}
