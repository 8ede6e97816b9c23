//! Atomic position + legal-move snapshots.

use serde::{Deserialize, Serialize};

use crate::domain::Move;

/// One observed game state: a position encoding paired with the legal moves
/// available in it.
///
/// A snapshot is immutable once built and is replaced wholesale; consumers
/// never see a position string from one turn next to a move list from
/// another. The version is a monotonic counter assigned by whoever produces
/// snapshots, useful for discarding stale derived state.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    pub placement: String,
    pub moves: Vec<Move>,
    pub version: u64,
}

impl Snapshot {
    pub fn new(placement: impl Into<String>, moves: Vec<Move>, version: u64) -> Self {
        Self {
            placement: placement.into(),
            moves,
            version,
        }
    }

    /// An empty board with no moves, used before the first real snapshot.
    pub fn empty() -> Self {
        Self::new("8/8/8/8/8/8/8/8", Vec::new(), 0)
    }
}
