//! Board state model - the application layer for interactive board state.
//!
//! `BoardModel` owns everything derived from the current snapshot (grid,
//! move index) plus the selection state machine that turns square picks into
//! committed moves. It never talks to the rules engine itself; committing a
//! move just hands the record back to the caller.

use tracing::{debug, warn};

use crate::domain::{
    Move, MoveIndex, Piece, PositionError, PromotionPiece, Square, SquareId, build_grid,
    parse_placement,
};
use crate::models::snapshot::Snapshot;

/// The interaction state. Exactly one variant is active at a time.
#[derive(Clone, PartialEq, Debug, Default)]
pub enum SelectionState {
    /// Nothing picked.
    #[default]
    Idle,
    /// A source square with at least one outgoing move is picked.
    Selected { from: SquareId },
    /// Both endpoints are picked but several moves match (promotion);
    /// waiting for the host to supply a choice.
    PendingPromotion {
        from: SquareId,
        to: SquareId,
        candidates: Vec<Move>,
    },
    /// A move was handed to the caller; cleared by the next snapshot.
    Committed { mv: Move },
}

/// The main board model containing grid, move index, and selection state.
pub struct BoardModel {
    snapshot: Snapshot,
    cells: [Option<Piece>; 64],
    squares: Vec<Square>,
    index: MoveIndex,
    selection: SelectionState,
    flipped: bool,
    disabled: bool,
}

impl BoardModel {
    /// Start with an empty board; call [`Self::replace_snapshot`] to load a
    /// real position.
    pub fn new() -> Self {
        let cells = [None; 64];
        Self {
            snapshot: Snapshot::empty(),
            squares: build_grid(&cells, false),
            cells,
            index: MoveIndex::default(),
            selection: SelectionState::Idle,
            flipped: false,
            disabled: false,
        }
    }

    /// The squares in render order (respects orientation).
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Look up a square's occupant by id, independent of orientation.
    pub fn piece_on(&self, id: SquareId) -> Option<Piece> {
        self.cells[id.index()]
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn index(&self) -> &MoveIndex {
        &self.index
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Reverse render order; identities and lookups are unaffected.
    pub fn set_flipped(&mut self, flipped: bool) {
        if self.flipped != flipped {
            self.flipped = flipped;
            self.squares = build_grid(&self.cells, flipped);
        }
    }

    /// Host-driven gate, e.g. when the game has ended or an opponent is
    /// thinking. While set, selection and drag intents are ignored.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether selection/drag intents are currently suppressed. True while
    /// the host gate is set, while a promotion choice is pending, and while
    /// a committed move awaits the next snapshot. [`Self::choose_promotion`]
    /// stays live throughout so the pending choice can be resolved.
    pub fn input_locked(&self) -> bool {
        self.disabled
            || matches!(
                self.selection,
                SelectionState::PendingPromotion { .. } | SelectionState::Committed { .. }
            )
    }

    /// Atomically swap in a new snapshot: reparse the position, rebuild the
    /// grid and move index, and reset the selection to idle.
    ///
    /// On a malformed position nothing changes - the previous grid, index,
    /// and snapshot all stay in place and the error is returned.
    pub fn replace_snapshot(&mut self, snapshot: Snapshot) -> Result<(), PositionError> {
        let cells = match parse_placement(&snapshot.placement) {
            Ok(cells) => cells,
            Err(err) => {
                warn!(placement = %snapshot.placement, %err, "rejecting snapshot");
                return Err(err);
            }
        };
        debug!(version = snapshot.version, moves = snapshot.moves.len(), "snapshot replaced");
        self.index = MoveIndex::new(&snapshot.moves);
        self.squares = build_grid(&cells, self.flipped);
        self.cells = cells;
        self.snapshot = snapshot;
        self.selection = SelectionState::Idle;
        Ok(())
    }

    /// Explicit host cancel: drop any selection or pending choice.
    pub fn reset(&mut self) {
        self.selection = SelectionState::Idle;
    }

    /// Feed a square pick into the state machine. Returns the move to apply
    /// when the pick completes one unambiguously.
    ///
    /// From idle, picking a square with outgoing moves selects it. With a
    /// source selected, picking a destination commits the single matching
    /// move, or parks in [`SelectionState::PendingPromotion`] when several
    /// match; picking another source re-selects, and anything else clears
    /// the selection.
    pub fn select_square(&mut self, id: SquareId) -> Option<Move> {
        if self.input_locked() {
            return None;
        }
        match self.selection {
            SelectionState::Idle => {
                if self.index.is_source(id) {
                    debug!(%id, "source selected");
                    self.selection = SelectionState::Selected { from: id };
                }
                None
            }
            SelectionState::Selected { from } => {
                let candidates = self.index.moves_between(from, id);
                match candidates.len() {
                    1 => {
                        let mv = candidates[0];
                        debug!(%mv, "move committed");
                        self.selection = SelectionState::Committed { mv };
                        Some(mv)
                    }
                    0 => {
                        if self.index.is_source(id) {
                            debug!(%id, "source re-selected");
                            self.selection = SelectionState::Selected { from: id };
                        } else {
                            self.selection = SelectionState::Idle;
                        }
                        None
                    }
                    _ => {
                        debug!(%from, to = %id, n = candidates.len(), "promotion choice pending");
                        self.selection = SelectionState::PendingPromotion {
                            from,
                            to: id,
                            candidates,
                        };
                        None
                    }
                }
            }
            // No transitions out of these without a promotion choice or a
            // fresh snapshot.
            SelectionState::PendingPromotion { .. } | SelectionState::Committed { .. } => None,
        }
    }

    /// Drag entry point: like [`Self::select_square`] but restricted to the
    /// become-selected transitions. Returns whether a drag session may begin.
    pub fn begin_drag(&mut self, id: SquareId) -> bool {
        if self.input_locked() || !self.index.is_source(id) {
            return false;
        }
        self.selection = SelectionState::Selected { from: id };
        true
    }

    /// Resolve a pending promotion. An unmatched choice is ignored and the
    /// state is left untouched so the host can offer the choice again.
    pub fn choose_promotion(&mut self, choice: PromotionPiece) -> Option<Move> {
        if self.disabled {
            return None;
        }
        let SelectionState::PendingPromotion { candidates, .. } = &self.selection else {
            return None;
        };
        let picked = candidates
            .iter()
            .find(|mv| mv.promotion == Some(choice))
            .copied();
        if let Some(mv) = picked {
            debug!(%mv, "promotion committed");
            self.selection = SelectionState::Committed { mv };
        }
        picked
    }
}

impl Default for BoardModel {
    fn default() -> Self {
        Self::new()
    }
}
