//! Pointer-event translation into board intents.
//!
//! Hosts forward their framework's pointer/drag events as [`PointerEvent`]
//! values carrying nothing but square ids; the gateway turns them into state
//! machine intents. Its only state is the square a drag started from.

use crate::domain::{Move, SquareId};
use crate::models::board::BoardModel;

/// Abstract pointer intents, decoupled from any event-transfer mechanism.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PointerEvent {
    /// Press-and-release on a square.
    Click(SquareId),
    /// A drag took hold of a square's piece.
    DragStart(SquareId),
    /// The drag moved over a square. Pure feedback; no transition.
    DragEnter(SquareId),
    /// The drag left a square. Pure feedback; no transition.
    DragLeave(SquareId),
    /// The dragged piece was released over a square.
    Drop(SquareId),
    /// The drag ended away from the board.
    DragEnd,
}

/// Translates pointer events into [`BoardModel`] intents.
#[derive(Clone, Copy, Debug, Default)]
pub struct InteractionGateway {
    drag_from: Option<SquareId>,
}

impl InteractionGateway {
    pub fn new() -> Self {
        Self { drag_from: None }
    }

    /// The source square of the drag session in flight, if any.
    pub fn drag_source(&self) -> Option<SquareId> {
        self.drag_from
    }

    /// Abort the drag session, e.g. when a new snapshot invalidates it.
    pub fn cancel_drag(&mut self) {
        self.drag_from = None;
    }

    /// Feed one event through. Returns the committed move when the event
    /// completed one. Events that the board's gate suppresses fall through
    /// with no effect.
    pub fn handle(&mut self, event: PointerEvent, board: &mut BoardModel) -> Option<Move> {
        match event {
            PointerEvent::Click(id) => board.select_square(id),
            PointerEvent::DragStart(id) => {
                if board.begin_drag(id) {
                    self.drag_from = Some(id);
                }
                None
            }
            PointerEvent::Drop(id) => {
                // only meaningful inside a drag session
                self.drag_from.take().and_then(|_| board.select_square(id))
            }
            PointerEvent::DragEnd => {
                self.drag_from = None;
                None
            }
            PointerEvent::DragEnter(_) | PointerEvent::DragLeave(_) => None,
        }
    }
}
