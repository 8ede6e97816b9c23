//! View models for rendering the board.
//!
//! These types are DTOs that prepare board state for display. They live in
//! the UI layer, not the domain layer; a renderer should need nothing else
//! to paint a square.

use serde::{Deserialize, Serialize};

use crate::domain::{PieceColor, Square};

/// Everything a renderer needs for one square, in render order.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SquareView {
    pub square: Square,
    /// Dark or light shade.
    pub is_dark: bool,
    /// Image path for the occupant, resolved through the piece-asset map.
    pub piece_image: Option<String>,
    /// The piece here can start a move.
    pub draggable: bool,
    /// The selected source has a move to this square.
    pub highlighted: bool,
    /// The drag in flight can be released here.
    pub droppable: bool,
    /// A promotion prompt for this color should be anchored here.
    pub promotion_prompt: Option<PieceColor>,
    /// Rank number to draw, when this square sits on the visual left edge.
    pub rank_label: Option<u8>,
    /// File letter to draw, when this square sits on the visual bottom edge.
    pub file_label: Option<char>,
}
