//! Square grid construction and board orientation.

use serde::{Deserialize, Serialize};

use crate::domain::chess::Piece;
use crate::domain::square::SquareId;

/// One board cell with its algebraic identity and occupant, if any.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Square {
    pub id: SquareId,
    pub piece: Option<Piece>,
}

/// Combine decoded cells with the canonical coordinate template.
///
/// Unflipped order is file a..h within rank, ranks 8 down to 1, so index 0 is
/// a8 and index 63 is h1. Flipping reverses the list order only; square
/// identities are untouched, and lookups by id behave identically either way.
pub fn build_grid(cells: &[Option<Piece>; 64], flipped: bool) -> Vec<Square> {
    let mut squares: Vec<Square> = (0..64)
        .map(|index| Square {
            id: SquareId::from_index(index),
            piece: cells[index],
        })
        .collect();
    if flipped {
        squares.reverse();
    }
    squares
}
