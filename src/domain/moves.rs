//! Legal-move records and endpoint lookup.
//!
//! Moves are produced by the rules engine and treated as opaque beyond their
//! four fields. The index is rebuilt from scratch for every snapshot; it
//! never mutates in place.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::chess::{PieceColor, PromotionPiece};
use crate::domain::square::SquareId;

/// One legal move as supplied by the rules engine.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Move {
    pub from: SquareId,
    pub to: SquareId,
    pub color: PieceColor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<PromotionPiece>,
}

impl Move {
    pub fn new(from: SquareId, to: SquareId, color: PieceColor) -> Self {
        Self {
            from,
            to,
            color,
            promotion: None,
        }
    }

    pub fn with_promotion(mut self, promotion: PromotionPiece) -> Self {
        self.promotion = Some(promotion);
        self
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promotion) = self.promotion {
            write!(f, "{}", promotion.letter())?;
        }
        Ok(())
    }
}

/// Lookup tables over one snapshot's legal moves, keyed by source square.
#[derive(Clone, Debug, Default)]
pub struct MoveIndex {
    by_from: HashMap<SquareId, Vec<Move>>,
}

impl MoveIndex {
    pub fn new(moves: &[Move]) -> Self {
        let mut by_from: HashMap<SquareId, Vec<Move>> = HashMap::new();
        for &mv in moves {
            by_from.entry(mv.from).or_default().push(mv);
        }
        Self { by_from }
    }

    /// All moves leaving the given square; empty means the square is not a
    /// legal move source.
    pub fn moves_from(&self, from: SquareId) -> &[Move] {
        self.by_from.get(&from).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All moves matching both endpoints. More than one result means the
    /// moves differ only in promotion piece and need disambiguation.
    pub fn moves_between(&self, from: SquareId, to: SquareId) -> Vec<Move> {
        self.moves_from(from)
            .iter()
            .filter(|mv| mv.to == to)
            .copied()
            .collect()
    }

    pub fn is_source(&self, from: SquareId) -> bool {
        !self.moves_from(from).is_empty()
    }
}
