//! Pure chess domain types.
//! No dependency on the rules engine - this is the domain layer.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    pub fn opposite(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: PieceColor,
}

impl Piece {
    pub fn new(kind: PieceKind, color: PieceColor) -> Self {
        Self { kind, color }
    }

    /// Decode a position-encoding letter (uppercase = white, lowercase = black).
    pub fn from_char(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() {
            PieceColor::White
        } else {
            PieceColor::Black
        };
        let kind = match ch.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'r' => PieceKind::Rook,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some(Self { kind, color })
    }

    /// Encode back to the position-encoding letter.
    pub fn to_char(self) -> char {
        let ch = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Rook => 'r',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match self.color {
            PieceColor::White => ch.to_ascii_uppercase(),
            PieceColor::Black => ch,
        }
    }
}

/// The pieces a pawn may promote to.
///
/// Canonically identified by a single lowercase letter (q, r, b, n); hosts
/// mapping UI piece names must go through [`PromotionPiece::from_kind`] rather
/// than comparing names themselves.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PromotionPiece {
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl PromotionPiece {
    pub const ALL: [PromotionPiece; 4] = [
        PromotionPiece::Queen,
        PromotionPiece::Rook,
        PromotionPiece::Bishop,
        PromotionPiece::Knight,
    ];

    /// The canonical one-letter code used in move records.
    pub fn letter(self) -> char {
        match self {
            PromotionPiece::Queen => 'q',
            PromotionPiece::Rook => 'r',
            PromotionPiece::Bishop => 'b',
            PromotionPiece::Knight => 'n',
        }
    }

    pub fn from_letter(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'q' => Some(PromotionPiece::Queen),
            'r' => Some(PromotionPiece::Rook),
            'b' => Some(PromotionPiece::Bishop),
            'n' => Some(PromotionPiece::Knight),
            _ => None,
        }
    }

    /// Map a full piece name to its promotion code, if it is a valid target.
    pub fn from_kind(kind: PieceKind) -> Option<Self> {
        match kind {
            PieceKind::Queen => Some(PromotionPiece::Queen),
            PieceKind::Rook => Some(PromotionPiece::Rook),
            PieceKind::Bishop => Some(PromotionPiece::Bishop),
            PieceKind::Knight => Some(PromotionPiece::Knight),
            PieceKind::Pawn | PieceKind::King => None,
        }
    }

    pub fn kind(self) -> PieceKind {
        match self {
            PromotionPiece::Queen => PieceKind::Queen,
            PromotionPiece::Rook => PieceKind::Rook,
            PromotionPiece::Bishop => PieceKind::Bishop,
            PromotionPiece::Knight => PieceKind::Knight,
        }
    }
}

impl serde::Serialize for PromotionPiece {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.letter())
    }
}

impl<'de> serde::Deserialize<'de> for PromotionPiece {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        let mut chars = text.chars();
        match (chars.next().and_then(Self::from_letter), chars.next()) {
            (Some(piece), None) => Ok(piece),
            _ => Err(serde::de::Error::custom(format!(
                "invalid promotion code {text:?}"
            ))),
        }
    }
}
