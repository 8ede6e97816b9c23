//! Piece-image path tables.
//!
//! An explicit (color, kind) -> path map handed to the host at construction
//! time; the crate never loads image bytes itself.

use serde::{Deserialize, Serialize};

use crate::domain::{Piece, PieceColor, PieceKind};
use crate::ui::theme::PieceSet;

/// Image paths for one side's six piece kinds.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SidePaths {
    pub pawn: String,
    pub rook: String,
    pub knight: String,
    pub bishop: String,
    pub queen: String,
    pub king: String,
}

impl SidePaths {
    fn for_set(set: PieceSet, color: PieceColor) -> Self {
        let side = match color {
            PieceColor::White => 'w',
            PieceColor::Black => 'b',
        };
        let path = |kind: char| format!("assets/{}/{}{}.png", set.dir_name(), side, kind);
        Self {
            pawn: path('p'),
            rook: path('r'),
            knight: path('n'),
            bishop: path('b'),
            queen: path('q'),
            king: path('k'),
        }
    }

    fn path(&self, kind: PieceKind) -> &str {
        match kind {
            PieceKind::Pawn => &self.pawn,
            PieceKind::Rook => &self.rook,
            PieceKind::Knight => &self.knight,
            PieceKind::Bishop => &self.bishop,
            PieceKind::Queen => &self.queen,
            PieceKind::King => &self.king,
        }
    }
}

/// The full piece-image map for both sides.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PieceAssets {
    pub white: SidePaths,
    pub black: SidePaths,
}

impl PieceAssets {
    /// Paths for one of the bundled sets.
    pub fn for_set(set: PieceSet) -> Self {
        Self {
            white: SidePaths::for_set(set, PieceColor::White),
            black: SidePaths::for_set(set, PieceColor::Black),
        }
    }

    /// The image path for a piece.
    pub fn path(&self, piece: Piece) -> &str {
        match piece.color {
            PieceColor::White => self.white.path(piece.kind),
            PieceColor::Black => self.black.path(piece.kind),
        }
    }
}

impl Default for PieceAssets {
    fn default() -> Self {
        Self::for_set(PieceSet::Cases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_set_paths() {
        let assets = PieceAssets::for_set(PieceSet::Cases);
        let wp = Piece::new(PieceKind::Pawn, PieceColor::White);
        let bq = Piece::new(PieceKind::Queen, PieceColor::Black);
        assert_eq!(assets.path(wp), "assets/cases/wp.png");
        assert_eq!(assets.path(bq), "assets/cases/bq.png");

        let neo = PieceAssets::for_set(PieceSet::Neo);
        assert_eq!(
            neo.path(Piece::new(PieceKind::Knight, PieceColor::Black)),
            "assets/neo/bn.png"
        );
    }

    #[test]
    fn test_custom_override() {
        let mut assets = PieceAssets::default();
        assets.white.king = "custom/wk.svg".to_string();
        assert_eq!(
            assets.path(Piece::new(PieceKind::King, PieceColor::White)),
            "custom/wk.svg"
        );
    }
}
