//! Board configuration and colors for the chess UI.
//!
//! Everything a host can tune lives in [`BoardConfig`], passed in at
//! construction rather than read from module-level globals.

use serde::{Deserialize, Serialize};

use crate::domain::SquareId;

// Board colors
pub const LIGHT_SQUARE: u32 = 0xF0D9B5;
pub const DARK_SQUARE: u32 = 0xB58863;

/// Which bundled piece-image set to use.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceSet {
    #[default]
    Cases,
    Neo,
}

impl PieceSet {
    pub fn dir_name(self) -> &'static str {
        match self {
            PieceSet::Cases => "cases",
            PieceSet::Neo => "neo",
        }
    }
}

/// Host-supplied board appearance settings.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BoardConfig {
    pub light_square: u32,
    pub dark_square: u32,
    pub show_coordinates: bool,
    pub piece_set: PieceSet,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            light_square: LIGHT_SQUARE,
            dark_square: DARK_SQUARE,
            show_coordinates: true,
            piece_set: PieceSet::Cases,
        }
    }
}

/// Whether a square gets the dark shade.
pub fn is_dark(id: SquareId) -> bool {
    (id.file_index() as u32 + id.rank() as u32) % 2 == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> SquareId {
        s.parse().unwrap()
    }

    #[test]
    fn test_square_shading() {
        assert!(is_dark(sq("a1")));
        assert!(!is_dark(sq("h1")));
        assert!(!is_dark(sq("a8")));
        assert!(is_dark(sq("h8")));
        assert!(!is_dark(sq("e4")));
        assert!(is_dark(sq("d4")));
    }

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();
        assert_eq!(config.light_square, 0xF0D9B5);
        assert_eq!(config.dark_square, 0xB58863);
        assert!(config.show_coordinates);
        assert_eq!(config.piece_set, PieceSet::Cases);
    }
}
