pub mod chess;
pub mod grid;
pub mod moves;
pub mod position;
pub mod square;

pub use chess::{Piece, PieceColor, PieceKind, PromotionPiece};
pub use grid::{Square, build_grid};
pub use moves::{Move, MoveIndex};
pub use position::{PositionError, parse_placement};
pub use square::{InvalidSquareId, SquareId};
