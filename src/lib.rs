//! An interactive-chessboard core: grid derivation, legal-move lookup, and
//! the selection/drag state machine, free of any rendering framework.
//!
//! The crate consumes a compact position string plus the legal moves for it
//! (together an atomic [`Snapshot`]), exposes the 64 squares in render order
//! with per-square hints, and mediates clicks and drags into committed
//! moves. Move generation stays behind the [`RulesEngine`] trait; a
//! shakmaty-backed implementation is included.
//!
//! ```
//! use chessboard::{GameSession, PointerEvent, ShakmatyRules};
//!
//! let mut session = GameSession::new(ShakmatyRules::new()).unwrap();
//! session.handle(PointerEvent::Click("e2".parse().unwrap())).unwrap();
//! let mv = session.handle(PointerEvent::Click("e4".parse().unwrap())).unwrap();
//! assert_eq!(mv.unwrap().to_string(), "e2e4");
//! ```

pub mod domain;
pub mod models;
pub mod ui;

pub use domain::{
    InvalidSquareId, Move, MoveIndex, Piece, PieceColor, PieceKind, PositionError,
    PromotionPiece, Square, SquareId, build_grid, parse_placement,
};
pub use models::{
    AutoReply, BoardModel, CancelHandle, GameSession, GameStatus, RulesEngine, Scheduler,
    SelectionState, ShakmatyRules, Snapshot,
};
pub use ui::{
    BoardConfig, InteractionGateway, PieceAssets, PieceSet, PointerEvent, SquareView,
    square_views,
};
