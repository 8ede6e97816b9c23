pub mod assets;
pub mod display;
pub mod gateway;
pub mod theme;
pub mod view_models;

pub use assets::{PieceAssets, SidePaths};
pub use display::square_views;
pub use gateway::{InteractionGateway, PointerEvent};
pub use theme::{BoardConfig, PieceSet};
pub use view_models::SquareView;
