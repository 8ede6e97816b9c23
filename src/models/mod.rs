pub mod board;
pub mod scheduler;
pub mod session;
pub mod snapshot;

pub use board::{BoardModel, SelectionState};
pub use scheduler::{CancelHandle, Scheduler};
pub use session::{AutoReply, GameSession, GameStatus, RulesEngine, ShakmatyRules};
pub use snapshot::Snapshot;
