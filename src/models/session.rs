//! Game session - closes the interaction loop with a rules engine.
//!
//! The board model only decides which move the user means; applying it,
//! fetching the resulting position and legal moves, and feeding the next
//! snapshot back in is the session's job. The engine sits behind a trait so
//! the session never depends on a particular rules implementation.

use std::time::{Duration, Instant};

use anyhow::Context as _;
use rand::Rng as _;
use shakmaty::{
    Chess, Color as SColor, File, Move as SMove, Position, Rank, Role, Square as SSquare,
};
use tracing::{debug, warn};

use crate::domain::{Move, Piece, PieceColor, PieceKind, PromotionPiece, SquareId};
use crate::models::board::BoardModel;
use crate::models::scheduler::{CancelHandle, Scheduler};
use crate::models::snapshot::Snapshot;
use crate::ui::gateway::{InteractionGateway, PointerEvent};

/// Coarse game state reported by the rules engine.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameStatus {
    InProgress,
    Check,
    Checkmate,
    Stalemate,
    Draw,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate | GameStatus::Stalemate | GameStatus::Draw
        )
    }
}

/// The boundary to the external rules engine.
///
/// Implementations own position state and move legality; the core only ever
/// sees the placement string and flat move records.
pub trait RulesEngine {
    /// Every legal move in the current position.
    fn legal_moves(&self) -> Vec<Move>;

    /// Apply a move the core believes legal. Returning false (e.g. the
    /// record was minted against a stale snapshot) must leave the position
    /// unchanged.
    fn apply(&mut self, mv: &Move) -> bool;

    /// Current placement in the compact rank-by-rank encoding.
    fn placement(&self) -> String;

    fn side_to_move(&self) -> PieceColor;

    fn status(&self) -> GameStatus;

    /// An independent copy for previews or speculative lines.
    fn fork(&self) -> Self
    where
        Self: Sized;
}

/// Convert our row/col (0-indexed, row 0 = rank 8) to a shakmaty square.
fn to_square(row: usize, col: usize) -> SSquare {
    let file = File::new(col as u32);
    let rank = Rank::new(7 - row as u32); // row 0 = rank 8, row 7 = rank 1
    SSquare::from_coords(file, rank)
}

fn square_id(sq: SSquare) -> SquareId {
    let file = u32::from(sq.file()) as usize;
    let rank = u32::from(sq.rank()) as usize; // 0 = rank 1
    SquareId::from_index((7 - rank) * 8 + file)
}

/// Convert a shakmaty piece to our domain piece.
fn domain_piece(piece: shakmaty::Piece) -> Piece {
    let kind = match piece.role {
        Role::Pawn => PieceKind::Pawn,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Rook => PieceKind::Rook,
        Role::Queen => PieceKind::Queen,
        Role::King => PieceKind::King,
    };
    let color = match piece.color {
        SColor::White => PieceColor::White,
        SColor::Black => PieceColor::Black,
    };
    Piece { kind, color }
}

fn promotion_piece(role: Role) -> Option<PromotionPiece> {
    match role {
        Role::Queen => Some(PromotionPiece::Queen),
        Role::Rook => Some(PromotionPiece::Rook),
        Role::Bishop => Some(PromotionPiece::Bishop),
        Role::Knight => Some(PromotionPiece::Knight),
        Role::Pawn | Role::King => None,
    }
}

/// Rules engine backed by shakmaty.
#[derive(Clone, Debug, Default)]
pub struct ShakmatyRules {
    position: Chess,
}

impl ShakmatyRules {
    /// Standard starting position.
    pub fn new() -> Self {
        Self {
            position: Chess::default(),
        }
    }

    pub fn from_position(position: Chess) -> Self {
        Self { position }
    }

    pub fn position(&self) -> &Chess {
        &self.position
    }

    /// Flatten a shakmaty move to the four-field record the core consumes.
    ///
    /// Castling is normalized to the king's destination square (g/c file),
    /// matching how the user drags the king; en passant keeps its plain
    /// endpoints. Drops don't occur in standard chess.
    fn record_for(&self, m: &SMove) -> Option<Move> {
        let color = match self.position.turn() {
            SColor::White => PieceColor::White,
            SColor::Black => PieceColor::Black,
        };
        let (from, to, promotion) = match m {
            SMove::Normal {
                from, to, promotion, ..
            } => (*from, *to, *promotion),
            SMove::EnPassant { from, to, .. } => (*from, *to, None),
            SMove::Castle { king, rook, .. } => {
                let king_dest = if rook.file() == File::H {
                    SSquare::from_coords(File::G, rook.rank())
                } else {
                    SSquare::from_coords(File::C, rook.rank())
                };
                (*king, king_dest, None)
            }
            SMove::Put { .. } => return None,
        };
        Some(Move {
            from: square_id(from),
            to: square_id(to),
            color,
            promotion: promotion.and_then(promotion_piece),
        })
    }
}

impl RulesEngine for ShakmatyRules {
    fn legal_moves(&self) -> Vec<Move> {
        self.position
            .legal_moves()
            .iter()
            .filter_map(|m| self.record_for(m))
            .collect()
    }

    fn apply(&mut self, mv: &Move) -> bool {
        for m in &self.position.legal_moves() {
            if self.record_for(m).as_ref() != Some(mv) {
                continue;
            }
            match self.position.clone().play(m.clone()) {
                Ok(next) => {
                    self.position = next;
                    return true;
                }
                Err(_) => return false,
            }
        }
        false
    }

    fn placement(&self) -> String {
        let board = self.position.board();
        let mut out = String::new();
        for row in 0..8 {
            if row > 0 {
                out.push('/');
            }
            let mut empty = 0u32;
            for col in 0..8 {
                match board.piece_at(to_square(row, col)) {
                    Some(piece) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(domain_piece(piece).to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
        }
        out
    }

    fn side_to_move(&self) -> PieceColor {
        match self.position.turn() {
            SColor::White => PieceColor::White,
            SColor::Black => PieceColor::Black,
        }
    }

    fn status(&self) -> GameStatus {
        if self.position.is_checkmate() {
            GameStatus::Checkmate
        } else if self.position.is_stalemate() {
            GameStatus::Stalemate
        } else if self.position.is_insufficient_material() {
            GameStatus::Draw
        } else if self.position.is_check() {
            GameStatus::Check
        } else {
            GameStatus::InProgress
        }
    }

    fn fork(&self) -> Self {
        self.clone()
    }
}

/// Automated counter-move settings: the color the session replies for and
/// how long it waits before doing so.
#[derive(Clone, Copy, Debug)]
pub struct AutoReply {
    pub color: PieceColor,
    pub delay: Duration,
}

/// Drives one game: pointer events in, committed moves out, snapshots
/// refreshed from the engine after every accepted move.
pub struct GameSession<E: RulesEngine> {
    engine: E,
    board: BoardModel,
    gateway: InteractionGateway,
    scheduler: Scheduler<GameSession<E>>,
    auto_reply: Option<AutoReply>,
    pending_reply: Option<CancelHandle>,
    orient_to_mover: bool,
    version: u64,
}

impl<E: RulesEngine + 'static> GameSession<E> {
    pub fn new(engine: E) -> anyhow::Result<Self> {
        let mut session = Self {
            engine,
            board: BoardModel::new(),
            gateway: InteractionGateway::new(),
            scheduler: Scheduler::new(),
            auto_reply: None,
            pending_reply: None,
            orient_to_mover: false,
            version: 0,
        };
        session.refresh().context("loading initial position")?;
        Ok(session)
    }

    /// Answer the given color's turns with a uniformly random legal move
    /// after `delay`.
    pub fn with_auto_reply(mut self, color: PieceColor, delay: Duration) -> Self {
        self.auto_reply = Some(AutoReply { color, delay });
        self.maybe_schedule_reply();
        self
    }

    /// Keep the board oriented toward whoever is to move.
    pub fn with_mover_orientation(mut self) -> anyhow::Result<Self> {
        self.orient_to_mover = true;
        self.refresh()?;
        Ok(self)
    }

    pub fn board(&self) -> &BoardModel {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut BoardModel {
        &mut self.board
    }

    pub fn gateway(&self) -> &InteractionGateway {
        &self.gateway
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn status(&self) -> GameStatus {
        self.engine.status()
    }

    /// Whether an automated reply is waiting on the clock.
    pub fn reply_pending(&self) -> bool {
        self.pending_reply.is_some()
    }

    /// Feed a pointer event through the gateway. Returns the applied move
    /// when the event completed one.
    pub fn handle(&mut self, event: PointerEvent) -> anyhow::Result<Option<Move>> {
        let Some(mv) = self.gateway.handle(event, &mut self.board) else {
            return Ok(None);
        };
        self.commit(mv)
    }

    /// Resolve a pending promotion choice.
    pub fn choose_promotion(&mut self, choice: PromotionPiece) -> anyhow::Result<Option<Move>> {
        let Some(mv) = self.board.choose_promotion(choice) else {
            return Ok(None);
        };
        self.commit(mv)
    }

    /// Run scheduled work whose deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        let due = self.scheduler.take_due(now);
        for run in due {
            run(self);
        }
    }

    /// Drop any selection, drag session, and pending automated reply.
    pub fn reset_interaction(&mut self) {
        self.cancel_pending_reply();
        self.gateway.cancel_drag();
        self.board.reset();
    }

    /// Rebuild the board snapshot from the engine. Cancels any pending
    /// automated reply first so a stale callback can never fire against the
    /// new position.
    pub fn refresh(&mut self) -> anyhow::Result<()> {
        self.cancel_pending_reply();
        self.gateway.cancel_drag();
        self.version += 1;
        let snapshot = Snapshot::new(
            self.engine.placement(),
            self.engine.legal_moves(),
            self.version,
        );
        self.board
            .replace_snapshot(snapshot)
            .context("rules engine produced an unreadable position")?;
        if self.orient_to_mover {
            self.board
                .set_flipped(self.engine.side_to_move() == PieceColor::Black);
        }
        self.board.set_disabled(self.status().is_over());
        Ok(())
    }

    fn commit(&mut self, mv: Move) -> anyhow::Result<Option<Move>> {
        if !self.engine.apply(&mv) {
            // The engine disagreed, most likely a stale record; roll the
            // selection back and wait for the next snapshot.
            warn!(%mv, "engine rejected move");
            self.board.reset();
            return Ok(None);
        }
        debug!(%mv, "move applied");
        self.refresh()?;
        self.maybe_schedule_reply();
        Ok(Some(mv))
    }

    fn maybe_schedule_reply(&mut self) {
        let Some(auto) = self.auto_reply else {
            return;
        };
        if self.pending_reply.is_some()
            || self.status().is_over()
            || self.engine.side_to_move() != auto.color
        {
            return;
        }
        let handle = self.scheduler.schedule(auto.delay, |session: &mut Self| {
            session.pending_reply = None;
            session.play_random_reply();
        });
        self.pending_reply = Some(handle);
    }

    fn cancel_pending_reply(&mut self) {
        if let Some(handle) = self.pending_reply.take() {
            self.scheduler.cancel(handle);
        }
    }

    fn play_random_reply(&mut self) {
        let moves = &self.board.snapshot().moves;
        if moves.is_empty() {
            return;
        }
        let mv = moves[rand::rng().random_range(0..moves.len())];
        if self.engine.apply(&mv) {
            debug!(%mv, "automated reply");
            if let Err(err) = self.refresh() {
                warn!(%err, "automated reply dropped");
            }
        }
    }
}
