use crate::engine::MoveSelector;
use crate::logic::board::{Board, Coordinate, Side};
use crate::logic::generator::MoveGenerator;
use crate::logic::rules::{validate_move, MoveError};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The human always plays white; the computer answers with black.
pub const HUMAN_SIDE: Side = Side::White;
pub const AI_SIDE: Side = Side::Black;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverReason {
    /// This side's king was captured; the other side wins.
    KingCaptured(Side),
    /// This side received the turn with no legal move; the other side wins.
    NoValidMoves(Side),
}

impl fmt::Display for GameOverReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KingCaptured(Side::White) => write!(f, "White King captured"),
            Self::KingCaptured(Side::Black) => write!(f, "Black King captured"),
            Self::NoValidMoves(Side::Black) => write!(f, "AI has no valid moves"),
            Self::NoValidMoves(Side::White) => write!(f, "White has no valid moves"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Over {
        winner: Side,
        reason: GameOverReason,
    },
}

/// Handle for a scheduled AI move. The presentation layer takes one when the
/// turn passes to black, sits on it for its "thinking" delay, then hands it
/// back through [`GameSession::complete_ai_turn`]. The embedded generation
/// makes a ticket worthless after a restart, so a timer that outlives its
/// session cannot move pieces on the new board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiTicket {
    generation: u64,
}

/// Sole owner of mutable game state. Everything the renderer needs is
/// readable through the accessors; everything it can do comes in through
/// [`Self::on_cell_clicked`], [`Self::complete_ai_turn`] and
/// [`Self::restart`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    turn: Side,
    selected: Option<Coordinate>,
    ai_thinking: bool,
    status: GameStatus,
    generation: u64,
    #[serde(skip)]
    pending_ai: Option<AiTicket>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: HUMAN_SIDE,
            selected: None,
            ai_thinking: false,
            status: GameStatus::Playing,
            generation: 0,
            pending_ai: None,
        }
    }

    /// Session over an arbitrary position, mainly for tests and scenario
    /// setups. Terminal conditions are checked immediately, so a position
    /// that is already decided comes back as such.
    #[must_use]
    pub fn from_position(board: Board, turn: Side) -> Self {
        let mut session = Self::new();
        session.board = board;
        if !session.check_king_capture() {
            session.hand_turn_to(turn);
        }
        session
    }

    // --- snapshot accessors for the presentation layer ---

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn turn(&self) -> Side {
        self.turn
    }

    #[must_use]
    pub fn selected_cell(&self) -> Option<Coordinate> {
        self.selected
    }

    #[must_use]
    pub fn is_ai_thinking(&self) -> bool {
        self.ai_thinking
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Over { .. })
    }

    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        match self.status {
            GameStatus::Over { winner, .. } => Some(winner),
            GameStatus::Playing => None,
        }
    }

    // --- events from the presentation layer ---

    /// Entry point for a pointer interaction with a board square.
    ///
    /// Clicks are ignored outright while the game is over or the AI's move is
    /// pending. Otherwise: a click on an own piece selects (or reselects) it,
    /// a click on a legal destination applies the move, and any other click
    /// clears the selection.
    pub fn on_cell_clicked(&mut self, cell: Coordinate) {
        if self.is_over() || self.ai_thinking || self.turn != HUMAN_SIDE {
            return;
        }

        let Some(from) = self.selected else {
            let owns_piece = self
                .board
                .get(cell)
                .map_or(false, |piece| piece.side == HUMAN_SIDE);
            if owns_piece {
                self.selected = Some(cell);
            }
            return;
        };

        match validate_move(&self.board, from, cell) {
            Ok(()) => {
                self.selected = None;
                self.apply_and_advance(from, cell);
            }
            Err(MoveError::TargetOccupiedByFriendly) => {
                self.selected = Some(cell);
            }
            Err(reason) => {
                log::debug!("move {from:?} -> {cell:?} rejected: {reason:?}");
                self.selected = None;
            }
        }
    }

    /// Hands out the pending AI ticket, at most once per AI turn. The caller
    /// is expected to wait out its presentation delay before completing it.
    pub fn take_ai_ticket(&mut self) -> Option<AiTicket> {
        self.pending_ai.take()
    }

    /// Resolves a scheduled AI turn. Returns `false` when the ticket is
    /// stale (the session was restarted since it was issued) or the session
    /// is not waiting on an AI move; nothing changes in that case.
    pub fn complete_ai_turn<R: Rng>(
        &mut self,
        ticket: AiTicket,
        selector: &mut MoveSelector<R>,
    ) -> bool {
        if ticket.generation != self.generation {
            log::debug!(
                "discarding stale AI ticket (generation {} vs {})",
                ticket.generation,
                self.generation
            );
            return false;
        }
        if self.is_over() || self.turn != AI_SIDE || !self.ai_thinking {
            return false;
        }

        self.ai_thinking = false;
        match selector.select_move(&self.board, AI_SIDE) {
            Some(mv) => {
                self.apply_and_advance(mv.from, mv.to);
            }
            None => {
                // Normally caught when the turn was handed over; kept as a
                // backstop so a selector refusal still ends the game cleanly.
                self.finish(HUMAN_SIDE, GameOverReason::NoValidMoves(AI_SIDE));
            }
        }
        true
    }

    /// Discards the game in progress and starts over. Any AI ticket issued
    /// before this point is invalidated.
    pub fn restart(&mut self) {
        self.board = Board::new();
        self.turn = HUMAN_SIDE;
        self.selected = None;
        self.ai_thinking = false;
        self.status = GameStatus::Playing;
        self.pending_ai = None;
        self.generation = self.generation.wrapping_add(1);
        log::info!("session restarted");
    }

    // --- internals ---

    fn apply_and_advance(&mut self, from: Coordinate, to: Coordinate) {
        let mover = self.turn;
        self.board = self.board.apply_move(from, to);
        log::debug!(
            "{mover:?} played {from:?} -> {to:?} ({})",
            self.board.placement_string()
        );

        if self.check_king_capture() {
            return;
        }
        self.hand_turn_to(mover.opposite());
    }

    /// A missing king decides the game on the spot. Only the side that just
    /// moved can have captured one, so checking both colors is safe.
    fn check_king_capture(&mut self) -> bool {
        for side in [Side::White, Side::Black] {
            if self.board.find_king(side).is_none() {
                self.finish(side.opposite(), GameOverReason::KingCaptured(side));
                return true;
            }
        }
        false
    }

    fn hand_turn_to(&mut self, side: Side) {
        self.turn = side;

        // No-move loss is decided the moment the turn arrives, with no
        // board mutation.
        let generator = MoveGenerator::new();
        if !generator.has_legal_moves(&self.board, side) {
            self.finish(side.opposite(), GameOverReason::NoValidMoves(side));
            return;
        }

        if side == AI_SIDE {
            self.ai_thinking = true;
            self.pending_ai = Some(AiTicket {
                generation: self.generation,
            });
        } else {
            self.ai_thinking = false;
        }
    }

    fn finish(&mut self, winner: Side, reason: GameOverReason) {
        self.status = GameStatus::Over { winner, reason };
        self.ai_thinking = false;
        self.pending_ai = None;
        self.selected = None;
        log::info!("game over: {winner:?} wins, {reason}");
    }
}
