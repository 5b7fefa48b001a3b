use crate::logic::board::{Board, Coordinate, Piece, Side};
use crate::logic::generator::MoveGenerator;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

pub mod eval;

/// A candidate move, scored by the selector. Transient: produced by
/// enumeration, consumed by application, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Move {
    pub from: Coordinate,
    pub to: Coordinate,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub score: f64,
}

/// Upper bound of the random addend mixed into every score.
pub const MAX_JITTER: f64 = 0.2;

/// Moves within this margin of the best score stay in the candidate pool.
const SCORE_TOLERANCE: f64 = 1.0;

/// At most this many near-best moves are sampled from.
const CANDIDATE_POOL: usize = 3;

/// Heuristic move chooser. Scores every legal move, then picks randomly among
/// the few near-best candidates rather than strictly maximizing, so play is
/// not fully predictable.
///
/// The randomness source is injected so tests can seed it, or zero out the
/// jitter entirely via [`MoveSelector::with_rng`].
pub struct MoveSelector<R: Rng = SmallRng> {
    rng: R,
    jitter: f64,
}

impl MoveSelector<SmallRng> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
            jitter: MAX_JITTER,
        }
    }

    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            jitter: MAX_JITTER,
        }
    }
}

impl Default for MoveSelector<SmallRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> MoveSelector<R> {
    pub fn with_rng(rng: R, jitter: f64) -> Self {
        Self { rng, jitter }
    }

    /// Picks a move for `side`, or `None` when the side cannot move at all
    /// (which the session treats as a loss for that side).
    pub fn select_move(&mut self, board: &Board, side: Side) -> Option<Move> {
        let generator = MoveGenerator::new();
        let mut moves = generator.generate_moves(board, side);
        if moves.is_empty() {
            log::debug!("no legal moves for {side:?}");
            return None;
        }

        for mv in &mut moves {
            mv.score = eval::evaluate_move(mv.piece, mv.captured, mv.from, mv.to)
                + self.rng.gen::<f64>() * self.jitter;
        }

        // Stable sort keeps enumeration order among equal scores.
        moves.sort_by(|a, b| b.score.total_cmp(&a.score));

        let top = moves[0].score;
        let band = moves
            .iter()
            .take_while(|mv| mv.score >= top - SCORE_TOLERANCE)
            .count();
        let chosen = moves[self.rng.gen_range(0..band.min(CANDIDATE_POOL))];

        log::debug!(
            "selected {:?} {:?} -> {:?} (score {:.2}, {} candidates)",
            chosen.piece.kind,
            chosen.from,
            chosen.to,
            chosen.score,
            moves.len(),
        );
        Some(chosen)
    }
}
