use crate::engine::Move;
use crate::logic::board::{Board, Coordinate, Side, BOARD_SIZE};
use crate::logic::rules::is_legal_move;

pub struct MoveGenerator;

impl Default for MoveGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveGenerator {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Every legal move for `side`, row-major over source cells and then
    /// row-major over destinations. The ordering is part of the contract:
    /// the selector's stable sort relies on it for tie-breaking.
    #[must_use]
    pub fn generate_moves(&self, board: &Board, side: Side) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);

        for from_row in 0..BOARD_SIZE {
            for from_col in 0..BOARD_SIZE {
                // Safety: loop indices are in range.
                let from = unsafe { Coordinate::new_unchecked(from_row, from_col) };
                let piece = match board.get(from) {
                    Some(piece) if piece.side == side => piece,
                    _ => continue,
                };

                for to_row in 0..BOARD_SIZE {
                    for to_col in 0..BOARD_SIZE {
                        // Safety: loop indices are in range.
                        let to = unsafe { Coordinate::new_unchecked(to_row, to_col) };
                        if from == to {
                            continue;
                        }
                        if is_legal_move(board, from, to) {
                            moves.push(Move {
                                from,
                                to,
                                piece,
                                captured: board.get(to),
                                score: 0.0,
                            });
                        }
                    }
                }
            }
        }

        log::debug!("{} legal moves for {side:?}", moves.len());
        moves
    }

    /// Early-exit variant used by the session's no-move terminal check.
    #[must_use]
    pub fn has_legal_moves(&self, board: &Board, side: Side) -> bool {
        for from_row in 0..BOARD_SIZE {
            for from_col in 0..BOARD_SIZE {
                // Safety: loop indices are in range.
                let from = unsafe { Coordinate::new_unchecked(from_row, from_col) };
                match board.get(from) {
                    Some(piece) if piece.side == side => {}
                    _ => continue,
                }

                for to_row in 0..BOARD_SIZE {
                    for to_col in 0..BOARD_SIZE {
                        // Safety: loop indices are in range.
                        let to = unsafe { Coordinate::new_unchecked(to_row, to_col) };
                        if from != to && is_legal_move(board, from, to) {
                            return true;
                        }
                    }
                }
            }
        }
        false
    }
}
