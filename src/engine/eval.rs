//! Move-scoring heuristic. Deliberately shallow: the opponent is meant to be
//! beatable, so there is no search, just a weighted sum over the move itself.

use crate::logic::board::{Coordinate, Piece, PieceKind, Side};

/// Heuristic material values. The king's value is set so that capturing it
/// outweighs every other consideration combined, which stands in for
/// checkmate in this ruleset.
#[must_use]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight | PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 100,
    }
}

/// Deterministic part of a move's score; the selector adds its jitter on top.
#[must_use]
pub fn evaluate_move(
    piece: Piece,
    captured: Option<Piece>,
    from: Coordinate,
    to: Coordinate,
) -> f64 {
    let mut score = 0.0;

    if let Some(captured) = captured {
        score += f64::from(piece_value(captured.kind)) * 10.0;
    }

    // Reward moves toward the board's center.
    let center_distance = (3.5 - to.col() as f64).abs() + (3.5 - to.row() as f64).abs();
    score += (7.0 - center_distance) * 0.1;

    // Development: minor pieces leaving their own back rank.
    if matches!(piece.kind, PieceKind::Knight | PieceKind::Bishop)
        && from.row() == piece.side.back_rank()
    {
        score += 0.5;
    }

    // Pawn advancement toward the promotion rank.
    if piece.kind == PieceKind::Pawn {
        let advanced = match piece.side {
            Side::White => 7 - to.row(),
            Side::Black => to.row(),
        };
        score += advanced as f64 * 0.1;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: usize, col: usize) -> Coordinate {
        Coordinate::new(row, col).unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_piece_values() {
        assert_eq!(piece_value(PieceKind::Pawn), 1);
        assert_eq!(piece_value(PieceKind::Knight), 3);
        assert_eq!(piece_value(PieceKind::Bishop), 3);
        assert_eq!(piece_value(PieceKind::Rook), 5);
        assert_eq!(piece_value(PieceKind::Queen), 9);
        assert_eq!(piece_value(PieceKind::King), 100);
    }

    #[test]
    fn test_capture_dominates() {
        let rook = Piece {
            kind: PieceKind::Rook,
            side: Side::Black,
        };
        let queen = Piece {
            kind: PieceKind::Queen,
            side: Side::White,
        };

        let quiet = evaluate_move(rook, None, at(0, 0), at(0, 7));
        let capture = evaluate_move(rook, Some(queen), at(0, 0), at(0, 7));
        assert!(close(capture - quiet, 90.0));
    }

    #[test]
    fn test_center_control_bonus() {
        let king = Piece {
            kind: PieceKind::King,
            side: Side::White,
        };
        // Dead center: distance 1, bonus (7 - 1) * 0.1.
        assert!(close(evaluate_move(king, None, at(4, 3), at(4, 4)), 0.6));
        // Corner: distance 7, no bonus.
        assert!(close(evaluate_move(king, None, at(1, 0), at(0, 0)), 0.0));
    }

    #[test]
    fn test_development_bonus_only_off_own_back_rank() {
        let knight = Piece {
            kind: PieceKind::Knight,
            side: Side::Black,
        };
        // (0,1) -> (2,2): center distance 3 gives 0.4, development 0.5.
        assert!(close(evaluate_move(knight, None, at(0, 1), at(2, 2)), 0.9));
        // Same hop from mid-board: no development bonus.
        assert!(close(evaluate_move(knight, None, at(4, 1), at(2, 2)), 0.4));
        // White's back rank is row 7, not row 0.
        let white_knight = Piece {
            kind: PieceKind::Knight,
            side: Side::White,
        };
        assert!(close(
            evaluate_move(white_knight, None, at(0, 1), at(2, 2)),
            0.4
        ));
    }

    #[test]
    fn test_pawn_advancement_is_mirrored() {
        let black_pawn = Piece {
            kind: PieceKind::Pawn,
            side: Side::Black,
        };
        let white_pawn = Piece {
            kind: PieceKind::Pawn,
            side: Side::White,
        };

        // Black pawn to row 6, column 0: center (|3.5| + |2.5|) -> 0.1, advance 0.6.
        assert!(close(
            evaluate_move(black_pawn, None, at(5, 0), at(6, 0)),
            0.7
        ));
        // White pawn to row 1, column 0: same mirrored total.
        assert!(close(
            evaluate_move(white_pawn, None, at(2, 0), at(1, 0)),
            0.7
        ));
    }
}
