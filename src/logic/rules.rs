use crate::logic::board::{Board, Coordinate, PieceKind, Side};

/// Reason a move was rejected. Rejection is a normal outcome, not a fault;
/// the session layer maps these onto its selection transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    NoPieceAtSource,
    SamePosition,
    TargetOccupiedByFriendly,
    InvalidMovePattern,
    BlockedPath,
}

/// Checks whether the piece at `from` may move to `to`.
///
/// Turn order is deliberately not consulted here, and there is no check or
/// checkmate concept in this ruleset; both live with the caller.
pub fn validate_move(board: &Board, from: Coordinate, to: Coordinate) -> Result<(), MoveError> {
    let piece = board.get(from).ok_or(MoveError::NoPieceAtSource)?;

    if from == to {
        return Err(MoveError::SamePosition);
    }

    if let Some(target) = board.get(to) {
        if target.side == piece.side {
            return Err(MoveError::TargetOccupiedByFriendly);
        }
    }

    let d_row = to.row() as isize - from.row() as isize;
    let d_col = to.col() as isize - from.col() as isize;

    match piece.kind {
        PieceKind::Pawn => validate_pawn(board, piece.side, from, to, d_row, d_col),
        PieceKind::Rook => validate_rook(board, from, to, d_row, d_col),
        PieceKind::Bishop => validate_bishop(board, from, to, d_row, d_col),
        PieceKind::Queen => validate_queen(board, from, to, d_row, d_col),
        PieceKind::King => validate_king(d_row, d_col),
        PieceKind::Knight => validate_knight(d_row, d_col),
    }
}

#[must_use]
pub fn is_legal_move(board: &Board, from: Coordinate, to: Coordinate) -> bool {
    validate_move(board, from, to).is_ok()
}

fn validate_pawn(
    board: &Board,
    side: Side,
    from: Coordinate,
    to: Coordinate,
    d_row: isize,
    d_col: isize,
) -> Result<(), MoveError> {
    let direction = side.pawn_direction();

    if d_col == 0 {
        // Straight moves never capture.
        if board.get(to).is_some() {
            return Err(MoveError::BlockedPath);
        }
        if d_row == direction {
            return Ok(());
        }
        if from.row() == side.pawn_home_row() && d_row == direction * 2 {
            let middle_row = (from.row() as isize + direction) as usize;
            // Safety: one step from the home row stays on the board.
            let middle = unsafe { Coordinate::new_unchecked(middle_row, from.col()) };
            if board.get(middle).is_some() {
                return Err(MoveError::BlockedPath);
            }
            return Ok(());
        }
        return Err(MoveError::InvalidMovePattern);
    }

    // Diagonal steps are capture-only. No en passant in this ruleset.
    if d_col.abs() == 1 && d_row == direction && board.get(to).is_some() {
        return Ok(());
    }
    Err(MoveError::InvalidMovePattern)
}

fn validate_rook(
    board: &Board,
    from: Coordinate,
    to: Coordinate,
    d_row: isize,
    d_col: isize,
) -> Result<(), MoveError> {
    if d_row != 0 && d_col != 0 {
        return Err(MoveError::InvalidMovePattern);
    }
    if is_path_blocked(board, from, to) {
        return Err(MoveError::BlockedPath);
    }
    Ok(())
}

fn validate_bishop(
    board: &Board,
    from: Coordinate,
    to: Coordinate,
    d_row: isize,
    d_col: isize,
) -> Result<(), MoveError> {
    if d_row.abs() != d_col.abs() {
        return Err(MoveError::InvalidMovePattern);
    }
    if is_path_blocked(board, from, to) {
        return Err(MoveError::BlockedPath);
    }
    Ok(())
}

fn validate_queen(
    board: &Board,
    from: Coordinate,
    to: Coordinate,
    d_row: isize,
    d_col: isize,
) -> Result<(), MoveError> {
    if d_row != 0 && d_col != 0 && d_row.abs() != d_col.abs() {
        return Err(MoveError::InvalidMovePattern);
    }
    if is_path_blocked(board, from, to) {
        return Err(MoveError::BlockedPath);
    }
    Ok(())
}

const fn validate_king(d_row: isize, d_col: isize) -> Result<(), MoveError> {
    // One square in any direction. No castling in this ruleset.
    if d_row.abs() <= 1 && d_col.abs() <= 1 {
        Ok(())
    } else {
        Err(MoveError::InvalidMovePattern)
    }
}

const fn validate_knight(d_row: isize, d_col: isize) -> Result<(), MoveError> {
    // Knights jump; path blocking never applies to them.
    let (d_row, d_col) = (d_row.abs(), d_col.abs());
    if (d_row == 2 && d_col == 1) || (d_row == 1 && d_col == 2) {
        Ok(())
    } else {
        Err(MoveError::InvalidMovePattern)
    }
}

/// Walks the straight line between `from` (exclusive) and `to` (exclusive).
/// Only well-defined once the rook/bishop/queen shape condition holds.
fn is_path_blocked(board: &Board, from: Coordinate, to: Coordinate) -> bool {
    let row_step = (to.row() as isize - from.row() as isize).signum();
    let col_step = (to.col() as isize - from.col() as isize).signum();

    let mut row = from.row() as isize + row_step;
    let mut col = from.col() as isize + col_step;

    while (row, col) != (to.row() as isize, to.col() as isize) {
        // Safety: the walk stays strictly between two in-range coordinates.
        let cell = unsafe { Coordinate::new_unchecked(row as usize, col as usize) };
        if board.get(cell).is_some() {
            return true;
        }
        row += row_step;
        col += col_step;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::board::Piece;

    fn at(row: usize, col: usize) -> Coordinate {
        Coordinate::new(row, col).unwrap()
    }

    fn place(board: &mut Board, row: usize, col: usize, kind: PieceKind, side: Side) {
        board.set_piece(at(row, col), Some(Piece { kind, side }));
    }

    #[test]
    fn test_pawn_single_and_double_step() {
        let mut board = Board::empty();
        place(&mut board, 6, 4, PieceKind::Pawn, Side::White);

        assert!(is_legal_move(&board, at(6, 4), at(5, 4)));
        assert!(is_legal_move(&board, at(6, 4), at(4, 4)));
        // Backward and sideways are not pawn moves.
        assert!(!is_legal_move(&board, at(6, 4), at(7, 4)));
        assert!(!is_legal_move(&board, at(6, 4), at(6, 5)));
        // Triple step is never legal.
        assert!(!is_legal_move(&board, at(6, 4), at(3, 4)));
    }

    #[test]
    fn test_pawn_double_step_requires_empty_intermediate() {
        let mut board = Board::empty();
        place(&mut board, 6, 4, PieceKind::Pawn, Side::White);
        place(&mut board, 5, 4, PieceKind::Knight, Side::Black);

        // Blocked regardless of the destination being empty.
        assert_eq!(
            validate_move(&board, at(6, 4), at(4, 4)),
            Err(MoveError::BlockedPath)
        );

        // Off the home row the double step is gone entirely.
        let mut board = Board::empty();
        place(&mut board, 5, 4, PieceKind::Pawn, Side::White);
        assert!(!is_legal_move(&board, at(5, 4), at(3, 4)));
    }

    #[test]
    fn test_pawn_captures_diagonally_only() {
        let mut board = Board::empty();
        place(&mut board, 4, 4, PieceKind::Pawn, Side::White);
        place(&mut board, 3, 3, PieceKind::Rook, Side::Black);
        place(&mut board, 3, 4, PieceKind::Rook, Side::Black);

        // Diagonal capture is legal, straight onto an enemy is not.
        assert!(is_legal_move(&board, at(4, 4), at(3, 3)));
        assert_eq!(
            validate_move(&board, at(4, 4), at(3, 4)),
            Err(MoveError::BlockedPath)
        );
        // Diagonal to an empty cell is not a pawn move.
        assert!(!is_legal_move(&board, at(4, 4), at(3, 5)));
    }

    #[test]
    fn test_black_pawn_mirrors_direction() {
        let mut board = Board::empty();
        place(&mut board, 1, 2, PieceKind::Pawn, Side::Black);
        place(&mut board, 2, 3, PieceKind::Pawn, Side::White);

        assert!(is_legal_move(&board, at(1, 2), at(2, 2)));
        assert!(is_legal_move(&board, at(1, 2), at(3, 2)));
        assert!(is_legal_move(&board, at(1, 2), at(2, 3)));
        assert!(!is_legal_move(&board, at(1, 2), at(0, 2)));
    }

    #[test]
    fn test_rook_path_blocking() {
        let mut board = Board::empty();
        place(&mut board, 7, 0, PieceKind::Rook, Side::White);

        assert!(is_legal_move(&board, at(7, 0), at(7, 7)));
        assert!(is_legal_move(&board, at(7, 0), at(0, 0)));
        assert!(!is_legal_move(&board, at(7, 0), at(5, 3)));

        place(&mut board, 7, 3, PieceKind::Pawn, Side::Black);
        assert_eq!(
            validate_move(&board, at(7, 0), at(7, 7)),
            Err(MoveError::BlockedPath)
        );
        // The blocker itself can be captured.
        assert!(is_legal_move(&board, at(7, 0), at(7, 3)));
    }

    #[test]
    fn test_bishop_and_queen_geometry() {
        let mut board = Board::empty();
        place(&mut board, 4, 4, PieceKind::Bishop, Side::White);
        place(&mut board, 3, 4, PieceKind::Queen, Side::Black);

        assert!(is_legal_move(&board, at(4, 4), at(1, 1)));
        assert!(is_legal_move(&board, at(4, 4), at(7, 7)));
        assert!(!is_legal_move(&board, at(4, 4), at(4, 6)));

        assert!(is_legal_move(&board, at(3, 4), at(3, 0)));
        assert!(is_legal_move(&board, at(3, 4), at(0, 7)));
        assert!(is_legal_move(&board, at(3, 4), at(4, 4)));
        // Not a straight line.
        assert!(!is_legal_move(&board, at(3, 4), at(5, 5)));
    }

    #[test]
    fn test_queen_diagonal_blocked() {
        let mut board = Board::empty();
        place(&mut board, 0, 0, PieceKind::Queen, Side::Black);
        place(&mut board, 2, 2, PieceKind::Pawn, Side::Black);

        assert_eq!(
            validate_move(&board, at(0, 0), at(4, 4)),
            Err(MoveError::BlockedPath)
        );
        assert!(is_legal_move(&board, at(0, 0), at(1, 1)));
    }

    #[test]
    fn test_king_single_step() {
        let mut board = Board::empty();
        place(&mut board, 4, 4, PieceKind::King, Side::White);

        assert!(is_legal_move(&board, at(4, 4), at(3, 3)));
        assert!(is_legal_move(&board, at(4, 4), at(5, 4)));
        assert!(is_legal_move(&board, at(4, 4), at(4, 5)));
        assert!(!is_legal_move(&board, at(4, 4), at(4, 6)));
        assert!(!is_legal_move(&board, at(4, 4), at(2, 4)));
    }

    #[test]
    fn test_knight_ignores_blocking() {
        // Full starting position: every knight hop is over occupied cells.
        let board = Board::new();
        assert!(is_legal_move(&board, at(7, 1), at(5, 0)));
        assert!(is_legal_move(&board, at(7, 1), at(5, 2)));
        assert!(is_legal_move(&board, at(0, 6), at(2, 7)));
        // Not an L-shape.
        assert!(!is_legal_move(&board, at(7, 1), at(5, 1)));
    }

    #[test]
    fn test_basic_rejections() {
        let board = Board::new();

        assert_eq!(
            validate_move(&board, at(4, 4), at(3, 4)),
            Err(MoveError::NoPieceAtSource)
        );
        assert_eq!(
            validate_move(&board, at(7, 0), at(7, 0)),
            Err(MoveError::SamePosition)
        );
        assert_eq!(
            validate_move(&board, at(7, 0), at(6, 0)),
            Err(MoveError::TargetOccupiedByFriendly)
        );
    }
}
