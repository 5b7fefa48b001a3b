use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    White,
    Black,
}

impl Side {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Row the side's major pieces start on.
    #[must_use]
    pub const fn back_rank(self) -> usize {
        match self {
            Self::White => 7,
            Self::Black => 0,
        }
    }

    /// Row delta of a forward pawn step. White moves toward row 0.
    #[must_use]
    pub const fn pawn_direction(self) -> isize {
        match self {
            Self::White => -1,
            Self::Black => 1,
        }
    }

    /// Row a pawn may take its double step from.
    #[must_use]
    pub const fn pawn_home_row(self) -> usize {
        match self {
            Self::White => 6,
            Self::Black => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
}

/// A board cell, in range by construction. Row 0 is black's back rank,
/// row 7 is white's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    row: usize,
    col: usize,
}

impl Coordinate {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// # Safety
    ///
    /// `row` and `col` must both be below [`BOARD_SIZE`].
    #[must_use]
    pub const unsafe fn new_unchecked(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    grid: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.setup_initial_position();
        board
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self {
            grid: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    fn setup_initial_position(&mut self) {
        self.setup_pieces(Side::Black);
        self.setup_pieces(Side::White);
    }

    fn setup_pieces(&mut self, side: Side) {
        const BACK_RANK: [PieceKind; BOARD_SIZE] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let back_row = side.back_rank();
        let pawn_row = side.pawn_home_row();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            self.grid[back_row][col] = Some(Piece { kind, side });
        }
        for col in 0..BOARD_SIZE {
            self.grid[pawn_row][col] = Some(Piece {
                kind: PieceKind::Pawn,
                side,
            });
        }
    }

    #[must_use]
    pub fn get(&self, cell: Coordinate) -> Option<Piece> {
        self.grid[cell.row()][cell.col()]
    }

    pub fn set_piece(&mut self, cell: Coordinate, piece: Option<Piece>) {
        self.grid[cell.row()][cell.col()] = piece;
    }

    /// Applies a move by copy, leaving `self` untouched. A pawn reaching the
    /// opposite back rank is replaced by a queen of the same side.
    #[must_use]
    pub fn apply_move(&self, from: Coordinate, to: Coordinate) -> Self {
        let piece = self.get(from).expect("no piece at source in apply_move");
        let mut next = self.clone();
        next.grid[from.row()][from.col()] = None;

        let landed = if piece.kind == PieceKind::Pawn
            && to.row() == piece.side.opposite().back_rank()
        {
            log::debug!("{:?} pawn promoted to queen at {to:?}", piece.side);
            Piece {
                kind: PieceKind::Queen,
                side: piece.side,
            }
        } else {
            piece
        };
        next.grid[to.row()][to.col()] = Some(landed);
        next
    }

    /// Locates the king of `side`, if it is still on the board. Its absence
    /// is the loss condition, so boards without one are valid states.
    #[must_use]
    pub fn find_king(&self, side: Side) -> Option<Coordinate> {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if let Some(piece) = self.grid[row][col] {
                    if piece.kind == PieceKind::King && piece.side == side {
                        // Safety: loop indices are in range.
                        return Some(unsafe { Coordinate::new_unchecked(row, col) });
                    }
                }
            }
        }
        None
    }

    /// FEN-style piece placement, used by logs and tests. White pieces are
    /// uppercase; ranks are separated by `/` starting from row 0.
    #[must_use]
    pub fn placement_string(&self) -> String {
        let mut out = String::new();
        for row in 0..BOARD_SIZE {
            let mut empty_count = 0;
            for col in 0..BOARD_SIZE {
                if let Some(piece) = self.grid[row][col] {
                    if empty_count > 0 {
                        out.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    out.push(piece_char(piece));
                } else {
                    empty_count += 1;
                }
            }
            if empty_count > 0 {
                out.push_str(&empty_count.to_string());
            }
            if row < BOARD_SIZE - 1 {
                out.push('/');
            }
        }
        out
    }
}

fn piece_char(piece: Piece) -> char {
    let ch = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Rook => 'r',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    if piece.side == Side::White {
        ch.to_ascii_uppercase()
    } else {
        ch
    }
}
