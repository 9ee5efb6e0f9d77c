use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alliance {
    White,
    Black,
}

impl Alliance {
    pub fn opponent(self) -> Alliance {
        match self {
            Alliance::White => Alliance::Black,
            Alliance::Black => Alliance::White,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Alliance::White => 0,
            Alliance::Black => 1,
        }
    }

    pub fn is_white(self) -> bool {
        self == Alliance::White
    }

    pub fn is_black(self) -> bool {
        self == Alliance::Black
    }

    /// Square-index delta of one row forward. White starts on the high
    /// indices and advances toward 0.
    pub fn direction(self) -> i8 {
        match self {
            Alliance::White => -1,
            Alliance::Black => 1,
        }
    }

    pub fn opposite_direction(self) -> i8 {
        -self.direction()
    }

    /// Whether a pawn of this alliance landing on `square` must promote.
    pub fn is_pawn_promotion_square(self, square: u8) -> bool {
        match self {
            Alliance::White => square < 8,
            Alliance::Black => square > 55,
        }
    }
}

impl fmt::Display for Alliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alliance::White => write!(f, "White"),
            Alliance::Black => write!(f, "Black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub fn idx(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Upper-case letter used in move labels and board diagrams.
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Material value, used to order captured pieces.
    pub fn value(self) -> u32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight | PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 0,
        }
    }
}

/// A piece standing on a square.
///
/// Pieces are values: two pieces are the same piece when alliance, kind,
/// square and first-move flag all agree. Moving never mutates a piece, it
/// produces a new value at the destination (see [`Piece::moved_to`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub alliance: Alliance,
    pub kind: PieceKind,
    pub square: u8,
    /// True until the piece has moved. Enables pawn double-steps and castling.
    pub first_move: bool,
}

impl Piece {
    /// A piece that has not moved yet.
    pub fn new(kind: PieceKind, alliance: Alliance, square: u8) -> Self {
        Self::with_first_move(kind, alliance, square, true)
    }

    pub fn with_first_move(
        kind: PieceKind,
        alliance: Alliance,
        square: u8,
        first_move: bool,
    ) -> Self {
        assert!(square < 64, "square {square} out of bounds");
        Self {
            alliance,
            kind,
            square,
            first_move,
        }
    }

    /// The value this piece takes after moving to `destination`.
    pub fn moved_to(self, destination: u8) -> Piece {
        Piece::with_first_move(self.kind, self.alliance, destination, false)
    }

    /// A queen of the same alliance standing on `destination`.
    pub fn promoted_to_queen(self, destination: u8) -> Piece {
        Piece::with_first_move(PieceKind::Queen, self.alliance, destination, false)
    }

    pub fn is_king(&self) -> bool {
        self.kind == PieceKind::King
    }

    pub fn is_rook(&self) -> bool {
        self.kind == PieceKind::Rook
    }

    pub fn is_pawn(&self) -> bool {
        self.kind == PieceKind::Pawn
    }

    pub fn value(&self) -> u32 {
        self.kind.value()
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = self.kind.letter();
        match self.alliance {
            Alliance::White => write!(f, "{letter}"),
            Alliance::Black => write!(f, "{}", letter.to_ascii_lowercase()),
        }
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
