//! Board staging shared by the unit and integration tests.

use crate::{board::Builder, types::*};

/// Stages a board from eight rows of eight characters, rank 8 first.
/// Upper case is White, lower case Black, `.` is empty.
///
/// Pawns on their start rank and kings and rooks on their home squares
/// keep the first-move flag; everything else is marked as moved.
pub fn builder_from_rows(rows: [&str; 8], move_maker: Alliance) -> Builder {
    let mut builder = Builder::new();
    for (row, line) in rows.iter().enumerate() {
        assert_eq!(line.len(), 8, "row {row} must be 8 characters");
        for (file, ch) in line.chars().enumerate() {
            let square = (row * 8 + file) as u8;
            if let Some(piece) = piece_from_char(ch, square) {
                builder.set_piece(piece);
            }
        }
    }
    builder.set_move_maker(move_maker);
    builder
}

fn piece_from_char(ch: char, square: u8) -> Option<Piece> {
    let alliance = if ch.is_ascii_uppercase() {
        Alliance::White
    } else {
        Alliance::Black
    };
    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };
    let home = match alliance {
        Alliance::White => 56,
        Alliance::Black => 0,
    };
    let first_move = match kind {
        PieceKind::Pawn => match alliance {
            Alliance::White => (48..56).contains(&square),
            Alliance::Black => (8..16).contains(&square),
        },
        PieceKind::King => square == home + 4,
        PieceKind::Rook => square == home || square == home + 7,
        _ => false,
    };
    Some(Piece::with_first_move(kind, alliance, square, first_move))
}
