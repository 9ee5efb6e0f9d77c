use std::fmt;

use thiserror::Error;
use tracing::trace;

use crate::{
    movegen,
    moves::Move,
    notation::NUM_SQUARES,
    player::{Player, Side},
    types::*,
};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("a board requires a {0} king")]
    MissingKing(Alliance),
    #[error("a board requires exactly one {0} king, found {1}")]
    MultipleKings(Alliance, usize),
}

/// View of a single square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tile {
    Empty(u8),
    Occupied(Piece),
}

impl Tile {
    pub fn square(&self) -> u8 {
        match self {
            Tile::Empty(square) => *square,
            Tile::Occupied(piece) => piece.square,
        }
    }

    pub fn is_occupied(&self) -> bool {
        matches!(self, Tile::Occupied(_))
    }

    pub fn piece(&self) -> Option<Piece> {
        match self {
            Tile::Empty(_) => None,
            Tile::Occupied(piece) => Some(*piece),
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tile::Empty(_) => write!(f, "-"),
            Tile::Occupied(piece) => write!(f, "{piece}"),
        }
    }
}

/// Occupancy and turn data of one board, without the derived move sets.
/// Move generation reads only this.
#[derive(Clone, Debug)]
pub struct Position {
    squares: [Option<Piece>; 64],
    white_pieces: Vec<Piece>,
    black_pieces: Vec<Piece>,
    en_passant_pawn: Option<Piece>,
    move_maker: Alliance,
}

impl Position {
    pub(crate) fn new(
        squares: [Option<Piece>; 64],
        move_maker: Alliance,
        en_passant_pawn: Option<Piece>,
    ) -> Self {
        Position {
            squares,
            white_pieces: active_pieces(&squares, Alliance::White),
            black_pieces: active_pieces(&squares, Alliance::Black),
            en_passant_pawn,
            move_maker,
        }
    }

    pub fn piece_at(&self, square: u8) -> Option<Piece> {
        self.squares[square as usize]
    }

    pub fn is_occupied(&self, square: u8) -> bool {
        self.squares[square as usize].is_some()
    }

    pub fn active_pieces(&self, alliance: Alliance) -> &[Piece] {
        match alliance {
            Alliance::White => &self.white_pieces,
            Alliance::Black => &self.black_pieces,
        }
    }

    pub fn en_passant_pawn(&self) -> Option<Piece> {
        self.en_passant_pawn
    }

    pub fn move_maker(&self) -> Alliance {
        self.move_maker
    }

    fn count_kings(&self, alliance: Alliance) -> usize {
        self.active_pieces(alliance)
            .iter()
            .filter(|piece| piece.is_king())
            .count()
    }
}

// Scans in square order, so piece lists are ordered by square.
fn active_pieces(squares: &[Option<Piece>; 64], alliance: Alliance) -> Vec<Piece> {
    squares
        .iter()
        .flatten()
        .filter(|piece| piece.alliance == alliance)
        .copied()
        .collect()
}

/// An immutable snapshot of one position together with both players'
/// move sets. A new board is built for every ply; nothing here is ever
/// edited in place.
#[derive(Clone, Debug)]
pub struct Board {
    position: Position,
    white: Side,
    black: Side,
}

impl Board {
    /// The standard starting position, White to move.
    pub fn initial() -> Self {
        let mut builder = Builder::new();
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            builder.set_piece(Piece::new(kind, Alliance::Black, f as u8));
            builder.set_piece(Piece::new(kind, Alliance::White, 56 + f as u8));
        }
        for f in 0..8u8 {
            builder.set_piece(Piece::new(PieceKind::Pawn, Alliance::Black, 8 + f));
            builder.set_piece(Piece::new(PieceKind::Pawn, Alliance::White, 48 + f));
        }
        builder.set_move_maker(Alliance::White);
        builder.build()
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn tile(&self, square: u8) -> Tile {
        match self.position.piece_at(square) {
            Some(piece) => Tile::Occupied(piece),
            None => Tile::Empty(square),
        }
    }

    pub fn piece_at(&self, square: u8) -> Option<Piece> {
        self.position.piece_at(square)
    }

    pub fn white_pieces(&self) -> &[Piece] {
        self.position.active_pieces(Alliance::White)
    }

    pub fn black_pieces(&self) -> &[Piece] {
        self.position.active_pieces(Alliance::Black)
    }

    pub fn active_pieces(&self, alliance: Alliance) -> &[Piece] {
        self.position.active_pieces(alliance)
    }

    /// The pawn that double-stepped on the previous ply, if any.
    pub fn en_passant_pawn(&self) -> Option<Piece> {
        self.position.en_passant_pawn()
    }

    pub fn move_maker(&self) -> Alliance {
        self.position.move_maker()
    }

    pub fn player(&self, alliance: Alliance) -> Player<'_> {
        let side = match alliance {
            Alliance::White => &self.white,
            Alliance::Black => &self.black,
        };
        Player::new(self, side)
    }

    pub fn white_player(&self) -> Player<'_> {
        self.player(Alliance::White)
    }

    pub fn black_player(&self) -> Player<'_> {
        self.player(Alliance::Black)
    }

    pub fn current_player(&self) -> Player<'_> {
        self.player(self.move_maker())
    }

    /// Legal moves of both sides, current player's first.
    pub fn all_legal_moves(&self) -> impl Iterator<Item = &Move> {
        let current = self.current_player();
        current
            .legal_moves()
            .iter()
            .chain(current.opponent().legal_moves().iter())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for square in 0..NUM_SQUARES as u8 {
            write!(f, "{:>3}", self.tile(square).to_string())?;
            if (square + 1) % 8 == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Staging area for the next board: maps squares to pieces and records
/// whose turn it is. Consumed once by [`Builder::build`].
#[derive(Clone, Debug)]
pub struct Builder {
    config: [Option<Piece>; 64],
    move_maker: Alliance,
    en_passant_pawn: Option<Piece>,
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder {
    pub fn new() -> Self {
        Builder {
            config: [None; 64],
            move_maker: Alliance::White,
            en_passant_pawn: None,
        }
    }

    /// Stages `piece` on its own square; the last write per square wins.
    pub fn set_piece(&mut self, piece: Piece) -> &mut Self {
        self.config[piece.square as usize] = Some(piece);
        self
    }

    pub fn set_move_maker(&mut self, alliance: Alliance) -> &mut Self {
        self.move_maker = alliance;
        self
    }

    pub fn set_en_passant_pawn(&mut self, pawn: Piece) -> &mut Self {
        self.en_passant_pawn = Some(pawn);
        self
    }

    /// Builds the board. Panics unless each side has exactly one king,
    /// which legal play can never violate.
    pub fn build(self) -> Board {
        match self.try_build() {
            Ok(board) => board,
            Err(e) => panic!("invalid board: {e}"),
        }
    }

    pub fn try_build(self) -> Result<Board, BoardError> {
        let position = Position::new(self.config, self.move_maker, self.en_passant_pawn);
        for alliance in [Alliance::White, Alliance::Black] {
            match position.count_kings(alliance) {
                1 => {}
                0 => return Err(BoardError::MissingKing(alliance)),
                n => return Err(BoardError::MultipleKings(alliance, n)),
            }
        }

        let white_moves = movegen::alliance_moves(&position, Alliance::White);
        let black_moves = movegen::alliance_moves(&position, Alliance::Black);
        let white = Side::new(&position, Alliance::White, &white_moves, &black_moves)?;
        let black = Side::new(&position, Alliance::Black, &black_moves, &white_moves)?;

        trace!(
            move_maker = %position.move_maker(),
            white_pieces = position.white_pieces.len(),
            black_pieces = position.black_pieces.len(),
            white_moves = white.legal_moves.len(),
            black_moves = black.legal_moves.len(),
            "built board"
        );

        Ok(Board {
            position,
            white,
            black,
        })
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
