use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    board::{Board, BoardError, Builder},
    notation::{file_char, square_to_algebraic},
    types::*,
};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("the null move cannot be executed")]
    NullMove,
    #[error(transparent)]
    Board(#[from] BoardError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CastleSide {
    King,
    Queen,
}

/// A candidate transition from the board it was generated on.
///
/// Moves do not hold their originating board; [`Move::execute`] takes it
/// as an argument. Equality is structural, so a move generated on one
/// board compares equal to the same move generated on another board with
/// the same moved piece and destination.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    /// Non-pawn move onto an empty square.
    Simple {
        piece: Piece,
        destination: u8,
    },
    /// Non-pawn capture on the destination square.
    Capture {
        piece: Piece,
        destination: u8,
        captured: Piece,
    },
    PawnPush {
        piece: Piece,
        destination: u8,
    },
    /// Two-square pawn advance; leaves the pawn capturable en passant.
    PawnJump {
        piece: Piece,
        destination: u8,
    },
    PawnCapture {
        piece: Piece,
        destination: u8,
        captured: Piece,
    },
    /// The captured pawn stands beside the mover, not on the destination.
    EnPassant {
        piece: Piece,
        destination: u8,
        captured: Piece,
    },
    /// Wraps a pawn push or pawn capture that reaches the last rank.
    Promotion(Box<Move>),
    Castle {
        side: CastleSide,
        king: Piece,
        destination: u8,
        rook: Piece,
        rook_destination: u8,
    },
    /// Sentinel for "no such legal move"; never executable.
    Null,
}

impl Move {
    pub fn moved_piece(&self) -> Option<Piece> {
        match self {
            Move::Simple { piece, .. }
            | Move::Capture { piece, .. }
            | Move::PawnPush { piece, .. }
            | Move::PawnJump { piece, .. }
            | Move::PawnCapture { piece, .. }
            | Move::EnPassant { piece, .. } => Some(*piece),
            Move::Promotion(inner) => inner.moved_piece(),
            Move::Castle { king, .. } => Some(*king),
            Move::Null => None,
        }
    }

    pub fn destination(&self) -> Option<u8> {
        match self {
            Move::Simple { destination, .. }
            | Move::Capture { destination, .. }
            | Move::PawnPush { destination, .. }
            | Move::PawnJump { destination, .. }
            | Move::PawnCapture { destination, .. }
            | Move::EnPassant { destination, .. }
            | Move::Castle { destination, .. } => Some(*destination),
            Move::Promotion(inner) => inner.destination(),
            Move::Null => None,
        }
    }

    /// Square the moved piece starts from.
    pub fn current_square(&self) -> Option<u8> {
        self.moved_piece().map(|piece| piece.square)
    }

    pub fn captured_piece(&self) -> Option<Piece> {
        match self {
            Move::Capture { captured, .. }
            | Move::PawnCapture { captured, .. }
            | Move::EnPassant { captured, .. } => Some(*captured),
            Move::Promotion(inner) => inner.captured_piece(),
            _ => None,
        }
    }

    pub fn is_attack(&self) -> bool {
        self.captured_piece().is_some()
    }

    pub fn is_castling_move(&self) -> bool {
        matches!(self, Move::Castle { .. })
    }

    pub fn is_promotion(&self) -> bool {
        matches!(self, Move::Promotion(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Move::Null)
    }

    /// Pawn pushes and jumps occupy their destination without attacking it.
    pub(crate) fn is_non_attacking_pawn_advance(&self) -> bool {
        match self {
            Move::PawnPush { .. } | Move::PawnJump { .. } => true,
            Move::Promotion(inner) => inner.is_non_attacking_pawn_advance(),
            _ => false,
        }
    }

    /// Applies this move to `board`, the board it was generated on.
    /// Panics on [`Move::Null`].
    pub fn execute(&self, board: &Board) -> Board {
        match self.try_execute(board) {
            Ok(next) => next,
            Err(e) => panic!("cannot execute {self:?}: {e}"),
        }
    }

    pub fn try_execute(&self, board: &Board) -> Result<Board, MoveError> {
        match self {
            Move::Null => Err(MoveError::NullMove),
            Move::Promotion(inner) => {
                let pawn = inner.moved_piece().ok_or(MoveError::NullMove)?;
                let to = inner.destination().ok_or(MoveError::NullMove)?;
                let intermediate = inner.try_execute(board)?;

                let mut builder = Builder::new();
                for piece in intermediate
                    .white_pieces()
                    .iter()
                    .chain(intermediate.black_pieces())
                {
                    if piece.square != to {
                        builder.set_piece(*piece);
                    }
                }
                builder.set_piece(pawn.promoted_to_queen(to));
                builder.set_move_maker(intermediate.move_maker());
                Ok(builder.try_build()?)
            }
            Move::Castle {
                king,
                destination,
                rook,
                rook_destination,
                ..
            } => {
                let mut builder = Builder::new();
                for piece in board.active_pieces(king.alliance) {
                    if piece != king && piece != rook {
                        builder.set_piece(*piece);
                    }
                }
                for piece in board.active_pieces(king.alliance.opponent()) {
                    builder.set_piece(*piece);
                }
                builder.set_piece(king.moved_to(*destination));
                builder.set_piece(rook.moved_to(*rook_destination));
                builder.set_move_maker(king.alliance.opponent());
                Ok(builder.try_build()?)
            }
            Move::Simple { piece, destination }
            | Move::Capture {
                piece, destination, ..
            }
            | Move::PawnPush { piece, destination }
            | Move::PawnJump { piece, destination }
            | Move::PawnCapture {
                piece, destination, ..
            }
            | Move::EnPassant {
                piece, destination, ..
            } => {
                let mut builder = Builder::new();
                for own in board.active_pieces(piece.alliance) {
                    if own != piece {
                        builder.set_piece(*own);
                    }
                }
                let removed = match self {
                    Move::EnPassant { captured, .. } => Some(*captured),
                    _ => None,
                };
                for other in board.active_pieces(piece.alliance.opponent()) {
                    if Some(*other) != removed {
                        builder.set_piece(*other);
                    }
                }
                // written last so it overwrites a piece captured on the destination
                let moved = piece.moved_to(*destination);
                builder.set_piece(moved);
                if matches!(self, Move::PawnJump { .. }) {
                    builder.set_en_passant_pawn(moved);
                }
                builder.set_move_maker(piece.alliance.opponent());
                Ok(builder.try_build()?)
            }
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Simple { piece, destination } => write!(
                f,
                "{}{}",
                piece.kind.letter(),
                square_to_algebraic(*destination)
            ),
            Move::Capture {
                piece, destination, ..
            } => write!(
                f,
                "{}x{}",
                piece.kind.letter(),
                square_to_algebraic(*destination)
            ),
            Move::PawnPush { destination, .. } | Move::PawnJump { destination, .. } => {
                write!(f, "{}", square_to_algebraic(*destination))
            }
            Move::PawnCapture {
                piece, destination, ..
            }
            | Move::EnPassant {
                piece, destination, ..
            } => write!(
                f,
                "{}x{}",
                file_char(piece.square),
                square_to_algebraic(*destination)
            ),
            Move::Promotion(inner) => write!(f, "{inner}=Q"),
            Move::Castle {
                side: CastleSide::King,
                ..
            } => write!(f, "0-0"),
            Move::Castle {
                side: CastleSide::Queen,
                ..
            } => write!(f, "0-0-0"),
            Move::Null => write!(f, "--"),
        }
    }
}

/// Looks up the current player's legal move from `current` to
/// `destination`. Returns [`Move::Null`] when there is none.
pub fn create_move(board: &Board, current: u8, destination: u8) -> Move {
    board
        .current_player()
        .legal_moves()
        .iter()
        .find(|mv| mv.current_square() == Some(current) && mv.destination() == Some(destination))
        .cloned()
        .unwrap_or(Move::Null)
}

#[cfg(test)]
#[path = "moves_tests.rs"]
mod moves_tests;
