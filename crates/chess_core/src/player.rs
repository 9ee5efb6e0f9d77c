use std::{borrow::Cow, sync::OnceLock};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    board::{Board, BoardError, Position},
    movegen::pawn_attacks,
    moves::{CastleSide, Move},
    types::*,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveStatus {
    Done,
    IllegalMove,
    LeavesPlayerInCheck,
}

impl MoveStatus {
    pub fn is_done(self) -> bool {
        self == MoveStatus::Done
    }
}

/// Outcome of [`Player::make_move`]. On anything but
/// [`MoveStatus::Done`] the board is the one the move was tried on.
#[derive(Clone, Debug)]
pub struct MoveTransition<'a> {
    board: Cow<'a, Board>,
    the_move: Move,
    status: MoveStatus,
}

impl<'a> MoveTransition<'a> {
    pub fn status(&self) -> MoveStatus {
        self.status
    }

    pub fn the_move(&self) -> &Move {
        &self.the_move
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_board(self) -> Board {
        self.board.into_owned()
    }
}

/// Per-alliance data computed once when a board is built.
#[derive(Clone, Debug)]
pub(crate) struct Side {
    alliance: Alliance,
    king: Piece,
    pub(crate) legal_moves: Vec<Move>,
    in_check: bool,
    escape: OnceLock<bool>,
}

impl Side {
    /// `own` and `opponent` are the base (non-castling) moves of each side.
    pub(crate) fn new(
        position: &Position,
        alliance: Alliance,
        own: &[Move],
        opponent: &[Move],
    ) -> Result<Self, BoardError> {
        let king = position
            .active_pieces(alliance)
            .iter()
            .copied()
            .find(Piece::is_king)
            .ok_or(BoardError::MissingKing(alliance))?;
        let in_check = opponent
            .iter()
            .any(|mv| mv.destination() == Some(king.square));

        let mut legal_moves = own.to_vec();
        if !in_check {
            castle_moves(position, &king, opponent, &mut legal_moves);
        }

        Ok(Side {
            alliance,
            king,
            legal_moves,
            in_check,
            escape: OnceLock::new(),
        })
    }
}

/// Whether a piece of the opponent could capture on `square`.
///
/// Pawn pushes only occupy squares, so pawn pressure is taken from the
/// diagonals instead.
fn is_attacked(position: &Position, square: u8, attacker: Alliance, moves: &[Move]) -> bool {
    moves
        .iter()
        .filter(|mv| !mv.is_non_attacking_pawn_advance())
        .any(|mv| mv.destination() == Some(square))
        || position
            .active_pieces(attacker)
            .iter()
            .filter(|piece| piece.is_pawn())
            .any(|pawn| pawn_attacks(pawn).any(|to| to == square))
}

fn castle_moves(position: &Position, king: &Piece, opponent: &[Move], out: &mut Vec<Move>) {
    let alliance = king.alliance;
    let base: u8 = match alliance {
        Alliance::White => 56,
        Alliance::Black => 0,
    };
    if !king.first_move || king.square != base + 4 {
        return;
    }

    let enemy = alliance.opponent();
    let empty = |sq: u8| !position.is_occupied(sq);
    let safe = |sq: u8| !is_attacked(position, sq, enemy, opponent);
    let unmoved_rook = |sq: u8| {
        position
            .piece_at(sq)
            .is_some_and(|p| p.is_rook() && p.alliance == alliance && p.first_move)
    };

    if empty(base + 5)
        && empty(base + 6)
        && safe(base + 5)
        && safe(base + 6)
        && unmoved_rook(base + 7)
        && let Some(rook) = position.piece_at(base + 7)
    {
        out.push(Move::Castle {
            side: CastleSide::King,
            king: *king,
            destination: base + 6,
            rook,
            rook_destination: base + 5,
        });
    }

    // b-file square only needs to be empty; the king never crosses it
    if empty(base + 1)
        && empty(base + 2)
        && empty(base + 3)
        && safe(base + 3)
        && safe(base + 2)
        && unmoved_rook(base)
        && let Some(rook) = position.piece_at(base)
    {
        out.push(Move::Castle {
            side: CastleSide::Queen,
            king: *king,
            destination: base + 2,
            rook,
            rook_destination: base + 3,
        });
    }
}

/// One side's view of a board.
#[derive(Clone, Copy, Debug)]
pub struct Player<'a> {
    board: &'a Board,
    side: &'a Side,
}

impl<'a> Player<'a> {
    pub(crate) fn new(board: &'a Board, side: &'a Side) -> Self {
        Player { board, side }
    }

    pub fn alliance(&self) -> Alliance {
        self.side.alliance
    }

    pub fn king(&self) -> Piece {
        self.side.king
    }

    pub fn active_pieces(&self) -> &'a [Piece] {
        self.board.active_pieces(self.side.alliance)
    }

    /// Base moves plus any castling moves available this ply.
    pub fn legal_moves(&self) -> &'a [Move] {
        &self.side.legal_moves
    }

    pub fn opponent(&self) -> Player<'a> {
        self.board.player(self.side.alliance.opponent())
    }

    pub fn is_move_legal(&self, mv: &Move) -> bool {
        self.side.legal_moves.contains(mv)
    }

    pub fn is_in_check(&self) -> bool {
        self.side.in_check
    }

    pub fn is_in_checkmate(&self) -> bool {
        self.side.in_check && !self.has_escape_moves()
    }

    pub fn is_in_stalemate(&self) -> bool {
        !self.side.in_check && !self.has_escape_moves()
    }

    /// Whether at least one legal move leaves this player's king safe.
    pub fn has_escape_moves(&self) -> bool {
        *self.side.escape.get_or_init(|| {
            let escapes = self
                .side
                .legal_moves
                .iter()
                .any(|mv| self.make_move(mv).status().is_done());
            trace!(
                player = %self.alliance(),
                in_check = self.side.in_check,
                escapes,
                "escape scan"
            );
            escapes
        })
    }

    /// Attempts `mv` for this player. The board is only replaced when the
    /// status is [`MoveStatus::Done`].
    pub fn make_move(&self, mv: &Move) -> MoveTransition<'a> {
        if !self.is_move_legal(mv) {
            debug!(
                player = %self.alliance(),
                %mv,
                "rejected move not in legal set"
            );
            return MoveTransition {
                board: Cow::Borrowed(self.board),
                the_move: mv.clone(),
                status: MoveStatus::IllegalMove,
            };
        }

        let next = mv.execute(self.board);
        if next.player(self.alliance()).is_in_check() {
            debug!(
                player = %self.alliance(),
                %mv,
                "rejected move leaving king in check"
            );
            return MoveTransition {
                board: Cow::Borrowed(self.board),
                the_move: mv.clone(),
                status: MoveStatus::LeavesPlayerInCheck,
            };
        }

        MoveTransition {
            board: Cow::Owned(next),
            the_move: mv.clone(),
            status: MoveStatus::Done,
        }
    }
}

#[cfg(test)]
#[path = "player_tests.rs"]
mod player_tests;
