//! Per-piece move generation on the flattened 64-square grid.
//!
//! Generated moves ignore check: a move that leaves the mover's own king
//! attacked is still emitted here and is rejected later by
//! [`Player::make_move`](crate::player::Player::make_move). Castling is
//! not generated here either, it depends on both sides' move sets.

use crate::{
    board::{Board, Position},
    moves::Move,
    notation::{file_of, is_valid_square},
    types::*,
};

const KNIGHT_OFFSETS: [i8; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];
const KING_OFFSETS: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];
const QUEEN_DIRECTIONS: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];
const BISHOP_DIRECTIONS: [i8; 4] = [-9, -7, 7, 9];
const ROOK_DIRECTIONS: [i8; 4] = [-8, -1, 1, 8];

impl Piece {
    /// Every destination this piece may reach on `board`, before check
    /// safety is considered.
    pub fn calculate_legal_moves(&self, board: &Board) -> Vec<Move> {
        let mut out = Vec::new();
        piece_moves(board.position(), self, &mut out);
        out
    }
}

/// Base moves of every active piece of `alliance`, in square order.
pub(crate) fn alliance_moves(position: &Position, alliance: Alliance) -> Vec<Move> {
    let mut out = Vec::with_capacity(48);
    for piece in position.active_pieces(alliance) {
        piece_moves(position, piece, &mut out);
    }
    out
}

pub(crate) fn piece_moves(position: &Position, piece: &Piece, out: &mut Vec<Move>) {
    match piece.kind {
        PieceKind::Pawn => gen_pawn(position, piece, out),
        PieceKind::Knight => gen_stepper(position, piece, &KNIGHT_OFFSETS, out),
        PieceKind::Bishop => gen_slider(position, piece, &BISHOP_DIRECTIONS, out),
        PieceKind::Rook => gen_slider(position, piece, &ROOK_DIRECTIONS, out),
        PieceKind::Queen => gen_slider(position, piece, &QUEEN_DIRECTIONS, out),
        PieceKind::King => gen_stepper(position, piece, &KING_OFFSETS, out),
    }
}

/// Squares a pawn attacks diagonally, whether or not anything stands there.
pub(crate) fn pawn_attacks(pawn: &Piece) -> impl Iterator<Item = u8> + '_ {
    let dir = pawn.alliance.direction();
    [7 * dir, 9 * dir]
        .into_iter()
        .filter_map(move |offset| step(pawn.square, offset, is_column_exception))
}

/// Whether one step of `offset` from `square` would leave the a- or h-file
/// and reappear on the opposite edge.
fn is_column_exception(square: u8, offset: i8) -> bool {
    match file_of(square) {
        0 => matches!(offset, -9 | -1 | 7),
        7 => matches!(offset, -7 | 1 | 9),
        _ => false,
    }
}

fn is_knight_exception(square: u8, offset: i8) -> bool {
    match file_of(square) {
        0 => matches!(offset, -17 | -10 | 6 | 15),
        1 => matches!(offset, -10 | 6),
        6 => matches!(offset, -6 | 10),
        7 => matches!(offset, -15 | -6 | 10 | 17),
        _ => false,
    }
}

fn step(from: u8, offset: i8, exception: fn(u8, i8) -> bool) -> Option<u8> {
    if exception(from, offset) {
        return None;
    }
    let to = from as i32 + offset as i32;
    is_valid_square(to).then_some(to as u8)
}

fn gen_stepper(position: &Position, piece: &Piece, offsets: &[i8], out: &mut Vec<Move>) {
    let exception: fn(u8, i8) -> bool = match piece.kind {
        PieceKind::Knight => is_knight_exception,
        _ => is_column_exception,
    };
    for &offset in offsets {
        let Some(to) = step(piece.square, offset, exception) else {
            continue;
        };
        match position.piece_at(to) {
            None => out.push(Move::Simple {
                piece: *piece,
                destination: to,
            }),
            Some(target) if target.alliance != piece.alliance => out.push(Move::Capture {
                piece: *piece,
                destination: to,
                captured: target,
            }),
            _ => {}
        }
    }
}

fn gen_slider(position: &Position, piece: &Piece, directions: &[i8], out: &mut Vec<Move>) {
    for &direction in directions {
        let mut from = piece.square;
        while let Some(to) = step(from, direction, is_column_exception) {
            match position.piece_at(to) {
                None => out.push(Move::Simple {
                    piece: *piece,
                    destination: to,
                }),
                Some(target) => {
                    if target.alliance != piece.alliance {
                        out.push(Move::Capture {
                            piece: *piece,
                            destination: to,
                            captured: target,
                        });
                    }
                    break;
                }
            }
            from = to;
        }
    }
}

fn gen_pawn(position: &Position, pawn: &Piece, out: &mut Vec<Move>) {
    let alliance = pawn.alliance;
    let dir = alliance.direction();

    // forward 1
    if let Some(to) = step(pawn.square, 8 * dir, |_, _| false)
        && !position.is_occupied(to)
    {
        out.push(promote_if_due(Move::PawnPush {
            piece: *pawn,
            destination: to,
        }));

        // forward 2, only while the square behind the destination is free
        if pawn.first_move
            && let Some(to2) = step(to, 8 * dir, |_, _| false)
            && !position.is_occupied(to2)
        {
            out.push(Move::PawnJump {
                piece: *pawn,
                destination: to2,
            });
        }
    }

    // diagonal captures + en passant
    for to in pawn_attacks(pawn) {
        match position.piece_at(to) {
            Some(target) if target.alliance != alliance => {
                out.push(promote_if_due(Move::PawnCapture {
                    piece: *pawn,
                    destination: to,
                    captured: target,
                }));
            }
            Some(_) => {}
            None => {
                if let Some(ep) = position.en_passant_pawn()
                    && ep.alliance != alliance
                    && ep.square as i32 == to as i32 - 8 * dir as i32
                {
                    out.push(Move::EnPassant {
                        piece: *pawn,
                        destination: to,
                        captured: ep,
                    });
                }
            }
        }
    }
}

fn promote_if_due(mv: Move) -> Move {
    let due = match (mv.moved_piece(), mv.destination()) {
        (Some(pawn), Some(to)) => pawn.alliance.is_pawn_promotion_square(to),
        _ => false,
    };
    if due { Move::Promotion(Box::new(mv)) } else { mv }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
