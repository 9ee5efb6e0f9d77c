use super::*;
use crate::test_support::builder_from_rows;

fn castling_board() -> Board {
    builder_from_rows(
        [
            "r...k..r", "pppppppp", "........", "........", "........", "........", "PPPPPPPP",
            "R...K..R",
        ],
        Alliance::White,
    )
    .build()
}

#[test]
fn test_structural_equality() {
    let knight = Piece::new(PieceKind::Knight, Alliance::White, 62);
    let a = Move::Simple {
        piece: knight,
        destination: 45,
    };
    let b = Move::Simple {
        piece: Piece::new(PieceKind::Knight, Alliance::White, 62),
        destination: 45,
    };
    assert_eq!(a, b);

    let capture = Move::Capture {
        piece: knight,
        destination: 45,
        captured: Piece::new(PieceKind::Pawn, Alliance::Black, 45),
    };
    assert_ne!(a, capture);

    let moved_knight = Move::Simple {
        piece: knight.moved_to(62),
        destination: 45,
    };
    assert_ne!(a, moved_knight);
}

#[test]
fn test_moves_from_different_boards_compare_equal() {
    let first = Board::initial();
    let second = Board::initial();
    assert_eq!(create_move(&first, 62, 45), create_move(&second, 62, 45));
}

#[test]
fn test_pawn_jump_sets_en_passant_pawn() {
    let board = Board::initial();
    let mv = create_move(&board, 52, 36);
    assert!(matches!(mv, Move::PawnJump { .. }));

    let next = mv.execute(&board);
    assert_eq!(next.move_maker(), Alliance::Black);
    assert!(next.piece_at(52).is_none());
    let pawn = next.piece_at(36).expect("pawn on e4");
    assert!(!pawn.first_move);
    assert_eq!(next.en_passant_pawn(), Some(pawn));
    assert_eq!(next.white_pieces().len(), 16);

    // the source board is untouched
    assert!(board.piece_at(52).is_some());
    assert!(board.piece_at(36).is_none());
    assert_eq!(board.move_maker(), Alliance::White);
}

#[test]
fn test_en_passant_eligibility_lasts_one_ply() {
    let board = Board::initial();
    let board = create_move(&board, 52, 36).execute(&board);
    let board = create_move(&board, 1, 18).execute(&board);
    assert!(board.en_passant_pawn().is_none());
}

#[test]
fn test_capture_removes_captured_piece() {
    let board = builder_from_rows(
        [
            "....k...", "........", "........", "...p....", "........", "........", "........",
            "...RK...",
        ],
        Alliance::White,
    )
    .build();
    let mv = create_move(&board, 59, 27);
    assert!(matches!(mv, Move::Capture { .. }));
    assert_eq!(mv.captured_piece().map(|p| p.kind), Some(PieceKind::Pawn));

    let next = mv.execute(&board);
    assert_eq!(next.black_pieces().len(), 1);
    let rook = next.piece_at(27).expect("rook on d5");
    assert_eq!(rook.kind, PieceKind::Rook);
    assert_eq!(rook.alliance, Alliance::White);
}

#[test]
fn test_en_passant_removes_pawn_beside_destination() {
    let board = builder_from_rows(
        [
            "....k...", "...p....", "........", "....P...", "........", "........", "........",
            "....K...",
        ],
        Alliance::Black,
    )
    .build();
    // d7-d5 lands beside the white pawn on e5
    let board = create_move(&board, 11, 27).execute(&board);
    let mv = create_move(&board, 28, 19);
    assert!(matches!(mv, Move::EnPassant { .. }));
    assert_eq!(mv.captured_piece().map(|p| p.square), Some(27));

    let next = mv.execute(&board);
    assert!(next.piece_at(27).is_none());
    assert!(next.black_pieces().iter().all(|p| p.is_king()));
    assert_eq!(next.piece_at(19).map(|p| p.kind), Some(PieceKind::Pawn));
}

#[test]
fn test_king_side_castle_relocates_rook() {
    let board = castling_board();
    let mv = create_move(&board, 60, 62);
    assert!(mv.is_castling_move());

    let next = mv.execute(&board);
    let king = next.piece_at(62).expect("king on g1");
    let rook = next.piece_at(61).expect("rook on f1");
    assert!(king.is_king() && !king.first_move);
    assert!(rook.is_rook() && !rook.first_move);
    assert!(next.piece_at(60).is_none());
    assert!(next.piece_at(63).is_none());
    assert_eq!(next.white_pieces().len(), 11);
}

#[test]
fn test_queen_side_castle_relocates_rook() {
    let board = castling_board();
    let mv = create_move(&board, 60, 58);
    assert!(matches!(
        mv,
        Move::Castle {
            side: CastleSide::Queen,
            ..
        }
    ));
    let next = mv.execute(&board);
    assert!(next.piece_at(58).is_some_and(|p| p.is_king()));
    assert!(next.piece_at(59).is_some_and(|p| p.is_rook()));
    assert!(next.piece_at(56).is_none());
}

#[test]
fn test_promotion_installs_queen() {
    let board = builder_from_rows(
        [
            "......k.", "P.......", "........", "........", "........", "........", "........",
            "....K...",
        ],
        Alliance::White,
    )
    .build();
    let mv = create_move(&board, 8, 0);
    assert!(mv.is_promotion());
    assert_eq!(mv.moved_piece().map(|p| p.kind), Some(PieceKind::Pawn));

    let next = mv.execute(&board);
    let queen = next.piece_at(0).expect("queen on a8");
    assert_eq!(queen.kind, PieceKind::Queen);
    assert_eq!(queen.alliance, Alliance::White);
    assert!(!next.white_pieces().iter().any(|p| p.is_pawn()));
    assert_eq!(next.move_maker(), Alliance::Black);
    // the new queen gives check along the eighth rank
    assert!(next.current_player().is_in_check());
}

#[test]
fn test_null_move_cannot_execute() {
    let board = Board::initial();
    assert_eq!(
        Move::Null.try_execute(&board).unwrap_err(),
        MoveError::NullMove
    );
    assert!(Move::Null.moved_piece().is_none());
    assert!(Move::Null.destination().is_none());
}

#[test]
#[should_panic(expected = "null move")]
fn test_null_move_execute_panics() {
    let board = Board::initial();
    let _ = Move::Null.execute(&board);
}

#[test]
fn test_create_move_misses_return_null() {
    let board = Board::initial();
    assert!(create_move(&board, 52, 28).is_null());
    assert!(create_move(&board, 36, 28).is_null());
    // black's pawn cannot move on white's turn
    assert!(create_move(&board, 12, 28).is_null());
}

#[test]
fn test_move_labels() {
    let board = Board::initial();
    assert_eq!(create_move(&board, 62, 45).to_string(), "Nf3");
    assert_eq!(create_move(&board, 52, 36).to_string(), "e4");
    assert_eq!(Move::Null.to_string(), "--");

    let castle = castling_board();
    assert_eq!(create_move(&castle, 60, 62).to_string(), "0-0");
    assert_eq!(create_move(&castle, 60, 58).to_string(), "0-0-0");

    let capture = Move::PawnCapture {
        piece: Piece::with_first_move(PieceKind::Pawn, Alliance::White, 36, false),
        destination: 27,
        captured: Piece::new(PieceKind::Pawn, Alliance::Black, 27),
    };
    assert_eq!(capture.to_string(), "exd5");
    assert_eq!(Move::Promotion(Box::new(capture)).to_string(), "exd5=Q");
}
