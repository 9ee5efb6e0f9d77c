use super::*;

#[test]
fn test_alliance_directions() {
    assert_eq!(Alliance::White.direction(), -1);
    assert_eq!(Alliance::Black.direction(), 1);
    assert_eq!(Alliance::White.opposite_direction(), 1);
    assert_eq!(Alliance::White.opponent(), Alliance::Black);
    assert_eq!(Alliance::Black.opponent(), Alliance::White);
}

#[test]
fn test_promotion_squares() {
    // White promotes on the first row of indices (rank 8)
    assert!(Alliance::White.is_pawn_promotion_square(0));
    assert!(Alliance::White.is_pawn_promotion_square(7));
    assert!(!Alliance::White.is_pawn_promotion_square(8));

    // Black promotes on rank 1
    assert!(Alliance::Black.is_pawn_promotion_square(56));
    assert!(Alliance::Black.is_pawn_promotion_square(63));
    assert!(!Alliance::Black.is_pawn_promotion_square(55));
}

#[test]
fn test_piece_identity_includes_first_move_flag() {
    let rook = Piece::new(PieceKind::Rook, Alliance::White, 63);
    let same = Piece::new(PieceKind::Rook, Alliance::White, 63);
    assert_eq!(rook, same);

    let moved = Piece::with_first_move(PieceKind::Rook, Alliance::White, 63, false);
    assert_ne!(rook, moved);

    let other_side = Piece::new(PieceKind::Rook, Alliance::Black, 63);
    assert_ne!(rook, other_side);
}

#[test]
fn test_moved_to_clears_first_move() {
    let pawn = Piece::new(PieceKind::Pawn, Alliance::White, 52);
    let advanced = pawn.moved_to(36);
    assert_eq!(advanced.square, 36);
    assert!(!advanced.first_move);
    assert_eq!(advanced.kind, PieceKind::Pawn);
    // The source value is untouched
    assert!(pawn.first_move);
    assert_eq!(pawn.square, 52);
}

#[test]
fn test_piece_display() {
    let white = Piece::new(PieceKind::Knight, Alliance::White, 62);
    let black = Piece::new(PieceKind::Knight, Alliance::Black, 1);
    assert_eq!(white.to_string(), "N");
    assert_eq!(black.to_string(), "n");
}

#[test]
#[should_panic]
fn test_out_of_bounds_square_panics() {
    let _ = Piece::new(PieceKind::Queen, Alliance::White, 64);
}
