//! Square indices and algebraic notation.
//!
//! Squares are numbered row-major from a8 (0) to h1 (63), so index 0 is
//! Black's queen-side rook corner and index 63 is White's king-side one.

pub const NUM_SQUARES: usize = 64;
pub const NUM_SQUARES_PER_ROW: u8 = 8;

pub fn is_valid_square(coordinate: i32) -> bool {
    (0..NUM_SQUARES as i32).contains(&coordinate)
}

/// File index, 0 for the a-file through 7 for the h-file.
pub fn file_of(square: u8) -> u8 {
    square % NUM_SQUARES_PER_ROW
}

/// Row index counted from the top of the board, 0 for rank 8.
pub fn row_of(square: u8) -> u8 {
    square / NUM_SQUARES_PER_ROW
}

pub fn file_char(square: u8) -> char {
    (b'a' + file_of(square)) as char
}

pub fn rank_char(square: u8) -> char {
    (b'8' - row_of(square)) as char
}

/// "a8" for 0 through "h1" for 63. Panics on an out-of-range index.
pub fn square_to_algebraic(square: u8) -> String {
    assert!(
        (square as usize) < NUM_SQUARES,
        "square {square} out of bounds"
    );
    format!("{}{}", file_char(square), rank_char(square))
}

pub fn algebraic_to_square(text: &str) -> Option<u8> {
    let b = text.as_bytes();
    if b.len() != 2 {
        return None;
    }
    let (f, r) = (b[0], b[1]);
    if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
        return None;
    }
    Some((b'8' - r) * NUM_SQUARES_PER_ROW + (f - b'a'))
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
