#![allow(dead_code)]

use chess_core::{Alliance, Board, test_support::builder_from_rows};

/// Builds a board from eight rows of eight characters, rank 8 first.
/// See [`builder_from_rows`] for the notation.
pub fn board_from_rows(rows: [&str; 8], move_maker: Alliance) -> Board {
    builder_from_rows(rows, move_maker).build()
}

/// Same as [`board_from_rows`] but takes the rows as one `/`-separated
/// string, e.g. `"r3k2r/p1ppqpb1/..."`, with digits for runs of empty
/// squares.
pub fn board_from_layout(layout: &str, move_maker: Alliance) -> Board {
    let rows: Vec<String> = layout
        .split('/')
        .map(|row| {
            row.chars()
                .map(|ch| match ch.to_digit(10) {
                    Some(n) => ".".repeat(n as usize),
                    None => ch.to_string(),
                })
                .collect()
        })
        .collect();
    assert_eq!(rows.len(), 8, "layout must have 8 rows");
    let rows: [&str; 8] = std::array::from_fn(|i| rows[i].as_str());
    board_from_rows(rows, move_maker)
}
