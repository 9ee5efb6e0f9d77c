mod common;

use std::time::Instant;

use rayon::prelude::*;

use chess_core::{Alliance, Board, perft, perft_divide};

use common::board_from_layout;

const FULL_PERFT_ENV: &str = "FULL_PERFT";
const NODE_LIMIT: u64 = 50_000;

fn parse_epd_line(line: &str) -> Option<(Board, Vec<(u8, u64)>)> {
    let mut parts = line.split(';');
    let mut head = parts.next()?.split_whitespace();
    let layout = head.next()?;
    let move_maker = match head.next()? {
        "w" => Alliance::White,
        "b" => Alliance::Black,
        other => panic!("Invalid side to move in EPD: {other}"),
    };

    let mut depths = Vec::new();
    for part in parts {
        let mut items = part.split_whitespace();
        let key = items.next().unwrap_or("");
        let val = items.next().unwrap_or("");
        if !key.starts_with('D') {
            continue;
        }
        let depth: u8 = key[1..]
            .parse()
            .unwrap_or_else(|_| panic!("Invalid depth token in EPD: {key}"));
        let expected: u64 = val
            .parse()
            .unwrap_or_else(|_| panic!("Invalid node count in EPD: {val}"));
        depths.push((depth, expected));
    }
    if depths.is_empty() {
        return None;
    }
    depths.sort_by_key(|(d, _)| *d);
    Some((board_from_layout(layout, move_maker), depths))
}

#[test]
fn perft_from_positions_epd() {
    let full = std::env::var(FULL_PERFT_ENV).is_ok();
    let data = include_str!("positions.epd");
    let cases: Vec<(usize, String)> = data
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .enumerate()
        .collect();

    cases.par_iter().for_each(|(idx, line)| {
        let (board, depths) = parse_epd_line(line).expect("EPD line with depths");
        let mut ran_depths = Vec::new();
        let mut total_nodes: u64 = 0;
        let case_start = Instant::now();

        for (depth, expected) in depths {
            if !full && expected > NODE_LIMIT {
                eprintln!(
                    "Skipping depth {depth} for case {} ({expected} nodes), set {FULL_PERFT_ENV}=1",
                    idx + 1
                );
                continue;
            }
            let got = perft(&board, depth);
            assert_eq!(
                got, expected,
                "Perft mismatch for case {} at depth {depth}",
                idx + 1
            );
            ran_depths.push(depth);
            total_nodes += got;
        }

        if !ran_depths.is_empty() {
            println!(
                "Case {:03} done: depths {:?}, total nodes {}, elapsed {:.3?}",
                idx + 1,
                ran_depths,
                total_nodes,
                case_start.elapsed()
            );
        }
    });
}

#[test]
fn perft_depth_zero_is_one() {
    assert_eq!(perft(&Board::initial(), 0), 1);
}

#[test]
fn divide_sums_to_perft() {
    let board = Board::initial();
    let divide = perft_divide(&board, 2);
    assert_eq!(divide.len(), 20);
    assert!(divide.iter().all(|(_, nodes)| *nodes == 20));
    assert_eq!(divide.iter().map(|(_, n)| n).sum::<u64>(), perft(&board, 2));
}
