//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p chess_core -- [depth] [divide]
//!
//! Examples:
//!   # Default: depth 4 from the initial position
//!   cargo flamegraph --example perft_bench -p chess_core
//!
//!   # Per-root-move counts at depth 3
//!   cargo run --release --example perft_bench -p chess_core -- 3 divide

use std::{env, time::Instant};

use chess_core::{Board, perft, perft_divide};

fn main() {
    let args: Vec<String> = env::args().collect();
    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(4);
    let divide = args.get(2).is_some_and(|s| s == "divide");

    let board = Board::initial();
    println!("{board}");
    println!("Depth: {depth}");
    println!();

    if divide {
        let start = Instant::now();
        let mut total = 0u64;
        for (mv, nodes) in perft_divide(&board, depth) {
            println!("{:<8} {nodes}", mv.to_string());
            total += nodes;
        }
        println!();
        println!("Nodes: {total}");
        println!("Time: {:.3?}", start.elapsed());
        return;
    }

    // Warm-up run at lower depth
    if depth > 2 {
        let _ = perft(&board, depth.saturating_sub(2));
    }

    let start = Instant::now();
    let nodes = perft(&board, depth);
    let elapsed = start.elapsed();

    let nps = if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    };

    println!("Nodes: {nodes}");
    println!("Time: {elapsed:.3?}");
    println!("NPS: {nps:.0}");
}
