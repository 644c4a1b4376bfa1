//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p othello_core -- [depth] [size]
//!
//! Examples:
//!   # Default: depth 7 from the 8x8 opening
//!   cargo flamegraph --example perft_bench -p othello_core
//!
//!   # Custom depth on a 10x10 board
//!   cargo flamegraph --example perft_bench -p othello_core -- 6 10

use othello_core::{perft, GameState};
use std::env;
use std::time::Instant;

fn main() {
    let args: Vec<String> = env::args().collect();

    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(7);
    let size: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(8);

    let state = match GameState::new(size) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    println!("Perft benchmark: {size}x{size} opening");
    println!("{}", "=".repeat(50));

    for d in 1..=depth {
        let start = Instant::now();
        let nodes = perft(&state, d);
        let elapsed = start.elapsed();
        let nps = nodes as f64 / elapsed.as_secs_f64().max(1e-9);
        println!(
            "depth {:>2}: {:>12} nodes  {:>10.3?}  ({:.2} Mn/s)",
            d,
            nodes,
            elapsed,
            nps / 1_000_000.0
        );
    }
}
