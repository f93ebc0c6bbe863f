// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example rank_counts -- --samples 1000000
// ```
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use std::time::Instant;

use kicker_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of random 7 cards pools to evaluate.
    #[clap(long, short, default_value_t = 100_000)]
    samples: usize,
    /// Seed for reproducible deals.
    #[clap(long)]
    seed: Option<u64>,
}

fn main() {
    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let now = Instant::now();
    let mut counts = [0usize; HandRank::COUNT];

    for _ in 0..cli.samples {
        let mut deck = Deck::new_and_shuffled(&mut rng);
        let Some(hand) = deck.create_hand(&mut rng) else {
            break;
        };

        let board = deck.cards()[..5].to_vec();
        let rank = calculate_hand_strength(&hand, &board).rank();
        counts[rank as usize] += 1;
    }

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for rank in HandRank::ranks() {
        let count = counts[rank as usize];
        let pct = 100.0 * count as f64 / total.max(1) as f64;
        println!("{:<17}{count:>10} {pct:>7.3}%", format!("{rank}:"));
    }
}
