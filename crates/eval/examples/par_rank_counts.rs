// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// ```bash
// $ cargo r --release --features=parallel --example par_rank_counts
// ```
use std::time::Instant;

use kicker_eval::*;

fn main() {
    // Evaluate batches of 9 players tables with 4 parallel tasks.
    const NUM_TASKS: usize = 4;
    const NUM_TABLES: usize = 20_000;

    let mut rng = rand::rng();
    let mut counts = [0usize; HandRank::COUNT];
    let mut ties = 0;

    let now = Instant::now();

    for _ in 0..NUM_TABLES {
        let mut deck = Deck::new_and_shuffled(&mut rng);
        let hands = (0..Table::MAX_PLAYERS)
            .filter_map(|_| deck.create_hand(&mut rng))
            .collect::<Vec<_>>();
        let board = deck.cards()[..5].to_vec();

        let strengths = par_evaluate(&hands, &board, NUM_TASKS);
        for s in &strengths {
            counts[s.rank() as usize] += 1;
        }

        if strongest_hands(&strengths).len() > 1 {
            ties += 1;
        }
    }

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}", total as f64 / elapsed);
    println!("Split pots:      {ties}\n");

    for rank in HandRank::ranks() {
        println!("{:<17}{}", format!("{rank}:"), counts[rank as usize]);
    }
}
