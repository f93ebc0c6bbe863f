// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel hands evaluation.
use std::thread;

use crate::{Card, Hand, HandStrength, calculate_hand_strength};

/// Evaluates hands against the same board using `num_tasks` threads.
///
/// The returned strengths are in the same order as the hands.
///
/// Panics if `num_tasks` is zero.
pub fn par_evaluate(hands: &[Hand], board: &[Card], num_tasks: usize) -> Vec<HandStrength> {
    assert!(num_tasks > 0);

    if hands.is_empty() {
        return Vec::new();
    }

    let hands_per_task = hands.len().div_ceil(num_tasks);

    thread::scope(|s| {
        let tasks = hands
            .chunks(hands_per_task)
            .map(|chunk| {
                s.spawn(move || {
                    chunk
                        .iter()
                        .map(|hand| calculate_hand_strength(hand, board))
                        .collect::<Vec<_>>()
                })
            })
            .collect::<Vec<_>>();

        tasks
            .into_iter()
            .flat_map(|task| match task.join() {
                Ok(strengths) => strengths,
                Err(e) => std::panic::resume_unwind(e),
            })
            .collect()
    })
}
