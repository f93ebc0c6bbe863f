// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Kicker CLI, deals or evaluates Texas hold'em hands and shows the winners.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::info;
use rand::{SeedableRng, rngs::StdRng};
use std::io;

use kicker_eval::{BoardStage, Card, Hand, Table, parse_cards};

pub mod terminal;

#[derive(Debug, Parser)]
struct Cli {
    /// Enable debug logging.
    #[clap(long, short, global = true)]
    verbose: bool,
    /// Disable colored output.
    #[clap(long, global = true)]
    no_color: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Deal random hands and board cards.
    Deal {
        /// Number of players.
        #[clap(long, short, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=9))]
        players: u8,
        /// Board stage, one of preflop, flop, turn, river.
        #[clap(long, short, default_value_t = BoardStage::River)]
        stage: BoardStage,
        /// Seed for reproducible deals.
        #[clap(long)]
        seed: Option<u64>,
    },
    /// Evaluate the given hands and board.
    Eval {
        /// A player hand, for example `AH,KD`, can be repeated.
        #[clap(long = "hand", required = true)]
        hands: Vec<String>,
        /// The board cards, for example `QH,JH,TS`.
        #[clap(long, short, default_value = "")]
        board: String,
    },
}

/// The deal configuration.
#[derive(Debug)]
struct Config {
    players: usize,
    stage: BoardStage,
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let table = match cli.command {
        Command::Deal {
            players,
            stage,
            seed,
        } => deal(Config {
            players: players as usize,
            stage,
            seed,
        })?,
        Command::Eval { hands, board } => eval(&hands, &board)?,
    };

    let mut stdout = io::stdout();
    terminal::print_table(&mut stdout, &table, !cli.no_color)?;
    Ok(())
}

/// Deals a random table.
fn deal(config: Config) -> Result<Table> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    info!(
        "Dealing {} players to the {}",
        config.players, config.stage
    );

    let mut table = Table::new(config.players, &mut rng)?;
    table.set_stage(config.stage, &mut rng)?;
    Ok(table)
}

/// Creates a table with the given cards.
fn eval(hands: &[String], board: &str) -> Result<Table> {
    let hands = hands
        .iter()
        .map(|s| parse_hand(s))
        .collect::<Result<Vec<_>>>()?;
    let board = parse_cards(board).context("Invalid board")?;

    Ok(Table::with_cards(hands, board)?)
}

fn parse_hand(s: &str) -> Result<Hand> {
    let cards = parse_cards(s).with_context(|| format!("Invalid hand {s:?}"))?;
    let [c1, c2]: [Card; 2] = match cards.try_into() {
        Ok(cards) => cards,
        Err(_) => bail!("Hand {s:?} must have two cards"),
    };

    match Hand::new(c1, c2) {
        Some(hand) => Ok(hand),
        None => bail!("Hand {s:?} has the same card twice"),
    }
}
