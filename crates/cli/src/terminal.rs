// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal output.
use crossterm::style::Stylize;
use std::io::{self, Write};

use kicker_eval::{Card, Suit, Table};

/// Prints the board, each player hand with its best five cards, and the
/// winners.
pub fn print_table<W: Write>(w: &mut W, table: &Table, color: bool) -> io::Result<()> {
    write!(w, "Board ({}):", table.stage())?;
    print_cards(w, table.board(), color)?;
    writeln!(w)?;

    let winners = table.winners();
    for (idx, (hand, strength)) in table.hands().iter().zip(table.strengths()).enumerate() {
        write!(w, "Player {}:", idx + 1)?;
        print_cards(w, hand.cards(), color)?;

        let rank = format!("{:<16}", strength.rank().to_string());
        if color {
            write!(w, "  {}", rank.bold())?;
        } else {
            write!(w, "  {rank}")?;
        }

        print_cards(w, strength.cards(), color)?;

        if winners.contains(&idx) {
            let label = if winners.len() > 1 { "TIE" } else { "WINNER" };
            if color {
                write!(w, "  {}", label.green().bold())?;
            } else {
                write!(w, "  {label}")?;
            }
        }

        writeln!(w)?;
    }

    w.flush()
}

fn print_cards<W: Write>(w: &mut W, cards: &[Card], color: bool) -> io::Result<()> {
    for card in cards {
        let s = card.to_string();
        match card.suit() {
            Suit::Hearts | Suit::Diamonds if color => write!(w, " {}", s.red())?,
            _ => write!(w, " {s}")?,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kicker_eval::{Hand, parse_cards};

    fn hand(s: &str) -> Hand {
        let c = parse_cards(s).unwrap();
        Hand::new(c[0], c[1]).unwrap()
    }

    fn output(table: &Table) -> String {
        let mut buf = Vec::new();
        print_table(&mut buf, table, false).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn print_winner() {
        let table = Table::with_cards(
            vec![hand("TH JH"), hand("2C 2D")],
            parse_cards("QH KH AH").unwrap(),
        )
        .unwrap();

        let out = output(&table);
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Board (flop): QH KH AH");
        assert!(lines[1].starts_with("Player 1: TH JH  Royal Flush"));
        assert!(lines[1].ends_with("TH JH QH KH AH  WINNER"));
        assert!(lines[2].contains("One Pair"));
        assert!(!lines[2].contains("WINNER"));
    }

    #[test]
    fn print_tie() {
        let table = Table::with_cards(
            vec![hand("2S 3S"), hand("2H 3H")],
            parse_cards("5C 6D 7H 8S 9C").unwrap(),
        )
        .unwrap();

        let out = output(&table);
        assert_eq!(out.matches("TIE").count(), 2);
    }
}
