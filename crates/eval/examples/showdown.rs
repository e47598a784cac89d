// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --example showdown
// Alice    [Card(AC), Card(KC)] -> Royal Flush
// Bob      [Card(5S), Card(5C)] -> Four of a Kind
// Winner: Alice
// ```

use anyhow::Result;

use kicker_eval::{Card, EvaluatedHand, Rank, ShowdownEntry, Suit, resolve};

fn main() -> Result<()> {
    env_logger::init();

    let board = [
        Card::new(Rank::Ten, Suit::Clubs),
        Card::new(Rank::Jack, Suit::Clubs),
        Card::new(Rank::Queen, Suit::Clubs),
        Card::new(Rank::Five, Suit::Diamonds),
        Card::new(Rank::Five, Suit::Hearts),
    ];

    let players = [
        (
            "Alice",
            [
                Card::new(Rank::Ace, Suit::Clubs),
                Card::new(Rank::King, Suit::Clubs),
            ],
        ),
        (
            "Bob",
            [
                Card::new(Rank::Five, Suit::Spades),
                Card::new(Rank::Five, Suit::Clubs),
            ],
        ),
    ];

    let mut entries = Vec::new();
    for (name, hole) in &players {
        let mut cards = hole.to_vec();
        cards.extend_from_slice(&board);

        let hand = EvaluatedHand::eval(&cards)?;
        println!("{name:8} {hole:?} -> {}", hand.category());

        entries.push(ShowdownEntry::new(hand, cards, false));
    }

    for idx in resolve(&entries)? {
        println!("Winner: {}", players[idx].0);
    }

    Ok(())
}
