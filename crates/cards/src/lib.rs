// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Kicker Poker cards types.
//!
//! This crate defines the card value types used by the hand evaluator:
//!
//! ```
//! # use kicker_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! assert!(kd.rank() < ah.rank());
//! ```
//!
//! A [Card] is a plain immutable value that orders by [Rank] alone, the suit
//! takes part only in flush grouping. Deck construction, shuffling, and
//! duplicate detection belong to the dealing collaborator, not to this crate.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, Rank, Suit};
