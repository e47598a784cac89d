// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Kicker Poker hand evaluator.
//!
//! Given the cards a player can see, the hole cards plus any face-up board
//! cards, [EvaluatedHand::eval] classifies the strongest hand and keeps the
//! cards that justify it:
//!
//! ```
//! # use kicker_eval::*;
//! let cards = [
//!     Card::new(Rank::Ace, Suit::Spades),
//!     Card::new(Rank::Ace, Suit::Hearts),
//!     Card::new(Rank::King, Suit::Clubs),
//!     Card::new(Rank::Seven, Suit::Diamonds),
//!     Card::new(Rank::Four, Suit::Clubs),
//! ];
//! let hand = EvaluatedHand::eval(&cards)?;
//! assert_eq!(hand.category(), HandCategory::OnePair);
//! # Ok::<(), EmptyHandError>(())
//! ```
//!
//! At the end of a hand [resolve] compares the evaluated hands of every
//! player still in play and returns the winners, splitting the pot when the
//! tie-break cascade cannot separate them.
//!
//! Both operations are pure stateless functions over a caller-supplied
//! snapshot of cards, the crate holds no game state between calls.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub mod showdown;

pub use eval::{EmptyHandError, EvaluatedHand, HandCategory};
pub use showdown::{NoEligiblePlayersError, ShowdownEntry, resolve};

// Reexport cards types.
pub use kicker_cards::{Card, Rank, Suit};
