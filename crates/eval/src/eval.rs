// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluation.
//!
//! [EvaluatedHand::eval] classifies the strongest hand in 1 to 7 candidate
//! cards by testing each [HandCategory] in descending strength order and
//! returns the first category that succeeds together with the cards that
//! justify it.
//!
//! Category tests are pure functions that either produce the contributing
//! cards or nothing, composed with ordinary control flow; evaluation never
//! depends on container iteration order or on shared state.
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use kicker_cards::{Card, Rank, Suit};

/// The number of cards in a complete hand.
const HAND_SIZE: usize = 5;

/// Error returned when evaluating a hand with no cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot evaluate a hand with no cards")]
pub struct EmptyHandError;

/// The category of a Poker hand, weakest to strongest.
///
/// The derived [Ord] is the primary comparison between players at showdown.
/// Betting heuristics may read the discriminant as an ordinal strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// A single high card.
    HighCard,
    /// Two cards of one rank.
    OnePair,
    /// Two cards of one rank and two of another.
    TwoPair,
    /// Three cards of one rank.
    ThreeOfAKind,
    /// Five cards of consecutive rank.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Three cards of one rank and two of another.
    FullHouse,
    /// Four cards of one rank.
    FourOfAKind,
    /// A straight in a single suit.
    StraightFlush,
    /// A ten to Ace straight in a single suit.
    RoyalFlush,
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        };

        write!(f, "{name}")
    }
}

/// A hand category with the cards that justify it.
///
/// The cards order matters for the showdown tie-break: grouped categories
/// keep the dominant group last, with kickers first in ascending rank, so
/// that the last card always belongs to the strongest group. Straights keep
/// run order, which starts at a high anchor for wrapped runs such as
/// King-Ace-2-3-4.
///
/// With three or more candidate cards the hand holds five cards, except
/// [HandCategory::HighCard] which holds the single best card. A two card
/// pre-flop hand yields a provisional result of at most two cards that is
/// not comparable to a full five card ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluatedHand {
    category: HandCategory,
    cards: Vec<Card>,
}

impl EvaluatedHand {
    /// Evaluates the strongest hand in the given cards.
    ///
    /// The cards are the player's hole cards plus any face-up board cards,
    /// in any order. With a single card, or two cards of different ranks,
    /// only a best-card-so-far indicator is meaningful and the result is a
    /// [HandCategory::HighCard] holding the highest card.
    ///
    /// Returns [EmptyHandError] when called with no cards, the only failure.
    pub fn eval(cards: &[Card]) -> Result<Self, EmptyHandError> {
        if cards.is_empty() {
            return Err(EmptyHandError);
        }

        let mut sorted = cards.to_vec();
        sorted.sort_by_key(|c| c.rank());

        let hand = match sorted.len() {
            1 => Self {
                category: HandCategory::HighCard,
                cards: sorted,
            },
            2 if sorted[0].rank() == sorted[1].rank() => Self {
                category: HandCategory::OnePair,
                cards: sorted,
            },
            // Before any board card only the best hole card is a meaningful
            // indicator, the lower card is dropped.
            2 => Self {
                category: HandCategory::HighCard,
                cards: vec![sorted[1]],
            },
            _ => Self::eval_sorted(&sorted),
        };

        Ok(hand)
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The cards that justify the category, in tie-break order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Evaluates three or more rank-sorted cards, strongest category first.
    fn eval_sorted(sorted: &[Card]) -> Self {
        use HandCategory::*;

        if let Some(hand) = straight_flush(sorted) {
            let category = if hand[0].rank() == Rank::Ten {
                RoyalFlush
            } else {
                StraightFlush
            };
            return Self {
                category,
                cards: hand,
            };
        }

        if let Some(group) = n_of_a_kind(sorted, 4) {
            return Self {
                category: FourOfAKind,
                cards: with_kickers(group, sorted),
            };
        }

        if let Some(hand) = two_groups(sorted, 3, 2) {
            return Self {
                category: FullHouse,
                cards: hand,
            };
        }

        if let Some(hand) = flush(sorted) {
            return Self {
                category: Flush,
                cards: hand,
            };
        }

        if let Some(hand) = straight(sorted) {
            return Self {
                category: Straight,
                cards: hand,
            };
        }

        if let Some(group) = n_of_a_kind(sorted, 3) {
            return Self {
                category: ThreeOfAKind,
                cards: with_kickers(group, sorted),
            };
        }

        if let Some(hand) = two_groups(sorted, 2, 2) {
            return Self {
                category: TwoPair,
                cards: with_kickers(hand, sorted),
            };
        }

        if let Some(group) = n_of_a_kind(sorted, 2) {
            return Self {
                category: OnePair,
                cards: with_kickers(group, sorted),
            };
        }

        // Fallback, the single highest card.
        Self {
            category: HighCard,
            cards: vec![sorted[sorted.len() - 1]],
        }
    }
}

/// Selects `n` cards from the highest rank that has at least `n` cards.
fn n_of_a_kind(sorted: &[Card], n: usize) -> Option<Vec<Card>> {
    let mut by_rank: AHashMap<Rank, Vec<Card>> = AHashMap::new();
    for card in sorted {
        by_rank.entry(card.rank()).or_default().push(*card);
    }

    // Explicit selection by rank, the map iteration order is arbitrary.
    let (_, group) = by_rank
        .iter()
        .filter(|(_, cards)| cards.len() >= n)
        .max_by_key(|(rank, _)| **rank)?;

    Some(group[group.len() - n..].to_vec())
}

/// Selects the highest group of `first` cards of one rank, then the highest
/// group of `second` cards from the remaining ranks: the full house and two
/// pair shapes. The stronger group goes last.
fn two_groups(sorted: &[Card], first: usize, second: usize) -> Option<Vec<Card>> {
    let first_group = n_of_a_kind(sorted, first)?;
    let remaining = without(sorted, &first_group);
    let second_group = n_of_a_kind(&remaining, second)?;

    let mut hand = second_group;
    hand.extend_from_slice(&first_group);
    Some(hand)
}

/// The five highest cards of a suit with at least five cards.
fn flush(sorted: &[Card]) -> Option<Vec<Card>> {
    let mut by_suit: AHashMap<Suit, Vec<Card>> = AHashMap::new();
    for card in sorted {
        by_suit.entry(card.suit()).or_default().push(*card);
    }

    // At most one suit can reach five cards out of up to seven.
    let group = by_suit.into_values().find(|cards| cards.len() >= HAND_SIZE)?;
    Some(group[group.len() - HAND_SIZE..].to_vec())
}

/// A straight within the five flush cards.
fn straight_flush(sorted: &[Card]) -> Option<Vec<Card>> {
    straight(&flush(sorted)?)
}

/// The best five card run of consecutive ranks, if any.
///
/// The rank-sorted cards are partitioned into maximal runs, the longest run
/// wins with ties going to the higher one. A run shorter than five cards may
/// still complete a straight through the Ace wraparound rules, where the Ace
/// also plays as rank 1: both King-Ace-2-3-4 and Queen-King-Ace-2-3 qualify.
fn straight(sorted: &[Card]) -> Option<Vec<Card>> {
    let run = longest_run(sorted);

    if run.len() >= HAND_SIZE {
        return Some(run[run.len() - HAND_SIZE..].to_vec());
    }

    let lowest = *sorted.first()?;
    let highest = *sorted.last()?;

    if run.first()?.rank() == Rank::Deuce && highest.rank() == Rank::Ace {
        // Wrap backward: the Ace plays as rank 1 below the deuce, and the
        // run keeps extending downward from the King until the first gap.
        let mut extended = vec![highest];
        let mut prev = Rank::Ace as i16;
        for card in sorted[..sorted.len() - 1].iter().rev() {
            match prev - card.rank() as i16 {
                0 => continue,
                1 => {
                    extended.insert(0, *card);
                    prev = card.rank() as i16;
                }
                _ => break,
            }
        }

        extended.extend_from_slice(&run);
        if extended.len() >= HAND_SIZE {
            return Some(extended[extended.len() - HAND_SIZE..].to_vec());
        }
    } else if run.last()?.rank() == Rank::Ace && lowest.rank() == Rank::Deuce {
        // Wrap forward: the deuce continues the run above the Ace, and the
        // run keeps extending upward until the first gap.
        let mut extended = run;
        let mut prev = 1i16;
        for card in sorted {
            match card.rank() as i16 - prev {
                0 => continue,
                1 => {
                    extended.push(*card);
                    prev = card.rank() as i16;
                }
                _ => break,
            }
        }

        if extended.len() >= HAND_SIZE {
            return Some(extended[..HAND_SIZE].to_vec());
        }
    }

    None
}

/// Partitions the rank-sorted cards into maximal runs of consecutive ranks
/// and returns the longest, preferring the higher run on equal length.
///
/// A duplicated rank neither breaks nor extends the current run.
fn longest_run(sorted: &[Card]) -> Vec<Card> {
    let mut best: Vec<Card> = Vec::new();
    let mut run: Vec<Card> = Vec::new();

    for card in sorted {
        let gap = run.last().map(|last| card.rank() as i16 - last.rank() as i16);
        match gap {
            Some(0) => continue,
            Some(1) | None => run.push(*card),
            _ => {
                if run.len() >= best.len() {
                    best = std::mem::take(&mut run);
                } else {
                    run.clear();
                }
                run.push(*card);
            }
        }
    }

    if run.len() >= best.len() {
        best = run;
    }

    best
}

/// Pads a group hand with the highest unused cards up to five, keeping the
/// kickers first in ascending rank so the decisive group stays last.
fn with_kickers(group: Vec<Card>, sorted: &[Card]) -> Vec<Card> {
    let mut remaining = without(sorted, &group);

    let missing = HAND_SIZE.saturating_sub(group.len());
    let start = remaining.len().saturating_sub(missing);
    let mut hand = remaining.split_off(start);
    hand.extend_from_slice(&group);
    hand
}

/// The sorted cards with one occurrence of each `used` card removed.
fn without(sorted: &[Card], used: &[Card]) -> Vec<Card> {
    let mut remaining = sorted.to_vec();
    for card in used {
        if let Some(pos) = remaining.iter().position(|c| c == card) {
            remaining.remove(pos);
        }
    }
    remaining
}
