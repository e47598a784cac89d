// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown resolution.
//!
//! [resolve] compares the evaluated hands of every player still in the hand
//! and returns the winners, applying a cascade of tie-breaks when several
//! players share the strongest category.
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use kicker_cards::{Card, Rank};

use crate::eval::{EvaluatedHand, HandCategory};

/// Error returned when resolving a showdown with no eligible players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no eligible players at showdown")]
pub struct NoEligiblePlayersError;

/// A player's entry at showdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowdownEntry {
    hand: EvaluatedHand,
    cards: Vec<Card>,
    folded: bool,
}

impl ShowdownEntry {
    /// Creates an entry from a player's evaluated hand and the full card set
    /// it was evaluated from, the hole cards plus any face-up board cards.
    ///
    /// The full card set is only consulted by the deepest tie-breaks, which
    /// compare raw cards that may not contribute to the evaluated hand.
    pub fn new(hand: EvaluatedHand, cards: Vec<Card>, folded: bool) -> Self {
        Self {
            hand,
            cards,
            folded,
        }
    }

    /// The player's evaluated hand.
    pub fn hand(&self) -> &EvaluatedHand {
        &self.hand
    }

    /// The full card set the hand was evaluated from.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Whether the player has folded.
    pub fn folded(&self) -> bool {
        self.folded
    }
}

/// Resolves a showdown to the winning entries.
///
/// Returns the indices of the winners in `entries`, more than one on a split
/// pot. Folded entries never win.
///
/// Calling with no non-folded entry is a caller defect reported as
/// [NoEligiblePlayersError]: every showdown must have at least one player
/// left in the hand.
pub fn resolve(entries: &[ShowdownEntry]) -> Result<Vec<usize>, NoEligiblePlayersError> {
    let best = entries
        .iter()
        .filter(|e| !e.folded)
        .map(|e| e.hand.category())
        .max()
        .ok_or(NoEligiblePlayersError)?;

    let mut contenders = entries
        .iter()
        .enumerate()
        .filter(|(_, e)| !e.folded && e.hand.category() == best)
        .map(|(idx, _)| idx)
        .collect::<Vec<_>>();

    if contenders.len() > 1 {
        debug!("showdown tie-break, {} {best} hands", contenders.len());
        break_ties(entries, &mut contenders, best);
    }

    Ok(contenders)
}

/// Narrows tied contenders with the cascading comparisons.
fn break_ties(entries: &[ShowdownEntry], contenders: &mut Vec<usize>, category: HandCategory) {
    // For straights the run anchor discriminates: a wrapped King-Ace-2-3-4
    // beats 2-3-4-5-6 on its first card even though its last card is weaker.
    // Every other category is decided by the dominant group kept at the end
    // of the hand.
    let card_index = if matches!(
        category,
        HandCategory::Straight | HandCategory::StraightFlush
    ) {
        0
    } else {
        entries[contenders[0]].hand().cards().len() - 1
    };

    retain_max_at(entries, contenders, card_index);

    if contenders.len() > 1 && card_index != 0 {
        // Second pass on the opposite end of the hand before reaching for
        // the raw cards.
        retain_max_at(entries, contenders, 0);
    }

    if contenders.len() > 1 {
        retain_max_by(contenders, |idx| max_rank(entries[*idx].cards()));
    }

    if contenders.len() > 1 {
        retain_max_by(contenders, |idx| min_rank(entries[*idx].cards()));
    }

    if contenders.len() > 1 {
        debug!("split pot between {} players", contenders.len());
    }
}

/// Keeps the contenders with the highest rank at `card_index` of their hand.
fn retain_max_at(entries: &[ShowdownEntry], contenders: &mut Vec<usize>, card_index: usize) {
    retain_max_by(contenders, |idx| {
        entries[*idx]
            .hand()
            .cards()
            .get(card_index)
            .map(|c| c.rank())
    });
}

/// Keeps the contenders whose key matches the maximum key.
fn retain_max_by<K, F>(contenders: &mut Vec<usize>, key: F)
where
    K: Ord + Copy,
    F: Fn(&usize) -> K,
{
    if let Some(best) = contenders.iter().map(&key).max() {
        contenders.retain(|idx| key(idx) == best);
    }
}

/// The highest rank in the player's full card set.
fn max_rank(cards: &[Card]) -> Option<Rank> {
    cards.iter().map(|c| c.rank()).max()
}

/// The lowest rank in the player's full card set.
fn min_rank(cards: &[Card]) -> Option<Rank> {
    cards.iter().map(|c| c.rank()).min()
}
