//! Round state.
//!
//! `RoundState` is everything a presentation layer needs to draw the table:
//!
//! - The cards in table order (position = index)
//! - The pending selection (at most two face-up, unresolved cards)
//! - Counters: attempts and matched groups
//! - Flags: evaluation lock, reveal-all, shuffling, won
//! - The round generation
//!
//! The game owns the only mutable copy; observers get `&RoundState` or a
//! cloned snapshot.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, CardId, CardStatus};

/// Pending selection. Never longer than two.
pub type Selection = SmallVec<[CardId; 2]>;

/// State of one round, from deal to (optionally) win.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// Round tag; bumped on every restart.
    pub generation: u64,

    /// Cards in table order.
    pub cards: Vec<Card>,

    /// Face-up cards awaiting resolution, in flip order.
    pub selected: Selection,

    /// Completed two-card selections, matched or not.
    pub attempts: u32,

    pub matched_groups: u32,

    pub total_groups: u32,

    /// Set while a two-card selection is being resolved.
    pub is_evaluating: bool,

    pub is_revealed_all: bool,

    pub is_shuffling: bool,

    /// Monotonic within a round.
    pub is_won: bool,
}

impl RoundState {
    /// Create a fresh round over a dealt deck.
    #[must_use]
    pub fn new(generation: u64, cards: Vec<Card>) -> Self {
        let total_groups = u32::try_from(cards.len() / 2).unwrap_or(u32::MAX);
        Self {
            generation,
            cards,
            selected: Selection::new(),
            attempts: 0,
            matched_groups: 0,
            total_groups,
            is_evaluating: false,
            is_revealed_all: false,
            is_shuffling: false,
            is_won: false,
        }
    }

    /// Number of cards on the table.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Get a card by ID.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub(crate) fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.id == id)
    }

    /// Current table position of a card.
    #[must_use]
    pub fn position(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id == id)
    }

    /// Status of a card, if it exists.
    #[must_use]
    pub fn status(&self, id: CardId) -> Option<CardStatus> {
        self.card(id).map(|c| c.status)
    }

    /// Per-card status, ordered by card id.
    #[must_use]
    pub fn statuses(&self) -> Vec<(CardId, CardStatus)> {
        let mut out: Vec<_> = self.cards.iter().map(|c| (c.id, c.status)).collect();
        out.sort_by_key(|(id, _)| *id);
        out
    }

    /// Count cards in a given status.
    #[must_use]
    pub fn count_status(&self, status: CardStatus) -> usize {
        self.cards.iter().filter(|c| c.status == status).count()
    }

    /// `(matched, total)` pairs, for the score display.
    #[must_use]
    pub fn pairs_progress(&self) -> (u32, u32) {
        (self.matched_groups, self.total_groups)
    }

    /// Check if every group has been matched.
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.total_groups > 0 && self.matched_groups == self.total_groups
    }
}
