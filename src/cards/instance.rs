//! Card instances - runtime card state.
//!
//! A `Card` is one face of a pair on the table. Its `id` is stable for the
//! whole round even when a reshuffle moves it to another position; the
//! position is simply its index in `RoundState::cards`.
//!
//! ## Status transitions
//!
//! - `Hidden -> Revealed` on an accepted flip or a reveal-all
//! - `Revealed -> Hidden` on a mismatch, a hide-all, or a reshuffle
//! - `Revealed -> Matched` when its pair resolves
//!
//! `Matched` is terminal until the next round.

use serde::{Deserialize, Serialize};

use super::definition::{Profession, ProfessionId};

/// Identifier of a card within a round.
///
/// Ids of a round are a permutation of `0..card_count`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Face state of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardStatus {
    /// Face down.
    #[default]
    Hidden,
    /// Face up, not yet paired.
    Revealed,
    /// Pair found.
    Matched,
}

/// A card on the table.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,

    /// Group key shared with exactly one other card.
    pub profession: ProfessionId,

    /// Text printed on the face.
    pub label: String,

    pub status: CardStatus,
}

impl Card {
    /// Create a face-down card for a profession.
    #[must_use]
    pub fn new(id: CardId, profession: &Profession) -> Self {
        Self {
            id,
            profession: profession.id,
            label: profession.name.clone(),
            status: CardStatus::Hidden,
        }
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.status == CardStatus::Hidden
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.status == CardStatus::Matched
    }

    /// Check if two cards belong to the same group.
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.id != other.id && self.profession == other.profession
    }
}
