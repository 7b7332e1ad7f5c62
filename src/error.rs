//! Error types for fallible construction.
//!
//! Game commands never fail; only loading a catalog or a configuration can.

use thiserror::Error;

use crate::cards::{CardId, ProfessionId};

/// Profession catalog errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A round needs at least one pair
    #[error("Catalog has no professions")]
    Empty,

    /// Two entries share an id, which would put four cards in one group
    #[error("Duplicate profession id: {0}")]
    DuplicateId(ProfessionId),

    /// Entry has an empty display name
    #[error("Profession {0} has a blank name")]
    BlankName(ProfessionId),

    /// Malformed catalog document
    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors from setting up a round with a caller-supplied deck.
#[derive(Debug, Error)]
pub enum DeckError {
    /// The catalog itself cannot back a round
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Deck must hold exactly two cards per profession
    #[error("Deck has {found} cards, expected {expected}")]
    WrongSize { expected: usize, found: usize },

    /// Card refers to a profession missing from the catalog
    #[error("Card {card} refers to unknown {profession}")]
    UnknownProfession { card: CardId, profession: ProfessionId },

    /// A profession appears other than twice
    #[error("{profession} appears {count} times, expected 2")]
    UnbalancedGroup { profession: ProfessionId, count: usize },

    /// Card ids must be a permutation of 0..N
    #[error("Card ids are not a permutation of 0..{0}")]
    BadCardIds(usize),

    /// New rounds start face down
    #[error("Card {0} is not face down")]
    NotFaceDown(CardId),
}

/// Game configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Malformed configuration document
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;
