//! Deck builder.
//!
//! Turns a `Catalog` of G professions into 2×G face-down cards in a
//! uniformly random order, and re-permutes a table for shuffle-now.
//! All randomness comes from the injected `GameRng`.

pub mod builder;

pub use builder::{build, reshuffle, validate};
