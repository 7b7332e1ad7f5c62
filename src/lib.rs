//! # profession-memory
//!
//! A card-pairing memory game engine where every pair is a profession and
//! every match is a small lesson about it.
//!
//! ## Design Principles
//!
//! 1. **Explicit state**: One `RoundState`, mutated only through the
//!    game's commands. Presentation layers read it and subscribe to events.
//!
//! 2. **Deterministic time**: Delays are continuations on a virtual clock
//!    that the embedder advances. Tests step time exactly.
//!
//! 3. **Stale-proof timers**: Every continuation carries the round
//!    generation (and, for pair resolution, the selection epoch) it was
//!    scheduled under, and is dropped if either has moved on.
//!
//! 4. **Injected randomness**: Deals come from a seeded `GameRng`.
//!
//! ## Modules
//!
//! - `core`: Configuration, RNG, round state
//! - `cards`: Professions, catalog, table cards
//! - `deck`: Deal and reshuffle
//! - `schedule`: Virtual-clock continuation queue
//! - `events`: Game events and subscriptions
//! - `feedback`: Best-effort match sound hook
//! - `game`: The state machine

pub mod cards;
pub mod core;
pub mod deck;
pub mod error;
pub mod events;
pub mod feedback;
pub mod game;
pub mod schedule;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, GameRngState, RoundState, Selection};

pub use crate::cards::{Card, CardId, CardStatus, Catalog, Profession, ProfessionId, SalaryRange};

pub use crate::error::{CatalogError, CatalogResult, ConfigError, ConfigResult, DeckError};

pub use crate::events::{EventBus, GameEvent};

pub use crate::feedback::{FeedbackError, MatchFeedback, Silent};

pub use crate::game::{FlipRejection, MemoryGame};

pub use crate::schedule::{Continuation, Scheduler, Ticket, TimerId};
