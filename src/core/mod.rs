//! Core engine types: configuration, RNG, and round state.

pub mod config;
pub mod rng;
pub mod state;

pub use config::GameConfig;
pub use rng::{GameRng, GameRngState};
pub use state::{RoundState, Selection};
