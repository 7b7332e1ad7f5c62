//! Game configuration.
//!
//! `GameConfig` holds the pacing of the round: how long a found pair stays
//! face up before it locks in, how long a wrong pair stays visible, how long
//! the win announcement waits, and how long a reshuffle animates. It also
//! carries an optional seed for reproducible deals.
//!
//! Every field has a default, so a JSON document only needs the values it
//! wants to override.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigResult;

/// Default delay before a found pair is marked matched.
pub const DEFAULT_MATCH_DELAY_MS: u64 = 500;
/// Default delay before a wrong pair flips back.
pub const DEFAULT_MISMATCH_DELAY_MS: u64 = 1200;
/// Default delay between the last match and the win.
pub const DEFAULT_WIN_DELAY_MS: u64 = 1000;
/// Default duration of the shuffle transition.
pub const DEFAULT_SHUFFLE_DELAY_MS: u64 = 800;

/// Game pacing and seeding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Delay before a found pair resolves to `Matched`.
    pub match_delay_ms: u64,

    /// Delay before a wrong pair returns to `Hidden`.
    /// Long enough for a player to memorize both faces.
    pub mismatch_delay_ms: u64,

    /// Delay after the final match before the game is won.
    pub win_delay_ms: u64,

    /// Length of the reshuffle transition; input is locked meanwhile.
    pub shuffle_delay_ms: u64,

    /// Seed for the deck RNG. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            match_delay_ms: DEFAULT_MATCH_DELAY_MS,
            mismatch_delay_ms: DEFAULT_MISMATCH_DELAY_MS,
            win_delay_ms: DEFAULT_WIN_DELAY_MS,
            shuffle_delay_ms: DEFAULT_SHUFFLE_DELAY_MS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse a configuration from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the match resolution delay.
    #[must_use]
    pub fn with_match_delay(mut self, delay: Duration) -> Self {
        self.match_delay_ms = duration_ms(delay);
        self
    }

    /// Set the mismatch reversion delay.
    #[must_use]
    pub fn with_mismatch_delay(mut self, delay: Duration) -> Self {
        self.mismatch_delay_ms = duration_ms(delay);
        self
    }

    /// Set the win announcement delay.
    #[must_use]
    pub fn with_win_delay(mut self, delay: Duration) -> Self {
        self.win_delay_ms = duration_ms(delay);
        self
    }

    /// Set the shuffle transition length.
    #[must_use]
    pub fn with_shuffle_delay(mut self, delay: Duration) -> Self {
        self.shuffle_delay_ms = duration_ms(delay);
        self
    }

    /// Fix the deck seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn match_delay(&self) -> Duration {
        Duration::from_millis(self.match_delay_ms)
    }

    #[must_use]
    pub fn mismatch_delay(&self) -> Duration {
        Duration::from_millis(self.mismatch_delay_ms)
    }

    #[must_use]
    pub fn win_delay(&self) -> Duration {
        Duration::from_millis(self.win_delay_ms)
    }

    #[must_use]
    pub fn shuffle_delay(&self) -> Duration {
        Duration::from_millis(self.shuffle_delay_ms)
    }
}

/// Whole milliseconds, saturating at `u64::MAX`.
pub(crate) fn duration_ms(delay: Duration) -> u64 {
    u64::try_from(delay.as_millis()).unwrap_or(u64::MAX)
}
