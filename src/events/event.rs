//! Game event types.
//!
//! Events describe what just happened to the round. Presentation layers use
//! them as change notifications; the info popup keys off `PairMatched` and
//! the congratulations screen off `GameWon`.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, ProfessionId};

/// Something that happened to the round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new deal is on the table.
    RoundStarted { generation: u64, total_groups: u32 },

    /// A card was turned face up by a flip request.
    CardFlipped { card: CardId },

    /// A pair locked in.
    PairMatched {
        profession: ProfessionId,
        cards: [CardId; 2],
    },

    /// A wrong pair turned back face down.
    PairMissed { cards: [CardId; 2] },

    /// Reveal-all switched on or off.
    RevealToggled { revealed: bool },

    /// Shuffle transition began; input is locked.
    ShuffleStarted,

    /// Shuffle transition ended with the new order applied.
    ShuffleFinished,

    /// Every pair is matched.
    GameWon { attempts: u32 },
}

impl GameEvent {
    /// Short machine-friendly name, used in logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            GameEvent::RoundStarted { .. } => "round_started",
            GameEvent::CardFlipped { .. } => "card_flipped",
            GameEvent::PairMatched { .. } => "pair_matched",
            GameEvent::PairMissed { .. } => "pair_missed",
            GameEvent::RevealToggled { .. } => "reveal_toggled",
            GameEvent::ShuffleStarted => "shuffle_started",
            GameEvent::ShuffleFinished => "shuffle_finished",
            GameEvent::GameWon { .. } => "game_won",
        }
    }
}
