//! Game state machine.
//!
//! `MemoryGame` drives one table of profession pairs:
//!
//! - **Flip**: turn a face-down card up, at most two at a time
//! - **Resolve**: after a short delay, lock a pair in or turn it back
//! - **Win**: once every pair is matched, announce it after a pause
//! - **Reveal all / hide all**: a study aid that cancels the pending pair
//! - **Shuffle now**: re-permute the table behind a short transition
//! - **Restart**: deal a brand-new round
//!
//! There is a single thread of control. Delays are scheduled continuations
//! run by [`MemoryGame::advance`], each checked against the round
//! generation and selection epoch it was scheduled under.

mod machine;

pub use machine::{FlipRejection, MemoryGame};
