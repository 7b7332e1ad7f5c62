//! Scheduled continuations.
//!
//! Every delayed effect of the game (pair resolution, win announcement,
//! shuffle completion) is a `Continuation` queued on a `Scheduler`. The
//! scheduler owns a virtual clock; the embedding layer moves it forward.
//!
//! ## Staleness
//!
//! Each entry carries a `Ticket` captured when it was scheduled. The game
//! compares the ticket with its live round generation and selection epoch
//! when the entry fires, and silently drops it on mismatch. A restart or a
//! reveal toggle therefore never has to hunt down the timers it outdates.

mod queue;

pub use queue::{Continuation, Scheduled, Scheduler, Ticket, TimerId};
