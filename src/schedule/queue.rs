//! Virtual-clock timer queue.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::config::duration_ms;

/// Unique identifier for a scheduled continuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimerId(pub u64);

impl TimerId {
    /// Create a new timer ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TimerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timer({})", self.0)
    }
}

/// Validity tag captured when a continuation is scheduled.
///
/// `generation` ties it to a round. `epoch`, when present, also ties it to
/// one selection window: anything that discards the pending selection bumps
/// the epoch and orphans the resolution scheduled for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub generation: u64,
    pub epoch: Option<u64>,
}

impl Ticket {
    /// Valid for the whole round.
    #[must_use]
    pub const fn round(generation: u64) -> Self {
        Self {
            generation,
            epoch: None,
        }
    }

    /// Valid only while the selection epoch is unchanged.
    #[must_use]
    pub const fn selection(generation: u64, epoch: u64) -> Self {
        Self {
            generation,
            epoch: Some(epoch),
        }
    }

    /// Check the ticket against the live tags.
    #[must_use]
    pub fn is_current(&self, generation: u64, epoch: u64) -> bool {
        self.generation == generation && self.epoch.map_or(true, |e| e == epoch)
    }
}

/// Deferred state transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Continuation {
    /// Lock in or flip back a two-card selection.
    ResolvePair { first: CardId, second: CardId },

    /// Declare the round won.
    DeclareWin,

    /// End the shuffle transition and apply the new order.
    FinishShuffle,
}

/// A continuation waiting for its due time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scheduled {
    pub id: TimerId,

    /// Virtual time (ms) at which it fires.
    pub due_ms: u64,

    pub ticket: Ticket,

    pub task: Continuation,
}

/// Timer queue over a virtual millisecond clock.
///
/// Nothing fires on its own: the owner moves time forward and pops due
/// entries one at a time, in due order, ties broken by scheduling order.
/// Popping an entry moves the clock to its due time, so continuations that
/// schedule follow-ups measure their delay from the right instant.
///
/// ## Usage
///
/// ```
/// use std::time::Duration;
/// use profession_memory::schedule::{Continuation, Scheduler, Ticket};
///
/// let mut timers = Scheduler::new();
/// timers.schedule(Duration::from_millis(800), Ticket::round(0), Continuation::FinishShuffle);
/// timers.schedule(Duration::from_millis(500), Ticket::round(0), Continuation::DeclareWin);
///
/// let first = timers.pop_due(1_000).unwrap();
/// assert_eq!(first.task, Continuation::DeclareWin);
/// assert_eq!(timers.now_ms(), 500);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Scheduler {
    now_ms: u64,
    queue: Vec<Scheduled>,
    next_id: u64,
}

impl Scheduler {
    /// Create an empty queue at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of continuations waiting, stale ones included.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Due time of the next continuation.
    #[must_use]
    pub fn next_due_ms(&self) -> Option<u64> {
        self.queue.iter().map(|s| s.due_ms).min()
    }

    /// Schedule a continuation `delay` from now.
    pub fn schedule(&mut self, delay: Duration, ticket: Ticket, task: Continuation) -> TimerId {
        let id = TimerId::new(self.next_id);
        self.next_id += 1;

        self.queue.push(Scheduled {
            id,
            due_ms: self.now_ms.saturating_add(duration_ms(delay)),
            ticket,
            task,
        });
        id
    }

    /// Remove and return the earliest continuation due at or before `until_ms`.
    ///
    /// Moves the clock to its due time. Returns `None` when nothing is due.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<Scheduled> {
        let index = self
            .queue
            .iter()
            .enumerate()
            .filter(|(_, s)| s.due_ms <= until_ms)
            .min_by_key(|(_, s)| (s.due_ms, s.id))
            .map(|(i, _)| i)?;

        let entry = self.queue.remove(index);
        self.now_ms = self.now_ms.max(entry.due_ms);
        Some(entry)
    }

    /// Move the clock forward. Never moves it back.
    pub fn advance_clock(&mut self, to_ms: u64) {
        self.now_ms = self.now_ms.max(to_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_ticket_round_ignores_epoch() {
        let ticket = Ticket::round(3);
        assert!(ticket.is_current(3, 0));
        assert!(ticket.is_current(3, 99));
        assert!(!ticket.is_current(4, 0));
    }

    #[test]
    fn test_ticket_selection_checks_both() {
        let ticket = Ticket::selection(1, 5);
        assert!(ticket.is_current(1, 5));
        assert!(!ticket.is_current(1, 6));
        assert!(!ticket.is_current(2, 5));
    }

    #[test]
    fn test_pop_in_due_order() {
        let mut timers = Scheduler::new();
        timers.schedule(ms(1200), Ticket::round(0), Continuation::FinishShuffle);
        timers.schedule(ms(500), Ticket::round(0), Continuation::DeclareWin);

        assert_eq!(timers.next_due_ms(), Some(500));
        assert_eq!(timers.pop_due(2000).unwrap().due_ms, 500);
        assert_eq!(timers.pop_due(2000).unwrap().due_ms, 1200);
        assert!(timers.pop_due(2000).is_none());
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn test_ties_fire_in_scheduling_order() {
        let mut timers = Scheduler::new();
        let a = timers.schedule(ms(100), Ticket::round(0), Continuation::DeclareWin);
        let b = timers.schedule(ms(100), Ticket::round(0), Continuation::FinishShuffle);

        assert_eq!(timers.pop_due(100).unwrap().id, a);
        assert_eq!(timers.pop_due(100).unwrap().id, b);
    }

    #[test]
    fn test_not_due_yet() {
        let mut timers = Scheduler::new();
        timers.schedule(ms(500), Ticket::round(0), Continuation::DeclareWin);

        assert!(timers.pop_due(499).is_none());
        assert_eq!(timers.pending(), 1);
        assert_eq!(timers.now_ms(), 0);
    }

    #[test]
    fn test_delay_measured_from_current_time() {
        let mut timers = Scheduler::new();
        timers.advance_clock(1000);
        timers.schedule(ms(250), Ticket::round(0), Continuation::DeclareWin);

        assert_eq!(timers.next_due_ms(), Some(1250));
    }

    #[test]
    fn test_clock_never_moves_back() {
        let mut timers = Scheduler::new();
        timers.advance_clock(700);
        timers.advance_clock(300);
        assert_eq!(timers.now_ms(), 700);
    }
}
