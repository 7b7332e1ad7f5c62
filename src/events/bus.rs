//! Event fan-out to subscribers.

use std::sync::mpsc::{self, Receiver, Sender};

use super::event::GameEvent;

/// Explicit subscription channel.
///
/// Each subscriber owns a `Receiver`; publishing clones the event into every
/// live channel. Subscribers that dropped their receiver are pruned on the
/// next publish.
#[derive(Debug, Default)]
pub struct EventBus {
    subscribers: Vec<Sender<GameEvent>>,
}

impl EventBus {
    /// Create a bus with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new subscription.
    pub fn subscribe(&mut self) -> Receiver<GameEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    /// Deliver an event to every live subscriber.
    pub fn publish(&mut self, event: &GameEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    /// Number of live subscriptions as of the last publish.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
