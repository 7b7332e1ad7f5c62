//! Game events and subscriptions.
//!
//! The state machine never calls into the UI. It publishes `GameEvent`s on
//! an `EventBus`, and collaborators (board renderer, info popup,
//! congratulations screen) read them from their own `Receiver`.
//!
//! ## Example
//!
//! ```
//! use profession_memory::events::{EventBus, GameEvent};
//!
//! let mut bus = EventBus::new();
//! let popup = bus.subscribe();
//!
//! bus.publish(&GameEvent::GameWon { attempts: 9 });
//!
//! assert_eq!(popup.try_recv().unwrap(), GameEvent::GameWon { attempts: 9 });
//! ```

mod bus;
mod event;

pub use bus::EventBus;
pub use event::GameEvent;
