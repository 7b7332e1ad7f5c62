//! Card system: professions, catalog, and table cards.
//!
//! ## Key Types
//!
//! - `ProfessionId`: Identifier for a profession, also the pair's group key
//! - `Profession`: Static educational content shown on a match
//! - `Catalog`: Profession lookup, fixed for the lifetime of a game
//! - `Card`: Runtime card state (face, group, position-stable id)

pub mod definition;
pub mod instance;
pub mod registry;

pub use definition::{Profession, ProfessionId, SalaryRange};
pub use instance::{Card, CardId, CardStatus};
pub use registry::Catalog;
