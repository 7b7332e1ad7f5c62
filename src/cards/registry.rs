//! Profession catalog.
//!
//! The `Catalog` stores every profession available to a round, in the
//! order they were registered. It is read-only once the game starts and
//! provides fast lookup by `ProfessionId` for the info popup.

use rustc_hash::FxHashMap;
use serde::Deserialize;

use super::definition::{Profession, ProfessionId};
use crate::error::{CatalogError, CatalogResult};

const BUILTIN_CATALOG: &str = include_str!("../../data/professions.json");

/// Registry of profession entries.
///
/// ## Example
///
/// ```
/// use profession_memory::cards::{Catalog, Profession, ProfessionId};
///
/// let mut catalog = Catalog::new();
/// catalog.register(Profession::new(ProfessionId::new(1), "Medicina")).unwrap();
///
/// let found = catalog.get(ProfessionId::new(1)).unwrap();
/// assert_eq!(found.name, "Medicina");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    entries: Vec<Profession>,
    index: FxHashMap<ProfessionId, usize>,
}

/// On-disk shape: either a bare array or `{ "professions": [...] }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    List(Vec<Profession>),
    Wrapped { professions: Vec<Profession> },
}

impl Catalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a list of professions.
    ///
    /// Fails on duplicates, blank names, or an empty list.
    pub fn from_professions(professions: impl IntoIterator<Item = Profession>) -> CatalogResult<Self> {
        let mut catalog = Self::new();
        for profession in professions {
            catalog.register(profession)?;
        }
        catalog.ensure_playable()?;
        Ok(catalog)
    }

    /// Parse a catalog from JSON.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let professions = match serde_json::from_str::<CatalogDocument>(json)? {
            CatalogDocument::List(list) => list,
            CatalogDocument::Wrapped { professions } => professions,
        };
        Self::from_professions(professions)
    }

    /// The six-profession catalog shipped with the crate.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_json(BUILTIN_CATALOG).expect("bundled catalog is valid")
    }

    /// Register a profession.
    pub fn register(&mut self, profession: Profession) -> CatalogResult<()> {
        if profession.name.trim().is_empty() {
            return Err(CatalogError::BlankName(profession.id));
        }
        if self.index.contains_key(&profession.id) {
            return Err(CatalogError::DuplicateId(profession.id));
        }
        self.index.insert(profession.id, self.entries.len());
        self.entries.push(profession);
        Ok(())
    }

    /// Check the catalog can back a round.
    pub fn ensure_playable(&self) -> CatalogResult<()> {
        if self.entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(())
    }

    /// Get a profession by ID.
    #[must_use]
    pub fn get(&self, id: ProfessionId) -> Option<&Profession> {
        self.index.get(&id).map(|&i| &self.entries[i])
    }

    /// Check if a profession ID is registered.
    #[must_use]
    pub fn contains(&self, id: ProfessionId) -> bool {
        self.index.contains_key(&id)
    }

    /// Number of professions, which is the number of pairs per round.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Profession> {
        self.entries.iter()
    }
}
