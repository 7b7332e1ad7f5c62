//! Deck construction and reshuffling.

use rustc_hash::FxHashMap;

use crate::cards::{Card, CardId, CardStatus, Catalog, Profession, ProfessionId};
use crate::core::GameRng;
use crate::error::DeckError;

/// Deal a fresh deck: two cards per profession, uniformly permuted.
///
/// The profession list is duplicated, shuffled with Fisher-Yates, and the
/// resulting positions become the card ids, so ids are `0..2 * len`.
///
/// ```
/// use profession_memory::cards::Catalog;
/// use profession_memory::core::GameRng;
/// use profession_memory::deck;
///
/// let catalog = Catalog::builtin();
/// let cards = deck::build(&catalog, &mut GameRng::new(1));
/// assert_eq!(cards.len(), 2 * catalog.len());
/// ```
pub fn build(catalog: &Catalog, rng: &mut GameRng) -> Vec<Card> {
    let mut faces: Vec<&Profession> = catalog.iter().chain(catalog.iter()).collect();
    rng.shuffle(&mut faces);

    faces
        .into_iter()
        .enumerate()
        .map(|(position, profession)| Card::new(CardId::new(position as u32), profession))
        .collect()
}

/// Check that a prepared deck could have come out of [`build`].
///
/// Used when a caller lays out the table itself (fixed tutorials, replays,
/// tests).
pub fn validate(catalog: &Catalog, cards: &[Card]) -> Result<(), DeckError> {
    catalog.ensure_playable()?;

    let expected = catalog.len() * 2;
    if cards.len() != expected {
        return Err(DeckError::WrongSize {
            expected,
            found: cards.len(),
        });
    }

    let mut seen_ids = vec![false; cards.len()];
    let mut per_group: FxHashMap<ProfessionId, usize> = FxHashMap::default();

    for card in cards {
        if !catalog.contains(card.profession) {
            return Err(DeckError::UnknownProfession {
                card: card.id,
                profession: card.profession,
            });
        }
        if card.status != CardStatus::Hidden {
            return Err(DeckError::NotFaceDown(card.id));
        }
        match seen_ids.get_mut(card.id.raw() as usize) {
            Some(seen) if !*seen => *seen = true,
            _ => return Err(DeckError::BadCardIds(cards.len())),
        }
        *per_group.entry(card.profession).or_default() += 1;
    }

    // Sizes match and every card is known, so a bad group shows up as a count
    for profession in catalog.iter() {
        let count = per_group.get(&profession.id).copied().unwrap_or(0);
        if count != 2 {
            return Err(DeckError::UnbalancedGroup {
                profession: profession.id,
                count,
            });
        }
    }

    Ok(())
}

/// Re-permute the table in place.
///
/// Every card that is not matched is turned face down first. Matched cards
/// keep their status but move along with the rest. Card ids never change.
pub fn reshuffle(cards: &mut [Card], rng: &mut GameRng) {
    for card in cards.iter_mut() {
        if card.status != CardStatus::Matched {
            card.status = CardStatus::Hidden;
        }
    }
    rng.shuffle(cards);
}
