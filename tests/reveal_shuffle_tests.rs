//! Reveal-all and shuffle-now tests.
//!
//! Both commands discard the pending selection. These tests pin down what
//! happens to a resolution that was already scheduled when they ran.

use std::time::Duration;

use profession_memory::{
    Card, CardId, CardStatus, Catalog, GameConfig, GameEvent, GameRng, MemoryGame, ProfessionId,
};

const LAYOUT: [u32; 12] = [3, 5, 0, 1, 2, 4, 3, 5, 0, 1, 2, 4];

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn fixed_game() -> MemoryGame {
    let _ = env_logger::builder().is_test(true).try_init();
    let catalog = Catalog::builtin();
    let cards: Vec<Card> = LAYOUT
        .iter()
        .enumerate()
        .map(|(i, &p)| Card::new(CardId::new(i as u32), catalog.get(ProfessionId::new(p)).unwrap()))
        .collect();
    MemoryGame::with_deck(catalog, GameConfig::default(), GameRng::new(1), cards).unwrap()
}

// === Reveal all ===

/// Two toggles in a row restore every card's status exactly.
#[test]
fn test_toggle_twice_restores_statuses() {
    let mut game = fixed_game();
    game.request_flip(CardId::new(0));
    game.request_flip(CardId::new(6));
    game.advance(ms(500));

    let before = game.state().statuses();

    game.toggle_reveal_all();
    assert!(game.state().is_revealed_all);
    assert_eq!(game.state().count_status(CardStatus::Revealed), 10);

    game.toggle_reveal_all();
    assert!(!game.state().is_revealed_all);
    assert_eq!(game.state().statuses(), before);
}

/// A lone selected card is discarded by the toggle and ends up face down.
#[test]
fn test_toggle_twice_discards_single_selection() {
    let mut game = fixed_game();
    game.request_flip(CardId::new(0));
    assert_eq!(game.state().status(CardId::new(0)), Some(CardStatus::Revealed));

    game.toggle_reveal_all();
    assert!(game.state().selected.is_empty());

    game.toggle_reveal_all();
    let state = game.state();
    assert_eq!(state.status(CardId::new(0)), Some(CardStatus::Hidden));
    assert!(state.selected.is_empty());
    assert!(!state.is_evaluating);
    assert_eq!(state.attempts, 0);
    assert_eq!(state.count_status(CardStatus::Hidden), 12);

    // The card can be picked again
    game.request_flip(CardId::new(0));
    assert_eq!(game.state().selected.as_slice(), &[CardId::new(0)]);
}

/// Matched cards are never touched by the toggle.
#[test]
fn test_toggle_leaves_matched_cards() {
    let mut game = fixed_game();
    game.request_flip(CardId::new(1));
    game.request_flip(CardId::new(7));
    game.advance(ms(500));

    game.toggle_reveal_all();
    assert_eq!(game.state().status(CardId::new(1)), Some(CardStatus::Matched));
    game.toggle_reveal_all();
    assert_eq!(game.state().status(CardId::new(7)), Some(CardStatus::Matched));
    assert_eq!(game.state().count_status(CardStatus::Matched), 2);
}

/// Toggling during a mismatch cancels the pending flip-back.
#[test]
fn test_toggle_cancels_pending_mismatch() {
    let mut game = fixed_game();
    game.request_flip(CardId::new(0));
    game.request_flip(CardId::new(1));

    game.advance(ms(100));
    game.toggle_reveal_all();
    assert!(game.state().selected.is_empty());
    assert!(!game.state().is_evaluating);

    // The scheduled flip-back comes due but is stale
    assert_eq!(game.advance(ms(2000)), 0);
    assert_eq!(game.state().status(CardId::new(0)), Some(CardStatus::Revealed));
    assert_eq!(game.state().status(CardId::new(1)), Some(CardStatus::Revealed));
    assert_eq!(game.state().attempts, 1);
}

/// Toggling during a match cancels the lock-in; the pair is not scored.
#[test]
fn test_toggle_cancels_pending_match() {
    let mut game = fixed_game();
    game.request_flip(CardId::new(0));
    game.request_flip(CardId::new(6));
    game.toggle_reveal_all();
    game.toggle_reveal_all();

    game.advance(ms(2000));
    assert_eq!(game.state().matched_groups, 0);
    assert_eq!(game.state().status(CardId::new(0)), Some(CardStatus::Hidden));
    assert_eq!(game.state().status(CardId::new(6)), Some(CardStatus::Hidden));

    // The pair can be found again afterwards
    game.request_flip(CardId::new(0));
    game.request_flip(CardId::new(6));
    game.advance(ms(500));
    assert_eq!(game.state().matched_groups, 1);
    assert_eq!(game.state().attempts, 2);
}

/// While everything is revealed there is nothing left to flip.
#[test]
fn test_no_flips_while_revealed() {
    let mut game = fixed_game();
    game.toggle_reveal_all();

    let before = game.snapshot();
    game.request_flip(CardId::new(3));
    assert_eq!(game.snapshot(), before);
}

/// The toggle is ignored during a shuffle.
#[test]
fn test_toggle_ignored_while_shuffling() {
    let mut game = fixed_game();
    game.shuffle_now();

    let before = game.snapshot();
    game.toggle_reveal_all();
    assert_eq!(game.snapshot(), before);
}

/// Each toggle announces the new mode.
#[test]
fn test_toggle_events() {
    let mut game = fixed_game();
    let events = game.subscribe();

    game.toggle_reveal_all();
    game.toggle_reveal_all();

    let received: Vec<_> = events.try_iter().collect();
    assert_eq!(
        received,
        vec![
            GameEvent::RevealToggled { revealed: true },
            GameEvent::RevealToggled { revealed: false },
        ]
    );
}

// === Shuffle now ===

/// The shuffle locks the table, then hides and re-permutes it.
#[test]
fn test_shuffle_transition() {
    let mut game = fixed_game();
    let events = game.subscribe();

    game.request_flip(CardId::new(2));
    game.request_flip(CardId::new(8));
    game.advance(ms(500));
    game.request_flip(CardId::new(3));

    game.shuffle_now();
    assert!(game.state().is_shuffling);
    // Nothing moves until the transition ends
    assert_eq!(game.state().status(CardId::new(3)), Some(CardStatus::Revealed));

    game.advance(ms(800));
    let state = game.state();
    assert!(!state.is_shuffling);
    assert!(state.selected.is_empty());
    assert!(!state.is_evaluating);
    assert!(!state.is_revealed_all);
    assert_eq!(state.status(CardId::new(3)), Some(CardStatus::Hidden));
    assert_eq!(state.status(CardId::new(2)), Some(CardStatus::Matched));
    assert_eq!(state.status(CardId::new(8)), Some(CardStatus::Matched));
    assert_eq!(state.count_status(CardStatus::Hidden), 10);

    // Same cards, still a permutation of 0..12
    let mut ids: Vec<_> = state.cards.iter().map(|c| c.id.raw()).collect();
    ids.sort_unstable();
    assert_eq!(ids, (0..12).collect::<Vec<_>>());

    let received: Vec<_> = events.try_iter().collect();
    assert!(received.contains(&GameEvent::ShuffleStarted));
    assert_eq!(received.last(), Some(&GameEvent::ShuffleFinished));
}

/// The shuffle actually moves cards around.
#[test]
fn test_shuffle_changes_order() {
    let mut game = fixed_game();
    let before: Vec<_> = game.state().cards.iter().map(|c| c.id).collect();

    game.shuffle_now();
    game.settle();

    let after: Vec<_> = game.state().cards.iter().map(|c| c.id).collect();
    assert_ne!(before, after);
}

/// A second shuffle request during the transition is ignored.
#[test]
fn test_shuffle_not_reentrant() {
    let mut game = fixed_game();
    game.shuffle_now();
    game.advance(ms(400));
    game.shuffle_now();

    assert_eq!(game.pending_timers(), 1);
    game.advance(ms(400));
    assert!(!game.state().is_shuffling);
    assert_eq!(game.pending_timers(), 0);
}

/// Shuffling out of reveal-all mode turns everything back down.
#[test]
fn test_shuffle_clears_reveal_all() {
    let mut game = fixed_game();
    game.toggle_reveal_all();
    game.shuffle_now();
    game.settle();

    assert!(!game.state().is_revealed_all);
    assert_eq!(game.state().count_status(CardStatus::Revealed), 0);
}

/// A flip-back scheduled before a shuffle cannot disturb flips made after it.
#[test]
fn test_stale_mismatch_after_shuffle() {
    let mut game = fixed_game();
    game.request_flip(CardId::new(0));
    game.request_flip(CardId::new(1));
    game.shuffle_now();

    // Shuffle ends at 800 ms; the flip-back would fire at 1200 ms
    game.advance(ms(900));
    assert!(!game.state().is_shuffling);
    game.request_flip(CardId::new(4));

    game.advance(ms(400));
    let state = game.state();
    assert_eq!(state.selected.as_slice(), &[CardId::new(4)]);
    assert_eq!(state.status(CardId::new(4)), Some(CardStatus::Revealed));
    assert_eq!(state.attempts, 1);
}

/// A match already scheduled still lands if it comes due mid-shuffle.
#[test]
fn test_match_resolves_during_shuffle() {
    let mut game = fixed_game();
    game.request_flip(CardId::new(5));
    game.request_flip(CardId::new(11));
    game.shuffle_now();

    game.advance(ms(500));
    assert!(game.state().is_shuffling);
    assert_eq!(game.state().matched_groups, 1);

    game.advance(ms(300));
    assert_eq!(game.state().status(CardId::new(5)), Some(CardStatus::Matched));
    assert_eq!(game.state().status(CardId::new(11)), Some(CardStatus::Matched));
}
