//! The memory game state machine.

use std::time::Duration;

use log::{debug, info, trace};

use crate::cards::{Card, CardId, CardStatus, Catalog, Profession, ProfessionId};
use crate::core::config::duration_ms;
use crate::core::{GameConfig, GameRng, GameRngState, RoundState};
use crate::deck;
use crate::error::{CatalogResult, DeckError};
use crate::events::{EventBus, GameEvent};
use crate::feedback::{self, MatchFeedback, Silent};
use crate::schedule::{Continuation, Scheduled, Scheduler, Ticket};

/// Why a flip request was ignored.
///
/// Rejections are a debounce policy, not failures: `request_flip` drops them
/// silently. UIs can ask `can_flip` ahead of time to dim cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipRejection {
    /// A two-card selection is being resolved.
    Evaluating,
    /// The shuffle transition is running.
    Shuffling,
    /// Two cards are already face up.
    SelectionFull,
    /// No card with that id in this round.
    UnknownCard,
    /// The card is already face up or matched.
    NotHidden(CardStatus),
}

impl std::fmt::Display for FlipRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlipRejection::Evaluating => write!(f, "pair under evaluation"),
            FlipRejection::Shuffling => write!(f, "shuffle in progress"),
            FlipRejection::SelectionFull => write!(f, "two cards already selected"),
            FlipRejection::UnknownCard => write!(f, "no such card"),
            FlipRejection::NotHidden(status) => write!(f, "card is {:?}", status),
        }
    }
}

/// Profession memory game.
///
/// Owns the round state, the deck RNG and the timer queue. All mutation
/// goes through the commands below; delayed effects run when the owner
/// moves time forward with [`advance`](Self::advance).
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use profession_memory::{Catalog, GameConfig, MemoryGame, CardStatus};
///
/// let mut game = MemoryGame::new(Catalog::builtin(), GameConfig::default().with_seed(7)).unwrap();
///
/// // Flip the two cards of the first profession on the table
/// let first = game.state().cards[0].clone();
/// let partner = game
///     .state()
///     .cards
///     .iter()
///     .find(|c| c.pairs_with(&first))
///     .unwrap()
///     .id;
///
/// game.request_flip(first.id);
/// game.request_flip(partner);
/// assert!(game.state().is_evaluating);
///
/// game.advance(Duration::from_millis(500));
/// assert_eq!(game.state().status(partner), Some(CardStatus::Matched));
/// assert_eq!(game.state().matched_groups, 1);
/// ```
pub struct MemoryGame {
    catalog: Catalog,
    config: GameConfig,
    rng: GameRng,
    state: RoundState,
    timers: Scheduler,
    events: EventBus,
    feedback: Box<dyn MatchFeedback>,

    /// Selection window tag; bumped whenever the pending selection is
    /// discarded without resolving.
    epoch: u64,
}

impl std::fmt::Debug for MemoryGame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryGame")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("timers", &self.timers)
            .field("epoch", &self.epoch)
            .finish_non_exhaustive()
    }
}

impl MemoryGame {
    /// Start a game, seeding the deck from `config.seed` or the OS.
    pub fn new(catalog: Catalog, config: GameConfig) -> CatalogResult<Self> {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::with_rng(catalog, config, rng)
    }

    /// Start a game with an injected RNG. `config.seed` is ignored.
    pub fn with_rng(catalog: Catalog, config: GameConfig, mut rng: GameRng) -> CatalogResult<Self> {
        catalog.ensure_playable()?;
        let cards = deck::build(&catalog, &mut rng);
        Ok(Self::assemble(catalog, config, rng, cards))
    }

    /// Start a game on a caller-laid table.
    ///
    /// The deck must look like a fresh deal: two face-down cards per
    /// catalog entry, ids `0..N`. Later restarts deal from `rng`.
    pub fn with_deck(
        catalog: Catalog,
        config: GameConfig,
        rng: GameRng,
        cards: Vec<Card>,
    ) -> Result<Self, DeckError> {
        deck::validate(&catalog, &cards)?;
        Ok(Self::assemble(catalog, config, rng, cards))
    }

    fn assemble(catalog: Catalog, config: GameConfig, rng: GameRng, cards: Vec<Card>) -> Self {
        let state = RoundState::new(0, cards);
        info!(
            "Dealt {} cards ({} pairs), seed {}",
            state.card_count(),
            state.total_groups,
            rng.seed()
        );
        Self {
            catalog,
            config,
            rng,
            state,
            timers: Scheduler::new(),
            events: EventBus::new(),
            feedback: Box::new(Silent),
            epoch: 0,
        }
    }

    /// Attach the match-sound collaborator (builder pattern).
    #[must_use]
    pub fn with_feedback(mut self, feedback: Box<dyn MatchFeedback>) -> Self {
        self.feedback = feedback;
        self
    }

    /// Replace the match-sound collaborator.
    pub fn set_feedback(&mut self, feedback: Box<dyn MatchFeedback>) {
        self.feedback = feedback;
    }

    // === Queries ===

    /// Read-only view of the round.
    #[must_use]
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// Owned copy of the round, e.g. for sending to another thread.
    #[must_use]
    pub fn snapshot(&self) -> RoundState {
        self.state.clone()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Look up the info-popup content for a matched pair.
    #[must_use]
    pub fn profession(&self, id: ProfessionId) -> Option<&Profession> {
        self.catalog.get(id)
    }

    /// Seed of the deck RNG, for replaying the game.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        Duration::from_millis(self.timers.now_ms())
    }

    /// Continuations waiting to fire, including stale ones.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    /// Time until the next continuation is due, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers
            .next_due_ms()
            .map(|due| Duration::from_millis(due.saturating_sub(self.timers.now_ms())))
    }

    /// Open a subscription to game events.
    pub fn subscribe(&mut self) -> std::sync::mpsc::Receiver<GameEvent> {
        self.events.subscribe()
    }

    /// Check whether a flip of `card` would be accepted right now.
    pub fn can_flip(&self, card: CardId) -> Result<(), FlipRejection> {
        if self.state.is_evaluating {
            return Err(FlipRejection::Evaluating);
        }
        if self.state.is_shuffling {
            return Err(FlipRejection::Shuffling);
        }
        if self.state.selected.len() >= 2 {
            return Err(FlipRejection::SelectionFull);
        }
        match self.state.status(card) {
            None => Err(FlipRejection::UnknownCard),
            Some(CardStatus::Hidden) => Ok(()),
            Some(status) => Err(FlipRejection::NotHidden(status)),
        }
    }

    // === Commands ===

    /// Turn a card face up.
    ///
    /// Ignored unless no pair is being evaluated, no shuffle is running,
    /// fewer than two cards are selected and the card is face down. The
    /// second accepted flip counts an attempt and schedules resolution.
    pub fn request_flip(&mut self, card: CardId) {
        if let Err(reason) = self.can_flip(card) {
            debug!("Ignoring flip of {}: {}", card, reason);
            return;
        }

        if let Some(c) = self.state.card_mut(card) {
            c.status = CardStatus::Revealed;
        }
        self.state.selected.push(card);
        self.publish(GameEvent::CardFlipped { card });

        if self.state.selected.len() == 2 {
            self.begin_evaluation();
        }
    }

    /// Show every unmatched card, or hide them again.
    ///
    /// Ignored once the game is won or while shuffling. Discards the pending
    /// selection, including a resolution already scheduled for it; the
    /// attempt it counted stays counted.
    pub fn toggle_reveal_all(&mut self) {
        if self.state.is_won {
            debug!("Ignoring reveal toggle: game already won");
            return;
        }
        if self.state.is_shuffling {
            debug!("Ignoring reveal toggle: shuffle in progress");
            return;
        }

        let reveal = !self.state.is_revealed_all;
        let target = if reveal {
            CardStatus::Revealed
        } else {
            CardStatus::Hidden
        };
        for card in self.state.cards.iter_mut().filter(|c| !c.is_matched()) {
            card.status = target;
        }

        self.discard_selection();
        self.state.is_revealed_all = reveal;
        self.publish(GameEvent::RevealToggled { revealed: reveal });
    }

    /// Start a reshuffle of the table.
    ///
    /// Locks input for the shuffle delay, then turns every unmatched card
    /// face down and permutes all positions. Ignored while a shuffle is
    /// already running.
    pub fn shuffle_now(&mut self) {
        if self.state.is_shuffling {
            debug!("Ignoring shuffle: already shuffling");
            return;
        }

        self.state.is_shuffling = true;
        self.timers.schedule(
            self.config.shuffle_delay(),
            Ticket::round(self.state.generation),
            Continuation::FinishShuffle,
        );
        self.publish(GameEvent::ShuffleStarted);
    }

    /// Throw the round away and deal a new one.
    ///
    /// Continuations scheduled for the old round are left in the queue and
    /// discarded when they come due.
    pub fn restart(&mut self) {
        let generation = self.state.generation + 1;
        let cards = deck::build(&self.catalog, &mut self.rng);
        self.state = RoundState::new(generation, cards);
        self.epoch += 1;

        info!("Round {} dealt: {} pairs", generation, self.state.total_groups);
        self.publish(GameEvent::RoundStarted {
            generation,
            total_groups: self.state.total_groups,
        });
    }

    // === Time ===

    /// Move time forward, running every continuation that comes due.
    ///
    /// Returns how many continuations took effect; stale ones are skipped.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let target = self.timers.now_ms().saturating_add(duration_ms(elapsed));
        self.advance_to(target)
    }

    /// Move time forward to an absolute virtual instant (ms).
    pub fn advance_to(&mut self, now_ms: u64) -> usize {
        let mut applied = 0;
        while let Some(entry) = self.timers.pop_due(now_ms) {
            if self.fire(entry) {
                applied += 1;
            }
        }
        self.timers.advance_clock(now_ms);
        applied
    }

    /// Run everything currently scheduled, and whatever that schedules.
    pub fn settle(&mut self) -> usize {
        let mut applied = 0;
        while let Some(due) = self.timers.next_due_ms() {
            applied += self.advance_to(due);
        }
        applied
    }

    // === Transitions ===

    fn begin_evaluation(&mut self) {
        let (first, second) = (self.state.selected[0], self.state.selected[1]);
        self.state.is_evaluating = true;
        self.state.attempts += 1;

        let delay = if self.same_group(first, second) {
            self.config.match_delay()
        } else {
            self.config.mismatch_delay()
        };
        debug!(
            "Attempt {}: {} and {}, resolving in {:?}",
            self.state.attempts, first, second, delay
        );

        self.timers.schedule(
            delay,
            Ticket::selection(self.state.generation, self.epoch),
            Continuation::ResolvePair { first, second },
        );
    }

    fn fire(&mut self, entry: Scheduled) -> bool {
        if !entry.ticket.is_current(self.state.generation, self.epoch) {
            trace!("Discarding stale {} ({:?})", entry.id, entry.task);
            return false;
        }

        match entry.task {
            Continuation::ResolvePair { first, second } => self.resolve_pair(first, second),
            Continuation::DeclareWin => self.declare_win(),
            Continuation::FinishShuffle => self.finish_shuffle(),
        }
        true
    }

    fn resolve_pair(&mut self, first: CardId, second: CardId) {
        self.state.selected.clear();
        self.state.is_evaluating = false;

        let matched = self.same_group(first, second);
        let Some(profession) = self
            .state
            .card(first)
            .map(|c| c.profession)
            .filter(|_| matched)
        else {
            for id in [first, second] {
                if let Some(card) = self.state.card_mut(id) {
                    if card.status == CardStatus::Revealed {
                        card.status = CardStatus::Hidden;
                    }
                }
            }
            debug!("No match: {} and {}", first, second);
            self.publish(GameEvent::PairMissed {
                cards: [first, second],
            });
            return;
        };

        for id in [first, second] {
            if let Some(card) = self.state.card_mut(id) {
                card.status = CardStatus::Matched;
            }
        }
        self.state.matched_groups += 1;
        debug!(
            "Matched {} ({}/{})",
            profession, self.state.matched_groups, self.state.total_groups
        );

        if let Some(entry) = self.catalog.get(profession) {
            feedback::play_best_effort(self.feedback.as_mut(), entry);
        }
        self.publish(GameEvent::PairMatched {
            profession,
            cards: [first, second],
        });

        if self.state.all_matched() {
            self.timers.schedule(
                self.config.win_delay(),
                Ticket::round(self.state.generation),
                Continuation::DeclareWin,
            );
        }
    }

    fn declare_win(&mut self) {
        if self.state.is_won || !self.state.all_matched() {
            return;
        }
        self.state.is_won = true;
        info!(
            "Round {} won in {} attempts",
            self.state.generation, self.state.attempts
        );
        self.publish(GameEvent::GameWon {
            attempts: self.state.attempts,
        });
    }

    fn finish_shuffle(&mut self) {
        deck::reshuffle(&mut self.state.cards, &mut self.rng);
        self.discard_selection();
        self.state.is_revealed_all = false;
        self.state.is_shuffling = false;
        self.publish(GameEvent::ShuffleFinished);
    }

    /// Drop the pending selection and orphan its scheduled resolution.
    fn discard_selection(&mut self) {
        self.state.selected.clear();
        self.state.is_evaluating = false;
        self.epoch += 1;
    }

    fn same_group(&self, a: CardId, b: CardId) -> bool {
        match (self.state.card(a), self.state.card(b)) {
            (Some(a), Some(b)) => a.pairs_with(b),
            _ => false,
        }
    }

    fn publish(&mut self, event: GameEvent) {
        trace!("Event {}", event.kind());
        self.events.publish(&event);
    }
}
