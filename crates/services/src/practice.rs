use client::{CardService, PracticeRequest};
use recall_core::model::{clamp_practice_limit, Deck, DeckId, PracticePool, StudyCard};

use crate::error::PracticeError;

//
// ─── CONFIGURATION ─────────────────────────────────────────────────────────────
//

/// Practice configuration form state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PracticeConfig {
    pub deck_id: Option<DeckId>,
    pub pool: PracticePool,
    pub limit: u32,
}

impl Default for PracticeConfig {
    fn default() -> Self {
        Self {
            deck_id: None,
            pool: PracticePool::DueRecent,
            limit: 30,
        }
    }
}

//
// ─── PRACTICE SESSION ──────────────────────────────────────────────────────────
//

/// Controller for the practice configuration phase.
///
/// Resolves a (deck, pool, limit) selection into a frozen [`PracticeRun`].
/// Every failure keeps the user in the configuration form with a message;
/// execution is only ever entered with a non-empty sample.
pub struct PracticeSession {
    decks: Vec<Deck>,
    decks_loaded: bool,
    config: PracticeConfig,
    error: Option<String>,
}

impl PracticeSession {
    #[must_use]
    pub fn new() -> Self {
        Self {
            decks: Vec::new(),
            decks_loaded: false,
            config: PracticeConfig::default(),
            error: None,
        }
    }

    #[must_use]
    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    #[must_use]
    pub fn config(&self) -> &PracticeConfig {
        &self.config
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn select_deck(&mut self, deck_id: Option<DeckId>) {
        self.config.deck_id = deck_id;
    }

    pub fn select_pool(&mut self, pool: PracticePool) {
        self.config.pool = pool;
    }

    pub fn set_limit(&mut self, limit: u32) {
        self.config.limit = limit;
    }

    /// Load the deck list for the configuration form.
    ///
    /// Loads exactly once: reopening the form does not refetch. A failed
    /// load keeps the form usable and is retried on the next open.
    pub async fn open(&mut self, service: &dyn CardService) {
        if self.decks_loaded {
            return;
        }
        match service.list_decks().await {
            Ok(decks) => {
                self.decks = decks;
                self.decks_loaded = true;
            }
            Err(err) => {
                self.error = Some(format!("Failed to load decks: {err}"));
            }
        }
    }

    /// Resolve the current configuration into a frozen run.
    ///
    /// Returns `None` when the session stays in configuration: no deck
    /// selected, a remote failure, or an empty sample; the reason is
    /// recorded on [`error`](Self::error). The limit is clamped into the
    /// accepted range before the request is built, so an out-of-bound
    /// value never reaches the service.
    pub async fn start(&mut self, service: &dyn CardService) -> Option<PracticeRun> {
        let Some(deck) = self
            .config
            .deck_id
            .and_then(|id| self.decks.iter().find(|deck| deck.id == id))
        else {
            self.error = Some("Please select a deck to practice.".to_string());
            return None;
        };
        let deck_name = deck.name.clone();
        let request = PracticeRequest {
            deck_id: deck.id,
            pool: self.config.pool,
            limit: clamp_practice_limit(self.config.limit),
        };
        self.error = None;
        match service.practice_cards(request).await {
            Ok(cards) => match PracticeRun::new(deck_name, cards) {
                Ok(run) => Some(run),
                Err(PracticeError::Empty) => {
                    self.error =
                        Some("No cards found for this practice configuration.".to_string());
                    None
                }
            },
            Err(err) => {
                self.error = Some(format!("Failed to load practice cards: {err}"));
                None
            }
        }
    }
}

impl Default for PracticeSession {
    fn default() -> Self {
        Self::new()
    }
}

//
// ─── PRACTICE RUN ──────────────────────────────────────────────────────────────
//

/// Self-contained walkthrough over a frozen practice sample.
///
/// The card list is copied at fetch time and never re-fetched mid-run.
/// Advancing is purely local; answering a practice card never touches the
/// scheduling service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeRun {
    deck_name: String,
    cards: Vec<StudyCard>,
    index: usize,
    revealed: bool,
}

impl PracticeRun {
    /// Freeze a fetched sample into a run.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::Empty` if no cards were provided.
    pub fn new(deck_name: String, cards: Vec<StudyCard>) -> Result<Self, PracticeError> {
        if cards.is_empty() {
            return Err(PracticeError::Empty);
        }
        Ok(Self {
            deck_name,
            cards,
            index: 0,
            revealed: false,
        })
    }

    #[must_use]
    pub fn deck_name(&self) -> &str {
        &self.deck_name
    }

    /// Total number of cards in this run.
    #[must_use]
    pub fn total(&self) -> usize {
        self.cards.len()
    }

    /// 1-based position of the current card, capped at the total.
    #[must_use]
    pub fn position(&self) -> usize {
        (self.index + 1).min(self.cards.len())
    }

    #[must_use]
    pub fn current_card(&self) -> Option<&StudyCard> {
        self.cards.get(self.index)
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.index >= self.cards.len()
    }

    /// Show the back of the current card. Local only; idempotent.
    pub fn reveal(&mut self) {
        if !self.is_finished() {
            self.revealed = true;
        }
    }

    /// Step to the next card, hiding the back again.
    pub fn advance(&mut self) {
        if self.index < self.cards.len() {
            self.index += 1;
        }
        self.revealed = false;
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use recall_core::model::CardId;

    fn build_cards(count: u64) -> Vec<StudyCard> {
        (1..=count)
            .map(|id| StudyCard {
                card_id: CardId::new(id),
                deck_id: DeckId::new(1),
                front: format!("Q{id}"),
                back: format!("A{id}"),
            })
            .collect()
    }

    #[test]
    fn empty_sample_is_rejected() {
        let err = PracticeRun::new("Deck".to_string(), Vec::new()).unwrap_err();
        assert!(matches!(err, PracticeError::Empty));
    }

    #[test]
    fn run_walks_the_frozen_sequence_in_order() {
        let mut run = PracticeRun::new("Deck".to_string(), build_cards(2)).unwrap();
        assert_eq!(run.total(), 2);
        assert_eq!(run.position(), 1);
        assert_eq!(run.current_card().unwrap().card_id, CardId::new(1));

        run.reveal();
        assert!(run.is_revealed());
        run.advance();
        assert!(!run.is_revealed());
        assert_eq!(run.position(), 2);
        assert_eq!(run.current_card().unwrap().card_id, CardId::new(2));

        run.advance();
        assert!(run.is_finished());
        assert!(run.current_card().is_none());
        assert_eq!(run.position(), 2);
    }

    #[test]
    fn reveal_after_finish_is_a_no_op() {
        let mut run = PracticeRun::new("Deck".to_string(), build_cards(1)).unwrap();
        run.advance();
        run.reveal();
        assert!(!run.is_revealed());
    }

    #[test]
    fn config_defaults_match_the_form() {
        let config = PracticeConfig::default();
        assert_eq!(config.deck_id, None);
        assert_eq!(config.pool, PracticePool::DueRecent);
        assert_eq!(config.limit, 30);
    }
}
