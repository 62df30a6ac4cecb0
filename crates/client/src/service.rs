use async_trait::async_trait;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use recall_core::model::{Card, CardId, Deck, DeckId, DueSummary, PracticePool, Rating, StudyCard};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Errors surfaced by card service adapters.
///
/// Every variant is transient from the controllers' point of view: the
/// operation that failed can be retried by the user as-is.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ServiceError {
    #[error("not found")]
    NotFound,

    #[error("conflict")]
    Conflict,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

//
// ─── PRACTICE REQUEST ──────────────────────────────────────────────────────────
//

/// Parameters for sampling a practice pool from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PracticeRequest {
    pub deck_id: DeckId,
    pub pool: PracticePool,
    pub limit: u32,
}

//
// ─── CARD SERVICE CONTRACT ─────────────────────────────────────────────────────
//

/// Contract for the remote card service.
///
/// The service owns decks, cards, the spaced-repetition schedule and the
/// due queue; this client only reads and submits. Scheduling itself is
/// opaque at this boundary.
#[async_trait]
pub trait CardService: Send + Sync {
    /// List all decks, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` if the service cannot be reached.
    async fn list_decks(&self) -> Result<Vec<Deck>, ServiceError>;

    /// Create a deck with the given (already validated) name.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Conflict` if a deck with this name exists,
    /// or other service errors.
    async fn create_deck(&self, name: &str) -> Result<Deck, ServiceError>;

    /// Delete a deck and everything scheduled under it.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NotFound` if missing, or other service errors.
    async fn delete_deck(&self, id: DeckId) -> Result<(), ServiceError>;

    /// List cards, optionally restricted to one deck.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` if the service cannot be reached.
    async fn list_cards(&self, deck_id: Option<DeckId>) -> Result<Vec<Card>, ServiceError>;

    /// Delete a single card.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NotFound` if missing, or other service errors.
    async fn delete_card(&self, id: CardId) -> Result<(), ServiceError>;

    /// Fetch the current due-count snapshot.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` if the service cannot be reached.
    async fn review_summary(&self) -> Result<DueSummary, ServiceError>;

    /// Fetch the next due card, or `None` when nothing is due.
    ///
    /// An empty queue is a regular result, not an error; errors mean the
    /// fetch itself failed.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` if the service cannot be reached.
    async fn next_review_card(&self) -> Result<Option<StudyCard>, ServiceError>;

    /// Submit a rating for a reviewed card.
    ///
    /// `elapsed_secs` is a reserved passthrough field; callers send `0`.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` if the submission fails; the schedule is
    /// unchanged in that case and the same rating may be resubmitted.
    async fn answer_review(
        &self,
        card_id: CardId,
        rating: Rating,
        elapsed_secs: u32,
    ) -> Result<(), ServiceError>;

    /// Sample practice cards for a deck without touching the schedule.
    ///
    /// An empty sample is a regular result.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NotFound` if the deck is missing, or other
    /// service errors.
    async fn practice_cards(&self, request: PracticeRequest)
    -> Result<Vec<StudyCard>, ServiceError>;
}

//
// ─── IN-MEMORY SERVICE ─────────────────────────────────────────────────────────
//

#[derive(Default)]
struct InMemoryState {
    decks: HashMap<DeckId, Deck>,
    cards: HashMap<CardId, Card>,
    due: Vec<CardId>,
    reviewed: Vec<CardId>,
    answers: Vec<(CardId, Rating)>,
    next_deck_id: u64,
    next_card_id: u64,
}

/// Simple in-memory card service for testing and prototyping.
///
/// The due queue is a plain FIFO: answering the front card pops it, so
/// the "schedule" is just arrival order. Practice pools are resolved
/// deterministically from insertion order.
#[derive(Clone, Default)]
pub struct InMemoryCardService {
    state: Arc<Mutex<InMemoryState>>,
}

impl InMemoryCardService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a card and mark it due immediately.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NotFound` if the deck does not exist.
    pub fn seed_due_card(
        &self,
        deck_id: DeckId,
        front: &str,
        back: &str,
    ) -> Result<CardId, ServiceError> {
        let mut state = self.lock()?;
        if !state.decks.contains_key(&deck_id) {
            return Err(ServiceError::NotFound);
        }
        state.next_card_id += 1;
        let id = CardId::new(state.next_card_id);
        state.cards.insert(
            id,
            Card {
                id,
                deck_id,
                front: front.to_string(),
                back: back.to_string(),
            },
        );
        state.due.push(id);
        Ok(id)
    }

    /// Ratings submitted so far, in submission order.
    #[must_use]
    pub fn submitted_answers(&self) -> Vec<(CardId, Rating)> {
        self.state
            .lock()
            .map(|state| state.answers.clone())
            .unwrap_or_default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, InMemoryState>, ServiceError> {
        self.state
            .lock()
            .map_err(|e| ServiceError::Connection(e.to_string()))
    }

    fn study_card(card: &Card) -> StudyCard {
        StudyCard {
            card_id: card.id,
            deck_id: card.deck_id,
            front: card.front.clone(),
            back: card.back.clone(),
        }
    }
}

#[async_trait]
impl CardService for InMemoryCardService {
    async fn list_decks(&self) -> Result<Vec<Deck>, ServiceError> {
        let state = self.lock()?;
        let mut decks: Vec<Deck> = state.decks.values().cloned().collect();
        decks.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(decks)
    }

    async fn create_deck(&self, name: &str) -> Result<Deck, ServiceError> {
        let mut state = self.lock()?;
        if state.decks.values().any(|deck| deck.name == name) {
            return Err(ServiceError::Conflict);
        }
        state.next_deck_id += 1;
        let deck = Deck {
            id: DeckId::new(state.next_deck_id),
            name: name.to_string(),
        };
        state.decks.insert(deck.id, deck.clone());
        Ok(deck)
    }

    async fn delete_deck(&self, id: DeckId) -> Result<(), ServiceError> {
        let mut state = self.lock()?;
        if state.decks.remove(&id).is_none() {
            return Err(ServiceError::NotFound);
        }
        let removed: Vec<CardId> = state
            .cards
            .values()
            .filter(|card| card.deck_id == id)
            .map(|card| card.id)
            .collect();
        for card_id in &removed {
            state.cards.remove(card_id);
        }
        state.due.retain(|card_id| !removed.contains(card_id));
        state.reviewed.retain(|card_id| !removed.contains(card_id));
        Ok(())
    }

    async fn list_cards(&self, deck_id: Option<DeckId>) -> Result<Vec<Card>, ServiceError> {
        let state = self.lock()?;
        let mut cards: Vec<Card> = state
            .cards
            .values()
            .filter(|card| deck_id.is_none_or(|id| card.deck_id == id))
            .cloned()
            .collect();
        cards.sort_by_key(|card| card.id);
        Ok(cards)
    }

    async fn delete_card(&self, id: CardId) -> Result<(), ServiceError> {
        let mut state = self.lock()?;
        if state.cards.remove(&id).is_none() {
            return Err(ServiceError::NotFound);
        }
        state.due.retain(|card_id| *card_id != id);
        state.reviewed.retain(|card_id| *card_id != id);
        Ok(())
    }

    async fn review_summary(&self) -> Result<DueSummary, ServiceError> {
        let state = self.lock()?;
        let due_count = u32::try_from(state.due.len()).unwrap_or(u32::MAX);
        Ok(DueSummary { due_count })
    }

    async fn next_review_card(&self) -> Result<Option<StudyCard>, ServiceError> {
        let state = self.lock()?;
        let Some(card_id) = state.due.first() else {
            return Ok(None);
        };
        let card = state.cards.get(card_id).ok_or(ServiceError::NotFound)?;
        Ok(Some(Self::study_card(card)))
    }

    async fn answer_review(
        &self,
        card_id: CardId,
        rating: Rating,
        _elapsed_secs: u32,
    ) -> Result<(), ServiceError> {
        let mut state = self.lock()?;
        if !state.cards.contains_key(&card_id) {
            return Err(ServiceError::NotFound);
        }
        state.due.retain(|id| *id != card_id);
        state.reviewed.push(card_id);
        state.answers.push((card_id, rating));
        Ok(())
    }

    async fn practice_cards(
        &self,
        request: PracticeRequest,
    ) -> Result<Vec<StudyCard>, ServiceError> {
        let state = self.lock()?;
        if !state.decks.contains_key(&request.deck_id) {
            return Err(ServiceError::NotFound);
        }
        let mut sample: Vec<StudyCard> = match request.pool {
            PracticePool::All => state
                .cards
                .values()
                .filter(|card| card.deck_id == request.deck_id)
                .map(Self::study_card)
                .collect(),
            PracticePool::NewOnly => state
                .cards
                .values()
                .filter(|card| card.deck_id == request.deck_id)
                .filter(|card| !state.reviewed.contains(&card.id))
                .map(Self::study_card)
                .collect(),
            PracticePool::DueRecent => {
                let mut picked: Vec<StudyCard> = Vec::new();
                for card_id in state.due.iter().chain(state.reviewed.iter()) {
                    if let Some(card) = state.cards.get(card_id) {
                        if card.deck_id == request.deck_id {
                            picked.push(Self::study_card(card));
                        }
                    }
                }
                picked
            }
        };
        sample.sort_by_key(|card| card.card_id);
        sample.truncate(usize::try_from(request.limit).unwrap_or(usize::MAX));
        Ok(sample)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
