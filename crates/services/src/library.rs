use client::CardService;
use recall_core::model::{Card, CardId, Deck, DeckId};

//
// ─── LIBRARY ───────────────────────────────────────────────────────────────────
//

/// Controller for the deck/card management surface.
///
/// Holds the deck list, the selected deck and its cards, plus one error
/// and one status message at a time. Validation failures are surfaced
/// exactly like remote ones but never leave the client.
pub struct Library {
    decks: Vec<Deck>,
    selected: Option<DeckId>,
    cards: Vec<Card>,
    error: Option<String>,
    message: Option<String>,
}

impl Library {
    #[must_use]
    pub fn new() -> Self {
        Self {
            decks: Vec::new(),
            selected: None,
            cards: Vec::new(),
            error: None,
            message: None,
        }
    }

    #[must_use]
    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    #[must_use]
    pub fn selected(&self) -> Option<DeckId> {
        self.selected
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn clear_feedback(&mut self) {
        self.error = None;
        self.message = None;
    }

    /// Load the deck list and select the first deck, if any.
    pub async fn load(&mut self, service: &dyn CardService) {
        match service.list_decks().await {
            Ok(decks) => {
                self.decks = decks;
                let first = self.decks.first().map(|deck| deck.id);
                self.select_deck(service, first).await;
            }
            Err(err) => {
                self.error = Some(format!("Failed to load decks: {err}"));
            }
        }
    }

    /// Select a deck (or none) and load its card list.
    pub async fn select_deck(&mut self, service: &dyn CardService, deck_id: Option<DeckId>) {
        self.selected = deck_id;
        self.clear_feedback();
        let Some(deck_id) = deck_id else {
            self.cards.clear();
            return;
        };
        match service.list_cards(Some(deck_id)).await {
            Ok(cards) => self.cards = cards,
            Err(err) => {
                self.cards.clear();
                self.error = Some(format!("Failed to load cards: {err}"));
            }
        }
    }

    /// Create a deck and select it.
    ///
    /// The name is trimmed; a blank name is rejected locally without a
    /// remote call. The new deck is inserted in name order, matching the
    /// order the service lists decks in.
    pub async fn create_deck(&mut self, service: &dyn CardService, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            self.message = None;
            self.error = Some("Please enter a deck name.".to_string());
            return;
        }
        self.clear_feedback();
        match service.create_deck(name).await {
            Ok(deck) => {
                let deck_id = deck.id;
                let deck_name = deck.name.clone();
                self.decks.push(deck);
                self.decks.sort_by(|a, b| a.name.cmp(&b.name));
                self.select_deck(service, Some(deck_id)).await;
                self.message = Some(format!("Created deck \"{deck_name}\"."));
            }
            Err(err) => {
                self.error = Some(format!("Failed to create deck: {err}"));
            }
        }
    }

    /// Delete the selected deck.
    ///
    /// On success the next remaining deck is selected (or none), and the
    /// card list reflects the new selection.
    pub async fn delete_deck(&mut self, service: &dyn CardService) {
        let Some(deck_id) = self.selected else {
            self.message = None;
            self.error = Some("Please select a deck to delete.".to_string());
            return;
        };
        let deck_name = self
            .decks
            .iter()
            .find(|deck| deck.id == deck_id)
            .map(|deck| deck.name.clone());
        self.clear_feedback();
        match service.delete_deck(deck_id).await {
            Ok(()) => {
                self.decks.retain(|deck| deck.id != deck_id);
                self.cards.clear();
                let next = self.decks.first().map(|deck| deck.id);
                self.select_deck(service, next).await;
                self.message = Some(match deck_name {
                    Some(name) => format!("Deleted deck \"{name}\"."),
                    None => format!("Deleted deck {deck_id}."),
                });
            }
            Err(err) => {
                self.error = Some(format!("Failed to delete deck: {err}"));
            }
        }
    }

    /// Delete a single card from the selected deck's list.
    pub async fn delete_card(&mut self, service: &dyn CardService, card_id: CardId) {
        self.clear_feedback();
        match service.delete_card(card_id).await {
            Ok(()) => {
                self.cards.retain(|card| card.id != card_id);
                self.message = Some(format!("Deleted card {card_id}."));
            }
            Err(err) => {
                self.error = Some(format!("Failed to delete card: {err}"));
            }
        }
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::new()
    }
}
