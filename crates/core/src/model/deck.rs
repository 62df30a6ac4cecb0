use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::DeckId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("deck name cannot be empty")]
    EmptyName,
}

//
// ─── DECK ──────────────────────────────────────────────────────────────────────
//

/// A named collection of cards.
///
/// Identity is the service-assigned `id`. Decks are created and deleted
/// through the card service; nothing else about them changes in this client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub id: DeckId,
    pub name: String,
}

impl Deck {
    /// Creates a deck with a validated name.
    ///
    /// The name is trimmed before validation; the trimmed form is stored.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::EmptyName` if the name is blank after trimming.
    pub fn new(id: DeckId, name: &str) -> Result<Self, DeckError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DeckError::EmptyName);
        }
        Ok(Self {
            id,
            name: name.to_string(),
        })
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deck_name_is_trimmed() {
        let deck = Deck::new(DeckId::new(1), "  Physics  ").unwrap();
        assert_eq!(deck.name, "Physics");
    }

    #[test]
    fn blank_deck_name_is_rejected() {
        let err = Deck::new(DeckId::new(1), "   ").unwrap_err();
        assert!(matches!(err, DeckError::EmptyName));
    }
}
