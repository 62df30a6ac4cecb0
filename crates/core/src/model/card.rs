use serde::{Deserialize, Serialize};

use crate::model::ids::{CardId, DeckId};

//
// ─── CARD ──────────────────────────────────────────────────────────────────────
//

/// A flashcard as stored by the card service.
///
/// A card belongs to exactly one deck; `deck_id` is a reference, not
/// ownership. Front and back are opaque text as far as this client is
/// concerned (rendering decides how to display them).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub deck_id: DeckId,
    pub front: String,
    pub back: String,
}

//
// ─── STUDY CARD ────────────────────────────────────────────────────────────────
//

/// A card surfaced for studying, either as the single live review card or
/// as one entry of a frozen practice snapshot.
///
/// The service constructs these; the client never synthesizes one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyCard {
    pub card_id: CardId,
    pub deck_id: DeckId,
    pub front: String,
    pub back: String,
}
