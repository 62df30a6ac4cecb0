#![forbid(unsafe_code)]

pub mod model;

pub use model::{
    Card, CardId, Deck, DeckError, DeckId, DueSummary, PracticePool, PracticePoolError, Rating,
    RatingError, StudyCard, PRACTICE_LIMIT_MAX, PRACTICE_LIMIT_MIN, clamp_practice_limit,
};
