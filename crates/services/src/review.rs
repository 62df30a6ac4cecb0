use client::CardService;
use recall_core::model::{Rating, StudyCard};

//
// ─── REVIEW PHASE ──────────────────────────────────────────────────────────────
//

/// Explicit state of the live review surface.
///
/// A tagged phase rules out impossible combinations such as a revealed
/// answer with no card loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewPhase {
    /// No card on screen; the user may start (or restart) a pass.
    Idle,
    /// A next-card fetch is in flight.
    Loading,
    /// A card is on screen. The front is always visible; the back only
    /// once `revealed`.
    Presenting { card: StudyCard, revealed: bool },
    /// The last fetch failed; no card is held.
    Failed { message: String },
}

//
// ─── REVIEW SESSION ────────────────────────────────────────────────────────────
//

/// Controller for the live due-card review loop.
///
/// Owns the single current card and sequences fetch, reveal, rate and
/// advance against the card service. At most one card is current at any
/// time; every fetch fully replaces the prior card and clears reveal
/// state.
pub struct ReviewSession {
    phase: ReviewPhase,
    due_count: Option<u32>,
    notice: Option<String>,
}

impl ReviewSession {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: ReviewPhase::Idle,
            due_count: None,
            notice: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> &ReviewPhase {
        &self.phase
    }

    /// Last observed due count; `None` until the first summary arrives.
    #[must_use]
    pub fn due_count(&self) -> Option<u32> {
        self.due_count
    }

    /// Non-fatal message to surface alongside the current phase.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    #[must_use]
    pub fn current_card(&self) -> Option<&StudyCard> {
        match &self.phase {
            ReviewPhase::Presenting { card, .. } => Some(card),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        matches!(self.phase, ReviewPhase::Presenting { revealed: true, .. })
    }

    /// True when the queue is known to be empty and no card is on screen.
    ///
    /// This is a terminal state for the pass: nothing is fetched
    /// automatically, the user may start another pass or switch to
    /// practice.
    #[must_use]
    pub fn nothing_due(&self) -> bool {
        matches!(self.phase, ReviewPhase::Idle) && self.due_count == Some(0)
    }

    /// Re-fetch the due-count snapshot.
    ///
    /// Failure is non-fatal: it is logged and reported via `notice`, and
    /// never touches the current card. The call may simply be retried.
    pub async fn refresh_summary(&mut self, service: &dyn CardService) {
        match service.review_summary().await {
            Ok(summary) => self.due_count = Some(summary.due_count),
            Err(err) => {
                log::warn!("due summary refresh failed: {err}");
                self.notice = Some(format!("Failed to load summary: {err}"));
            }
        }
    }

    /// Fetch the next due card, replacing whatever was on screen.
    ///
    /// Any prior card is discarded, not submitted. On success the card is
    /// presented front-only and the due summary is refreshed as a
    /// dependent step whose failure does not roll back the fetch. An
    /// empty queue lands in `Idle` with a zero due count; a failed fetch
    /// lands in `Failed` with no card.
    pub async fn load_next_card(&mut self, service: &dyn CardService) {
        self.phase = ReviewPhase::Loading;
        self.notice = None;
        match service.next_review_card().await {
            Ok(Some(card)) => {
                self.phase = ReviewPhase::Presenting {
                    card,
                    revealed: false,
                };
                self.refresh_summary(service).await;
            }
            Ok(None) => {
                // The service reported an empty queue, which is already
                // the freshest possible summary.
                self.phase = ReviewPhase::Idle;
                self.due_count = Some(0);
            }
            Err(err) => {
                self.phase = ReviewPhase::Failed {
                    message: format!("Failed to load next card: {err}"),
                };
            }
        }
    }

    /// Show the back of the current card. Local only; idempotent.
    pub fn reveal(&mut self) {
        if let ReviewPhase::Presenting { revealed, .. } = &mut self.phase {
            *revealed = true;
        }
    }

    /// Submit a rating for the current, revealed card.
    ///
    /// A no-op unless a card is presented with its back revealed; rating
    /// an unrevealed card is a programmer error and is not surfaced. On
    /// success the next card is loaded only after the rating write has
    /// settled. On failure the same card stays revealed so the user can
    /// retry the same rating.
    pub async fn submit_rating(&mut self, service: &dyn CardService, rating: Rating) {
        let ReviewPhase::Presenting {
            card,
            revealed: true,
        } = &self.phase
        else {
            return;
        };
        let card_id = card.card_id;
        self.notice = None;
        match service.answer_review(card_id, rating, 0).await {
            Ok(()) => self.load_next_card(service).await,
            Err(err) => {
                self.notice = Some(format!("Failed to submit review: {err}"));
            }
        }
    }
}

impl Default for ReviewSession {
    fn default() -> Self {
        Self::new()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
