use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use client::{CardService, PracticeRequest, ServiceError};
use recall_core::model::{Card, CardId, Deck, DeckId, DueSummary, Rating, StudyCard};
use services::{ReviewPhase, ReviewSession};

fn study_card(id: u64) -> StudyCard {
    StudyCard {
        card_id: CardId::new(id),
        deck_id: DeckId::new(1),
        front: format!("Q{id}"),
        back: format!("A{id}"),
    }
}

fn down() -> ServiceError {
    ServiceError::Connection("service down".to_string())
}

/// Card service double that pops pre-scripted responses and records the
/// order of every remote call.
#[derive(Default)]
struct ScriptedService {
    calls: Mutex<Vec<String>>,
    next_cards: Mutex<VecDeque<Result<Option<StudyCard>, ServiceError>>>,
    summaries: Mutex<VecDeque<Result<DueSummary, ServiceError>>>,
    answers: Mutex<VecDeque<Result<(), ServiceError>>>,
}

impl ScriptedService {
    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn script_card(&self, result: Result<Option<StudyCard>, ServiceError>) {
        self.next_cards.lock().unwrap().push_back(result);
    }

    fn script_summary(&self, result: Result<DueSummary, ServiceError>) {
        self.summaries.lock().unwrap().push_back(result);
    }

    fn script_answer(&self, result: Result<(), ServiceError>) {
        self.answers.lock().unwrap().push_back(result);
    }
}

#[async_trait]
impl CardService for ScriptedService {
    async fn list_decks(&self) -> Result<Vec<Deck>, ServiceError> {
        self.record("list_decks".to_string());
        Ok(Vec::new())
    }

    async fn create_deck(&self, _name: &str) -> Result<Deck, ServiceError> {
        Err(down())
    }

    async fn delete_deck(&self, _id: DeckId) -> Result<(), ServiceError> {
        Err(down())
    }

    async fn list_cards(&self, _deck_id: Option<DeckId>) -> Result<Vec<Card>, ServiceError> {
        Err(down())
    }

    async fn delete_card(&self, _id: CardId) -> Result<(), ServiceError> {
        Err(down())
    }

    async fn review_summary(&self) -> Result<DueSummary, ServiceError> {
        self.record("review_summary".to_string());
        self.summaries
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(DueSummary { due_count: 0 }))
    }

    async fn next_review_card(&self) -> Result<Option<StudyCard>, ServiceError> {
        self.record("next_review_card".to_string());
        self.next_cards.lock().unwrap().pop_front().unwrap_or(Ok(None))
    }

    async fn answer_review(
        &self,
        card_id: CardId,
        rating: Rating,
        elapsed_secs: u32,
    ) -> Result<(), ServiceError> {
        self.record(format!(
            "answer_review:{card_id}:{}:{elapsed_secs}",
            rating.value()
        ));
        self.answers.lock().unwrap().pop_front().unwrap_or(Ok(()))
    }

    async fn practice_cards(
        &self,
        _request: PracticeRequest,
    ) -> Result<Vec<StudyCard>, ServiceError> {
        Err(down())
    }
}

#[tokio::test]
async fn load_presents_front_only_and_refreshes_summary() {
    let service = ScriptedService::default();
    service.script_card(Ok(Some(study_card(1))));
    service.script_summary(Ok(DueSummary { due_count: 4 }));

    let mut session = ReviewSession::new();
    session.load_next_card(&service).await;

    match session.phase() {
        ReviewPhase::Presenting { card, revealed } => {
            assert_eq!(card.card_id, CardId::new(1));
            assert!(!revealed);
        }
        other => panic!("unexpected phase: {other:?}"),
    }
    assert_eq!(session.due_count(), Some(4));
    assert_eq!(service.calls(), vec!["next_review_card", "review_summary"]);
}

#[tokio::test]
async fn load_replaces_prior_card_and_clears_reveal() {
    let service = ScriptedService::default();
    service.script_card(Ok(Some(study_card(1))));
    service.script_summary(Ok(DueSummary { due_count: 2 }));
    service.script_card(Ok(Some(study_card(2))));
    service.script_summary(Ok(DueSummary { due_count: 1 }));

    let mut session = ReviewSession::new();
    session.load_next_card(&service).await;
    session.reveal();
    assert!(session.is_revealed());

    // Advancing past an unanswered card discards it without submitting.
    session.load_next_card(&service).await;
    assert_eq!(session.current_card().unwrap().card_id, CardId::new(2));
    assert!(!session.is_revealed());
    assert!(!service.calls().iter().any(|call| call.starts_with("answer_review")));
}

#[tokio::test]
async fn rating_before_reveal_is_inert() {
    let service = ScriptedService::default();
    service.script_card(Ok(Some(study_card(1))));
    service.script_summary(Ok(DueSummary { due_count: 1 }));

    let mut session = ReviewSession::new();
    session.load_next_card(&service).await;
    let phase_before = session.phase().clone();

    session.submit_rating(&service, Rating::Good).await;

    assert_eq!(session.phase(), &phase_before);
    assert!(!service.calls().iter().any(|call| call.starts_with("answer_review")));
}

#[tokio::test]
async fn successful_answer_writes_before_fetching_the_next_card() {
    let service = ScriptedService::default();
    service.script_card(Ok(Some(study_card(7))));
    service.script_summary(Ok(DueSummary { due_count: 3 }));
    service.script_card(Ok(Some(study_card(8))));
    service.script_summary(Err(down()));

    let mut session = ReviewSession::new();
    session.load_next_card(&service).await;
    session.reveal();
    session.submit_rating(&service, Rating::Good).await;

    assert_eq!(
        service.calls(),
        vec![
            "next_review_card",
            "review_summary",
            "answer_review:7:3:0",
            "next_review_card",
            "review_summary",
        ]
    );
    // The failed summary refresh is reported but does not roll back the fetch.
    assert_eq!(session.current_card().unwrap().card_id, CardId::new(8));
    assert!(!session.is_revealed());
    assert!(session.notice().unwrap().starts_with("Failed to load summary"));
}

#[tokio::test]
async fn failed_answer_keeps_the_revealed_card_for_retry() {
    let service = ScriptedService::default();
    service.script_card(Ok(Some(study_card(7))));
    service.script_summary(Ok(DueSummary { due_count: 3 }));
    service.script_answer(Err(down()));

    let mut session = ReviewSession::new();
    session.load_next_card(&service).await;
    session.reveal();
    session.submit_rating(&service, Rating::Hard).await;

    assert_eq!(session.current_card().unwrap().card_id, CardId::new(7));
    assert!(session.is_revealed());
    assert!(session.notice().unwrap().starts_with("Failed to submit review"));

    // Retrying the same rating succeeds and advances.
    service.script_card(Ok(Some(study_card(9))));
    service.script_summary(Ok(DueSummary { due_count: 2 }));
    session.submit_rating(&service, Rating::Hard).await;
    assert_eq!(session.current_card().unwrap().card_id, CardId::new(9));
}

#[tokio::test]
async fn empty_queue_is_terminal_with_no_automatic_fetch() {
    let service = ScriptedService::default();
    service.script_card(Ok(None));

    let mut session = ReviewSession::new();
    session.load_next_card(&service).await;

    assert_eq!(session.phase(), &ReviewPhase::Idle);
    assert_eq!(session.due_count(), Some(0));
    assert!(session.nothing_due());
    assert_eq!(service.calls(), vec!["next_review_card"]);
}

#[tokio::test]
async fn failed_fetch_holds_no_card() {
    let service = ScriptedService::default();
    service.script_card(Err(down()));

    let mut session = ReviewSession::new();
    session.load_next_card(&service).await;

    match session.phase() {
        ReviewPhase::Failed { message } => {
            assert!(message.starts_with("Failed to load next card"));
        }
        other => panic!("unexpected phase: {other:?}"),
    }
    assert!(session.current_card().is_none());
    assert!(!session.nothing_due());
}

#[tokio::test]
async fn summary_failure_leaves_card_state_alone() {
    let service = ScriptedService::default();
    service.script_summary(Err(down()));

    let mut session = ReviewSession::new();
    session.refresh_summary(&service).await;

    assert_eq!(session.phase(), &ReviewPhase::Idle);
    assert_eq!(session.due_count(), None);
    assert!(session.notice().unwrap().starts_with("Failed to load summary"));

    // Independently retryable.
    service.script_summary(Ok(DueSummary { due_count: 5 }));
    session.refresh_summary(&service).await;
    assert_eq!(session.due_count(), Some(5));
}
