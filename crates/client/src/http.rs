use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};

use async_trait::async_trait;
use recall_core::model::{Card, CardId, Deck, DeckId, DueSummary, Rating, StudyCard};

use crate::service::{CardService, PracticeRequest, ServiceError};

//
// ─── HTTP CARD SERVICE ─────────────────────────────────────────────────────────
//

/// Card service adapter speaking JSON over HTTP.
///
/// All endpoints live under `/api` on the configured base URL. Timeouts
/// and retries are the service's concern; a call here settles to exactly
/// one success or failure.
#[derive(Clone)]
pub struct HttpCardService {
    client: Client,
    base_url: String,
}

impl HttpCardService {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{path}", self.base_url)
    }

    fn check(response: Response) -> Result<Response, ServiceError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        match status {
            StatusCode::NOT_FOUND => Err(ServiceError::NotFound),
            StatusCode::BAD_REQUEST | StatusCode::CONFLICT => Err(ServiceError::Conflict),
            status => Err(ServiceError::HttpStatus(status)),
        }
    }
}

#[async_trait]
impl CardService for HttpCardService {
    async fn list_decks(&self) -> Result<Vec<Deck>, ServiceError> {
        let response = self.client.get(self.url("/decks")).send().await?;
        let decks: Vec<Deck> = Self::check(response)?.json().await?;
        Ok(decks)
    }

    async fn create_deck(&self, name: &str) -> Result<Deck, ServiceError> {
        let response = self
            .client
            .post(self.url("/decks"))
            .json(&CreateDeckRequest { name })
            .send()
            .await?;
        let deck: Deck = Self::check(response)?.json().await?;
        Ok(deck)
    }

    async fn delete_deck(&self, id: DeckId) -> Result<(), ServiceError> {
        let response = self
            .client
            .delete(self.url(&format!("/decks/{id}")))
            .send()
            .await?;
        Self::check(response)?;
        Ok(())
    }

    async fn list_cards(&self, deck_id: Option<DeckId>) -> Result<Vec<Card>, ServiceError> {
        let mut request = self.client.get(self.url("/cards"));
        if let Some(deck_id) = deck_id {
            request = request.query(&[("deck_id", deck_id.value())]);
        }
        let response = request.send().await?;
        let cards: Vec<Card> = Self::check(response)?.json().await?;
        Ok(cards)
    }

    async fn delete_card(&self, id: CardId) -> Result<(), ServiceError> {
        let response = self
            .client
            .delete(self.url(&format!("/cards/{id}")))
            .send()
            .await?;
        Self::check(response)?;
        Ok(())
    }

    async fn review_summary(&self) -> Result<DueSummary, ServiceError> {
        let response = self.client.get(self.url("/review/summary")).send().await?;
        let summary: DueSummary = Self::check(response)?.json().await?;
        Ok(summary)
    }

    async fn next_review_card(&self) -> Result<Option<StudyCard>, ServiceError> {
        let response = self.client.get(self.url("/review/next")).send().await?;
        // The service signals an empty due queue distinctly from failure.
        if matches!(
            response.status(),
            StatusCode::NO_CONTENT | StatusCode::NOT_FOUND
        ) {
            return Ok(None);
        }
        let card: StudyCard = Self::check(response)?.json().await?;
        Ok(Some(card))
    }

    async fn answer_review(
        &self,
        card_id: CardId,
        rating: Rating,
        elapsed_secs: u32,
    ) -> Result<(), ServiceError> {
        let response = self
            .client
            .post(self.url("/review/answer"))
            .json(&AnswerRequest {
                card_id,
                rating: rating.value(),
                elapsed_secs,
            })
            .send()
            .await?;
        Self::check(response)?;
        Ok(())
    }

    async fn practice_cards(
        &self,
        request: PracticeRequest,
    ) -> Result<Vec<StudyCard>, ServiceError> {
        let response = self
            .client
            .post(self.url("/practice/cards"))
            .json(&request)
            .send()
            .await?;
        let cards: Vec<StudyCard> = Self::check(response)?.json().await?;
        Ok(cards)
    }
}

//
// ─── WIRE TYPES ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize)]
struct CreateDeckRequest<'a> {
    name: &'a str,
}

#[derive(Debug, Serialize, Deserialize)]
struct AnswerRequest {
    card_id: CardId,
    rating: u8,
    elapsed_secs: u32,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
