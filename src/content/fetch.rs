use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use super::page::ContentPage;
use crate::quiz::{Choice, ChoiceLabel, QuizItem};
use crate::resolver::PageId;

#[derive(Error, Debug, PartialEq)]
pub enum FetchError {
    #[error("network request failed: {0}")]
    Network(String),

    #[error("page {0} not found on the backend")]
    NotFound(PageId),

    #[error("failed to decode backend response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Network(err.to_string())
    }
}

/// Remote source of page content. The loader suspends only at this boundary;
/// any timeout is the implementation's concern (reqwest's, for the HTTP one).
#[async_trait]
pub trait PageFetcher {
    async fn fetch_page(&self, id: &PageId) -> Result<ContentPage, FetchError>;
}

/// Remote source of the ordered quiz items for a page.
#[async_trait]
pub trait QuizFetcher {
    async fn fetch_quiz(&self, id: &PageId) -> Result<Vec<QuizItem>, FetchError>;
}

/// HTTP client for the EduPatch backend.
pub struct HttpFetcher {
    client: Client,
    base_url: String,
}

impl HttpFetcher {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_body(&self, url: &str, id: &PageId) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(id.clone()));
        }

        let body = response.error_for_status()?.text().await?;
        Ok(body)
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_page(&self, id: &PageId) -> Result<ContentPage, FetchError> {
        let url = format!("{}/pages/{}", self.base_url, id);
        debug!(%id, "fetching page from backend");

        let body = self.get_body(&url, id).await?;
        decode_page(&body)
    }
}

#[async_trait]
impl QuizFetcher for HttpFetcher {
    async fn fetch_quiz(&self, id: &PageId) -> Result<Vec<QuizItem>, FetchError> {
        let url = format!("{}/quizzes/{}", self.base_url, id);
        debug!(%id, "fetching quiz items from backend");

        let body = self.get_body(&url, id).await?;
        decode_quiz(&body)
    }
}

/// Decodes a page payload, rejecting any shape the model cannot represent.
pub fn decode_page(body: &str) -> Result<ContentPage, FetchError> {
    let page: ContentPage =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    if page.ordinal == 0 {
        return Err(FetchError::Decode(String::from(
            "pageNumber must be at least 1",
        )));
    }

    Ok(page)
}

#[derive(Deserialize)]
struct QuizItemWire {
    #[serde(rename = "quizId")]
    quiz_id: String,
    question: String,
    options: Vec<String>,
    answer: String,
}

/// Decodes a quiz payload into typed items.
///
/// Each item must carry exactly four options prefixed with their label
/// letters in A-D order, and a correct answer within that domain; anything
/// else fails with [`FetchError::Decode`] instead of being trusted.
pub fn decode_quiz(body: &str) -> Result<Vec<QuizItem>, FetchError> {
    let wire: Vec<QuizItemWire> =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    wire.into_iter().map(decode_quiz_item).collect()
}

fn decode_quiz_item(wire: QuizItemWire) -> Result<QuizItem, FetchError> {
    if wire.options.len() != ChoiceLabel::ALL.len() {
        return Err(FetchError::Decode(format!(
            "quiz '{}' has {} options, expected {}",
            wire.quiz_id,
            wire.options.len(),
            ChoiceLabel::ALL.len()
        )));
    }

    let choices = wire
        .options
        .iter()
        .zip(ChoiceLabel::ALL)
        .map(|(option, expected)| {
            let label = option
                .chars()
                .next()
                .and_then(ChoiceLabel::from_char)
                .filter(|label| *label == expected)
                .ok_or_else(|| {
                    FetchError::Decode(format!(
                        "quiz '{}': option '{}' is not labeled '{}'",
                        wire.quiz_id, option, expected
                    ))
                })?;

            Ok(Choice {
                label,
                text: option.clone(),
            })
        })
        .collect::<Result<Vec<Choice>, FetchError>>()?;

    let answer = wire
        .answer
        .chars()
        .next()
        .filter(|_| wire.answer.len() == 1)
        .and_then(ChoiceLabel::from_char)
        .ok_or_else(|| {
            FetchError::Decode(format!(
                "quiz '{}': answer '{}' is not one of A-D",
                wire.quiz_id, wire.answer
            ))
        })?;

    Ok(QuizItem {
        quiz_id: wire.quiz_id,
        question: wire.question,
        choices,
        answer,
    })
}
