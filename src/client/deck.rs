use crate::client::{read_json, trim_base};
use crate::core::cards;
use crate::utils::error::Result;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;

/// Client for the card-deck service. Every method returns the raw
/// (status, JSON body) pair; callers decode a `DeckSnapshot` once the
/// status check passed.
pub struct DeckClient {
    client: Client,
    base_url: String,
    timeout: Option<Duration>,
}

impl DeckClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<(StatusCode, Value)> {
        let url = format!("{}/api/deck/{}", trim_base(&self.base_url), path);
        let mut request = self.client.get(&url).query(query);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        tracing::debug!("📡 deck: GET {} {:?}", url, query);
        read_json(request.send().await?).await
    }

    pub async fn new_shuffled(&self, deck_count: u32) -> Result<(StatusCode, Value)> {
        self.get(
            "new/shuffle/",
            &[("deck_count", deck_count.to_string())],
        )
        .await
    }

    pub async fn draw(&self, deck_id: &str, count: u32) -> Result<(StatusCode, Value)> {
        self.get(
            &format!("{}/draw/", deck_id),
            &[("count", count.to_string())],
        )
        .await
    }

    pub async fn return_cards(
        &self,
        deck_id: &str,
        codes: &[String],
    ) -> Result<(StatusCode, Value)> {
        self.get(
            &format!("{}/return/", deck_id),
            &[("cards", cards::join_codes(codes))],
        )
        .await
    }

    pub async fn pile_add(
        &self,
        deck_id: &str,
        pile: &str,
        codes: &[String],
    ) -> Result<(StatusCode, Value)> {
        self.get(
            &format!("{}/pile/{}/add/", deck_id, pile),
            &[("cards", cards::join_codes(codes))],
        )
        .await
    }

    pub async fn pile_shuffle(&self, deck_id: &str, pile: &str) -> Result<(StatusCode, Value)> {
        self.get(&format!("{}/pile/{}/shuffle/", deck_id, pile), &[])
            .await
    }

    pub async fn pile_draw_random(
        &self,
        deck_id: &str,
        pile: &str,
        count: u32,
    ) -> Result<(StatusCode, Value)> {
        self.get(
            &format!("{}/pile/{}/draw/random/", deck_id, pile),
            &[("count", count.to_string())],
        )
        .await
    }
}
