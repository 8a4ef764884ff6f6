use crate::client::deck::DeckClient;
use crate::core::cards;
use crate::core::check::Expect;
use crate::core::context::FlowContext;
use crate::domain::model::{DeckSnapshot, FlowReport};
use crate::domain::ports::Flow;
use crate::flows::step_report;
use crate::utils::error::{CheckError, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Instant;

/// Eight sequential steps against the deck service. The deck id captured
/// in the first step is threaded through the context into every later
/// request, and each step asserts the server-reported remaining counts.
pub struct DeckFlow {
    client: DeckClient,
}

impl DeckFlow {
    pub const NAME: &'static str = "deck";

    pub fn new(client: DeckClient) -> Self {
        Self { client }
    }

    fn decode(step: &str, status: StatusCode, body: Value) -> Result<DeckSnapshot> {
        Expect::success().check(step, status)?;
        let snapshot: DeckSnapshot = serde_json::from_value(body)?;
        Ok(snapshot)
    }

    fn expect_remaining(step: &str, snapshot: &DeckSnapshot, expected: u32) -> Result<()> {
        if snapshot.remaining != expected {
            return Err(CheckError::AssertionError {
                step: step.to_string(),
                message: format!(
                    "expected deck remaining == {}, got {}",
                    expected, snapshot.remaining
                ),
            });
        }
        Ok(())
    }

    fn expect_pile_remaining(
        step: &str,
        snapshot: &DeckSnapshot,
        pile: &str,
        expected: u32,
    ) -> Result<()> {
        match snapshot.pile_remaining(pile) {
            Some(actual) if actual == expected => Ok(()),
            Some(actual) => Err(CheckError::AssertionError {
                step: step.to_string(),
                message: format!(
                    "expected pile '{}' remaining == {}, got {}",
                    pile, expected, actual
                ),
            }),
            None => Err(CheckError::AssertionError {
                step: step.to_string(),
                message: format!("pile '{}' missing from response", pile),
            }),
        }
    }
}

#[async_trait]
impl Flow for DeckFlow {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn run(&self, context: &mut FlowContext) -> Result<FlowReport> {
        let started_at = chrono::Utc::now();
        let flow_started = Instant::now();
        let mut steps = Vec::new();
        let deck = cards::full_deck();

        // Create a new shuffled deck and capture its id.
        let step = "create deck";
        let step_started = Instant::now();
        let (status, body) = self.client.new_shuffled(1).await?;
        let snapshot = Self::decode(step, status, body)?;
        if snapshot.deck_id.is_empty() {
            return Err(CheckError::AssertionError {
                step: step.to_string(),
                message: "service returned an empty deck id".to_string(),
            });
        }
        context.set_deck_id(snapshot.deck_id.clone());
        steps.push(step_report(step, status, step_started));
        tracing::info!("✅ {}: {} ({})", Self::NAME, step, snapshot.deck_id);

        // Draw every card; the deck must end up empty.
        let step = "draw all cards";
        let step_started = Instant::now();
        let (status, body) = self.client.draw(context.deck_id()?, 52).await?;
        let snapshot = Self::decode(step, status, body)?;
        Self::expect_remaining(step, &snapshot, 0)?;
        steps.push(step_report(step, status, step_started));
        tracing::info!("✅ {}: {}", Self::NAME, step);

        // Return all 52 codes in sorted order; the deck is whole again.
        let step = "return sorted deck";
        let step_started = Instant::now();
        let (status, body) = self.client.return_cards(context.deck_id()?, &deck).await?;
        let snapshot = Self::decode(step, status, body)?;
        Self::expect_remaining(step, &snapshot, 52)?;
        steps.push(step_report(step, status, step_started));
        tracing::info!("✅ {}: {}", Self::NAME, step);

        // First five spades into pile1.
        let step = "fill pile1";
        let step_started = Instant::now();
        let (status, body) = self
            .client
            .pile_add(context.deck_id()?, "pile1", &deck[0..5])
            .await?;
        let snapshot = Self::decode(step, status, body)?;
        Self::expect_pile_remaining(step, &snapshot, "pile1", 5)?;
        Self::expect_remaining(step, &snapshot, 47)?;
        steps.push(step_report(step, status, step_started));
        tracing::info!("✅ {}: {}", Self::NAME, step);

        // Next five spades into pile2.
        let step = "fill pile2";
        let step_started = Instant::now();
        let (status, body) = self
            .client
            .pile_add(context.deck_id()?, "pile2", &deck[5..10])
            .await?;
        let snapshot = Self::decode(step, status, body)?;
        Self::expect_pile_remaining(step, &snapshot, "pile2", 5)?;
        Self::expect_remaining(step, &snapshot, 42)?;
        steps.push(step_report(step, status, step_started));
        tracing::info!("✅ {}: {}", Self::NAME, step);

        // Shuffling a pile must not change its count.
        let step = "shuffle pile1";
        let step_started = Instant::now();
        let (status, body) = self
            .client
            .pile_shuffle(context.deck_id()?, "pile1")
            .await?;
        let snapshot = Self::decode(step, status, body)?;
        Self::expect_pile_remaining(step, &snapshot, "pile1", 5)?;
        steps.push(step_report(step, status, step_started));
        tracing::info!("✅ {}: {}", Self::NAME, step);

        let step = "draw 3 from pile1";
        let step_started = Instant::now();
        let (status, body) = self
            .client
            .pile_draw_random(context.deck_id()?, "pile1", 3)
            .await?;
        let snapshot = Self::decode(step, status, body)?;
        Self::expect_pile_remaining(step, &snapshot, "pile1", 2)?;
        steps.push(step_report(step, status, step_started));
        tracing::info!("✅ {}: {}", Self::NAME, step);

        let step = "draw 2 from pile2";
        let step_started = Instant::now();
        let (status, body) = self
            .client
            .pile_draw_random(context.deck_id()?, "pile2", 2)
            .await?;
        let snapshot = Self::decode(step, status, body)?;
        Self::expect_pile_remaining(step, &snapshot, "pile2", 3)?;
        steps.push(step_report(step, status, step_started));
        tracing::info!("✅ {}: {}", Self::NAME, step);

        Ok(FlowReport {
            flow_name: Self::NAME.to_string(),
            steps,
            duration: flow_started.elapsed(),
            started_at,
        })
    }
}
