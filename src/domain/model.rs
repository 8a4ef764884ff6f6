use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Deck service response body. Every deck endpoint reports the deck id
/// and the cards left in the main stack; pile endpoints additionally
/// report per-pile counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckSnapshot {
    pub success: bool,
    pub deck_id: String,
    pub remaining: u32,
    #[serde(default)]
    pub piles: HashMap<String, PileCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PileCount {
    pub remaining: u32,
}

impl DeckSnapshot {
    /// Count for a named pile, if the response carried one.
    pub fn pile_remaining(&self, pile: &str) -> Option<u32> {
        self.piles.get(pile).map(|p| p.remaining)
    }
}

/// One executed step of a flow.
#[derive(Debug, Clone)]
pub struct StepReport {
    pub name: String,
    pub status: u16,
    pub duration: Duration,
}

/// Outcome of a whole flow run.
#[derive(Debug, Clone)]
pub struct FlowReport {
    pub flow_name: String,
    pub steps: Vec<StepReport>,
    pub duration: Duration,
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl FlowReport {
    pub fn step(&self, name: &str) -> Option<&StepReport> {
        self.steps.iter().find(|s| s.name == name)
    }
}
