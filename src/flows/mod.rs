pub mod deck;
pub mod users;

use crate::domain::model::StepReport;
use reqwest::StatusCode;
use std::time::Instant;

/// Flow names accepted in configuration.
pub const KNOWN_FLOWS: [&str; 2] = [users::UserCrudFlow::NAME, deck::DeckFlow::NAME];

pub(crate) fn step_report(name: &str, status: StatusCode, started: Instant) -> StepReport {
    StepReport {
        name: name.to_string(),
        status: status.as_u16(),
        duration: started.elapsed(),
    }
}
