pub mod deck;
pub mod users;

use crate::utils::error::Result;
use reqwest::{Response, StatusCode};
use serde_json::Value;

/// Reads a response as (status, JSON body). A body-less response (204)
/// yields `Value::Null` rather than a decode error.
pub(crate) async fn read_json(response: Response) -> Result<(StatusCode, Value)> {
    let status = response.status();
    let text = response.text().await?;

    let body = if text.trim().is_empty() {
        Value::Null
    } else {
        serde_json::from_str(&text)?
    };

    Ok((status, body))
}

pub(crate) fn trim_base(base_url: &str) -> &str {
    base_url.trim_end_matches('/')
}
