use crate::client::{read_json, trim_base};
use crate::utils::error::Result;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;

/// Client for the user-management service (`<base>/api/users/{id}`).
pub struct UsersClient {
    client: Client,
    base_url: String,
    timeout: Option<Duration>,
}

impl UsersClient {
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

    fn user_url(&self, user_id: u32) -> String {
        format!("{}/api/users/{}", trim_base(&self.base_url), user_id)
    }

    pub async fn create(&self, user_id: u32, body: &Value) -> Result<(StatusCode, Value)> {
        let mut request = self.client.post(self.user_url(user_id)).json(body);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        tracing::debug!("📡 users: POST {}", self.user_url(user_id));
        read_json(request.send().await?).await
    }

    pub async fn fetch(&self, user_id: u32) -> Result<(StatusCode, Value)> {
        let mut request = self.client.get(self.user_url(user_id));
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        tracing::debug!("📡 users: GET {}", self.user_url(user_id));
        read_json(request.send().await?).await
    }

    pub async fn update(&self, user_id: u32, body: &Value) -> Result<(StatusCode, Value)> {
        let mut request = self.client.put(self.user_url(user_id)).json(body);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        tracing::debug!("📡 users: PUT {}", self.user_url(user_id));
        read_json(request.send().await?).await
    }

    pub async fn delete(&self, user_id: u32) -> Result<(StatusCode, Value)> {
        let mut request = self.client.delete(self.user_url(user_id));
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        tracing::debug!("📡 users: DELETE {}", self.user_url(user_id));
        read_json(request.send().await?).await
    }
}
