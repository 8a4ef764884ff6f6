use crate::client::users::UsersClient;
use crate::core::check::{self, Expect};
use crate::core::context::FlowContext;
use crate::domain::model::FlowReport;
use crate::domain::ports::Flow;
use crate::flows::step_report;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::json;
use std::time::Instant;

/// Create, read, update and delete a single user resource. The four
/// steps are independent; each asserts an exact status code and, where
/// the service echoes the payload, the echoed fields.
pub struct UserCrudFlow {
    client: UsersClient,
    user_id: u32,
}

impl UserCrudFlow {
    pub const NAME: &'static str = "user-crud";

    pub fn new(client: UsersClient) -> Self {
        Self { client, user_id: 1 }
    }

    pub fn with_user_id(mut self, user_id: u32) -> Self {
        self.user_id = user_id;
        self
    }
}

#[async_trait]
impl Flow for UserCrudFlow {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn run(&self, _context: &mut FlowContext) -> Result<FlowReport> {
        let started_at = chrono::Utc::now();
        let flow_started = Instant::now();
        let mut steps = Vec::new();

        // Create
        let step = "create user";
        let step_started = Instant::now();
        let payload = json!({"name": "test123", "hobby": "Building toy models"});
        let (status, body) = self.client.create(self.user_id, &payload).await?;
        Expect::status(201).check(step, status)?;
        check::assert_str(step, &body, "name", "test123")?;
        check::assert_str(step, &body, "hobby", "Building toy models")?;
        steps.push(step_report(step, status, step_started));
        tracing::info!("✅ {}: {}", Self::NAME, step);

        // Read
        let step = "read user";
        let step_started = Instant::now();
        let (status, body) = self.client.fetch(self.user_id).await?;
        Expect::status(200).check(step, status)?;
        check::assert_count(step, &body, "data.id", i64::from(self.user_id))?;
        steps.push(step_report(step, status, step_started));
        tracing::info!("✅ {}: {}", Self::NAME, step);

        // Update
        let step = "update user";
        let step_started = Instant::now();
        let payload = json!({"name": "test123", "hobby": "Automating stuff"});
        let (status, body) = self.client.update(self.user_id, &payload).await?;
        Expect::status(200).check(step, status)?;
        check::assert_str(step, &body, "name", "test123")?;
        check::assert_str(step, &body, "hobby", "Automating stuff")?;
        steps.push(step_report(step, status, step_started));
        tracing::info!("✅ {}: {}", Self::NAME, step);

        // Delete
        let step = "delete user";
        let step_started = Instant::now();
        let (status, _body) = self.client.delete(self.user_id).await?;
        Expect::status(204).check(step, status)?;
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
