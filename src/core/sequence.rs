use crate::core::context::FlowContext;
use crate::domain::model::FlowReport;
use crate::domain::ports::Flow;
use crate::utils::error::Result;
use std::collections::HashMap;
use std::time::Instant;

/// Runs flows in order against a fresh context. The first flow failure
/// aborts the sequence; there are no retries.
pub struct FlowSequence {
    name: String,
    flows: Vec<Box<dyn Flow>>,
}

impl FlowSequence {
    pub fn new(name: String) -> Self {
        Self {
            name,
            flows: Vec::new(),
        }
    }

    pub fn add_flow(&mut self, flow: Box<dyn Flow>) {
        self.flows.push(flow);
    }

    pub fn len(&self) -> usize {
        self.flows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    pub async fn execute_all(&self) -> Result<Vec<FlowReport>> {
        let execution_id = format!(
            "{}_{}",
            self.name,
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        let mut context = FlowContext::new(execution_id);

        tracing::info!(
            "🔄 {}: Executing {} flow(s) sequentially",
            self.name,
            self.flows.len()
        );

        for flow in &self.flows {
            let started = Instant::now();
            tracing::info!("▶️  {}: Starting flow '{}'", self.name, flow.name());

            let report = match flow.run(&mut context).await {
                Ok(report) => report,
                Err(e) => {
                    tracing::error!("❌ {}: Flow '{}' failed: {}", self.name, flow.name(), e);
                    return Err(e);
                }
            };

            tracing::info!(
                "✅ {}: Flow '{}' passed {} step(s) in {:?}",
                self.name,
                flow.name(),
                report.steps.len(),
                started.elapsed()
            );
            context.add_report(report);
        }

        Ok(context.into_reports())
    }

    pub fn execution_summary(reports: &[FlowReport]) -> HashMap<String, serde_json::Value> {
        let total_steps: usize = reports.iter().map(|r| r.steps.len()).sum();
        let total_duration_ms: u128 = reports.iter().map(|r| r.duration.as_millis()).sum();
        let executed_flows: Vec<serde_json::Value> = reports
            .iter()
            .map(|r| serde_json::Value::String(r.flow_name.clone()))
            .collect();

        let mut summary = HashMap::new();
        summary.insert(
            "total_flows".to_string(),
            serde_json::Value::Number(reports.len().into()),
        );
        summary.insert(
            "total_steps".to_string(),
            serde_json::Value::Number(total_steps.into()),
        );
        summary.insert(
            "total_duration_ms".to_string(),
            serde_json::Value::Number((total_duration_ms as u64).into()),
        );
        summary.insert(
            "executed_flows".to_string(),
            serde_json::Value::Array(executed_flows),
        );
        summary
    }
}
