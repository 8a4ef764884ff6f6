use crate::domain::model::FlowReport;
use crate::utils::error::{CheckError, Result};
use std::collections::HashMap;

/// Execution context threaded through the flows of one run. The deck id
/// lives here explicitly instead of in process-wide state, so independent
/// runs never share it.
#[derive(Debug, Clone, Default)]
pub struct FlowContext {
    pub execution_id: String,
    reports: Vec<FlowReport>,
    shared_values: HashMap<String, serde_json::Value>,
    deck_id: Option<String>,
}

impl FlowContext {
    pub fn new(execution_id: String) -> Self {
        Self {
            execution_id,
            ..Default::default()
        }
    }

    /// The deck id captured by an earlier step. Erroring here means a
    /// step referenced the deck before the create step ran.
    pub fn deck_id(&self) -> Result<&str> {
        self.deck_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| CheckError::MissingStateError {
                field: "deck_id".to_string(),
            })
    }

    pub fn set_deck_id(&mut self, deck_id: String) {
        self.deck_id = Some(deck_id);
    }

    pub fn clear_deck_id(&mut self) {
        self.deck_id = None;
    }

    pub fn add_report(&mut self, report: FlowReport) {
        self.reports.push(report);
    }

    pub fn last_report(&self) -> Option<&FlowReport> {
        self.reports.last()
    }

    pub fn report_by_name(&self, flow_name: &str) -> Option<&FlowReport> {
        self.reports.iter().find(|r| r.flow_name == flow_name)
    }

    pub fn reports(&self) -> &[FlowReport] {
        &self.reports
    }

    pub fn into_reports(self) -> Vec<FlowReport> {
        self.reports
    }

    pub fn set_shared(&mut self, key: String, value: serde_json::Value) {
        self.shared_values.insert(key, value);
    }

    pub fn shared(&self, key: &str) -> Option<&serde_json::Value> {
        self.shared_values.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::StepReport;
    use std::time::Duration;

    fn report(name: &str) -> FlowReport {
        FlowReport {
            flow_name: name.to_string(),
            steps: vec![StepReport {
                name: "step".to_string(),
                status: 200,
                duration: Duration::from_millis(1),
            }],
            duration: Duration::from_millis(1),
            started_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_deck_id_missing_before_capture() {
        let context = FlowContext::new("run_1".to_string());
        let err = context.deck_id().unwrap_err();
        assert!(matches!(err, CheckError::MissingStateError { .. }));
    }

    #[test]
    fn test_deck_id_round_trip() {
        let mut context = FlowContext::new("run_1".to_string());
        context.set_deck_id("3p40paa87x90".to_string());
        assert_eq!(context.deck_id().unwrap(), "3p40paa87x90");

        context.clear_deck_id();
        assert!(context.deck_id().is_err());
    }

    #[test]
    fn test_empty_deck_id_counts_as_missing() {
        let mut context = FlowContext::new("run_1".to_string());
        context.set_deck_id(String::new());
        assert!(context.deck_id().is_err());
    }

    #[test]
    fn test_report_accessors() {
        let mut context = FlowContext::new("run_1".to_string());
        context.add_report(report("user-crud"));
        context.add_report(report("deck"));

        assert_eq!(context.last_report().unwrap().flow_name, "deck");
        assert!(context.report_by_name("user-crud").is_some());
        assert!(context.report_by_name("nonexistent").is_none());
        assert_eq!(context.reports().len(), 2);
    }

    #[test]
    fn test_shared_values() {
        let mut context = FlowContext::new("run_1".to_string());
        context.set_shared("key".to_string(), serde_json::json!(42));
        assert_eq!(context.shared("key").unwrap(), &serde_json::json!(42));
        assert!(context.shared("missing").is_none());
    }
}
