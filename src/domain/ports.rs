use crate::core::context::FlowContext;
use crate::domain::model::FlowReport;
use crate::utils::error::Result;
use async_trait::async_trait;

/// A named, ordered sequence of HTTP steps. Steps run strictly
/// sequentially and the first failed assertion aborts the rest.
#[async_trait]
pub trait Flow: Send + Sync {
    fn name(&self) -> &str;

    async fn run(&self, context: &mut FlowContext) -> Result<FlowReport>;
}
