use tracing::info;

use crate::llm::{build_research_prompt, ExecutionError, PromptExecutor};

/// Configuration for the research stage
#[derive(Debug, Clone)]
pub struct ResearchConfig {
    /// Ask for the expanded company profile (business model, products,
    /// markets, goals, trends) instead of the short summary prompt
    pub detailed: bool,
}

impl Default for ResearchConfig {
    fn default() -> Self {
        Self { detailed: true }
    }
}

/// Execute the research stage
///
/// Builds the research prompt for `subject` and returns the agent's summary
/// text unmodified. Downstream stages apply their own normalization.
pub async fn gather_information(
    executor: &dyn PromptExecutor,
    subject: &str,
    config: &ResearchConfig,
) -> Result<String, ExecutionError> {
    let prompt = build_research_prompt(subject, config.detailed);
    let summary = executor.execute(&prompt).await?;

    info!(
        "Research stage produced {} characters for \"{}\"",
        summary.len(),
        subject
    );
    Ok(summary)
}
