use tracing::info;

use crate::llm::{
    build_solution_prompt, normalize, ExecutionError, NormalizeOptions, PromptExecutor,
    SOLUTION_ANSWER_PREFIX,
};

/// Configuration for the solution proposal stage
#[derive(Debug, Clone)]
pub struct SolutionConfig {
    /// Boilerplate phrases stripped from the response before splitting
    pub strip_prefixes: Vec<String>,
}

impl Default for SolutionConfig {
    fn default() -> Self {
        Self {
            strip_prefixes: vec![SOLUTION_ANSWER_PREFIX.to_string()],
        }
    }
}

/// Execute the solution proposal stage
///
/// Builds a prompt from the summary and the joined use cases, strips known
/// boilerplate from the response, and normalizes it into one solution per
/// line. The executor for this stage should be configured to recover from
/// tool-input parse errors rather than failing the run.
pub async fn propose_genai_solutions(
    executor: &dyn PromptExecutor,
    use_cases: &[String],
    summary: &str,
    config: &SolutionConfig,
) -> Result<Vec<String>, ExecutionError> {
    let prompt = build_solution_prompt(summary, use_cases);
    let response = executor.execute(&prompt).await?;

    let solutions = normalize(
        &response,
        &NormalizeOptions {
            dedup: false,
            strip_prefixes: config.strip_prefixes.clone(),
        },
    );

    info!("Solution stage produced {} proposals", solutions.len());
    Ok(solutions)
}
