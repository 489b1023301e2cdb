use std::fmt;

use thiserror::Error;
use tracing::info;

use crate::llm::{ExecutionError, PromptExecutor};
use crate::models::ResearchReport;
use crate::stages::{
    find_relevant_resources, gather_information, generate_use_cases, propose_genai_solutions,
    ResearchConfig, SolutionConfig, UseCaseConfig,
};

/// The pipeline stage a failure came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageName {
    Research,
    UseCases,
    Resources,
    Solutions,
}

impl fmt::Display for StageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StageName::Research => "research",
            StageName::UseCases => "use-case generation",
            StageName::Resources => "resource collection",
            StageName::Solutions => "solution proposal",
        };
        write!(f, "{}", name)
    }
}

/// Failure modes of a pipeline run
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The subject was empty or whitespace-only; nothing was executed
    #[error("subject must not be empty")]
    EmptySubject,

    /// A stage's agent execution failed, aborting the run
    #[error("{stage} stage failed: {source}")]
    Stage {
        stage: StageName,
        #[source]
        source: ExecutionError,
    },
}

/// Configuration for a full pipeline run
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    pub research: ResearchConfig,
    pub use_cases: UseCaseConfig,
    pub solutions: SolutionConfig,
}

fn stage_error(stage: StageName) -> impl FnOnce(ExecutionError) -> PipelineError {
    move |source| PipelineError::Stage { stage, source }
}

/// Run the full research pipeline for a subject
///
/// Stages run strictly in sequence: research, use-case generation, resource
/// collection, solution proposal. The use-case list feeds both of the last
/// two stages; no stage output is reused across runs.
///
/// `solution_executor` is the executor for the solution stage, typically
/// configured to recover from tool-input parse errors; every other stage uses
/// `executor`. The subject is validated before any executor is invoked.
pub async fn run_pipeline(
    executor: &dyn PromptExecutor,
    solution_executor: &dyn PromptExecutor,
    subject: &str,
    config: &PipelineConfig,
) -> Result<ResearchReport, PipelineError> {
    if subject.trim().is_empty() {
        return Err(PipelineError::EmptySubject);
    }

    info!("Stage 1: Researching \"{}\"...", subject);
    let summary = gather_information(executor, subject, &config.research)
        .await
        .map_err(stage_error(StageName::Research))?;

    info!("Stage 2: Generating use cases...");
    let use_cases = generate_use_cases(executor, &summary, &config.use_cases)
        .await
        .map_err(stage_error(StageName::UseCases))?;

    info!("Stage 3: Collecting resources for {} use cases...", use_cases.len());
    let resources = find_relevant_resources(executor, &use_cases)
        .await
        .map_err(stage_error(StageName::Resources))?;

    info!("Stage 4: Proposing GenAI solutions...");
    let solutions =
        propose_genai_solutions(solution_executor, &use_cases, &summary, &config.solutions)
            .await
            .map_err(stage_error(StageName::Solutions))?;

    let report = ResearchReport::new(subject, summary, use_cases, resources, solutions);
    info!(
        "Pipeline complete: {} use cases, {} resource entries, {} solutions (run {})",
        report.use_cases.len(),
        report.resources.len(),
        report.solutions.len(),
        report.run_id
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::NA;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Replays a fixed sequence of responses, one per execute call
    struct ScriptedExecutor {
        responses: Mutex<VecDeque<&'static str>>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedExecutor {
        fn new(responses: &[&'static str]) -> Self {
            Self {
                responses: Mutex::new(responses.iter().copied().collect()),
                calls: Mutex::new(vec![]),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl PromptExecutor for ScriptedExecutor {
        async fn execute(&self, prompt: &str) -> Result<String, ExecutionError> {
            self.calls.lock().unwrap().push(prompt.to_string());
            let response = self
                .responses
                .lock()
                .unwrap()
                .pop_front()
                .expect("scripted executor ran out of responses");
            Ok(response.to_string())
        }
    }

    #[tokio::test]
    async fn test_full_run_shape() {
        let executor = ScriptedExecutor::new(&[
            "Tesla is an electric vehicle and clean energy company.",
            "Battery fault prediction\nAutonomous routing",
            "Battery Dataset: https://example.com/battery",
            "Routing Papers: https://example.com/routing",
        ]);
        let solution_executor =
            ScriptedExecutor::new(&["- Service manual assistant\n- Synthetic driving scenes"]);

        let report = run_pipeline(
            &executor,
            &solution_executor,
            "Tesla",
            &PipelineConfig::default(),
        )
        .await
        .unwrap();

        assert_eq!(report.subject, "Tesla");
        assert!(!report.summary.is_empty());
        assert_eq!(report.use_cases.len(), 2);
        assert_eq!(report.resources.len(), report.use_cases.len());
        let keys: Vec<&str> = report.resources.use_cases().collect();
        assert_eq!(
            keys,
            vec!["Battery fault prediction", "Autonomous routing"]
        );
        assert_eq!(report.solutions.len(), 2);

        // research + use cases + one lookup per use case on the main executor
        assert_eq!(executor.call_count(), 4);
        assert_eq!(solution_executor.call_count(), 1);
    }

    #[tokio::test]
    async fn test_empty_subject_fails_before_any_execution() {
        let executor = ScriptedExecutor::new(&[]);
        let solution_executor = ScriptedExecutor::new(&[]);

        let result = run_pipeline(
            &executor,
            &solution_executor,
            "   ",
            &PipelineConfig::default(),
        )
        .await;

        assert!(matches!(result, Err(PipelineError::EmptySubject)));
        assert_eq!(executor.call_count(), 0);
        assert_eq!(solution_executor.call_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_use_case_response_propagates_na() {
        let executor = ScriptedExecutor::new(&[
            "Tesla is an electric vehicle and clean energy company.",
            "",
            "No results found.",
        ]);
        let solution_executor = ScriptedExecutor::new(&["- Knowledge base assistant"]);

        let report = run_pipeline(
            &executor,
            &solution_executor,
            "Tesla",
            &PipelineConfig::default(),
        )
        .await
        .unwrap();

        assert_eq!(report.use_cases, vec![NA]);
        let keys: Vec<&str> = report.resources.use_cases().collect();
        assert_eq!(keys, vec![NA]);
    }

    #[tokio::test]
    async fn test_stage_failure_names_the_stage() {
        struct FailingExecutor;

        #[async_trait]
        impl PromptExecutor for FailingExecutor {
            async fn execute(&self, _prompt: &str) -> Result<String, ExecutionError> {
                Err(ExecutionError::EmptyResponse)
            }
        }

        let executor = FailingExecutor;
        let solution_executor = FailingExecutor;

        let result = run_pipeline(
            &executor,
            &solution_executor,
            "Tesla",
            &PipelineConfig::default(),
        )
        .await;

        match result {
            Err(PipelineError::Stage { stage, .. }) => assert_eq!(stage, StageName::Research),
            other => panic!("expected a stage error, got {:?}", other.map(|r| r.subject)),
        }
    }
}
