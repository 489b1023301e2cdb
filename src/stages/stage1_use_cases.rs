use tracing::info;

use crate::llm::{
    build_use_case_prompt, normalize, ExecutionError, NormalizeOptions, PromptExecutor,
};

/// Configuration for the use-case generation stage
#[derive(Debug, Clone, Default)]
pub struct UseCaseConfig {
    /// Collapse duplicate use-case lines
    pub dedup: bool,
}

/// Execute the use-case generation stage
///
/// Builds the brainstorming prompt around `summary` and normalizes the
/// response into one use case per line. An empty response yields the `NA`
/// sentinel rather than an empty list.
pub async fn generate_use_cases(
    executor: &dyn PromptExecutor,
    summary: &str,
    config: &UseCaseConfig,
) -> Result<Vec<String>, ExecutionError> {
    let prompt = build_use_case_prompt(summary);
    let response = executor.execute(&prompt).await?;

    let use_cases = normalize(
        &response,
        &NormalizeOptions {
            dedup: config.dedup,
            strip_prefixes: vec![],
        },
    );

    info!("Use-case stage produced {} use cases", use_cases.len());
    Ok(use_cases)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::NA;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct CannedExecutor {
        response: &'static str,
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl PromptExecutor for CannedExecutor {
        async fn execute(&self, prompt: &str) -> Result<String, ExecutionError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok(self.response.to_string())
        }
    }

    #[tokio::test]
    async fn test_splits_response_into_use_cases() {
        let executor = CannedExecutor {
            response: "Demand forecasting\nIn-store robotics\nCustomer support chatbots",
            prompts: Mutex::new(vec![]),
        };

        let use_cases = generate_use_cases(&executor, "A retailer.", &UseCaseConfig::default())
            .await
            .unwrap();

        assert_eq!(
            use_cases,
            vec![
                "Demand forecasting",
                "In-store robotics",
                "Customer support chatbots"
            ]
        );

        let prompts = executor.prompts.lock().unwrap();
        assert!(prompts[0].contains("A retailer."));
    }

    #[tokio::test]
    async fn test_empty_response_yields_na() {
        let executor = CannedExecutor {
            response: "",
            prompts: Mutex::new(vec![]),
        };

        let use_cases = generate_use_cases(&executor, "A retailer.", &UseCaseConfig::default())
            .await
            .unwrap();

        assert_eq!(use_cases, vec![NA]);
    }

    #[tokio::test]
    async fn test_dedup_collapses_repeats() {
        let executor = CannedExecutor {
            response: "Forecasting\nChatbots\nForecasting",
            prompts: Mutex::new(vec![]),
        };

        let use_cases = generate_use_cases(&executor, "A retailer.", &UseCaseConfig { dedup: true })
            .await
            .unwrap();

        assert_eq!(use_cases, vec!["Forecasting", "Chatbots"]);
    }
}
