use tracing::info;

use crate::llm::{build_resource_prompt, normalize_lines, ExecutionError, PromptExecutor};
use crate::models::ResourceMap;

/// Execute the resource collection stage
///
/// Runs one lookup per use case, in order, and collects the normalized link
/// lines under that use case. Lookups are independent of each other; the map
/// keys afterwards are exactly the distinct input use cases.
pub async fn find_relevant_resources(
    executor: &dyn PromptExecutor,
    use_cases: &[String],
) -> Result<ResourceMap, ExecutionError> {
    let mut resources = ResourceMap::new();

    for use_case in use_cases {
        let prompt = build_resource_prompt(use_case);
        let response = executor.execute(&prompt).await?;
        let links = normalize_lines(&response);

        info!(
            "Collected {} resource links for \"{}\"",
            links.len(),
            use_case
        );
        resources.insert(use_case.clone(), links);
    }

    Ok(resources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct EchoExecutor {
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl PromptExecutor for EchoExecutor {
        async fn execute(&self, prompt: &str) -> Result<String, ExecutionError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok(format!("https://example.com/{}", self.prompts.lock().unwrap().len()))
        }
    }

    #[tokio::test]
    async fn test_keys_match_input_use_cases() {
        let executor = EchoExecutor {
            prompts: Mutex::new(vec![]),
        };
        let use_cases = vec![
            "Demand forecasting".to_string(),
            "Customer support chatbots".to_string(),
        ];

        let resources = find_relevant_resources(&executor, &use_cases).await.unwrap();

        let keys: Vec<&str> = resources.use_cases().collect();
        assert_eq!(keys, vec!["Demand forecasting", "Customer support chatbots"]);
        assert_eq!(resources.len(), use_cases.len());

        let prompts = executor.prompts.lock().unwrap();
        assert!(prompts[0].contains("Demand forecasting"));
        assert!(prompts[1].contains("Customer support chatbots"));
    }

    #[tokio::test]
    async fn test_duplicate_use_cases_keep_unique_keys() {
        let executor = EchoExecutor {
            prompts: Mutex::new(vec![]),
        };
        let use_cases = vec![
            "Forecasting".to_string(),
            "Forecasting".to_string(),
        ];

        let resources = find_relevant_resources(&executor, &use_cases).await.unwrap();

        assert_eq!(resources.len(), 1);
        // The second lookup's links win, dictionary style
        assert_eq!(
            resources.get("Forecasting"),
            Some(&["https://example.com/2".to_string()][..])
        );
    }

    #[tokio::test]
    async fn test_empty_input_yields_empty_map() {
        let executor = EchoExecutor {
            prompts: Mutex::new(vec![]),
        };

        let resources = find_relevant_resources(&executor, &[]).await.unwrap();

        assert!(resources.is_empty());
        assert!(executor.prompts.lock().unwrap().is_empty());
    }
}
