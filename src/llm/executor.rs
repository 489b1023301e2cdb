use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, warn};

use crate::llm::client::{ChatMessage, ContentBlock, ModelClient, ToolDefinition};
use crate::llm::prompts::AGENT_SYSTEM_PROMPT;
use crate::llm::tools::{Tool, ToolError};

/// Failure modes of an agent execution
#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("model request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("model API error: {status} - {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("no text content in model response")]
    EmptyResponse,
    #[error("model requested unknown tool: {0}")]
    UnknownTool(String),
    #[error("tool call failed: {0}")]
    Tool(#[from] ToolError),
    #[error("no final answer after {0} agent turns")]
    TurnLimit(usize),
}

/// The model-invocation capability each stage depends on
///
/// Implementations wrap a model plus a toolset fixed at construction and turn
/// one formatted prompt into one text response. Callers are responsible for
/// prompt construction; no validation is applied to the prompt or the
/// response.
#[async_trait]
pub trait PromptExecutor: Send + Sync {
    /// Execute a fully-formatted prompt and return the agent's final text
    async fn execute(&self, prompt: &str) -> Result<String, ExecutionError>;
}

/// Options for [`AgentExecutor`]
#[derive(Debug, Clone)]
pub struct ExecutorOptions {
    /// Maximum model round-trips before giving up
    pub max_turns: usize,
    /// Report unknown tools and undecodable tool inputs back to the model
    /// as error results instead of failing the run
    pub recover_parse_errors: bool,
}

impl Default for ExecutorOptions {
    fn default() -> Self {
        Self {
            max_turns: 8,
            recover_parse_errors: false,
        }
    }
}

impl ExecutorOptions {
    /// Options with parse-error recovery enabled
    pub fn recovering() -> Self {
        Self {
            recover_parse_errors: true,
            ..Self::default()
        }
    }
}

/// Executes prompts through a model-driven agent loop
///
/// Each call sends the prompt together with the toolset's definitions,
/// dispatches any requested tool calls, feeds the results back, and repeats
/// until the model produces a final text answer or the turn limit is hit.
pub struct AgentExecutor {
    client: ModelClient,
    tools: Vec<Box<dyn Tool>>,
    options: ExecutorOptions,
}

impl AgentExecutor {
    pub fn new(client: ModelClient, tools: Vec<Box<dyn Tool>>, options: ExecutorOptions) -> Self {
        Self {
            client,
            tools,
            options,
        }
    }

    fn tool_definitions(&self) -> Vec<ToolDefinition> {
        self.tools
            .iter()
            .map(|tool| ToolDefinition {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
                input_schema: tool.input_schema(),
            })
            .collect()
    }

    async fn run_agent_loop(&self, prompt: &str) -> Result<String, ExecutionError> {
        let tool_definitions = self.tool_definitions();
        let mut messages = vec![ChatMessage::user_text(prompt)];

        for turn in 0..self.options.max_turns {
            let response = self
                .client
                .complete(AGENT_SYSTEM_PROMPT, &messages, &tool_definitions)
                .await?;

            if response.wants_tools() {
                let mut results = Vec::new();
                for (id, name, input) in response.tool_uses() {
                    results.push(self.dispatch_tool(id, name, input).await?);
                }

                debug!(
                    "Agent turn {}: dispatched {} tool calls",
                    turn,
                    results.len()
                );
                messages.push(ChatMessage::assistant(response.content.clone()));
                messages.push(ChatMessage::tool_results(results));
                continue;
            }

            if !response.has_text() {
                return Err(ExecutionError::EmptyResponse);
            }
            return Ok(response.text());
        }

        Err(ExecutionError::TurnLimit(self.options.max_turns))
    }

    /// Run one requested tool call and wrap the outcome as a tool result
    ///
    /// Unknown tools and undecodable inputs either fail the run or, with
    /// recovery enabled, come back to the model as error results so it can
    /// correct itself. Tool transport failures always fail the run.
    async fn dispatch_tool(
        &self,
        id: &str,
        name: &str,
        input: &serde_json::Value,
    ) -> Result<ContentBlock, ExecutionError> {
        let Some(tool) = self.tools.iter().find(|tool| tool.name() == name) else {
            if !self.options.recover_parse_errors {
                return Err(ExecutionError::UnknownTool(name.to_string()));
            }
            warn!("Model requested unknown tool \"{}\"", name);
            return Ok(ContentBlock::ToolResult {
                tool_use_id: id.to_string(),
                content: format!("No tool named \"{}\" is available.", name),
                is_error: true,
            });
        };

        match tool.call(input).await {
            Ok(output) => Ok(ContentBlock::ToolResult {
                tool_use_id: id.to_string(),
                content: output,
                is_error: false,
            }),
            Err(ToolError::InvalidInput(reason)) if self.options.recover_parse_errors => {
                warn!("Recovering from invalid \"{}\" input: {}", name, reason);
                Ok(ContentBlock::ToolResult {
                    tool_use_id: id.to_string(),
                    content: format!("Invalid tool input: {}. Fix the arguments and retry.", reason),
                    is_error: true,
                })
            }
            Err(e) => Err(ExecutionError::Tool(e)),
        }
    }
}

#[async_trait]
impl PromptExecutor for AgentExecutor {
    async fn execute(&self, prompt: &str) -> Result<String, ExecutionError> {
        self.run_agent_loop(prompt).await
    }
}
